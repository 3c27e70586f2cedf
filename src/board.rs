use std::{
    fmt::Display,
    ops::{Index, IndexMut, Not},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum Player {
    #[default]
    X,
    O,
}

impl Not for Player {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

// row 1: 0 1 2
// row 2: 3 4 5
// row 3: 6 7 8
//        a b c : file
#[derive(Debug, Default, PartialEq, Eq, PartialOrd, Clone, Copy)]
pub struct CellId(u8);
impl CellId {
    pub const A1: CellId = CellId(0);
    pub const B1: CellId = CellId(1);
    pub const C1: CellId = CellId(2);
    pub const A2: CellId = CellId(3);
    pub const B2: CellId = CellId(4);
    pub const C2: CellId = CellId(5);
    pub const A3: CellId = CellId(6);
    pub const B3: CellId = CellId(7);
    pub const C3: CellId = CellId(8);

    pub const ALL: [CellId; 9] = [
        CellId::A1,
        CellId::B1,
        CellId::C1,
        CellId::A2,
        CellId::B2,
        CellId::C2,
        CellId::A3,
        CellId::B3,
        CellId::C3,
    ];

    pub const fn new(val: u8) -> Option<Self> {
        if val >= 9 {
            None
        } else {
            Some(Self(val))
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("not a cell coordinate: {0:?}")]
pub struct ParseCellError(String);

impl FromStr for CellId {
    type Err = ParseCellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "a1" | "A1" => Ok(CellId::A1),
            "a2" | "A2" => Ok(CellId::A2),
            "a3" | "A3" => Ok(CellId::A3),
            "b1" | "B1" => Ok(CellId::B1),
            "b2" | "B2" => Ok(CellId::B2),
            "b3" | "B3" => Ok(CellId::B3),
            "c1" | "C1" => Ok(CellId::C1),
            "c2" | "C2" => Ok(CellId::C2),
            "c3" | "C3" => Ok(CellId::C3),
            _ => Err(ParseCellError(s.to_owned())),
        }
    }
}

/// The 8 winning lines, scanned in this order: rows top to bottom,
/// columns left to right, main diagonal then anti-diagonal.
pub const WIN_LINES: [[CellId; 3]; 8] = [
    [CellId::A1, CellId::B1, CellId::C1],
    [CellId::A2, CellId::B2, CellId::C2],
    [CellId::A3, CellId::B3, CellId::C3],
    [CellId::A1, CellId::A2, CellId::A3],
    [CellId::B1, CellId::B2, CellId::B3],
    [CellId::C1, CellId::C2, CellId::C3],
    [CellId::A1, CellId::B2, CellId::C3],
    [CellId::C1, CellId::B2, CellId::A3],
];

#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct Board {
    tiles: [Option<Player>; 9],
}

impl Board {
    pub fn mark(&mut self, cell: CellId, player: Player) {
        self[cell] = Some(player);
    }

    pub fn clear(&mut self) {
        self.tiles = [None; 9];
    }

    pub fn is_full(&self) -> bool {
        self.tiles.iter().all(Option::is_some)
    }

    /// The mark owning the first complete line in scan order, if any.
    pub fn winner(&self) -> Option<Player> {
        for line in WIN_LINES {
            let [a, b, c] = line.map(|cell| self[cell]);
            let (Some(a), Some(b), Some(c)) = (a, b, c) else {
                continue;
            };
            if a == b && b == c {
                return Some(a);
            }
        }
        None
    }
}

impl Index<CellId> for Board {
    type Output = Option<Player>;

    fn index(&self, cell: CellId) -> &Self::Output {
        &self.tiles[cell.0 as usize]
    }
}

impl IndexMut<CellId> for Board {
    fn index_mut(&mut self, cell: CellId) -> &mut Self::Output {
        &mut self.tiles[cell.0 as usize]
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.tiles.chunks_exact(3).enumerate() {
            write!(f, "{}│ ", i + 1)?;
            for tile in row {
                match tile {
                    Some(player) => write!(f, "{player}")?,
                    None => write!(f, "-")?,
                };
            }

            writeln!(f)?;
        }
        write!(f, " ╰─────\n   abc")?;
        Ok(())
    }
}

use serde::{Deserialize, Serialize};

use crate::board::{Board, CellId, Player};
use crate::view::View;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum Outcome {
    Ongoing,
    Win(Player),
    Draw,
}

/// All game state and rules live here. Input sources feed it moves and
/// resets; it pushes every visible consequence out through a [`View`].
#[derive(Debug, Clone)]
pub struct Engine {
    board: Board,
    current: Player,
    active: bool,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    pub fn new() -> Self {
        Self {
            board: Board::default(),
            current: Player::X,
            active: true,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Classifies the board without touching any state.
    pub fn outcome(&self) -> Outcome {
        if let Some(player) = self.board.winner() {
            Outcome::Win(player)
        } else if self.board.is_full() {
            Outcome::Draw
        } else {
            Outcome::Ongoing
        }
    }

    /// Plays the current player's mark at `cell`. A move on an occupied
    /// cell, or after the game has ended, changes nothing and pushes
    /// nothing to the view.
    pub fn apply_move(&mut self, cell: CellId, view: &mut dyn View) -> Outcome {
        if !self.active || self.board[cell].is_some() {
            return self.outcome();
        }

        self.board.mark(cell, self.current);
        view.render_mark(cell, self.current);

        // winner attribution relies on checking before the turn toggle
        let outcome = self.check_terminal(view);
        if outcome == Outcome::Ongoing {
            self.current = !self.current;
            view.set_status_text(&format!("Player {}'s Turn", self.current));
        }
        outcome
    }

    fn check_terminal(&mut self, view: &mut dyn View) -> Outcome {
        let outcome = self.outcome();
        match outcome {
            Outcome::Win(player) => {
                self.active = false;
                tracing::info!(%player, "game over");
                view.show_terminal_message(&format!("Player {player} Wins!"));
            }
            Outcome::Draw => {
                self.active = false;
                tracing::info!("game over: draw");
                view.show_terminal_message("It's a Draw!");
            }
            Outcome::Ongoing => {}
        }
        outcome
    }

    /// Starts a fresh game: empty board, X to move, moves accepted again.
    /// Valid from any state and always lands in the same one.
    pub fn reset(&mut self, view: &mut dyn View) {
        self.board.clear();
        self.current = Player::X;
        self.active = true;
        tracing::debug!("board reset");

        for cell in CellId::ALL {
            view.clear_cell(cell);
        }
        view.hide_terminal_message();
        view.show_status_surface();
        view.set_status_text("Player X's Turn");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NullView;

    impl View for NullView {
        fn render_mark(&mut self, _: CellId, _: Player) {}
        fn clear_cell(&mut self, _: CellId) {}
        fn set_status_text(&mut self, _: &str) {}
        fn show_terminal_message(&mut self, _: &str) {}
        fn hide_terminal_message(&mut self) {}
        fn show_status_surface(&mut self) {}
    }

    #[test]
    fn x_moves_first() {
        let engine = Engine::new();
        assert_eq!(engine.current_player(), Player::X);
        assert!(engine.is_active());
        assert_eq!(engine.outcome(), Outcome::Ongoing);
    }

    #[test]
    fn winner_is_the_player_who_just_moved() {
        let mut engine = Engine::new();
        let mut view = NullView;
        // X: a1 b1 c1, O: a2 b2
        for cell in [CellId::A1, CellId::A2, CellId::B1, CellId::B2] {
            engine.apply_move(cell, &mut view);
        }
        let outcome = engine.apply_move(CellId::C1, &mut view);
        assert_eq!(outcome, Outcome::Win(Player::X));
        // no toggle after the winning move
        assert_eq!(engine.current_player(), Player::X);
        assert!(!engine.is_active());
    }

    #[test]
    fn ended_game_ignores_moves() {
        let mut engine = Engine::new();
        let mut view = NullView;
        for cell in [
            CellId::A1,
            CellId::A2,
            CellId::B1,
            CellId::B2,
            CellId::C1,
        ] {
            engine.apply_move(cell, &mut view);
        }
        assert!(!engine.is_active());

        let before = engine.board().clone();
        engine.apply_move(CellId::C3, &mut view);
        assert_eq!(engine.board(), &before);
        assert_eq!(engine.outcome(), Outcome::Win(Player::X));
    }

    #[test]
    fn reset_revives_an_ended_game() {
        let mut engine = Engine::new();
        let mut view = NullView;
        for cell in [
            CellId::A1,
            CellId::A2,
            CellId::B1,
            CellId::B2,
            CellId::C1,
        ] {
            engine.apply_move(cell, &mut view);
        }
        engine.reset(&mut view);
        assert_eq!(engine.board(), &Board::default());
        assert_eq!(engine.current_player(), Player::X);
        assert!(engine.is_active());
    }
}

use std::{
    io::{self, Write},
    str::FromStr,
};

use crate::board::CellId;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum InputEvent {
    Cell(CellId),
    Reset,
    Quit,
}

/// Where moves come from. Implementations own the mapping from raw input
/// to a board cell; the engine trusts the `CellId` it is handed.
pub trait InputSource {
    /// The next event, or `None` once the source is exhausted.
    fn next_event(&mut self) -> anyhow::Result<Option<InputEvent>>;
}

/// Reads commands from stdin, one per line: a cell coordinate like `b2`,
/// `reset`, or `q`/`quit`. Re-prompts on anything unparseable.
#[derive(Debug, Default)]
pub struct TermInput {
    input: String,
}

impl InputSource for TermInput {
    fn next_event(&mut self) -> anyhow::Result<Option<InputEvent>> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        loop {
            self.input.clear();
            print!("> ");
            stdout.flush()?;
            if stdin.read_line(&mut self.input)? == 0 {
                return Ok(None);
            }

            match self.input.trim() {
                "" => {}
                "q" | "quit" => return Ok(Some(InputEvent::Quit)),
                "reset" => return Ok(Some(InputEvent::Reset)),
                raw => match CellId::from_str(raw) {
                    Ok(cell) => return Ok(Some(InputEvent::Cell(cell))),
                    Err(_) => println!("Invalid input! Try again."),
                },
            }
        }
    }
}

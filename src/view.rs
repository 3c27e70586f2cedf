use crate::board::{Board, CellId, Player};

/// Rendering surface the engine pushes state changes to. Implementations
/// only reflect what they are told; they never reach back into the engine.
pub trait View {
    fn render_mark(&mut self, cell: CellId, player: Player);
    fn clear_cell(&mut self, cell: CellId);
    fn set_status_text(&mut self, text: &str);
    fn show_terminal_message(&mut self, text: &str);
    fn hide_terminal_message(&mut self);
    fn show_status_surface(&mut self);
}

/// Draws to stdout. Keeps its own mirror of the cells so each push can
/// redraw the whole grid; the terminal is append-only, so "hide" calls
/// only update the mirror and the next draw omits the banner.
#[derive(Debug, Default)]
pub struct TermView {
    cells: Board,
}

impl View for TermView {
    fn render_mark(&mut self, cell: CellId, player: Player) {
        self.cells.mark(cell, player);
        println!("\n{}\n", self.cells);
    }

    fn clear_cell(&mut self, cell: CellId) {
        self.cells[cell] = None;
    }

    fn set_status_text(&mut self, text: &str) {
        println!("{text}");
    }

    fn show_terminal_message(&mut self, text: &str) {
        println!("\n═══ {text} ═══\n");
    }

    fn hide_terminal_message(&mut self) {}

    fn show_status_surface(&mut self) {
        println!("\n{}\n", self.cells);
    }
}

use crate::engine::Engine;
use crate::input::{InputEvent, InputSource};
use crate::view::View;

/// Runs one interactive session: pulls events from the input source one
/// at a time and dispatches each fully before reading the next.
pub fn play(input: &mut dyn InputSource, view: &mut dyn View) -> anyhow::Result<()> {
    let mut engine = Engine::new();
    tracing::info!("session started");

    println!("Enter a cell like b2, 'reset' to start over, 'q' to quit.");
    engine.reset(view);

    while let Some(event) = input.next_event()? {
        match event {
            InputEvent::Cell(cell) => {
                engine.apply_move(cell, view);
            }
            InputEvent::Reset => engine.reset(view),
            InputEvent::Quit => break,
        }
    }

    tracing::info!("session ended");
    Ok(())
}

use noughts::{input::TermInput, term, view::TermView};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // logs go to stderr so they never interleave with the board on stdout
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut input = TermInput::default();
    let mut view = TermView::default();
    term::play(&mut input, &mut view)
}

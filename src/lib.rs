pub mod board;
pub mod engine;
pub mod input;
pub mod term;
pub mod view;

pub mod canvas;
pub mod cli;

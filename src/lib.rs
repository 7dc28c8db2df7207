pub mod cli;
pub mod commands;
pub mod quasi;
pub mod utils;

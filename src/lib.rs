pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod input;
pub mod interactive;

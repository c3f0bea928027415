pub mod calendar;
pub mod cli;
pub mod error;
pub mod grid;
pub mod model;
pub mod preview;
pub mod prompt;
pub mod schedule;
pub mod script;

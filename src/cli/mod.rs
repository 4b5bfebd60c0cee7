pub mod command;
pub mod dump;

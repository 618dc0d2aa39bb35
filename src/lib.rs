pub mod alphabet;
pub mod command;
pub mod error;
pub mod wordlist;

pub mod output;
pub mod parse;
pub mod query;
pub mod session;

pub use output::Output;
pub use parse::{parse, Command};
pub use query::Query;

pub mod parse;
pub mod query;

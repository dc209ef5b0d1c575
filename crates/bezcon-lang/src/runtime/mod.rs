pub mod fields;
pub mod resolver;
pub mod interpreter;

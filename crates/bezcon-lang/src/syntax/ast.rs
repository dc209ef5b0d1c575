use crate::syntax::token::{CommandType, Frame, ParamKey};

/// A parameter with its number already converted: angles in radians
/// (y-down, so negated), everything else multiplied by the unit scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Param {
    pub key: ParamKey,
    pub frame: Frame,
    pub value: f64,
}

/// One parsed command. Frame resolution against the current point happens at
/// execution time, see `runtime::fields`.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    /// Raw text between semicolons, kept for error messages.
    pub text: String,
    /// `None` when the type letter was omitted.
    pub ty: Option<CommandType>,
    pub params: Vec<Param>,
}

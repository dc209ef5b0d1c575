pub mod syntax;
pub mod types;
pub mod runtime;
pub mod error;
pub mod options;

pub use error::{Error, ErrorCode, OptionsError};
pub use options::{DEFAULT_UNITS, Options};
pub use runtime::fields::Fields;
pub use runtime::interpreter::{Interpreter, Report};
pub use syntax::ast::{Command, Param};
pub use syntax::parser::parse_all;
pub use syntax::token::{CommandKind, CommandType, Frame, ParamKey};
pub use types::path::{Path, Segment, Subpath};
pub use types::point::Point;

// ─── Public API ───────────────────────────────────────────────────────────────

/// Runs `source` on top of `existing` (or a new path seeded at `fallback`)
/// and applies the silent policy from `options`.
pub fn draw(source: &str, options: &Options, existing: Option<Path>, fallback: Point) -> Result<Path, Error> {
    Interpreter::from_existing(existing, fallback)
        .run(source, options.units)
        .finish(options)
}

//! Command interpreter. Runs a `;`-separated command string against a path,
//! one command at a time: parse, bind fields, resolve endpoint, emit segment.
//! The first failing command stops the run; earlier segments stay.

use tracing::{debug, warn};

use crate::error::Error;
use crate::options::Options;
use crate::runtime::fields::Fields;
use crate::runtime::resolver::resolve;
use crate::syntax::ast::Command;
use crate::syntax::parser::{Parser, split};
use crate::syntax::token::{CommandKind, CommandType};
use crate::types::path::Path;
use crate::types::point::Point;

// ─── Interpreter ──────────────────────────────────────────────────────────────

pub struct Interpreter {
    path: Path,
    /// Type of the previous command, reused when a command omits its letter.
    last: Option<CommandType>,
}

impl Interpreter {
    /// Continue `path`. An empty path is seeded at the origin.
    pub fn new(path: Path) -> Self {
        Self::from_existing(Some(path), Point::ORIGIN)
    }

    /// Start a fresh single-point path at `start`.
    pub fn seeded(start: Point) -> Self {
        Self { path: Path::seeded(start), last: None }
    }

    /// Continue `path` when it has an anchor to continue from, otherwise seed
    /// a new path at `fallback` (typically the viewport center).
    pub fn from_existing(path: Option<Path>, fallback: Point) -> Self {
        match path {
            Some(path) if !path.is_empty() => Self { path, last: None },
            _ => Self::seeded(fallback),
        }
    }

    pub fn current_point(&self) -> Point {
        // Never empty: every constructor seeds at least one subpath.
        self.path.current_point().unwrap_or(Point::ORIGIN)
    }

    pub fn path(&self) -> &Path { &self.path }

    pub fn into_path(self) -> Path { self.path }

    pub fn last_command(&self) -> Option<CommandType> { self.last }

    // ─── Entry points ─────────────────────────────────────────────────────────

    /// Runs every command in `source`, stopping at the first failure.
    pub fn execute(&mut self, source: &str, units: f64) -> Result<(), Error> {
        for text in split(source) {
            self.step(text, units)?;
        }
        Ok(())
    }

    /// Runs `source` to completion and packages the outcome.
    pub fn run(mut self, source: &str, units: f64) -> Report {
        let error = self.execute(source, units).err();
        Report { path: self.path, error }
    }

    /// Parses and executes the text of a single command.
    pub fn step(&mut self, text: &str, units: f64) -> Result<(), Error> {
        let cmd = Parser::new(text, units).parse()?;
        self.exec(&cmd)
    }

    pub fn exec(&mut self, cmd: &Command) -> Result<(), Error> {
        let ty = cmd.ty.or(self.last);
        self.last = ty;
        let Some(ty) = ty else {
            debug!(command = %cmd.text, "no command type yet, skipping");
            return Ok(());
        };

        let current = self.current_point();
        let fields = Fields::bind(&cmd.params, current);
        let end = resolve(ty.kind, fields, current, &cmd.text)?;

        match ty.kind {
            CommandKind::Move => self.path.move_to(end),
            _ => self.path.line_to(end),
        }
        debug!(command = %cmd.text, kind = ?ty.kind, from = %current, to = %end, "executed");
        Ok(())
    }
}

// ─── Report ───────────────────────────────────────────────────────────────────

/// Outcome of a full run: the path as far as it got, and the failure that
/// stopped it, if any.
#[derive(Debug, Clone)]
pub struct Report {
    pub path: Path,
    pub error: Option<Error>,
}

impl Report {
    pub fn is_ok(&self) -> bool { self.error.is_none() }

    pub fn current_point(&self) -> Option<Point> { self.path.current_point() }

    /// Applies the silent policy: a silent run hands back the partial path,
    /// otherwise the failure propagates.
    pub fn finish(self, options: &Options) -> Result<Path, Error> {
        match self.error {
            None => Ok(self.path),
            Some(e) if options.silent => {
                warn!(error = %e, "command failed, keeping partial path");
                Ok(self.path)
            }
            Some(e) => Err(e),
        }
    }
}

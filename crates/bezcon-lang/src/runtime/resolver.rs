//! Endpoint resolution. Each command gives some of {x, y, angle, length};
//! the missing coordinate is solved from the rest.

use tracing::debug;

use crate::error::{Error, ErrorCode};
use crate::runtime::fields::Fields;
use crate::syntax::token::CommandKind;
use crate::types::point::Point;

/// Tangent magnitude beyond which a slope counts as vertical.
/// `tan(±π/2)` in f64 is about 1.6e16.
pub const VERTICAL_TANGENT: f64 = 1.0e15;

/// Narrows the fields to what a command type consumes. HLine pins y, VLine
/// and Arc pin x. All three drop any given angle, so `v a45 l5` is a plain
/// vertical of length 5 rather than a slope solve against the pinned axis.
pub fn reduce(kind: CommandKind, fields: Fields, current: Point) -> Fields {
    match kind {
        CommandKind::Line | CommandKind::Move => fields,
        CommandKind::HLine => Fields { y: Some(current.y), angle: None, ..fields },
        // TODO: Arc shares the vertical-line solve until arc geometry (radius, i/j) lands.
        CommandKind::VLine | CommandKind::Arc => Fields { x: Some(current.x), angle: None, ..fields },
    }
}

/// Endpoint of a command of `kind` starting at `current`.
pub fn resolve(kind: CommandKind, fields: Fields, current: Point, command: &str) -> Result<Point, Error> {
    let fields = reduce(kind, fields, current);
    match kind {
        CommandKind::Move => Ok(Point::new(
            fields.x.unwrap_or(current.x),
            fields.y.unwrap_or(current.y),
        )),
        _ => resolve_line(current, fields, command),
    }
}

/// Solves the line endpoint from the given fields.
pub fn resolve_line(current: Point, f: Fields, command: &str) -> Result<Point, Error> {
    let fail = |code: ErrorCode, msg: &str| -> Result<Point, Error> {
        Err(Error::new(code, command, msg).with_fields(f))
    };

    match (f.x, f.y) {
        (None, Some(y)) => {
            if let Some(a) = f.angle {
                let t = a.tan();
                if t.abs() > VERTICAL_TANGENT {
                    debug!(command, "vertical slope, keeping x");
                    return Ok(Point::new(current.x, y));
                }
                if t == 0.0 {
                    return fail(ErrorCode::G001, "bad param a=0 for y defined line");
                }
                Ok(Point::new(current.x + (y - current.y) / t, y))
            } else if let Some(l) = f.length {
                match leg(l, y - current.y) {
                    Some(dx) => Ok(Point::new(current.x + dx, y)),
                    None => fail(ErrorCode::G003, "length too short to reach y"),
                }
            } else {
                Ok(Point::new(current.x, y))
            }
        }
        (None, None) => match (f.angle, f.length) {
            (Some(a), Some(l)) => Ok(current + Point::polar(a, l)),
            _ => fail(ErrorCode::G004, "bad params for the line"),
        },
        (Some(x), None) => {
            if let Some(a) = f.angle {
                let t = a.tan();
                if t.abs() > VERTICAL_TANGENT {
                    return fail(ErrorCode::G002, "bad param a=90 for x defined line");
                }
                Ok(Point::new(x, current.y + t * (x - current.x)))
            } else if let Some(l) = f.length {
                // Negative branch: positive lengths run up the page like `y`.
                match leg(l, x - current.x) {
                    Some(dy) => Ok(Point::new(x, current.y - dy)),
                    None => fail(ErrorCode::G003, "length too short to reach x"),
                }
            } else {
                Ok(Point::new(x, current.y))
            }
        }
        (Some(x), Some(y)) => Ok(Point::new(x, y)),
    }
}

/// Other leg of a right triangle with hypotenuse `l` and one leg `d`.
fn leg(l: f64, d: f64) -> Option<f64> {
    let sq = l * l - d * d;
    if sq < 0.0 { None } else { Some(sq.sqrt()) }
}

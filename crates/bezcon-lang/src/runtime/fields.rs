use crate::syntax::ast::Param;
use crate::syntax::token::{Frame, ParamKey};
use crate::types::point::Point;

/// Parameter bag of one command, resolved to the document frame.
/// `None` means the parameter was not given, which is not the same as zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Fields {
    pub x: Option<f64>,
    pub y: Option<f64>,
    /// Radians.
    pub angle: Option<f64>,
    pub length: Option<f64>,
    // Reserved. Accepted and resolved, never read by any command type.
    pub radius: Option<f64>,
    pub i: Option<f64>,
    pub j: Option<f64>,
}

impl Fields {
    /// Resolves relative parameters against `current`. The document y axis
    /// points down, so y offsets are subtracted. Later parameters overwrite
    /// earlier ones for the same field.
    pub fn bind(params: &[Param], current: Point) -> Self {
        let mut f = Fields::default();
        for p in params {
            let v = p.value;
            match (p.key, p.frame) {
                (ParamKey::X, Frame::Relative) => f.x = Some(current.x + v),
                (ParamKey::X, Frame::Absolute) => f.x = Some(v),
                (ParamKey::Y, Frame::Relative) => f.y = Some(current.y - v),
                (ParamKey::Y, Frame::Absolute) => f.y = Some(-v),
                (ParamKey::I, Frame::Relative) => f.i = Some(current.x + v),
                (ParamKey::I, Frame::Absolute) => f.i = Some(v),
                (ParamKey::J, Frame::Relative) => f.j = Some(current.y - v),
                (ParamKey::J, Frame::Absolute) => f.j = Some(-v),
                (ParamKey::Angle, _)  => f.angle = Some(v),
                (ParamKey::Length, _) => f.length = Some(v),
                (ParamKey::Radius, _) => f.radius = Some(v),
            }
        }
        f
    }
}

impl std::fmt::Display for Fields {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let show = |v: Option<f64>| v.map(|v| v.to_string()).unwrap_or_else(|| "none".into());
        write!(f, "x = {}, y = {}, a = {}, l = {}",
            show(self.x), show(self.y), show(self.angle), show(self.length))
    }
}

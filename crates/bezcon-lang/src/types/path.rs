//! Cubic Bézier path container, laid out like an SVG superpath:
//! a list of subpaths, each a start anchor followed by cubic segments.

use crate::types::point::Point;

/// Cubic segment `p0 → p1` with control points `c1`, `c2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub p0: Point,
    pub c1: Point,
    pub c2: Point,
    pub p1: Point,
}

impl Segment {
    pub fn new(p0: Point, c1: Point, c2: Point, p1: Point) -> Self {
        Self { p0, c1, c2, p1 }
    }

    /// Straight line in cubic form: controls sit on the endpoints.
    pub fn line(from: Point, to: Point) -> Self {
        Self { p0: from, c1: from, c2: to, p1: to }
    }

    pub fn is_flat(&self) -> bool {
        self.c1 == self.p0 && self.c2 == self.p1
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Subpath {
    pub start: Point,
    pub segments: Vec<Segment>,
}

impl Subpath {
    pub fn new(start: Point) -> Self {
        Self { start, segments: Vec::new() }
    }

    pub fn with_segments(start: Point, segments: Vec<Segment>) -> Self {
        Self { start, segments }
    }

    /// End anchor of the last segment, or `start` when there is none.
    pub fn end(&self) -> Point {
        self.segments.last().map(|s| s.p1).unwrap_or(self.start)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    pub subpaths: Vec<Subpath>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-point path used when there is nothing to continue from.
    pub fn seeded(start: Point) -> Self {
        Self { subpaths: vec![Subpath::new(start)] }
    }

    pub fn from_subpaths(subpaths: Vec<Subpath>) -> Self {
        Self { subpaths }
    }

    pub fn is_empty(&self) -> bool {
        self.subpaths.is_empty()
    }

    /// Last anchor of the last subpath.
    pub fn current_point(&self) -> Option<Point> {
        self.subpaths.last().map(Subpath::end)
    }

    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.subpaths.iter().flat_map(|sp| sp.segments.iter())
    }

    pub fn segment_count(&self) -> usize {
        self.subpaths.iter().map(|sp| sp.segments.len()).sum()
    }

    /// Appends a flattened segment from the current point to `to`. An empty
    /// path has no current point, so `to` becomes its start instead.
    pub fn line_to(&mut self, to: Point) {
        match self.subpaths.last_mut() {
            Some(sp) => {
                let from = sp.end();
                sp.segments.push(Segment::line(from, to));
            }
            None => self.subpaths.push(Subpath::new(to)),
        }
    }

    /// Starts a new subpath at `to`. A trailing subpath with no segments is
    /// relocated rather than left behind as a stray point.
    pub fn move_to(&mut self, to: Point) {
        match self.subpaths.last_mut() {
            Some(sp) if sp.segments.is_empty() => sp.start = to,
            _ => self.subpaths.push(Subpath::new(to)),
        }
    }

    /// SVG path data: `M x,y C x,y x,y x,y ...` per subpath.
    pub fn to_svg_data(&self) -> String {
        let mut parts = Vec::new();
        for sp in &self.subpaths {
            parts.push(format!("M {}", sp.start));
            for s in &sp.segments {
                parts.push(format!("C {} {} {}", s.c1, s.c2, s.p1));
            }
        }
        parts.join(" ")
    }
}

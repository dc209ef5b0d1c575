//! Interpreter behavior tests.
//!
//! Tests the full stack: command string → Interpreter → Report / Path.
//! Endpoints and emitted segments are inspected after each run.

use bezcon_lang::{
    draw, CommandKind, ErrorCode, Interpreter, Options, Path, Point, Report, Segment, Subpath,
};

// ─── Helpers ─────────────────────────────────────────────────────────────────

const EPS: f64 = 1e-9;

fn run_at(start: Point, src: &str, units: f64) -> Report {
    Interpreter::seeded(start).run(src, units)
}

fn run(src: &str) -> Path {
    let report = run_at(Point::ORIGIN, src, 1.0);
    if let Some(e) = report.error {
        panic!("run failed: {e}");
    }
    report.path
}

fn run_err(src: &str) -> (Path, bezcon_lang::Error) {
    let report = run_at(Point::ORIGIN, src, 1.0);
    match report.error {
        Some(e) => (report.path, e),
        None => panic!("expected `{src}` to fail but it succeeded"),
    }
}

fn end(path: &Path) -> Point {
    path.current_point().expect("path has no current point")
}

fn assert_close(a: Point, b: Point) {
    assert!((a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS, "expected {b:?}, got {a:?}");
}

// ─── Scenarios ───────────────────────────────────────────────────────────────

#[test]
fn empty_string_leaves_path_unchanged() {
    let path = run("");
    assert_eq!(path, Path::seeded(Point::ORIGIN));
    let path = run(" ; ;  ");
    assert_eq!(path, Path::seeded(Point::ORIGIN));
}

#[test]
fn line_to_relative_x() {
    let path = run("L x10 y0");
    assert_eq!(path.segment_count(), 1);
    assert_eq!(end(&path), Point::new(10.0, 0.0));
}

#[test]
fn hline_solves_x_from_length() {
    let path = run("H l5");
    assert_eq!(end(&path), Point::new(5.0, 0.0));
}

#[test]
fn angle_without_length_aborts_run() {
    let (path, e) = run_err("l a90; l5");
    assert_eq!(e.code, ErrorCode::G004);
    assert_eq!(e.command, "l a90");
    assert_eq!(path.segment_count(), 0);
}

#[test]
fn vline_scaled_and_inverted() {
    let report = run_at(Point::ORIGIN, "V y10", 2.0);
    assert!(report.is_ok());
    assert_eq!(report.current_point(), Some(Point::new(0.0, -20.0)));
}

// ─── Segment shape ───────────────────────────────────────────────────────────

#[test]
fn segments_are_flattened_from_previous_point() {
    let path = run("l x3; v y4; h x-3; l a45 l2");
    let segs: Vec<&Segment> = path.segments().collect();
    assert_eq!(segs.len(), 4);
    assert_eq!(*segs[0], Segment::line(Point::ORIGIN, Point::new(3.0, 0.0)));
    assert_eq!(*segs[1], Segment::line(Point::new(3.0, 0.0), Point::new(3.0, -4.0)));
    assert_eq!(*segs[2], Segment::line(Point::new(3.0, -4.0), Point::new(0.0, -4.0)));
    for pair in segs.windows(2) {
        assert_eq!(pair[0].p1, pair[1].p0);
    }
    assert!(segs.iter().all(|s| s.is_flat()));
}

#[test]
fn rerun_is_deterministic() {
    let src = "l x3 a30; l5 a-60; H X2; v l1; m x1; l y2 l4";
    let a = run_at(Point::new(1.0, 2.0), src, 1.5);
    let b = run_at(Point::new(1.0, 2.0), src, 1.5);
    assert_eq!(a.path, b.path);
    assert_eq!(a.current_point(), b.current_point());
}

#[test]
fn solved_y_fed_back_as_absolute() {
    let first = end(&run("l x10 a30"));
    let back = end(&run(&format!("l Y{} a30", -first.y)));
    assert_close(back, first);
}

// ─── Boundaries ──────────────────────────────────────────────────────────────

#[test]
fn length_equal_to_delta_gives_zero_offset() {
    let path = run("l y3 l3");
    assert_eq!(end(&path), Point::new(0.0, -3.0));
    let path = run("l x-3 l3");
    assert_eq!(end(&path), Point::new(-3.0, 0.0));
}

#[test]
fn length_shorter_than_delta_fails() {
    let (_, e) = run_err("l y3 l2.9");
    assert_eq!(e.code, ErrorCode::G003);
    let fields = e.fields.expect("geometry errors carry fields");
    assert_eq!(fields.length, Some(2.9));
}

#[test]
fn vertical_angle_keeps_x() {
    assert_eq!(end(&run("l y5 a90")), Point::new(0.0, -5.0));
    assert_eq!(end(&run("l y5 a-90")), Point::new(0.0, -5.0));
}

#[test]
fn geometry_error_reports_field_values() {
    let (_, e) = run_err("l y3 l2");
    assert_eq!(e.code, ErrorCode::G003);
    assert_eq!(
        e.to_string(),
        "[G003] length too short to reach y. Command: \"l y3 l2\" (x = none, y = -3, a = none, l = 2)"
    );
}

#[test]
fn vertical_angle_with_x_fails() {
    let (_, e) = run_err("l x5 a90");
    assert_eq!(e.code, ErrorCode::G002);
}

#[test]
fn zero_angle_with_y_fails() {
    let (_, e) = run_err("l y5 a0");
    assert_eq!(e.code, ErrorCode::G001);
}

// ─── Parameters ──────────────────────────────────────────────────────────────

#[test]
fn absolute_coordinates() {
    let report = run_at(Point::new(7.0, 7.0), "L X1 Y2", 1.0);
    assert_eq!(report.current_point(), Some(Point::new(1.0, -2.0)));
}

#[test]
fn last_parameter_wins() {
    assert_eq!(end(&run("l x1 x4")), Point::new(4.0, 0.0));
}

#[test]
fn missing_number_is_zero() {
    assert_eq!(end(&run("l x y")), Point::ORIGIN);
}

#[test]
fn reserved_letters_are_inert() {
    assert_eq!(run("l x5 i3 j2 r1 I4 J5 R6"), run("l x5"));
}

// ─── Command types ───────────────────────────────────────────────────────────

#[test]
fn omitted_type_repeats_previous() {
    let path = run("l x5; y5");
    assert_eq!(path.segment_count(), 2);
    assert_eq!(end(&path), Point::new(5.0, -5.0));
}

#[test]
fn first_command_without_type_is_skipped() {
    let mut interp = Interpreter::seeded(Point::ORIGIN);
    interp.execute("x5; y1", 1.0).unwrap();
    assert_eq!(interp.path().segment_count(), 0);
    assert_eq!(interp.last_command(), None);

    let path = run("x5; l y1");
    assert_eq!(path.segment_count(), 1);
    assert_eq!(end(&path), Point::new(0.0, -1.0));
}

#[test]
fn last_command_tracks_type() {
    let mut interp = Interpreter::seeded(Point::ORIGIN);
    interp.execute("H x1; x2", 1.0).unwrap();
    assert_eq!(interp.last_command().map(|t| t.kind), Some(CommandKind::HLine));
    assert_eq!(interp.current_point(), Point::new(3.0, 0.0));
}

#[test]
fn hline_ignores_y_and_angle() {
    assert_eq!(end(&run("h x4 y9")), Point::new(4.0, 0.0));
    assert_eq!(end(&run("h l2 a45")), Point::new(2.0, 0.0));
}

#[test]
fn vline_drops_angle_and_uses_length() {
    assert_eq!(end(&run("v a45 l5")), Point::new(0.0, -5.0));
    assert_eq!(end(&run("a a45 l5")), Point::new(0.0, -5.0));
}

#[test]
fn vline_ignores_x() {
    assert_eq!(end(&run("v x4 y2")), Point::new(0.0, -2.0));
    assert_eq!(end(&run("v l2")), Point::new(0.0, -2.0));
}

#[test]
fn arc_resolves_like_vline() {
    for params in ["y5", "l3", "y5 l7", "x2 y1", ""] {
        assert_eq!(run(&format!("a {params}")), run(&format!("v {params}")), "params `{params}`");
    }
}

#[test]
fn move_relocates_without_drawing() {
    let path = run("l x5; m x5; l y5");
    assert_eq!(path.segment_count(), 2);
    assert_eq!(path.subpaths.len(), 2);
    assert_eq!(path.subpaths[1].start, Point::new(10.0, 0.0));
    assert_eq!(end(&path), Point::new(10.0, -5.0));
}

#[test]
fn move_from_seed_replaces_start() {
    let path = run("M X1 Y1; l x1");
    assert_eq!(path.subpaths.len(), 1);
    assert_eq!(path.subpaths[0].start, Point::new(1.0, -1.0));
    assert_eq!(end(&path), Point::new(2.0, -1.0));
}

// ─── Failure handling ────────────────────────────────────────────────────────

#[test]
fn malformed_command_keeps_earlier_segments() {
    let (path, e) = run_err("l x5; l ?; l y5");
    assert_eq!(e.code, ErrorCode::C001);
    assert_eq!(e.command, " l ?");
    assert_eq!(path.segment_count(), 1);
    assert_eq!(end(&path), Point::new(5.0, 0.0));
}

#[test]
fn silent_finish_keeps_partial_path() {
    let report = run_at(Point::ORIGIN, "l x5; l a10; l y5", 1.0);
    let options = Options { silent: true, units: 1.0, ..Options::default() };
    let path = report.finish(&options).expect("silent runs do not fail");
    assert_eq!(path.segment_count(), 1);
}

#[test]
fn verbose_finish_propagates() {
    let report = run_at(Point::ORIGIN, "l x5; l a10; l y5", 1.0);
    let options = Options { silent: false, units: 1.0, ..Options::default() };
    let e = report.finish(&options).unwrap_err();
    assert_eq!(e.code, ErrorCode::G004);
    assert!(e.to_string().contains("Command: \" l a10\""), "{e}");
}

// ─── Public API ──────────────────────────────────────────────────────────────

#[test]
fn draw_continues_existing_path() {
    let curve = Segment::new(
        Point::ORIGIN, Point::new(0.0, 1.0), Point::new(1.0, 1.0), Point::new(1.0, 0.0),
    );
    let existing = Path::from_subpaths(vec![Subpath::with_segments(Point::ORIGIN, vec![curve])]);
    let options = Options { silent: false, units: 1.0, ..Options::default() };
    let path = draw("h x2", &options, Some(existing), Point::new(50.0, 50.0)).unwrap();
    let segs: Vec<&Segment> = path.segments().collect();
    assert_eq!(*segs[0], curve);
    assert_eq!(*segs[1], Segment::line(Point::new(1.0, 0.0), Point::new(3.0, 0.0)));
}

#[test]
fn draw_seeds_fallback_point() {
    let options = Options { silent: false, units: 1.0, ..Options::default() };
    let center = Point::new(50.0, 50.0);
    let path = draw("v y10", &options, None, center).unwrap();
    assert_eq!(path.subpaths[0].start, center);
    assert_eq!(end(&path), Point::new(50.0, 40.0));

    let path = draw("v y10", &options, Some(Path::new()), center).unwrap();
    assert_eq!(path.subpaths[0].start, center);
}

#[test]
fn draw_from_options_seed() {
    let options = Options { silent: false, units: 1.0, seed: Point::new(4.0, 4.0) };
    let path = draw("h x1", &options, None, options.seed).unwrap();
    assert_eq!(path.subpaths[0].start, Point::new(4.0, 4.0));
    assert_eq!(end(&path), Point::new(5.0, 4.0));
}

#[test]
fn draw_uses_default_units() {
    let path = draw("h x1", &Options::default(), None, Point::ORIGIN).unwrap();
    assert_eq!(end(&path), Point::new(bezcon_lang::DEFAULT_UNITS, 0.0));
}

#[test]
fn svg_output() {
    let path = run("l x10; v y5");
    assert_eq!(path.to_svg_data(), "M 0,0 C 0,0 10,0 10,0 C 10,0 10,-5 10,-5");
}

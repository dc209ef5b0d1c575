use std::path::Path as FsPath;

use eframe::egui::{self, Color32, RichText};
use bezcon_lang::{
    parse_all, Command, Frame, Interpreter, Options, ParamKey, Path, Point, Segment,
};

const OPTIONS_FILE: &str = "bezcon.json";

fn fmt_param_key(key: ParamKey, frame: Frame) -> char {
    let c = match key {
        ParamKey::X      => 'x',
        ParamKey::Y      => 'y',
        ParamKey::Angle  => 'a',
        ParamKey::Length => 'l',
        ParamKey::Radius => 'r',
        ParamKey::I      => 'i',
        ParamKey::J      => 'j',
    };
    match frame {
        Frame::Relative => c,
        Frame::Absolute => c.to_ascii_uppercase(),
    }
}

fn mono_row(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(label).monospace().color(Color32::from_rgb(140, 140, 140)));
        ui.label(RichText::new(value).monospace().color(Color32::from_rgb(210, 210, 170)));
    });
}

fn init_logging() {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

fn load_options() -> Options {
    let path = FsPath::new(OPTIONS_FILE);
    if !path.exists() {
        return Options::default();
    }
    match Options::load_from_file(path) {
        Ok(o) => o,
        Err(e) => {
            tracing::warn!("ignoring {OPTIONS_FILE}: {e}");
            Options::default()
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let options = load_options();
    tracing::info!(?options, "starting bezier console");

    let native = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 760.0]),
        ..Default::default()
    };
    eframe::run_native("Bezier Console", native, Box::new(|_cc| Ok(Box::new(App::new(options)))))
        .map_err(|e| anyhow::anyhow!("eframe: {e}"))
}

// ─── App state ────────────────────────────────────────────────────────────────

#[derive(PartialEq)]
enum Tab { Errors, Commands, Output, Canvas }

struct App {
    source: String,
    options: Options,
    result: RunResult,
    tab: Tab,
}

impl App {
    fn new(options: Options) -> Self {
        let source = String::from("L x10 y0; v y10; h l10; a45 l5");
        let result = run(&source, &options);
        Self { source, options, result, tab: Tab::Canvas }
    }

    fn rerun(&mut self) {
        self.result = run(&self.source, &self.options);
    }
}

// ─── Run result ───────────────────────────────────────────────────────────────

struct RunResult {
    errors: Vec<String>,
    commands: Vec<Command>,
    path: Option<Path>,
}

fn run(source: &str, options: &Options) -> RunResult {
    // Parsed view for the Commands tab only; execution parses lazily.
    let commands = parse_all(source, options.units).unwrap_or_default();

    let report = Interpreter::seeded(options.seed).run(source, options.units);
    match report.finish(options) {
        Ok(path) => RunResult { errors: vec![], commands, path: Some(path) },
        Err(e) => RunResult { errors: vec![e.to_string()], commands, path: None },
    }
}

// ─── UI ───────────────────────────────────────────────────────────────────────

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.columns(2, |cols| {
                // ── Left: command line + options ──────────────────────────────
                cols[0].vertical(|ui| {
                    ui.label("Commands");
                    let mut changed = ui.add(
                        egui::TextEdit::multiline(&mut self.source)
                            .font(egui::TextStyle::Monospace)
                            .desired_width(f32::INFINITY)
                            .desired_rows(12),
                    ).changed();

                    ui.separator();
                    egui::Grid::new("options_grid").num_columns(2).show(ui, |ui| {
                        ui.label("silent");
                        changed |= ui.checkbox(&mut self.options.silent, "").changed();
                        ui.end_row();

                        ui.label("units");
                        changed |= ui.add(egui::DragValue::new(&mut self.options.units).speed(0.01)).changed();
                        ui.end_row();

                        ui.label("seed");
                        ui.horizontal(|ui| {
                            changed |= ui.add(egui::DragValue::new(&mut self.options.seed.x)).changed();
                            changed |= ui.add(egui::DragValue::new(&mut self.options.seed.y)).changed();
                        });
                        ui.end_row();
                    });

                    if ui.button("save options").clicked() {
                        match self.options.save_to_file(FsPath::new(OPTIONS_FILE)) {
                            Ok(()) => tracing::info!("saved {OPTIONS_FILE}"),
                            Err(e) => tracing::error!("could not save {OPTIONS_FILE}: {e}"),
                        }
                    }

                    if changed {
                        self.rerun();
                    }
                });

                // ── Right: output ─────────────────────────────────────────────
                cols[1].vertical(|ui| {
                    // ── Status bar ────────────────────────────────────────────
                    ui.horizontal(|ui| {
                        if self.result.errors.is_empty() {
                            ui.label(RichText::new("✓  no errors").color(Color32::from_rgb(80, 200, 80)));
                        } else {
                            ui.label(RichText::new(format!("✗  {} error(s)", self.result.errors.len()))
                                .color(Color32::from_rgb(220, 80, 80)));
                        }
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button("run").clicked() {
                                self.rerun();
                            }
                        });
                    });

                    ui.separator();

                    // ── Tab bar ───────────────────────────────────────────────
                    ui.horizontal(|ui| {
                        let err_label = if self.result.errors.is_empty() {
                            "Errors".into()
                        } else {
                            format!("Errors ({})", self.result.errors.len())
                        };
                        ui.selectable_value(&mut self.tab, Tab::Errors, err_label);
                        ui.selectable_value(&mut self.tab, Tab::Commands, "Commands");
                        ui.selectable_value(&mut self.tab, Tab::Output, "Output");
                        ui.selectable_value(&mut self.tab, Tab::Canvas, "Canvas");
                    });

                    ui.separator();

                    // ── Tab content ───────────────────────────────────────────
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        match self.tab {
                            Tab::Errors   => self.show_errors(ui),
                            Tab::Commands => self.show_commands(ui),
                            Tab::Output   => self.show_output(ui),
                            Tab::Canvas   => self.show_canvas(ui),
                        }
                    });
                });
            });
        });
    }
}

impl App {
    fn show_errors(&self, ui: &mut egui::Ui) {
        if self.result.errors.is_empty() {
            ui.label(RichText::new("No errors.").color(Color32::GRAY));
            return;
        }
        for msg in &self.result.errors {
            ui.label(RichText::new(msg).monospace().color(Color32::from_rgb(220, 80, 80)));
        }
    }

    fn show_commands(&self, ui: &mut egui::Ui) {
        if self.result.commands.is_empty() {
            ui.label(RichText::new("No commands.").color(Color32::GRAY));
            return;
        }

        egui::Grid::new("commands_grid")
            .striped(true)
            .min_col_width(60.0)
            .show(ui, |ui| {
                ui.label(RichText::new("#").strong());
                ui.label(RichText::new("type").strong());
                ui.label(RichText::new("params").strong());
                ui.end_row();

                for (i, cmd) in self.result.commands.iter().enumerate() {
                    ui.label(RichText::new(format!("{}", i + 1)).monospace().color(Color32::GRAY));
                    let ty = cmd.ty.map(|t| t.letter().to_string()).unwrap_or_else(|| "·".into());
                    ui.label(RichText::new(ty).monospace().color(Color32::from_rgb(100, 180, 255)));
                    let params: Vec<String> = cmd.params.iter()
                        .map(|p| format!("{}={:.3}", fmt_param_key(p.key, p.frame), p.value))
                        .collect();
                    ui.label(RichText::new(params.join("  ")).monospace());
                    ui.end_row();
                }
            });
    }

    fn show_output(&self, ui: &mut egui::Ui) {
        let Some(path) = &self.result.path else {
            ui.label(RichText::new("Fix errors to run.").color(Color32::GRAY));
            return;
        };

        let v2 = |p: Point| format!("({:.3}, {:.3})", p.x, p.y);

        for (si, sp) in path.subpaths.iter().enumerate() {
            ui.horizontal(|ui| {
                ui.label(RichText::new(format!("[{}]", si + 1)).monospace().color(Color32::GRAY));
                ui.label(RichText::new("Subpath").strong());
                ui.label(RichText::new(v2(sp.start)).monospace().color(Color32::from_rgb(180, 140, 255)));
            });
            for (i, s) in sp.segments.iter().enumerate() {
                mono_row(ui, &format!("  seg[{i}]:"), &format!(
                    "{} → {}{}", v2(s.p0), v2(s.p1), if s.is_flat() { "" } else { "  (curve)" }
                ));
            }
            ui.add_space(6.0);
        }

        if let Some(cur) = path.current_point() {
            mono_row(ui, "current:", &v2(cur));
        }
        ui.separator();
        ui.label("SVG path data");
        ui.add(
            egui::TextEdit::multiline(&mut path.to_svg_data())
                .font(egui::TextStyle::Monospace)
                .desired_width(f32::INFINITY)
                .interactive(false),
        );
    }

    fn show_canvas(&self, ui: &mut egui::Ui) {
        let Some(path) = &self.result.path else {
            ui.label(RichText::new("Fix errors to run.").color(Color32::GRAY));
            return;
        };

        let desired = egui::vec2(ui.available_width(), 480.0);
        let (canvas_rect, _response) = ui.allocate_exact_size(desired, egui::Sense::hover());
        let painter = ui.painter_at(canvas_rect);

        painter.rect_filled(canvas_rect, 0.0, Color32::from_rgb(28, 28, 32));

        // Fit the anchors into the canvas. Document y already grows downward,
        // same as screen space.
        let anchors: Vec<Point> = path.subpaths.iter()
            .flat_map(|sp| std::iter::once(sp.start).chain(sp.segments.iter().map(|s| s.p1)))
            .collect();
        let (min, max) = anchors.iter().fold(
            (Point::new(f64::MAX, f64::MAX), Point::new(f64::MIN, f64::MIN)),
            |(lo, hi), p| (Point::new(lo.x.min(p.x), lo.y.min(p.y)), Point::new(hi.x.max(p.x), hi.y.max(p.y))),
        );
        let span = (max.x - min.x).max(max.y - min.y).max(1.0);
        let scale = (canvas_rect.width().min(canvas_rect.height()) as f64 - 40.0) / span;
        let mid = (min + max) * 0.5;
        let center = canvas_rect.center();
        let to_screen = |p: Point| egui::pos2(
            center.x + ((p.x - mid.x) * scale) as f32,
            center.y + ((p.y - mid.y) * scale) as f32,
        );

        let stroke = egui::Stroke::new(1.5, Color32::from_rgba_unmultiplied(200, 180, 255, 255));
        for s in path.segments() {
            draw_segment(&painter, s, &to_screen, stroke);
        }

        for sp in &path.subpaths {
            painter.circle_filled(to_screen(sp.start), 3.0, Color32::from_rgb(120, 180, 255));
        }
        if let Some(cur) = path.current_point() {
            painter.circle_filled(to_screen(cur), 4.0, Color32::from_rgb(255, 200, 80));
        }
    }
}

fn draw_segment(painter: &egui::Painter, s: &Segment, to_screen: &impl Fn(Point) -> egui::Pos2, stroke: egui::Stroke) {
    if s.is_flat() {
        painter.line_segment([to_screen(s.p0), to_screen(s.p1)], stroke);
    } else {
        let points = [to_screen(s.p0), to_screen(s.c1), to_screen(s.c2), to_screen(s.p1)];
        painter.add(egui::epaint::CubicBezierShape::from_points_stroke(
            points, false, Color32::TRANSPARENT, stroke,
        ));
    }
}

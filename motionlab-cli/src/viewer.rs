//! Interactive viewer for scenario files
//!
//! Plays a scenario in real time, draws particles, springs and rods, and
//! plots the first particle's motion and the world's energy. The scenario
//! file is watched and reloaded on save. Dragging a rod pulls on it at the
//! grabbed point.

use anyhow::{anyhow, Result};
use eframe::egui;
use glam::Vec2;
use log::{debug, info, warn};
use motionlab_core::graph::DEFAULT_ENERGY_CAPACITY;
use motionlab_core::history::BoundedSeries;
use motionlab_core::{
    build_simulation_context_from_source, get_particle_states, step_simulation, EnergyGraph,
    Force, Graph, GraphConfig, GraphKind, PhysicsError, SimulationContext, World,
};
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::PathBuf;
use std::sync::mpsc;

const TRAIL_LENGTH: usize = 120;
/// Force per pixel between the grabbed point and the pointer
const DRAG_STIFFNESS: f32 = 2.0;
const PLOT_HEIGHT: f32 = 90.0;

const GRAPH_KINDS: [GraphKind; 7] = [
    GraphKind::Speed,
    GraphKind::VelocityX,
    GraphKind::VelocityY,
    GraphKind::PositionX,
    GraphKind::PositionY,
    GraphKind::KineticEnergy,
    GraphKind::Phase,
];

pub fn run(source_path: PathBuf) -> Result<()> {
    let app = ViewerApp::new(source_path)?;
    let options = eframe::NativeOptions::default();
    eframe::run_native("MotionLab", options, Box::new(move |_cc| Ok(Box::new(app))))
        .map_err(|e| anyhow!("viewer exited with an error: {}", e))
}

/// World rectangle kept on screen, fixed per load so the camera does not jump
#[derive(Debug, Clone, Copy)]
struct WorldView {
    min: Vec2,
    max: Vec2,
}

impl WorldView {
    const PADDING: f32 = 50.0;

    fn fit(world: &World) -> Self {
        if let Some(bounds) = &world.bounds {
            return Self {
                min: Vec2::from(bounds.min),
                max: Vec2::from(bounds.max),
            };
        }

        let particles = world
            .particles
            .iter()
            .map(|p| (p.position(), Vec2::splat(p.radius())));
        let bodies = world
            .rigid_bodies
            .iter()
            .map(|b| (b.center(), Vec2::splat(b.width().max(b.height()) / 2.0)));
        let extent = particles.chain(bodies).fold(None, |acc: Option<(Vec2, Vec2)>, (c, r)| {
            let (lo, hi) = (c - r, c + r);
            Some(match acc {
                None => (lo, hi),
                Some((min, max)) => (min.min(lo), max.max(hi)),
            })
        });

        match extent {
            Some((min, max)) => Self {
                min: min - Vec2::splat(Self::PADDING),
                max: max + Vec2::splat(Self::PADDING),
            },
            None => Self {
                min: Vec2::ZERO,
                max: Vec2::new(800.0, 600.0),
            },
        }
    }

    fn scale(&self, rect: egui::Rect) -> f32 {
        let span = (self.max - self.min).max(Vec2::ONE);
        (rect.width() / span.x).min(rect.height() / span.y) * 0.95
    }

    // Both frames have +y down, so no flip
    fn to_screen(&self, rect: egui::Rect, p: Vec2) -> egui::Pos2 {
        let offset = (p - (self.min + self.max) / 2.0) * self.scale(rect);
        rect.center() + egui::vec2(offset.x, offset.y)
    }

    fn to_world(&self, rect: egui::Rect, p: egui::Pos2) -> Vec2 {
        let offset = (p - rect.center()) / self.scale(rect);
        (self.min + self.max) / 2.0 + Vec2::new(offset.x, offset.y)
    }
}

/// A rod being pulled by the pointer
#[derive(Debug, Clone, Copy)]
struct Grip {
    body: usize,
    local: Vec2,
}

pub struct ViewerApp {
    source_path: PathBuf,
    sim: Option<SimulationContext>,
    last_error: Option<String>,
    warnings: Vec<String>,
    playing: bool,
    speed_multiplier: f32,
    view: WorldView,
    trails: Vec<BoundedSeries<Vec2>>,
    graph: Graph,
    energy: EnergyGraph,
    grip: Option<Grip>,
    pointer_world: Option<Vec2>,
    // Kept alive to maintain file watching
    _watcher: Option<RecommendedWatcher>,
    file_receiver: mpsc::Receiver<notify::Result<Event>>,
}

fn new_graph(kind: GraphKind) -> Result<Graph, PhysicsError> {
    Graph::new(GraphConfig {
        kind,
        ..Default::default()
    })
}

impl ViewerApp {
    pub fn new(source_path: PathBuf) -> Result<Self, PhysicsError> {
        let (tx, rx) = mpsc::channel();
        let watcher = notify::recommended_watcher(move |res| {
            // The receiver is gone during shutdown
            let _ = tx.send(res);
        })
        .and_then(|mut w| {
            // Editors often replace the file, so watch its directory
            let dir = source_path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| std::path::Path::new("."));
            w.watch(dir, RecursiveMode::NonRecursive)?;
            Ok(w)
        });
        let watcher = match watcher {
            Ok(w) => Some(w),
            Err(e) => {
                warn!("live reload disabled: {}", e);
                None
            }
        };

        let mut app = Self {
            source_path,
            sim: None,
            last_error: None,
            warnings: Vec::new(),
            playing: false,
            speed_multiplier: 1.0,
            view: WorldView {
                min: Vec2::ZERO,
                max: Vec2::new(800.0, 600.0),
            },
            trails: Vec::new(),
            graph: new_graph(GraphKind::Speed)?,
            energy: EnergyGraph::new(DEFAULT_ENERGY_CAPACITY)?,
            grip: None,
            pointer_world: None,
            _watcher: watcher,
            file_receiver: rx,
        };
        app.reload();
        Ok(app)
    }

    fn reload(&mut self) {
        let source = match std::fs::read_to_string(&self.source_path) {
            Ok(source) => source,
            Err(e) => {
                self.fail(format!("failed to read {}: {}", self.source_path.display(), e));
                return;
            }
        };

        match build_simulation_context_from_source(&source) {
            Ok((sim, diagnostics)) => {
                info!("loaded '{}'", sim.scenario.name);
                self.warnings = diagnostics.warnings().map(|d| d.message.clone()).collect();
                self.view = WorldView::fit(&sim.world);
                self.trails = sim
                    .world
                    .particles
                    .iter()
                    .filter_map(|_| BoundedSeries::new(TRAIL_LENGTH).ok())
                    .collect();
                self.graph.clear();
                self.energy.clear();
                self.grip = None;
                self.last_error = None;
                self.sim = Some(sim);
                self.record();
            }
            Err(e) => self.fail(e.to_string()),
        }
    }

    fn fail(&mut self, message: String) {
        warn!("{}", message);
        self.last_error = Some(message);
        self.sim = None;
        self.playing = false;
    }

    fn check_file_changes(&mut self) {
        let mut changed = false;
        while let Ok(event) = self.file_receiver.try_recv() {
            match event {
                Ok(Event {
                    kind: EventKind::Modify(_) | EventKind::Create(_),
                    paths,
                    ..
                }) => {
                    changed |= paths
                        .iter()
                        .any(|p| p.file_name() == self.source_path.file_name());
                }
                Ok(_) => {}
                Err(e) => warn!("file watcher error: {}", e),
            }
        }
        if changed {
            debug!("{} changed, reloading", self.source_path.display());
            self.reload();
        }
    }

    /// Sample the plots and trails from the current state
    fn record(&mut self) {
        let Some(sim) = &self.sim else { return };
        if let Some(first) = sim.world.particles.first() {
            self.graph.record(first);
        }
        self.energy
            .record(sim.world.kinetic_energy(), sim.world.potential_energy());
        for (trail, particle) in self.trails.iter_mut().zip(&sim.world.particles) {
            trail.push(particle.position());
        }
    }

    /// Advance one step; returns `true` when the run is over
    fn step_once(&mut self) -> bool {
        let Some(sim) = self.sim.as_mut() else {
            return true;
        };

        if let (Some(grip), Some(target)) = (self.grip, self.pointer_world) {
            let body = &mut sim.world.rigid_bodies[grip.body];
            let force = (target - body.local_to_world(grip.local)) * DRAG_STIFFNESS;
            if let Err(e) = body.apply_force_at(grip.local, force) {
                warn!("drag ignored: {}", e);
            }
        }

        match step_simulation(sim) {
            Ok(finished) => {
                self.record();
                finished
            }
            Err(e) => {
                self.last_error = Some(format!("step failed: {}", e));
                true
            }
        }
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button(if self.playing { "⏸ Pause" } else { "▶ Play" }).clicked() {
                self.playing = !self.playing;
            }
            if ui.button("⏮ Reset").clicked() {
                self.reload();
                self.playing = false;
            }
            if ui.button("⏭ Step").clicked() {
                self.step_once();
            }

            ui.separator();
            ui.label("Speed:");
            ui.add(egui::Slider::new(&mut self.speed_multiplier, 0.1..=10.0));

            ui.separator();
            let mut kind = self.graph.kind();
            egui::ComboBox::from_label("Graph")
                .selected_text(kind.label())
                .show_ui(ui, |ui| {
                    for k in GRAPH_KINDS {
                        ui.selectable_value(&mut kind, k, k.label());
                    }
                });
            if kind != self.graph.kind() {
                match new_graph(kind) {
                    Ok(graph) => self.graph = graph,
                    Err(e) => warn!("cannot switch graph: {}", e),
                }
            }

            if let Some(sim) = &self.sim {
                ui.separator();
                ui.label(format!("Step: {} / {}", sim.current_step, sim.max_steps));
            }
        });
    }

    fn canvas(&mut self, ui: &mut egui::Ui) {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
        let rect = response.rect;
        let view = self.view;

        self.pointer_world = response.interact_pointer_pos().map(|p| view.to_world(rect, p));
        if response.drag_started() {
            self.grip = self.pointer_world.and_then(|p| self.grab(p));
        }
        if response.drag_stopped() {
            self.grip = None;
        }

        let Some(sim) = &self.sim else { return };
        let world = &sim.world;

        if let Some(bounds) = &world.bounds {
            painter.rect_stroke(
                egui::Rect::from_two_pos(
                    view.to_screen(rect, Vec2::from(bounds.min)),
                    view.to_screen(rect, Vec2::from(bounds.max)),
                ),
                0.0,
                egui::Stroke::new(1.0, egui::Color32::DARK_GRAY),
            );
        }

        for force in &world.forces {
            let line = match *force {
                Force::Spring { target, anchor, .. } => Some((world.particles[target].position(), anchor)),
                Force::SpringBetween { a, b, .. } => {
                    Some((world.particles[a].position(), world.particles[b].position()))
                }
                _ => None,
            };
            if let Some((from, to)) = line {
                painter.line_segment(
                    [view.to_screen(rect, from), view.to_screen(rect, to)],
                    egui::Stroke::new(1.0, egui::Color32::GRAY),
                );
            }
        }

        for body in &world.rigid_bodies {
            let (hw, hh) = (body.width() / 2.0, body.height() / 2.0);
            if hw > 0.0 && hh > 0.0 {
                let corners = [(-hw, -hh), (hw, -hh), (hw, hh), (-hw, hh)]
                    .into_iter()
                    .map(|(x, y)| view.to_screen(rect, body.local_to_world(Vec2::new(x, y))))
                    .collect();
                painter.add(egui::Shape::convex_polygon(
                    corners,
                    egui::Color32::from_rgb(70, 90, 140),
                    egui::Stroke::new(1.0, egui::Color32::LIGHT_BLUE),
                ));
            }
            let center = view.to_screen(rect, body.center());
            painter.circle_filled(center, 4.0, egui::Color32::WHITE);
            painter.line_segment(
                [center, view.to_screen(rect, body.local_to_world(Vec2::new(30.0, 0.0)))],
                egui::Stroke::new(2.0, egui::Color32::WHITE),
            );
        }

        for trail in &self.trails {
            let points: Vec<_> = trail.iter().map(|p| view.to_screen(rect, *p)).collect();
            painter.add(egui::Shape::line(
                points,
                egui::Stroke::new(1.0, egui::Color32::from_gray(90)),
            ));
        }

        let scale = view.scale(rect);
        for particle in get_particle_states(sim) {
            let screen = view.to_screen(rect, particle.pos);
            let radius = (particle.radius * scale).max(3.0);
            painter.circle_filled(screen, radius, egui::Color32::LIGHT_BLUE);
            painter.circle_stroke(screen, radius, egui::Stroke::new(1.0, egui::Color32::BLUE));
            painter.text(
                screen + egui::vec2(0.0, radius + 4.0),
                egui::Align2::CENTER_TOP,
                &particle.name,
                egui::FontId::default(),
                egui::Color32::WHITE,
            );
        }

        if let (Some(grip), Some(target)) = (self.grip, self.pointer_world) {
            let from = world.rigid_bodies[grip.body].local_to_world(grip.local);
            painter.line_segment(
                [view.to_screen(rect, from), view.to_screen(rect, target)],
                egui::Stroke::new(2.0, egui::Color32::YELLOW),
            );
        }
    }

    /// Rod under `world_point`, with the point in that rod's frame
    fn grab(&self, world_point: Vec2) -> Option<Grip> {
        let sim = self.sim.as_ref()?;
        sim.world
            .rigid_bodies
            .iter()
            .position(|b| b.contains(world_point, 5.0))
            .map(|body| Grip {
                body,
                local: sim.world.rigid_bodies[body].world_to_local(world_point),
            })
    }

    fn plots(&self, ui: &mut egui::Ui) {
        ui.label(self.graph.kind().label());
        if self.graph.kind() == GraphKind::Phase {
            let phase = self.graph.phase();
            let points: Vec<(f32, f32)> = phase.iter().map(|(x, v)| (*x, *v)).collect();
            plot_xy(ui, &points, phase.first().range(), phase.second().range());
        } else {
            plot_series(
                ui,
                &[(self.graph.values(), egui::Color32::LIGHT_GREEN)],
                self.graph.display_range(),
            );
        }

        let label = match self.energy.kinetic_fraction() {
            Some(fraction) => format!("energy (KE {:.0}%)", fraction * 100.0),
            None => "energy".to_string(),
        };
        ui.label(label);
        let range = [self.energy.kinetic(), self.energy.potential(), self.energy.total()]
            .iter()
            .filter_map(|s| s.range())
            .reduce(|(lo, hi), (l, h)| (lo.min(l), hi.max(h)));
        plot_series(
            ui,
            &[
                (self.energy.kinetic(), egui::Color32::LIGHT_RED),
                (self.energy.potential(), egui::Color32::LIGHT_BLUE),
                (self.energy.total(), egui::Color32::WHITE),
            ],
            range,
        );
    }
}

fn plot_frame(ui: &mut egui::Ui) -> (egui::Rect, egui::Painter) {
    let size = egui::vec2(ui.available_width(), PLOT_HEIGHT);
    let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
    painter.rect_stroke(
        response.rect,
        0.0,
        egui::Stroke::new(1.0, egui::Color32::DARK_GRAY),
    );
    (response.rect, painter)
}

fn normalize(value: f32, (lo, hi): (f32, f32)) -> f32 {
    if hi > lo {
        (value - lo) / (hi - lo)
    } else {
        0.5
    }
}

/// Time series laid out oldest to newest across the full width
fn plot_series(
    ui: &mut egui::Ui,
    series: &[(&BoundedSeries<f32>, egui::Color32)],
    range: Option<(f32, f32)>,
) {
    let (rect, painter) = plot_frame(ui);
    let Some(range) = range else { return };
    for (values, color) in series {
        let last = (values.capacity().max(2) - 1) as f32;
        let points = values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                egui::pos2(
                    rect.left() + rect.width() * i as f32 / last,
                    rect.bottom() - rect.height() * normalize(*v, range),
                )
            })
            .collect();
        painter.add(egui::Shape::line(points, egui::Stroke::new(1.5, *color)));
    }
}

/// Parametric curve, e.g. position against velocity
fn plot_xy(
    ui: &mut egui::Ui,
    points: &[(f32, f32)],
    x_range: Option<(f32, f32)>,
    y_range: Option<(f32, f32)>,
) {
    let (rect, painter) = plot_frame(ui);
    let (Some(x_range), Some(y_range)) = (x_range, y_range) else {
        return;
    };
    let points = points
        .iter()
        .map(|&(x, y)| {
            egui::pos2(
                rect.left() + rect.width() * normalize(x, x_range),
                rect.bottom() - rect.height() * normalize(y, y_range),
            )
        })
        .collect();
    painter.add(egui::Shape::line(
        points,
        egui::Stroke::new(1.5, egui::Color32::LIGHT_GREEN),
    ));
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_file_changes();

        egui::TopBottomPanel::top("controls").show(ctx, |ui| self.controls(ui));

        egui::SidePanel::right("plots")
            .min_width(260.0)
            .show(ctx, |ui| self.plots(ui));

        if self.last_error.is_some() || !self.warnings.is_empty() {
            egui::TopBottomPanel::bottom("diagnostics").show(ctx, |ui| {
                ui.set_max_height(100.0);
                if let Some(error) = &self.last_error {
                    ui.label(egui::RichText::new(format!("Error: {}", error)).color(egui::Color32::RED));
                }
                for warning in &self.warnings {
                    ui.label(egui::RichText::new(format!("Warning: {}", warning)).color(egui::Color32::YELLOW));
                }
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| self.canvas(ui));

        if self.playing {
            let steps_per_frame = self.speed_multiplier.max(0.1).round().max(1.0) as usize;
            for _ in 0..steps_per_frame {
                if self.step_once() {
                    self.playing = false;
                    break;
                }
            }
            ctx.request_repaint();
        }
    }
}

// ui.rs - egui host: draws the board, maps clicks to cells, runs Start/Stop

use std::time::{Duration, Instant};

use conway::{Cell, Config, Simulation, PATTERNS};
use eframe::egui;
use egui::{Color32, Stroke, Vec2};
use tracing::{debug, error};

use crate::canvas::Canvas;

pub struct ConwayApp {
    sim: Simulation,
    canvas: Canvas,
    canvas_size: f32,
    cells_across: u32,
    selected_pattern: usize,
    live_color: Color32,
    dead_color: Color32,
    failure: Option<String>,
}

impl ConwayApp {
    pub fn new(sim: Simulation, config: &Config) -> Self {
        let mut canvas = Canvas::new(config.grid_unit);
        // Seeded cells are drawn straight away, like any other placement
        for &cell in sim.grid().live_cells() {
            canvas.fill(cell);
        }

        Self {
            sim,
            canvas,
            canvas_size: config.canvas_size as f32,
            cells_across: config.cells_across(),
            selected_pattern: 0,
            live_color: Color32::BLACK,
            dead_color: Color32::WHITE,
            failure: None,
        }
    }

    fn place(&mut self, cell: Cell) {
        if self.sim.place(cell) {
            self.canvas.fill(cell);
        }
    }

    fn place_selected_pattern(&mut self) {
        let Some(pattern) = PATTERNS.get(self.selected_pattern) else {
            return;
        };

        // Centre it on the visible board
        let (w, h) = pattern.size();
        let origin = Cell::new(
            self.cells_across.saturating_sub(w) / 2,
            self.cells_across.saturating_sub(h) / 2,
        );

        self.sim.place_pattern(pattern, origin);
        for cell in pattern.cells_at(origin) {
            self.canvas.fill(cell);
        }
    }

    fn step_if_due(&mut self) {
        match self.sim.tick(Instant::now()) {
            Ok(Some(result)) => self.canvas.apply(&result),
            Ok(None) => {}
            Err(e) => {
                error!(error = %e, generation = self.sim.generation(), "step rejected");
                self.sim.stop();
                self.failure = Some(e.to_string());
            }
        }
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("▶ Start").clicked() {
                self.sim.start(Instant::now());
            }
            if ui.button("⏸ Stop").clicked() {
                self.sim.stop();
            }

            ui.separator();

            ui.label("Pattern:");
            egui::ComboBox::from_id_source("pattern_selector")
                .selected_text(PATTERNS[self.selected_pattern].name)
                .show_ui(ui, |ui| {
                    for (i, pattern) in PATTERNS.iter().enumerate() {
                        ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                    }
                });
            if ui.button("Place Pattern").clicked() {
                self.place_selected_pattern();
            }

            ui.separator();

            ui.label(format!("Generation: {}", self.sim.generation()));
            ui.label(format!("Live cells: {}", self.sim.grid().population()));
        });

        ui.horizontal(|ui| {
            ui.label("Speed:");
            let interval = self.sim.scheduler().interval();
            let mut speed = 1000.0 / interval.as_millis().max(1) as f32;
            if ui.add(egui::Slider::new(&mut speed, 0.5..=60.0).suffix(" gen/sec")).changed() {
                let millis = (1000.0 / speed).max(1.0) as u64;
                self.sim.scheduler_mut().set_interval(Duration::from_millis(millis));
            }

            ui.separator();

            ui.label("Live:");
            ui.color_edit_button_srgba(&mut self.live_color);
            ui.label("Dead:");
            ui.color_edit_button_srgba(&mut self.dead_color);
        });

        if let Some(failure) = &self.failure {
            ui.colored_label(Color32::RED, failure);
        }
    }

    fn board(&mut self, ui: &mut egui::Ui) {
        let unit = self.canvas.unit();
        let (response, painter) =
            ui.allocate_painter(Vec2::splat(self.canvas_size), egui::Sense::click());
        let board = response.rect;
        let origin = board.min;

        painter.rect_filled(board, 0.0, self.dead_color);

        // Grid lines
        let line = Stroke::new(1.0, Color32::from_gray(160));
        let mut offset = unit;
        while offset < self.canvas_size {
            painter.line_segment(
                [origin + Vec2::new(offset, 0.0), origin + Vec2::new(offset, self.canvas_size)],
                line,
            );
            painter.line_segment(
                [origin + Vec2::new(0.0, offset), origin + Vec2::new(self.canvas_size, offset)],
                line,
            );
            offset += unit;
        }

        // Only squares on the surface; the grid itself keeps going
        for cell in self.canvas.filled() {
            let rect = self.canvas.square(origin, cell);
            if board.intersects(rect) {
                painter.rect_filled(rect.intersect(board), 0.0, self.live_color);
            }
        }

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                match self.canvas.cell_at(origin, pos) {
                    Ok(cell) => self.place(cell),
                    Err(e) => debug!(error = %e, "click ignored"),
                }
            }
        }
    }
}

impl eframe::App for ConwayApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.step_if_due();

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.heading("Conway's Game of Life");
            self.controls(ui);
            ui.label("Click squares to bring cells to life. Start/Stop runs the generations.");
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both().show(ui, |ui| {
                self.board(ui);
            });
        });

        // Wake up again when the next generation is due
        if let Some(wait) = self.sim.scheduler().time_until_next(Instant::now()) {
            ctx.request_repaint_after(wait);
        }
    }
}

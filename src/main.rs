//! duality-rs - Wave-Particle Duality Visualizer
//!
//! Animates a sine wave with particles riding it. The wave and the particles
//! can be toggled independently, and speed and wavelength are adjustable.
//!
//! Any parameter change restarts the animation from phase zero on a fresh
//! canvas.

use eframe::egui::{self, Color32, RichText};

mod animation;
mod config;
mod fonts;
mod params;
mod render;
mod stage;
mod text;

use animation::{RepaintScheduler, PARTICLE_COUNT};
use config::AppConfig;
use params::{Parameters, SPEED_RANGE, SPEED_STEP, WAVELENGTH_RANGE, WAVELENGTH_STEP};
use render::{canvas_rgba, CanvasView};
use stage::{Stage, CANVAS_BACKGROUND};

const WAVE_ACCENT: Color32 = Color32::from_rgb(0, 255, 255);
const PARTICLE_ACCENT: Color32 = Color32::from_rgb(255, 0, 255);

fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("Starting duality-rs");

    let config = AppConfig::load();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 900.0])
            .with_title(text::WINDOW_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        "duality-rs",
        options,
        Box::new(move |cc| Ok(Box::new(DualityApp::new(cc, config)))),
    )
}

struct DualityApp {
    stage: Stage<RepaintScheduler>,
    view: CanvasView,
}

impl DualityApp {
    fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        fonts::install(&cc.egui_ctx, config.font_path.as_deref());
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        let scheduler = RepaintScheduler::new(cc.egui_ctx.clone());

        Self {
            stage: Stage::new(scheduler, config.loop_options(), config.parameters),
            view: CanvasView::new(),
        }
    }

    fn draw_header(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(20.0);
            ui.label(
                RichText::new(text::TITLE.arabic)
                    .size(40.0)
                    .strong()
                    .color(WAVE_ACCENT),
            );
            ui.label(
                RichText::new(text::TITLE.english)
                    .size(24.0)
                    .color(Color32::from_gray(0x88)),
            );
            ui.add_space(30.0);
        });
    }

    /// Draw the controls bound to `params`
    fn draw_controls(&self, ui: &mut egui::Ui, params: &mut Parameters) {
        panel_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());

            ui.horizontal(|ui| {
                ui.checkbox(&mut params.show_wave, text::SHOW_WAVE.inline());
                ui.add_space(20.0);
                ui.checkbox(&mut params.show_particle, text::SHOW_PARTICLES.inline());
            });

            ui.add_space(15.0);

            ui.label(format!("{}: {}", text::SPEED.inline(), params.speed));
            ui.add(
                egui::Slider::new(&mut params.speed, SPEED_RANGE)
                    .step_by(SPEED_STEP as f64)
                    .show_value(false),
            );

            ui.add_space(10.0);

            ui.label(format!(
                "{}: {}",
                text::WAVELENGTH.inline(),
                params.wavelength
            ));
            ui.add(
                egui::Slider::new(&mut params.wavelength, WAVELENGTH_RANGE)
                    .step_by(WAVELENGTH_STEP as f64)
                    .show_value(false),
            );
        });
    }

    fn draw_info(&self, ui: &mut egui::Ui) {
        ui.columns(2, |columns| {
            info_box(&mut columns[0], text::WAVE_HEADING, &text::WAVE_PROPERTIES, WAVE_ACCENT);
            info_box(
                &mut columns[1],
                text::PARTICLE_HEADING,
                &text::PARTICLE_PROPERTIES,
                PARTICLE_ACCENT,
            );
        });
    }

    fn draw_description(&self, ui: &mut egui::Ui) {
        panel_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal_wrapped(|ui| {
                ui.label(RichText::new(text::DESCRIPTION_LEAD).strong());
                ui.label(text::DESCRIPTION[0]);
            });
            ui.add_space(8.0);
            ui.label(text::DESCRIPTION[1]);
        });
    }

    fn draw_status(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            match self.stage.state() {
                Some(state) => {
                    ui.small(format!("Frame: {}", state.frames()));
                    ui.separator();
                    ui.small(format!("Phase: {:.2}", state.phase()));
                }
                None => {
                    ui.small("Canvas unavailable");
                }
            }
            ui.separator();
            ui.small(format!("Particles: {}", PARTICLE_COUNT));
        });
    }
}

impl eframe::App for DualityApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.stage.tick();

        let mut params = self.stage.params();

        egui::CentralPanel::default()
            .frame(egui::Frame::central_panel(&ctx.style()).fill(CANVAS_BACKGROUND))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.set_max_width(900.0);

                        self.draw_header(ui);

                        self.view.show(ui, self.stage.surface());
                        ui.add_space(30.0);

                        self.draw_controls(ui, &mut params);
                        ui.add_space(30.0);

                        self.draw_info(ui);
                        ui.add_space(30.0);

                        self.draw_description(ui);
                        ui.add_space(30.0);

                        ui.vertical_centered(|ui| {
                            ui.label(RichText::new(text::FOOTER).color(Color32::from_gray(0x88)));
                        });
                        ui.add_space(10.0);

                        self.draw_status(ui);
                    });
            });

        self.stage.set_params(params);
    }
}

fn panel_frame() -> egui::Frame {
    egui::Frame::none()
        .fill(canvas_rgba(26, 26, 62, 0.8))
        .rounding(15.0)
        .inner_margin(25.0)
}

fn info_box(ui: &mut egui::Ui, heading: &str, items: &[text::Bilingual], accent: Color32) {
    panel_frame()
        .stroke(egui::Stroke::new(1.0, accent.gamma_multiply(0.3)))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(heading).size(20.0).color(accent));
            ui.add_space(8.0);
            for item in items {
                ui.label(format!("• {}", item.inline()));
            }
        });
}

pub mod loader;
pub mod state;

use std::{path::PathBuf, time::Instant};

use eframe::{
    egui::{self, Color32, ViewportCommand},
    App, Frame,
};
use log::{debug, info};

use crate::{
    session::SessionEvent,
    timer::IntervalPreset,
    ui::{draw_text_with_bg, play_pause_icon, ImageMetrics, KeyboardState},
};

use self::{loader::Loader, state::AppState};

pub struct SlideshowApp {
    pub state: AppState,
    pub fullscreen: bool,
    loader: Loader,
    /// Path whose pixels are currently uploaded, or that failed to decode.
    shown: Option<PathBuf>,
    texture: Option<egui::TextureHandle>,
}

impl SlideshowApp {
    pub fn new(state: AppState, fullscreen: bool) -> Self {
        Self {
            state,
            fullscreen,
            loader: Loader::new(),
            shown: None,
            texture: None,
        }
    }

    fn pick_folder(&mut self) {
        let picked = rfd::FileDialog::new()
            .set_title("Choose a folder to scan")
            .pick_folder();
        match picked {
            Some(folder) => self.state.folder_chosen(&folder),
            None => info!("Folder selection cancelled"),
        }
    }

    fn start(&mut self, ctx: &egui::Context) {
        if self.state.start_session(Instant::now()) && self.fullscreen {
            ctx.send_viewport_cmd(ViewportCommand::Fullscreen(true));
        }
    }

    fn stop(&mut self, ctx: &egui::Context) {
        self.state.end_session();
        self.shown = None;
        self.texture = None;
        if self.fullscreen {
            ctx.send_viewport_cmd(ViewportCommand::Fullscreen(false));
        }
    }

    /// Uploads the current image once the loader has it, or asks for it.
    fn sync_texture(&mut self, ctx: &egui::Context) {
        let Some(path) = self.state.current_image().map(|p| p.to_path_buf()) else {
            return;
        };
        if self.shown.as_ref() == Some(&path) {
            return;
        }
        let Some(decoded) = self.loader.get(&path) else {
            self.loader.request(&path);
            return;
        };
        match &decoded.color_image {
            Some(color_image) => {
                if let Some(texture) = self.texture.as_mut() {
                    texture.set(color_image.clone(), egui::TextureOptions::LINEAR);
                } else {
                    self.texture = Some(ctx.load_texture(
                        "slideshow-current",
                        color_image.clone(),
                        egui::TextureOptions::LINEAR,
                    ));
                }
            }
            None => self.texture = None,
        }
        self.shown = Some(path);
    }

    fn show_chooser(&mut self, ctx: &egui::Context) {
        let enabled = self.state.error.is_none();
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(enabled, |ui| {
                ui.vertical_centered_justified(|ui| {
                    if ui.button("Select a folder").clicked() {
                        self.pick_folder();
                    }
                    ui.add_space(4.0);
                    ui.label(self.state.folder_label.as_str());
                    ui.label(self.state.found_label.as_str());
                    ui.add_space(4.0);
                    ui.horizontal(|ui| {
                        let mut selected = self.state.preset;
                        for preset in IntervalPreset::ALL {
                            ui.radio_value(&mut selected, preset, preset.label());
                        }
                        if selected != self.state.preset {
                            self.state.select_preset(selected);
                        }
                    });
                    ui.add_space(4.0);
                    if ui.button("Draw!").clicked() {
                        self.start(ctx);
                    }
                    ui.add_space(8.0);
                    ui.small(self.state.status.as_str());
                });
            });
        });
    }

    fn show_presentation(&mut self, ctx: &egui::Context) {
        let keys = KeyboardState::read(ctx);
        if self.state.error.is_none() {
            if keys.escape {
                self.stop(ctx);
                return;
            }
            if keys.play_pause {
                self.state.toggle_pause();
            }
            if keys.next_image {
                self.state.next();
            }
            if keys.prev_image {
                self.state.prev();
            }
        }

        let now = Instant::now();
        if self.state.tick(now) == SessionEvent::AutoAdvanced {
            debug!("Auto-advanced to the next image");
        }
        self.sync_texture(ctx);

        let Some(session) = self.state.session.as_ref() else {
            return;
        };
        let timer_label = session.timer_label().to_string();
        let paused = session.is_paused();
        let wait = session.time_until_tick(now);

        let mut stop = false;
        egui::TopBottomPanel::bottom("controls").show(ctx, |ui| {
            ui.columns(4, |columns| {
                if columns[0].button("Previous").clicked() {
                    self.state.prev();
                }
                if columns[1].button(play_pause_icon(paused)).clicked() {
                    self.state.toggle_pause();
                }
                if columns[2].button("Next").clicked() {
                    self.state.next();
                }
                if columns[3].button("Stop").clicked() {
                    stop = true;
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::hover());
            painter.rect_filled(response.rect, 0.0, Color32::BLACK);
            let canvas = response.rect.shrink(10.0);

            match (&self.texture, &self.shown) {
                (Some(texture), Some(_)) => {
                    let metrics = ImageMetrics::new(canvas, texture.size_vec2());
                    painter.image(
                        texture.id(),
                        metrics.image_rect,
                        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                        Color32::WHITE,
                    );
                }
                // Undecodable files stay in rotation as blank slides.
                (None, Some(_)) => {}
                _ => {
                    painter.text(
                        response.rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "Loading...",
                        egui::FontId::proportional(24.0),
                        Color32::WHITE,
                    );
                }
            }

            draw_text_with_bg(
                &painter,
                response.rect.right_top() + egui::vec2(-12.0, 12.0),
                egui::Align2::RIGHT_TOP,
                timer_label,
                egui::FontId::monospace(20.0),
                Color32::WHITE,
            );

            if let Some(path) = &self.shown {
                draw_text_with_bg(
                    &painter,
                    response.rect.left_bottom() + egui::vec2(12.0, -12.0),
                    egui::Align2::LEFT_BOTTOM,
                    format!("{} | {}", path.display(), self.state.status),
                    egui::FontId::monospace(14.0),
                    Color32::from_gray(200),
                );
            }
        });

        if stop {
            self.stop(ctx);
            return;
        }
        ctx.request_repaint_after(wait);
    }

    fn show_error(&mut self, ctx: &egui::Context) {
        let Some(message) = self.state.error.clone() else {
            return;
        };
        egui::Window::new("Error")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(message);
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    self.state.dismiss_error();
                }
            });
    }
}

impl App for SlideshowApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        if self.loader.update() > 0 {
            ctx.request_repaint();
        }

        // Closing the window during a presentation only ends the session.
        if self.state.is_presenting() && ctx.input(|i| i.viewport().close_requested()) {
            ctx.send_viewport_cmd(ViewportCommand::CancelClose);
            self.stop(ctx);
        }

        if self.state.is_presenting() {
            self.show_presentation(ctx);
        } else {
            self.show_chooser(ctx);
        }
        self.show_error(ctx);
    }
}

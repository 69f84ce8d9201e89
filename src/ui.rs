use eframe::egui::{self, Color32, Rect, Vec2};

pub struct ImageMetrics {
    pub image_rect: Rect,
    pub image_size: Vec2,
    pub scale: f32,
}

impl ImageMetrics {
    pub fn new(canvas: Rect, image_size: Vec2) -> Self {
        let (display, scale) = fit_within(image_size, canvas.size());
        let offset = (canvas.size() - display) * 0.5;
        let image_rect = Rect::from_min_size(canvas.min + offset, display);
        Self {
            image_rect,
            image_size,
            scale,
        }
    }
}

pub fn fit_within(image_size: Vec2, available: Vec2) -> (Vec2, f32) {
    let safe_size = egui::vec2(image_size.x.max(1.0), image_size.y.max(1.0));
    let scale = (available.x / safe_size.x)
        .min(available.y / safe_size.y)
        .max(0.01);
    (safe_size * scale, scale)
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardState {
    pub next_image: bool,
    pub prev_image: bool,
    pub play_pause: bool,
    pub escape: bool,
}

impl KeyboardState {
    pub fn read(ctx: &egui::Context) -> Self {
        ctx.input(|input| KeyboardState {
            next_image: input.key_pressed(egui::Key::ArrowRight),
            prev_image: input.key_pressed(egui::Key::ArrowLeft)
                || input.key_pressed(egui::Key::Backspace),
            play_pause: input.key_pressed(egui::Key::Space),
            escape: input.key_pressed(egui::Key::Escape),
        })
    }
}

/// Icon for the play/pause button: it shows the action a click performs.
pub fn play_pause_icon(paused: bool) -> &'static str {
    if paused {
        "▶"
    } else {
        "⏸"
    }
}

pub fn draw_text_with_bg(
    painter: &egui::Painter,
    pos: egui::Pos2,
    align: egui::Align2,
    text: String,
    font: egui::FontId,
    color: Color32,
) {
    let galley = painter.layout_no_wrap(text, font, color);
    let rect = align.anchor_size(pos, galley.size());
    painter.rect_filled(rect.expand(4.0), 4.0, Color32::from_black_alpha(178));
    painter.galley(rect.min, galley, Color32::WHITE);
}

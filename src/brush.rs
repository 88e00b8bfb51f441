use egui::Color32;

pub const MIN_SIZE: i32 = 5;
pub const MAX_SIZE: i32 = 100;
/// How much the size buttons and `+`/`-` keys change the brush per press.
pub const SIZE_STEP: i32 = 5;

/// The ten preset swatches, selectable by click or with digit keys 1..=9.
pub const PRESET_COLORS: [Color32; 10] = [
    Color32::BLACK,
    Color32::WHITE,
    Color32::from_rgb(255, 0, 0),
    Color32::from_rgb(0, 255, 0),
    Color32::from_rgb(0, 0, 255),
    Color32::from_rgb(255, 255, 0),
    Color32::from_rgb(255, 0, 255),
    Color32::from_rgb(0, 255, 255),
    Color32::from_rgb(255, 165, 0),
    Color32::from_rgb(128, 0, 128),
];

/// Current stroke width and color. Size is always within `[MIN_SIZE,
/// MAX_SIZE]`; out-of-range requests are clamped, never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brush {
    size: i32,
    color: Color32,
}

impl Brush {
    pub fn new(size: i32, color: Color32) -> Self {
        Self {
            size: size.clamp(MIN_SIZE, MAX_SIZE),
            color,
        }
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn set_size(&mut self, size: i32) {
        self.size = size.clamp(MIN_SIZE, MAX_SIZE);
    }

    pub fn adjust_size(&mut self, delta: i32) {
        self.set_size(self.size + delta);
    }

    pub fn set_color(&mut self, color: Color32) {
        self.color = color;
    }
}

impl Default for Brush {
    fn default() -> Self {
        Self::new(30, Color32::BLACK)
    }
}

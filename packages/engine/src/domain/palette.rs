//! Colors and paint styles for stage bodies

/// Packed 0xRRGGBB color
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color(pub u32);

impl Color {
    pub const WHITE: Color = Color(0xFFFFFF);
    pub const GOLD: Color = Color(0xFFD700);

    /// CSS hex form, e.g. `#4caf50`
    pub fn to_css(&self) -> String {
        format!("#{:06x}", self.0 & 0xFF_FFFF)
    }
}

/// Paint style of a body
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Style {
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: f32,
    pub visible: bool,
}

impl Style {
    pub fn new(fill: Color, stroke: Color, stroke_width: f32) -> Self {
        Self { fill, stroke, stroke_width, visible: true }
    }

    pub fn invisible() -> Self {
        Self { fill: Color(0), stroke: Color(0), stroke_width: 0.0, visible: false }
    }
}

/// Balloon fills: festive green and warm yellow
pub const BALLOON_PALETTE: [Color; 2] = [Color(0x11D462), Color(0xFBD051)];

/// Banknote fills
pub const NOTE_PALETTE: [Color; 5] = [
    Color(0x4CAF50),
    Color(0xFF9800),
    Color(0x2196F3),
    Color(0xE91E63),
    Color(0x9C27B0),
];

pub const CAKE_FILL: Color = Color(0xEB8B47);
pub const CAKE_STROKE: Color = Color(0xFCDE83);

/// Cyclic pick by index; empty palettes fall back to white
pub fn cycle(palette: &[Color], index: usize) -> Color {
    if palette.is_empty() {
        return Color::WHITE;
    }
    palette[index % palette.len()]
}

pub fn balloon_style(index: usize) -> Style {
    Style::new(cycle(&BALLOON_PALETTE, index), Color::WHITE, 2.0)
}

pub fn cake_style() -> Style {
    Style::new(CAKE_FILL, CAKE_STROKE, 2.0)
}

pub fn note_style(index: usize) -> Style {
    Style::new(cycle(&NOTE_PALETTE, index), Color::GOLD, 1.0)
}

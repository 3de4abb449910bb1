//! Screen geometry for the carousel: where each role sits and where the
//! controls can be hit. Positions are in render-texture pixels unless noted.

use crate::input::Control;
use crate::state::Role;

const BUTTON_SIZE: f32 = 80.0;
const BUTTON_MARGIN: f32 = 40.0;
const INDICATOR_RADIUS: f32 = 10.0;
const INDICATOR_SPACING: f32 = 36.0;
const INDICATOR_BOTTOM: f32 = 60.0;
const SLIDE_CENTER_Y: f32 = 0.45;

/// Target pose of a slide. `x`/`y` are the normalized center (0..1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    pub opacity: f32,
}

impl Placement {
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Active => Self { x: 0.5,  y: SLIDE_CENTER_Y, scale: 1.0, opacity: 1.0 },
            Role::Prev   => Self { x: 0.18, y: SLIDE_CENTER_Y, scale: 0.6, opacity: 0.5 },
            Role::Next   => Self { x: 0.82, y: SLIDE_CENTER_Y, scale: 0.6, opacity: 0.5 },
            Role::None   => Self { x: 0.5,  y: SLIDE_CENTER_Y, scale: 0.4, opacity: 0.0 },
        }
    }
}

/// Scale that fits an image inside the box without enlarging it.
pub fn fit_scale(width: f32, height: f32, max_width: f32, max_height: f32) -> f32 {
    if width <= 0.0 || height <= 0.0 {
        return 1.0;
    }
    (max_width / width).min(max_height / height).min(1.0)
}

/// Maps a window position onto the fixed-size render texture.
pub fn to_render_space(x: f32, y: f32, screen: (f32, f32), render: (f32, f32)) -> (f32, f32) {
    if screen.0 <= 0.0 || screen.1 <= 0.0 {
        return (x, y);
    }
    (x * render.0 / screen.0, y * render.1 / screen.1)
}

/// Left edge for horizontally centered text, using an average glyph width
/// of half the font size.
pub fn centered_text_x(text: &str, font_size: i32, width: f32) -> i32 {
    let text_width = text.chars().count() as f32 * font_size as f32 * 0.5;
    ((width - text_width) * 0.5).max(0.0) as i32
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width * 0.5, self.y + self.height * 0.5)
    }
}

#[derive(Debug, Clone)]
pub struct ControlLayout {
    prev: Bounds,
    next: Bounds,
    indicators: Vec<Bounds>,
}

impl ControlLayout {
    pub fn new(width: f32, height: f32, slide_count: usize) -> Self {
        let button_y = height * SLIDE_CENTER_Y - BUTTON_SIZE * 0.5;
        let prev = Bounds { x: BUTTON_MARGIN, y: button_y, width: BUTTON_SIZE, height: BUTTON_SIZE };
        let next = Bounds {
            x: width - BUTTON_MARGIN - BUTTON_SIZE,
            y: button_y,
            width: BUTTON_SIZE,
            height: BUTTON_SIZE,
        };

        let row_width = slide_count.saturating_sub(1) as f32 * INDICATOR_SPACING;
        let first_x = width * 0.5 - row_width * 0.5;
        let center_y = height - INDICATOR_BOTTOM;
        let indicators = (0..slide_count)
            .map(|index| Bounds {
                x: first_x + index as f32 * INDICATOR_SPACING - INDICATOR_RADIUS,
                y: center_y - INDICATOR_RADIUS,
                width: INDICATOR_RADIUS * 2.0,
                height: INDICATOR_RADIUS * 2.0,
            })
            .collect();

        Self { prev, next, indicators }
    }

    pub fn prev_button(&self) -> Bounds {
        self.prev
    }

    pub fn next_button(&self) -> Bounds {
        self.next
    }

    pub fn indicators(&self) -> &[Bounds] {
        &self.indicators
    }

    pub fn indicator_radius(&self) -> f32 {
        INDICATOR_RADIUS
    }

    pub fn hit_test(&self, x: f32, y: f32) -> Option<Control> {
        if self.prev.contains(x, y) {
            return Some(Control::PrevButton);
        }
        if self.next.contains(x, y) {
            return Some(Control::NextButton);
        }
        self.indicators
            .iter()
            .position(|dot| dot.contains(x, y))
            .map(Control::Indicator)
    }
}

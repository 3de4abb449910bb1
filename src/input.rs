use crate::constants::SWIPE_THRESHOLD;

/// Discrete navigation request understood by the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Next,
    Previous,
    GoTo(usize),
}

/// On-screen carousel controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    PrevButton,
    NextButton,
    Indicator(usize),
}

impl Control {
    pub fn command(self) -> Command {
        match self {
            Control::PrevButton => Command::Previous,
            Control::NextButton => Command::Next,
            Control::Indicator(index) => Command::GoTo(index),
        }
    }
}

/// Keys the page reacts to. Anything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Escape,
    Other,
}

impl Key {
    /// Arrow keys drive the carousel regardless of focus.
    pub fn carousel_command(self) -> Option<Command> {
        match self {
            Key::ArrowLeft => Some(Command::Previous),
            Key::ArrowRight => Some(Command::Next),
            Key::Escape | Key::Other => None,
        }
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        match name {
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "Escape" => Key::Escape,
            _ => Key::Other,
        }
    }
}

/// Evaluates a finished horizontal gesture.
///
/// Dragging leftwards (start right of end) advances, rightwards goes back.
/// Travel must strictly exceed `threshold`.
pub fn swipe_command(start_x: f32, end_x: f32, threshold: f32) -> Option<Command> {
    let diff = start_x - end_x;
    if diff.abs() <= threshold {
        return None;
    }

    if diff > 0.0 { Some(Command::Next) } else { Some(Command::Previous) }
}

/// One touch session at a time: begin records X, end evaluates once.
#[derive(Debug)]
pub struct SwipeTracker {
    start_x: Option<f32>,
    threshold: f32,
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(SWIPE_THRESHOLD)
    }
}

impl SwipeTracker {
    pub fn new(threshold: f32) -> Self {
        Self { start_x: None, threshold }
    }

    pub fn touch_start(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    pub fn touch_end(&mut self, x: f32) -> Option<Command> {
        let start_x = self.start_x.take()?;
        swipe_command(start_x, x, self.threshold)
    }

    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }
}

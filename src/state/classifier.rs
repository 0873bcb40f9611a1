use crate::model::{ClickKind, MoveSuppression};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    pub move_sensitivity: f64,
    pub scroll_sensitivity: f64,
    pub click_threshold: f64,
    pub move_suppression: MoveSuppression,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            move_sensitivity: 4.0,
            scroll_sensitivity: 2.0,
            click_threshold: 10.0,
            move_suppression: MoveSuppression::BothAxesZero,
        }
    }
}

/// What one primary-touch delta turns into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Motion {
    Move { x: i32, y: i32 },
    /// Scaled vertical delta, still fractional; the accumulator rounds it.
    Scroll(f64),
    None,
}

/// Classifies by the touch count captured at session start, never the live count.
pub fn classify_motion(initial_touch_count: usize, delta: (f64, f64), cfg: &GestureConfig) -> Motion {
    let (dx, dy) = delta;
    match initial_touch_count {
        1 => {
            let x = (dx * cfg.move_sensitivity).round();
            let y = (dy * cfg.move_sensitivity).round();
            if !x.is_finite() || !y.is_finite() {
                return Motion::None;
            }
            let (x, y) = (x as i32, y as i32);
            let suppressed = match cfg.move_suppression {
                MoveSuppression::BothAxesZero => x == 0 && y == 0,
                MoveSuppression::AnyAxisZero => x == 0 || y == 0,
            };
            if suppressed { Motion::None } else { Motion::Move { x, y } }
        }
        2 => Motion::Scroll(dy * cfg.scroll_sensitivity),
        _ => Motion::None,
    }
}

/// Click decision when the last contact lifts.
pub fn classify_release(
    initial_touch_count: usize,
    total_movement: f64,
    click_sent: bool,
    cfg: &GestureConfig,
) -> Option<ClickKind> {
    if click_sent || !(total_movement < cfg.click_threshold) {
        return None;
    }
    match initial_touch_count {
        1 => Some(ClickKind::Left),
        2 => Some(ClickKind::Right),
        _ => None,
    }
}

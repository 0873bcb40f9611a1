//! Wire commands and user settings for the touch remote.
//! Commands serialize to the bare JSON payload the host expects; the command
//! name travels in the URL.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use std::time::Duration;
use yew::Reducible;

use crate::state::GestureConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClickKind {
    Left,
    Right,
}

impl ClickKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ClickKind::Left => "left",
            ClickKind::Right => "right",
        }
    }
}

/// A single keystroke for the `type` command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum Key {
    Char(char),
    Backspace,
    Enter,
    Space,
}

impl Key {
    pub fn wire_name(&self) -> String {
        match self {
            Key::Char(c) => c.to_string(),
            Key::Backspace => "backspace".to_string(),
            Key::Enter => "enter".to_string(),
            Key::Space => "space".to_string(),
        }
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        key.wire_name()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Command {
    Move { x: i32, y: i32 },
    Scroll { y: i32 },
    Click {
        #[serde(rename = "type")]
        kind: ClickKind,
    },
    Type { key: Key },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Move { .. } => "move",
            Command::Scroll { .. } => "scroll",
            Command::Click { .. } => "click",
            Command::Type { .. } => "type",
        }
    }

    /// Move and scroll go through the throttle; clicks and keys never do.
    pub fn is_continuous(&self) -> bool {
        matches!(self, Command::Move { .. } | Command::Scroll { .. })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WireStyle {
    /// `POST {base}/{command}` with a JSON payload.
    #[default]
    Json,
    /// `GET {base}/{command}/{args..}`, as older hosts expect.
    Path,
}

/// Which rounded moves count as "nothing to send".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveSuppression {
    /// Drop only `(0, 0)`.
    #[default]
    BothAxesZero,
    /// Drop a move as soon as either axis rounds to zero.
    AnyAxisZero,
}

pub const MOVE_SENSITIVITY_RANGE: (f64, f64) = (0.5, 10.0);
pub const SCROLL_SENSITIVITY_RANGE: (f64, f64) = (0.5, 10.0);
pub const CLICK_THRESHOLD_RANGE: (f64, f64) = (1.0, 50.0);
pub const SEND_INTERVAL_MAX_MS: u32 = 100;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub move_sensitivity: f64,
    pub scroll_sensitivity: f64,
    /// Max primary-touch path length (px) for a release to count as a click.
    pub click_threshold: f64,
    pub send_interval_ms: u32,
    pub move_suppression: MoveSuppression,
    pub wire_style: WireStyle,
    /// Empty means same origin as the page.
    pub base_url: String,
    pub show_debug: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            move_sensitivity: 4.0,
            scroll_sensitivity: 2.0,
            click_threshold: 10.0,
            send_interval_ms: 16,
            move_suppression: MoveSuppression::default(),
            wire_style: WireStyle::default(),
            base_url: String::new(),
            show_debug: false,
        }
    }
}

impl Settings {
    pub fn gesture_config(&self) -> GestureConfig {
        GestureConfig {
            move_sensitivity: self.move_sensitivity,
            scroll_sensitivity: self.scroll_sensitivity,
            click_threshold: self.click_threshold,
            move_suppression: self.move_suppression,
        }
    }

    pub fn send_interval(&self) -> Duration {
        Duration::from_millis(self.send_interval_ms as u64)
    }
}

fn clamp_finite(value: f64, (lo, hi): (f64, f64)) -> Option<f64> {
    if value.is_finite() { Some(value.clamp(lo, hi)) } else { None }
}

// ---------------- Reducer & Actions -----------------
#[derive(Clone, Debug)]
pub enum SettingsAction {
    SetMoveSensitivity(f64),
    SetScrollSensitivity(f64),
    SetClickThreshold(f64),
    SetSendInterval(u32),
    SetMoveSuppression(MoveSuppression),
    SetWireStyle(WireStyle),
    SetBaseUrl(String),
    ToggleDebug,
    ResetDefaults,
}

impl Reducible for Settings {
    type Action = SettingsAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use SettingsAction::*;
        let mut new = (*self).clone();
        match action {
            SetMoveSensitivity(v) => match clamp_finite(v, MOVE_SENSITIVITY_RANGE) {
                Some(v) => new.move_sensitivity = v,
                None => return self,
            },
            SetScrollSensitivity(v) => match clamp_finite(v, SCROLL_SENSITIVITY_RANGE) {
                Some(v) => new.scroll_sensitivity = v,
                None => return self,
            },
            SetClickThreshold(v) => match clamp_finite(v, CLICK_THRESHOLD_RANGE) {
                Some(v) => new.click_threshold = v,
                None => return self,
            },
            SetSendInterval(ms) => new.send_interval_ms = ms.min(SEND_INTERVAL_MAX_MS),
            SetMoveSuppression(p) => new.move_suppression = p,
            SetWireStyle(w) => new.wire_style = w,
            SetBaseUrl(url) => new.base_url = url.trim().trim_end_matches('/').to_string(),
            ToggleDebug => new.show_debug = !new.show_debug,
            ResetDefaults => new = Settings::default(),
        }
        if new == *self {
            return self;
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(Command::Move { x: 3, y: -4 }, json!({"x": 3, "y": -4}))]
    #[case(Command::Scroll { y: -2 }, json!({"y": -2}))]
    #[case(Command::Click { kind: ClickKind::Left }, json!({"type": "left"}))]
    #[case(Command::Click { kind: ClickKind::Right }, json!({"type": "right"}))]
    #[case(Command::Type { key: Key::Char('a') }, json!({"key": "a"}))]
    #[case(Command::Type { key: Key::Backspace }, json!({"key": "backspace"}))]
    #[case(Command::Type { key: Key::Enter }, json!({"key": "enter"}))]
    #[case(Command::Type { key: Key::Space }, json!({"key": "space"}))]
    fn command_payloads(#[case] command: Command, #[case] expected: serde_json::Value) {
        assert_eq!(serde_json::to_value(&command).unwrap(), expected);
    }

    #[test]
    fn only_move_and_scroll_are_throttled() {
        assert!(Command::Move { x: 1, y: 0 }.is_continuous());
        assert!(Command::Scroll { y: 1 }.is_continuous());
        assert!(!Command::Click { kind: ClickKind::Left }.is_continuous());
        assert!(!Command::Type { key: Key::Enter }.is_continuous());
    }

    #[test]
    fn defaults_match_documented_values() {
        let s = Settings::default();
        assert_eq!(s.move_sensitivity, 4.0);
        assert_eq!(s.scroll_sensitivity, 2.0);
        assert_eq!(s.click_threshold, 10.0);
        assert_eq!(s.send_interval(), Duration::from_millis(16));
    }

    #[test]
    fn partial_stored_settings_fill_in_defaults() {
        let s: Settings = serde_json::from_str(r#"{"move_sensitivity": 6.5}"#).unwrap();
        assert_eq!(s.move_sensitivity, 6.5);
        assert_eq!(s.scroll_sensitivity, 2.0);
        assert_eq!(s.wire_style, WireStyle::Json);
    }

    #[test]
    fn reducer_clamps_and_rejects_nan() {
        let s = Rc::new(Settings::default());
        let s = s.reduce(SettingsAction::SetMoveSensitivity(99.0));
        assert_eq!(s.move_sensitivity, MOVE_SENSITIVITY_RANGE.1);
        let s = s.reduce(SettingsAction::SetClickThreshold(f64::NAN));
        assert_eq!(s.click_threshold, 10.0);
        let s = s.reduce(SettingsAction::SetSendInterval(5_000));
        assert_eq!(s.send_interval_ms, SEND_INTERVAL_MAX_MS);
    }

    #[test]
    fn reducer_returns_same_rc_when_unchanged() {
        let s = Rc::new(Settings::default());
        let same = s.clone().reduce(SettingsAction::SetMoveSensitivity(4.0));
        assert!(Rc::ptr_eq(&s, &same));
    }

    #[test]
    fn base_url_is_trimmed() {
        let s = Rc::new(Settings::default());
        let s = s.reduce(SettingsAction::SetBaseUrl(" http://pc.local:5000/ ".into()));
        assert_eq!(s.base_url, "http://pc.local:5000");
    }

    #[test]
    fn reset_restores_defaults() {
        let s = Rc::new(Settings::default())
            .reduce(SettingsAction::ToggleDebug)
            .reduce(SettingsAction::SetWireStyle(WireStyle::Path))
            .reduce(SettingsAction::ResetDefaults);
        assert_eq!(*s, Settings::default());
    }
}

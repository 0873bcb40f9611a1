// Virtual keyboard bridge. Mobile keyboards only report "the value changed",
// so the field keeps one sentinel char: an empty field means backspace and
// anything beyond the sentinel is newly typed text.

use crate::model::Key;

pub const SENTINEL: char = 'x';

const KEY_CODE_ENTER: u32 = 13;
const KEY_CODE_SPACE: u32 = 32;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyInputBridge {
    buffer: Option<String>,
}

impl KeyInputBridge {
    /// Returns the value the text field should be set to.
    pub fn activate(&mut self) -> &str {
        self.buffer.insert(SENTINEL.to_string())
    }

    pub fn is_active(&self) -> bool {
        self.buffer.is_some()
    }

    pub fn buffer(&self) -> Option<&str> {
        self.buffer.as_deref()
    }

    /// Diffs the new field value against the sentinel. The buffer is always
    /// back at the sentinel afterwards.
    pub fn on_input(&mut self, value: &str) -> Vec<Key> {
        let Some(buffer) = self.buffer.as_mut() else {
            return Vec::new();
        };
        let keys = if value.is_empty() {
            vec![Key::Backspace]
        } else {
            let typed = match value.find(SENTINEL) {
                Some(at) => {
                    let mut s = value.to_string();
                    s.remove(at);
                    s
                }
                None => value.to_string(),
            };
            typed.chars().map(Key::Char).collect()
        };
        buffer.clear();
        buffer.push(SENTINEL);
        keys
    }

    /// Keys handled before the field sees them. `Some` means the caller must
    /// prevent the default insertion.
    pub fn on_key_down(&self, key_code: u32) -> Option<Key> {
        if !self.is_active() {
            return None;
        }
        match key_code {
            KEY_CODE_ENTER => Some(Key::Enter),
            KEY_CODE_SPACE => Some(Key::Space),
            _ => None,
        }
    }

    pub fn deactivate(&mut self) {
        self.buffer = None;
    }
}

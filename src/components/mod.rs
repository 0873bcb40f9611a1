pub mod app;
pub mod controls_panel;
pub mod debug_panel;
pub mod keyboard_input;
pub mod settings_modal;
pub mod trackpad_view;

use std::cell::RefCell;
use std::rc::Rc;

use crate::state::GestureEngine;

/// Shared engine, handed to components through context.
#[derive(Clone)]
pub struct EngineHandle(pub Rc<RefCell<GestureEngine>>);

impl PartialEq for EngineHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

pub mod classifier;
pub mod engine;
pub mod keys;
pub mod scroll;
pub mod throttle;
pub mod touch;

pub use classifier::GestureConfig;
pub use engine::{DispatchStats, GestureEngine};
pub use keys::KeyInputBridge;
pub use touch::{Contact, ContactEvent, SessionSnapshot};

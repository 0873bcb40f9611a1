use std::rc::Rc;
use std::time::Duration;

use crate::model::{Command, Key, Settings};
use crate::transport::CommandSender;
use crate::util::clog;

use super::classifier::{GestureConfig, Motion, classify_motion, classify_release};
use super::scroll::ScrollAccumulator;
use super::throttle::{Clock, CommandThrottler, MonotonicClock};
use super::touch::{Contact, ContactEvent, EndOutcome, SessionSnapshot, TouchId, TouchTracker};

/// Everything that lives from first contact until the surface is empty again.
#[derive(Clone, Debug, Default)]
pub struct GestureSession {
    pub tracker: TouchTracker,
    pub scroll: ScrollAccumulator,
    pub click_sent: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DispatchStats {
    pub sent: u32,
    /// Move/scroll commands lost to the throttle.
    pub dropped: u32,
}

pub struct GestureEngine<C: Clock = MonotonicClock> {
    session: GestureSession,
    throttle: CommandThrottler<C>,
    config: GestureConfig,
    sender: Rc<dyn CommandSender>,
    stats: DispatchStats,
}

impl GestureEngine<MonotonicClock> {
    pub fn new(settings: &Settings, sender: Rc<dyn CommandSender>) -> Self {
        let throttle = CommandThrottler::new(MonotonicClock::default(), settings.send_interval());
        Self::with_throttle(settings.gesture_config(), throttle, sender)
    }
}

impl<C: Clock> GestureEngine<C> {
    pub fn with_throttle(
        config: GestureConfig,
        throttle: CommandThrottler<C>,
        sender: Rc<dyn CommandSender>,
    ) -> Self {
        Self {
            session: GestureSession::default(),
            throttle,
            config,
            sender,
            stats: DispatchStats::default(),
        }
    }

    pub fn configure(&mut self, settings: &Settings) {
        self.config = settings.gesture_config();
        self.throttle.set_interval(settings.send_interval());
    }

    pub fn set_sender(&mut self, sender: Rc<dyn CommandSender>) {
        self.sender = sender;
    }

    pub fn handle(&mut self, event: ContactEvent) {
        match event {
            ContactEvent::ContactsBegan(contacts) => self.on_began(&contacts),
            ContactEvent::ContactsMoved(contacts) => self.on_moved(&contacts),
            ContactEvent::ContactsEnded(remaining) => self.on_ended(&remaining),
            ContactEvent::Cancelled => self.on_cancelled(),
        }
    }

    pub fn replay(&mut self, events: impl IntoIterator<Item = ContactEvent>) {
        for event in events {
            self.handle(event);
        }
    }

    pub fn send_key(&mut self, key: Key) {
        self.dispatch(Command::Type { key });
    }

    pub fn session(&self) -> &GestureSession {
        &self.session
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.session.tracker.snapshot()
    }

    pub fn stats(&self) -> DispatchStats {
        self.stats
    }

    pub fn send_interval(&self) -> Duration {
        self.throttle.interval()
    }

    fn on_began(&mut self, contacts: &[Contact]) {
        if self.session.tracker.is_empty() {
            self.session.scroll.reset();
        }
        self.session.tracker.begin(contacts);
        self.session.click_sent = false;
    }

    fn on_moved(&mut self, contacts: &[Contact]) {
        if self.session.tracker.is_empty() {
            return;
        }
        let Some(delta) = self.session.tracker.update(contacts) else {
            return;
        };
        let initial = self.session.tracker.initial_touch_count();
        match classify_motion(initial, delta, &self.config) {
            Motion::Move { x, y } => self.dispatch(Command::Move { x, y }),
            Motion::Scroll(d) => {
                if let Some(y) = self.session.scroll.push(d) {
                    self.dispatch(Command::Scroll { y });
                }
            }
            Motion::None => {}
        }
    }

    fn on_ended(&mut self, remaining: &[TouchId]) {
        let EndOutcome::SessionEnded { total_movement, initial_touch_count } =
            self.session.tracker.end(remaining)
        else {
            return;
        };
        let click = classify_release(initial_touch_count, total_movement, self.session.click_sent, &self.config);
        self.session.click_sent = true;
        match click {
            Some(kind) => {
                clog(&format!("session end: click {} ({:.1}px)", kind.as_str(), total_movement));
                self.dispatch(Command::Click { kind });
            }
            None => clog(&format!(
                "session end: no click (fingers={}, moved {:.1}px)",
                initial_touch_count, total_movement
            )),
        }
    }

    fn on_cancelled(&mut self) {
        if !self.session.tracker.is_empty() {
            clog("gesture cancelled");
        }
        self.session.tracker.cancel();
        self.session.scroll.reset();
    }

    /// Move/scroll must win the throttle; clicks and keys always go out.
    fn dispatch(&mut self, command: Command) {
        if command.is_continuous() && !self.throttle.try_acquire() {
            self.stats.dropped = self.stats.dropped.saturating_add(1);
            return;
        }
        self.stats.sent = self.stats.sent.saturating_add(1);
        self.sender.submit(command);
    }
}

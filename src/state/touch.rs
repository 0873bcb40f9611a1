// Active touch contacts for one gesture session.

pub type TouchId = i32;

/// One contact as reported by the input source, in surface coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contact {
    pub id: TouchId,
    pub x: f64,
    pub y: f64,
}

impl Contact {
    pub fn new(id: TouchId, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }
}

/// Typed input the engine consumes, independent of the platform event model.
#[derive(Clone, Debug, PartialEq)]
pub enum ContactEvent {
    /// A new contact landed; carries every contact now on the surface.
    ContactsBegan(Vec<Contact>),
    /// Contacts moved; the first entry is the primary touch.
    ContactsMoved(Vec<Contact>),
    /// A contact lifted; carries the ids still on the surface.
    ContactsEnded(Vec<TouchId>),
    Cancelled,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    pub id: TouchId,
    pub start_x: f64,
    pub start_y: f64,
    pub current_x: f64,
    pub current_y: f64,
}

impl TouchPoint {
    fn from_contact(c: &Contact) -> Self {
        Self {
            id: c.id,
            start_x: c.x,
            start_y: c.y,
            current_x: c.x,
            current_y: c.y,
        }
    }
}

/// What `end` observed about the session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EndOutcome {
    /// Nothing was on the surface; stray release after a cancel or a repeat.
    NoSession,
    StillActive,
    /// Last contact lifted. Values are captured before the reset.
    SessionEnded { total_movement: f64, initial_touch_count: usize },
}

/// Read-only view for the renderer and debug panel.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionSnapshot {
    pub points: Vec<(f64, f64)>,
    pub total_movement: f64,
    pub initial_touch_count: usize,
}

#[derive(Clone, Debug, Default)]
pub struct TouchTracker {
    // Few contacts at a time, so a Vec beats a map; ids stay unique.
    touches: Vec<TouchPoint>,
    total_movement: f64,
    initial_touch_count: usize,
}

impl TouchTracker {
    pub fn begin(&mut self, contacts: &[Contact]) {
        self.touches.clear();
        for c in contacts {
            match self.touches.iter_mut().find(|t| t.id == c.id) {
                Some(existing) => *existing = TouchPoint::from_contact(c),
                None => self.touches.push(TouchPoint::from_contact(c)),
            }
        }
        self.total_movement = 0.0;
        self.initial_touch_count = contacts.len();
    }

    /// Returns the primary contact's delta, or `None` when it was never tracked.
    pub fn update(&mut self, contacts: &[Contact]) -> Option<(f64, f64)> {
        let primary = contacts.first()?;
        let stored = self.get(primary.id)?;
        let dx = primary.x - stored.current_x;
        let dy = primary.y - stored.current_y;
        self.total_movement += dx.hypot(dy);
        for c in contacts {
            if let Some(t) = self.touches.iter_mut().find(|t| t.id == c.id) {
                t.current_x = c.x;
                t.current_y = c.y;
            }
        }
        Some((dx, dy))
    }

    pub fn end(&mut self, remaining: &[TouchId]) -> EndOutcome {
        if self.touches.is_empty() {
            return EndOutcome::NoSession;
        }
        self.touches.retain(|t| remaining.contains(&t.id));
        if !self.touches.is_empty() {
            return EndOutcome::StillActive;
        }
        let outcome = EndOutcome::SessionEnded {
            total_movement: self.total_movement,
            initial_touch_count: self.initial_touch_count,
        };
        self.total_movement = 0.0;
        self.initial_touch_count = 0;
        outcome
    }

    pub fn cancel(&mut self) {
        self.touches.clear();
        self.total_movement = 0.0;
        self.initial_touch_count = 0;
    }

    pub fn get(&self, id: TouchId) -> Option<&TouchPoint> {
        self.touches.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.touches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.touches.is_empty()
    }

    pub fn total_movement(&self) -> f64 {
        self.total_movement
    }

    pub fn initial_touch_count(&self) -> usize {
        self.initial_touch_count
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            points: self.touches.iter().map(|t| (t.current_x, t.current_y)).collect(),
            total_movement: self.total_movement,
            initial_touch_count: self.initial_touch_count,
        }
    }
}

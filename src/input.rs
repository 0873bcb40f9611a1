// DOM touch listeners -> ContactEvent. The engine never sees web_sys types.

use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{DomRect, HtmlCanvasElement, TouchEvent, TouchList};

use crate::state::{Contact, ContactEvent};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchPhase {
    Start,
    Move,
    End,
    Cancel,
}

impl TouchPhase {
    const ALL: [TouchPhase; 4] = [TouchPhase::Start, TouchPhase::Move, TouchPhase::End, TouchPhase::Cancel];

    pub fn event_name(self) -> &'static str {
        match self {
            TouchPhase::Start => "touchstart",
            TouchPhase::Move => "touchmove",
            TouchPhase::End => "touchend",
            TouchPhase::Cancel => "touchcancel",
        }
    }

    /// `active` is the list of contacts still on the surface after the event.
    pub fn contact_event(self, active: Vec<Contact>) -> ContactEvent {
        match self {
            TouchPhase::Start => ContactEvent::ContactsBegan(active),
            TouchPhase::Move => ContactEvent::ContactsMoved(active),
            TouchPhase::End => ContactEvent::ContactsEnded(active.iter().map(|c| c.id).collect()),
            TouchPhase::Cancel => ContactEvent::Cancelled,
        }
    }
}

fn contacts(list: &TouchList, rect: &DomRect) -> Vec<Contact> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|t| Contact::new(t.identifier(), t.client_x() as f64 - rect.left(), t.client_y() as f64 - rect.top()))
        .collect()
}

/// Touch listeners on a canvas; dropping it detaches them.
pub struct TouchInputSource {
    canvas: HtmlCanvasElement,
    listeners: Vec<(TouchPhase, Closure<dyn FnMut(TouchEvent)>)>,
}

impl TouchInputSource {
    pub fn attach(canvas: &HtmlCanvasElement, sink: Rc<dyn Fn(ContactEvent)>) -> Self {
        let mut listeners = Vec::with_capacity(TouchPhase::ALL.len());
        for phase in TouchPhase::ALL {
            let canvas_tc = canvas.clone();
            let sink = sink.clone();
            let cb = Closure::wrap(Box::new(move |e: TouchEvent| {
                e.prevent_default();
                let rect = canvas_tc.get_bounding_client_rect();
                sink(phase.contact_event(contacts(&e.touches(), &rect)));
            }) as Box<dyn FnMut(_)>);
            canvas
                .add_event_listener_with_callback(phase.event_name(), cb.as_ref().unchecked_ref())
                .ok();
            listeners.push((phase, cb));
        }
        Self {
            canvas: canvas.clone(),
            listeners,
        }
    }
}

impl Drop for TouchInputSource {
    fn drop(&mut self) {
        for (phase, cb) in &self.listeners {
            let _ = self
                .canvas
                .remove_event_listener_with_callback(phase.event_name(), cb.as_ref().unchecked_ref());
        }
    }
}

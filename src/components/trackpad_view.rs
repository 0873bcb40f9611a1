use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use super::{EngineHandle, debug_panel::DebugPanel};
use crate::input::TouchInputSource;
use crate::render::draw_touches;
use crate::state::{ContactEvent, DispatchStats, SessionSnapshot};

#[derive(Properties, PartialEq, Clone)]
pub struct TrackpadViewProps {
    pub show_debug: bool,
}

#[function_component(TrackpadView)]
pub fn trackpad_view(props: &TrackpadViewProps) -> Html {
    let canvas_ref = use_node_ref();
    let engine = use_context::<EngineHandle>().expect("TrackpadView needs an EngineHandle context");
    let snapshot = use_state(SessionSnapshot::default);
    let stats = use_state(DispatchStats::default);
    let show_debug_flag = use_mut_ref(|| false);

    {
        let show_debug_flag = show_debug_flag.clone();
        use_effect_with(props.show_debug, move |flag| {
            *show_debug_flag.borrow_mut() = *flag;
            || ()
        });
    }

    {
        let canvas_ref = canvas_ref.clone();
        let engine = engine.clone();
        let snapshot = snapshot.clone();
        let stats = stats.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("no global `window` exists");
            let canvas: HtmlCanvasElement = canvas_ref
                .cast::<HtmlCanvasElement>()
                .expect("canvas_ref not attached to a canvas element");

            let resize = {
                let canvas = canvas.clone();
                let window = window.clone();
                let engine = engine.clone();
                move || {
                    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(800.0);
                    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(600.0);
                    canvas.set_width(width.max(0.0) as u32);
                    canvas.set_height(height.max(0.0) as u32);
                    draw_touches(&canvas, &engine.0.borrow().snapshot());
                }
            };
            resize();
            let resize_cb = Closure::wrap(Box::new(resize) as Box<dyn FnMut()>);
            window
                .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())
                .ok();

            let sink: Rc<dyn Fn(ContactEvent)> = {
                let canvas = canvas.clone();
                Rc::new(move |event: ContactEvent| {
                    let (snap, st) = {
                        let mut e = engine.0.borrow_mut();
                        e.handle(event);
                        (e.snapshot(), e.stats())
                    };
                    draw_touches(&canvas, &snap);
                    if *show_debug_flag.borrow() {
                        snapshot.set(snap);
                        stats.set(st);
                    }
                })
            };
            let source = TouchInputSource::attach(&canvas, sink);

            let window_clone = window.clone();
            move || {
                let _ = window_clone
                    .remove_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref());
                drop(source);
                drop(resize_cb);
            }
        });
    }

    html! {<>
        <canvas ref={canvas_ref} id="trackpad" style="display:block; width:100%; height:100%; touch-action:none;"></canvas>
        { if props.show_debug {
            html!{ <DebugPanel snapshot={(*snapshot).clone()} stats={*stats} /> }
        } else { html!{} } }
    </>}
}

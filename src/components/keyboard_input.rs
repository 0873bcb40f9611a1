use web_sys::{FocusEvent, HtmlInputElement, KeyboardEvent};
use yew::prelude::*;

use super::EngineHandle;
use crate::state::KeyInputBridge;

// Hidden text field that summons the on-screen keyboard. It stays mounted so
// focus() can run inside the tap handler, which mobile browsers require.
#[function_component]
pub fn KeyboardInput() -> Html {
    let engine = use_context::<EngineHandle>().expect("KeyboardInput needs an EngineHandle context");
    let bridge = use_mut_ref(KeyInputBridge::default);
    let input_ref = use_node_ref();
    let active = use_state(|| false);

    let open_cb = {
        let bridge = bridge.clone();
        let input_ref = input_ref.clone();
        let active = active.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                input.set_value(bridge.borrow_mut().activate());
                let _ = input.focus();
                active.set(true);
            }
        })
    };

    let oninput = {
        let bridge = bridge.clone();
        let engine = engine.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut b = bridge.borrow_mut();
            if !b.is_active() {
                return;
            }
            let keys = b.on_input(&input.value());
            input.set_value(b.buffer().unwrap_or_default());
            drop(b);
            let mut eng = engine.0.borrow_mut();
            for key in keys {
                eng.send_key(key);
            }
        })
    };

    let onkeydown = {
        let bridge = bridge.clone();
        let engine = engine.clone();
        Callback::from(move |e: KeyboardEvent| {
            if let Some(key) = bridge.borrow().on_key_down(e.key_code()) {
                e.prevent_default();
                engine.0.borrow_mut().send_key(key);
            }
        })
    };

    let onblur = {
        let bridge = bridge.clone();
        let active = active.clone();
        Callback::from(move |_: FocusEvent| {
            bridge.borrow_mut().deactivate();
            active.set(false);
        })
    };

    let label = if *active { "Typing…" } else { "Keyboard" };
    html! {<>
        <button onclick={open_cb}>{ label }</button>
        <input ref={input_ref} type="text" autocomplete="off" autocapitalize="off" spellcheck="false"
            {oninput} {onkeydown} {onblur}
            style="position:fixed; bottom:0; left:0; width:1px; height:1px; opacity:0; border:none; padding:0;" />
    </>}
}

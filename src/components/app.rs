use std::rc::Rc;
use yew::prelude::*;

use super::{
    EngineHandle, controls_panel::ControlsPanel, settings_modal::SettingsModal,
    trackpad_view::TrackpadView,
};
use crate::model::{Settings, SettingsAction};
use crate::state::GestureEngine;
use crate::transport::HttpSender;
use crate::util::{clog, cwarn};

const SETTINGS_KEY: &str = "tp_settings";

fn load_settings() -> Settings {
    if let Some(win) = web_sys::window() {
        if let Ok(Some(store)) = win.local_storage() {
            if let Ok(Some(raw)) = store.get_item(SETTINGS_KEY) {
                match serde_json::from_str(&raw) {
                    Ok(s) => return s,
                    Err(err) => cwarn(&format!("ignoring stored settings: {err}")),
                }
            }
        }
    }
    Settings::default()
}

fn save_settings(settings: &Settings) {
    if let Some(win) = web_sys::window() {
        if let Ok(Some(store)) = win.local_storage() {
            if let Ok(s) = serde_json::to_string(settings) {
                let _ = store.set_item(SETTINGS_KEY, &s);
            }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let settings = use_reducer(load_settings);
    let open_settings = use_state(|| false);
    let engine = {
        let initial = (*settings).clone();
        use_mut_ref(move || GestureEngine::new(&initial, Rc::new(HttpSender::new(&initial))))
    };

    // Persist and push into the engine whenever settings change
    {
        let engine = engine.clone();
        use_effect_with((*settings).clone(), move |s| {
            save_settings(s);
            let mut e = engine.borrow_mut();
            e.configure(s);
            e.set_sender(Rc::new(HttpSender::new(s)));
            clog(&format!(
                "settings: move x{:.1}, scroll x{:.1}, click <{:.0}px, every {}ms, {:?}",
                s.move_sensitivity, s.scroll_sensitivity, s.click_threshold, s.send_interval_ms, s.wire_style
            ));
            || ()
        });
    }

    let on_action = {
        let settings = settings.clone();
        Callback::from(move |action: SettingsAction| settings.dispatch(action))
    };
    let open_settings_cb: Callback<()> = {
        let open_settings = open_settings.clone();
        Callback::from(move |()| open_settings.set(true))
    };
    let close_settings_cb: Callback<()> = {
        let open_settings = open_settings.clone();
        Callback::from(move |()| open_settings.set(false))
    };
    let toggle_debug_cb: Callback<()> = {
        let settings = settings.clone();
        Callback::from(move |()| settings.dispatch(SettingsAction::ToggleDebug))
    };

    let handle = EngineHandle(engine);
    html! {
        <ContextProvider<EngineHandle> context={handle}>
            <div style="position:relative; width:100vw; height:100vh; overflow:hidden; touch-action:none;">
                <TrackpadView show_debug={settings.show_debug} />
                <ControlsPanel show_debug={settings.show_debug} on_toggle_debug={toggle_debug_cb} on_open_settings={open_settings_cb} />
                <SettingsModal show={*open_settings} settings={(*settings).clone()} on_action={on_action} on_close={close_settings_cb} />
            </div>
        </ContextProvider<EngineHandle>>
    }
}

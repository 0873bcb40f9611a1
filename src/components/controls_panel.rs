use yew::prelude::*;

use super::keyboard_input::KeyboardInput;

#[derive(Properties, PartialEq, Clone)]
pub struct ControlsPanelProps {
    pub show_debug: bool,
    pub on_toggle_debug: Callback<()>,
    pub on_open_settings: Callback<()>,
}

#[function_component]
pub fn ControlsPanel(props: &ControlsPanelProps) -> Html {
    let settings_cb = {
        let cb = props.on_open_settings.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let debug_cb = {
        let cb = props.on_toggle_debug.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let debug_label = if props.show_debug { "Hide Debug" } else { "Debug" };
    html! {<div style="position:absolute; top:12px; right:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; display:flex; gap:6px;">
        <KeyboardInput />
        <button onclick={settings_cb}>{"Settings"}</button>
        <button onclick={debug_cb}>{ debug_label }</button>
    </div>}
}

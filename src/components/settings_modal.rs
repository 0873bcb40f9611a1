use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::model::{
    CLICK_THRESHOLD_RANGE, MOVE_SENSITIVITY_RANGE, MoveSuppression, SCROLL_SENSITIVITY_RANGE,
    SEND_INTERVAL_MAX_MS, Settings, SettingsAction, WireStyle,
};

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsModalProps {
    pub show: bool,
    pub settings: Settings,
    pub on_action: Callback<SettingsAction>,
    pub on_close: Callback<()>,
}

#[derive(Properties, PartialEq, Clone)]
struct SliderRowProps {
    label: AttrValue,
    value: f64,
    min: f64,
    max: f64,
    step: f64,
    display: AttrValue,
    on_change: Callback<f64>,
}

#[function_component]
fn SliderRow(props: &SliderRowProps) -> Html {
    let oninput = {
        let cb = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(v) = input.value().parse::<f64>() {
                cb.emit(v);
            }
        })
    };
    html! {
        <label style="display:flex; flex-direction:column; gap:4px;">
            <span style="display:flex; justify-content:space-between;">
                <span>{ props.label.clone() }</span>
                <span style="font-variant-numeric:tabular-nums; opacity:0.8;">{ props.display.clone() }</span>
            </span>
            <input type="range" min={props.min.to_string()} max={props.max.to_string()} step={props.step.to_string()}
                value={props.value.to_string()} {oninput} />
        </label>
    }
}

#[function_component]
pub fn SettingsModal(props: &SettingsModalProps) -> Html {
    if !props.show {
        return html! {};
    }
    let s = &props.settings;
    let act = |f: fn(f64) -> SettingsAction| {
        let cb = props.on_action.clone();
        Callback::from(move |v: f64| cb.emit(f(v)))
    };

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let interval_cb = {
        let cb = props.on_action.clone();
        Callback::from(move |v: f64| cb.emit(SettingsAction::SetSendInterval(v.max(0.0) as u32)))
    };
    let wire_cb = {
        let cb = props.on_action.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let style = if select.value() == "path" { WireStyle::Path } else { WireStyle::Json };
            cb.emit(SettingsAction::SetWireStyle(style));
        })
    };
    let suppression_cb = {
        let cb = props.on_action.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let policy = if select.value() == "any" {
                MoveSuppression::AnyAxisZero
            } else {
                MoveSuppression::BothAxesZero
            };
            cb.emit(SettingsAction::SetMoveSuppression(policy));
        })
    };
    let base_url_cb = {
        let cb = props.on_action.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cb.emit(SettingsAction::SetBaseUrl(input.value()));
        })
    };
    let toggle_debug_cb = {
        let cb = props.on_action.clone();
        Callback::from(move |_| cb.emit(SettingsAction::ToggleDebug))
    };
    let reset_cb = {
        let cb = props.on_action.clone();
        Callback::from(move |_| {
            let confirmed = web_sys::window()
                .map(|win| win.confirm_with_message("Reset all trackpad settings to defaults?").unwrap_or(false))
                .unwrap_or(true);
            if confirmed {
                cb.emit(SettingsAction::ResetDefaults);
            }
        })
    };

    html! {<div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
        <div style="background:#161b22; color:#e6edf3; border:1px solid #30363d; border-radius:12px; padding:16px 20px; min-width:300px; max-width:420px; display:flex; flex-direction:column; gap:14px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:18px;">{"Settings"}</h3>
                <button onclick={close_cb.clone()} style="padding:4px 8px;">{"Close"}</button>
            </div>
            <SliderRow label="Pointer speed" value={s.move_sensitivity} min={MOVE_SENSITIVITY_RANGE.0} max={MOVE_SENSITIVITY_RANGE.1} step={0.5}
                display={format!("{:.1}x", s.move_sensitivity)} on_change={act(SettingsAction::SetMoveSensitivity)} />
            <SliderRow label="Scroll speed" value={s.scroll_sensitivity} min={SCROLL_SENSITIVITY_RANGE.0} max={SCROLL_SENSITIVITY_RANGE.1} step={0.5}
                display={format!("{:.1}x", s.scroll_sensitivity)} on_change={act(SettingsAction::SetScrollSensitivity)} />
            <SliderRow label="Tap tolerance" value={s.click_threshold} min={CLICK_THRESHOLD_RANGE.0} max={CLICK_THRESHOLD_RANGE.1} step={1.0}
                display={format!("{:.0}px", s.click_threshold)} on_change={act(SettingsAction::SetClickThreshold)} />
            <SliderRow label="Send interval" value={s.send_interval_ms as f64} min={0.0} max={SEND_INTERVAL_MAX_MS as f64} step={1.0}
                display={format!("{}ms", s.send_interval_ms)} on_change={interval_cb} />
            <label style="display:flex; justify-content:space-between; align-items:center; gap:8px;">
                <span>{"Small moves"}</span>
                <select onchange={suppression_cb}>
                    <option value="both" selected={s.move_suppression == MoveSuppression::BothAxesZero}>{"Drop only (0, 0)"}</option>
                    <option value="any" selected={s.move_suppression == MoveSuppression::AnyAxisZero}>{"Drop if either axis is 0"}</option>
                </select>
            </label>
            <label style="display:flex; justify-content:space-between; align-items:center; gap:8px;">
                <span>{"Wire format"}</span>
                <select onchange={wire_cb}>
                    <option value="json" selected={s.wire_style == WireStyle::Json}>{"JSON body"}</option>
                    <option value="path" selected={s.wire_style == WireStyle::Path}>{"Path arguments"}</option>
                </select>
            </label>
            <label style="display:flex; flex-direction:column; gap:4px;">
                <span>{"Host URL (empty = this server)"}</span>
                <input type="url" value={s.base_url.clone()} placeholder="http://192.168.1.10:5000" onchange={base_url_cb} />
            </label>
            <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                <input type="checkbox" checked={s.show_debug} onclick={toggle_debug_cb} />
                <span>{"Show Debug Panel"}</span>
            </label>
            <div style="display:flex; gap:8px; flex-wrap:wrap;">
                <button onclick={reset_cb} style="background:#f85149; border:1px solid #b62324; color:#fff; flex:1;">{"Reset Defaults"}</button>
                <button onclick={close_cb} style="flex:0 0 auto;">{"Done"}</button>
            </div>
        </div>
    </div>}
}

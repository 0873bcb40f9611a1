use yew::prelude::*;

use crate::state::{DispatchStats, SessionSnapshot};
use crate::util::format_movement;

#[derive(Properties, PartialEq, Clone)]
pub struct DebugPanelProps {
    pub snapshot: SessionSnapshot,
    pub stats: DispatchStats,
}

#[function_component]
pub fn DebugPanel(props: &DebugPanelProps) -> Html {
    let label_style = "opacity:0.7; margin-right:6px;";
    let value_style = "font-variant-numeric:tabular-nums; font-weight:600;";
    let s = &props.snapshot;
    html! {
        <div id="debug" style="position:absolute; bottom:12px; left:12px; background:rgba(22,27,34,0.9); color:#e6edf3; border:1px solid #30363d; border-radius:8px; padding:8px 12px; font-size:12px; font-family:monospace; pointer-events:none;">
            <div><span style={label_style}>{"Touches:"}</span><span style={value_style}>{ s.points.len() }</span></div>
            { for s.points.iter().enumerate().map(|(i, (x, y))| html! {
                <div><span style={label_style}>{ format!("Position #{}:", i + 1) }</span><span style={value_style}>{ format!("({:.0}, {:.0})", x, y) }</span></div>
            }) }
            <div><span style={label_style}>{"Movement:"}</span><span style={value_style}>{ format_movement(s.total_movement) }</span></div>
            <div><span style={label_style}>{"Initial Count:"}</span><span style={value_style}>{ s.initial_touch_count }</span></div>
            <div><span style={label_style}>{"Sent / Dropped:"}</span><span style={value_style}>{ format!("{} / {}", props.stats.sent, props.stats.dropped) }</span></div>
        </div>
    }
}

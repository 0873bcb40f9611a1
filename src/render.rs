use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::SessionSnapshot;

pub const INDICATOR_RADIUS: f64 = 24.0;
const BACKGROUND: &str = "#fff";
const INDICATOR_FILL: &str = "#cf000f";

/// Repaints the surface from the current session. Safe to call after every event.
pub fn draw_touches(canvas: &HtmlCanvasElement, snapshot: &SessionSnapshot) {
    if !canvas.is_connected() {
        return;
    }
    let ctx = match canvas.get_context("2d").ok().flatten() {
        Some(c) => match c.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        None => return,
    };
    let w = canvas.width() as f64;
    let h = canvas.height() as f64;
    ctx.set_fill_style_str(BACKGROUND);
    ctx.fill_rect(0.0, 0.0, w, h);

    for (i, (x, y)) in snapshot.points.iter().enumerate() {
        ctx.set_fill_style_str(INDICATOR_FILL);
        ctx.begin_path();
        ctx.arc(*x, *y, INDICATOR_RADIUS, 0.0, std::f64::consts::PI * 2.0).ok();
        ctx.fill();

        ctx.set_fill_style_str(BACKGROUND);
        ctx.set_font("bold 14px Arial");
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        ctx.fill_text(&(i + 1).to_string(), *x, *y).ok();
    }
}

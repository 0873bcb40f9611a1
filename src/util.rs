// Console logging helpers. Off the browser (unit tests) they fall back to stderr.

#[cfg(target_arch = "wasm32")]
pub fn clog(msg: &str) {
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(msg));
}

#[cfg(target_arch = "wasm32")]
pub fn cwarn(msg: &str) {
    web_sys::console::warn_1(&wasm_bindgen::JsValue::from_str(msg));
}

#[cfg(target_arch = "wasm32")]
pub fn cerr(msg: &str) {
    web_sys::console::error_1(&wasm_bindgen::JsValue::from_str(msg));
}

#[cfg(not(target_arch = "wasm32"))]
pub fn clog(msg: &str) {
    eprintln!("[log] {msg}");
}

#[cfg(not(target_arch = "wasm32"))]
pub fn cwarn(msg: &str) {
    eprintln!("[warn] {msg}");
}

#[cfg(not(target_arch = "wasm32"))]
pub fn cerr(msg: &str) {
    eprintln!("[error] {msg}");
}

pub fn format_movement(px: f64) -> String {
    format!("{:.1}px", px)
}

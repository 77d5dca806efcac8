use wasm_bindgen::JsValue;

/// `window.OPENAI_API_KEY`, when a page script defined one.
pub fn global_api_key() -> Option<String> {
    let window = web_sys::window()?;
    js_sys::Reflect::get(&window, &JsValue::from_str("OPENAI_API_KEY"))
        .ok()?
        .as_string()
        .filter(|key| !key.trim().is_empty())
}

/// Current page URL, used to resolve relative resource paths.
pub fn page_href() -> Option<String> {
    web_sys::window()?.location().href().ok()
}

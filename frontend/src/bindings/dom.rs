use web_sys::Document;

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Insert a `<style id=...>` into `<head>` unless one with that id exists.
/// Returns true when the element was created.
pub fn ensure_style(id: &str, css: &str) -> bool {
    let Some(document) = document() else {
        return false;
    };
    if document.get_element_by_id(id).is_some() {
        return false;
    }
    let Ok(style) = document.create_element("style") else {
        return false;
    };
    style.set_id(id);
    style.set_text_content(Some(css));
    match document.head() {
        Some(head) => head.append_child(&style).is_ok(),
        None => false,
    }
}

pub fn set_body_dir(dir: &str) {
    if let Some(body) = document().and_then(|d| d.body()) {
        if let Err(e) = body.set_attribute("dir", dir) {
            log::warn!("Failed to set body dir: {e:?}");
        }
    }
}

//! Page Commands
//!
//! What the PDF export collects from the live document.

use wasm_bindgen::JsCast;

/// Page origin, e.g. `http://localhost:8080`
pub fn origin() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}

/// Text of every readable stylesheet. Cross-origin sheets throw on
/// `cssRules` and are skipped.
pub fn page_styles() -> String {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return String::new();
    };
    let sheets = document.style_sheets();
    let mut css = Vec::new();
    for index in 0..sheets.length() {
        let Some(sheet) = sheets.item(index).and_then(|s| s.dyn_into::<web_sys::CssStyleSheet>().ok()) else {
            continue;
        };
        let Ok(rules) = sheet.css_rules() else {
            continue;
        };
        css.extend((0..rules.length()).filter_map(|i| rules.item(i)).map(|rule| rule.css_text()));
    }
    css.join("\n")
}

/// Computed background color of `<body>`
pub fn body_background() -> Option<String> {
    let window = web_sys::window()?;
    let body = window.document()?.body()?;
    let style = window.get_computed_style(&body).ok()??;
    style.get_property_value("background-color").ok().filter(|color| !color.is_empty())
}

/// Value of `name` in the page's query string
pub fn query_param(name: &str) -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    params.get(name).filter(|value| !value.is_empty())
}

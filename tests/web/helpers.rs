use page_interactions::PageConfig;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, Window};

pub fn window() -> Window {
    web_sys::window().unwrap()
}

pub fn document() -> Document {
    window().document().unwrap()
}

/// Markup mounted under `<body>` for the duration of one test.
pub struct Fixture {
    root: Element,
}

impl Fixture {
    pub fn mount(html: &str) -> Self {
        let document = document();
        let root = document.create_element("div").unwrap();
        root.set_inner_html(html);
        document.body().unwrap().append_child(&root).unwrap();
        Self { root }
    }

    pub fn element(&self, id: &str) -> Element {
        document().get_element_by_id(id).unwrap()
    }

    pub fn html_element(&self, id: &str) -> HtmlElement {
        self.element(id).dyn_into().unwrap()
    }

    pub fn fill(&self, id: &str, value: &str) {
        self.element(id)
            .dyn_into::<HtmlInputElement>()
            .unwrap()
            .set_value(value);
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        self.root.remove();
    }
}

/// Each test mounts its own ids so listeners from other tests never fire.
pub fn config_with_prefix(prefix: &str) -> PageConfig {
    PageConfig {
        nav_id: format!("{prefix}-nav"),
        menu_trigger: format!("[data-{prefix}-toggle]"),
        year_id: format!("{prefix}-year"),
        login_form_id: format!("{prefix}-form"),
        ..PageConfig::default()
    }
}

/// Replaces `window.alert` so notices are recorded instead of blocking.
pub fn capture_alerts() {
    let recorder = js_sys::Function::new_with_args(
        "message",
        "(window.__notices = window.__notices || []).push(message)",
    );
    js_sys::Reflect::set(&window(), &JsValue::from_str("alert"), &recorder).unwrap();
    js_sys::Reflect::set(&window(), &JsValue::from_str("__notices"), &js_sys::Array::new())
        .unwrap();
}

pub fn captured_alerts() -> Vec<String> {
    let notices = js_sys::Reflect::get(&window(), &JsValue::from_str("__notices")).unwrap();
    js_sys::Array::from(&notices)
        .iter()
        .filter_map(|notice| notice.as_string())
        .collect()
}

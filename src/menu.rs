use crate::dom::{element_by_id, get_document, get_window, query_all};
use crate::imports::*;

/// Flips `marker_class` on `nav`, returning whether it is now present.
pub fn toggle(nav: &Element, marker_class: &str) -> Result<bool> {
    Ok(nav.class_list().toggle(marker_class)?)
}

/// Click listeners on every menu trigger, bound to the navigation container.
pub struct MenuToggle {
    listeners: Vec<EventListener>,
}

impl MenuToggle {
    pub fn init(document: &Document, config: &PageConfig) -> Result<Option<Self>> {
        let Some(nav) = element_by_id::<Element>(document, &config.nav_id)? else {
            console::warn!(format!("#{} not found, menu toggle disabled", config.nav_id));
            return Ok(None);
        };

        let triggers = query_all(document, &config.menu_trigger)?;
        if triggers.is_empty() {
            console::log!(format!(
                "no element matches {:?}, menu reachable through toggleMenu() only",
                config.menu_trigger
            ));
        }

        let listeners = triggers
            .iter()
            .map(|trigger| {
                let nav = nav.clone();
                let marker_class = config.marker_class.clone();
                EventListener::new(trigger, "click", move |_event| {
                    match toggle(&nav, &marker_class) {
                        Ok(active) => {
                            console::log!(format!("menu {}", open_or_closed(active)));
                        }
                        Err(error) => {
                            console::error!(format!("menu toggle: {}", error_chain(&error)));
                        }
                    }
                })
            })
            .collect::<Vec<_>>();

        console::log!(format!("menu toggle bound to {} trigger(s)", listeners.len()));
        Ok(Some(Self { listeners }))
    }

    pub fn trigger_count(&self) -> usize {
        self.listeners.len()
    }

    /// Keeps the listeners attached for the rest of the page lifetime.
    pub fn forget(self) {
        self.listeners.into_iter().for_each(EventListener::forget);
    }
}

/// Entry point for inline `onclick="toggleMenu()"` markup.
#[wasm_bindgen(js_name = toggleMenu)]
pub fn toggle_menu() -> Result<bool, JsValue> {
    toggle_from_page().map_err(|error| JsValue::from_str(&error_chain(&error)))
}

fn toggle_from_page() -> Result<bool> {
    let document = get_document(&get_window()?)?;
    let config = PageConfig::load(&document);

    match element_by_id::<Element>(&document, &config.nav_id)? {
        Some(nav) => toggle(&nav, &config.marker_class),
        None => {
            console::warn!(format!("#{} not found, nothing to toggle", config.nav_id));
            Ok(false)
        }
    }
}

fn open_or_closed(active: bool) -> &'static str {
    if active {
        "opened"
    } else {
        "closed"
    }
}

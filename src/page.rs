use crate::dom::get_document;
use crate::imports::*;
use crate::login::LoginInterceptor;
use crate::menu::MenuToggle;

/// The behaviours wired onto one page. Each one is optional: a page without
/// the matching markup, or whose markup fails to bind, simply does not get it.
pub struct PageInteractions {
    pub year: Option<u32>,
    pub menu: Option<MenuToggle>,
    pub login: Option<LoginInterceptor>,
}

impl PageInteractions {
    pub fn init(window: &Window) -> Result<Self> {
        let document = get_document(window)?;
        let config = PageConfig::load(&document);
        console::log!(format!("page config: {config:?}"));

        Ok(Self::with_config(window, &document, &config))
    }

    // behaviours share nothing, so one failing to bind never blocks the others
    pub fn with_config(window: &Window, document: &Document, config: &PageConfig) -> Self {
        Self {
            year: settle("year stamp", crate::year::stamp(document, config)),
            menu: settle("menu toggle", MenuToggle::init(document, config)),
            login: settle(
                "login interceptor",
                LoginInterceptor::init(document, window, config),
            ),
        }
    }

    pub fn forget(self) {
        if let Some(menu) = self.menu {
            menu.forget();
        }
        if let Some(login) = self.login {
            login.forget();
        }
    }
}

fn settle<T>(behaviour: &str, result: Result<Option<T>>) -> Option<T> {
    result.unwrap_or_else(|error| {
        console::error!(format!("{behaviour} disabled: {}", error_chain(&error)));
        None
    })
}

mod dom;
mod error;
mod imports;

pub mod config;
pub mod login;
pub mod menu;
pub mod page;
pub mod year;

pub use config::PageConfig;
pub use error::{LoginError, PageError};
pub use login::{Credentials, LoginInterceptor, LoginOutcome, Page};
pub use menu::{toggle_menu, MenuToggle};
pub use page::PageInteractions;

use imports::*;

#[wasm_bindgen(start)]
pub fn start() {
    let interactions = dom::get_window().and_then(|window| PageInteractions::init(&window));

    match interactions {
        Ok(interactions) => {
            console::log!(format!(
                "page interactions ready: year={:?} menu={} login={}",
                interactions.year,
                interactions.menu.is_some(),
                interactions.login.is_some(),
            ));
            interactions.forget();
        }
        Err(error) => {
            console::error!(format!("page interactions: {}", error_chain(&error)));
        }
    }
}

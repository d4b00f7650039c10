pub use crate::config::PageConfig;
pub use crate::error::{error_chain, LoginError, PageError, Result};

pub use gloo_console as console;
pub use gloo_events::{EventListener, EventListenerOptions};
pub use secrecy::{ExposeSecret, SecretString};
pub use serde::Deserialize;
pub use wasm_bindgen::{prelude::*, JsCast};
pub use web_sys::{Document, Element, HtmlFormElement, HtmlInputElement, Window};

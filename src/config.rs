use crate::imports::*;

/// Element ids, texts and targets the page behaviours bind to.
///
/// Every field has a default matching the stock markup, so a page only
/// overrides what differs, e.g.
///
/// ```html
/// <script type="application/json" id="page-config">{ "redirect_to": "home.html" }</script>
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub nav_id: String,
    pub marker_class: String,
    pub menu_trigger: String,
    pub year_id: String,
    pub login_form_id: String,
    pub username_field: String,
    pub password_field: String,
    pub empty_fields_notice: String,
    pub success_notice: String,
    pub redirect_to: String,
}

pub const CONFIG_ELEMENT_ID: &str = "page-config";

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            nav_id: "navLinks".into(),
            marker_class: "active".into(),
            menu_trigger: "[data-menu-toggle]".into(),
            year_id: "year".into(),
            login_form_id: "loginForm".into(),
            username_field: "username".into(),
            password_field: "password".into(),
            empty_fields_notice: "Please fill in both fields.".into(),
            success_notice: "Login successful (demo only)!".into(),
            redirect_to: "index.html".into(),
        }
    }
}

impl PageConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(PageError::Config)
    }

    // a broken override block falls back to defaults instead of disabling the page
    pub fn load(document: &Document) -> Self {
        let Some(json) = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|element| element.text_content())
        else {
            return Self::default();
        };

        match Self::from_json(&json) {
            Ok(config) => config,
            Err(error) => {
                console::error!(format!("{}, using defaults", error_chain(&error)));
                Self::default()
            }
        }
    }
}

use crate::dom::element_by_id;
use crate::imports::*;
use web_sys::HtmlFormControlsCollection;

/// Trimmed username/password pair read from one submission.
#[derive(Clone, Debug)]
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
}

impl Credentials {
    pub fn from_raw(username: &str, password: &str) -> Self {
        Self {
            username: username.trim().to_owned(),
            password: SecretString::new(password.trim().to_owned()),
        }
    }

    pub fn validate(&self) -> Result<(), LoginError> {
        match (
            self.username.is_empty(),
            self.password.expose_secret().is_empty(),
        ) {
            (true, true) => Err(LoginError::EmptyBoth),
            (true, false) => Err(LoginError::EmptyUsername),
            (false, true) => Err(LoginError::EmptyPassword),
            (false, false) => Ok(()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    Rejected(LoginError),
    Accepted { redirect_to: String },
}

/// What a submission can do to the page: block on a notice, or leave.
pub trait Page {
    fn notify(&self, message: &str) -> Result<()>;
    fn navigate(&self, href: &str) -> Result<()>;
}

impl Page for Window {
    fn notify(&self, message: &str) -> Result<()> {
        Ok(self.alert_with_message(message)?)
    }

    fn navigate(&self, href: &str) -> Result<()> {
        Ok(self.location().set_href(href)?)
    }
}

// Demo flow: any two non-empty values are accepted, nothing is checked.
pub fn submit(
    credentials: &Credentials,
    config: &PageConfig,
    page: &impl Page,
) -> Result<LoginOutcome> {
    if let Err(reason) = credentials.validate() {
        page.notify(&config.empty_fields_notice)?;
        return Ok(LoginOutcome::Rejected(reason));
    }

    page.notify(&config.success_notice)?;
    page.navigate(&config.redirect_to)?;

    Ok(LoginOutcome::Accepted {
        redirect_to: config.redirect_to.clone(),
    })
}

pub fn read_credentials(form: &HtmlFormElement, config: &PageConfig) -> Result<Credentials> {
    let username = field(form, config, &config.username_field)?;
    let password = field(form, config, &config.password_field)?;

    Ok(Credentials::from_raw(&username.value(), &password.value()))
}

fn field(form: &HtmlFormElement, config: &PageConfig, name: &str) -> Result<HtmlInputElement> {
    let controls = form.elements().unchecked_into::<HtmlFormControlsCollection>();
    let Some(item) = controls.named_item(name) else {
        return Err(PageError::MissingField {
            form: config.login_form_id.clone(),
            name: name.to_owned(),
        });
    };

    item.dyn_into::<HtmlInputElement>()
        .map_err(|_| PageError::WrongElement {
            id: name.to_owned(),
            expected: "HtmlInputElement",
        })
}

/// Submit listener on the login form. Native submission is always suppressed.
pub struct LoginInterceptor {
    listener: EventListener,
}

impl LoginInterceptor {
    pub fn init(document: &Document, window: &Window, config: &PageConfig) -> Result<Option<Self>> {
        let Some(form) = element_by_id::<HtmlFormElement>(document, &config.login_form_id)? else {
            return Ok(None);
        };

        let listener = {
            let target = form.clone();
            let window = window.clone();
            let config = config.clone();
            EventListener::new_with_options(
                &target,
                "submit",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    event.prevent_default();

                    let outcome = read_credentials(&form, &config)
                        .and_then(|credentials| submit(&credentials, &config, &window));

                    match outcome {
                        Ok(LoginOutcome::Rejected(reason)) => {
                            console::log!(format!("login rejected: {reason}"));
                        }
                        Ok(LoginOutcome::Accepted { redirect_to }) => {
                            console::log!(format!("login accepted, redirecting to {redirect_to}"));
                        }
                        Err(error) => {
                            console::error!(format!("login submit: {}", error_chain(&error)));
                        }
                    }
                },
            )
        };

        console::log!(format!("login interceptor bound to #{}", config.login_form_id));
        Ok(Some(Self { listener }))
    }

    pub fn forget(self) {
        self.listener.forget();
    }
}

//! Contact app: a three-field message form with inline validation.
//!
//! Validation is a pure function over [`ContactForm`] so it can be tested natively. The
//! component only wires signals around it: editing a field clears that field's error, and a
//! successful submit shows a confirmation panel before the form resets.

use std::time::Duration;

use desktop_app_contract::{ready_mount, AppModule, AppMountContext};
use leptos::ev::SubmitEvent;
use leptos::logging::warn;
use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;
use system_ui::{Icon, IconName, IconSize};
use thiserror::Error;

/// Delay before a sent form resets to its empty state.
pub const RESET_DELAY: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Raw form contents as typed by the user.
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
/// Field-level validation failures rendered inline beneath each input.
pub enum ContactFieldError {
    #[error("Name is required")]
    NameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email")]
    EmailInvalid,
    #[error("Message is required")]
    MessageRequired,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Per-field validation outcome.
pub struct ContactErrors {
    pub name: Option<ContactFieldError>,
    pub email: Option<ContactFieldError>,
    pub message: Option<ContactFieldError>,
}

impl ContactErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }

    fn clear(&mut self, field: ContactField) {
        match field {
            ContactField::Name => self.name = None,
            ContactField::Email => self.email = None,
            ContactField::Message => self.message = None,
        }
    }

    fn get(&self, field: ContactField) -> Option<ContactFieldError> {
        match field {
            ContactField::Name => self.name,
            ContactField::Email => self.email,
            ContactField::Message => self.message,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    const fn input_id(self) -> &'static str {
        match self {
            Self::Name => "contact-name",
            Self::Email => "contact-email",
            Self::Message => "contact-message",
        }
    }

    const fn error_id(self) -> &'static str {
        match self {
            Self::Name => "name-error",
            Self::Email => "email-error",
            Self::Message => "message-error",
        }
    }
}

/// Returns `true` for `local@domain.tld` shaped addresses.
///
/// The address must contain no whitespace and exactly one `@`, with a non-empty local part
/// and a domain holding a `.` that has text on both sides.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(idx, ch)| ch == '.' && idx > 0 && idx + 1 < domain.len())
}

/// Validates every field, reporting at most one error per field.
pub fn validate_contact_form(form: &ContactForm) -> ContactErrors {
    let mut errors = ContactErrors::default();

    if form.name.trim().is_empty() {
        errors.name = Some(ContactFieldError::NameRequired);
    }

    if form.email.trim().is_empty() {
        errors.email = Some(ContactFieldError::EmailRequired);
    } else if !is_valid_email(&form.email) {
        errors.email = Some(ContactFieldError::EmailInvalid);
    }

    if form.message.trim().is_empty() {
        errors.message = Some(ContactFieldError::MessageRequired);
    }

    errors
}

pub fn module() -> AppModule {
    AppModule::deferred(|| ready_mount(mount))
}

fn mount(_context: AppMountContext) -> View {
    view! { <ContactApp /> }.into_view()
}

#[component]
pub fn ContactApp() -> impl IntoView {
    let form = create_rw_signal(ContactForm::default());
    let errors = create_rw_signal(ContactErrors::default());
    let submitted = create_rw_signal(false);
    let reset_timer = store_value::<Option<TimeoutHandle>>(None);

    on_cleanup(move || {
        if let Some(handle) = reset_timer.get_value() {
            handle.clear();
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let next_errors = validate_contact_form(&form.get_untracked());
        let valid = next_errors.is_empty();
        errors.set(next_errors);
        if !valid {
            return;
        }

        submitted.set(true);
        match set_timeout_with_handle(
            move || {
                form.set(ContactForm::default());
                submitted.set(false);
                reset_timer.set_value(None);
            },
            RESET_DELAY,
        ) {
            Ok(handle) => reset_timer.set_value(Some(handle)),
            Err(err) => warn!("contact form reset timer failed: {err:?}"),
        }
    };

    let update = move |field: ContactField, value: String| {
        form.update(|form| match field {
            ContactField::Name => form.name = value,
            ContactField::Email => form.email = value,
            ContactField::Message => form.message = value,
        });
        if errors.with_untracked(|errors| errors.get(field).is_some()) {
            errors.update(|errors| errors.clear(field));
        }
    };

    view! {
        <div class="app app-contact">
            <div class="contact-header">
                <h2>"Get In Touch"</h2>
                <p>"I would love to hear from you"</p>
            </div>

            <Show
                when=move || submitted.get()
                fallback=move || {
                    view! {
                        <form class="contact-form" novalidate on:submit=on_submit>
                            <div class="form-group">
                                <label for=ContactField::Name.input_id() class="form-label">
                                    <Icon icon=IconName::User size=IconSize::Sm />
                                    "Name"
                                </label>
                                <input
                                    id=ContactField::Name.input_id()
                                    type="text"
                                    class=move || field_class("form-input", errors, ContactField::Name)
                                    placeholder="Your name"
                                    prop:value=move || form.with(|form| form.name.clone())
                                    aria-invalid=move || invalid_token(errors, ContactField::Name)
                                    aria-describedby=move || described_by(errors, ContactField::Name)
                                    on:input=move |ev| update(ContactField::Name, event_target_value(&ev))
                                />
                                <FieldError errors=errors field=ContactField::Name />
                            </div>

                            <div class="form-group">
                                <label for=ContactField::Email.input_id() class="form-label">
                                    <Icon icon=IconName::Mail size=IconSize::Sm />
                                    "Email"
                                </label>
                                <input
                                    id=ContactField::Email.input_id()
                                    type="email"
                                    class=move || field_class("form-input", errors, ContactField::Email)
                                    placeholder="your.email@example.com"
                                    prop:value=move || form.with(|form| form.email.clone())
                                    aria-invalid=move || invalid_token(errors, ContactField::Email)
                                    aria-describedby=move || described_by(errors, ContactField::Email)
                                    on:input=move |ev| update(ContactField::Email, event_target_value(&ev))
                                />
                                <FieldError errors=errors field=ContactField::Email />
                            </div>

                            <div class="form-group">
                                <label for=ContactField::Message.input_id() class="form-label">
                                    <Icon icon=IconName::Message size=IconSize::Sm />
                                    "Message"
                                </label>
                                <textarea
                                    id=ContactField::Message.input_id()
                                    class=move || field_class("form-textarea", errors, ContactField::Message)
                                    placeholder="Your message here..."
                                    rows="6"
                                    prop:value=move || form.with(|form| form.message.clone())
                                    aria-invalid=move || invalid_token(errors, ContactField::Message)
                                    aria-describedby=move || described_by(errors, ContactField::Message)
                                    on:input=move |ev| update(ContactField::Message, event_target_value(&ev))
                                ></textarea>
                                <FieldError errors=errors field=ContactField::Message />
                            </div>

                            <button type="submit" class="form-submit">
                                <Icon icon=IconName::Send size=IconSize::Sm />
                                "Send Message"
                            </button>
                        </form>
                    }
                }
            >
                <div class="contact-success" role="status">
                    <Icon icon=IconName::CheckCircle size=IconSize::Lg />
                    <h3>"Message Sent!"</h3>
                    <p>"Thank you for reaching out. I will get back to you soon."</p>
                </div>
            </Show>
        </div>
    }
}

fn field_class(base: &'static str, errors: RwSignal<ContactErrors>, field: ContactField) -> String {
    if errors.with(|errors| errors.get(field).is_some()) {
        format!("{base} error")
    } else {
        base.to_string()
    }
}

fn invalid_token(errors: RwSignal<ContactErrors>, field: ContactField) -> &'static str {
    if errors.with(|errors| errors.get(field).is_some()) {
        "true"
    } else {
        "false"
    }
}

fn described_by(errors: RwSignal<ContactErrors>, field: ContactField) -> Option<&'static str> {
    errors
        .with(|errors| errors.get(field).is_some())
        .then(|| field.error_id())
}

#[component]
fn FieldError(errors: RwSignal<ContactErrors>, field: ContactField) -> impl IntoView {
    move || {
        errors.with(|errors| errors.get(field)).map(|error| {
            view! {
                <span id=field.error_id() class="form-error" role="alert">
                    {error.to_string()}
                </span>
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn email_shape_requires_single_at_and_dotted_domain() {
        assert!(is_valid_email("jane@example.com"));
        assert!(is_valid_email("j.doe+tag@mail.example.co"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("jane@@example.com"));
        assert!(!is_valid_email("jane@example."));
        assert!(!is_valid_email("jane@.com"));
        assert!(!is_valid_email("jane@example.com "));
    }

    #[test]
    fn empty_form_reports_required_fields() {
        assert_eq!(
            validate_contact_form(&form("", "  ", "\n")),
            ContactErrors {
                name: Some(ContactFieldError::NameRequired),
                email: Some(ContactFieldError::EmailRequired),
                message: Some(ContactFieldError::MessageRequired),
            }
        );
    }

    #[test]
    fn malformed_email_is_reported_separately() {
        let errors = validate_contact_form(&form("Jane", "jane@example", "Hello"));
        assert_eq!(
            errors,
            ContactErrors {
                email: Some(ContactFieldError::EmailInvalid),
                ..ContactErrors::default()
            }
        );
        assert_eq!(
            errors.email.map(|err| err.to_string()).as_deref(),
            Some("Please enter a valid email")
        );
    }

    #[test]
    fn complete_form_validates_cleanly() {
        let errors = validate_contact_form(&form("Jane", "jane@example.com", "Hello there"));
        assert!(errors.is_empty());
    }

    #[test]
    fn clearing_one_field_keeps_the_others() {
        let mut errors = validate_contact_form(&ContactForm::default());
        errors.clear(ContactField::Email);
        assert_eq!(errors.email, None);
        assert_eq!(errors.name, Some(ContactFieldError::NameRequired));
        assert_eq!(errors.message, Some(ContactFieldError::MessageRequired));
    }
}

//! State and validation for the registration form.
//!
//! The controller is framework-free so the whole submission contract can
//! be exercised without a renderer. It follows a "recompute visible
//! errors on every mutation" model: [`SignupForm::set`] re-validates the
//! edited field immediately (the keystroke path), and
//! [`SignupForm::submit`] re-validates the snapshot it is about to send.
//!
//! Submission ordering is part of the contract: field values and any
//! previous server message are cleared the moment an attempt starts,
//! before its outcome is known.

use std::mem;
use std::sync::LazyLock;

use api::{ApiError, RegistrationPayload};
use regex::Regex;

// Same shape the backend enforces: local part, `@`, domain, dot,
// alphabetic TLD.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]+$")
        .expect("EMAIL_REGEX: invalid regex pattern")
});

/// Shown when the server rejects a registration without saying why, or
/// the request never completes.
pub const GENERIC_FAILURE: &str = "Registration failed";

/// The five inputs of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Email,
    FirstName,
    LastName,
    Username,
    Password,
}

/// Validate one field value, returning the message to display beside the
/// input on failure.
pub fn validate(field: Field, value: &str) -> Result<(), &'static str> {
    match field {
        Field::Email => {
            if value.is_empty() {
                Err("Email is required")
            } else if !EMAIL_REGEX.is_match(value) {
                Err("Invalid email address")
            } else {
                Ok(())
            }
        }
        Field::FirstName => required(value, "First name is required"),
        Field::LastName => required(value, "Last name is required"),
        Field::Username => required(value, "Username is required"),
        Field::Password => {
            if value.is_empty() {
                Err("Password is required")
            } else if value.chars().count() < 8 {
                Err("Minimum password length is 8")
            } else {
                Ok(())
            }
        }
    }
}

fn required(value: &str, message: &'static str) -> Result<(), &'static str> {
    if value.is_empty() {
        Err(message)
    } else {
        Ok(())
    }
}

/// Outcome of a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// At least one field failed validation; nothing may be sent.
    Rejected,
    /// Every field passed; the payload is ready for the network.
    Accepted(RegistrationPayload),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Errors {
    email: Option<&'static str>,
    first_name: Option<&'static str>,
    last_name: Option<&'static str>,
    username: Option<&'static str>,
    password: Option<&'static str>,
}

/// Transient state of the registration form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupForm {
    email: String,
    first_name: String,
    last_name: String,
    username: String,
    password: String,
    password_masked: bool,
    server_error: Option<String>,
    errors: Errors,
}

impl Default for SignupForm {
    fn default() -> Self {
        Self {
            email: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            username: String::new(),
            password: String::new(),
            password_masked: true,
            server_error: None,
            errors: Errors::default(),
        }
    }
}

impl SignupForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Username => &self.username,
            Field::Password => &self.password,
        }
    }

    /// Update one field and re-validate it, so the visible message tracks
    /// every keystroke.
    pub fn set(&mut self, field: Field, value: String) {
        *self.value_mut(field) = value;
        let result = validate(field, self.value(field));
        *self.error_mut(field) = result.err();
    }

    /// Visible validation message for a field, if any.
    pub fn error(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::Email => self.errors.email,
            Field::FirstName => self.errors.first_name,
            Field::LastName => self.errors.last_name,
            Field::Username => self.errors.username,
            Field::Password => self.errors.password,
        }
    }

    /// Whether the password input masks what is typed. Starts masked.
    pub fn password_masked(&self) -> bool {
        self.password_masked
    }

    pub fn toggle_password_visibility(&mut self) {
        self.password_masked = !self.password_masked;
    }

    /// Message from the last failed submission, if any.
    pub fn server_error(&self) -> Option<&str> {
        self.server_error.as_deref()
    }

    /// Start a submission attempt.
    ///
    /// The five values are taken out of the form (clearing it) and the
    /// previous server message is dropped first; only then is the
    /// snapshot validated. An attempt with any failing field is rejected
    /// and must not reach the network.
    pub fn submit(&mut self) -> SubmitAttempt {
        let payload = RegistrationPayload {
            username: mem::take(&mut self.username),
            firstname: mem::take(&mut self.first_name),
            lastname: mem::take(&mut self.last_name),
            password: mem::take(&mut self.password),
            email: mem::take(&mut self.email),
        };
        self.server_error = None;

        let checks = [
            (Field::Email, payload.email.as_str()),
            (Field::FirstName, payload.firstname.as_str()),
            (Field::LastName, payload.lastname.as_str()),
            (Field::Username, payload.username.as_str()),
            (Field::Password, payload.password.as_str()),
        ];
        let mut rejected = false;
        for (field, value) in checks {
            let err = validate(field, value).err();
            rejected |= err.is_some();
            *self.error_mut(field) = err;
        }

        if rejected {
            SubmitAttempt::Rejected
        } else {
            SubmitAttempt::Accepted(payload)
        }
    }

    /// Fold the network outcome of an accepted attempt back into the
    /// form. Returns `true` when the caller should switch to the sign-in
    /// view.
    pub fn apply_submit_result(&mut self, result: Result<(), ApiError>) -> bool {
        match result {
            Ok(()) => {
                self.server_error = None;
                true
            }
            Err(err) => {
                tracing::error!("registration request failed: {err}");
                let msg = err
                    .server_message()
                    .map(str::to_string)
                    .unwrap_or_else(|| GENERIC_FAILURE.to_string());
                self.server_error = Some(msg);
                false
            }
        }
    }

    fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Email => &mut self.email,
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Username => &mut self.username,
            Field::Password => &mut self.password,
        }
    }

    fn error_mut(&mut self, field: Field) -> &mut Option<&'static str> {
        match field {
            Field::Email => &mut self.errors.email,
            Field::FirstName => &mut self.errors.first_name,
            Field::LastName => &mut self.errors.last_name,
            Field::Username => &mut self.errors.username,
            Field::Password => &mut self.errors.password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> SignupForm {
        let mut form = SignupForm::new();
        form.set(Field::Email, "a@b.c".to_string());
        form.set(Field::FirstName, "Abel".to_string());
        form.set(Field::LastName, "Kebede".to_string());
        form.set(Field::Username, "abelk".to_string());
        form.set(Field::Password, "longenough1".to_string());
        form
    }

    #[test]
    fn empty_form_is_rejected_with_every_required_message() {
        let mut form = SignupForm::new();
        assert_eq!(form.submit(), SubmitAttempt::Rejected);
        assert_eq!(form.error(Field::Email), Some("Email is required"));
        assert_eq!(form.error(Field::FirstName), Some("First name is required"));
        assert_eq!(form.error(Field::LastName), Some("Last name is required"));
        assert_eq!(form.error(Field::Username), Some("Username is required"));
        assert_eq!(form.error(Field::Password), Some("Password is required"));
    }

    #[test]
    fn one_missing_field_blocks_the_attempt() {
        let mut form = filled();
        form.set(Field::Username, String::new());
        assert_eq!(form.submit(), SubmitAttempt::Rejected);
        assert_eq!(form.error(Field::Username), Some("Username is required"));
        assert_eq!(form.error(Field::Email), None);
    }

    #[test]
    fn email_format_rules() {
        assert!(validate(Field::Email, "a@b.c").is_ok());
        assert!(validate(Field::Email, "A.USER+tag@EXAMPLE.CO").is_ok());
        assert_eq!(
            validate(Field::Email, "not-an-email"),
            Err("Invalid email address")
        );
        assert_eq!(
            validate(Field::Email, "a@b"),
            Err("Invalid email address")
        );
    }

    #[test]
    fn password_length_rules() {
        assert_eq!(
            validate(Field::Password, "short1"),
            Err("Minimum password length is 8")
        );
        assert!(validate(Field::Password, "longenough1").is_ok());
    }

    #[test]
    fn keystrokes_revalidate_a_field() {
        let mut form = SignupForm::new();
        form.set(Field::Email, "not-an-email".to_string());
        assert_eq!(form.error(Field::Email), Some("Invalid email address"));
        form.set(Field::Email, String::new());
        assert_eq!(form.error(Field::Email), Some("Email is required"));
        form.set(Field::Email, "a@b.c".to_string());
        assert_eq!(form.error(Field::Email), None);
    }

    #[test]
    fn valid_form_yields_the_payload_and_clears_the_fields() {
        let mut form = filled();
        let SubmitAttempt::Accepted(payload) = form.submit() else {
            panic!("valid form was rejected");
        };
        assert_eq!(payload.email, "a@b.c");
        assert_eq!(payload.firstname, "Abel");
        assert_eq!(payload.lastname, "Kebede");
        assert_eq!(payload.username, "abelk");
        assert_eq!(payload.password, "longenough1");
        assert!(form.value(Field::Email).is_empty());
        assert!(form.value(Field::Password).is_empty());
    }

    #[test]
    fn fields_are_cleared_even_when_the_attempt_is_rejected() {
        let mut form = SignupForm::new();
        form.set(Field::Email, "a@b.c".to_string());
        assert_eq!(form.submit(), SubmitAttempt::Rejected);
        assert!(form.value(Field::Email).is_empty());
    }

    #[test]
    fn toggling_visibility_twice_restores_masking() {
        let mut form = SignupForm::new();
        assert!(form.password_masked());
        form.toggle_password_visibility();
        assert!(!form.password_masked());
        form.toggle_password_visibility();
        assert!(form.password_masked());
    }

    #[test]
    fn success_signals_the_view_switch_and_sets_no_error() {
        let mut form = SignupForm::new();
        assert!(form.apply_submit_result(Ok(())));
        assert_eq!(form.server_error(), None);
    }

    #[test]
    fn rejection_shows_the_server_message_and_keeps_the_view() {
        let mut form = SignupForm::new();
        let err = ApiError::Rejected {
            status: 400,
            msg: "Username taken".to_string(),
        };
        assert!(!form.apply_submit_result(Err(err)));
        assert_eq!(form.server_error(), Some("Username taken"));
    }

    #[test]
    fn rejection_without_a_message_falls_back_to_the_generic_one() {
        let mut form = SignupForm::new();
        assert!(!form.apply_submit_result(Err(ApiError::Status { status: 400 })));
        assert_eq!(form.server_error(), Some(GENERIC_FAILURE));
    }

    #[test]
    fn a_new_attempt_drops_the_previous_server_message() {
        let mut form = SignupForm::new();
        form.apply_submit_result(Err(ApiError::Status { status: 400 }));
        assert!(form.server_error().is_some());
        let _ = form.submit();
        assert_eq!(form.server_error(), None);
    }
}

#[cfg(test)]
mod flow_tests {
    //! The submission flow end to end against a mock backend.

    use super::*;
    use api::ApiClient;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn filled() -> SignupForm {
        let mut form = SignupForm::new();
        form.set(Field::Email, "a@b.c".to_string());
        form.set(Field::FirstName, "Abel".to_string());
        form.set(Field::LastName, "Kebede".to_string());
        form.set(Field::Username, "abelk".to_string());
        form.set(Field::Password, "longenough1".to_string());
        form
    }

    #[tokio::test]
    async fn success_switches_to_the_sign_in_view_exactly_once() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/users/register"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let mut form = filled();
        let SubmitAttempt::Accepted(payload) = form.submit() else {
            panic!("valid form was rejected");
        };

        let mut switches = 0;
        if form.apply_submit_result(client.register(&payload).await) {
            switches += 1;
        }
        assert_eq!(switches, 1);
        assert_eq!(form.server_error(), None);
    }

    #[tokio::test]
    async fn server_rejection_shows_its_message_and_keeps_the_view() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/users/register"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(serde_json::json!({ "msg": "Username taken" })),
            )
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let mut form = filled();
        let SubmitAttempt::Accepted(payload) = form.submit() else {
            panic!("valid form was rejected");
        };

        assert!(!form.apply_submit_result(client.register(&payload).await));
        assert_eq!(form.server_error(), Some("Username taken"));
    }

    #[tokio::test]
    async fn invalid_form_never_reaches_the_network() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/users/register"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let mut form = SignupForm::new();
        form.set(Field::Email, "a@b.c".to_string());
        if let SubmitAttempt::Accepted(payload) = form.submit() {
            let client = ApiClient::new(server.uri());
            let _ = client.register(&payload).await;
        }
        // The mock's expect(0) is verified when the server drops.
    }
}

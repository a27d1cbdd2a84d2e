//! Registration form ("Join the network").
//!
//! Validation runs on every keystroke and again on submit; the fields are
//! cleared the moment a submission starts. There is deliberately no
//! pending state: the submit button stays enabled while a request is in
//! flight, matching the backend's registration flow.

use dioxus::prelude::*;

use api::client;

use crate::components::{Button, ButtonVariant, Input};
use crate::form::{Field, SignupForm, SubmitAttempt};
use crate::icons::{FaEye, FaEyeSlash};
use crate::Icon;

/// Registration form component.
///
/// `on_toggle_form` is invoked (with no payload) when the surrounding
/// page should switch to the sign-in view: either because the user
/// followed the "Sign in" link or because registration succeeded.
#[component]
pub fn SignUp(on_toggle_form: EventHandler<()>) -> Element {
    let mut form = use_signal(SignupForm::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let attempt = form.with_mut(|f| f.submit());
        if let SubmitAttempt::Accepted(payload) = attempt {
            spawn(async move {
                let result = client::shared().register(&payload).await;
                if form.with_mut(|f| f.apply_submit_result(result)) {
                    on_toggle_form.call(());
                }
            });
        }
    };

    let current = form();

    let invalid = |field: Field| {
        if current.error(field).is_some() {
            "invalid"
        } else {
            ""
        }
    };
    let field_error = |field: Field| -> Element {
        match current.error(field) {
            Some(msg) => rsx! {
                div {
                    small { class: "text-danger", "{msg}" }
                }
            },
            None => rsx! {},
        }
    };

    let password_type = if current.password_masked() {
        "password"
    } else {
        "text"
    };

    rsx! {
        div { class: "auth-card",
            h4 { "Join the network" }
            p {
                "Already have an account? "
                Button {
                    variant: ButtonVariant::Link,
                    class: "create",
                    onclick: move |_| on_toggle_form.call(()),
                    "Sign in"
                }
            }
            form { onsubmit: handle_submit,
                Input {
                    class: invalid(Field::Email),
                    placeholder: "Email",
                    value: current.value(Field::Email).to_string(),
                    oninput: move |evt: FormEvent| {
                        form.with_mut(|f| f.set(Field::Email, evt.value()))
                    },
                }
                {field_error(Field::Email)}

                div { class: "input-group",
                    Input {
                        class: format!("first-name {}", invalid(Field::FirstName)),
                        placeholder: "First Name",
                        value: current.value(Field::FirstName).to_string(),
                        oninput: move |evt: FormEvent| {
                            form.with_mut(|f| f.set(Field::FirstName, evt.value()))
                        },
                    }
                    Input {
                        class: format!("last-name {}", invalid(Field::LastName)),
                        placeholder: "Last Name",
                        value: current.value(Field::LastName).to_string(),
                        oninput: move |evt: FormEvent| {
                            form.with_mut(|f| f.set(Field::LastName, evt.value()))
                        },
                    }
                }
                {field_error(Field::FirstName)}
                {field_error(Field::LastName)}

                Input {
                    class: invalid(Field::Username),
                    placeholder: "User Name",
                    value: current.value(Field::Username).to_string(),
                    oninput: move |evt: FormEvent| {
                        form.with_mut(|f| f.set(Field::Username, evt.value()))
                    },
                }
                {field_error(Field::Username)}

                if let Some(msg) = current.server_error() {
                    div {
                        small { class: "text-danger", "{msg}" }
                    }
                }

                div { class: "password-field",
                    Input {
                        class: invalid(Field::Password),
                        r#type: password_type,
                        placeholder: "Password",
                        value: current.value(Field::Password).to_string(),
                        oninput: move |evt: FormEvent| {
                            form.with_mut(|f| f.set(Field::Password, evt.value()))
                        },
                    }
                    i {
                        class: "password-toggle",
                        onclick: move |_| form.with_mut(|f| f.toggle_password_visibility()),
                        if current.password_masked() {
                            Icon { icon: FaEyeSlash, width: 14, height: 14 }
                        } else {
                            Icon { icon: FaEye, width: 14, height: 14 }
                        }
                    }
                }
                {field_error(Field::Password)}

                p { class: "legal",
                    "I agree to the "
                    a { href: "/legal/privacy", target: "_blank", "privacy policy" }
                    " and "
                    a { href: "/legal/terms", target: "_blank", "terms of service." }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    "Agree and Join"
                }
            }
        }
    }
}

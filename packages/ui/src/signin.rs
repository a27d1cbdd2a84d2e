//! Sign-in form the registration view toggles with.

use dioxus::prelude::*;

use api::{client, LoginPayload};

use crate::components::{Button, ButtonVariant, Input};

/// Sign-in form component.
///
/// `on_toggle_form` switches the surrounding page back to the
/// registration view.
#[component]
pub fn SignIn(on_toggle_form: EventHandler<()>) -> Element {
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();

            if e.is_empty() {
                error.set(Some("Email is required".to_string()));
                return;
            }
            if p.is_empty() {
                error.set(Some("Password is required".to_string()));
                return;
            }

            let payload = LoginPayload {
                email: e,
                password: p,
            };
            match client::shared().login(&payload).await {
                Ok(()) => {
                    #[cfg(target_arch = "wasm32")]
                    {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href("/");
                        }
                    }
                    #[cfg(not(target_arch = "wasm32"))]
                    tracing::info!("signed in");
                }
                Err(err) => {
                    tracing::error!("login request failed: {err}");
                    let msg = err
                        .server_message()
                        .map(str::to_string)
                        .unwrap_or_else(|| "Sign in failed".to_string());
                    error.set(Some(msg));
                }
            }
        });
    };

    rsx! {
        div { class: "auth-card",
            h4 { "Sign in to your account" }
            p {
                "Don't have an account? "
                Button {
                    variant: ButtonVariant::Link,
                    class: "create",
                    onclick: move |_| on_toggle_form.call(()),
                    "Create a new account"
                }
            }
            form { onsubmit: handle_submit,
                if let Some(msg) = error() {
                    div {
                        small { class: "text-danger", "{msg}" }
                    }
                }

                Input {
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                Input {
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    "Sign in"
                }
            }
        }
    }
}

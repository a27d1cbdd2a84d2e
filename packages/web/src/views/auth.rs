//! Authentication page hosting the sign-up / sign-in toggle.

use dioxus::prelude::*;
use ui::{SignIn, SignUp};

/// Landing page: shows the registration form first, and flips to the
/// sign-in form when either view asks for it.
#[component]
pub fn Auth() -> Element {
    let mut show_signup = use_signal(|| true);

    rsx! {
        div { class: "auth-page",
            if show_signup() {
                SignUp { on_toggle_form: move |_| show_signup.set(false) }
            } else {
                SignIn { on_toggle_form: move |_| show_signup.set(true) }
            }
        }
    }
}

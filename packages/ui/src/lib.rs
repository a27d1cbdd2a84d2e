//! This crate contains all shared UI for the workspace.

pub mod components;
pub mod form;

mod signin;
pub use signin::SignIn;

mod signup;
pub use signup::SignUp;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

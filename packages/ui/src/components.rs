//! Small form building blocks shared by the auth views.

use dioxus::prelude::*;

/// Visual style of a [`Button`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    Primary,
    /// Rendered like an inline link; used for the sign-up/sign-in toggle.
    Link,
}

/// Text input with a controlled value.
#[component]
pub fn Input(
    #[props(into, default)] class: String,
    #[props(into, default = "text".to_string())] r#type: String,
    #[props(into, default)] placeholder: String,
    #[props(into)] value: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    let input_type = r#type;
    rsx! {
        input {
            class: "{class}",
            r#type: "{input_type}",
            placeholder: "{placeholder}",
            value: "{value}",
            oninput: move |evt| oninput.call(evt),
        }
    }
}

#[component]
pub fn Button(
    #[props(default = ButtonVariant::Primary)] variant: ButtonVariant,
    #[props(into, default)] class: String,
    #[props(into, default = "button".to_string())] r#type: String,
    #[props(default)] onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let variant_class = match variant {
        ButtonVariant::Primary => "btn-primary",
        ButtonVariant::Link => "btn-link",
    };
    let button_type = r#type;
    rsx! {
        button {
            class: "btn {variant_class} {class}",
            r#type: "{button_type}",
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}

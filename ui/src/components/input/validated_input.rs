use dioxus::prelude::*;

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum InputType {
    Text,
    Password,
    Email,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Password => "password",
            InputType::Email => "email",
        }
    }

    fn autocomplete(&self) -> &'static str {
        match self {
            InputType::Email => "username",
            InputType::Password => "current-password",
            InputType::Text => "one-time-code",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ValidatedInputProps {
    pub name: &'static str,
    pub value: String,
    pub placeholder: String,
    pub input_type: InputType,
    pub input_class: String,
    /// Locked while a submission is in flight
    pub disabled: bool,
    pub on_change: EventHandler<String>,
    /// Fired when the field loses focus, used to mark it as touched
    pub on_blur: EventHandler<()>,
}

#[component]
pub fn ValidatedInput(props: ValidatedInputProps) -> Element {
    rsx! {
        input {
            id: "{props.name}",
            name: "{props.name}",
            class: "{props.input_class}",
            r#type: "{props.input_type.as_str()}",
            autocomplete: "{props.input_type.autocomplete()}",
            value: "{props.value}",
            placeholder: "{props.placeholder}",
            disabled: props.disabled,
            oninput: move |event| props.on_change.call(event.value()),
            onblur: move |_| props.on_blur.call(())
        }
    }
}

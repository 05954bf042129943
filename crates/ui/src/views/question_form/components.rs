use dioxus::prelude::*;

#[component]
pub fn FormInput(label: String, value: String, on_input: EventHandler<String>) -> Element {
    let id = field_id(&label);
    rsx! {
        div { class: "form-field",
            label { class: "form-label", r#for: "{id}", "{label}" }
            input {
                id: "{id}",
                class: "form-input",
                r#type: "text",
                value: "{value}",
                oninput: move |evt| on_input.call(evt.value()),
            }
        }
    }
}

/// A `<select>` with a leading blank option. Options outside `allowed` are
/// rendered but disabled.
#[component]
pub fn LabeledSelect(
    label: String,
    options: Vec<String>,
    allowed: Option<Vec<String>>,
    value: String,
    #[props(default = "Select an option".to_string())] placeholder: String,
    on_change: EventHandler<String>,
) -> Element {
    let id = field_id(&label);
    rsx! {
        div { class: "form-field",
            label { class: "form-label", r#for: "{id}", "{label}" }
            select {
                id: "{id}",
                class: "form-select",
                value: "{value}",
                onchange: move |evt| on_change.call(evt.value()),
                option { value: "", selected: value.is_empty(), "{placeholder}" }
                for opt in options.iter() {
                    option {
                        key: "{opt}",
                        value: "{opt}",
                        selected: *opt == value,
                        disabled: allowed.as_ref().is_some_and(|allowed| !allowed.contains(opt)),
                        "{opt}"
                    }
                }
            }
        }
    }
}

fn field_id(label: &str) -> String {
    label.to_ascii_lowercase().replace(' ', "-")
}

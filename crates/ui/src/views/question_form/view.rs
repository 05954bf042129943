use std::sync::Arc;

use dioxus::prelude::*;
use question_core::{CategoryMap, ClassLevel, Level, Question, QuestionField, QuestionType};
use services::{EditorConfig, EditorMode, QuestionSubmitter};

use crate::vm::{SubcategorySlotVm, build_question_form_vm};

use super::actions::{FormIntent, use_form_dispatcher};
use super::components::{FormInput, LabeledSelect};
use super::state::{FormServices, use_form_state};
use super::utils::{labels, option_from_value, option_value};

#[derive(Props, Clone)]
pub struct QuestionFormProps {
    /// The draft; every edit replaces the whole record.
    pub question: Signal<Question>,
    pub categories: CategoryMap,
    pub submitter: Arc<dyn QuestionSubmitter>,
    #[props(default)]
    pub mode: EditorMode,
    #[props(default)]
    pub config: EditorConfig,
}

impl PartialEq for QuestionFormProps {
    fn eq(&self, other: &Self) -> bool {
        self.question == other.question
            && self.categories == other.categories
            && Arc::ptr_eq(&self.submitter, &other.submitter)
            && self.mode == other.mode
            && self.config == other.config
    }
}

#[allow(clippy::too_many_lines)]
#[component]
pub fn QuestionForm(props: QuestionFormProps) -> Element {
    let state = use_form_state(props.question, props.mode);
    let services = FormServices {
        categories: props.categories.clone(),
        submitter: Arc::clone(&props.submitter),
        banner_duration: props.config.banner_duration,
    };
    let dispatch = use_form_dispatcher(&state, &services);

    let draft = state.question.read().clone();
    let vm = build_question_form_vm(&draft, &props.categories, &state.gate.read());
    // an unmapped category leaves only the select's own placeholder entry
    let slot_choices = if vm.subcategories_mapped {
        vm.available_subcategories.clone()
    } else {
        Vec::new()
    };

    let text_handler = move |field: QuestionField| {
        move |value: String| dispatch.call(FormIntent::SetText(field, value))
    };

    rsx! {
        div { class: "question-form",
            h1 { class: "question-form-title", "{vm.title}" }
            FormInput {
                label: QuestionField::BookName.label().to_string(),
                value: draft.book_name.clone(),
                on_input: text_handler(QuestionField::BookName),
            }
            div { class: "form-group",
                FormInput {
                    label: QuestionField::Chapter.label().to_string(),
                    value: draft.chapter.clone(),
                    on_input: text_handler(QuestionField::Chapter),
                }
                FormInput {
                    label: QuestionField::Exercise.label().to_string(),
                    value: draft.exercise.clone(),
                    on_input: text_handler(QuestionField::Exercise),
                }
            }
            div { class: "form-group",
                FormInput {
                    label: QuestionField::QuestionNumber.label().to_string(),
                    value: draft.question_number.clone(),
                    on_input: text_handler(QuestionField::QuestionNumber),
                }
                LabeledSelect {
                    label: "Type".to_string(),
                    options: labels(QuestionType::ALL),
                    value: option_value(draft.question_type),
                    on_change: move |value: String| {
                        dispatch.call(FormIntent::SetQuestionType(option_from_value(&value)));
                    },
                }
            }
            div { class: "form-group",
                LabeledSelect {
                    label: "Class".to_string(),
                    options: labels(ClassLevel::ALL),
                    value: option_value(draft.class),
                    on_change: move |value: String| {
                        dispatch.call(FormIntent::SetClass(option_from_value(&value)));
                    },
                }
                LabeledSelect {
                    label: "Level".to_string(),
                    options: labels(Level::ALL),
                    value: option_value(draft.level),
                    on_change: move |value: String| {
                        dispatch.call(FormIntent::SetLevel(option_from_value(&value)));
                    },
                }
            }
            LabeledSelect {
                label: "Category".to_string(),
                options: vm.categories.clone(),
                value: draft.category.clone(),
                placeholder: "Select a Category".to_string(),
                on_change: move |value: String| dispatch.call(FormIntent::SelectCategory(value)),
            }
            for slot in vm.slots.clone() {
                SubcategorySlot {
                    key: "{slot.index}",
                    slot: slot.clone(),
                    available: slot_choices.clone(),
                    dispatch,
                }
            }
            if let Some(error) = vm.error.as_ref() {
                p { class: "form-error", "{error}" }
            }
            if let Some(success) = vm.success.as_ref() {
                p { class: "form-success", "{success}" }
            }
            div { class: "form-group",
                button {
                    class: "form-button",
                    r#type: "button",
                    disabled: !vm.can_add_slot,
                    onclick: move |_| dispatch.call(FormIntent::AddSlot),
                    "Add Subcategory"
                }
                button {
                    class: "form-button",
                    r#type: "button",
                    onclick: move |_| dispatch.call(FormIntent::Clear),
                    "Clear"
                }
            }
            button {
                class: "form-button form-button--primary",
                r#type: "button",
                disabled: !vm.can_submit,
                onclick: move |_| dispatch.call(FormIntent::Submit),
                if vm.is_submitting {
                    "Submitting…"
                } else {
                    "Submit"
                }
            }
        }
    }
}

#[component]
fn SubcategorySlot(
    slot: SubcategorySlotVm,
    available: Vec<String>,
    dispatch: Callback<FormIntent>,
) -> Element {
    let index = slot.index;
    rsx! {
        div { class: "subcategory-slot",
            button {
                class: "subcategory-remove",
                r#type: "button",
                aria_label: "Remove {slot.label}",
                onclick: move |_| dispatch.call(FormIntent::RemoveSlot(index)),
                "×"
            }
            LabeledSelect {
                label: slot.label.clone(),
                options: available,
                allowed: slot.options.clone(),
                value: slot.value.clone(),
                placeholder: "Select a Subcategory".to_string(),
                on_change: move |value: String| {
                    dispatch.call(FormIntent::SelectSubcategory(index, value));
                },
            }
        }
    }
}

use question_core::{CategoryMap, Question, SubcategoryOptions, slot_options};
use services::SubmitGate;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubcategorySlotVm {
    pub index: usize,
    pub label: String,
    pub value: String,
    pub options: Vec<String>,
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionFormVm {
    pub title: &'static str,
    pub categories: Vec<String>,
    pub available_subcategories: Vec<String>,
    pub slots: Vec<SubcategorySlotVm>,
    pub subcategories_mapped: bool,
    pub can_add_slot: bool,
    pub can_submit: bool,
    pub is_submitting: bool,
    pub error: Option<String>,
    pub success: Option<String>,
}

#[must_use]
pub fn build_question_form_vm(
    question: &Question,
    categories: &CategoryMap,
    gate: &SubmitGate,
) -> QuestionFormVm {
    let options = SubcategoryOptions::derive(categories, question);
    let slots = question
        .subcategory
        .iter()
        .enumerate()
        .map(|(index, value)| SubcategorySlotVm {
            index,
            label: format!("Subcategory {}", index + 1),
            value: value.clone(),
            options: slot_options(categories, question, index),
        })
        .collect();
    let is_submitting = gate.is_submitting();

    QuestionFormVm {
        title: gate.mode().title(),
        categories: categories.categories().map(str::to_owned).collect(),
        available_subcategories: options.available.clone(),
        slots,
        subcategories_mapped: options.is_mapped(),
        can_add_slot: options.can_add_slot(),
        can_submit: !is_submitting,
        is_submitting,
        error: gate.feedback().error().message().map(str::to_owned),
        success: gate.feedback().success().message().map(str::to_owned),
    }
}

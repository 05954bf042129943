use std::sync::Arc;

use dioxus::prelude::*;
use question_core::edit::{self, EditError};
use question_core::{ClassLevel, Level, Question, QuestionField, QuestionType};
use services::{SubmitOutcome, SubmitRejected};

use super::state::{FormServices, FormState};

/// Everything the form can ask for. Each edit replaces the whole draft.
#[derive(Clone, Debug, PartialEq)]
pub enum FormIntent {
    SetText(QuestionField, String),
    SetLevel(Option<Level>),
    SetQuestionType(Option<QuestionType>),
    SetClass(Option<ClassLevel>),
    SelectCategory(String),
    AddSlot,
    RemoveSlot(usize),
    SelectSubcategory(usize, String),
    Clear,
    Submit,
}

pub fn use_form_dispatcher(state: &FormState, services: &FormServices) -> Callback<FormIntent> {
    let state = state.clone();
    let services = services.clone();
    use_callback(move |intent: FormIntent| dispatch_intent(intent, &state, &services))
}

fn dispatch_intent(intent: FormIntent, state: &FormState, services: &FormServices) {
    let draft = state.question.peek().clone();
    let next = match intent {
        FormIntent::SetText(field, value) => Ok(edit::with_text(&draft, field, value)),
        FormIntent::SetLevel(level) => Ok(edit::with_level(&draft, level)),
        FormIntent::SetQuestionType(question_type) => {
            Ok(edit::with_question_type(&draft, question_type))
        }
        FormIntent::SetClass(class) => Ok(edit::with_class(&draft, class)),
        FormIntent::SelectCategory(category) => Ok(edit::with_category(&draft, category)),
        FormIntent::AddSlot => edit::with_added_slot(&services.categories, &draft),
        FormIntent::RemoveSlot(index) => edit::without_slot(&draft, index),
        FormIntent::SelectSubcategory(index, value) => {
            edit::with_subcategory(&services.categories, &draft, index, value)
        }
        FormIntent::Clear => Ok(edit::cleared()),
        FormIntent::Submit => {
            submit(state, services, &draft);
            return;
        }
    };
    replace_draft(state, next);
}

fn replace_draft(state: &FormState, next: Result<Question, EditError>) {
    let mut question = state.question;
    match next {
        Ok(next) => {
            tracing::debug!(category = %next.category, slots = next.subcategory.len(), "draft replaced");
            question.set(next);
        }
        Err(err) => tracing::warn!(%err, "edit refused"),
    }
}

fn submit(state: &FormState, services: &FormServices, draft: &Question) {
    let mut gate = state.gate;
    let delay = services.banner_duration;
    let begun = gate.write().begin(draft);
    match begun {
        Ok(ticket) => {
            let submitter = Arc::clone(&services.submitter);
            let timers = state.timers.clone();
            spawn(async move {
                let accepted = submitter.submit(ticket.question()).await;
                let outcome = gate.write().finish(ticket, accepted);
                if let SubmitOutcome::Accepted { banner, .. } = outcome {
                    timers.schedule(gate, banner, delay);
                }
            });
        }
        Err(SubmitRejected::Incomplete(_)) => {
            let ticket = gate.peek().error_ticket();
            if let Some(ticket) = ticket {
                state.timers.schedule(gate, ticket, delay);
            }
        }
        Err(_) => {}
    }
}

use std::sync::Arc;

use dioxus::prelude::*;
use question_core::{CategoryMap, Question};
use services::{EditorMode, InMemorySubmitter, QuestionSubmitter};

use super::QuestionForm;

#[derive(Props, Clone)]
struct HarnessProps {
    initial: Question,
    mode: EditorMode,
    submitter: Arc<dyn QuestionSubmitter>,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

fn categories() -> CategoryMap {
    CategoryMap::new([
        ("Algebra", vec!["Linear", "Quadratic"]),
        ("Geometry", vec!["Triangles"]),
    ])
    .expect("valid categories")
}

#[component]
fn FormHarness(props: HarnessProps) -> Element {
    let question = use_signal(|| props.initial.clone());
    rsx! {
        QuestionForm {
            question,
            categories: categories(),
            submitter: props.submitter.clone(),
            mode: props.mode,
        }
    }
}

fn render(initial: Question, mode: EditorMode) -> String {
    let mut dom = VirtualDom::new_with_props(
        FormHarness,
        HarnessProps {
            initial,
            mode,
            submitter: Arc::new(InMemorySubmitter::accepting()),
        },
    );
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[test]
fn blank_form_renders_every_field() {
    let html = render(Question::default(), EditorMode::Create);
    for expected in [
        "Add Question",
        "Book Name",
        "Chapter",
        "Exercise",
        "Question Number",
        "Type",
        "Class",
        "Level",
        "Category",
        "Subcategory 1",
        "Select a Subcategory",
        "Add Subcategory",
        "Clear",
        "Submit",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(!html.contains("Subcategory 2"), "unexpected second slot in {html}");
}

#[test]
fn edit_form_renders_existing_slots() {
    let question = Question {
        book_name: "Foundations".to_string(),
        category: "Algebra".to_string(),
        subcategory: vec!["Linear".to_string(), String::new()],
        ..Question::default()
    };
    let html = render(question, EditorMode::Edit);
    assert!(html.contains("Edit Question"), "missing title in {html}");
    assert!(html.contains("Subcategory 2"), "missing second slot in {html}");
    assert!(html.contains("Quadratic"), "missing option in {html}");
    assert!(html.contains("Foundations"), "missing book name in {html}");
}

#[test]
fn filter_form_uses_filter_title() {
    let html = render(Question::default(), EditorMode::Filter);
    assert!(html.contains("Filter Question"), "missing title in {html}");
    assert!(!html.contains("form-error"), "no banner expected in {html}");
}

use question_core::edit;
use question_core::{
    CategoryMap, ClassLevel, Level, Question, QuestionField, QuestionType, SubcategoryOptions,
};
use services::{
    BannerKind, EditorMode, InMemorySubmitter, QuestionSubmitter, SubmitGate, SubmitOutcome,
    SubmitPhase, SubmitRejected,
};

fn categories() -> CategoryMap {
    CategoryMap::new([
        ("Algebra", vec!["Linear", "Quadratic"]),
        ("Geometry", vec!["Triangles", "Circles", "Polygons"]),
    ])
    .expect("valid categories")
}

fn filled_draft(categories: &CategoryMap) -> Question {
    let draft = Question::default();
    let draft = edit::with_text(&draft, QuestionField::BookName, "Foundations of Algebra");
    let draft = edit::with_text(&draft, QuestionField::Chapter, "4");
    let draft = edit::with_text(&draft, QuestionField::Exercise, "4.2");
    let draft = edit::with_text(&draft, QuestionField::QuestionNumber, "11");
    let draft = edit::with_question_type(&draft, Some(QuestionType::Numerical));
    let draft = edit::with_class(&draft, Some(ClassLevel::Ninth));
    let draft = edit::with_level(&draft, Some(Level::Basic));
    let draft = edit::with_category(&draft, "Algebra");
    edit::with_subcategory(categories, &draft, 0, "Quadratic").expect("select quadratic")
}

async fn submit(
    gate: &mut SubmitGate,
    draft: &Question,
    submitter: &dyn QuestionSubmitter,
) -> Result<SubmitOutcome, SubmitRejected> {
    let ticket = gate.begin(draft)?;
    assert_eq!(gate.phase(), SubmitPhase::Submitting);
    let accepted = submitter.submit(ticket.question()).await;
    Ok(gate.finish(ticket, accepted))
}

#[tokio::test]
async fn create_flow_submits_complete_draft() {
    let submitter = InMemorySubmitter::accepting();
    let mut gate = SubmitGate::new(EditorMode::Create);
    let draft = filled_draft(&categories());

    let outcome = submit(&mut gate, &draft, &submitter).await.expect("submit");
    match outcome {
        SubmitOutcome::Accepted { message, banner } => {
            assert_eq!(message, "Question added successfully");
            assert_eq!(banner.kind(), BannerKind::Success);
        }
        other => panic!("unexpected outcome {other:?}"),
    }
    assert_eq!(
        gate.feedback().success().message(),
        Some("Question added successfully")
    );
    assert_eq!(gate.phase(), SubmitPhase::Idle);
    let submitted = submitter.submitted();
    assert_eq!(submitted.len(), 1);
    assert_eq!(submitted[0], draft);
}

#[tokio::test]
async fn editing_mode_reports_edited() {
    let submitter = InMemorySubmitter::accepting();
    let mut gate = SubmitGate::new(EditorMode::Edit);

    submit(&mut gate, &filled_draft(&categories()), &submitter)
        .await
        .expect("submit");
    assert_eq!(
        gate.feedback().success().message(),
        Some("Question edited successfully")
    );
    assert!(!gate.feedback().error().is_shown());
}

#[tokio::test]
async fn incomplete_draft_never_reaches_handler() {
    let submitter = InMemorySubmitter::accepting();
    let mut gate = SubmitGate::new(EditorMode::Create);

    let err = submit(&mut gate, &Question::default(), &submitter)
        .await
        .unwrap_err();
    let expected = question_core::is_question_complete(&Question::default()).error;
    assert_eq!(err, SubmitRejected::Incomplete(expected.clone()));
    assert_eq!(gate.feedback().error().message(), Some(expected.as_str()));
    assert_eq!(gate.feedback().success().message(), None);
    assert!(submitter.submitted().is_empty());
}

#[tokio::test]
async fn filtering_skips_validation() {
    let submitter = InMemorySubmitter::accepting();
    let mut gate = SubmitGate::new(EditorMode::Filter);
    let draft = edit::with_category(&Question::default(), "Geometry");

    submit(&mut gate, &draft, &submitter)
        .await
        .expect("filter submit");
    assert_eq!(submitter.submitted().len(), 1);
    assert_eq!(submitter.submitted()[0].category, "Geometry");
    assert_eq!(
        gate.feedback().success().message(),
        Some("Question filtered successfully")
    );
}

#[tokio::test]
async fn declined_submission_shows_nothing() {
    let submitter = InMemorySubmitter::declining();
    let mut gate = SubmitGate::new(EditorMode::Create);

    let outcome = submit(&mut gate, &filled_draft(&categories()), &submitter)
        .await
        .expect("submit");
    assert_eq!(outcome, SubmitOutcome::Declined);
    assert_eq!(gate.feedback().error().message(), None);
    assert_eq!(gate.feedback().success().message(), None);
    assert_eq!(gate.phase(), SubmitPhase::Idle);
    assert_eq!(submitter.submitted().len(), 1);
}

#[tokio::test]
async fn fixing_the_draft_replaces_error_with_success() {
    let submitter = InMemorySubmitter::accepting();
    let mut gate = SubmitGate::new(EditorMode::Create);
    let categories = categories();

    let draft = edit::with_category(&filled_draft(&categories), "Geometry");
    let err = submit(&mut gate, &draft, &submitter).await.unwrap_err();
    assert_eq!(
        err,
        SubmitRejected::Incomplete("At least one subcategory is required".to_string())
    );
    let stale = gate.error_ticket().expect("error banner shown");

    let draft = edit::with_subcategory(&categories, &draft, 0, "Circles").expect("select circles");
    submit(&mut gate, &draft, &submitter).await.expect("submit");
    assert!(!gate.feedback().error().is_shown());
    assert!(!gate.expire_banner(stale));
    assert!(gate.feedback().success().is_shown());
}

#[test]
fn algebra_slots_scenario() {
    let categories = categories();
    let draft = edit::with_category(&Question::default(), "Algebra");
    assert_eq!(draft.subcategory, vec![String::new()]);

    let draft = edit::with_added_slot(&categories, &draft).expect("add slot");
    assert_eq!(draft.subcategory, vec![String::new(), String::new()]);
    assert!(!SubcategoryOptions::derive(&categories, &draft).can_add_slot());

    let draft = edit::with_subcategory(&categories, &draft, 0, "Linear").expect("select linear");
    let second = question_core::slot_options(&categories, &draft, 1);
    assert!(!second.contains(&"Linear".to_string()));
    let options = SubcategoryOptions::derive(&categories, &draft);
    assert!(options.allowed.iter().all(|s| s != "Linear"));

    let draft = edit::without_slot(&draft, 0).expect("remove first");
    assert_eq!(draft.subcategory, vec![String::new()]);

    let draft = edit::with_category(&draft, "Geometry");
    assert_eq!(draft.subcategory, vec![String::new()]);
}

#[test]
fn clear_resets_to_blank_draft() {
    let existing = Question {
        book_name: "Geometry Today".to_string(),
        category: "Geometry".to_string(),
        subcategory: vec!["Circles".to_string()],
        ..Question::default()
    };
    assert_ne!(existing, Question::default());
    assert_eq!(edit::cleared(), Question::default());
}

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use question_core::{CategoryMap, ClassLevel, Level, Question, QuestionField, QuestionType};
use services::{EditorMode, InMemorySubmitter, SubmitGate};

use super::actions::{FormIntent, use_form_dispatcher};
use super::state::{BannerTimers, FormServices, FormState, use_banner_timers};

const BANNER: Duration = Duration::from_millis(1000);

#[derive(Clone, Default)]
struct HarnessHandles {
    dispatch: Rc<RefCell<Option<Callback<FormIntent>>>>,
    timers: Rc<RefCell<Option<BannerTimers>>>,
    gate: Rc<RefCell<Option<Signal<SubmitGate>>>>,
    mounted: Rc<RefCell<Option<Signal<bool>>>>,
}

impl HarnessHandles {
    fn dispatch(&self) -> Callback<FormIntent> {
        self.dispatch.borrow().expect("dispatch registered")
    }

    fn timers(&self) -> BannerTimers {
        self.timers.borrow().clone().expect("timers registered")
    }

    fn gate(&self) -> Signal<SubmitGate> {
        self.gate.borrow().expect("gate registered")
    }

    fn mounted(&self) -> Signal<bool> {
        self.mounted.borrow().expect("mount flag registered")
    }
}

#[derive(Props, Clone)]
struct HarnessProps {
    mode: EditorMode,
    services: FormServices,
    handles: HarnessHandles,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[derive(Props, Clone)]
struct DriverProps {
    question: Signal<Question>,
    gate: Signal<SubmitGate>,
    services: FormServices,
    handles: HarnessHandles,
}

impl PartialEq for DriverProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

/// Owns the draft and the gate so both outlive the form itself.
#[component]
fn FormHost(props: HarnessProps) -> Element {
    let question = use_signal(Question::default);
    let gate = use_signal(|| SubmitGate::new(props.mode));
    let mounted = use_signal(|| true);
    use_hook(|| {
        *props.handles.gate.borrow_mut() = Some(gate);
        *props.handles.mounted.borrow_mut() = Some(mounted);
    });
    rsx! {
        if mounted() {
            FormDriver {
                question,
                gate,
                services: props.services.clone(),
                handles: props.handles.clone(),
            }
        }
    }
}

#[component]
fn FormDriver(props: DriverProps) -> Element {
    let timers = use_banner_timers();
    let state = FormState {
        question: props.question,
        gate: props.gate,
        timers: timers.clone(),
    };
    let dispatch = use_form_dispatcher(&state, &props.services);
    use_hook(|| {
        *props.handles.dispatch.borrow_mut() = Some(dispatch);
        *props.handles.timers.borrow_mut() = Some(timers.clone());
    });
    rsx! { div {} }
}

fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

async fn settle(dom: &mut VirtualDom, wait: Duration) {
    tokio::time::sleep(wait).await;
    for _ in 0..4 {
        drive_dom(dom);
    }
}

fn mount(mode: EditorMode, submitter: Arc<InMemorySubmitter>) -> (VirtualDom, HarnessHandles) {
    let categories = CategoryMap::new([("Algebra", vec!["Linear", "Quadratic"])])
        .expect("valid categories");
    let handles = HarnessHandles::default();
    let mut dom = VirtualDom::new_with_props(
        FormHost,
        HarnessProps {
            mode,
            services: FormServices {
                categories,
                submitter,
                banner_duration: BANNER,
            },
            handles: handles.clone(),
        },
    );
    dom.rebuild_in_place();
    drive_dom(&mut dom);
    (dom, handles)
}

fn send(dom: &mut VirtualDom, handles: &HarnessHandles, intent: FormIntent) {
    let dispatch = handles.dispatch();
    dom.in_runtime(|| dispatch.call(intent));
    drive_dom(dom);
}

fn fill_complete_draft(dom: &mut VirtualDom, handles: &HarnessHandles) {
    for (field, value) in [
        (QuestionField::BookName, "Foundations of Algebra"),
        (QuestionField::Chapter, "4"),
        (QuestionField::Exercise, "4.2"),
        (QuestionField::QuestionNumber, "11"),
    ] {
        send(dom, handles, FormIntent::SetText(field, value.to_string()));
    }
    send(dom, handles, FormIntent::SetQuestionType(Some(QuestionType::ShortAnswer)));
    send(dom, handles, FormIntent::SetClass(Some(ClassLevel::Eleventh)));
    send(dom, handles, FormIntent::SetLevel(Some(Level::Advanced)));
    send(dom, handles, FormIntent::SelectCategory("Algebra".to_string()));
    send(dom, handles, FormIntent::SelectSubcategory(0, "Linear".to_string()));
}

fn banners(dom: &VirtualDom, handles: &HarnessHandles) -> (Option<String>, Option<String>) {
    let gate = handles.gate();
    dom.in_runtime(|| {
        let gate = gate.peek();
        (
            gate.feedback().error().message().map(str::to_owned),
            gate.feedback().success().message().map(str::to_owned),
        )
    })
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn success_banner_clears_itself_after_delay() {
    let submitter = Arc::new(InMemorySubmitter::accepting());
    let (mut dom, handles) = mount(EditorMode::Create, Arc::clone(&submitter));
    fill_complete_draft(&mut dom, &handles);

    send(&mut dom, &handles, FormIntent::Submit);
    settle(&mut dom, Duration::ZERO).await;
    assert_eq!(submitter.submitted().len(), 1);
    assert_eq!(submitter.submitted()[0].subcategory, vec!["Linear".to_string()]);
    assert_eq!(
        banners(&dom, &handles),
        (None, Some("Question added successfully".to_string()))
    );
    let gate = handles.gate();
    assert!(!dom.in_runtime(|| gate.peek().is_submitting()));

    settle(&mut dom, BANNER / 2).await;
    assert!(banners(&dom, &handles).1.is_some());

    settle(&mut dom, BANNER).await;
    assert_eq!(banners(&dom, &handles), (None, None));
    assert_eq!(handles.timers().elapsed(), 1);
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn newer_error_cancels_pending_timer() {
    let submitter = Arc::new(InMemorySubmitter::accepting());
    let (mut dom, handles) = mount(EditorMode::Create, Arc::clone(&submitter));

    send(&mut dom, &handles, FormIntent::Submit);
    assert_eq!(banners(&dom, &handles).0.as_deref(), Some("Book Name is required"));

    settle(&mut dom, BANNER / 2).await;
    send(
        &mut dom,
        &handles,
        FormIntent::SetText(QuestionField::BookName, "Foundations".to_string()),
    );
    send(&mut dom, &handles, FormIntent::Submit);
    assert_eq!(banners(&dom, &handles).0.as_deref(), Some("Chapter is required"));

    // past the first timer's deadline, short of the second's
    settle(&mut dom, BANNER * 3 / 4).await;
    assert_eq!(handles.timers().elapsed(), 0);
    assert_eq!(banners(&dom, &handles).0.as_deref(), Some("Chapter is required"));

    settle(&mut dom, BANNER).await;
    assert_eq!(handles.timers().elapsed(), 1);
    assert_eq!(banners(&dom, &handles), (None, None));
    assert!(submitter.submitted().is_empty());
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn unmounting_form_cancels_pending_timers() {
    let submitter = Arc::new(InMemorySubmitter::accepting());
    let (mut dom, handles) = mount(EditorMode::Edit, submitter);

    send(&mut dom, &handles, FormIntent::Submit);
    assert!(banners(&dom, &handles).0.is_some());
    let timers = handles.timers();

    let mut mounted = handles.mounted();
    dom.in_runtime(|| mounted.set(false));
    settle(&mut dom, Duration::ZERO).await;

    settle(&mut dom, BANNER * 2).await;
    assert_eq!(timers.elapsed(), 0);
    assert_eq!(banners(&dom, &handles).0.as_deref(), Some("Book Name is required"));
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn declined_submit_schedules_nothing() {
    let submitter = Arc::new(InMemorySubmitter::declining());
    let (mut dom, handles) = mount(EditorMode::Filter, Arc::clone(&submitter));

    send(&mut dom, &handles, FormIntent::AddSlot);
    send(&mut dom, &handles, FormIntent::Submit);
    settle(&mut dom, BANNER * 2).await;

    assert_eq!(submitter.submitted().len(), 1);
    assert_eq!(submitter.submitted()[0], Question::default());
    assert_eq!(banners(&dom, &handles), (None, None));
    assert_eq!(handles.timers().elapsed(), 0);
}

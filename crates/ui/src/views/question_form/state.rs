use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use dioxus::core::Task;
use dioxus::prelude::*;
use question_core::{CategoryMap, Question};
use services::{BannerKind, BannerTicket, EditorMode, QuestionSubmitter, SubmitGate};

#[derive(Clone)]
pub struct FormState {
    pub question: Signal<Question>,
    pub gate: Signal<SubmitGate>,
    pub timers: BannerTimers,
}

#[derive(Clone)]
pub struct FormServices {
    pub categories: CategoryMap,
    pub submitter: Arc<dyn QuestionSubmitter>,
    pub banner_duration: Duration,
}

pub fn use_form_state(question: Signal<Question>, mode: EditorMode) -> FormState {
    let gate = use_signal(|| SubmitGate::new(mode));
    let timers = use_banner_timers();
    FormState {
        question,
        gate,
        timers,
    }
}

#[derive(Default)]
struct TimerSlots {
    error: Option<Task>,
    success: Option<Task>,
    elapsed: usize,
}

/// Auto-clear tasks for the feedback banners of one form.
///
/// A new banner cancels whatever timer is still pending, and
/// [`BannerTimers::cancel_all`] runs when the form unmounts.
#[derive(Clone, Default)]
pub struct BannerTimers(Rc<RefCell<TimerSlots>>);

impl BannerTimers {
    pub fn schedule(&self, mut gate: Signal<SubmitGate>, ticket: BannerTicket, delay: Duration) {
        // either banner replaces the other, so both pending timers are stale
        self.cancel_all();
        let slots = Rc::clone(&self.0);
        let task = spawn(async move {
            tokio::time::sleep(delay).await;
            let elapsed = {
                let mut slots = slots.borrow_mut();
                slots.elapsed += 1;
                slots.elapsed
            };
            let cleared = gate.write().expire_banner(ticket);
            tracing::debug!(kind = ?ticket.kind(), cleared, elapsed, "banner timer elapsed");
        });
        let mut slots = self.0.borrow_mut();
        match ticket.kind() {
            BannerKind::Error => slots.error = Some(task),
            BannerKind::Success => slots.success = Some(task),
        }
    }

    pub fn cancel_all(&self) {
        let mut slots = self.0.borrow_mut();
        for task in [slots.error.take(), slots.success.take()].into_iter().flatten() {
            task.cancel();
        }
    }

    /// Timers that ran their full delay.
    #[cfg(test)]
    pub fn elapsed(&self) -> usize {
        self.0.borrow().elapsed
    }
}

pub fn use_banner_timers() -> BannerTimers {
    let timers = use_hook(BannerTimers::default);
    let on_drop = timers.clone();
    use_drop(move || on_drop.cancel_all());
    timers
}

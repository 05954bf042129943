//! Submit busy state and the feedback it produces.

use question_core::{CompletenessCheck, Question, RequiredFields};

use crate::error::SubmitRejected;
use crate::feedback::{BannerKind, BannerTicket, Feedback};
use crate::mode::EditorMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Submitting,
}

/// Proof that a submission was started; hand it back to
/// [`SubmitGate::finish`] once the handler answers.
#[derive(Debug)]
#[must_use]
pub struct SubmitTicket {
    id: u64,
    question: Question,
}

impl SubmitTicket {
    pub fn question(&self) -> &Question {
        &self.question
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted { message: String, banner: BannerTicket },
    /// The handler answered `false`. Nothing is shown to the user.
    Declined,
    /// The ticket does not belong to the submission in flight.
    Stale,
}

/// Guards the submit handler: validates the draft, allows one submission in
/// flight at a time, and turns answers into banners.
#[derive(Debug, Clone)]
pub struct SubmitGate<C = RequiredFields> {
    mode: EditorMode,
    check: C,
    feedback: Feedback,
    phase: SubmitPhase,
    in_flight: Option<u64>,
    next_id: u64,
}

impl SubmitGate<RequiredFields> {
    #[must_use]
    pub fn new(mode: EditorMode) -> Self {
        Self::with_check(mode, RequiredFields)
    }
}

impl<C: CompletenessCheck> SubmitGate<C> {
    /// A fresh gate using `check` instead of [`RequiredFields`]. Nothing is
    /// carried over from any other gate: no banners, idle.
    #[must_use]
    pub fn with_check(mode: EditorMode, check: C) -> Self {
        Self {
            mode,
            check,
            feedback: Feedback::default(),
            phase: SubmitPhase::Idle,
            in_flight: None,
            next_id: 0,
        }
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    /// Validate `draft` (unless filtering) and mark the gate busy.
    ///
    /// # Errors
    ///
    /// `SubmitRejected::AlreadySubmitting` while another submission is in
    /// flight; `SubmitRejected::Incomplete` with the check's message, which
    /// is also put on the error banner unless it is blank.
    pub fn begin(&mut self, draft: &Question) -> Result<SubmitTicket, SubmitRejected> {
        if self.is_submitting() {
            tracing::debug!("submit ignored, already submitting");
            return Err(SubmitRejected::AlreadySubmitting);
        }
        if self.mode.validates() {
            let status = self.check.check(draft);
            if !status.is_complete {
                tracing::info!(error = %status.error, "question incomplete");
                if status.error.trim().is_empty() {
                    self.feedback.clear_error();
                } else {
                    self.feedback.show_error(status.error.clone());
                }
                return Err(SubmitRejected::Incomplete(status.error));
            }
        }
        let id = self.next_id;
        self.next_id += 1;
        self.phase = SubmitPhase::Submitting;
        self.in_flight = Some(id);
        tracing::debug!(id, mode = %self.mode, "submit started");
        Ok(SubmitTicket {
            id,
            question: draft.clone(),
        })
    }

    /// Record the handler's answer and return to idle.
    pub fn finish(&mut self, ticket: SubmitTicket, accepted: bool) -> SubmitOutcome {
        if self.in_flight != Some(ticket.id) {
            tracing::warn!(id = ticket.id, "stale submit ticket");
            return SubmitOutcome::Stale;
        }
        self.in_flight = None;
        self.phase = SubmitPhase::Idle;
        if accepted {
            let message = self.mode.success_message();
            let banner = self.feedback.show_success(message.clone());
            tracing::info!(id = ticket.id, mode = %self.mode, "question submitted");
            SubmitOutcome::Accepted { message, banner }
        } else {
            tracing::warn!(id = ticket.id, mode = %self.mode, "submit handler declined question");
            SubmitOutcome::Declined
        }
    }

    /// Ticket for the error banner currently shown, if any.
    pub fn error_ticket(&self) -> Option<BannerTicket> {
        self.feedback.ticket(BannerKind::Error)
    }

    /// Clear the banner a timer was scheduled for, if it is still current.
    pub fn expire_banner(&mut self, ticket: BannerTicket) -> bool {
        self.feedback.expire(ticket)
    }

}

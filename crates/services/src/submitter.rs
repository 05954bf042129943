use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use question_core::Question;

/// External handler that receives a finished draft (or filter) and reports
/// whether it was taken.
#[async_trait]
pub trait QuestionSubmitter: Send + Sync {
    async fn submit(&self, question: &Question) -> bool;
}

/// Keeps every submitted question in memory.
#[derive(Debug)]
pub struct InMemorySubmitter {
    accept: AtomicBool,
    submitted: Mutex<Vec<Question>>,
}

impl Default for InMemorySubmitter {
    fn default() -> Self {
        Self::accepting()
    }
}

impl InMemorySubmitter {
    #[must_use]
    pub fn accepting() -> Self {
        Self {
            accept: AtomicBool::new(true),
            submitted: Mutex::new(Vec::new()),
        }
    }

    /// Records submissions but reports each one as not taken.
    #[must_use]
    pub fn declining() -> Self {
        let submitter = Self::accepting();
        submitter.set_accepting(false);
        submitter
    }

    pub fn set_accepting(&self, accept: bool) {
        self.accept.store(accept, Ordering::Release);
    }

    #[must_use]
    pub fn submitted(&self) -> Vec<Question> {
        self.submitted
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl QuestionSubmitter for InMemorySubmitter {
    async fn submit(&self, question: &Question) -> bool {
        let Ok(mut submitted) = self.submitted.lock() else {
            tracing::error!("in-memory submitter lock poisoned");
            return false;
        };
        submitted.push(question.clone());
        let accepted = self.accept.load(Ordering::Acquire);
        tracing::debug!(count = submitted.len(), accepted, "question recorded");
        accepted
    }
}

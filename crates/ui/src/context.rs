use std::sync::Arc;

use question_core::{CategoryMap, Question};
use services::{EditorConfig, EditorMode, QuestionSubmitter};

pub trait UiApp: Send + Sync {
    fn categories(&self) -> CategoryMap;
    fn mode(&self) -> EditorMode;
    fn editor_config(&self) -> EditorConfig;
    fn submitter(&self) -> Arc<dyn QuestionSubmitter>;

    /// The record being edited, if any.
    fn initial_question(&self) -> Option<Question> {
        None
    }
}

#[derive(Clone)]
pub struct AppContext {
    categories: CategoryMap,
    mode: EditorMode,
    editor_config: EditorConfig,
    initial_question: Option<Question>,
    submitter: Arc<dyn QuestionSubmitter>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            categories: app.categories(),
            mode: app.mode(),
            editor_config: app.editor_config(),
            initial_question: app.initial_question(),
            submitter: app.submitter(),
        }
    }

    #[must_use]
    pub fn categories(&self) -> &CategoryMap {
        &self.categories
    }

    #[must_use]
    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    #[must_use]
    pub fn editor_config(&self) -> EditorConfig {
        self.editor_config
    }

    /// The draft the form starts from: the configured record or a blank one.
    #[must_use]
    pub fn starting_draft(&self) -> Question {
        self.initial_question.clone().unwrap_or_default()
    }

    #[must_use]
    pub fn submitter(&self) -> Arc<dyn QuestionSubmitter> {
        Arc::clone(&self.submitter)
    }
}

/// Snapshot the launch settings of `app` for `use_context`.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

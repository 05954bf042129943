use serde::{Deserialize, Serialize};

use super::options::{ClassLevel, Level, QuestionType};

/// One exercise reference: where it lives in a book and how it is tagged.
///
/// Edits never mutate a `Question` in place; see [`crate::edit`] for the
/// functions that build the next record from the current one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Question {
    pub book_name: String,
    pub chapter: String,
    pub exercise: String,
    pub question_number: String,
    pub level: Option<Level>,
    pub question_type: Option<QuestionType>,
    pub class: Option<ClassLevel>,
    pub category: String,
    /// Ordered slots; an empty string is an unselected slot.
    pub subcategory: Vec<String>,
}

impl Default for Question {
    /// The blank draft: no text, nothing selected, one empty subcategory slot.
    fn default() -> Self {
        Self {
            book_name: String::new(),
            chapter: String::new(),
            exercise: String::new(),
            question_number: String::new(),
            level: None,
            question_type: None,
            class: None,
            category: String::new(),
            subcategory: vec![String::new()],
        }
    }
}

impl Question {
    #[must_use]
    pub fn text(&self, field: QuestionField) -> &str {
        match field {
            QuestionField::BookName => &self.book_name,
            QuestionField::Chapter => &self.chapter,
            QuestionField::Exercise => &self.exercise,
            QuestionField::QuestionNumber => &self.question_number,
        }
    }

    pub(crate) fn text_mut(&mut self, field: QuestionField) -> &mut String {
        match field {
            QuestionField::BookName => &mut self.book_name,
            QuestionField::Chapter => &mut self.chapter,
            QuestionField::Exercise => &mut self.exercise,
            QuestionField::QuestionNumber => &mut self.question_number,
        }
    }

    /// Subcategory slots that hold a selection.
    pub fn selected_subcategories(&self) -> impl Iterator<Item = &str> {
        self.subcategory
            .iter()
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }
}

/// Free-text fields of a [`Question`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionField {
    BookName,
    Chapter,
    Exercise,
    QuestionNumber,
}

impl QuestionField {
    pub const ALL: [QuestionField; 4] = [
        QuestionField::BookName,
        QuestionField::Chapter,
        QuestionField::Exercise,
        QuestionField::QuestionNumber,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            QuestionField::BookName => "Book Name",
            QuestionField::Chapter => "Chapter",
            QuestionField::Exercise => "Exercise",
            QuestionField::QuestionNumber => "Question Number",
        }
    }
}

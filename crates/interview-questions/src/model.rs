/// Wire model for the interview question bank.
///
/// The document is an ordered array of `{ category, questions: [...] }`
/// blocks. A question's display name is the question text itself, the model
/// answer is its description, and vocabulary hints become note lines on the
/// card. Questions carry no external links.
use serde::Deserialize;

use catalog_common::catalog::{CatalogDocument, CategoryGroup, Entry};

#[derive(Debug, Clone, Deserialize)]
pub struct QuestionGroup {
    pub category: String,
    #[serde(default)]
    pub questions: Vec<QuestionRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuestionRecord {
    pub question: String,
    #[serde(default)]
    pub model_answer: String,
    #[serde(default)]
    pub vocabulary_hints: Vec<VocabularyHint>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VocabularyHint {
    pub word: String,
    #[serde(default)]
    pub meaning: String,
    #[serde(default)]
    pub example: Option<String>,
}

impl VocabularyHint {
    /// One display line per hint: `word: meaning ("example")`.
    fn display_line(&self) -> String {
        match &self.example {
            Some(example) => format!("{}: {} (\"{}\")", self.word, self.meaning, example),
            None => format!("{}: {}", self.word, self.meaning),
        }
    }
}

/// Normalize the wire document, preserving group and question order.
pub fn to_document(groups: Vec<QuestionGroup>) -> CatalogDocument {
    CatalogDocument::from_groups(
        groups
            .into_iter()
            .map(|group| CategoryGroup {
                label: group.category,
                entries: group
                    .questions
                    .into_iter()
                    .map(|question| Entry {
                        name: question.question,
                        description: question.model_answer,
                        link: None,
                        notes: question
                            .vocabulary_hints
                            .iter()
                            .map(VocabularyHint::display_line)
                            .collect(),
                    })
                    .collect(),
            })
            .collect(),
    )
}

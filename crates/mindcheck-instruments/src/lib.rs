//! mindcheck-instruments
//!
//! Screening questionnaire definitions. Pure data, no I/O.
//! Defines the items, answer range, and severity cutoffs for each
//! supported questionnaire, plus the quick-screen scorers.

pub mod error;
pub mod instruments;
pub mod scoring;

use mindcheck_core::models::assessment::AssessmentKind;
use mindcheck_core::models::severity::Severity;

use error::InstrumentError;
use scoring::{ITEM_RANGE, QuestionnaireScore, ScoreRange, SeverityBand, ValidationError};

/// Trait implemented by each Likert-style screening questionnaire.
pub trait Questionnaire: Send + Sync {
    /// Unique identifier (e.g., "phq9").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "PHQ-9").
    fn name(&self) -> &str;

    fn kind(&self) -> AssessmentKind;

    /// Item prompts, in administration order.
    fn items(&self) -> &[&'static str];

    /// Valid range for a single answer.
    fn answer_range(&self) -> ScoreRange {
        ITEM_RANGE
    }

    /// Severity cutoffs as inclusive upper bounds, ascending.
    fn bands(&self) -> &[SeverityBand];

    /// Severity for totals above the last band.
    fn ceiling(&self) -> Severity {
        Severity::Severe
    }

    /// Map a total score to its severity bucket.
    fn classify(&self, total: u32) -> Severity {
        self.bands()
            .iter()
            .find(|band| total <= band.max_total)
            .map(|band| band.severity)
            .unwrap_or_else(|| self.ceiling())
    }

    /// Sum the answers and classify the total. Unanswered items count as 0.
    fn score(&self, answers: &[Option<u8>]) -> QuestionnaireScore {
        let total = answers
            .iter()
            .map(|a| u32::from(a.unwrap_or(0)))
            .sum();
        QuestionnaireScore {
            total,
            severity: self.classify(total),
        }
    }

    /// Check answer count and per-item range. Scoring never depends on this.
    fn validate_answers(&self, answers: &[Option<u8>]) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        let expected = self.items().len();
        let range = self.answer_range();

        if answers.len() != expected {
            errors.push(ValidationError {
                item: None,
                value: None,
                expected_range: range,
                message: format!(
                    "{}: expected {expected} answers, got {}",
                    self.name(),
                    answers.len()
                ),
            });
        }

        for (index, answer) in answers.iter().enumerate() {
            match answer {
                None => errors.push(ValidationError {
                    item: Some(index + 1),
                    value: None,
                    expected_range: range,
                    message: format!("{}: item {} is unanswered", self.name(), index + 1),
                }),
                Some(value) if !range.contains(*value) => errors.push(ValidationError {
                    item: Some(index + 1),
                    value: Some(*value),
                    expected_range: range,
                    message: format!(
                        "{}: item {} answer {} is outside range [{}, {}]",
                        self.name(),
                        index + 1,
                        value,
                        range.min,
                        range.max,
                    ),
                }),
                Some(_) => {}
            }
        }
        errors
    }

    /// Format answers as structured text for inclusion in an assistant prompt.
    fn to_structured_input(&self, answers: &[Option<u8>]) -> String {
        let score = self.score(answers);
        let mut output = format!("## {}\n\n", self.name());
        for (index, item) in self.items().iter().enumerate() {
            match answers.get(index).copied().flatten() {
                Some(value) => output.push_str(&format!(
                    "- {item}: {value} ({})\n",
                    scoring::answer_label(value)
                )),
                None => output.push_str(&format!("- {item}: unanswered\n")),
            }
        }
        output.push_str(&format!(
            "\nTotal: {} ({})\n",
            score.total,
            score.severity.label()
        ));
        output
    }
}

/// Return all registered questionnaires.
pub fn all_questionnaires() -> Vec<Box<dyn Questionnaire>> {
    vec![
        Box::new(instruments::phq9::Phq9),
        Box::new(instruments::gad7::Gad7),
    ]
}

/// Look up a questionnaire by ID.
pub fn get_questionnaire(id: &str) -> Option<Box<dyn Questionnaire>> {
    all_questionnaires().into_iter().find(|q| q.id() == id)
}

/// Look up a questionnaire by ID, failing on unknown IDs.
pub fn require_questionnaire(id: &str) -> Result<Box<dyn Questionnaire>, InstrumentError> {
    get_questionnaire(id).ok_or_else(|| InstrumentError::UnknownQuestionnaire(id.to_string()))
}

/// Score PHQ-9 answers. Missing items count as 0.
pub fn score_phq9<A: Copy + Into<Option<u8>>>(answers: &[A]) -> QuestionnaireScore {
    instruments::phq9::Phq9.score(&collect_answers(answers))
}

/// Score GAD-7 answers. Missing items count as 0.
pub fn score_gad7<A: Copy + Into<Option<u8>>>(answers: &[A]) -> QuestionnaireScore {
    instruments::gad7::Gad7.score(&collect_answers(answers))
}

fn collect_answers<A: Copy + Into<Option<u8>>>(answers: &[A]) -> Vec<Option<u8>> {
    answers.iter().map(|&a| a.into()).collect()
}

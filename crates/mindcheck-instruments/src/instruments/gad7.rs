use mindcheck_core::models::assessment::AssessmentKind;
use mindcheck_core::models::severity::Severity;

use crate::Questionnaire;
use crate::scoring::SeverityBand;

/// GAD-7: Generalized Anxiety Disorder scale.
/// 7 items, each 0–3. Total 0–21. No moderately-severe bucket.
pub struct Gad7;

const ITEMS: [&str; 7] = [
    "Feeling nervous, anxious, or on edge",
    "Not being able to stop or control worrying",
    "Worrying too much about different things",
    "Trouble relaxing",
    "Being so restless that it is hard to sit still",
    "Becoming easily annoyed or irritable",
    "Feeling afraid, as if something awful might happen",
];

const BANDS: [SeverityBand; 3] = [
    SeverityBand { max_total: 4, severity: Severity::Minimal },
    SeverityBand { max_total: 9, severity: Severity::Mild },
    SeverityBand { max_total: 14, severity: Severity::Moderate },
];

impl Questionnaire for Gad7 {
    fn id(&self) -> &str {
        "gad7"
    }

    fn name(&self) -> &str {
        "GAD-7"
    }

    fn kind(&self) -> AssessmentKind {
        AssessmentKind::Gad7
    }

    fn items(&self) -> &[&'static str] {
        &ITEMS
    }

    fn bands(&self) -> &[SeverityBand] {
        &BANDS
    }
}

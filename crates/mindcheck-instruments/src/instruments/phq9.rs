use mindcheck_core::models::assessment::AssessmentKind;
use mindcheck_core::models::severity::Severity;

use crate::Questionnaire;
use crate::scoring::SeverityBand;

/// PHQ-9: Patient Health Questionnaire, depression module.
/// 9 items, each 0–3. Total 0–27.
pub struct Phq9;

const ITEMS: [&str; 9] = [
    "Little interest or pleasure in doing things",
    "Feeling down, depressed, or hopeless",
    "Trouble falling or staying asleep, or sleeping too much",
    "Feeling tired or having little energy",
    "Poor appetite or overeating",
    "Feeling bad about yourself — or that you are a failure",
    "Trouble concentrating on things",
    "Moving or speaking slowly; or fidgety/restless",
    "Thoughts that you would be better off dead or hurting yourself",
];

const BANDS: [SeverityBand; 4] = [
    SeverityBand { max_total: 4, severity: Severity::Minimal },
    SeverityBand { max_total: 9, severity: Severity::Mild },
    SeverityBand { max_total: 14, severity: Severity::Moderate },
    SeverityBand { max_total: 19, severity: Severity::ModeratelySevere },
];

impl Questionnaire for Phq9 {
    fn id(&self) -> &str {
        "phq9"
    }

    fn name(&self) -> &str {
        "PHQ-9"
    }

    fn kind(&self) -> AssessmentKind {
        AssessmentKind::Phq9
    }

    fn items(&self) -> &[&'static str] {
        &ITEMS
    }

    fn bands(&self) -> &[SeverityBand] {
        &BANDS
    }
}

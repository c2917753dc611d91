//! Suicide Risk Screen: ten yes/no risk-factor items.
//!
//! Only the raw count lives here. Turning a count into a risk level and a
//! care path is the triage engine's job, so the thresholds sit next to the
//! ideation override they must stay consistent with.

pub const ID: &str = "suicide_risk";

pub const NAME: &str = "Suicide Risk Screen";

pub const ITEMS: [&str; 10] = [
    "Have you had thoughts of harming yourself?",
    "Do you have a plan to harm yourself?",
    "Do you intend to act on these thoughts?",
    "Do you have access to means to harm yourself?",
    "Have you made any preparations?",
    "Do you feel hopeless about the future?",
    "Do you feel like a burden to others?",
    "Have you experienced recent losses or trauma?",
    "Do you have a support system?",
    "Have you attempted suicide before?",
];

/// Number of "yes" answers. Missing answers count as "no".
pub fn count_risk_factors(answers: &[bool]) -> u32 {
    answers.iter().filter(|&&yes| yes).count() as u32
}

/// Format answers as structured text for inclusion in an assistant prompt.
pub fn to_structured_input(answers: &[bool]) -> String {
    let mut output = format!("## {NAME}\n\n");
    for (index, item) in ITEMS.iter().enumerate() {
        let answer = if answers.get(index).copied().unwrap_or(false) {
            "yes"
        } else {
            "no"
        };
        output.push_str(&format!("- {item} {answer}\n"));
    }
    output.push_str(&format!(
        "\nRisk factors present: {}\n",
        count_risk_factors(answers)
    ));
    output
}

//! Text rendering for command output.

use mindcheck_assistant::progress::ProgressInsights;
use mindcheck_core::models::assessment::AssessmentResult;
use mindcheck_core::models::checkin::{WeeklyCheckin, average_mood};
use mindcheck_core::models::severity::Route;

pub struct CrisisResource {
    pub name: &'static str,
    pub contact: &'static str,
    pub description: &'static str,
}

pub const CRISIS_RESOURCES: [CrisisResource; 3] = [
    CrisisResource {
        name: "988 Suicide & Crisis Lifeline",
        contact: "call or text 988",
        description: "24/7 free and confidential support",
    },
    CrisisResource {
        name: "Emergency Services",
        contact: "call 911",
        description: "immediate life-threatening situations",
    },
    CrisisResource {
        name: "Crisis Text Line",
        contact: "text HOME to 741741",
        description: "crisis support by text",
    },
];

pub fn crisis_block() -> String {
    let mut out = String::from("!! If you are in danger or thinking about harming yourself, get help now:\n");
    for resource in &CRISIS_RESOURCES {
        out.push_str(&format!(
            "   {}: {} ({})\n",
            resource.name, resource.contact, resource.description
        ));
    }
    out
}

fn route_description(route: Route) -> &'static str {
    match route {
        Route::Stable => "Keep monitoring your mood with regular check-ins.",
        Route::AiSupport => "Supportive chat is available: `mindcheck chat <message>`.",
        Route::HumanTherapy => "We recommend speaking with a mental health professional.",
    }
}

pub fn format_result(result: &AssessmentResult, emergency: bool) -> String {
    let mut out = String::new();
    if emergency {
        out.push_str(&crisis_block());
        out.push('\n');
    }

    out.push_str(&format!("Assessment {} ({})\n", result.id, result.kind));
    out.push_str(&format!("Taken:      {}\n", result.timestamp));
    out.push_str(&format!("Severity:   {}\n", result.severity.label()));
    out.push_str(&format!("Route:      {}\n", result.route_to));
    if let Some(total) = result.scores.phq9 {
        out.push_str(&format!("PHQ-9:      {total}\n"));
    }
    if let Some(total) = result.scores.gad7 {
        out.push_str(&format!("GAD-7:      {total}\n"));
    }
    if let Some(count) = result.scores.suicide_risk {
        out.push_str(&format!("Risk factors: {count}\n"));
    }

    if !result.symptoms.is_empty() {
        out.push_str("\nSymptoms:\n");
        for symptom in &result.symptoms {
            out.push_str(&format!("  - {symptom}\n"));
        }
    }

    out.push_str("\nRecommendations:\n");
    for rec in &result.recommendations {
        out.push_str(&format!("  - {rec}\n"));
    }

    out.push_str(&format!("\n{}", route_description(result.route_to)));
    out
}

pub fn format_history(history: &[AssessmentResult]) -> String {
    if history.is_empty() {
        return "No assessments yet.".to_string();
    }
    let mut out = String::new();
    for result in history {
        out.push_str(&format!(
            "{}  {:<14} {:<18} {}\n",
            result.timestamp.strftime("%Y-%m-%d %H:%M"),
            result.kind.as_str(),
            result.severity.label(),
            result.route_to
        ));
    }
    out.trim_end().to_string()
}

pub fn format_progress(checkins: &[WeeklyCheckin], insights: Option<&ProgressInsights>) -> String {
    if checkins.is_empty() {
        return "No check-ins yet. Log one with `mindcheck checkin --mood N`.".to_string();
    }

    let mut out = String::new();
    if let Some(avg) = average_mood(checkins) {
        out.push_str(&format!(
            "Average mood: {avg:.1}/10 over {} check-ins\n\n",
            checkins.len()
        ));
    }
    for checkin in checkins {
        out.push_str(&format!(
            "{}  {:>2}/10 {:<9}",
            checkin.date.strftime("%Y-%m-%d"),
            checkin.mood,
            checkin.mood_label().as_str()
        ));
        if !checkin.symptoms.is_empty() {
            out.push_str(&format!(" symptoms: {}", checkin.symptoms.join(", ")));
        }
        out.push('\n');
    }

    if let Some(insights) = insights {
        out.push_str("\nInsights:\n");
        for line in &insights.insights {
            out.push_str(&format!("  - {line}\n"));
        }
        out.push_str("Recommendations:\n");
        for line in &insights.recommendations {
            out.push_str(&format!("  - {line}\n"));
        }
        if insights.reassessment_needed {
            out.push_str("A new assessment is recommended.\n");
        }
    }

    out.trim_end().to_string()
}

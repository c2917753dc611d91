//! Symptom-analysis enrichment.
//!
//! A generator may offer its own reading of an evaluation. The reply is
//! parsed leniently and merged into the engine's result, but it can only
//! ever raise severity or level of care. The ideation override is applied
//! again after every merge.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use mindcheck_core::models::assessment::AssessmentResult;
use mindcheck_core::models::evaluation::{SuicidalIdeation, SymptomEvaluation};
use mindcheck_core::models::severity::{Route, Severity};
use mindcheck_triage::aggregate::{composite_score, symptoms};
use mindcheck_triage::classify::{determine_routing, determine_severity};
use mindcheck_triage::normalize::NormalizedEvaluation;
use mindcheck_triage::recommend::generate_recommendations;
use mindcheck_triage::safety::{RiskSignal, safety_override};

use crate::error::AssistantError;
use crate::generator::TextGenerator;
use crate::prompts::{SYMPTOM_ANALYSIS, extract_json_object, render_prompt};

/// A structured reading of a symptom evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomAnalysis {
    pub severity: Severity,
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    pub route_to: Route,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisSource {
    Model,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisOutcome {
    pub analysis: SymptomAnalysis,
    pub source: AnalysisSource,
}

#[derive(Serialize)]
struct AnalysisPromptFields {
    sleep_quality: u32,
    sleep_duration: u32,
    appetite_changes: u32,
    appetite_motivation: u32,
    energy_level: u32,
    energy_fatigue: u32,
    energy_motivation: u32,
    social_functioning: u32,
    social_relationships: u32,
    social_isolation: u32,
    behavior_social_withdrawal: u32,
    behavior_irritability: u32,
    thoughts_self_image: u32,
    coping_effectiveness: u32,
    ideation_thoughts: bool,
    ideation_plan: bool,
    ideation_intent: bool,
}

impl From<&NormalizedEvaluation> for AnalysisPromptFields {
    fn from(n: &NormalizedEvaluation) -> Self {
        Self {
            sleep_quality: n.sleep_quality,
            sleep_duration: n.sleep_duration,
            appetite_changes: n.appetite_changes,
            appetite_motivation: n.appetite_motivation,
            energy_level: n.energy_level,
            energy_fatigue: n.energy_fatigue,
            energy_motivation: n.energy_motivation,
            social_functioning: n.social_functioning,
            social_relationships: n.social_relationships,
            social_isolation: n.social_isolation,
            behavior_social_withdrawal: n.behavior_social_withdrawal,
            behavior_irritability: n.behavior_irritability,
            thoughts_self_image: n.thoughts_self_image,
            coping_effectiveness: n.coping_effectiveness,
            ideation_thoughts: n.suicidal_ideation.thoughts,
            ideation_plan: n.suicidal_ideation.plan,
            ideation_intent: n.suicidal_ideation.intent,
        }
    }
}

/// Render the analysis prompt for an evaluation.
pub fn analysis_prompt(evaluation: &SymptomEvaluation) -> Result<String, AssistantError> {
    let normalized = NormalizedEvaluation::from(evaluation);
    render_prompt(
        "symptom_analysis",
        SYMPTOM_ANALYSIS,
        &AnalysisPromptFields::from(&normalized),
    )
}

/// Parse a model reply into an analysis.
///
/// Prose around the JSON object is ignored.
pub fn parse_analysis(reply: &str) -> Result<SymptomAnalysis, AssistantError> {
    let json = extract_json_object(reply)
        .ok_or_else(|| AssistantError::SchemaViolation("no JSON object in reply".to_string()))?;
    serde_json::from_str(json).map_err(|e| AssistantError::SchemaViolation(e.to_string()))
}

/// The engine's own reading, used whenever no model reply is usable.
pub fn fallback_analysis(evaluation: &SymptomEvaluation) -> SymptomAnalysis {
    let normalized = NormalizedEvaluation::from(evaluation);
    let ideation = normalized.suicidal_ideation;
    let severity = determine_severity(composite_score(&normalized), &ideation);
    let symptoms = symptoms(&normalized);
    SymptomAnalysis {
        severity,
        recommendations: generate_recommendations(severity, &symptoms),
        symptoms,
        route_to: determine_routing(severity, &ideation),
    }
}

/// Analyze an evaluation with the generator if one is given, otherwise (or
/// on any failure) with the engine.
pub fn analyze_symptoms(
    generator: Option<&dyn TextGenerator>,
    evaluation: &SymptomEvaluation,
) -> AnalysisOutcome {
    let Some(generator) = generator else {
        debug!("no generator configured, using engine analysis");
        return fallback(evaluation);
    };

    match model_analysis(generator, evaluation) {
        Ok(mut analysis) => {
            analysis.route_to = floor_route(
                analysis.severity,
                analysis.route_to,
                &evaluation.thoughts.suicidal_ideation,
            );
            enforce_ideation_override(
                &mut analysis.severity,
                &mut analysis.route_to,
                &evaluation.thoughts.suicidal_ideation,
            );
            info!(severity = %analysis.severity, route = %analysis.route_to, "model analysis accepted");
            AnalysisOutcome {
                analysis,
                source: AnalysisSource::Model,
            }
        }
        Err(e) => {
            warn!(error = %e, "model analysis unusable, using engine analysis");
            fallback(evaluation)
        }
    }
}

fn model_analysis(
    generator: &dyn TextGenerator,
    evaluation: &SymptomEvaluation,
) -> Result<SymptomAnalysis, AssistantError> {
    let prompt = analysis_prompt(evaluation)?;
    let reply = generator.generate(&prompt)?;
    parse_analysis(&reply)
}

fn fallback(evaluation: &SymptomEvaluation) -> AnalysisOutcome {
    AnalysisOutcome {
        analysis: fallback_analysis(evaluation),
        source: AnalysisSource::Fallback,
    }
}

/// Merge an analysis into an engine result.
///
/// Severity and route take the higher of the two, and the route is never
/// below what the merged severity requires. Symptoms and
/// recommendations the analysis adds are appended after the engine's own,
/// without duplicates. When severity rises the engine recommendations are
/// regenerated for the new tier.
pub fn apply_analysis(
    result: &AssessmentResult,
    analysis: &SymptomAnalysis,
    ideation: &SuicidalIdeation,
) -> AssessmentResult {
    let mut merged = result.clone();

    merged.severity = result.severity.max(analysis.severity);
    merged.route_to = floor_route(
        merged.severity,
        result.route_to.max(analysis.route_to),
        ideation,
    );
    enforce_ideation_override(&mut merged.severity, &mut merged.route_to, ideation);

    append_unique(&mut merged.symptoms, &analysis.symptoms);

    if merged.severity != result.severity {
        merged.recommendations = generate_recommendations(merged.severity, &merged.symptoms);
    }
    append_unique(&mut merged.recommendations, &analysis.recommendations);

    if merged.severity != result.severity || merged.route_to != result.route_to {
        info!(
            assessment_id = %result.id,
            from_severity = %result.severity,
            to_severity = %merged.severity,
            from_route = %result.route_to,
            to_route = %merged.route_to,
            "analysis raised assessment"
        );
    }

    merged
}

/// Raise `route` to at least the route `severity` maps to.
fn floor_route(severity: Severity, route: Route, ideation: &SuicidalIdeation) -> Route {
    route.max(determine_routing(severity, ideation))
}

fn enforce_ideation_override(severity: &mut Severity, route: &mut Route, ideation: &SuicidalIdeation) {
    if let Some(decision) = safety_override(RiskSignal::Ideation(*ideation)) {
        *severity = decision.severity;
        *route = decision.path.route();
    }
}

fn append_unique(target: &mut Vec<String>, extra: &[String]) {
    for item in extra {
        let item = item.trim();
        if !item.is_empty() && !target.iter().any(|t| t == item) {
            target.push(item.to_string());
        }
    }
}

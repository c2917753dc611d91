use mindcheck_core::models::evaluation::{SuicidalIdeation, SymptomEvaluation};

/// A symptom evaluation with every default resolved.
///
/// Built once at the entry of the aggregator so downstream scoring can
/// treat every field as present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizedEvaluation {
    pub sleep_quality: u32,
    pub sleep_duration: u32,
    pub appetite_changes: u32,
    pub appetite_motivation: u32,
    pub energy_level: u32,
    pub energy_fatigue: u32,
    pub energy_motivation: u32,
    pub social_functioning: u32,
    pub social_relationships: u32,
    pub social_isolation: u32,
    pub behavior_social_withdrawal: u32,
    pub behavior_irritability: u32,
    pub thoughts_self_image: u32,
    pub coping_effectiveness: u32,
    pub suicidal_ideation: SuicidalIdeation,
}

impl NormalizedEvaluation {
    pub fn from_evaluation(evaluation: &SymptomEvaluation) -> Self {
        Self {
            sleep_quality: evaluation.sleep_patterns.quality.unwrap_or(0),
            sleep_duration: evaluation.sleep_patterns.duration.unwrap_or(0),
            appetite_changes: evaluation.appetite.changes.unwrap_or(0),
            appetite_motivation: evaluation.appetite.motivation.unwrap_or(0),
            energy_level: evaluation.energy.level.unwrap_or(0),
            energy_fatigue: evaluation.energy.fatigue.unwrap_or(0),
            energy_motivation: evaluation.energy.motivation.unwrap_or(0),
            social_functioning: evaluation.social.functioning.unwrap_or(0),
            social_relationships: evaluation.social.relationships.unwrap_or(0),
            social_isolation: evaluation.social.isolation.unwrap_or(0),
            behavior_social_withdrawal: evaluation.behavior.social_withdrawal.unwrap_or(0),
            behavior_irritability: evaluation.behavior.irritability.unwrap_or(0),
            thoughts_self_image: evaluation.thoughts.self_image.unwrap_or(0),
            coping_effectiveness: evaluation.coping.effectiveness.unwrap_or(0),
            suicidal_ideation: evaluation.thoughts.suicidal_ideation,
        }
    }

    /// The fourteen composite fields, in aggregation order.
    pub fn composite_fields(&self) -> [u32; 14] {
        [
            self.sleep_quality,
            self.sleep_duration,
            self.appetite_changes,
            self.appetite_motivation,
            self.energy_level,
            self.energy_fatigue,
            self.energy_motivation,
            self.social_functioning,
            self.social_relationships,
            self.social_isolation,
            self.behavior_social_withdrawal,
            self.behavior_irritability,
            self.thoughts_self_image,
            self.coping_effectiveness,
        ]
    }
}

impl From<&SymptomEvaluation> for NormalizedEvaluation {
    fn from(evaluation: &SymptomEvaluation) -> Self {
        Self::from_evaluation(evaluation)
    }
}

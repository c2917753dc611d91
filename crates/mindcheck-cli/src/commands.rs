//! Command dispatch. Each command returns the text to print, so the binary
//! only decides where it goes.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, warn};

use mindcheck_assistant::analysis::{AnalysisSource, analyze_symptoms, apply_analysis};
use mindcheck_assistant::chat::therapeutic_reply;
use mindcheck_assistant::generator::{OllamaGenerator, TextGenerator};
use mindcheck_assistant::progress::progress_insights;
use mindcheck_core::models::assessment::{AssessmentKind, AssessmentResult};
use mindcheck_core::models::chat_history::{ChatMessage, ChatRole, ChatSession, SessionKind};
use mindcheck_core::models::checkin::{WeeklyCheckin, average_mood};
use mindcheck_core::models::evaluation::SymptomEvaluation;
use mindcheck_core::models::severity::{Route, Severity};
use mindcheck_instruments::instruments::suicide_risk;
use mindcheck_instruments::scoring::{parse_answer, parse_yes_no};
use mindcheck_instruments::{Questionnaire, all_questionnaires, require_questionnaire};
use mindcheck_storage::assessments::AssessmentStore;
use mindcheck_storage::store::KeyValueStore;
use mindcheck_triage::quick_screen::quick_screen_result;
use mindcheck_triage::result::create_assessment_result;
use mindcheck_triage::safety::{RiskSignal, safety_override};
use mindcheck_triage::suicide_risk::suicide_risk_result;

use crate::cli::{Command, ConfigCommand};
use crate::config::{MindcheckConfig, load_config, save_config};
use crate::output;

pub struct App<S> {
    pub store: AssessmentStore<S>,
    pub generator: Option<Box<dyn TextGenerator>>,
    pub config: MindcheckConfig,
    pub config_path: PathBuf,
    pub json: bool,
}

/// The generator described by `config`, if the assistant is enabled and
/// its server answers. Otherwise every assistant feature uses its fallback.
pub fn build_generator(config: &MindcheckConfig) -> Option<Box<dyn TextGenerator>> {
    if !config.assistant.enabled {
        return None;
    }
    let generator = OllamaGenerator::new(
        config.assistant.base_url.clone(),
        config.assistant.model.clone(),
        config.assistant.timeout(),
    );
    if !generator.is_available() {
        warn!(
            base_url = %config.assistant.base_url,
            "assistant enabled but unreachable, using local fallbacks"
        );
        return None;
    }
    info!(
        base_url = %config.assistant.base_url,
        model = generator.model(),
        "assistant enabled"
    );
    Some(Box::new(generator))
}

#[derive(Serialize)]
struct AssessmentOutput<'a> {
    result: &'a AssessmentResult,
    emergency: bool,
}

#[derive(Serialize)]
struct ChatOutput<'a> {
    reply: &'a str,
    crisis: bool,
    scripted: bool,
}

#[derive(Serialize)]
struct ProgressOutput<'a, I: Serialize> {
    checkins: &'a [WeeklyCheckin],
    average_mood: Option<f64>,
    insights: Option<I>,
}

#[derive(Serialize)]
struct QuestionnaireInfo {
    id: String,
    name: String,
    items: Vec<String>,
}

impl<S: KeyValueStore> App<S> {
    pub fn run(&self, command: Command) -> eyre::Result<String> {
        match command {
            Command::Phq9 { answers } => self.quick_screen("phq9", &answers),
            Command::Gad7 { answers } => self.quick_screen("gad7", &answers),
            Command::SuicideRisk { answers } => self.suicide_risk(&answers),
            Command::Evaluate {
                file,
                phq9,
                gad7,
                enrich,
            } => self.evaluate(&file, phq9, gad7, enrich),
            Command::Current => self.current(),
            Command::History => self.history(),
            Command::Checkin {
                mood,
                symptoms,
                coping_strategies,
                notes,
            } => self.checkin(mood, symptoms, coping_strategies, notes),
            Command::Progress { insights } => self.progress(insights),
            Command::Chat { message } => self.chat(&message.join(" ")),
            Command::Questionnaires => self.questionnaires(),
            Command::Reset { yes } => self.reset(yes),
            Command::Config { command } => self.config(command),
        }
    }

    fn generator(&self) -> Option<&dyn TextGenerator> {
        self.generator.as_deref()
    }

    fn render<T: Serialize>(&self, value: &T, text: impl FnOnce() -> String) -> eyre::Result<String> {
        if self.json {
            Ok(serde_json::to_string_pretty(value)?)
        } else {
            Ok(text())
        }
    }

    fn render_assessment(&self, result: &AssessmentResult, emergency: bool) -> eyre::Result<String> {
        self.render(&AssessmentOutput { result, emergency }, || {
            output::format_result(result, emergency)
        })
    }

    fn quick_screen(&self, id: &str, tokens: &[String]) -> eyre::Result<String> {
        let questionnaire = require_questionnaire(id)?;
        let answers = tokens
            .iter()
            .map(|t| parse_answer(t))
            .collect::<Result<Vec<_>, _>>()?;
        check_answers(questionnaire.as_ref(), &answers)?;

        let result = quick_screen_result(questionnaire.as_ref(), &answers);
        self.store.save_answers(questionnaire.kind(), &answers)?;
        self.store.set_current_assessment(&result)?;

        self.render_assessment(&result, false)
    }

    fn suicide_risk(&self, tokens: &[String]) -> eyre::Result<String> {
        if tokens.len() != suicide_risk::ITEMS.len() {
            return Err(eyre::eyre!(
                "{}: expected {} answers, got {}",
                suicide_risk::NAME,
                suicide_risk::ITEMS.len(),
                tokens.len()
            ));
        }
        let answers = tokens
            .iter()
            .map(|t| parse_yes_no(t))
            .collect::<Result<Vec<_>, _>>()?;

        let outcome = suicide_risk_result(&answers);
        self.store.save_answers(AssessmentKind::SuicideRisk, &answers)?;
        self.store.set_current_assessment(&outcome.result)?;

        self.render_assessment(&outcome.result, outcome.is_emergency())
    }

    fn evaluate(
        &self,
        file: &Path,
        phq9: Option<u32>,
        gad7: Option<u32>,
        enrich: bool,
    ) -> eyre::Result<String> {
        let contents = std::fs::read_to_string(file)
            .map_err(|e| eyre::eyre!("failed to read {}: {e}", file.display()))?;
        let evaluation: SymptomEvaluation = serde_json::from_str(&contents)?;
        check_total("phq9", phq9)?;
        check_total("gad7", gad7)?;
        let ideation = evaluation.thoughts.suicidal_ideation;

        let mut result = create_assessment_result(&evaluation, phq9, gad7);
        if enrich {
            let outcome = analyze_symptoms(self.generator(), &evaluation);
            match outcome.source {
                AnalysisSource::Model => {
                    result = apply_analysis(&result, &outcome.analysis, &ideation);
                }
                AnalysisSource::Fallback => {
                    warn!("no model analysis available, keeping engine result");
                }
            }
        }

        self.store.save_evaluation(&evaluation)?;
        self.store.set_current_assessment(&result)?;

        self.render_assessment(&result, ideation.any())
    }

    fn current(&self) -> eyre::Result<String> {
        match self.store.current_assessment()? {
            Some(result) => {
                let emergency = self.stored_emergency(&result)?;
                self.render_assessment(&result, emergency)
            }
            None if self.json => Ok("null".to_string()),
            None => Ok("No assessment yet. Start with `mindcheck phq9`, `gad7`, or `evaluate`.".to_string()),
        }
    }

    /// Recover the emergency flag for a stored result. Suicide-risk results
    /// keep their risk-factor count; comprehensive results are paired with
    /// the evaluation saved alongside them.
    fn stored_emergency(&self, result: &AssessmentResult) -> eyre::Result<bool> {
        let signal = match result.kind {
            AssessmentKind::SuicideRisk => result.scores.suicide_risk.map(RiskSignal::RiskFactors),
            AssessmentKind::Comprehensive if result.severity == Severity::Severe => self
                .store
                .evaluation()?
                .map(|e| RiskSignal::Ideation(e.thoughts.suicidal_ideation)),
            _ => None,
        };
        Ok(signal
            .and_then(safety_override)
            .is_some_and(|decision| decision.path.is_emergency()))
    }

    fn history(&self) -> eyre::Result<String> {
        let history = self.store.history()?;
        self.render(&history, || output::format_history(&history))
    }

    fn checkin(
        &self,
        mood: u8,
        symptoms: Vec<String>,
        coping_strategies: Vec<String>,
        notes: String,
    ) -> eyre::Result<String> {
        if !(1..=10).contains(&mood) {
            return Err(eyre::eyre!("mood must be between 1 and 10, got {mood}"));
        }
        let checkin = WeeklyCheckin::new(mood, symptoms, coping_strategies, notes);
        self.store.add_checkin(&checkin)?;
        self.render(&checkin, || {
            format!(
                "Check-in saved: mood {}/10 ({}).",
                checkin.mood,
                checkin.mood_label().as_str()
            )
        })
    }

    fn progress(&self, with_insights: bool) -> eyre::Result<String> {
        let checkins = self.store.checkins()?;
        let insights = if with_insights {
            let symptoms = self
                .store
                .current_assessment()?
                .map(|r| r.symptoms)
                .unwrap_or_default();
            Some(progress_insights(self.generator(), &checkins, &symptoms))
        } else {
            None
        };

        let value = ProgressOutput {
            checkins: &checkins,
            average_mood: average_mood(&checkins),
            insights: insights.as_ref(),
        };
        self.render(&value, || output::format_progress(&checkins, insights.as_ref()))
    }

    fn chat(&self, message: &str) -> eyre::Result<String> {
        let message = message.trim();
        if message.is_empty() {
            return Err(eyre::eyre!("message is empty"));
        }
        let assessment = self.store.current_assessment()?.ok_or_else(|| {
            eyre::eyre!("no assessment yet; take one before starting a chat")
        })?;

        let session = self.open_session(&assessment)?;
        let reply = therapeutic_reply(self.generator(), message, &assessment, &session.messages);

        self.store
            .add_chat_message(ChatMessage::new(ChatRole::User, message))?;
        self.store
            .add_chat_message(ChatMessage::new(ChatRole::Assistant, reply.text.clone()))?;

        self.render(
            &ChatOutput {
                reply: &reply.text,
                crisis: reply.crisis,
                scripted: reply.scripted,
            },
            || reply.text.clone(),
        )
    }

    /// The open session for `assessment`, starting one if needed.
    fn open_session(&self, assessment: &AssessmentResult) -> eyre::Result<ChatSession> {
        if let Some(session) = self.store.session()?
            && session.is_open()
            && session.assessment_id == assessment.id
        {
            return Ok(session);
        }
        let kind = match assessment.route_to {
            Route::HumanTherapy => SessionKind::HumanTherapy,
            Route::AiSupport | Route::Stable => SessionKind::AiSupport,
        };
        Ok(self.store.start_session(kind, assessment.id)?)
    }

    fn questionnaires(&self) -> eyre::Result<String> {
        let mut list: Vec<QuestionnaireInfo> = all_questionnaires()
            .iter()
            .map(|q| QuestionnaireInfo {
                id: q.id().to_string(),
                name: q.name().to_string(),
                items: q.items().iter().map(|s| s.to_string()).collect(),
            })
            .collect();
        list.push(QuestionnaireInfo {
            id: suicide_risk::ID.to_string(),
            name: suicide_risk::NAME.to_string(),
            items: suicide_risk::ITEMS.iter().map(|s| s.to_string()).collect(),
        });

        self.render(&list, || {
            list.iter()
                .map(|q| format!("{:<13} {} ({} items)", q.id, q.name, q.items.len()))
                .collect::<Vec<_>>()
                .join("\n")
        })
    }

    fn reset(&self, yes: bool) -> eyre::Result<String> {
        if !yes {
            return Err(eyre::eyre!(
                "this deletes all assessments, check-ins, and chat history; rerun with --yes"
            ));
        }
        self.store.reset()?;
        Ok("All local data deleted.".to_string())
    }

    fn config(&self, command: ConfigCommand) -> eyre::Result<String> {
        match command {
            ConfigCommand::Show => {
                let json = serde_json::to_string_pretty(&self.config)?;
                if self.json {
                    Ok(json)
                } else {
                    Ok(format!("# {}\n{json}", self.config_path.display()))
                }
            }
            ConfigCommand::Init { assistant } => {
                if self.config_path.exists() {
                    return Err(eyre::eyre!(
                        "config already exists at {}",
                        self.config_path.display()
                    ));
                }
                let mut config = MindcheckConfig::default();
                config.assistant.enabled = assistant;
                save_config(&self.config_path, &config)?;
                let reloaded = load_config(&self.config_path)?;
                Ok(format!(
                    "Wrote {} (assistant {}).",
                    self.config_path.display(),
                    if reloaded.assistant.enabled { "enabled" } else { "disabled" }
                ))
            }
        }
    }
}

/// A questionnaire total passed on the command line must be reachable.
fn check_total(id: &str, total: Option<u32>) -> eyre::Result<()> {
    let Some(total) = total else {
        return Ok(());
    };
    let questionnaire = require_questionnaire(id)?;
    let items = questionnaire.items().len() as u32;
    let range = questionnaire.answer_range();
    let (min, max) = (items * u32::from(range.min), items * u32::from(range.max));
    if !(min..=max).contains(&total) {
        return Err(eyre::eyre!(
            "{} total {total} is outside range [{min}, {max}]",
            questionnaire.name()
        ));
    }
    Ok(())
}

/// Count and range problems are fatal. Skipped items are scored as 0.
fn check_answers(questionnaire: &dyn Questionnaire, answers: &[Option<u8>]) -> eyre::Result<()> {
    let (skipped, fatal): (Vec<_>, Vec<_>) = questionnaire
        .validate_answers(answers)
        .into_iter()
        .partition(|e| e.item.is_some() && e.value.is_none());

    if !fatal.is_empty() {
        let messages: Vec<String> = fatal.into_iter().map(|e| e.message).collect();
        return Err(eyre::eyre!(messages.join("; ")));
    }
    for e in skipped {
        warn!(questionnaire = questionnaire.id(), item = e.item, "{}", e.message);
    }
    Ok(())
}

use std::path::PathBuf;

use clap::Parser;
use mindcheck_assistant::chat::CRISIS_GUIDANCE;
use mindcheck_cli::cli::Cli;
use mindcheck_cli::commands::{App, build_generator};
use mindcheck_cli::config::MindcheckConfig;
use mindcheck_core::models::assessment::AssessmentKind;
use mindcheck_core::models::chat_history::SessionKind;
use mindcheck_core::models::severity::{Route, Severity};
use mindcheck_storage::assessments::AssessmentStore;
use mindcheck_storage::memory::MemoryStore;

fn app(json: bool) -> App<MemoryStore> {
    App {
        store: AssessmentStore::new(MemoryStore::new()),
        generator: None,
        config: MindcheckConfig::default(),
        config_path: PathBuf::from("/nonexistent/mindcheck/config.json"),
        json,
    }
}

fn run(app: &App<MemoryStore>, args: &[&str]) -> eyre::Result<String> {
    let cli = Cli::try_parse_from(std::iter::once("mindcheck").chain(args.iter().copied()))?;
    app.run(cli.command)
}

#[test]
fn phq9_scores_and_saves() {
    let app = app(false);
    let out = run(&app, &["phq9", "3", "3", "3", "3", "3", "3", "3", "3", "3"]).unwrap();
    assert!(out.contains("Severity:   severe"));
    assert!(out.contains("PHQ-9:      27"));

    let current = app.store.current_assessment().unwrap().unwrap();
    assert_eq!(current.kind, AssessmentKind::Phq9);
    assert_eq!(current.route_to, Route::HumanTherapy);

    let answers: Vec<Option<u8>> = app.store.answers(AssessmentKind::Phq9).unwrap().unwrap();
    assert_eq!(answers.len(), 9);
}

#[test]
fn gad7_moderate_routes_to_ai_support() {
    let app = app(true);
    let out = run(&app, &["gad7", "2", "2", "2", "2", "2", "2", "0"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["result"]["severity"], "moderate");
    assert_eq!(value["result"]["routeTo"], "ai_support");
    assert_eq!(value["emergency"], false);
}

#[test]
fn skipped_items_score_as_zero() {
    let app = app(false);
    run(&app, &["gad7", "3", "-", "3", "-", "3", "-", "3"]).unwrap();
    let current = app.store.current_assessment().unwrap().unwrap();
    assert_eq!(current.scores.gad7, Some(12));
}

#[test]
fn wrong_answer_count_is_rejected() {
    let app = app(false);
    assert!(run(&app, &["phq9", "1", "2"]).is_err());
    assert!(run(&app, &["gad7", "1", "2", "3", "4", "0", "0", "0"]).is_err());
    assert_eq!(app.store.current_assessment().unwrap(), None);
}

#[test]
fn critical_suicide_risk_prints_crisis_resources() {
    let app = app(false);
    let out = run(
        &app,
        &["suicide-risk", "y", "y", "y", "y", "y", "y", "n", "n", "n", "n"],
    )
    .unwrap();
    assert!(out.contains("988"));
    assert!(out.contains("741741"));

    let current = app.store.current_assessment().unwrap().unwrap();
    assert_eq!(current.severity, Severity::Severe);
    assert_eq!(current.route_to, Route::HumanTherapy);
    assert_eq!(current.scores.suicide_risk, Some(6));
}

#[test]
fn low_suicide_risk_has_no_crisis_block() {
    let app = app(false);
    let out = run(
        &app,
        &["suicide-risk", "n", "n", "n", "n", "n", "n", "n", "n", "y", "n"],
    )
    .unwrap();
    assert!(!out.contains("741741"));
    assert!(run(&app, &["suicide-risk", "y", "n"]).is_err());
}

#[test]
fn evaluate_reads_camel_case_json() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("eval.json");
    std::fs::write(
        &file,
        r#"{
            "sleepPatterns": { "quality": 8, "duration": 2 },
            "thoughts": { "suicidalIdeation": { "thoughts": true } }
        }"#,
    )
    .unwrap();

    let app = app(false);
    let out = run(&app, &["evaluate", file.to_str().unwrap(), "--phq9", "14", "--enrich"]).unwrap();
    assert!(out.contains("988"));

    let current = app.store.current_assessment().unwrap().unwrap();
    assert_eq!(current.kind, AssessmentKind::Comprehensive);
    assert_eq!(current.severity, Severity::Severe);
    assert_eq!(current.scores.phq9, Some(14));
    assert!(app.store.evaluation().unwrap().is_some());
}

#[test]
fn history_lists_most_recent_first() {
    let app = app(true);
    run(&app, &["gad7", "0", "0", "0", "0", "0", "0", "0"]).unwrap();
    run(&app, &["phq9", "1", "1", "1", "1", "1", "1", "1", "1", "1"]).unwrap();

    let out = run(&app, &["history"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value[0]["kind"], "phq9");
    assert_eq!(value[1]["kind"], "gad7");
}

#[test]
fn current_without_assessment() {
    assert!(run(&app(false), &["current"]).unwrap().contains("No assessment yet"));
    assert_eq!(run(&app(true), &["current"]).unwrap(), "null");
}

#[test]
fn checkins_and_progress() {
    let app = app(false);
    run(&app, &["checkin", "--mood", "4"]).unwrap();
    run(&app, &["checkin", "--mood", "8", "--symptom", "Fatigue"]).unwrap();
    assert!(run(&app, &["checkin", "--mood", "0"]).is_err());

    let out = run(&app, &["progress", "--insights"]).unwrap();
    assert!(out.contains("Average mood: 6.0/10 over 2 check-ins"));
    assert!(out.contains("Progress monitoring is important for recovery"));
}

#[test]
fn chat_needs_an_assessment() {
    let app = app(false);
    assert!(run(&app, &["chat", "hello"]).is_err());
}

#[test]
fn chat_uses_scripted_replies_and_records_the_session() {
    let app = app(false);
    run(&app, &["phq9", "2", "2", "2", "2", "2", "2", "2", "2", "2"]).unwrap();

    let out = run(&app, &["chat", "I", "feel", "hopeless"]).unwrap();
    assert!(out.starts_with(CRISIS_GUIDANCE));

    run(&app, &["chat", "I", "can't", "sleep"]).unwrap();

    let session = app.store.session().unwrap().unwrap();
    assert_eq!(session.kind, SessionKind::HumanTherapy);
    assert_eq!(session.messages.len(), 4);
    assert_eq!(session.messages[0].content, "I feel hopeless");
}

#[test]
fn questionnaires_are_listed() {
    let out = run(&app(false), &["questionnaires"]).unwrap();
    assert!(out.contains("phq9"));
    assert!(out.contains("gad7"));
    assert!(out.contains("suicide_risk"));
}

#[test]
fn reset_requires_confirmation() {
    let app = app(false);
    run(&app, &["checkin", "--mood", "5"]).unwrap();
    assert!(run(&app, &["reset"]).is_err());
    assert_eq!(app.store.checkins().unwrap().len(), 1);

    run(&app, &["reset", "--yes"]).unwrap();
    assert!(app.store.checkins().unwrap().is_empty());
}

#[test]
fn config_init_writes_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app(false);
    app.config_path = dir.path().join("config.json");

    let out = run(&app, &["config", "init", "--assistant"]).unwrap();
    assert!(out.contains("assistant enabled"));
    assert!(app.config_path.exists());
    assert!(run(&app, &["config", "init"]).is_err());

    let shown = run(&app, &["config", "show"]).unwrap();
    assert!(shown.contains("llama3.2:1b"));
}

#[test]
fn current_repeats_crisis_block_for_critical_suicide_risk() {
    let app = app(false);
    run(
        &app,
        &["suicide-risk", "y", "y", "y", "y", "y", "y", "n", "n", "n", "n"],
    )
    .unwrap();

    let current = run(&app, &["current"]).unwrap();
    assert!(current.contains("988"));
    assert!(current.contains("741741"));
}

#[test]
fn current_omits_crisis_block_below_critical_risk() {
    let app = app(false);
    run(
        &app,
        &["suicide-risk", "y", "y", "y", "y", "y", "n", "n", "n", "n", "n"],
    )
    .unwrap();

    let current = run(&app, &["current"]).unwrap();
    assert!(!current.contains("741741"));
}

#[test]
fn current_repeats_crisis_block_for_evaluation_with_ideation() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("eval.json");
    std::fs::write(
        &file,
        r#"{ "thoughts": { "suicidalIdeation": { "plan": true } } }"#,
    )
    .unwrap();

    let app = app(false);
    run(&app, &["evaluate", file.to_str().unwrap()]).unwrap();
    let current = run(&app, &["current"]).unwrap();
    assert!(current.contains("741741"));
}

#[test]
fn evaluate_rejects_unreachable_questionnaire_totals() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("eval.json");
    std::fs::write(&file, "{}").unwrap();
    let path = file.to_str().unwrap();

    let app = app(false);
    assert!(run(&app, &["evaluate", path, "--phq9", "28"]).is_err());
    assert!(run(&app, &["evaluate", path, "--gad7", "22"]).is_err());
    assert!(app.store.current_assessment().unwrap().is_none());

    run(&app, &["evaluate", path, "--phq9", "27", "--gad7", "21"]).unwrap();
    let current = app.store.current_assessment().unwrap().unwrap();
    assert_eq!(current.scores.phq9, Some(27));
    assert_eq!(current.scores.gad7, Some(21));
}

#[test]
fn generator_is_skipped_when_disabled_or_unreachable() {
    let mut config = MindcheckConfig::default();
    config.assistant.enabled = false;
    assert!(build_generator(&config).is_none());

    config.assistant.enabled = true;
    config.assistant.base_url = "http://127.0.0.1:9".to_string();
    config.assistant.timeout_secs = 1;
    assert!(build_generator(&config).is_none());
}

use mindcheck_core::models::severity::Severity;
use mindcheck_instruments::instruments::gad7::Gad7;
use mindcheck_instruments::instruments::phq9::Phq9;
use mindcheck_instruments::instruments::suicide_risk;
use mindcheck_instruments::scoring::{parse_answer, parse_yes_no};
use mindcheck_instruments::{
    Questionnaire, all_questionnaires, get_questionnaire, require_questionnaire, score_gad7,
    score_phq9,
};

/// Build a sheet of `len` items whose answers sum to `total`.
fn sheet_with_total(len: usize, total: u32) -> Vec<u8> {
    let mut remaining = total;
    (0..len)
        .map(|_| {
            let item = remaining.min(3);
            remaining -= item;
            item as u8
        })
        .collect()
}

#[test]
fn phq9_total_is_the_sum_of_items() {
    let score = score_phq9(&[0u8, 1, 2, 3, 0, 1, 2, 3, 1]);
    assert_eq!(score.total, 13);
    assert_eq!(score.severity, Severity::Moderate);
}

#[test]
fn phq9_boundaries() {
    let cases = [
        (0, Severity::Minimal),
        (4, Severity::Minimal),
        (5, Severity::Mild),
        (9, Severity::Mild),
        (10, Severity::Moderate),
        (14, Severity::Moderate),
        (15, Severity::ModeratelySevere),
        (19, Severity::ModeratelySevere),
        (20, Severity::Severe),
        (27, Severity::Severe),
    ];
    for (total, expected) in cases {
        let score = score_phq9(&sheet_with_total(9, total));
        assert_eq!(score.total, total);
        assert_eq!(score.severity, expected, "PHQ-9 total {total}");
    }
}

#[test]
fn phq9_all_maximum_answers_is_severe() {
    let score = score_phq9(&[3u8; 9]);
    assert_eq!(score.total, 27);
    assert_eq!(score.severity, Severity::Severe);
}

#[test]
fn gad7_boundaries_skip_moderately_severe() {
    let cases = [
        (4, Severity::Minimal),
        (5, Severity::Mild),
        (9, Severity::Mild),
        (10, Severity::Moderate),
        (14, Severity::Moderate),
        (15, Severity::Severe),
        (21, Severity::Severe),
    ];
    for (total, expected) in cases {
        let score = score_gad7(&sheet_with_total(7, total));
        assert_eq!(score.severity, expected, "GAD-7 total {total}");
    }

    for total in 0..=21 {
        let severity = score_gad7(&sheet_with_total(7, total)).severity;
        assert_ne!(severity, Severity::ModeratelySevere);
    }
}

#[test]
fn missing_items_count_as_zero() {
    let score = score_phq9(&[Some(3), None, Some(2)]);
    assert_eq!(score.total, 5);
    assert_eq!(score.severity, Severity::Mild);

    let empty: [u8; 0] = [];
    assert_eq!(score_gad7(&empty).total, 0);
}

#[test]
fn validation_flags_count_range_and_unanswered_items() {
    let answers = vec![Some(1), None, Some(7)];
    let errors = Phq9.validate_answers(&answers);

    assert_eq!(errors.len(), 3);
    assert!(errors[0].item.is_none());
    assert!(errors[0].message.contains("expected 9 answers, got 3"));
    assert_eq!(errors[1].item, Some(2));
    assert_eq!(errors[2].item, Some(3));
    assert_eq!(errors[2].value, Some(7));
}

#[test]
fn complete_sheet_validates_cleanly() {
    let answers = vec![Some(2); 7];
    assert!(Gad7.validate_answers(&answers).is_empty());
}

#[test]
fn structured_input_lists_items_and_total() {
    let answers = vec![Some(3); 9];
    let text = Phq9.to_structured_input(&answers);
    assert!(text.starts_with("## PHQ-9"));
    assert!(text.contains("Feeling down, depressed, or hopeless: 3 (Nearly every day)"));
    assert!(text.contains("Total: 27 (severe)"));
}

#[test]
fn registry_lookup() {
    let ids: Vec<String> = all_questionnaires()
        .iter()
        .map(|q| q.id().to_string())
        .collect();
    assert_eq!(ids, vec!["phq9", "gad7"]);
    assert_eq!(get_questionnaire("gad7").unwrap().items().len(), 7);
    assert!(get_questionnaire("beck").is_none());
    assert!(require_questionnaire("beck").is_err());
}

#[test]
fn answer_tokens_parse() {
    assert_eq!(parse_answer("2").unwrap(), Some(2));
    assert_eq!(parse_answer("-").unwrap(), None);
    assert!(parse_answer("4").is_err());
    assert!(parse_answer("x").is_err());

    assert!(parse_yes_no("Yes").unwrap());
    assert!(!parse_yes_no("n").unwrap());
    assert!(parse_yes_no("maybe").is_err());
}

#[test]
fn suicide_screen_counts_yes_answers() {
    let mut answers = [false; 10];
    answers[0] = true;
    answers[5] = true;
    assert_eq!(suicide_risk::count_risk_factors(&answers), 2);
    assert_eq!(suicide_risk::ITEMS.len(), 10);

    let text = suicide_risk::to_structured_input(&answers);
    assert!(text.contains("Have you had thoughts of harming yourself? yes"));
    assert!(text.contains("Risk factors present: 2"));
}

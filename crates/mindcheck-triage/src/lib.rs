//! mindcheck-triage
//!
//! The assessment scoring and care-routing engine. Pure and synchronous:
//! raw answers or a symptom evaluation go in, an immutable
//! [`AssessmentResult`](mindcheck_core::models::assessment::AssessmentResult)
//! comes out. Nothing here performs I/O, and nothing here can fail.
//!
//! Data flows one way:
//!
//! ```text
//! evaluation ─► normalize ─► aggregate ─► classify ─► result
//!                                ▲            ▲
//!                  questionnaire scores    safety
//! ```
//!
//! Any raised suicidal-ideation flag forces `severe` and `human_therapy`.
//! The override is checked independently by [`classify::determine_severity`]
//! and [`classify::determine_routing`] so callers using only one of them
//! still get it.

pub mod aggregate;
pub mod classify;
pub mod normalize;
pub mod quick_screen;
pub mod recommend;
pub mod result;
pub mod safety;
pub mod suicide_risk;

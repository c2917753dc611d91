//! mindcheck-assistant
//!
//! Optional text-generation collaborator: symptom-analysis enrichment,
//! supportive chat replies, and progress insights. Every operation takes an
//! injected [`generator::TextGenerator`] (or none) and has a deterministic
//! local fallback, so nothing downstream depends on a model being reachable.

pub mod analysis;
pub mod chat;
pub mod context;
pub mod error;
pub mod generator;
pub mod progress;
pub mod prompts;

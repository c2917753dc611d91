//! Typed access to everything the application persists.

use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, info};
use uuid::Uuid;

use mindcheck_core::models::assessment::{AssessmentKind, AssessmentResult};
use mindcheck_core::models::chat_history::{ChatMessage, ChatSession, SessionKind};
use mindcheck_core::models::checkin::WeeklyCheckin;
use mindcheck_core::models::evaluation::SymptomEvaluation;
use mindcheck_core::store_keys;

use crate::error::StorageError;
use crate::state::{load_state, save_state};
use crate::store::KeyValueStore;

/// Assessment history keeps this many results, most recent first.
pub const HISTORY_LIMIT: usize = 10;

pub struct AssessmentStore<S> {
    store: S,
}

impl<S: KeyValueStore> AssessmentStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Make `result` the current assessment and prepend it to history.
    pub fn set_current_assessment(&self, result: &AssessmentResult) -> Result<(), StorageError> {
        save_state(&self.store, store_keys::CURRENT_ASSESSMENT, result)?;

        let mut history = self.history()?;
        history.insert(0, result.clone());
        history.truncate(HISTORY_LIMIT);
        save_state(&self.store, store_keys::ASSESSMENT_HISTORY, &history)?;

        info!(
            assessment_id = %result.id,
            kind = %result.kind,
            severity = %result.severity,
            route = %result.route_to,
            history_len = history.len(),
            "assessment saved"
        );
        Ok(())
    }

    pub fn current_assessment(&self) -> Result<Option<AssessmentResult>, StorageError> {
        load_state(&self.store, store_keys::CURRENT_ASSESSMENT)
    }

    /// Most recent first.
    pub fn history(&self) -> Result<Vec<AssessmentResult>, StorageError> {
        Ok(load_state(&self.store, store_keys::ASSESSMENT_HISTORY)?.unwrap_or_default())
    }

    pub fn save_evaluation(&self, evaluation: &SymptomEvaluation) -> Result<(), StorageError> {
        save_state(&self.store, store_keys::SYMPTOM_EVALUATION, evaluation)
    }

    pub fn evaluation(&self) -> Result<Option<SymptomEvaluation>, StorageError> {
        load_state(&self.store, store_keys::SYMPTOM_EVALUATION)
    }

    /// Raw answers for a questionnaire, overwriting the previous set.
    pub fn save_answers<T: Serialize + ?Sized>(
        &self,
        kind: AssessmentKind,
        answers: &T,
    ) -> Result<(), StorageError> {
        save_state(&self.store, &store_keys::answers(kind), answers)
    }

    pub fn answers<T: DeserializeOwned>(
        &self,
        kind: AssessmentKind,
    ) -> Result<Option<T>, StorageError> {
        load_state(&self.store, &store_keys::answers(kind))
    }

    pub fn add_checkin(&self, checkin: &WeeklyCheckin) -> Result<(), StorageError> {
        let mut checkins = self.checkins()?;
        checkins.insert(0, checkin.clone());
        save_state(&self.store, store_keys::WEEKLY_CHECKINS, &checkins)?;
        debug!(checkin_id = %checkin.id, mood = checkin.mood, total = checkins.len(), "check-in added");
        Ok(())
    }

    /// Most recent first.
    pub fn checkins(&self) -> Result<Vec<WeeklyCheckin>, StorageError> {
        Ok(load_state(&self.store, store_keys::WEEKLY_CHECKINS)?.unwrap_or_default())
    }

    /// Open a new session, replacing any previous one.
    pub fn start_session(
        &self,
        kind: SessionKind,
        assessment_id: Uuid,
    ) -> Result<ChatSession, StorageError> {
        let session = ChatSession::start(kind, assessment_id);
        save_state(&self.store, store_keys::CHAT_SESSION, &session)?;
        info!(session_id = %session.id, %assessment_id, "chat session started");
        Ok(session)
    }

    pub fn session(&self) -> Result<Option<ChatSession>, StorageError> {
        load_state(&self.store, store_keys::CHAT_SESSION)
    }

    /// Append to the open session.
    pub fn add_chat_message(&self, message: ChatMessage) -> Result<ChatSession, StorageError> {
        let mut session = self
            .session()?
            .filter(ChatSession::is_open)
            .ok_or(StorageError::NoOpenSession)?;
        session.messages.push(message);
        save_state(&self.store, store_keys::CHAT_SESSION, &session)?;
        Ok(session)
    }

    pub fn end_session(&self) -> Result<ChatSession, StorageError> {
        let mut session = self
            .session()?
            .filter(ChatSession::is_open)
            .ok_or(StorageError::NoOpenSession)?;
        session.ended_at = Some(jiff::Timestamp::now());
        save_state(&self.store, store_keys::CHAT_SESSION, &session)?;
        info!(session_id = %session.id, messages = session.messages.len(), "chat session ended");
        Ok(session)
    }

    /// Delete every record the application writes.
    pub fn reset(&self) -> Result<(), StorageError> {
        for key in store_keys::all_keys() {
            self.store.delete(&key)?;
        }
        info!("all local data deleted");
        Ok(())
    }
}

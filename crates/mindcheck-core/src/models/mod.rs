pub mod assessment;
pub mod chat_history;
pub mod checkin;
pub mod evaluation;
pub mod severity;

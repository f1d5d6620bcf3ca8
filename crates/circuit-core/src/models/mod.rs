pub mod candidate_set;
pub mod correction;
pub mod degradation_event;
pub mod field;
pub mod history;
pub mod intent;
pub mod question;
pub mod record;
pub mod response;

pub use candidate_set::CandidateSet;
pub use correction::QueryCorrection;
pub use degradation_event::DegradationEvent;
pub use field::{Field, FilterLogic};
pub use history::{HistoryEntry, Role};
pub use intent::{Confidence, Intent, IntentClassification, IntentContext, IntentExtra};
pub use question::{AnsweredQuestion, QuestionSpec};
pub use record::{Record, RecordView};
pub use response::Response;

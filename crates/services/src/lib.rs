#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod feedback;
pub mod mode;
pub mod submit;
pub mod submitter;

pub use config::EditorConfig;
pub use error::{ConfigError, SubmitRejected};
pub use feedback::{Banner, BannerKind, BannerTicket, Feedback};
pub use mode::EditorMode;
pub use submit::{SubmitGate, SubmitOutcome, SubmitPhase, SubmitTicket};
pub use submitter::{InMemorySubmitter, QuestionSubmitter};

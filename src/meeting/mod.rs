//! Meeting module for meeting-assistant
//!
//! Holds the structured extraction result, the sample transcript used by the
//! demo, and the plain-text report printer.

mod models;
mod report;
mod transcript;

pub use models::{ActionItem, MeetingInfo};
pub use report::write_report;
pub use transcript::SAMPLE_TRANSCRIPT;

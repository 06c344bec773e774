mod dialog;
mod submission;

pub use dialog::ServiceRequestDialog;
pub use submission::{ContactClient, SubmissionOutcome};

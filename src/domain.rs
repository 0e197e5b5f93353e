// Domain layer modules
pub mod contact_message;
pub mod contact_submission;

// Re-exports
pub use contact_message::ContactMessage;
pub use contact_submission::{ContactSubmission, PayloadError, SubmissionPayload, ValidationError};

//! Model entities for the auth cards.

// field identifiers and form states
mod field;
mod submission_state;

// entities
pub mod registration;
pub mod session;

pub use self::field::Field;
pub use self::submission_state::SubmissionState;

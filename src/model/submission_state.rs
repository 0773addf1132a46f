//! # A type SubmissionState for SignUpForm in form.rs
//!
//! SubmissionState is an Enum holds all the states a form instance
//! passes through on its way to the identity provider. `Submitted` is
//! terminal, `Failed` gives control back for a retry.
use std::fmt;
use std::slice::Iter;

use serde::Serialize;

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum SubmissionState {
    Idle, // default
    Validating,
    Invalid,
    Submitting,
    Submitted,
    Failed,
}

impl fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::Idle => write!(f, "idle"),
            Self::Validating => write!(f, "validating"),
            Self::Invalid => write!(f, "invalid"),
            Self::Submitting => write!(f, "submitting"),
            Self::Submitted => write!(f, "submitted"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

impl From<String> for SubmissionState {
    fn from(s: String) -> Self {
        match s.to_ascii_lowercase().as_ref() {
            "validating" => Self::Validating,
            "invalid" => Self::Invalid,
            "submitting" => Self::Submitting,
            "submitted" => Self::Submitted,
            "failed" => Self::Failed,
            _ => Self::Idle,
        }
    }
}

impl SubmissionState {
    pub fn iter() -> Iter<'static, Self> {
        static SUBMISSION_STATES: [SubmissionState; 6] = [
            SubmissionState::Idle,
            SubmissionState::Validating,
            SubmissionState::Invalid,
            SubmissionState::Submitting,
            SubmissionState::Submitted,
            SubmissionState::Failed,
        ];
        SUBMISSION_STATES.iter()
    }

    pub fn as_vec() -> Vec<Self> {
        Self::iter().cloned().collect()
    }
}

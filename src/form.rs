//! The sign up form and its submission state machine.
use uuid::Uuid;

use crate::logger::Logger;
use crate::model::{Field, SubmissionState};
use crate::model::registration::Registration;
use crate::model::session::Session;
use crate::provider::Submitter;
use crate::validation::ValidationError;
use crate::validation::registration::Validator;

/// SignUpForm
///
/// The form exclusively owns its in-memory input. All operations run
/// synchronously on the thread handling the user events.
pub struct SignUpForm<'a> {
    input: Registration,
    errors: Vec<ValidationError>,
    state: SubmissionState,
    session: Option<Session>,
    logger: &'a Logger,
}

impl<'a> SignUpForm<'a> {
    pub fn new(logger: &'a Logger) -> Self {
        Self {
            input: Registration {
                ..Default::default()
            },
            errors: vec![],
            state: SubmissionState::Idle,
            session: None,
            logger,
        }
    }

    pub fn input(&self) -> &Registration {
        &self.input
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Mutates a single field.
    ///
    /// Errors from the last attempt stay visible until the next
    /// submission; the input is discarded once it was submitted.
    pub fn set(&mut self, field: &Field, value: &str) {
        if self.state == SubmissionState::Submitted {
            warn!(self.logger, "{} is read only after submission", field);
            return;
        }
        self.input.set(field, value);
    }

    /// Messages for a single field from the last submission attempt.
    pub fn errors_for(&self, field: &Field) -> Vec<&str> {
        let name = field.to_string();
        self.errors
            .iter()
            .filter(|e| e.field == name)
            .flat_map(|e| e.messages.iter().map(|m| m.as_str()))
            .collect()
    }

    /// Runs a submission attempt.
    ///
    /// * `Idle`, `Invalid` and `Failed` enter `Validating`
    /// * `Validating` moves to `Invalid` when any field fails its rules
    ///   (the submitter is not called)
    /// * `Validating` moves to `Submitting` when all fields pass
    /// * `Submitting` ends in `Submitted`, or in `Failed` on a
    ///   collaborator error
    ///
    /// `Submitted` is terminal, further calls keep the state.
    pub fn submit(&mut self, submitter: &mut Submitter) -> &SubmissionState {
        if self.state == SubmissionState::Submitted {
            warn!(self.logger, "already submitted");
            return &self.state;
        }

        let attempt = Uuid::new_v4();
        self.state = SubmissionState::Validating;

        let result = Validator::new(&self.input, self.logger).validate();
        match result {
            Err(errors) => {
                warn!(
                    self.logger,
                    "attempt {} blocked, {} field(s) are invalid",
                    attempt,
                    errors.len()
                );
                self.errors = errors;
                self.state = SubmissionState::Invalid;
            },
            Ok(_) => {
                self.errors = vec![];
                self.state = SubmissionState::Submitting;

                match submitter.submit(&self.input) {
                    Ok(session) => {
                        info!(self.logger, "attempt {} was accepted", attempt);
                        self.session = Some(session);
                        self.state = SubmissionState::Submitted;
                    },
                    Err(e) => {
                        error!(self.logger, "attempt {} failed: {}", attempt, e);
                        self.state = SubmissionState::Failed;
                    },
                }
            },
        }
        &self.state
    }
}

//! Identity provider submission.
//!
//! The actual identity provider integration is not part of this crate.
//! `Submitter` only owns the seam: a client implementing
//! `SubmitClient` gets injected by the embedding application (or by a
//! test), and without one the submission is skipped.
use std::fmt;

use slog::Logger;

use crate::config::Config;
use crate::model::registration::Registration;
use crate::model::session::Session;

/// An error the identity provider collaborator reports.
///
/// Distinct from the validation errors: these occur only after a valid
/// input was forwarded.
#[derive(Clone, Debug)]
pub enum SubmissionError {
    Rejected(String),
    Unavailable(String),
}

impl fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::Rejected(ref reason) => write!(f, "rejected: {}", reason),
            Self::Unavailable(ref reason) => {
                write!(f, "unavailable: {}", reason)
            },
        }
    }
}

pub trait SubmitClient {
    fn submit(
        &mut self,
        input: &Registration,
    ) -> Result<Session, SubmissionError>;
}

pub type Client = Box<dyn SubmitClient>;

pub struct Submitter<'a> {
    client: Option<Client>,
    config: &'a Config,
    logger: &'a Logger,
}

impl<'a> Submitter<'a> {
    pub fn new(config: &'a Config, logger: &'a Logger) -> Self {
        let client = None;

        Self {
            client,
            config,
            logger,
        }
    }

    pub fn inject(&mut self, client: Option<Client>) {
        self.client = client;
    }

    pub fn submit(
        &mut self,
        input: &Registration,
    ) -> Result<Session, SubmissionError>
    {
        if let Some(ref mut c) = self.client {
            let result = c.submit(input);
            if let Err(ref e) = result {
                error!(self.logger, "e: {}", e);
            }
            return result;
        }

        // No client is wired in yet
        warn!(
            self.logger,
            "skipped submission of {} to {}",
            input,
            &self.config.identity_provider_url
        );
        Ok(Session::empty())
    }
}

use chrono::Utc;

/// Session
///
/// A value the identity provider grants after a successful submission.
/// The `value` stays opaque to this crate.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Session {
    pub value: String,
    pub granted_at: i64,
    pub expires_at: i64,
}

impl Session {
    /// An already expired session without a value.
    ///
    /// Used while no identity provider client is wired in.
    pub fn empty() -> Self {
        let now = Utc::now();
        Self {
            value: "".to_string(),
            granted_at: now.timestamp(),
            expires_at: now.timestamp(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

use std::fmt;

pub use crate::model::field::*;

/// Registration (sign up input)
///
/// The value is created with empty defaults when the card is shown and
/// mutated field by field on user edits.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl Default for Registration {
    fn default() -> Self {
        Self {
            name: "".to_string(),
            email: "".to_string(),
            password: "".to_string(),
        }
    }
}

impl fmt::Display for Registration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<Registration {email}>", email = &self.email)
    }
}

impl Registration {
    pub fn get(&self, field: &Field) -> &str {
        match *field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    pub fn set(&mut self, field: &Field, value: &str) {
        match *field {
            Field::Name => self.name = value.to_string(),
            Field::Email => self.email = value.to_string(),
            Field::Password => self.password = value.to_string(),
        }
    }
}

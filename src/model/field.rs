//! # A type Field for inputs on the auth cards
//!
//! Field identifies a single named input value within a form and is
//! rendered as the wire name the validation errors are keyed by.
use std::fmt;
use std::slice::Iter;

use serde::Serialize;

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum Field {
    Name,
    Email,
    Password,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::Name => write!(f, "name"),
            Self::Email => write!(f, "email"),
            Self::Password => write!(f, "password"),
        }
    }
}

impl From<String> for Field {
    fn from(s: String) -> Self {
        match s.to_ascii_lowercase().as_ref() {
            "email" => Self::Email,
            "password" => Self::Password,
            _ => Self::Name,
        }
    }
}

impl Field {
    pub fn iter() -> Iter<'static, Self> {
        static FIELDS: [Field; 3] = [Field::Name, Field::Email, Field::Password];
        FIELDS.iter()
    }

    pub fn as_vec() -> Vec<Self> {
        Self::iter().cloned().collect()
    }
}

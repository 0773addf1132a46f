pub mod registration;

use std::fmt;
use std::slice::Iter;

use accord::{Invalid, ValidatorResult};
use regex::Regex;

/// An error for a single field, with every failed rule collected.
///
/// Fields that pass all of their rules are not mentioned.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ValidationError {
    pub field: String,
    pub kinds: Vec<ErrorKind>,
    pub messages: Vec<String>,
}

/// # A type ErrorKind for ValidationError
///
/// ErrorKind is an Enum holds all the ways a field value can fail its
/// rules. The token form (`empty_field`, ...) travels in
/// `Invalid::msg` of each validator below.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum ErrorKind {
    EmptyField,
    TooLong,
    TooShort,
    InvalidCharacters,
    InvalidFormat,
    WeakPassword,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::EmptyField => write!(f, "empty_field"),
            Self::TooLong => write!(f, "too_long"),
            Self::TooShort => write!(f, "too_short"),
            Self::InvalidCharacters => write!(f, "invalid_characters"),
            Self::InvalidFormat => write!(f, "invalid_format"),
            Self::WeakPassword => write!(f, "weak_password"),
        }
    }
}

impl From<String> for ErrorKind {
    fn from(s: String) -> Self {
        match s.to_ascii_lowercase().as_ref() {
            "empty_field" => Self::EmptyField,
            "too_long" => Self::TooLong,
            "too_short" => Self::TooShort,
            "invalid_characters" => Self::InvalidCharacters,
            "weak_password" => Self::WeakPassword,
            _ => Self::InvalidFormat,
        }
    }
}

impl ErrorKind {
    pub fn iter() -> Iter<'static, Self> {
        static ERROR_KINDS: [ErrorKind; 6] = [
            ErrorKind::EmptyField,
            ErrorKind::TooLong,
            ErrorKind::TooShort,
            ErrorKind::InvalidCharacters,
            ErrorKind::InvalidFormat,
            ErrorKind::WeakPassword,
        ];
        ERROR_KINDS.iter()
    }

    pub fn as_vec() -> Vec<Self> {
        Self::iter().cloned().collect()
    }
}

type SV = Box<Fn(&String) -> ValidatorResult>;

pub const CHARS_LOWER: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o',
    'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];
pub const CHARS_UPPER: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O',
    'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];
pub const DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

lazy_static! {
    // a pragmatic local@domain.tld grammar, not full RFC 5322
    static ref EMAIL_FORMAT: Regex =
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
}

pub fn not_empty() -> SV {
    Box::new(move |s: &String| {
        if !s.is_empty() {
            return Ok(());
        }
        Err(Invalid {
            msg: ErrorKind::EmptyField.to_string(),
            args: vec![],
            human_readable: "Must not be empty".to_string(),
        })
    })
}

pub fn min_length(min: usize) -> SV {
    Box::new(move |s: &String| {
        if s.chars().count() >= min {
            return Ok(());
        }
        Err(Invalid {
            msg: ErrorKind::TooShort.to_string(),
            args: vec![min.to_string()],
            human_readable: format!("Must contain more than {} characters", min),
        })
    })
}

pub fn max_length(max: usize) -> SV {
    Box::new(move |s: &String| {
        if s.chars().count() <= max {
            return Ok(());
        }
        Err(Invalid {
            msg: ErrorKind::TooLong.to_string(),
            args: vec![max.to_string()],
            human_readable: format!("Must contain less than {} characters", max),
        })
    })
}

pub fn not_contain_whitespace() -> SV {
    Box::new(move |s: &String| {
        if !s.chars().any(char::is_whitespace) {
            return Ok(());
        }
        Err(Invalid {
            msg: ErrorKind::InvalidCharacters.to_string(),
            args: vec![],
            human_readable: "Must not contain whitespace characters".to_string(),
        })
    })
}

pub fn email_format() -> SV {
    Box::new(move |s: &String| {
        if EMAIL_FORMAT.is_match(s) {
            return Ok(());
        }
        Err(Invalid {
            msg: ErrorKind::InvalidFormat.to_string(),
            args: vec![],
            human_readable: "Must be a valid email address".to_string(),
        })
    })
}

pub fn contain_any(chars: &'static [char], name: &'static str) -> SV {
    Box::new(move |s: &String| {
        if s.chars().any(|c| chars.contains(&c)) {
            return Ok(());
        }
        Err(Invalid {
            msg: ErrorKind::WeakPassword.to_string(),
            args: vec![name.to_string()],
            human_readable: format!("Must contain '{}'", name),
        })
    })
}

pub fn contain_symbol() -> SV {
    Box::new(move |s: &String| {
        if s.chars().any(|c| !c.is_alphanumeric()) {
            return Ok(());
        }
        Err(Invalid {
            msg: ErrorKind::WeakPassword.to_string(),
            args: vec![],
            human_readable: "Must contain a symbol".to_string(),
        })
    })
}

//! Declarative descriptions of the auth cards.
//!
//! The cards are plain serializable data. An external renderer decides
//! how sections, fields and actions appear on screen; this crate only
//! declares what belongs on a card and where its links navigate to.

mod sign_in;
mod sign_up;

pub use self::sign_in::sign_in;
pub use self::sign_up::sign_up;

use std::fmt;
use std::slice::Iter;

use crate::config::Config;
use crate::model::Field;

/// Navigation targets reachable from the auth cards.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Page {
    SignIn,
    SignUp,
    PrivacyPolicy,
    TermsOfService,
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::SignIn => write!(f, "sign-in"),
            Self::SignUp => write!(f, "sign-up"),
            Self::PrivacyPolicy => write!(f, "privacy-policy"),
            Self::TermsOfService => write!(f, "terms-of-service"),
        }
    }
}

impl Page {
    pub fn path(&self) -> &'static str {
        match *self {
            Self::SignIn => Config::SIGN_IN_PATH,
            Self::SignUp => Config::SIGN_UP_PATH,
            Self::PrivacyPolicy => Config::PRIVACY_POLICY_PATH,
            Self::TermsOfService => Config::TERMS_OF_SERVICE_PATH,
        }
    }

    pub fn iter() -> Iter<'static, Self> {
        static PAGES: [Page; 4] = [
            Page::SignIn,
            Page::SignUp,
            Page::PrivacyPolicy,
            Page::TermsOfService,
        ];
        PAGES.iter()
    }

    pub fn as_vec() -> Vec<Self> {
        Self::iter().cloned().collect()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum InputType {
    Text,
    Email,
    Password,
}

/// A labeled input slot bound to a form field.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FieldSpec {
    pub field: Field,
    pub input_type: InputType,
    pub placeholder: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Link {
    pub label: &'static str,
    pub page: Page,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Action {
    Primary { label: &'static str },
    Secondary { label: &'static str },
}

/// A run of description text, plain or linked.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Run {
    Text(&'static str),
    Anchor(Link),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Section {
    Header {
        title: &'static str,
        description: Vec<Run>,
    },
    Separator,
    Fields(Vec<FieldSpec>),
    Actions(Vec<Action>),
    Footer {
        text: &'static str,
        link: Link,
    },
    Body(&'static str),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Card {
    pub sections: Vec<Section>,
}

impl Card {
    /// All input slots of the card in display order.
    pub fn fields(&self) -> Vec<&FieldSpec> {
        self.sections
            .iter()
            .filter_map(|s| {
                match s {
                    Section::Fields(specs) => Some(specs.iter()),
                    _ => None,
                }
            })
            .flatten()
            .collect()
    }

    /// All navigation links of the card in display order.
    pub fn links(&self) -> Vec<&Link> {
        self.sections
            .iter()
            .flat_map(|s| {
                match s {
                    Section::Header { description, .. } => description
                        .iter()
                        .filter_map(|r| {
                            match r {
                                Run::Anchor(link) => Some(link),
                                _ => None,
                            }
                        })
                        .collect::<Vec<&Link>>(),
                    Section::Footer { link, .. } => vec![link],
                    _ => vec![],
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_page_path() {
        assert_eq!("/sign-in", Page::SignIn.path());
        assert_eq!("/sign-up", Page::SignUp.path());
        assert_eq!("/privacy", Page::PrivacyPolicy.path());
        assert_eq!("/terms", Page::TermsOfService.path());
    }

    #[test]
    fn test_page_as_vec() {
        assert_eq!(
            vec![
                Page::SignIn,
                Page::SignUp,
                Page::PrivacyPolicy,
                Page::TermsOfService,
            ],
            Page::as_vec()
        )
    }
}

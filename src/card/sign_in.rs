use crate::card::{Card, Section};

/// Builds the sign in card.
// TODO: the body is still a placeholder, the sign in form is not built
// yet
pub fn sign_in() -> Card {
    Card {
        sections: vec![
            Section::Header {
                title: "Welcome back",
                description: vec![],
            },
            Section::Separator,
            Section::Body("Body"),
        ],
    }
}

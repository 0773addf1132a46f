use crate::card::{
    Action, Card, FieldSpec, InputType, Link, Page, Run, Section,
};
use crate::model::Field;

/// Builds the sign up card.
pub fn sign_up() -> Card {
    Card {
        sections: vec![
            Section::Header {
                title: "Sign Up",
                description: vec![
                    Run::Text("By signing up, you agree to our "),
                    Run::Anchor(Link {
                        label: "Privacy Policy",
                        page: Page::PrivacyPolicy,
                    }),
                    Run::Text(" and "),
                    Run::Anchor(Link {
                        label: "Terms of Service",
                        page: Page::TermsOfService,
                    }),
                ],
            },
            Section::Separator,
            Section::Fields(vec![
                FieldSpec {
                    field: Field::Name,
                    input_type: InputType::Text,
                    placeholder: "Enter your name",
                },
                FieldSpec {
                    field: Field::Email,
                    input_type: InputType::Email,
                    placeholder: "Enter email address",
                },
                FieldSpec {
                    field: Field::Password,
                    input_type: InputType::Password,
                    placeholder: "Enter password",
                },
            ]),
            Section::Actions(vec![Action::Primary { label: "Sign Up" }]),
            Section::Separator,
            Section::Actions(vec![
                Action::Secondary {
                    label: "Login with Google",
                },
                Action::Secondary {
                    label: "Login with Github",
                },
            ]),
            Section::Separator,
            Section::Footer {
                text: "Already have an account?",
                link: Link {
                    label: "Sign In",
                    page: Page::SignIn,
                },
            },
        ],
    }
}

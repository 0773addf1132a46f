use std::result::Result;

use crate::logger::Logger;
use crate::model::registration::Registration;
use crate::validation::*;

pub const NAME_MAX_LENGTH: usize = 10;
pub const PASSWORD_MIN_LENGTH: usize = 8;
pub const PASSWORD_MAX_LENGTH: usize = 50;

pub struct Validator<'a> {
    data: &'a Registration,
    logger: &'a Logger,
}

impl<'a> Validator<'a> {
    pub fn new(data: &'a Registration, logger: &'a Logger) -> Self {
        Self { data, logger }
    }

    #[allow(clippy::redundant_closure)]
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let input = self.data.clone();
        let result = rules! {
            "name" => input.name => [
                not_empty(),
                max_length(NAME_MAX_LENGTH),
                not_contain_whitespace()
            ],
            "email" => input.email => [email_format()],
            "password" => input.password => [
                min_length(PASSWORD_MIN_LENGTH),
                max_length(PASSWORD_MAX_LENGTH),
                contain_any(CHARS_UPPER, "A-Z"),
                contain_any(CHARS_LOWER, "a-z"),
                contain_any(DIGITS, "0-9"),
                contain_symbol()
            ]
        };

        let mut errors: Vec<ValidationError> = vec![];

        if let Err(v) = result {
            // MultipleError to Vec<ValidationError>
            errors =
                v.0.iter()
                    .map(|e| {
                        ValidationError {
                            field: e.tag.to_string(),
                            kinds: e
                                .invalids
                                .iter()
                                .map(|i| ErrorKind::from(i.msg.to_string()))
                                .collect(),
                            messages: e
                                .invalids
                                .iter()
                                .map(|i| i.human_readable.to_string())
                                .collect(),
                        }
                    })
                    .collect();
        }

        if !errors.is_empty() {
            for e in &errors {
                info!(
                    self.logger,
                    "validation error: {} {}",
                    e.field,
                    e.messages.join(",")
                );
            }
            return Err(errors);
        }
        Ok(())
    }
}

#[rustfmt::skip::attributes(rstest)]
#[cfg(test)]
mod test {
    use super::*;

    use rstest::rstest;

    use crate::model::test::run;

    fn build(name: &str, email: &str, password: &str) -> Registration {
        Registration {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_validate_name_is_empty() {
        run(|_, logger| {
            let data = build("", "postman@example.org", "pat+Postman9");
            let v = Validator::new(&data, logger);

            let result = v.validate();
            assert!(result.is_err());

            if let Err(errors) = &result {
                assert_eq!(1, errors.len());
                assert_eq!("name", errors[0].field);
                assert_eq!(vec![ErrorKind::EmptyField], errors[0].kinds);
                assert_eq!(vec!["Must not be empty"], errors[0].messages);
            } else {
                panic!("must fail");
            }
        })
    }

    #[test]
    fn test_validate_name_is_too_long() {
        run(|_, logger| {
            let data =
                build("elevenchars", "postman@example.org", "pat+Postman9");
            let v = Validator::new(&data, logger);

            let result = v.validate();
            assert!(result.is_err());

            if let Err(errors) = &result {
                assert_eq!(1, errors.len());
                assert_eq!("name", errors[0].field);
                assert_eq!(vec![ErrorKind::TooLong], errors[0].kinds);
                assert_eq!(
                    vec!["Must contain less than 10 characters"],
                    errors[0].messages
                );
            } else {
                panic!("must fail");
            }
        })
    }

    #[rstest(
        name,
        case("pat man"),
        case("pat\tman"),
        case(" patman"),
        case("patman "),
        ::trace
    )]
    fn test_validate_name_contains_whitespace(name: &'static str) {
        run(|_, logger| {
            let data = build(name, "postman@example.org", "pat+Postman9");
            let v = Validator::new(&data, logger);

            let result = v.validate();
            assert!(result.is_err());

            if let Err(errors) = &result {
                assert_eq!(1, errors.len());
                assert_eq!("name", errors[0].field);
                assert_eq!(vec![ErrorKind::InvalidCharacters], errors[0].kinds);
                assert_eq!(
                    vec!["Must not contain whitespace characters"],
                    errors[0].messages
                );
            } else {
                panic!("must fail");
            }
        })
    }

    #[test]
    fn test_validate_name_at_limit() {
        run(|_, logger| {
            let data =
                build("abcdefghij", "postman@example.org", "pat+Postman9");
            let v = Validator::new(&data, logger);

            let result = v.validate();
            assert!(result.is_ok());
        })
    }

    #[rstest(
        email,
        case(""),
        case("not-an-email"),
        case("a@b"),
        case("@example.org"),
        case("pat man@example.org"),
        ::trace
    )]
    fn test_validate_email_is_invalid(email: &'static str) {
        run(|_, logger| {
            let data = build("patman", email, "pat+Postman9");
            let v = Validator::new(&data, logger);

            let result = v.validate();
            assert!(result.is_err());

            if let Err(errors) = &result {
                assert_eq!(1, errors.len());
                assert_eq!("email", errors[0].field);
                assert_eq!(vec![ErrorKind::InvalidFormat], errors[0].kinds);
                assert_eq!(
                    vec!["Must be a valid email address"],
                    errors[0].messages
                );
            } else {
                panic!("must fail");
            }
        })
    }

    #[rstest(
        email,
        case("a@b.com"),
        case("franz.ferdinand@example.org"),
        case("pat+postman@mail.example.co.jp"),
        ::trace
    )]
    fn test_validate_email(email: &'static str) {
        run(|_, logger| {
            let data = build("patman", email, "pat+Postman9");
            let v = Validator::new(&data, logger);

            let result = v.validate();
            assert!(result.is_ok());
        })
    }

    #[test]
    fn test_validate_password_is_too_short() {
        run(|_, logger| {
            let data = build("patman", "postman@example.org", "Sh0rt!");
            let v = Validator::new(&data, logger);

            let result = v.validate();
            assert!(result.is_err());

            if let Err(errors) = &result {
                assert_eq!(1, errors.len());
                assert_eq!("password", errors[0].field);
                assert_eq!(vec![ErrorKind::TooShort], errors[0].kinds);
                assert_eq!(
                    vec!["Must contain more than 8 characters"],
                    errors[0].messages
                );
            } else {
                panic!("must fail");
            }
        })
    }

    #[test]
    fn test_validate_password_is_too_long() {
        run(|_, logger| {
            let data =
                build("patman", "postman@example.org", &"L0ng!".repeat(11));
            let v = Validator::new(&data, logger);

            let result = v.validate();
            assert!(result.is_err());

            if let Err(errors) = &result {
                assert_eq!(1, errors.len());
                assert_eq!("password", errors[0].field);
                assert_eq!(vec![ErrorKind::TooLong], errors[0].kinds);
                assert_eq!(
                    vec!["Must contain less than 50 characters"],
                    errors[0].messages
                );
            } else {
                panic!("must fail");
            }
        })
    }

    #[rstest(
        password, message,
        case("passw0rd!", "Must contain 'A-Z'"),
        case("PASSW0RD!", "Must contain 'a-z'"),
        case("Password!", "Must contain '0-9'"),
        case("Passw0rd1", "Must contain a symbol"),
        ::trace
    )]
    fn test_validate_password_is_weak(
        password: &'static str,
        message: &'static str,
    )
    {
        run(|_, logger| {
            let data = build("patman", "postman@example.org", password);
            let v = Validator::new(&data, logger);

            let result = v.validate();
            assert!(result.is_err());

            if let Err(errors) = &result {
                assert_eq!(1, errors.len());
                assert_eq!("password", errors[0].field);
                assert_eq!(vec![ErrorKind::WeakPassword], errors[0].kinds);
                assert_eq!(vec![message.to_string()], errors[0].messages);
            } else {
                panic!("must fail");
            }
        })
    }

    #[test]
    fn test_validate_password_is_weak_and_too_short() {
        run(|_, logger| {
            let data = build("patman", "postman@example.org", "weak");
            let v = Validator::new(&data, logger);

            let result = v.validate();
            assert!(result.is_err());

            if let Err(errors) = &result {
                assert_eq!(1, errors.len());
                assert_eq!("password", errors[0].field);
                assert_eq!(
                    vec![
                        ErrorKind::TooShort,
                        ErrorKind::WeakPassword,
                        ErrorKind::WeakPassword,
                        ErrorKind::WeakPassword,
                    ],
                    errors[0].kinds
                );
                assert_eq!(
                    vec![
                        "Must contain more than 8 characters",
                        "Must contain 'A-Z'",
                        "Must contain '0-9'",
                        "Must contain a symbol",
                    ],
                    errors[0].messages
                );
            } else {
                panic!("must fail");
            }
        })
    }

    #[test]
    fn test_validate_password_at_limits() {
        run(|_, logger| {
            for password in
                &["Aa1!aaaa".to_string(), "Aa1!".to_string() + &"a".repeat(46)]
            {
                let data =
                    build("patman", "postman@example.org", password.as_str());
                let v = Validator::new(&data, logger);

                let result = v.validate();
                assert!(result.is_ok());
            }
        })
    }

    #[test]
    fn test_validate_fields_are_default() {
        run(|_, logger| {
            let data = Registration {
                ..Default::default()
            };
            let v = Validator::new(&data, logger);

            let result = v.validate();
            assert!(result.is_err());

            if let Err(errors) = &result {
                assert_eq!(3, errors.len());
                assert_eq!("name", errors[0].field);
                assert_eq!(vec![ErrorKind::EmptyField], errors[0].kinds);
                assert_eq!("email", errors[1].field);
                assert_eq!(vec![ErrorKind::InvalidFormat], errors[1].kinds);
                assert_eq!("password", errors[2].field);
            } else {
                panic!("must fail");
            }
        })
    }

    #[test]
    fn test_validate_is_idempotent() {
        run(|_, logger| {
            let data = build("pat man", "not-an-email", "weak");
            let v = Validator::new(&data, logger);

            assert_eq!(v.validate(), v.validate());
        })
    }

    #[test]
    fn test_validate() {
        run(|_, logger| {
            let data = build("ab", "a@b.com", "Abcdef1!");
            let v = Validator::new(&data, logger);

            let result = v.validate();
            assert!(result.is_ok());
        })
    }
}

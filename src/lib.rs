//! Console Auth Forms
//!
//! The form core behind the sign-in and sign-up cards of the console
//! web frontend.

#[macro_use]
extern crate accord;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate serde_derive;
#[macro_use(error, info, warn)]
extern crate slog;

#[cfg(test)]
extern crate parking_lot;
#[cfg(test)]
#[macro_use]
extern crate rusty_fork;

pub mod validation;

pub mod card;
pub mod config;
pub mod form;
pub mod logger;
pub mod model;
pub mod provider;

// macros

#[macro_export]
macro_rules! hashmap(
    { $($key:expr => $value:expr),+ } => {
        {
            let mut m = ::std::collections::HashMap::new();
            $(m.insert($key, $value);)+
            m
        }
    };
);

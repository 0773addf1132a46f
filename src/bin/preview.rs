extern crate dotenv;
extern crate serde_json;

extern crate console_auth_forms;

use std::env;
use dotenv::dotenv;

use console_auth_forms::{card, config, logger, model, validation};

fn get_env() -> String {
    match env::var("ENV") {
        Ok(ref v) if v == &"test".to_string() => String::from("testing"),
        Ok(v) => v.to_lowercase(),
        Err(_) => String::from("development"),
    }
}

// Prints the card descriptions and a validation sample for a quick
// look at what the renderer receives.
fn main() {
    dotenv().ok();

    let name = get_env();
    let config =
        config::Config::from(name.as_str()).expect("Failed to get config");
    let logger = logger::get_logger(&config);

    for card in &[card::sign_up(), card::sign_in()] {
        println!("{}", serde_json::to_string_pretty(card).unwrap());
    }

    let input = model::registration::Registration {
        ..Default::default()
    };
    let v = validation::registration::Validator::new(&input, &logger);
    if let Err(errors) = v.validate() {
        println!("{}", serde_json::to_string_pretty(&errors).unwrap());
    }
}

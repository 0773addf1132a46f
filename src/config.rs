use std::env;

#[derive(Clone)]
pub struct Config {
    pub application_url: String,
    pub env_name: &'static str,
    pub identity_provider_url: String,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            application_url: env::var("APPLICATION_URL")
                .expect("APPLICATION_URL is not set"),

            env_name: &"undefined",

            identity_provider_url: env::var("IDENTITY_PROVIDER_URL")
                .expect("IDENTITY_PROVIDER_URL is not set"),
        }
    }
}

impl Config {
    pub const PRIVACY_POLICY_PATH: &'static str = "/privacy";
    pub const SIGN_IN_PATH: &'static str = "/sign-in";
    pub const SIGN_UP_PATH: &'static str = "/sign-up";
    pub const TERMS_OF_SERVICE_PATH: &'static str = "/terms";

    pub fn from(config_name: &str) -> Result<Config, String> {
        match config_name {
            "production" => Ok(Config::production_config()),
            "testing" => Ok(Config::testing_config()),
            "development" => Ok(Config::development_config()),
            _ => Err(format!("Invalid config_name: '{}'", &config_name)),
        }
    }

    fn production_config() -> Config {
        Config {
            env_name: &"production",

            ..Default::default()
        }
    }

    // NOTE:
    // The testing and development configs fall back to local defaults so
    // that the suite runs without a prepared environment.
    fn testing_config() -> Config {
        Config {
            application_url: env::var("TEST_APPLICATION_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:3000".to_string()),
            env_name: &"testing",
            identity_provider_url: env::var("TEST_IDENTITY_PROVIDER_URL")
                .unwrap_or_else(|_| {
                    "http://127.0.0.1:3000/_api/identity".to_string()
                }),
        }
    }

    fn development_config() -> Config {
        Config {
            application_url: env::var("APPLICATION_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:3000".to_string()),
            env_name: &"development",
            identity_provider_url: env::var("IDENTITY_PROVIDER_URL")
                .unwrap_or_else(|_| {
                    "http://127.0.0.1:3000/_api/identity".to_string()
                }),
        }
    }
}

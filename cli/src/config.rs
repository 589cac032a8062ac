use thiserror::Error;
use vacancy_scraper::headhunter::HeadHunterConfig;
use vacancy_scraper::superjob::{SuperJobConfig, SuperJobCredentials};

use crate::{Cli, Target};

pub const SUPERJOB_API_KEY: &str = "SUPERJOB_API_KEY";
pub const SUPERJOB_LOGIN: &str = "SUPERJOB_LOGIN";
pub const SUPERJOB_PASSWORD: &str = "SUPERJOB_PASSWORD";
pub const SUPERJOB_ID: &str = "SUPERJOB_ID";
pub const SUPERJOB_BASE_URL: &str = "SUPERJOB_BASE_URL";
pub const HEADHUNTER_USER_AGENT: &str = "HEADHUNTER_USER_AGENT";
pub const HEADHUNTER_BASE_URL: &str = "HEADHUNTER_BASE_URL";

pub const DEFAULT_LANGUAGES: [&str; 10] = [
    "Python",
    "Java",
    "PHP",
    "JavaScript",
    "C++",
    "Swift",
    "Ruby",
    "Go",
    "React",
    "C#",
];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Environment variable '{0}' not set")]
    MissingVariable(&'static str),
}

/// Everything a run needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub languages: Vec<String>,
    pub headhunter: Option<HeadHunterConfig>,
    pub superjob: Option<SuperJobConfig>,
}

impl Config {
    pub fn from_env(args: &Cli) -> Result<Self, ConfigError> {
        Self::from_lookup(args, |key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(args: &Cli, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let require = |key: &'static str| lookup(key).ok_or(ConfigError::MissingVariable(key));

        let languages = if args.languages.is_empty() {
            DEFAULT_LANGUAGES.into_iter().map(String::from).collect()
        } else {
            args.languages.clone()
        };

        let headhunter = if args.targets().contains(&Target::HeadHunter) {
            let mut config = HeadHunterConfig {
                period: args.period,
                ..HeadHunterConfig::default()
            };
            if let Some(user_agent) = lookup(HEADHUNTER_USER_AGENT) {
                config.user_agent = user_agent;
            }
            if let Some(base_url) = lookup(HEADHUNTER_BASE_URL) {
                config.base_url = base_url;
            }
            Some(config)
        } else {
            None
        };

        let superjob = if args.targets().contains(&Target::SuperJob) {
            let mut config = SuperJobConfig::new(require(SUPERJOB_API_KEY)?);
            if let Some(base_url) = lookup(SUPERJOB_BASE_URL) {
                config.base_url = base_url;
            }
            if args.check_superjob_auth {
                config.credentials = Some(SuperJobCredentials {
                    login: require(SUPERJOB_LOGIN)?,
                    password: require(SUPERJOB_PASSWORD)?,
                    client_id: require(SUPERJOB_ID)?,
                });
            }
            Some(config)
        } else {
            None
        };

        Ok(Self {
            languages,
            headhunter,
            superjob,
        })
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use clap::Parser;

    use super::*;

    fn lookup(vars: &[(&'static str, &str)]) -> impl Fn(&'static str) -> Option<String> {
        let vars: HashMap<&'static str, String> = vars
            .iter()
            .map(|(k, v)| (*k, v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let args = Cli::parse_from(["salary-stats-cli"]);
        let config = Config::from_lookup(&args, lookup(&[(SUPERJOB_API_KEY, "secret")])).unwrap();
        assert_eq!(config.languages.len(), DEFAULT_LANGUAGES.len());
        assert_eq!(config.languages[0], "Python");
        let headhunter = config.headhunter.unwrap();
        assert_eq!(headhunter.period, 30);
        assert_eq!(headhunter.area, 1);
        let superjob = config.superjob.unwrap();
        assert_eq!(superjob.app_key, "secret");
        assert!(superjob.credentials.is_none());
    }

    #[test]
    fn test_superjob_requires_api_key() {
        let args = Cli::parse_from(["salary-stats-cli", "--site", "superjob"]);
        let err = Config::from_lookup(&args, lookup(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVariable(SUPERJOB_API_KEY)));
    }

    #[test]
    fn test_headhunter_only_needs_no_secrets() {
        let args = Cli::parse_from([
            "salary-stats-cli",
            "--site",
            "headhunter",
            "--language",
            "Rust",
            "--period",
            "7",
        ]);
        let config = Config::from_lookup(&args, lookup(&[])).unwrap();
        assert_eq!(config.languages, vec!["Rust".to_owned()]);
        assert_eq!(config.headhunter.unwrap().period, 7);
        assert!(config.superjob.is_none());
    }

    #[test]
    fn test_auth_check_requires_credentials() {
        let args = Cli::parse_from([
            "salary-stats-cli",
            "--site",
            "superjob",
            "--check-superjob-auth",
        ]);
        let err = Config::from_lookup(
            &args,
            lookup(&[(SUPERJOB_API_KEY, "secret"), (SUPERJOB_LOGIN, "user")]),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::MissingVariable(SUPERJOB_PASSWORD)));

        let config = Config::from_lookup(
            &args,
            lookup(&[
                (SUPERJOB_API_KEY, "secret"),
                (SUPERJOB_LOGIN, "user"),
                (SUPERJOB_PASSWORD, "hunter2"),
                (SUPERJOB_ID, "1234"),
            ]),
        )
        .unwrap();
        let credentials = config.superjob.unwrap().credentials.unwrap();
        assert_eq!(credentials.login, "user");
        assert_eq!(credentials.client_id, "1234");
    }
}

use crate::server::error::config::ConfigError;

const DEFAULT_PORT: u16 = 4000;
const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000";

pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Base URL the server-rendered pages fetch catalog data from
    pub api_base_url: String,
    pub allowed_origins: Vec<String>,
    pub seed_database: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Blank values are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let database_url =
            get("DATABASE_URL").ok_or(ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "PORT".to_string(),
                    reason: e.to_string(),
                })?,
            None => DEFAULT_PORT,
        };

        let api_base_url = get("API_BASE_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|| format!("http://127.0.0.1:{}", port));

        let allowed_origins = get("ALLOWED_ORIGINS")
            .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGINS.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let seed_database = match get("SEED_DATABASE") {
            Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => true,
                "false" | "0" | "no" => false,
                other => {
                    return Err(ConfigError::InvalidEnvValue {
                        var: "SEED_DATABASE".to_string(),
                        reason: format!("expected a boolean, got '{}'", other),
                    })
                }
            },
            None => false,
        };

        Ok(Self {
            database_url,
            port,
            api_base_url,
            allowed_origins,
            seed_database,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::Config;
    use crate::server::error::config::ConfigError;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        move |key| vars.get(key).cloned()
    }

    #[test]
    fn applies_defaults() {
        let config = Config::from_lookup(lookup(&[("DATABASE_URL", "sqlite::memory:")])).unwrap();

        assert_eq!(config.port, 4000);
        assert_eq!(config.api_base_url, "http://127.0.0.1:4000");
        assert_eq!(config.allowed_origins, vec!["http://localhost:3000"]);
        assert!(!config.seed_database);
    }

    #[test]
    fn derives_api_base_url_from_port() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("PORT", "8080"),
        ]))
        .unwrap();

        assert_eq!(config.api_base_url, "http://127.0.0.1:8080");
    }

    #[test]
    fn reads_explicit_values() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/datacore"),
            ("API_BASE_URL", "https://datacore.example/"),
            ("ALLOWED_ORIGINS", "https://a.example, https://b.example,"),
            ("SEED_DATABASE", "true"),
        ]))
        .unwrap();

        assert_eq!(config.api_base_url, "https://datacore.example");
        assert_eq!(
            config.allowed_origins,
            vec!["https://a.example", "https://b.example"]
        );
        assert!(config.seed_database);
    }

    #[test]
    fn requires_database_url() {
        let result = Config::from_lookup(lookup(&[("PORT", "4000")]));

        assert!(matches!(result, Err(ConfigError::MissingEnvVar(var)) if var == "DATABASE_URL"));
    }

    #[test]
    fn rejects_invalid_port() {
        let result = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("PORT", "not-a-port"),
        ]));

        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvValue { var, .. }) if var == "PORT"
        ));
    }

    #[test]
    fn rejects_invalid_seed_flag() {
        let result = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("SEED_DATABASE", "maybe"),
        ]));

        assert!(result.is_err());
    }
}

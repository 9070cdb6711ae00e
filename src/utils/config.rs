use anyhow::Context;
use std::env;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub environment: String,
    pub delivery_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let delivery_seed = match lookup("SHOP_DELIVERY_SEED") {
            Some(raw) => Some(raw.trim().parse::<u64>().with_context(|| {
                format!(
                    "SHOP_DELIVERY_SEED must be an unsigned integer, got '{}'",
                    raw
                )
            })?),
            None => None,
        };

        let config = Config {
            log_level: lookup("LOG_LEVEL")
                .unwrap_or_else(|| "warn".to_string())
                .trim()
                .to_lowercase(),
            environment: lookup("APP_ENV").unwrap_or_else(|| "development".to_string()),
            delivery_seed,
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(anyhow::anyhow!(
                "LOG_LEVEL must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.log_level
            ));
        }

        if self.environment.trim().is_empty() {
            return Err(anyhow::anyhow!("APP_ENV must not be empty"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.environment, "development");
        assert_eq!(config.delivery_seed, None);
    }

    #[test]
    fn test_reads_values() {
        let config = config_from(&[
            ("LOG_LEVEL", " DEBUG "),
            ("APP_ENV", "production"),
            ("SHOP_DELIVERY_SEED", "1234"),
        ])
        .unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.delivery_seed, Some(1234));
        assert_eq!(config.environment, "production");
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        assert!(config_from(&[("LOG_LEVEL", "loud")]).is_err());
    }

    #[test]
    fn test_rejects_bad_seed() {
        let err = config_from(&[("SHOP_DELIVERY_SEED", "-5")]).unwrap_err();
        assert!(err.to_string().contains("SHOP_DELIVERY_SEED"));
    }
}

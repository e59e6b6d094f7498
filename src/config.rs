use std::env;

/// Settings for the host binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Forecast horizon in days.
    pub forecast_days: u32,
    /// Seed for the forecast path noise. `None` seeds from entropy.
    pub forecast_seed: Option<u64>,
    /// RSI lookback period.
    pub rsi_period: usize,
    /// Volume moving-average period.
    pub volume_period: usize,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            forecast_days: lookup("FORECAST_DAYS")
                .and_then(|v| v.parse().ok())
                .filter(|days| *days > 0)
                .unwrap_or(7),
            forecast_seed: lookup("FORECAST_SEED").and_then(|v| v.parse().ok()),
            rsi_period: lookup("RSI_PERIOD")
                .and_then(|v| v.parse().ok())
                .unwrap_or(14),
            volume_period: lookup("VOLUME_PERIOD")
                .and_then(|v| v.parse().ok())
                .unwrap_or(20),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::from_lookup(lookup(&[]));
        assert_eq!(config.forecast_days, 7);
        assert_eq!(config.forecast_seed, None);
        assert_eq!(config.rsi_period, 14);
        assert_eq!(config.volume_period, 20);
    }

    #[test]
    fn test_config_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("FORECAST_DAYS", "30"),
            ("FORECAST_SEED", "42"),
            ("RSI_PERIOD", "9"),
            ("VOLUME_PERIOD", "10"),
        ]));
        assert_eq!(config.forecast_days, 30);
        assert_eq!(config.forecast_seed, Some(42));
        assert_eq!(config.rsi_period, 9);
        assert_eq!(config.volume_period, 10);
    }

    #[test]
    fn test_config_ignores_invalid_values() {
        let config = Config::from_lookup(lookup(&[
            ("FORECAST_DAYS", "0"),
            ("FORECAST_SEED", "abc"),
            ("RSI_PERIOD", "-3"),
        ]));
        assert_eq!(config.forecast_days, 7);
        assert_eq!(config.forecast_seed, None);
        assert_eq!(config.rsi_period, 14);
    }
}

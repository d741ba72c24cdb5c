use std::str::FromStr;

use anyhow::{Context, Result, anyhow};
use products_hr::{Roster, demo_roster};

/// Which records the roster starts with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SeedSet {
    #[default]
    Demo,
    Empty,
}

impl SeedSet {
    pub fn roster(self) -> Result<Roster> {
        match self {
            SeedSet::Demo => demo_roster().context("invalid demo seed"),
            SeedSet::Empty => Ok(Roster::new()),
        }
    }
}

impl FromStr for SeedSet {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "demo" => Ok(SeedSet::Demo),
            "empty" | "none" => Ok(SeedSet::Empty),
            other => Err(anyhow!("unknown seed set {other:?}; expected demo or empty")),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppConfig {
    pub seed: SeedSet,
    pub log_filter: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let seed = match lookup("ROSTER_SEED") {
            Some(raw) => raw.parse().context("invalid ROSTER_SEED")?,
            None => SeedSet::default(),
        };
        let log_filter = lookup("ROSTER_LOG")
            .map(|val| val.trim().to_string())
            .filter(|val| !val.is_empty());
        Ok(Self { seed, log_filter })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_to_demo_seed() {
        let config = load(&[]).unwrap();
        assert_eq!(config.seed, SeedSet::Demo);
        assert!(config.log_filter.is_none());
        assert_eq!(config.seed.roster().unwrap().len(), 5);
    }

    #[test]
    fn reads_overrides() {
        let config = load(&[("ROSTER_SEED", "Empty"), ("ROSTER_LOG", " debug ")]).unwrap();
        assert_eq!(config.seed, SeedSet::Empty);
        assert_eq!(config.log_filter.as_deref(), Some("debug"));
        assert!(config.seed.roster().unwrap().is_empty());
    }

    #[test]
    fn rejects_unknown_seed() {
        let err = load(&[("ROSTER_SEED", "prod")]).unwrap_err();
        assert!(err.to_string().contains("ROSTER_SEED"));
    }
}

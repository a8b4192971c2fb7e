//! Active deployment profiles.
//!
//! Profiles arrive either as a list (`profiles = ["dev", "local"]`) or as a
//! comma-separated string (`SALUTE__PROFILES=prod,eu`). Both forms collapse
//! into the same normalized set.

use crate::constants::PROD_PROFILE;
use serde::{Deserialize, Deserializer, Serialize};

/// The set of active profile names, read-only after configuration load.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ActiveProfiles(Vec<String>);

impl ActiveProfiles {
    /// Builds a profile set, trimming names and dropping empty or repeated entries.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut profiles: Vec<String> = Vec::new();
        for name in names {
            let name = name.as_ref().trim();
            if name.is_empty() || profiles.iter().any(|p| p == name) {
                continue;
            }
            profiles.push(name.to_owned());
        }
        Self(profiles)
    }

    /// Parses a comma-separated list such as `"prod, eu"`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self::new(raw.split(','))
    }

    /// Exact, case-sensitive membership check.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|p| p == name)
    }

    #[must_use]
    pub fn is_prod_active(&self) -> bool {
        self.contains(PROD_PROFILE)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for ActiveProfiles {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'de> Deserialize<'de> for ActiveProfiles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Csv(String),
            List(Vec<String>),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Csv(raw) => Self::parse(&raw),
            Raw::List(list) => Self::new(list),
        })
    }
}

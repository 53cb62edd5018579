//! Property-test run profile shared by every karger suite.
//!
//! `PROGTEST_CASES` scales the number of generated cases and
//! `KARGER_PBT_FORK` moves each case into a forked subprocess. Invalid
//! overrides are reported through `tracing` and otherwise ignored.

use std::env;

use thiserror::Error;

/// Environment variable controlling proptest case counts.
pub const PROGTEST_CASES_ENV_KEY: &str = "PROGTEST_CASES";
/// Environment variable controlling proptest process forking.
pub const KARGER_PBT_FORK_ENV_KEY: &str = "KARGER_PBT_FORK";

/// Reasons an override value is rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProfileOverrideError {
    /// The case count is not an unsigned integer.
    #[error("case count `{raw}` is not an unsigned integer")]
    NotANumber {
        /// Raw override text.
        raw: String,
    },
    /// The case count is zero.
    #[error("case count must be greater than zero")]
    ZeroCases,
    /// The fork flag is not a recognised boolean spelling.
    #[error("fork flag `{raw}` is not one of true/false/1/0/yes/no/on/off")]
    NotABool {
        /// Raw override text.
        raw: String,
    },
}

/// Runtime profile for property-test execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Loads a profile from the process environment.
    ///
    /// # Examples
    ///
    /// ```
    /// use karger_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self::load_with(default_cases, default_fork, |key| env::var(key).ok())
    }

    /// Loads a profile through an arbitrary variable lookup.
    #[must_use]
    pub fn load_with<F>(default_cases: u32, default_fork: bool, lookup: F) -> Self
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let cases = override_or(PROGTEST_CASES_ENV_KEY, default_cases, &lookup, parse_cases);
        let fork = override_or(KARGER_PBT_FORK_ENV_KEY, default_fork, &lookup, parse_bool);
        Self { cases, fork }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether proptest cases run in forked subprocesses.
    #[must_use]
    pub fn fork(&self) -> bool {
        self.fork
    }
}

fn override_or<T, L, P>(key: &'static str, default: T, lookup: &L, parse: P) -> T
where
    L: Fn(&'static str) -> Option<String>,
    P: Fn(&str) -> Result<T, ProfileOverrideError>,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    parse(&raw).unwrap_or_else(|error| {
        tracing::warn!(env = key, %raw, %error, "ignoring property-test override");
        default
    })
}

fn parse_cases(raw: &str) -> Result<u32, ProfileOverrideError> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err(ProfileOverrideError::ZeroCases),
        Ok(cases) => Ok(cases),
        Err(_) => Err(ProfileOverrideError::NotANumber {
            raw: raw.to_owned(),
        }),
    }
}

fn parse_bool(raw: &str) -> Result<bool, ProfileOverrideError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ProfileOverrideError::NotABool {
            raw: raw.to_owned(),
        }),
    }
}

//! Environment-driven sizing for property-test suites.
//!
//! Suites pass their own default case count; CI can raise or lower it for
//! every suite at once through [`PROPTEST_CASES_ENV_KEY`].

use std::env;

use proptest::test_runner::Config as ProptestConfig;

/// Environment variable overriding the number of cases per property.
pub const PROPTEST_CASES_ENV_KEY: &str = "EXTRAP_PROPTEST_CASES";

/// Resolved case count for one property-test suite.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ProptestRunProfile {
    cases: u32,
}

impl ProptestRunProfile {
    /// Reads the override from the environment, falling back to
    /// `default_cases` when it is unset or invalid.
    ///
    /// # Examples
    /// ```
    /// use extrap_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(32);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32) -> Self {
        let raw = env::var(PROPTEST_CASES_ENV_KEY).ok();
        Self::resolve(raw.as_deref(), default_cases)
    }

    /// Resolves a profile from an optional raw override.
    ///
    /// Invalid overrides are logged and ignored.
    #[must_use]
    pub fn resolve(raw: Option<&str>, default_cases: u32) -> Self {
        let fallback = default_cases.max(1);
        let cases = raw.map_or(fallback, |value| match parse_cases(value) {
            Ok(cases) => cases,
            Err(reason) => {
                ::tracing::warn!(
                    env = PROPTEST_CASES_ENV_KEY,
                    raw = value,
                    reason,
                    "invalid property-test case override; using default",
                );
                fallback
            }
        });
        Self { cases }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub const fn cases(&self) -> u32 {
        self.cases
    }
}

/// Builds a proptest configuration sized by the shared run profile.
///
/// Suites pass this to `#![proptest_config(..)]` so they all honour
/// [`PROPTEST_CASES_ENV_KEY`] the same way.
#[must_use]
pub fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    ProptestConfig {
        cases: ProptestRunProfile::load(default_cases).cases(),
        ..ProptestConfig::default()
    }
}

fn parse_cases(raw: &str) -> Result<u32, &'static str> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err("case count must be greater than zero"),
        Ok(cases) => Ok(cases),
        Err(_) => Err("case count must be a positive integer"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::unset(None, 64)]
    #[case::plain(Some("12"), 12)]
    #[case::padded(Some(" 7 \n"), 7)]
    #[case::zero(Some("0"), 64)]
    #[case::negative(Some("-3"), 64)]
    #[case::garbage(Some("many"), 64)]
    fn resolves_case_count(#[case] raw: Option<&str>, #[case] expected: u32) {
        assert_eq!(ProptestRunProfile::resolve(raw, 64).cases(), expected);
    }

    #[rstest]
    fn suite_config_uses_profile_case_count() {
        let config = suite_proptest_config(48);
        assert_eq!(config.cases, ProptestRunProfile::load(48).cases());
        assert_eq!(config.max_shrink_iters, ProptestConfig::default().max_shrink_iters);
    }

    #[rstest]
    fn zero_default_is_raised_to_one() {
        assert_eq!(ProptestRunProfile::resolve(None, 0).cases(), 1);
    }
}

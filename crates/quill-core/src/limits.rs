//! Character limits for post fields.
//!
//! [`Limits`] holds the maximum character count for every limited field plus
//! the rendered output as a whole. Documents may override individual limits
//! through `^` directives; [`Limits::with_overrides`] merges those overrides on
//! top of a set of defaults.

use std::{fmt, str::FromStr};

use serde::Deserialize;
use thiserror::Error;

/// The maximum number of evidence items a post may carry.
///
/// This bound is fixed and cannot be changed through limit directives.
pub const MAX_EVIDENCE_ITEMS: usize = 5;

/// Names of the limits that can be configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LimitKey {
    Title,
    Claim,
    /// Applies to each evidence item, measured as `value + " " + context`.
    Evidence,
    Insight,
    Context,
    /// Applies to the complete rendered output.
    Total,
}

impl LimitKey {
    /// All recognized limit keys, in declaration order.
    pub const ALL: [LimitKey; 6] = [
        LimitKey::Title,
        LimitKey::Claim,
        LimitKey::Evidence,
        LimitKey::Insight,
        LimitKey::Context,
        LimitKey::Total,
    ];

    /// Returns the name used for this key in `^` directives.
    pub fn as_str(&self) -> &'static str {
        match self {
            LimitKey::Title => "title",
            LimitKey::Claim => "claim",
            LimitKey::Evidence => "evidence",
            LimitKey::Insight => "insight",
            LimitKey::Context => "context",
            LimitKey::Total => "total",
        }
    }
}

impl fmt::Display for LimitKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a limit name is not one of the recognized keys.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown limit `{0}`")]
pub struct UnknownLimitKey(pub String);

impl FromStr for LimitKey {
    type Err = UnknownLimitKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LimitKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownLimitKey(s.to_string()))
    }
}

/// Effective character limits for one compilation.
///
/// The defaults match the house style: a title fits on one line, evidence
/// items fit in a bullet, and the whole post stays under 700 characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Limits {
    title: usize,
    claim: usize,
    evidence: usize,
    insight: usize,
    context: usize,
    total: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            title: 80,
            claim: 150,
            evidence: 60,
            insight: 120,
            context: 100,
            total: 700,
        }
    }
}

impl Limits {
    /// Returns the limit for `key`.
    pub fn get(&self, key: LimitKey) -> usize {
        match key {
            LimitKey::Title => self.title,
            LimitKey::Claim => self.claim,
            LimitKey::Evidence => self.evidence,
            LimitKey::Insight => self.insight,
            LimitKey::Context => self.context,
            LimitKey::Total => self.total,
        }
    }

    /// Sets the limit for `key`.
    pub fn set(&mut self, key: LimitKey, value: usize) {
        let slot = match key {
            LimitKey::Title => &mut self.title,
            LimitKey::Claim => &mut self.claim,
            LimitKey::Evidence => &mut self.evidence,
            LimitKey::Insight => &mut self.insight,
            LimitKey::Context => &mut self.context,
            LimitKey::Total => &mut self.total,
        };
        *slot = value;
    }

    /// Returns a copy of these limits with `overrides` applied in order.
    ///
    /// Later entries win over earlier ones for the same key.
    pub fn with_overrides<'a>(
        mut self,
        overrides: impl IntoIterator<Item = (&'a LimitKey, &'a usize)>,
    ) -> Self {
        for (key, value) in overrides {
            self.set(*key, *value);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let limits = Limits::default();

        assert_eq!(limits.get(LimitKey::Title), 80);
        assert_eq!(limits.get(LimitKey::Claim), 150);
        assert_eq!(limits.get(LimitKey::Evidence), 60);
        assert_eq!(limits.get(LimitKey::Insight), 120);
        assert_eq!(limits.get(LimitKey::Context), 100);
        assert_eq!(limits.get(LimitKey::Total), 700);
    }

    #[test]
    fn test_key_from_str() {
        for key in LimitKey::ALL {
            assert_eq!(key.as_str().parse::<LimitKey>(), Ok(key));
        }
        assert_eq!(
            "foo".parse::<LimitKey>(),
            Err(UnknownLimitKey("foo".to_string()))
        );
        assert!("Title".parse::<LimitKey>().is_err());
    }

    #[test]
    fn test_overrides_last_wins() {
        let overrides = [(LimitKey::Total, 500), (LimitKey::Total, 400)];
        let limits = Limits::default().with_overrides(overrides.iter().map(|(k, v)| (k, v)));

        assert_eq!(limits.get(LimitKey::Total), 400);
        assert_eq!(limits.get(LimitKey::Title), 80);
    }
}

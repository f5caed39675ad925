//! Verified Kantec/Paxton10 card pairs and the built-in self-check

use crate::error::ConvertError;
use crate::types::PaxtonId;
use alloc::vec::Vec;

/// Card pairs confirmed against a real Paxton10 installation
pub const KNOWN_PAIRS: &[(&str, &str)] = &[
    ("4D:52042", "9716ABCDEFZ82Z014ACB4D139716"),
    ("35:46655", "9716ABCDEFZ82Z013FB635179716"),
];

/// Outcome of converting one known pair
#[derive(Debug, Clone, PartialEq)]
pub struct FixtureResult {
    /// Kantec input
    pub kantec: &'static str,

    /// Expected Paxton10 output
    pub expected: &'static str,

    /// What the codec produced
    pub actual: Result<PaxtonId, ConvertError>,
}

impl FixtureResult {
    /// True when the codec reproduced the expected card number
    pub fn passed(&self) -> bool {
        matches!(&self.actual, Ok(id) if id.as_str().eq_ignore_ascii_case(self.expected))
    }

    /// Character index of the first mismatch, if the output differs
    pub fn first_difference(&self) -> Option<usize> {
        let actual = self.actual.as_ref().ok()?;
        let (a, e) = (actual.as_str().as_bytes(), self.expected.as_bytes());

        a.iter()
            .zip(e)
            .position(|(x, y)| !x.eq_ignore_ascii_case(y))
            .or_else(|| (a.len() != e.len()).then(|| a.len().min(e.len())))
    }
}

/// Results of running every known pair through the codec
#[derive(Debug, Clone, PartialEq)]
pub struct SelfCheckReport {
    /// One result per known pair, in order
    pub results: Vec<FixtureResult>,
}

impl SelfCheckReport {
    /// True when every pair matched
    pub fn all_passed(&self) -> bool {
        self.results.iter().all(FixtureResult::passed)
    }

    /// Number of pairs that matched
    pub fn passed_count(&self) -> usize {
        self.results.iter().filter(|r| r.passed()).count()
    }
}

/// Convert every known pair and compare against the expected output
pub fn self_check() -> SelfCheckReport {
    let results = KNOWN_PAIRS
        .iter()
        .map(|&(kantec, expected)| FixtureResult {
            kantec,
            expected,
            actual: crate::convert(kantec),
        })
        .collect();

    SelfCheckReport { results }
}

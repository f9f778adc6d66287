//! Computed match outputs: integer percentages, per-category breakdowns and
//! the per-candidate result snapshot.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::PolicyCategory;

/// An integer percentage in `0..=100`.
///
/// # Examples
/// ```
/// use policy_match_core::Percent;
///
/// assert_eq!(Percent::from_ratio(1.0 / 3.0).get(), 33);
/// assert_eq!(Percent::from_ratio(2.0 / 3.0).get(), 67);
/// assert_eq!(Percent::from_ratio(f64::NAN), Percent::ZERO);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub struct Percent(u8);

/// Error returned when a value exceeds 100 percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("percentage {0} exceeds 100")]
pub struct PercentOutOfRange(pub u8);

impl Percent {
    /// Zero percent.
    pub const ZERO: Self = Self(0);
    /// One hundred percent.
    pub const FULL: Self = Self(100);

    /// Construct a percentage, rejecting values above 100.
    ///
    /// # Errors
    /// Returns [`PercentOutOfRange`] when `value > 100`.
    pub const fn new(value: u8) -> Result<Self, PercentOutOfRange> {
        if value > 100 {
            return Err(PercentOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Construct a percentage, capping values above 100.
    ///
    /// # Examples
    /// ```
    /// use policy_match_core::Percent;
    ///
    /// assert_eq!(Percent::saturating(75).get(), 75);
    /// assert_eq!(Percent::saturating(130), Percent::FULL);
    /// ```
    #[must_use]
    pub const fn saturating(value: u8) -> Self {
        if value > 100 { Self::FULL } else { Self(value) }
    }

    /// Convert a ratio in `0.0..=1.0` to a rounded percentage.
    ///
    /// Rounds half away from zero, clamps out-of-range input and maps
    /// non-finite input to zero.
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        if !ratio.is_finite() {
            return Self::ZERO;
        }
        // Rounded and clamped into 0..=100, so the cast cannot truncate.
        let rounded = (ratio * 100.0).round().clamp(0.0, 100.0);
        Self(rounded as u8)
    }

    /// The percentage as an integer.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Percent {
    type Error = PercentOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Percent> for u8 {
    fn from(percent: Percent) -> Self {
        percent.0
    }
}

impl std::fmt::Display for Percent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Per-category percentages covering every [`PolicyCategory`].
///
/// Categories without contributing questions report zero; no key is ever
/// missing. Iteration follows the canonical category order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        from = "BTreeMap<PolicyCategory, Percent>",
        into = "BTreeMap<PolicyCategory, Percent>"
    )
)]
pub struct CategoryScores {
    scores: BTreeMap<PolicyCategory, Percent>,
}

impl CategoryScores {
    /// Every category at zero.
    #[must_use]
    pub fn zeroed() -> Self {
        Self::from_fn(|_| Percent::ZERO)
    }

    /// Build scores by evaluating `score` for each category in canonical order.
    pub fn from_fn(mut score: impl FnMut(PolicyCategory) -> Percent) -> Self {
        Self {
            scores: PolicyCategory::ALL
                .into_iter()
                .map(|category| (category, score(category)))
                .collect(),
        }
    }

    /// Score for `category`.
    #[must_use]
    pub fn get(&self, category: PolicyCategory) -> Percent {
        self.scores.get(&category).copied().unwrap_or_default()
    }

    /// Iterate `(category, score)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (PolicyCategory, Percent)> + '_ {
        self.scores.iter().map(|(category, score)| (*category, *score))
    }
}

impl Default for CategoryScores {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl From<BTreeMap<PolicyCategory, Percent>> for CategoryScores {
    fn from(partial: BTreeMap<PolicyCategory, Percent>) -> Self {
        Self::from_fn(|category| partial.get(&category).copied().unwrap_or_default())
    }
}

impl From<CategoryScores> for BTreeMap<PolicyCategory, Percent> {
    fn from(scores: CategoryScores) -> Self {
        scores.scores
    }
}

/// Compatibility between the respondent and one candidate.
///
/// A result is a snapshot: it is built once and never updated. Recompute it
/// when any input changes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct MatchingResult {
    candidate_id: String,
    candidate_name: String,
    overall_score: Percent,
    category_scores: CategoryScores,
    reasons: Vec<String>,
}

impl MatchingResult {
    /// Assemble a result.
    #[must_use]
    pub const fn new(
        candidate_id: String,
        candidate_name: String,
        overall_score: Percent,
        category_scores: CategoryScores,
        reasons: Vec<String>,
    ) -> Self {
        Self {
            candidate_id,
            candidate_name,
            overall_score,
            category_scores,
            reasons,
        }
    }

    /// Identifier of the scored candidate.
    #[must_use]
    pub fn candidate_id(&self) -> &str {
        &self.candidate_id
    }

    /// Display name of the scored candidate.
    #[must_use]
    pub fn candidate_name(&self) -> &str {
        &self.candidate_name
    }

    /// Weighted overall compatibility.
    #[must_use]
    pub const fn overall_score(&self) -> Percent {
        self.overall_score
    }

    /// Unweighted per-category compatibility.
    #[must_use]
    pub const fn category_scores(&self) -> &CategoryScores {
        &self.category_scores
    }

    /// Up to three justifications, strongest first.
    #[must_use]
    pub fn reasons(&self) -> &[String] {
        &self.reasons
    }
}

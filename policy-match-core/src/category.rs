//! Policy categories used to group questionnaire items.
//!
//! The enum is closed and its declaration order is the canonical order used
//! wherever enumeration order reaches the output: category maps, reason
//! tie-breaks and serialised results.
//!
//! # Examples
//! ```
//! use policy_match_core::PolicyCategory;
//!
//! assert_eq!(PolicyCategory::Economy.as_str(), "economy");
//! assert_eq!(PolicyCategory::Welfare.to_string(), "welfare");
//! assert_eq!(PolicyCategory::ALL.first(), Some(&PolicyCategory::Economy));
//! ```

use std::borrow::Cow;

use thiserror::Error;

/// A topical tag assigned to every question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum PolicyCategory {
    /// Economic and fiscal policy.
    Economy,
    /// Social security and welfare.
    Welfare,
    /// Schools and education.
    Education,
    /// Environment and energy.
    Environment,
    /// Foreign affairs and defence.
    Diplomacy,
    /// Constitutional questions.
    Constitution,
    /// Disaster prevention and resilience.
    Disaster,
    /// Local and regional issues.
    Local,
    /// Catch-all for uncategorised questions.
    Other,
}

impl PolicyCategory {
    /// Every category in canonical order.
    pub const ALL: [Self; 9] = [
        Self::Economy,
        Self::Welfare,
        Self::Education,
        Self::Environment,
        Self::Diplomacy,
        Self::Constitution,
        Self::Disaster,
        Self::Local,
        Self::Other,
    ];

    /// Return the category identifier as a lowercase `&str`.
    ///
    /// # Examples
    /// ```
    /// use policy_match_core::PolicyCategory;
    ///
    /// assert_eq!(PolicyCategory::Disaster.as_str(), "disaster");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Economy => "economy",
            Self::Welfare => "welfare",
            Self::Education => "education",
            Self::Environment => "environment",
            Self::Diplomacy => "diplomacy",
            Self::Constitution => "constitution",
            Self::Disaster => "disaster",
            Self::Local => "local",
            Self::Other => "other",
        }
    }

    /// Report whether the category is the catch-all bucket.
    #[must_use]
    pub const fn is_catch_all(self) -> bool {
        matches!(self, Self::Other)
    }
}

impl std::fmt::Display for PolicyCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown category name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown policy category '{0}'")]
pub struct UnknownCategory(pub String);

impl std::str::FromStr for PolicyCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == wanted)
            .ok_or_else(|| UnknownCategory(s.to_owned()))
    }
}

/// Display vocabulary for policy categories.
///
/// Label text is presentation data supplied by the caller; the scoring core
/// only asks for it when rendering reasons.
pub trait CategoryLabels: Send + Sync {
    /// Return the display label for `category`.
    fn label(&self, category: PolicyCategory) -> Cow<'_, str>;
}

/// Labels that echo the category identifier, e.g. `"economy"`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IdentifierLabels;

impl CategoryLabels for IdentifierLabels {
    fn label(&self, category: PolicyCategory) -> Cow<'_, str> {
        Cow::Borrowed(category.as_str())
    }
}

/// Japanese policy-area labels used by the questionnaire front end.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct JapaneseLabels;

impl CategoryLabels for JapaneseLabels {
    fn label(&self, category: PolicyCategory) -> Cow<'_, str> {
        Cow::Borrowed(match category {
            PolicyCategory::Economy => "経済政策",
            PolicyCategory::Welfare => "社会保障",
            PolicyCategory::Education => "教育",
            PolicyCategory::Environment => "環境",
            PolicyCategory::Diplomacy => "外交",
            PolicyCategory::Constitution => "憲法",
            PolicyCategory::Disaster => "防災",
            PolicyCategory::Local => "地域",
            PolicyCategory::Other => "その他",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    fn display_matches_as_str() {
        assert_eq!(PolicyCategory::Local.to_string(), PolicyCategory::Local.as_str());
    }

    #[rstest]
    #[case("economy", PolicyCategory::Economy)]
    #[case("Welfare", PolicyCategory::Welfare)]
    #[case(" OTHER ", PolicyCategory::Other)]
    fn parsing_accepts_known_names(#[case] raw: &str, #[case] expected: PolicyCategory) {
        assert_eq!(PolicyCategory::from_str(raw), Ok(expected));
    }

    #[rstest]
    fn parsing_rejects_unknown() {
        let err = PolicyCategory::from_str("healthcare").unwrap_err();
        assert!(err.to_string().contains("unknown policy category"));
    }

    #[rstest]
    fn ordering_follows_declaration() {
        let mut sorted = PolicyCategory::ALL;
        sorted.sort();
        assert_eq!(sorted, PolicyCategory::ALL);
        assert!(PolicyCategory::Economy < PolicyCategory::Welfare);
    }

    #[rstest]
    fn every_category_round_trips_through_its_name() {
        for category in PolicyCategory::ALL {
            assert_eq!(PolicyCategory::from_str(category.as_str()), Ok(category));
        }
    }

    #[rstest]
    fn labels_cover_every_category() {
        for category in PolicyCategory::ALL {
            assert_eq!(IdentifierLabels.label(category), category.as_str());
            assert!(!JapaneseLabels.label(category).is_empty());
        }
        assert_eq!(JapaneseLabels.label(PolicyCategory::Economy), "経済政策");
    }
}

//! The fixed rule set a validator runs with.

/// Phrases that signal speculation rather than a grounded statement.
///
/// Matched as lower-case substrings, not on word boundaries.
pub const HEDGING_MARKERS: &[&str] = &[
    "i think",
    "probably",
    "might be",
    "it seems",
    "appears to",
    "reportedly",
    "sources say",
    "likely to",
    "may have",
    "could be",
    "possibly",
    "perhaps",
    "we believe",
    "in our opinion",
];

/// Longest accepted disclosure text, in characters.
pub const MAX_DISCLOSURE_CHARS: usize = 2000;

/// Immutable configuration for a [`crate::GroundingValidator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroundingRules {
    markers: Vec<String>,
    max_disclosure_chars: usize,
}

impl GroundingRules {
    /// Rules with a custom marker set and length limit.
    ///
    /// Markers are lower-cased and blank entries dropped; duplicates are
    /// removed keeping the first occurrence so each marker reports once.
    pub fn new<I, S>(markers: I, max_disclosure_chars: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for marker in markers {
            let marker = marker.as_ref().trim().to_lowercase();
            if !marker.is_empty() && !normalized.contains(&marker) {
                normalized.push(marker);
            }
        }
        Self {
            markers: normalized,
            max_disclosure_chars,
        }
    }

    /// Replace the marker list, keeping the length limit.
    #[must_use]
    pub fn with_markers<I, S>(self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(markers, self.max_disclosure_chars)
    }

    /// Replace the length limit, keeping the markers.
    #[must_use]
    pub const fn with_max_disclosure_chars(mut self, max: usize) -> Self {
        self.max_disclosure_chars = max;
        self
    }

    #[must_use]
    pub fn markers(&self) -> &[String] {
        &self.markers
    }

    #[must_use]
    pub const fn max_disclosure_chars(&self) -> usize {
        self.max_disclosure_chars
    }

    /// Every marker contained in `lowered`, in marker-list order.
    pub(crate) fn markers_in<'a>(&'a self, lowered: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.markers
            .iter()
            .map(String::as_str)
            .filter(move |marker| lowered.contains(*marker))
    }
}

impl Default for GroundingRules {
    fn default() -> Self {
        Self::new(HEDGING_MARKERS.iter().copied(), MAX_DISCLOSURE_CHARS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_builtin_markers() {
        let rules = GroundingRules::default();
        assert_eq!(rules.markers().len(), HEDGING_MARKERS.len());
        assert_eq!(rules.max_disclosure_chars(), 2000);
    }

    #[test]
    fn custom_markers_are_normalized() {
        let rules = GroundingRules::default().with_markers(["  Allegedly ", "", "allegedly", "Rumor"]);
        assert_eq!(rules.markers(), ["allegedly", "rumor"]);
        assert_eq!(rules.max_disclosure_chars(), MAX_DISCLOSURE_CHARS);
    }

    #[test]
    fn markers_in_reports_substrings() {
        let rules = GroundingRules::default();
        let found: Vec<&str> = rules
            .markers_in("the tenant will possibly default, perhaps soon")
            .collect();
        assert_eq!(found, vec!["possibly", "perhaps"]);
    }
}

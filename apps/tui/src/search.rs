use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Country names offered by the search box.
#[derive(Debug, Clone, Default)]
pub struct CountryIndex {
    names: Vec<String>,
}

impl CountryIndex {
    pub const fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Best-ranked names for `query`, highest score first, ties in name order.
    pub fn suggest(&self, query: &str, limit: usize) -> Vec<&str> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        let matcher = SkimMatcherV2::default().ignore_case();
        let mut scored: Vec<(i64, &str)> = self
            .names
            .iter()
            .filter_map(|name| {
                matcher
                    .fuzzy_match(name, query)
                    .map(|score| (score, name.as_str()))
            })
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored.into_iter().take(limit).map(|(_, name)| name).collect()
    }

    /// Exact match ignoring case, otherwise the best fuzzy match.
    pub fn resolve(&self, query: &str) -> Option<&str> {
        let trimmed = query.trim();
        self.names
            .iter()
            .find(|name| name.eq_ignore_ascii_case(trimmed))
            .map(String::as_str)
            .or_else(|| self.suggest(trimmed, 1).into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> CountryIndex {
        CountryIndex::new(
            ["Finland", "France", "Iceland", "Ireland", "Norway"]
                .iter()
                .map(|name| (*name).to_string())
                .collect(),
        )
    }

    #[test]
    fn exact_match_wins_regardless_of_case() {
        assert_eq!(index().resolve("  norway "), Some("Norway"));
        assert_eq!(index().resolve("FRANCE"), Some("France"));
    }

    #[test]
    fn fuzzy_match_fills_in_partial_names() {
        assert_eq!(index().resolve("finl"), Some("Finland"));
        assert!(index().suggest("land", 5).contains(&"Iceland"));
    }

    #[test]
    fn nothing_matches_nonsense() {
        assert_eq!(index().resolve("zzzz"), None);
        assert!(index().suggest("", 5).is_empty());
    }

    #[test]
    fn suggestions_respect_the_limit() {
        assert!(index().suggest("n", 2).len() <= 2);
    }
}

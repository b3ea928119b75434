//! Content filter: suppresses adult-flagged and denylisted titles.
//!
//! Best effort only. Paraphrases slip through; this is a display policy,
//! not a security boundary.

use scout_core::MovieSummary;

/// Terms rejected in titles and overviews.
pub const DEFAULT_DENYLIST: &[&str] = &["sex", "explicit", "adult", "stepmom"];

/// Predicate over movies, applied to every fetched result set before display.
#[derive(Debug, Clone)]
pub struct ContentFilter {
    /// Lowercased terms.
    denylist: Vec<String>,
}

impl ContentFilter {
    /// Filter with the default denylist.
    pub fn new() -> Self {
        Self::with_terms(DEFAULT_DENYLIST.iter().copied())
    }

    /// Filter with exactly these terms. Blank terms are ignored.
    pub fn with_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut filter = Self {
            denylist: Vec::new(),
        };
        filter.extend(terms);
        filter
    }

    /// Add site-specific terms to the denylist.
    pub fn extend<I, S>(&mut self, terms: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for term in terms {
            let term = term.as_ref().trim().to_lowercase();
            if !term.is_empty() && !self.denylist.contains(&term) {
                self.denylist.push(term);
            }
        }
    }

    pub fn terms(&self) -> &[String] {
        &self.denylist
    }

    /// Whether a movie may be shown.
    pub fn is_allowed(&self, movie: &MovieSummary) -> bool {
        if movie.adult {
            return false;
        }

        let title = movie.title.to_lowercase();
        let overview = movie.overview.to_lowercase();
        !self
            .denylist
            .iter()
            .any(|term| title.contains(term.as_str()) || overview.contains(term.as_str()))
    }

    /// Keep only allowed movies, preserving order.
    pub fn retain_allowed(&self, movies: Vec<MovieSummary>) -> Vec<MovieSummary> {
        movies.into_iter().filter(|m| self.is_allowed(m)).collect()
    }

    /// Filter raw search results for `query`.
    ///
    /// Applies the content policy, then re-checks that each title contains
    /// the query case-insensitively; the catalog's own relevance matching
    /// is looser than what the results list should show.
    pub fn refine_search(&self, query: &str, movies: Vec<MovieSummary>) -> Vec<MovieSummary> {
        let needle = query.trim().to_lowercase();
        movies
            .into_iter()
            .filter(|m| self.is_allowed(m))
            .filter(|m| m.title.to_lowercase().contains(&needle))
            .collect()
    }
}

impl Default for ContentFilter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_adult_flag_always_rejected() {
        let filter = ContentFilter::new();
        let movie = MovieSummary::new(1, "Paddington")
            .with_overview("A bear in London.")
            .with_adult(true);
        assert!(!filter.is_allowed(&movie));
    }

    #[test]
    fn test_denylisted_title_rejected_case_insensitively() {
        let filter = ContentFilter::new();
        assert!(!filter.is_allowed(&MovieSummary::new(1, "Explicit Secrets")));
        assert!(!filter.is_allowed(&MovieSummary::new(2, "My STEPMOM")));
    }

    #[test]
    fn test_denylisted_overview_rejected() {
        let filter = ContentFilter::new();
        let movie = MovieSummary::new(1, "Harmless Title").with_overview("Contains Adult themes.");
        assert!(!filter.is_allowed(&movie));
    }

    #[test]
    fn test_clean_movie_allowed() {
        let filter = ContentFilter::new();
        let movie = MovieSummary::new(1, "Arrival").with_overview("Linguist meets aliens.");
        assert!(filter.is_allowed(&movie));
    }

    #[test]
    fn test_site_specific_terms() {
        let mut filter = ContentFilter::new();
        filter.extend([" Gore ", "", "gore"]);
        assert_eq!(filter.terms().iter().filter(|t| *t == "gore").count(), 1);
        assert!(!filter.is_allowed(&MovieSummary::new(1, "Gore Fest")));
    }

    #[test]
    fn test_refine_search_rechecks_title() {
        let filter = ContentFilter::new();
        let movies = vec![
            MovieSummary::new(1, "Alien"),
            MovieSummary::new(2, "Prometheus").with_overview("An alien world."),
            MovieSummary::new(3, "Aliens"),
            MovieSummary::new(4, "Alien Adult Cut"),
        ];
        let refined = filter.refine_search(" ALIEN ", movies);
        let ids: Vec<u64> = refined.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    proptest! {
        #[test]
        fn prop_adult_rejected_regardless_of_text(title in ".*", overview in ".*") {
            let filter = ContentFilter::new();
            let movie = MovieSummary::new(1, title).with_overview(overview).with_adult(true);
            prop_assert!(!filter.is_allowed(&movie));
        }

        #[test]
        fn prop_denylisted_term_anywhere_rejected(
            prefix in "[a-z ]{0,12}",
            suffix in "[a-z ]{0,12}",
            idx in 0usize..DEFAULT_DENYLIST.len(),
            upper in any::<bool>(),
        ) {
            let term = if upper {
                DEFAULT_DENYLIST[idx].to_uppercase()
            } else {
                DEFAULT_DENYLIST[idx].to_string()
            };
            let filter = ContentFilter::new();
            let movie = MovieSummary::new(1, format!("{prefix}{term}{suffix}"));
            prop_assert!(!filter.is_allowed(&movie));
        }
    }
}

//! Keyword Scorer: counts whole-word taxonomy term occurrences per category.
//!
//! Patterns are `\b<escaped term>\b`, compiled once per process. Counting uses
//! non-overlapping leftmost matches, so "java" never matches inside "javascript".

use once_cell::sync::Lazy;
use regex::Regex;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::screening::taxonomy::{Category, CATEGORY_COUNT};

/// Compiled term patterns, indexed by `Category as usize`, in term declaration order.
static TERM_PATTERNS: Lazy<Vec<Vec<Regex>>> = Lazy::new(|| {
    Category::ALL
        .iter()
        .map(|category| {
            category
                .keywords()
                .iter()
                .map(|term| compile_term(term))
                .collect()
        })
        .collect()
});

fn compile_term(term: &str) -> Regex {
    Regex::new(&format!(r"\b{}\b", regex::escape(term))).expect("escaped term regex")
}

/// Per-document keyword tally for each category plus the synthetic `total`.
///
/// Built only through `score` (or `from_counts` in tests), both of which keep
/// `total` equal to the sum of the sixteen category counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategoryCounts {
    counts: [u32; CATEGORY_COUNT],
    total: u32,
}

impl CategoryCounts {
    /// Builds counts from explicit (category, count) pairs. Missing categories are zero;
    /// a category given twice keeps the last value.
    #[cfg(test)]
    pub(crate) fn from_counts<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Category, u32)>,
    {
        let mut counts = [0u32; CATEGORY_COUNT];
        for (category, count) in pairs {
            counts[category as usize] = count;
        }
        Self::from_array(counts)
    }

    fn from_array(counts: [u32; CATEGORY_COUNT]) -> Self {
        let total = counts.iter().sum();
        Self { counts, total }
    }

    pub fn get(&self, category: Category) -> u32 {
        self.counts[category as usize]
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    /// (category, count) pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, u32)> + '_ {
        Category::ALL.iter().map(move |&c| (c, self.get(c)))
    }

    /// Copy with one category replaced; `total` is recomputed.
    #[cfg(test)]
    pub(crate) fn with(&self, category: Category, count: u32) -> Self {
        let mut counts = self.counts;
        counts[category as usize] = count;
        Self::from_array(counts)
    }
}

impl Serialize for CategoryCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(CATEGORY_COUNT + 1))?;
        for (category, count) in self.iter() {
            map.serialize_entry(category.as_str(), &count)?;
        }
        map.serialize_entry("total", &self.total)?;
        map.end()
    }
}

/// Count of one taxonomy term within a document.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct KeywordHit {
    pub keyword: &'static str,
    pub count: u32,
}

/// Scores already-lowercased text against the full taxonomy.
pub fn score(text: &str) -> CategoryCounts {
    let mut counts = [0u32; CATEGORY_COUNT];
    for (slot, patterns) in counts.iter_mut().zip(TERM_PATTERNS.iter()) {
        *slot = patterns.iter().map(|re| count_matches(re, text)).sum();
    }
    CategoryCounts::from_array(counts)
}

/// Per-term counts for a single category, in term declaration order.
pub fn keyword_hits(text: &str, category: Category) -> Vec<KeywordHit> {
    category
        .keywords()
        .iter()
        .zip(TERM_PATTERNS[category as usize].iter())
        .map(|(&keyword, re)| KeywordHit {
            keyword,
            count: count_matches(re, text),
        })
        .collect()
}

fn count_matches(re: &Regex, text: &str) -> u32 {
    re.find_iter(text).count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_keyword(text: &str, keyword: &str) -> u32 {
        count_matches(&compile_term(keyword), text)
    }

    fn hit(text: &str, category: Category, keyword: &str) -> u32 {
        keyword_hits(text, category)
            .into_iter()
            .find(|h| h.keyword == keyword)
            .map(|h| h.count)
            .unwrap()
    }

    #[test]
    fn test_empty_text_is_all_zero() {
        let counts = score("");
        assert_eq!(counts.total(), 0);
        assert!(counts.iter().all(|(_, n)| n == 0));
        assert_eq!(counts, CategoryCounts::default());
    }

    #[test]
    fn test_java_does_not_match_inside_javascript() {
        assert_eq!(hit("javascript developer", Category::Programming, "java"), 0);
        assert_eq!(hit("javascript developer", Category::Programming, "javascript"), 1);
        assert_eq!(hit("java developer", Category::Programming, "java"), 1);
    }

    #[test]
    fn test_multi_word_phrase_counts_every_occurrence() {
        let text = "machine learning engineer. machine learning, again machine learning";
        assert_eq!(hit(text, Category::DataScience, "machine learning"), 3);
        assert_eq!(score(text).get(Category::DataScience), 3);
    }

    #[test]
    fn test_phrase_requires_boundaries_on_both_sides() {
        assert_eq!(count_keyword("restful apis", "rest"), 0);
        assert_eq!(count_keyword("rest api", "rest"), 1);
        assert_eq!(count_keyword("unreact", "react"), 0);
        assert_eq!(count_keyword("react.", "react"), 1);
    }

    #[test]
    fn test_matching_is_case_sensitive_as_given() {
        // Callers lowercase first; uppercase text is not normalized here.
        assert_eq!(count_keyword("Python", "python"), 0);
        assert_eq!(count_keyword("python", "python"), 1);
    }

    #[test]
    fn test_single_letter_r_is_whole_word() {
        assert_eq!(hit("r and python", Category::Programming, "r"), 1);
        assert_eq!(hit("ruby rust", Category::Programming, "r"), 0);
    }

    #[test]
    fn test_cpp_follows_word_boundary_semantics() {
        // `\bc\+\+\b` needs a word character right after "++".
        assert_eq!(hit("c++ developer", Category::Programming, "c++"), 0);
        assert_eq!(hit("c++11", Category::Programming, "c++"), 1);
    }

    #[test]
    fn test_slash_term_matches() {
        assert_eq!(hit("ui/ux design", Category::Graphic, "ui/ux"), 1);
    }

    #[test]
    fn test_shared_term_counts_in_both_categories() {
        let counts = score("sql");
        assert_eq!(counts.get(Category::DataAnalytics), 1);
        assert_eq!(counts.get(Category::Programming), 1);
        assert_eq!(counts.total(), 2);
    }

    #[test]
    fn test_seo_counts_in_three_categories() {
        let counts = score("seo");
        assert_eq!(counts.get(Category::Web), 1);
        assert_eq!(counts.get(Category::SalesMarketing), 1);
        assert_eq!(counts.get(Category::Content), 1);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn test_overlapping_terms_across_categories_both_count() {
        // "social media content" is a content term; "social media" is a sales term.
        let counts = score("social media content");
        assert_eq!(counts.get(Category::Content), 1);
        assert_eq!(counts.get(Category::SalesMarketing), 1);
    }

    #[test]
    fn test_overlapping_terms_within_category_both_count() {
        // "marketing" and "digital marketing" are both sales terms.
        let counts = score("digital marketing");
        assert_eq!(counts.get(Category::SalesMarketing), 2);
        assert_eq!(hit("digital marketing", Category::SalesMarketing, "marketing"), 1);
        assert_eq!(
            hit("digital marketing", Category::SalesMarketing, "digital marketing"),
            1
        );
        assert_eq!(counts.total(), 2);
    }

    #[test]
    fn test_total_is_sum_of_categories() {
        let text = "python java sql tableau excel communication teamwork surgery english \
                    machine learning regression docker react html css seo valuation";
        let counts = score(text);
        let sum: u32 = counts.iter().map(|(_, n)| n).sum();
        assert_eq!(counts.total(), sum);
        assert!(counts.total() > 0);
    }

    #[test]
    fn test_from_counts_recomputes_total() {
        let counts =
            CategoryCounts::from_counts([(Category::Software, 10), (Category::Programming, 2)]);
        assert_eq!(counts.total(), 12);
        let bumped = counts.with(Category::Languages, 8);
        assert_eq!(bumped.total(), 20);
        assert_eq!(bumped.get(Category::Software), 10);
    }

    #[test]
    fn test_serializes_as_map_with_total() {
        let counts = CategoryCounts::from_counts([(Category::Finance, 3)]);
        let value = serde_json::to_value(counts).unwrap();
        assert_eq!(value["finance"], 3);
        assert_eq!(value["languages"], 0);
        assert_eq!(value["total"], 3);
        assert_eq!(value.as_object().unwrap().len(), CATEGORY_COUNT + 1);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let text = "agile scrum kubernetes aws azure data analysis";
        assert_eq!(score(text), score(text));
    }
}

//! Keyword-based task categorization.

use crate::config::ServiceConfig;
use crate::nlp::Normalizer;
use crate::taxonomy::Taxonomy;

/// Sentinel category for tasks that match no keyword.
pub const OTHER_CATEGORY: &str = "Other";

/// Assigns one category to a task description.
///
/// Immutable after construction; safe to share across request handlers
/// without synchronization.
pub struct Tagger {
    taxonomy: Taxonomy,
    normalizer: Normalizer,
}

impl Tagger {
    pub fn new(taxonomy: Taxonomy, normalizer: Normalizer) -> Self {
        Tagger {
            taxonomy,
            normalizer,
        }
    }

    /// Build a tagger with the built-in taxonomy and the configured normalizer.
    pub fn from_config(config: &ServiceConfig) -> Self {
        Tagger::new(Taxonomy::builtin(), Normalizer::load(config))
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    /// Categorize a task description.
    ///
    /// With a normalizer: tokens are scanned left to right and each token's
    /// lemma is compared against category keywords in declaration order; the
    /// first hit wins. Without one: keyword containment is checked against
    /// the whole lowercased task, category then keyword order.
    ///
    /// Always returns a category name or [`OTHER_CATEGORY`]. Empty and
    /// whitespace-only input simply matches nothing.
    pub fn categorize(&self, task: &str) -> &str {
        let lowered = task.to_lowercase();

        match &self.normalizer {
            Normalizer::Available(pipeline) => {
                for token in pipeline.analyze(&lowered) {
                    for category in self.taxonomy.iter() {
                        if category.keywords.iter().any(|k| k == token.lemma()) {
                            return &category.name;
                        }
                    }
                }
                OTHER_CATEGORY
            }
            Normalizer::Unavailable => {
                for category in self.taxonomy.iter() {
                    for keyword in &category.keywords {
                        if lowered.contains(keyword.as_str()) {
                            return &category.name;
                        }
                    }
                }
                OTHER_CATEGORY
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MatchMode;

    fn lemma_tagger() -> Tagger {
        Tagger::from_config(&ServiceConfig::default())
    }

    fn substring_tagger() -> Tagger {
        Tagger::from_config(&ServiceConfig {
            match_mode: MatchMode::Substring,
            ..ServiceConfig::default()
        })
    }

    #[test]
    fn categorizes_the_worked_examples() {
        let tagger = lemma_tagger();
        assert_eq!(tagger.categorize("Buy milk and bread"), "Shopping");
        assert_eq!(tagger.categorize("Finish project report"), "Work");
        assert_eq!(tagger.categorize("Go to the gym"), "Health");
        assert_eq!(tagger.categorize("Call mom about birthday"), "Personal");
        assert_eq!(tagger.categorize("Book flight tickets"), "Other");
    }

    #[test]
    fn lemma_mode_matches_inflected_forms() {
        let tagger = lemma_tagger();
        assert_eq!(tagger.categorize("Buying groceries for dinner"), "Shopping");
        assert_eq!(tagger.categorize("I ran five miles"), "Health");
        assert_eq!(tagger.categorize("Called the doctor"), "Personal");
    }

    #[test]
    fn first_matching_token_wins() {
        // "call" appears before "birthday" in the text; both belong to
        // Personal, but "call" also decides before any later token is seen.
        let tagger = lemma_tagger();
        assert_eq!(tagger.categorize("call about the project"), "Personal");
        // Reversed wording flips the winner to the earlier token.
        assert_eq!(tagger.categorize("project update call"), "Work");
    }

    #[test]
    fn substring_mode_matches_the_same_examples() {
        let tagger = substring_tagger();
        assert_eq!(tagger.categorize("Buy milk and bread"), "Shopping");
        assert_eq!(tagger.categorize("Finish project report"), "Work");
        assert_eq!(tagger.categorize("Go to the gym"), "Health");
        assert_eq!(tagger.categorize("Book flight tickets"), "Other");
    }

    #[test]
    fn substring_mode_uses_category_order_not_position() {
        // "email" (Work) appears later in the text than "visit" (Personal),
        // but Shopping/Work categories are scanned before Personal.
        let tagger = substring_tagger();
        assert_eq!(tagger.categorize("visit the office to email"), "Work");
    }

    #[test]
    fn substring_mode_misses_inflections() {
        let tagger = substring_tagger();
        // "bought" does not contain any keyword, unlike its lemma "buy".
        assert_eq!(tagger.categorize("bought bread"), "Other");
    }

    #[test]
    fn empty_and_whitespace_are_well_defined() {
        let tagger = lemma_tagger();
        assert_eq!(tagger.categorize(""), OTHER_CATEGORY);
        assert_eq!(tagger.categorize("   "), OTHER_CATEGORY);

        let tagger = substring_tagger();
        assert_eq!(tagger.categorize(""), OTHER_CATEGORY);
        assert_eq!(tagger.categorize("   "), OTHER_CATEGORY);
    }

    #[test]
    fn categorize_is_idempotent() {
        let tagger = lemma_tagger();
        let first = tagger.categorize("Buy milk and bread").to_string();
        let second = tagger.categorize("Buy milk and bread").to_string();
        assert_eq!(first, second);
    }

    #[test]
    fn tokens_mode_matches_exact_forms_only() {
        let tagger = Tagger::from_config(&ServiceConfig {
            match_mode: MatchMode::Tokens,
            ..ServiceConfig::default()
        });
        assert_eq!(tagger.categorize("buy bread"), "Shopping");
        assert_eq!(tagger.categorize("buying bread"), "Other");
    }
}

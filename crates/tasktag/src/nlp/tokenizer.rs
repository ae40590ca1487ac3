/// Split text into words: by whitespace, strip non-alphanumeric edges, lowercase.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|word| {
            word.trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .filter(|word| !word.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_splits() {
        assert_eq!(tokenize("Buy Milk"), vec!["buy", "milk"]);
    }

    #[test]
    fn strips_punctuation_edges() {
        assert_eq!(
            tokenize("Call mom, about (birthday)!"),
            vec!["call", "mom", "about", "birthday"]
        );
    }

    #[test]
    fn empty_and_whitespace_input() {
        assert_eq!(tokenize(""), Vec::<String>::new());
        assert_eq!(tokenize("   "), Vec::<String>::new());
    }

    #[test]
    fn punctuation_only_tokens_are_dropped() {
        assert_eq!(tokenize("a -- b"), vec!["a", "b"]);
    }
}

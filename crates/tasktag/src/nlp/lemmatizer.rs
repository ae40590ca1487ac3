use std::collections::HashMap;
use std::path::Path;

use crate::error::{TagError, TagResult};

/// Irregular and inflected forms the suffix rules cannot derive.
///
/// The left column must stay lowercase; lookups happen on lowercased tokens.
const BUILTIN_LEMMAS: &[(&str, &str)] = &[
    // Irregular verbs common in task phrasing.
    ("ran", "run"),
    ("bought", "buy"),
    ("went", "go"),
    ("gone", "go"),
    ("did", "do"),
    ("done", "do"),
    ("met", "meet"),
    ("made", "make"),
    ("saw", "see"),
    ("seen", "see"),
    ("paid", "pay"),
    ("sent", "send"),
    ("got", "get"),
    ("gotten", "get"),
    ("took", "take"),
    ("taken", "take"),
    ("wrote", "write"),
    ("written", "write"),
    ("ate", "eat"),
    ("eaten", "eat"),
    ("came", "come"),
    ("found", "find"),
    ("left", "leave"),
    ("kept", "keep"),
    ("felt", "feel"),
    ("told", "tell"),
    ("thought", "think"),
    ("brought", "bring"),
    ("spent", "spend"),
    // Verbs whose base form ends in "e"; stripping "ed"/"ing" would lose it.
    ("purchased", "purchase"),
    ("purchasing", "purchase"),
    ("exercised", "exercise"),
    ("exercising", "exercise"),
    ("scheduled", "schedule"),
    ("scheduling", "schedule"),
    ("invited", "invite"),
    ("inviting", "invite"),
    ("prepared", "prepare"),
    ("preparing", "prepare"),
    ("organized", "organize"),
    ("organizing", "organize"),
    // Nouns and function words ending in "ing" that are already base forms.
    ("meeting", "meeting"),
    ("evening", "evening"),
    ("morning", "morning"),
    ("wedding", "wedding"),
    ("building", "building"),
    ("everything", "everything"),
    ("something", "something"),
    ("anything", "anything"),
    ("nothing", "nothing"),
    ("during", "during"),
    // Irregular plurals.
    ("children", "child"),
    ("people", "person"),
    ("women", "woman"),
    ("men", "man"),
    ("feet", "foot"),
    ("teeth", "tooth"),
];

/// Maps inflected word forms to their base form.
///
/// Lookup order is exception dictionary first, then ordered suffix rules.
/// Words the rules do not cover come back unchanged, so the output is always
/// a usable lemma string.
#[derive(Debug, Clone)]
pub struct Lemmatizer {
    lemmas: HashMap<String, String>,
}

impl Lemmatizer {
    /// Lemmatizer backed by the built-in exception table.
    pub fn builtin() -> Self {
        let lemmas = BUILTIN_LEMMAS
            .iter()
            .map(|(form, base)| (form.to_string(), base.to_string()))
            .collect();
        Lemmatizer { lemmas }
    }

    /// Load an external dictionary (JSON object of inflected form to base
    /// form) and merge it over the built-in table. External entries win.
    pub fn load(path: &Path) -> TagResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|error| {
            TagError::Internal(format!(
                "failed to read lemma dictionary {}: {error}",
                path.display()
            ))
        })?;
        let external: HashMap<String, String> = serde_json::from_str(&raw).map_err(|error| {
            TagError::Internal(format!(
                "failed to parse lemma dictionary {}: {error}",
                path.display()
            ))
        })?;

        let mut lemmatizer = Lemmatizer::builtin();
        for (form, base) in external {
            lemmatizer
                .lemmas
                .insert(form.to_lowercase(), base.to_lowercase());
        }
        Ok(lemmatizer)
    }

    /// Base form of a single lowercased word.
    pub fn lemma(&self, word: &str) -> String {
        if let Some(base) = self.lemmas.get(word) {
            return base.clone();
        }
        apply_suffix_rules(word)
    }
}

/// Ordered suffix rules for regular inflections. First applicable rule wins.
fn apply_suffix_rules(word: &str) -> String {
    if word.len() < 4 {
        return word.to_string();
    }

    if let Some(stem) = word.strip_suffix("ies") {
        if word.len() > 4 {
            return format!("{stem}y");
        }
    }

    if word.ends_with("sses")
        || word.ends_with("xes")
        || word.ends_with("zes")
        || word.ends_with("ches")
        || word.ends_with("shes")
    {
        return word[..word.len() - 2].to_string();
    }

    if word.ends_with('s') && !word.ends_with("ss") && !word.ends_with("us") && !word.ends_with("is")
    {
        return word[..word.len() - 1].to_string();
    }

    if word.len() > 5 {
        if let Some(stem) = word.strip_suffix("ing") {
            return undouble(stem);
        }
    }

    if word.len() > 4 {
        if let Some(stem) = word.strip_suffix("ed") {
            return undouble(stem);
        }
    }

    word.to_string()
}

/// Drop a trailing doubled consonant left over by "ing"/"ed" stripping
/// ("shopp" to "shop"), keeping "ll" and "ss" which are legitimate endings.
fn undouble(stem: &str) -> String {
    let bytes = stem.as_bytes();
    if bytes.len() >= 2 {
        let last = bytes[bytes.len() - 1];
        let prev = bytes[bytes.len() - 2];
        if last == prev && last.is_ascii_alphabetic() && !matches!(last, b'l' | b's' | b'a' | b'e' | b'i' | b'o' | b'u') {
            return stem[..stem.len() - 1].to_string();
        }
    }
    stem.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn irregular_forms_use_the_exception_table() {
        let lemmatizer = Lemmatizer::builtin();
        assert_eq!(lemmatizer.lemma("ran"), "run");
        assert_eq!(lemmatizer.lemma("bought"), "buy");
        assert_eq!(lemmatizer.lemma("purchasing"), "purchase");
    }

    #[test]
    fn ing_forms_strip_and_undouble() {
        let lemmatizer = Lemmatizer::builtin();
        assert_eq!(lemmatizer.lemma("buying"), "buy");
        assert_eq!(lemmatizer.lemma("running"), "run");
        assert_eq!(lemmatizer.lemma("shopping"), "shop");
        assert_eq!(lemmatizer.lemma("calling"), "call");
    }

    #[test]
    fn ed_forms_strip() {
        let lemmatizer = Lemmatizer::builtin();
        assert_eq!(lemmatizer.lemma("called"), "call");
        assert_eq!(lemmatizer.lemma("visited"), "visit");
        assert_eq!(lemmatizer.lemma("ordered"), "order");
    }

    #[test]
    fn plural_forms_strip() {
        let lemmatizer = Lemmatizer::builtin();
        assert_eq!(lemmatizer.lemma("groceries"), "grocery");
        assert_eq!(lemmatizer.lemma("families"), "family");
        assert_eq!(lemmatizer.lemma("emails"), "email");
        assert_eq!(lemmatizer.lemma("deadlines"), "deadline");
    }

    #[test]
    fn ing_nouns_stay_intact() {
        let lemmatizer = Lemmatizer::builtin();
        assert_eq!(lemmatizer.lemma("meeting"), "meeting");
        assert_eq!(lemmatizer.lemma("meetings"), "meeting");
    }

    #[test]
    fn short_and_base_words_pass_through() {
        let lemmatizer = Lemmatizer::builtin();
        assert_eq!(lemmatizer.lemma("gym"), "gym");
        assert_eq!(lemmatizer.lemma("milk"), "milk");
        assert_eq!(lemmatizer.lemma("call"), "call");
    }

    #[test]
    fn external_dictionary_merges_over_builtin() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        write!(file, r#"{{"Apptmts": "appointment", "ran": "sprint"}}"#).expect("write");

        let lemmatizer = Lemmatizer::load(file.path()).expect("load");
        assert_eq!(lemmatizer.lemma("apptmts"), "appointment");
        // External entry overrides the built-in one.
        assert_eq!(lemmatizer.lemma("ran"), "sprint");
        // Untouched built-in entries survive.
        assert_eq!(lemmatizer.lemma("bought"), "buy");
    }

    #[test]
    fn load_rejects_missing_file() {
        let result = Lemmatizer::load(Path::new("/nonexistent/lemmas.json"));
        assert!(result.is_err());
    }
}

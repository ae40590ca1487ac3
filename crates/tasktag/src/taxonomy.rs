//! Static category table the tagger matches against.

/// A category and the keywords that hint at it.
///
/// Keywords are stored lowercased; matching never has to re-normalize them.
#[derive(Debug, Clone)]
pub struct Category {
    pub name: String,
    pub keywords: Vec<String>,
}

/// Ordered category table.
///
/// Declaration order is the tie-break for matching: the first category whose
/// keyword matches wins, so iteration order must be stable.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    categories: Vec<Category>,
}

impl Taxonomy {
    pub fn new() -> Self {
        Taxonomy {
            categories: Vec::new(),
        }
    }

    /// Register a category. Keywords are lowercased at registration.
    pub fn register(&mut self, name: &str, keywords: &[&str]) {
        self.categories.push(Category {
            name: name.to_string(),
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        });
    }

    /// The built-in task taxonomy.
    pub fn builtin() -> Self {
        let mut taxonomy = Taxonomy::new();
        taxonomy.register(
            "Shopping",
            &["buy", "purchase", "order", "milk", "grocery", "shop"],
        );
        taxonomy.register("Work", &["email", "report", "meeting", "project", "deadline"]);
        taxonomy.register("Health", &["exercise", "run", "gym", "doctor", "medicine"]);
        taxonomy.register(
            "Personal",
            &["call", "visit", "family", "friend", "birthday"],
        );
        taxonomy
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::builtin()
    }
}

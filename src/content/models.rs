//! Data models for deck content.

use serde::{Deserialize, Serialize};

/// Concrete content categories providers can be registered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    History,
    Science,
    Space,
    Nature,
    Tech,
}

impl Category {
    /// Declaration order; also the fan-out order for [`Subject::All`].
    pub const ALL: [Category; 5] = [
        Category::History,
        Category::Science,
        Category::Space,
        Category::Nature,
        Category::Tech,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Category::History => "history",
            Category::Science => "science",
            Category::Space => "space",
            Category::Nature => "nature",
            Category::Tech => "tech",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::History => "History",
            Category::Science => "Science",
            Category::Space => "Space",
            Category::Nature => "Nature",
            Category::Tech => "Tech",
        }
    }

    pub fn from_key(key: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.key() == key)
    }
}

/// A deck subject: a concrete category or the synthetic "all" selector that
/// fans out across every registered category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subject {
    All,
    Category(Category),
}

impl Subject {
    /// Every selectable subject, in the order a selector menu lists them.
    pub const ALL_SUBJECTS: [Subject; 6] = [
        Subject::All,
        Subject::Category(Category::History),
        Subject::Category(Category::Science),
        Subject::Category(Category::Space),
        Subject::Category(Category::Nature),
        Subject::Category(Category::Tech),
    ];

    pub fn key(self) -> &'static str {
        match self {
            Subject::All => "all",
            Subject::Category(category) => category.key(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Subject::All => "All categories",
            Subject::Category(category) => category.label(),
        }
    }

    pub fn from_key(key: &str) -> Option<Subject> {
        if key == "all" {
            Some(Subject::All)
        } else {
            Category::from_key(key).map(Subject::Category)
        }
    }

    pub fn category(self) -> Option<Category> {
        match self {
            Subject::All => None,
            Subject::Category(category) => Some(category),
        }
    }
}

impl Default for Subject {
    fn default() -> Self {
        Subject::All
    }
}

/// One unit of content produced by a provider. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub text: String,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Item {
    pub fn new(text: impl Into<String>, category: Category) -> Self {
        Self {
            title: None,
            text: text.into(),
            category,
            source_url: None,
            image_url: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = Some(url.into());
        self
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Same item filed under a different category (seed re-tagging).
    pub fn retagged(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Formatted text block for the clipboard fallback of the share action:
    /// title, text and source URL joined by blank lines, empty parts skipped.
    pub fn share_text(&self) -> String {
        let title = self
            .title
            .clone()
            .unwrap_or_else(|| format!("Interesting {} fact", self.category.key()));
        let mut parts = vec![title, self.text.clone()];
        if let Some(url) = &self.source_url {
            parts.push(url.clone());
        }
        parts.retain(|p| !p.is_empty());
        parts.join("\n\n")
    }
}

/// Built-in fallback facts used when neither a live fetch nor the cache has
/// anything to show.
pub fn seed_items() -> Vec<Item> {
    vec![
        Item::new("Honey never spoils.", Category::History).with_title("Quick fact"),
        Item::new("Bananas are berries.", Category::Science).with_title("Quick fact"),
        Item::new("Neutron stars can spin fast.", Category::Space).with_title("Quick fact"),
        Item::new("Octopuses have three hearts.", Category::Nature).with_title("Quick fact"),
        Item::new("Apollo guidance had ~64KB RAM.", Category::Tech).with_title("Quick fact"),
    ]
}

/// Seed items for a subject: re-tagged to the category when one is selected,
/// left under their own categories for the "all" selector.
pub fn seeds_for(subject: Subject) -> Vec<Item> {
    let seeds = seed_items();
    match subject.category() {
        Some(category) => seeds
            .into_iter()
            .map(|item| item.retagged(category))
            .collect(),
        None => seeds,
    }
}

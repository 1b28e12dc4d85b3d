use serde::{Deserialize, Serialize};

use super::Block;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub slug: String,
}

/// A statement descriptor, the key categories are matched on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Concept {
    pub name: String,
    pub icon: String,
    pub short_name: String,
    pub tags: Vec<Tag>,
    pub category_short_name: String,
}

impl Concept {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// The concept a manual pick of `category` for `block` produces.
    pub fn learned_from(block: &Block, category: &Category) -> Self {
        Self {
            name: block.concept.name.clone(),
            icon: category.icon.clone(),
            short_name: block.concept.name.clone(),
            tags: block.concept.tags.clone(),
            category_short_name: category.short_name.clone(),
        }
    }
}

/// A catalog entry. `Category::default()` is the unknown category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    pub name: String,
    pub short_name: String,
    pub icon: String,
    pub color: String,
    pub subcategory: String,
    pub tags: Vec<Tag>,
    pub concepts: Vec<Concept>,
}

impl Category {
    pub fn new(name: impl Into<String>, short_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            short_name: short_name.into(),
            ..Self::default()
        }
    }

    pub fn with_subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = subcategory.into();
        self
    }

    pub fn with_concepts<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.concepts.extend(names.into_iter().map(Concept::new));
        self
    }

    pub fn is_unknown(&self) -> bool {
        self.name.is_empty()
    }

    pub fn has_concept(&self, name: &str) -> bool {
        self.concepts.iter().any(|c| c.name == name)
    }

    /// Copy of the descriptive fields, without the concept list.
    pub fn descriptor(&self) -> Self {
        Self {
            name: self.name.clone(),
            short_name: self.short_name.clone(),
            icon: self.icon.clone(),
            color: self.color.clone(),
            subcategory: self.subcategory.clone(),
            tags: self.tags.clone(),
            concepts: Vec::new(),
        }
    }

    /// Display stand-in for a block nobody has categorized yet.
    pub fn placeholder_for(concept: &Concept) -> Self {
        Self {
            name: "?".into(),
            short_name: "Desconocido".into(),
            icon: "❓".into(),
            concepts: vec![concept.clone()],
            ..Self::default()
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.icon.is_empty() {
            write!(f, "{}", self.short_name)
        } else {
            write!(f, "{} {}", self.icon, self.short_name)
        }
    }
}

/// Stable sort for category pickers. Reordering a catalog changes which
/// entry wins a shared concept.
pub fn sort_by_short_name(categories: &mut [Category]) {
    categories.sort_by(|a, b| a.short_name.cmp(&b.short_name));
}

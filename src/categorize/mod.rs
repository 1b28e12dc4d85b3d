use std::collections::{HashMap, HashSet};

use crate::models::{Block, Category, Concept};

/// Concepts that never auto-categorize. The savings-box transfer is booked
/// under one literal for both directions, so the user files it by hand.
pub const DEFAULT_RESERVED_CONCEPTS: &[&str] = &["TRANSFER.HUCHA DIGI"];

/// Categorize one concept against a catalog, first match wins.
///
/// Returns the unknown category (`Category::default()`) when nothing matches
/// or the concept is reserved.
pub fn assign_category(concept: &str, catalog: &[Category]) -> Category {
    CategoryMatcher::new(catalog).assign(concept)
}

pub struct CategoryMatcher<'a> {
    catalog: &'a [Category],
    index: HashMap<&'a str, usize>,
    reserved: HashSet<String>,
}

impl<'a> CategoryMatcher<'a> {
    pub fn new(catalog: &'a [Category]) -> Self {
        let mut index = HashMap::new();
        for (pos, category) in catalog.iter().enumerate() {
            for concept in &category.concepts {
                index.entry(concept.name.as_str()).or_insert(pos);
            }
        }

        Self {
            catalog,
            index,
            reserved: DEFAULT_RESERVED_CONCEPTS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    /// Replace the reserved concept set. An empty set disables the guard.
    pub fn with_reserved<I, S>(mut self, reserved: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reserved = reserved.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_reserved(&self, concept: &str) -> bool {
        self.reserved.contains(concept)
    }

    pub fn assign(&self, concept: &str) -> Category {
        if self.is_reserved(concept) {
            log::debug!("Concept '{concept}' is reserved for manual categorization");
            return Category::default();
        }

        match self.index.get(concept) {
            Some(&pos) => self.catalog[pos].descriptor(),
            None => {
                log::debug!("No category for concept '{concept}'");
                Category::default()
            }
        }
    }

    pub fn assign_block(&self, block: &mut Block) {
        block.category = Some(self.assign(&block.concept.name));
    }

    /// Fill every block that has no real category yet. Blocks that already
    /// carry one are left alone. Returns how many blocks this pass
    /// categorized.
    pub fn assign_batch(&self, blocks: &mut [Block]) -> usize {
        let mut matched = 0;
        for block in blocks.iter_mut().filter(|b| b.is_uncategorized()) {
            self.assign_block(block);
            if !block.is_uncategorized() {
                matched += 1;
            }
        }
        matched
    }
}

/// Record a manually learned concept on the category it names, so later
/// passes match it. Returns whether the catalog changed.
pub fn learn_concept(catalog: &mut [Category], concept: Concept) -> bool {
    let Some(category) = catalog
        .iter_mut()
        .find(|c| c.short_name == concept.category_short_name)
    else {
        log::warn!(
            "No category with short name '{}' to learn '{}'",
            concept.category_short_name,
            concept.name
        );
        return false;
    };

    if category.has_concept(&concept.name) {
        return false;
    }
    category.concepts.push(concept);
    true
}

#[cfg(test)]
mod tests;

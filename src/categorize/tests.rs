#![allow(clippy::unwrap_used)]

use super::*;
use crate::models::{Block, Category, Concept, Tag};
use rust_decimal_macros::dec;

fn make_category(name: &str, short: &str, concepts: &[&str]) -> Category {
    let mut cat = Category::new(name, short).with_concepts(concepts.iter().copied());
    cat.icon = format!("[{short}]");
    cat.color = "blue".into();
    cat.subcategory = "expense".into();
    cat.tags = vec![Tag {
        name: name.into(),
        slug: name.to_lowercase(),
    }];
    cat
}

fn make_block(concept: &str) -> Block {
    Block::new(concept, "2024-01-15", "", dec!(10.00), "500,00€")
}

// ── assign_category ───────────────────────────────────────────

#[test]
fn test_assign_exact_match() {
    let catalog = vec![make_category("Groceries", "Food", &["SUPERMARKET X"])];
    let cat = assign_category("SUPERMARKET X", &catalog);
    assert_eq!(cat.name, "Groceries");
    assert_eq!(cat.short_name, "Food");
    assert_eq!(cat.icon, "[Food]");
    assert_eq!(cat.color, "blue");
    assert_eq!(cat.subcategory, "expense");
    assert_eq!(cat.tags, catalog[0].tags);
}

#[test]
fn test_assign_does_not_copy_concepts() {
    let catalog = vec![make_category("Groceries", "Food", &["SUPERMARKET X", "BAKERY"])];
    let cat = assign_category("BAKERY", &catalog);
    assert_eq!(cat.name, "Groceries");
    assert!(cat.concepts.is_empty());
}

#[test]
fn test_assign_no_match_is_unknown() {
    let catalog = vec![make_category("Groceries", "Food", &["SUPERMARKET X"])];
    let cat = assign_category("UNKNOWN VENDOR", &catalog);
    assert_eq!(cat, Category::default());
    assert!(cat.name.is_empty());
}

#[test]
fn test_assign_is_case_and_whitespace_sensitive() {
    let catalog = vec![make_category("Groceries", "Food", &["SUPERMARKET X"])];
    assert!(assign_category("supermarket x", &catalog).is_unknown());
    assert!(assign_category(" SUPERMARKET X", &catalog).is_unknown());
    assert!(assign_category("SUPERMARKET", &catalog).is_unknown());
}

#[test]
fn test_assign_empty_catalog() {
    assert_eq!(assign_category("ANYTHING", &[]), Category::default());
}

#[test]
fn test_assign_empty_concept() {
    let catalog = vec![make_category("Groceries", "Food", &["SUPERMARKET X"])];
    assert!(assign_category("", &catalog).is_unknown());
}

#[test]
fn test_assign_first_category_wins() {
    let catalog = vec![
        make_category("First", "One", &["OTHER", "SHARED"]),
        make_category("Second", "Two", &["SHARED"]),
    ];
    assert_eq!(assign_category("SHARED", &catalog).name, "First");
}

#[test]
fn test_assign_later_category_still_reachable() {
    let catalog = vec![
        make_category("First", "One", &["A"]),
        make_category("Second", "Two", &["B"]),
        make_category("Third", "Three", &["C", "B"]),
    ];
    assert_eq!(assign_category("C", &catalog).name, "Third");
    assert_eq!(assign_category("B", &catalog).name, "Second");
}

#[test]
fn test_assign_reserved_concept_is_unknown() {
    let catalog = vec![make_category("Savings", "Hucha", &["TRANSFER.HUCHA DIGI"])];
    assert!(assign_category("TRANSFER.HUCHA DIGI", &catalog).is_unknown());
}

// ── CategoryMatcher ───────────────────────────────────────────

#[test]
fn test_matcher_agrees_with_linear_scan() {
    let catalog = vec![
        make_category("A", "a", &["X", "Y"]),
        make_category("B", "b", &["Y", "Z"]),
        make_category("C", "c", &["Z", "W"]),
    ];
    let matcher = CategoryMatcher::new(&catalog);
    for concept in ["X", "Y", "Z", "W", "V"] {
        let linear = catalog
            .iter()
            .find(|c| c.concepts.iter().any(|k| k.name == concept))
            .map(Category::descriptor)
            .unwrap_or_default();
        assert_eq!(matcher.assign(concept), linear, "concept {concept}");
    }
}

#[test]
fn test_matcher_custom_reserved() {
    let catalog = vec![
        make_category("Savings", "Hucha", &["TRANSFER.HUCHA DIGI"]),
        make_category("Cash", "ATM", &["ATM WITHDRAWAL"]),
    ];
    let matcher = CategoryMatcher::new(&catalog).with_reserved(["ATM WITHDRAWAL"]);
    assert!(matcher.is_reserved("ATM WITHDRAWAL"));
    assert!(!matcher.is_reserved("TRANSFER.HUCHA DIGI"));
    assert!(matcher.assign("ATM WITHDRAWAL").is_unknown());
    assert_eq!(matcher.assign("TRANSFER.HUCHA DIGI").name, "Savings");
}

#[test]
fn test_matcher_no_reserved() {
    let catalog = vec![make_category("Savings", "Hucha", &["TRANSFER.HUCHA DIGI"])];
    let matcher = CategoryMatcher::new(&catalog).with_reserved(Vec::<String>::new());
    assert_eq!(matcher.assign("TRANSFER.HUCHA DIGI").name, "Savings");
}

#[test]
fn test_matcher_does_not_touch_catalog() {
    let catalog = vec![make_category("Groceries", "Food", &["SUPERMARKET X"])];
    let before = catalog.clone();
    let matcher = CategoryMatcher::new(&catalog);
    let _ = matcher.assign("SUPERMARKET X");
    assert_eq!(catalog, before);
}

// ── Blocks ────────────────────────────────────────────────────

#[test]
fn test_assign_block_sets_unknown_on_miss() {
    let catalog = vec![make_category("Groceries", "Food", &["SUPERMARKET X"])];
    let matcher = CategoryMatcher::new(&catalog);
    let mut block = make_block("NOWHERE");
    matcher.assign_block(&mut block);
    assert_eq!(block.category, Some(Category::default()));
}

#[test]
fn test_assign_batch() {
    let catalog = vec![
        make_category("Groceries", "Food", &["SUPERMARKET X"]),
        make_category("Rent", "Home", &["LANDLORD"]),
    ];
    let matcher = CategoryMatcher::new(&catalog);
    let mut blocks = vec![
        make_block("SUPERMARKET X"),
        make_block("LANDLORD"),
        make_block("MYSTERY"),
    ];
    assert_eq!(matcher.assign_batch(&mut blocks), 2);
    assert_eq!(blocks[0].category.as_ref().unwrap().name, "Groceries");
    assert_eq!(blocks[1].category.as_ref().unwrap().name, "Rent");
    assert!(blocks[2].category.as_ref().unwrap().is_unknown());
}

#[test]
fn test_assign_batch_is_idempotent() {
    let catalog = vec![make_category("Groceries", "Food", &["SUPERMARKET X"])];
    let matcher = CategoryMatcher::new(&catalog);
    let mut blocks = vec![make_block("SUPERMARKET X"), make_block("MYSTERY")];
    matcher.assign_batch(&mut blocks);
    let first = blocks.clone();
    assert_eq!(matcher.assign_batch(&mut blocks), 0);
    assert_eq!(blocks, first);
}

#[test]
fn test_assign_batch_preserves_existing() {
    let catalog = vec![make_category("Groceries", "Food", &["SUPERMARKET X"])];
    let matcher = CategoryMatcher::new(&catalog);
    let mut blocks = vec![make_block("SUPERMARKET X")];
    blocks[0].category = Some(Category::new("Manual", "Pick"));
    assert_eq!(matcher.assign_batch(&mut blocks), 0);
    assert_eq!(blocks[0].category.as_ref().unwrap().name, "Manual");
}

#[test]
fn test_assign_batch_retries_unknown_after_learning() {
    let mut catalog = vec![make_category("Eating out", "Bars", &[])];
    let mut blocks = vec![make_block("BAR PEPE")];
    CategoryMatcher::new(&catalog).assign_batch(&mut blocks);
    assert!(blocks[0].is_uncategorized());

    let learned = Concept::learned_from(&blocks[0], &catalog[0]);
    assert!(learn_concept(&mut catalog, learned));
    assert_eq!(CategoryMatcher::new(&catalog).assign_batch(&mut blocks), 1);
    assert_eq!(blocks[0].category.as_ref().unwrap().name, "Eating out");
}

#[test]
fn test_assign_batch_empty() {
    let matcher = CategoryMatcher::new(&[]);
    let mut blocks: Vec<Block> = vec![];
    assert_eq!(matcher.assign_batch(&mut blocks), 0);
}

// ── learn_concept ─────────────────────────────────────────────

#[test]
fn test_learn_concept_skips_duplicates() {
    let mut catalog = vec![make_category("Eating out", "Bars", &["BAR PEPE"])];
    let mut concept = Concept::new("BAR PEPE");
    concept.category_short_name = "Bars".into();
    assert!(!learn_concept(&mut catalog, concept));
    assert_eq!(catalog[0].concepts.len(), 1);
}

#[test]
fn test_learn_concept_unknown_category() {
    let mut catalog = vec![make_category("Eating out", "Bars", &[])];
    let mut concept = Concept::new("BAR PEPE");
    concept.category_short_name = "Nope".into();
    assert!(!learn_concept(&mut catalog, concept));
    assert!(catalog[0].concepts.is_empty());
}

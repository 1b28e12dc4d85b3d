use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::{Category, Concept};

/// One statement row.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub concept: Concept,
    /// `YYYY-MM-DD`
    pub date: String,
    pub secondary_concept: String,
    /// Positive amounts are spending in the statement format this views.
    pub amount: Decimal,
    /// Running balance as the bank prints it, e.g. `"1.234,56€"`.
    pub balance: String,
    pub category: Option<Category>,
}

impl Block {
    pub fn new(
        concept: impl Into<String>,
        date: impl Into<String>,
        secondary_concept: impl Into<String>,
        amount: Decimal,
        balance: impl Into<String>,
    ) -> Self {
        Self {
            concept: Concept::new(concept),
            date: date.into(),
            secondary_concept: secondary_concept.into(),
            amount,
            balance: balance.into(),
            category: None,
        }
    }

    pub fn date_naive(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }

    /// Balance as a number; unreadable text counts as zero.
    pub fn balance_value(&self) -> Decimal {
        crate::balance::parse_balance_or_default(&self.balance)
    }

    pub fn is_uncategorized(&self) -> bool {
        self.category.as_ref().map_or(true, Category::is_unknown)
    }

    pub fn subcategory(&self) -> &str {
        self.category.as_ref().map_or("", |c| c.subcategory.as_str())
    }
}

/// Stable sort, oldest first. ISO dates order lexically.
pub fn sort_by_date(blocks: &mut [Block]) {
    blocks.sort_by(|a, b| a.date.cmp(&b.date));
}

pub fn total_amount(blocks: &[Block]) -> Decimal {
    blocks.iter().map(|b| b.amount).sum()
}

pub fn total_for_date(blocks: &[Block], date: &str) -> Decimal {
    blocks
        .iter()
        .filter(|b| b.date == date)
        .map(|b| b.amount)
        .sum()
}

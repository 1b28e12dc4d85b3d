//! Cell styling for blocks: row backgrounds, amount and balance text, and
//! per-day colors.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::balance::parse_balance_or_default_with_symbol;
use crate::config::StyleConfig;
use crate::gradient::{color_for_balance, color_for_value, CellStyle, Rgba};
use crate::models::Block;

/// Flat colors used where a block's kind overrides the gradients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub uncategorized: Rgba,
    pub settled: Rgba,
    pub savings: Rgba,
    pub withdrawal: Rgba,
    pub income: Rgba,
    pub income_text: Rgba,
    pub savings_text: Rgba,
    pub net_positive_day: Rgba,
    /// Selected calendar day that has no background of its own.
    pub selected_day: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            uncategorized: Rgba::new(192, 64, 64, 128),
            settled: Rgba::new(64, 192, 64, 128),
            savings: Rgba::new(46, 125, 50, 90),
            withdrawal: Rgba::new(183, 28, 28, 128),
            income: Rgba::new(76, 175, 80, 128),
            income_text: Rgba::opaque(0, 150, 0),
            savings_text: Rgba::opaque(46, 125, 50),
            net_positive_day: Rgba::opaque(0, 150, 0),
            selected_day: Rgba::opaque(100, 150, 255),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Income,
    Savings,
    Withdrawal,
    Other,
}

/// Subcategory tags recognised for each kind. Anything else is `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubcategoryTags {
    pub income: Vec<String>,
    pub savings: Vec<String>,
    pub withdrawal: Vec<String>,
}

impl Default for SubcategoryTags {
    fn default() -> Self {
        Self {
            income: vec!["income".into()],
            savings: vec!["savings".into(), "HUCHA_SAVE".into()],
            withdrawal: vec!["withdrawal".into(), "HUCHA_TAKE".into()],
        }
    }
}

impl SubcategoryTags {
    pub fn classify(&self, subcategory: &str) -> BlockKind {
        let has = |tags: &[String]| tags.iter().any(|t| t == subcategory);
        if has(&self.savings) {
            BlockKind::Savings
        } else if has(&self.withdrawal) {
            BlockKind::Withdrawal
        } else if has(&self.income) {
            BlockKind::Income
        } else {
            BlockKind::Other
        }
    }
}

pub(crate) fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

pub struct BlockStyler<'a> {
    config: &'a StyleConfig,
}

impl<'a> BlockStyler<'a> {
    pub fn new(config: &'a StyleConfig) -> Self {
        Self { config }
    }

    pub fn kind(&self, block: &Block) -> BlockKind {
        self.config.subcategories.classify(block.subcategory())
    }

    pub fn amount_gradient(&self, value: Decimal) -> CellStyle {
        color_for_value(to_f64(value), &self.config.amount_gradient).into()
    }

    /// Row background.
    pub fn background(&self, block: &Block) -> CellStyle {
        let palette = &self.config.palette;
        match self.kind(block) {
            BlockKind::Savings => return CellStyle::background(palette.savings),
            BlockKind::Withdrawal => return CellStyle::background(palette.withdrawal),
            BlockKind::Income => return CellStyle::background(palette.income),
            BlockKind::Other => {}
        }

        if block.is_uncategorized() {
            CellStyle::background(palette.uncategorized)
        } else if block.amount > Decimal::ZERO {
            self.amount_gradient(block.amount)
        } else {
            CellStyle::background(palette.settled)
        }
    }

    pub fn amount(&self, block: &Block) -> CellStyle {
        match self.kind(block) {
            BlockKind::Income => CellStyle::foreground(self.config.palette.income_text),
            BlockKind::Savings => CellStyle::foreground(self.config.palette.savings_text),
            BlockKind::Withdrawal | BlockKind::Other => self.amount_gradient(block.amount),
        }
    }

    pub fn balance(&self, block: &Block) -> CellStyle {
        match self.kind(block) {
            BlockKind::Income => CellStyle::foreground(self.config.palette.income_text),
            BlockKind::Savings => CellStyle::foreground(self.config.palette.savings_text),
            BlockKind::Withdrawal | BlockKind::Other => {
                let value = parse_balance_or_default_with_symbol(
                    &block.balance,
                    &self.config.currency_symbol,
                );
                color_for_balance(to_f64(value), &self.config.balance_gradient).into()
            }
        }
    }

    /// Concept cells sit on the lowest amount band.
    pub fn concept(&self) -> CellStyle {
        self.amount_gradient(Decimal::ZERO)
    }

    /// Color for one day: green when income beat spending, otherwise the
    /// amount gradient of the net spend. Savings moves are neutral.
    pub fn day(&self, date: &str, blocks: &[Block]) -> CellStyle {
        let mut expenses = Decimal::ZERO;
        let mut income = Decimal::ZERO;
        for block in blocks.iter().filter(|b| b.date == date) {
            match self.kind(block) {
                BlockKind::Income => income += block.amount,
                BlockKind::Savings => {}
                BlockKind::Withdrawal | BlockKind::Other => expenses += block.amount,
            }
        }

        if income > expenses {
            CellStyle {
                fg: Some(Rgba::WHITE),
                bg: Some(self.config.palette.net_positive_day),
            }
        } else {
            self.amount_gradient(expenses - income)
        }
    }
}

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::balance::DEFAULT_CURRENCY_SYMBOL;
use crate::categorize::{CategoryMatcher, DEFAULT_RESERVED_CONCEPTS};
use crate::gradient::{BalanceGradient, Gradient};
use crate::models::Category;
use crate::styles::{Palette, SubcategoryTags};

/// Everything the styling functions read. Hosts build one (usually
/// `StyleConfig::default()`) and share it by reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub amount_gradient: Gradient,
    pub balance_gradient: BalanceGradient,
    pub palette: Palette,
    pub subcategories: SubcategoryTags,
    pub reserved_concepts: Vec<String>,
    pub currency_symbol: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            amount_gradient: Gradient::AMOUNT,
            balance_gradient: BalanceGradient::default(),
            palette: Palette::default(),
            subcategories: SubcategoryTags::default(),
            reserved_concepts: DEFAULT_RESERVED_CONCEPTS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}

impl StyleConfig {
    /// Parse and validate. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: StyleConfig =
            serde_json::from_str(json).context("Failed to parse style config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize style config")
    }

    pub fn validate(&self) -> Result<()> {
        validate_gradient("amount_gradient", &self.amount_gradient)?;
        validate_gradient("balance_gradient.positive", &self.balance_gradient.positive)?;
        Ok(())
    }

    /// A matcher over `catalog` using this config's reserved concepts.
    pub fn matcher<'a>(&self, catalog: &'a [Category]) -> CategoryMatcher<'a> {
        CategoryMatcher::new(catalog).with_reserved(self.reserved_concepts.iter().cloned())
    }
}

fn validate_gradient(name: &str, g: &Gradient) -> Result<()> {
    if !g.min.is_finite() || !g.max.is_finite() {
        anyhow::bail!("{name}: bounds must be finite (min={}, max={})", g.min, g.max);
    }
    if g.min >= g.max {
        anyhow::bail!("{name}: min must be below max (min={}, max={})", g.min, g.max);
    }
    if let Some(step) = g.step {
        if !(step > 0.0 && step.is_finite()) {
            anyhow::bail!("{name}: step must be positive (step={step})");
        }
    }
    Ok(())
}

/// Parse a category catalog from JSON, keeping its order.
pub fn load_catalog_json(json: &str) -> Result<Vec<Category>> {
    let catalog: Vec<Category> =
        serde_json::from_str(json).context("Failed to parse category catalog")?;
    for (i, category) in catalog.iter().enumerate() {
        if category.name.is_empty() {
            anyhow::bail!("Category {} has no name", i + 1);
        }
    }
    Ok(catalog)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

//! Category matching and gradient styling for bank-statement blocks.
//!
//! A host loads its statement rows into [`Block`]s and its catalog into
//! [`Category`] values, runs them through a [`CategoryMatcher`], then asks a
//! [`BlockStyler`] (or the raw [`gradient`] functions) for cell colors.

pub mod balance;
pub mod calendar;
pub mod categorize;
pub mod config;
pub mod error;
pub mod gradient;
pub mod models;
pub mod styles;
pub mod theme;

pub use balance::{format_balance, parse_balance, parse_balance_or_default};
pub use calendar::{month_grid, DayCell, MonthGrid};
pub use categorize::{assign_category, learn_concept, CategoryMatcher};
pub use config::{load_catalog_json, StyleConfig};
pub use error::{ColorError, ParseError};
pub use gradient::{
    color_for_balance, color_for_value, BalanceGradient, CellStyle, Gradient, Rgba, Shade,
};
pub use models::{Block, Category, Concept, Tag};
pub use styles::BlockStyler;

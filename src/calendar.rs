//! Month view model: one cell per day, colored by that day's total.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::config::StyleConfig;
use crate::gradient::CellStyle;
use crate::models::Block;
use crate::styles::BlockStyler;

#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub day: u32,
    pub total: Decimal,
    pub is_today: bool,
    pub is_selected: bool,
    /// `None` for unselected days after today.
    pub style: Option<CellStyle>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    /// Empty cells before the 1st in a Monday-first week.
    pub leading_blanks: usize,
    pub days: Vec<DayCell>,
}

impl MonthGrid {
    /// Rows of seven, Monday first, padded with `None` on both ends.
    pub fn weeks(&self) -> Vec<[Option<&DayCell>; 7]> {
        let cells: Vec<Option<&DayCell>> = std::iter::repeat(None)
            .take(self.leading_blanks)
            .chain(self.days.iter().map(Some))
            .collect();

        cells
            .chunks(7)
            .map(|chunk| {
                let mut row = [None; 7];
                row[..chunk.len()].copy_from_slice(chunk);
                row
            })
            .collect()
    }

    pub fn day(&self, day: u32) -> Option<&DayCell> {
        self.days.iter().find(|c| c.day == day)
    }
}

const SELECTION_DARKEN: f64 = 0.8;

/// Selected days get a darker background, or the palette's selection
/// color when they have none.
fn select(style: Option<CellStyle>, config: &StyleConfig) -> CellStyle {
    match style {
        Some(CellStyle { fg, bg: Some(bg) }) => CellStyle {
            fg,
            bg: Some(bg.darken(SELECTION_DARKEN)),
        },
        Some(CellStyle { fg, bg: None }) => CellStyle {
            fg,
            bg: Some(config.palette.selected_day),
        },
        None => CellStyle::background(config.palette.selected_day),
    }
}

/// Build the grid for `year`-`month`, with `selected` as the highlighted
/// day of the month. Returns `None` for an invalid month.
pub fn month_grid(
    year: i32,
    month: u32,
    blocks: &[Block],
    today: NaiveDate,
    selected: Option<u32>,
    config: &StyleConfig,
) -> Option<MonthGrid> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let styler = BlockStyler::new(config);

    let mut totals: HashMap<&str, Decimal> = HashMap::new();
    for block in blocks {
        *totals.entry(block.date.as_str()).or_default() += block.amount;
    }

    let days = first
        .iter_days()
        .take_while(|d| d.month() == month)
        .map(|date| {
            let key = date.format("%Y-%m-%d").to_string();
            let total = totals.get(key.as_str()).copied().unwrap_or_default();
            let is_selected = selected == Some(date.day());
            let style = (date <= today).then(|| styler.amount_gradient(total));
            DayCell {
                date,
                day: date.day(),
                total,
                is_today: date == today,
                is_selected,
                style: if is_selected {
                    Some(select(style, config))
                } else {
                    style
                },
            }
        })
        .collect();

    Some(MonthGrid {
        year,
        month,
        leading_blanks: first.weekday().num_days_from_monday() as usize,
        days,
    })
}

/// The grid for the current local month.
pub fn current_month_grid(
    blocks: &[Block],
    selected: Option<u32>,
    config: &StyleConfig,
) -> Option<MonthGrid> {
    let today = chrono::Local::now().date_naive();
    month_grid(today.year(), today.month(), blocks, today, selected, config)
}

#[cfg(test)]
#[path = "calendar_tests.rs"]
mod tests;

mod block;
mod category;

pub use block::{sort_by_date, total_amount, total_for_date, Block};
pub use category::{sort_by_short_name, Category, Concept, Tag};

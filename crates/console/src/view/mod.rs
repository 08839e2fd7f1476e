mod format;
mod table;

pub use self::format::{active_label, format_price, short_date};
pub use self::table::{TableRow, pager_line, render_table};

pub mod dates;
pub mod format;

pub use dates::{is_new_shoe, is_new_shoe_at};
pub use format::{format_price, pluralize};

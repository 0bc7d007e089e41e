/// Configuration constants for the storefront
pub struct Config;

impl Config {
    /// A shoe released fewer than this many days ago is a new release
    pub const NEW_RELEASE_WINDOW_DAYS: i64 = 30;

    /// localStorage key for the selected sort order
    pub const SORT_STORAGE_KEY: &'static str = "sort-order";

    /// Gap between the card image and the name row, in pixels
    pub const CARD_IMAGE_SPACING_PX: u32 = 12;

    pub const CURRENCY_SYMBOL: &'static str = "$";
}

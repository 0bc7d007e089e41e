pub mod shoe_card;
pub mod shoe_grid;
pub mod sort_selector;
pub mod spacer;

pub use shoe_card::ShoeCard;
pub use shoe_grid::ShoeGrid;
pub use sort_selector::SortSelector;
pub use spacer::Spacer;

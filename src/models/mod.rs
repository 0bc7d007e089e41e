pub mod card;
pub mod catalog;
pub mod error;
pub mod shoe;

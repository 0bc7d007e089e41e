use serde::{Deserialize, Serialize};

use super::error::AppError;
use super::shoe::ShoeListing;

const EMBEDDED_CATALOG: &str = include_str!("../data/shoes.json");

/// Orderings offered on the listing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Most recent release first
    #[default]
    Newest,
    /// Cheapest effective price first
    Price,
}

impl SortOrder {
    /// Value used in the `<select>` and in localStorage.
    pub fn code(&self) -> &'static str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::Price => "price",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Newest => "Newest Releases",
            SortOrder::Price => "Price",
        }
    }

    pub fn all() -> &'static [SortOrder] {
        &[SortOrder::Newest, SortOrder::Price]
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for SortOrder {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "newest" => Ok(SortOrder::Newest),
            "price" => Ok(SortOrder::Price),
            _ => Err(AppError::ConfigError(format!("Invalid sort order: {s}"))),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    shoes: Vec<ShoeListing>,
}

impl Catalog {
    pub fn new(shoes: Vec<ShoeListing>) -> Self {
        Self { shoes }
    }

    /// Parses a JSON array of listings.
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let shoes: Vec<ShoeListing> = serde_json::from_str(json)?;
        Ok(Self::new(shoes))
    }

    /// The catalog bundled into the binary.
    pub fn embedded() -> Result<Self, AppError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    pub fn len(&self) -> usize {
        self.shoes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shoes.is_empty()
    }

    pub fn shoes(&self) -> &[ShoeListing] {
        &self.shoes
    }

    pub fn find(&self, slug: &str) -> Result<&ShoeListing, AppError> {
        self.shoes
            .iter()
            .find(|s| s.slug == slug)
            .ok_or_else(|| AppError::NotFound(format!("No shoe with slug {slug}")))
    }

    /// Returns a sorted copy; ties are broken by name.
    pub fn sorted(&self, order: SortOrder) -> Vec<ShoeListing> {
        let mut shoes = self.shoes.clone();
        match order {
            SortOrder::Newest => shoes.sort_by(|a, b| {
                b.release_date
                    .cmp(&a.release_date)
                    .then_with(|| a.name.cmp(&b.name))
            }),
            SortOrder::Price => shoes.sort_by(|a, b| {
                a.effective_price()
                    .cmp(&b.effective_price())
                    .then_with(|| a.name.cmp(&b.name))
            }),
        }
        shoes
    }
}

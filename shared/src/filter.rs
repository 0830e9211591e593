use std::str::FromStr;

use crate::form::FormError;
use crate::model::Place;

/// Values offered by the `#price-filter` select, in display order.
pub const OPTIONS: [&str; 4] = ["all", "10", "50", "100"];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PriceFilter {
    All,
    Max(f64),
}

impl Default for PriceFilter {
    fn default() -> Self {
        PriceFilter::All
    }
}

impl FromStr for PriceFilter {
    type Err = FormError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if value == "all" {
            return Ok(PriceFilter::All);
        }
        match value.parse::<f64>() {
            Ok(max) if max.is_finite() => Ok(PriceFilter::Max(max)),
            _ => Err(FormError::InvalidPrice(value.to_string())),
        }
    }
}

impl PriceFilter {
    pub fn admits(&self, place: &Place) -> bool {
        match self {
            PriceFilter::All => true,
            PriceFilter::Max(max) => place.price <= *max,
        }
    }

    pub fn apply<'a>(&self, places: &'a [Place]) -> Vec<&'a Place> {
        places.iter().filter(|place| self.admits(place)).collect()
    }
}

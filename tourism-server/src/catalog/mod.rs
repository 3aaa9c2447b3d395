//! Reference catalogs of attractions and hotels.
//!
//! The planner receives a catalog as a parameter rather than reaching for
//! global data, so tests can hand it a plain slice of fixtures.

mod error;
mod static_catalog;

pub use error::CatalogError;
pub use static_catalog::StaticCatalog;

use crate::domain::{Hotel, PointOfInterest};

/// Read-only access to attractions.
pub trait AttractionCatalog {
    /// Every attraction, in catalog order.
    fn list_all(&self) -> &[PointOfInterest];

    /// Attractions in a city (case-insensitive).
    fn by_city(&self, city: &str) -> Vec<&PointOfInterest> {
        self.list_all()
            .iter()
            .filter(|a| a.city.eq_ignore_ascii_case(city))
            .collect()
    }

    /// Attractions carrying an interest tag (exact match).
    fn by_interest(&self, interest: &str) -> Vec<&PointOfInterest> {
        self.list_all()
            .iter()
            .filter(|a| a.interest_tags.iter().any(|t| t == interest))
            .collect()
    }

    /// Look up one attraction by identifier.
    fn by_id(&self, id: &str) -> Option<&PointOfInterest> {
        self.list_all().iter().find(|a| a.id == id)
    }
}

impl AttractionCatalog for [PointOfInterest] {
    fn list_all(&self) -> &[PointOfInterest] {
        self
    }
}

impl AttractionCatalog for Vec<PointOfInterest> {
    fn list_all(&self) -> &[PointOfInterest] {
        self
    }
}

/// Read-only access to hotels.
pub trait HotelCatalog {
    /// Every hotel, in catalog order.
    fn list_hotels(&self) -> &[Hotel];

    /// Hotels in a city (case-insensitive).
    fn hotels_by_city(&self, city: &str) -> Vec<&Hotel> {
        self.list_hotels()
            .iter()
            .filter(|h| h.city.eq_ignore_ascii_case(city))
            .collect()
    }

    /// Look up one hotel by identifier.
    fn hotel_by_id(&self, id: &str) -> Option<&Hotel> {
        self.list_hotels().iter().find(|h| h.id == id)
    }
}

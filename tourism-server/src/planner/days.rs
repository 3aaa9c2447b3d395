//! Splitting an itinerary into one day per city.

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::PointOfInterest;

/// City label for attractions without one.
const UNKNOWN_CITY: &str = "Unknown";

/// One day of a grouped itinerary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayPlan {
    /// Day number, starting at 1.
    pub day: usize,
    pub city: String,
    pub attractions: Vec<PointOfInterest>,
    /// Attractions on the day times the per-attraction budget.
    pub estimated_duration_hours: u32,
}

/// Group attractions into days, one per city.
///
/// Cities are numbered in order of first appearance and attractions keep
/// their input order within a city.
pub fn group_by_city(attractions: Vec<PointOfInterest>, hours_per_attraction: u32) -> Vec<DayPlan> {
    let mut days: Vec<DayPlan> = Vec::new();
    let mut day_by_city: HashMap<String, usize> = HashMap::new();

    for attraction in attractions {
        let city = if attraction.city.trim().is_empty() {
            UNKNOWN_CITY.to_string()
        } else {
            attraction.city.clone()
        };

        let idx = *day_by_city.entry(city.clone()).or_insert_with(|| {
            days.push(DayPlan {
                day: days.len() + 1,
                city,
                attractions: Vec::new(),
                estimated_duration_hours: 0,
            });
            days.len() - 1
        });

        days[idx].attractions.push(attraction);
    }

    for day in &mut days {
        day.estimated_duration_hours = day.attractions.len() as u32 * hours_per_attraction;
    }

    days
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AttractionCatalog, StaticCatalog};

    fn pick(ids: &[&str]) -> Vec<PointOfInterest> {
        let catalog = StaticCatalog::builtin().unwrap();
        ids.iter()
            .map(|id| catalog.by_id(id).unwrap().clone())
            .collect()
    }

    #[test]
    fn empty_input() {
        assert!(group_by_city(Vec::new(), 2).is_empty());
    }

    #[test]
    fn groups_in_first_appearance_order() {
        let attractions = pick(&[
            "jamshedpur_001",
            "ranchi_001",
            "jamshedpur_002",
            "ranchi_002",
            "ranchi_003",
        ]);

        let days = group_by_city(attractions, 2);

        assert_eq!(days.len(), 2);
        assert_eq!(days[0].day, 1);
        assert_eq!(days[0].city, "Jamshedpur");
        assert_eq!(days[0].attractions.len(), 2);
        assert_eq!(days[0].estimated_duration_hours, 4);

        assert_eq!(days[1].day, 2);
        assert_eq!(days[1].city, "Ranchi");
        let ids: Vec<_> = days[1].attractions.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["ranchi_001", "ranchi_002", "ranchi_003"]);
        assert_eq!(days[1].estimated_duration_hours, 6);
    }

    #[test]
    fn blank_city_is_unknown() {
        let mut attractions = pick(&["dhanbad_001"]);
        attractions[0].city = String::new();

        let days = group_by_city(attractions, 3);
        assert_eq!(days[0].city, "Unknown");
        assert_eq!(days[0].estimated_duration_hours, 3);
    }
}

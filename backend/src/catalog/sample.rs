use crate::models::package::{TourPackage, TripDuration};

fn package(
    id: &str,
    title: &str,
    destination: &str,
    duration: TripDuration,
    price: i64,
    highlights: [&str; 3],
) -> TourPackage {
    TourPackage {
        id: id.to_string(),
        title: title.to_string(),
        destination: destination.to_string(),
        region: "Kerala".to_string(),
        duration,
        price,
        highlights: highlights.iter().map(|h| h.to_string()).collect(),
    }
}

pub(super) fn kerala_packages() -> Vec<TourPackage> {
    vec![
        package(
            "pkg1",
            "Magical Kerala Backwaters",
            "Alleppey",
            TripDuration::new(7, 6),
            25_000,
            ["Houseboat Cruise", "Tea Plantation Visit", "Kathakali Show"],
        ),
        package(
            "pkg2",
            "Wonders of Munnar & Thekkady",
            "Munnar",
            TripDuration::new(5, 4),
            18_000,
            ["Eravikulam National Park", "Periyar Wildlife Sanctuary", "Spice Gardens"],
        ),
        package(
            "pkg3",
            "Coastal Charms of Varkala",
            "Varkala",
            TripDuration::new(4, 3),
            15_000,
            ["Varkala Cliff Beach", "Jatayu Earth's Center", "Lighthouse Visit"],
        ),
        package(
            "pkg4",
            "Alleppey Houseboat Experience",
            "Alleppey",
            TripDuration::new(3, 2),
            12_000,
            ["Overnight Stay on Houseboat", "Village Tour", "Canoe Ride"],
        ),
        package(
            "pkg5",
            "Fort Kochi Heritage Trail",
            "Kochi",
            TripDuration::new(3, 2),
            9_500,
            ["Chinese Fishing Nets", "Mattancherry Palace", "St. Francis Church"],
        ),
        package(
            "pkg6",
            "Romantic Wayanad Getaway",
            "Wayanad",
            TripDuration::new(4, 3),
            16_500,
            ["Edakkal Caves", "Banasura Sagar Dam", "Chembra Peak"],
        ),
    ]
}

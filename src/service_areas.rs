#[derive(Clone, Debug, PartialEq)]
pub struct ServiceArea {
    pub label: &'static str,
    pub state: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

const fn area(label: &'static str, state: &'static str, latitude: f64, longitude: f64) -> ServiceArea {
    ServiceArea { label, state, latitude, longitude }
}

pub const SERVICE_AREAS: &[ServiceArea] = &[
    area("Chennai", "Tamil Nadu", 13.0827, 80.2707),
    area("Coimbatore", "Tamil Nadu", 11.0168, 76.9558),
    area("Madurai", "Tamil Nadu", 9.9252, 78.1198),
    area("Trichy", "Tamil Nadu", 10.7905, 78.7047),
    area("Tirunelveli", "Tamil Nadu", 8.7139, 77.6990),
    area("Erode", "Tamil Nadu", 11.3421, 77.7282),
    area("Pudukottai", "Tamil Nadu", 10.3826, 78.8214),
    area("Sivakasi", "Tamil Nadu", 9.4491, 77.7975),
    area("Kumbakonam", "Tamil Nadu", 10.9595, 79.3782),
    area("Dharmapuri", "Tamil Nadu", 12.1277, 78.1579),
    area("Kodaikanal", "Tamil Nadu", 10.2381, 77.4892),
    area("Theni", "Tamil Nadu", 10.0104, 77.4768),
    area("Chittoor", "Andhra Pradesh", 13.2172, 79.1003),
    area("Tirupati", "Andhra Pradesh", 13.6288, 79.4192),
    area("Vijayawada", "Andhra Pradesh", 16.5062, 80.6337),
    area("Hyderabad", "Telangana", 17.3850, 78.4867),
    area("Bengaluru", "Karnataka", 12.9716, 77.5946),
    area("Mysuru", "Karnataka", 12.2958, 76.6394),
    area("Palakkad", "Kerala", 10.7867, 76.6548),
    area("Thrissur", "Kerala", 10.5276, 76.2144),
    area("Kochi", "Kerala", 9.9312, 76.2711),
    area("Puducherry", "Puducherry", 11.9416, 79.8083),
    area("Havelock Island", "Andaman & Nicobar", 11.967, 92.981),
];

/// Areas grouped by state, states in first-seen order.
pub fn by_state(areas: &[ServiceArea]) -> Vec<(&'static str, Vec<&ServiceArea>)> {
    let mut groups: Vec<(&'static str, Vec<&ServiceArea>)> = Vec::new();
    for area in areas {
        match groups.iter_mut().find(|(state, _)| *state == area.state) {
            Some((_, members)) => members.push(area),
            None => groups.push((area.state, vec![area])),
        }
    }
    groups
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl MapBounds {
    /// Smallest box holding every area, grown by `padding` degrees per side.
    pub fn from_areas(areas: &[ServiceArea], padding: f64) -> Option<Self> {
        let first = areas.first()?;
        let mut bounds = MapBounds {
            south: first.latitude,
            west: first.longitude,
            north: first.latitude,
            east: first.longitude,
        };
        for area in &areas[1..] {
            bounds.south = bounds.south.min(area.latitude);
            bounds.north = bounds.north.max(area.latitude);
            bounds.west = bounds.west.min(area.longitude);
            bounds.east = bounds.east.max(area.longitude);
        }
        Some(MapBounds {
            south: (bounds.south - padding).max(-90.0),
            west: (bounds.west - padding).max(-180.0),
            north: (bounds.north + padding).min(90.0),
            east: (bounds.east + padding).min(180.0),
        })
    }

    pub fn center(&self) -> (f64, f64) {
        ((self.south + self.north) / 2.0, (self.west + self.east) / 2.0)
    }

    pub fn embed_url(&self) -> String {
        format!(
            "https://www.openstreetmap.org/export/embed.html?bbox={:.4}%2C{:.4}%2C{:.4}%2C{:.4}&layer=mapnik",
            self.west, self.south, self.east, self.north
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_keep_first_seen_order() {
        let groups = by_state(SERVICE_AREAS);
        let states: Vec<&str> = groups.iter().map(|(state, _)| *state).collect();
        assert_eq!(states[0], "Tamil Nadu");
        assert_eq!(states[1], "Andhra Pradesh");
        assert_eq!(groups[0].1.len(), 12);
        let total: usize = groups.iter().map(|(_, members)| members.len()).sum();
        assert_eq!(total, SERVICE_AREAS.len());
    }

    #[test]
    fn bounds_cover_every_area() {
        let bounds = MapBounds::from_areas(SERVICE_AREAS, 0.5).unwrap();
        for area in SERVICE_AREAS {
            assert!(area.latitude > bounds.south && area.latitude < bounds.north);
            assert!(area.longitude > bounds.west && area.longitude < bounds.east);
        }
        assert!((bounds.south - 8.2139).abs() < 1e-9);
        assert!((bounds.east - 93.481).abs() < 1e-9);
    }

    #[test]
    fn empty_areas_have_no_bounds() {
        assert_eq!(MapBounds::from_areas(&[], 1.0), None);
    }

    #[test]
    fn single_area_bounds_center_on_it() {
        let bounds = MapBounds::from_areas(&SERVICE_AREAS[..1], 0.25).unwrap();
        let (lat, lng) = bounds.center();
        assert!((lat - 13.0827).abs() < 1e-9);
        assert!((lng - 80.2707).abs() < 1e-9);
        assert!(bounds.embed_url().contains("bbox=80.0207%2C12.8327"));
    }
}

//! Scroll driven pool gallery.
//!
//! The pure parts (progress math, viewport classification, the stacked to
//! expanded layout and the drag stack state machine) live in their own
//! modules and know nothing about the DOM. `tracker` is the only place that
//! touches `window`/`document` on behalf of the gallery.

pub mod layout;
pub mod progress;
pub mod stack;
pub mod tracker;
pub mod viewport;

#[derive(Clone, Debug, PartialEq)]
pub struct GalleryItem {
    pub id: u32,
    pub image: &'static str,
    pub title: &'static str,
    pub category: &'static str,
}

pub fn pool_gallery() -> Vec<GalleryItem> {
    vec![
        GalleryItem {
            id: 1,
            image: "/gallery/compressed/ocean-travel-modern-nobody-infinity.jpg",
            title: "Ocean Infinity Pool",
            category: "Resort",
        },
        GalleryItem {
            id: 2,
            image: "/gallery/compressed/outdoor-swimming-pool-hotel-resort-summer-vacation.jpg",
            title: "Outdoor Hotel Pool",
            category: "Vacation",
        },
        GalleryItem {
            id: 3,
            image: "/gallery/compressed/relaxation-pool-umbrella-lounge-sky.jpg",
            title: "Relaxation Pool",
            category: "Lounge",
        },
        GalleryItem {
            id: 4,
            image: "/gallery/compressed/umbrella-chair.jpg",
            title: "Umbrella Chair Pool",
            category: "Modern",
        },
        GalleryItem {
            id: 5,
            image: "/gallery/compressed/white-swimming-water-background-beauty.jpg",
            title: "White Swimming Water",
            category: "Beauty",
        },
        GalleryItem {
            id: 6,
            image: "/gallery/compressed/hammocks-umbrellas-seen-from-pool.jpg",
            title: "Hammocks Umbrellas Pool",
            category: "Luxury",
        },
        GalleryItem {
            id: 7,
            image: "/gallery/compressed/Picture3.jpg",
            title: "Courtyard Pool",
            category: "Special",
        },
    ]
}

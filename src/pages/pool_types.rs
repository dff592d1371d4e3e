use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::showcase::{Showcase, ShowcaseList};

const POOL_TYPES: &[Showcase] = &[
    Showcase {
        title: "Infinity Edge Pools",
        description: "Water flows seamlessly over one or more edges, creating the illusion of merging with the horizon. Perfect for luxury properties with panoramic views, these pools create a stunning visual effect that blends with the surrounding landscape.",
        best_for: Some("Luxury resorts, villas, and spaces with panoramic views."),
        features: &[
            "Seamless visual integration with surroundings",
            "Precision-engineered edge channels for smooth overflow",
            "Perfect for elevated or coastal properties",
            "Advanced water circulation systems",
        ],
        image: "/Topools/Infinity_edge_pool.jpg",
    },
    Showcase {
        title: "Rooftop Pools",
        description: "Elevated elegance with city skyline or scenic views. These pools transform rooftops into luxurious retreats, offering a unique perspective and creating an exclusive outdoor living space in urban environments.",
        best_for: Some("Hotels, premium apartments, and high-rise residences."),
        features: &[
            "Structural reinforcement for rooftop safety",
            "Lightweight yet durable shell construction",
            "Custom lighting and heating options",
            "Integrated drainage and waterproofing systems",
        ],
        image: "/Topools/rooftop-pool.jpg",
    },
    Showcase {
        title: "Overflow Pools",
        description: "Water surface level with deck edges, producing a mirror-like reflection. These pools create a sophisticated, modern aesthetic with their seamless integration between water and deck surfaces.",
        best_for: Some("Premium residential and hospitality projects."),
        features: &[
            "Perimeter gutter system for perfect water level",
            "Minimal water disturbance for visual calmness",
            "Adaptable to various shapes and finishes",
            "Advanced filtration and circulation technology",
        ],
        image: "/Topools/Overflow_pool.jpg",
    },
    Showcase {
        title: "Skimmer Pools",
        description: "Traditional pools with water levels slightly below deck edge. These classic designs offer reliable performance and cost-effective solutions while maintaining elegant aesthetics.",
        best_for: Some("Residential homes seeking cost-effective elegance."),
        features: &[
            "Skimmer system for easy debris removal",
            "Lower installation and maintenance costs",
            "Flexible in design and size",
            "Proven technology with long-term reliability",
        ],
        image: "/Topools/skimmer_pool.jpg",
    },
    Showcase {
        title: "Spa Pools & Jacuzzi",
        description: "Compact, heated pools designed for relaxation and therapy. These intimate spaces provide therapeutic benefits and create perfect spots for relaxation and social gatherings.",
        best_for: Some("Homes, hotels, and wellness centers."),
        features: &[
            "Hydrotherapy jets for massage effect",
            "Custom seating and temperature control",
            "Can be integrated with larger pools",
            "Advanced heating and filtration systems",
        ],
        image: "/Topools/spa & jaccuzi.avif",
    },
    Showcase {
        title: "Kids Pools",
        description: "Shallow, safe, and colorful for endless fun. These pools are designed with children's safety and enjoyment in mind, creating perfect environments for family recreation.",
        best_for: Some("Resorts, schools, and family homes."),
        features: &[
            "Safety-first depth and slip-resistant finishes",
            "Fun elements like slides and water toys",
            "Easy-to-clean and maintain",
            "Bright, engaging colors and designs",
        ],
        image: "/Topools/kids.jpg",
    },
    Showcase {
        title: "Olympic & Semi-Olympic Pools",
        description: "Regulation-sized competition pools built to international standards. These pools are designed for serious swimming, training, and competitive events with precise specifications.",
        best_for: Some("Sports complexes, schools, and public facilities."),
        features: &[
            "FINA-compliant dimensions and equipment",
            "Lane markings, starting blocks, and depth specifications",
            "Built for durability and high-volume usage",
            "Professional-grade filtration and circulation",
        ],
        image: "/Topools/olympics.jpeg",
    },
    Showcase {
        title: "Plunge Pools",
        description: "Compact pools perfect for cooling off and relaxation. These space-efficient designs maximize style in minimal spaces, ideal for modern urban living and luxury retreats.",
        best_for: Some("Small gardens, courtyards, and luxury spas."),
        features: &[
            "Minimal footprint with maximum style",
            "Easy to heat or chill for year-round use",
            "Ideal for quick dips and lounging",
            "Energy-efficient heating and cooling systems",
        ],
        image: "/Topools/plunge_pool.jpg",
    },
];

#[function_component(PoolTypes)]
pub fn pool_types() -> Html {
    html! {
        <div class="page">
            <header class="page-hero">
                <h1>{"Types of Pools"}</h1>
                <p>{"From rooftop retreats to regulation competition pools, every type we build is engineered for its site."}</p>
            </header>
            <ShowcaseList entries={POOL_TYPES} />
            <Footer />
        </div>
    }
}

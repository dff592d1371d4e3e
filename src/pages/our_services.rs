use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::showcase::{Showcase, ShowcaseList};

const SERVICES: &[Showcase] = &[
    Showcase {
        title: "Pool Design & Consultation",
        description: "Transform your vision into reality with our expert design consultation and 3D visualization services. We work closely with you to understand your lifestyle, preferences, and budget to create the perfect pool design.",
        best_for: None,
        features: &[
            "Custom 3D pool designs and visualizations",
            "Comprehensive site analysis and planning",
            "Material selection and budget optimization",
            "Professional architectural guidance",
        ],
        image: "/gallery/compressed/outdoor-swimming-pool-hotel-resort-summer-vacation.jpg",
    },
    Showcase {
        title: "Construction & Installation",
        description: "Professional pool construction with premium materials and expert craftsmanship for lasting quality. Our experienced team ensures every detail is perfect, from excavation to final finishing touches.",
        best_for: None,
        features: &[
            "Complete turnkey construction services",
            "Premium materials and quality assurance",
            "Expert timeline management and coordination",
            "Comprehensive warranty coverage",
        ],
        image: "/gallery/compressed/relaxation-pool-umbrella-lounge-sky.jpg",
    },
    Showcase {
        title: "Accessories & Equipment",
        description: "Enhance your pool experience with high-quality accessories and advanced equipment solutions. From lighting to automation, we provide everything you need for the ultimate pool experience.",
        best_for: None,
        features: &[
            "Advanced LED lighting systems",
            "High-efficiency filtration equipment",
            "Smart automation and control systems",
            "Safety features and accessories",
        ],
        image: "/gallery/compressed/white-swimming-water-background-beauty.jpg",
    },
    Showcase {
        title: "Waterproofing Solutions",
        description: "Protect your investment with advanced waterproofing techniques and long-lasting protection. Our specialized solutions ensure your pool remains leak-free and structurally sound for years to come.",
        best_for: None,
        features: &[
            "Advanced leak prevention systems",
            "Chemical-resistant protective coatings",
            "Structural integrity protection",
            "Extended warranty coverage",
        ],
        image: "/gallery/compressed/ocean-travel-modern-nobody-infinity.jpg",
    },
    Showcase {
        title: "Maintenance & Repairs",
        description: "Keep your pool in pristine condition with our comprehensive maintenance and repair services. Our ongoing support ensures your pool always looks its best and operates at peak performance.",
        best_for: None,
        features: &[
            "Regular maintenance and cleaning services",
            "Emergency repair and troubleshooting",
            "Water treatment and chemical balancing",
            "Equipment servicing and upgrades",
        ],
        image: "/gallery/compressed/hammocks-umbrellas-seen-from-pool.jpg",
    },
];

#[function_component(OurServices)]
pub fn our_services() -> Html {
    html! {
        <div class="page">
            <header class="page-hero">
                <h1>{"Our Services"}</h1>
                <p>{"Design, construction, equipment, waterproofing and upkeep under one roof."}</p>
            </header>
            <ShowcaseList entries={SERVICES} />
            <Footer />
        </div>
    }
}

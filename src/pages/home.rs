use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::carousel::{Carousel, Slide};
use crate::components::expanding_gallery::ExpandingGallery;
use crate::components::fallback_image::FallbackImage;
use crate::components::footer::Footer;
use crate::components::hover_expand::{HoverExpand, Review};
use crate::components::marquee::Marquee;
use crate::components::rotating_text::{RotatingText, StaggerFrom};
use crate::config::GALLERY_ANCHOR_ID;
use crate::service_areas::{by_state, MapBounds, SERVICE_AREAS};
use crate::smooth_scroll::SmoothScrollHandle;
use crate::Route;

const HERO_WORDS: [&str; 6] = ["Solutions", "Design", "Products", "Consultants", "Construction", "Maintenance"];

const TEASERS: [(&str, &str, &str); 3] = [
    (
        "Pool Design & Consultation",
        "Custom 3D designs, site analysis and material selection tailored to your budget.",
        "/gallery/compressed/outdoor-swimming-pool-hotel-resort-summer-vacation.jpg",
    ),
    (
        "Construction & Installation",
        "Premium materials and expert craftsmanship from excavation to the final finish.",
        "/gallery/compressed/relaxation-pool-umbrella-lounge-sky.jpg",
    ),
    (
        "Maintenance & Repairs",
        "Ongoing care that keeps your pool clean, safe and running at its best.",
        "/gallery/compressed/hammocks-umbrellas-seen-from-pool.jpg",
    ),
];

const SERVICE_STRIP: [&str; 3] = [
    "/services/view-hotel-pool.jpg",
    "/services/photorealistic-wooden-house-interior-with-timber-decor-furnishings.jpg",
    "/services/view-hotel-pool (1).jpg",
];

const POOL_SLIDES: &[Slide] = &[
    Slide {
        title: "Infinity Edge Pool",
        category: "Luxury Design",
        image: "/Topools/Infinity_edge_pool.jpg",
        description: "Stunning infinity edge pool with seamless water flow creating the illusion of endless horizon.",
    },
    Slide {
        title: "Roof Top Pool",
        category: "Urban Luxury",
        image: "/Topools/rooftop-pool.jpg",
        description: "Exclusive rooftop pool offering breathtaking city views and sophisticated urban lifestyle.",
    },
    Slide {
        title: "Overflow Pools",
        category: "Modern Design",
        image: "/Topools/Overflow_pool.jpg",
        description: "Modern overflow pool design with continuous water circulation and contemporary aesthetics.",
    },
    Slide {
        title: "Skimmer Pools",
        category: "Traditional",
        image: "/Topools/skimmer_pool.jpg",
        description: "Classic skimmer pool design with traditional filtration system and timeless appeal.",
    },
    Slide {
        title: "Spa Pools & Jacuzzi",
        category: "Wellness",
        image: "/Topools/spa & jaccuzi.avif",
        description: "Luxurious spa pools and jacuzzi systems for ultimate relaxation and wellness experience.",
    },
    Slide {
        title: "Olympics / Semi Olympic Pools",
        category: "Sports",
        image: "/Topools/olympics.jpeg",
        description: "Professional Olympic and semi-Olympic pools designed for competitive swimming and training.",
    },
    Slide {
        title: "Plunge Pools",
        category: "Compact Design",
        image: "/Topools/plunge_pool.jpg",
        description: "Compact plunge pools perfect for small spaces while providing refreshing aquatic experience.",
    },
    Slide {
        title: "Jacuzzi",
        category: "Wellness",
        image: "/Topools/jaccuzi.jpeg",
        description: "Premium jacuzzi systems for therapeutic relaxation and hydrotherapy benefits.",
    },
];

const REVIEWS: &[Review] = &[
    Review {
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=300&fit=crop&crop=face",
        text: "Good services and good technical support. Overall a good experience",
    },
    Review {
        image: "https://images.unsplash.com/photo-1506794778202-cad84cf45f1d?w=400&h=300&fit=crop&crop=face",
        text: "I like your pool, your work was completely finishable and awesome sites.",
    },
    Review {
        image: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=400&h=300&fit=crop&crop=face",
        text: "They are very good in quality, sticking to design, timely delivery, and prompt after sales service support.",
    },
    Review {
        image: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=400&h=300&fit=crop&crop=face",
        text: "Excellent pool design and construction. The team was professional and delivered exactly what we envisioned.",
    },
    Review {
        image: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=400&h=300&fit=crop&crop=face",
        text: "Amazing work quality and attention to detail. Our pool turned out better than expected!",
    },
    Review {
        image: "https://images.unsplash.com/photo-1544005313-94ddf0286df2?w=400&h=300&fit=crop&crop=face",
        text: "Outstanding service from start to finish. Highly recommend for anyone looking for a quality pool.",
    },
    Review {
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=300&fit=crop&crop=face",
        text: "Professional team with excellent craftsmanship. Our pool is the highlight of our backyard.",
    },
];

#[function_component(ServiceAreas)]
fn service_areas() -> Html {
    let groups = by_state(SERVICE_AREAS);
    let map = MapBounds::from_areas(SERVICE_AREAS, 0.5);

    html! {
        <section id="areas" class="home-section areas">
            <h2>{"Where We Build"}</h2>
            <p class="section-lead">{"From the Nilgiris to the Andaman coast, our teams deliver across South India."}</p>
            <div class="areas-grid">
                <div class="areas-list">
                    { for groups.iter().map(|(state, members)| html! {
                        <div class="area-group">
                            <h4>{*state}</h4>
                            <p>{ members.iter().map(|area| area.label).collect::<Vec<_>>().join(" · ") }</p>
                        </div>
                    }) }
                </div>
                if let Some(bounds) = map {
                    <iframe
                        class="areas-map"
                        title="Service area map"
                        src={bounds.embed_url()}
                        loading="lazy"
                    />
                }
            </div>
        </section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let scroll = use_context::<Option<SmoothScrollHandle>>().flatten();

    let inquire = Callback::from(move |_: MouseEvent| match &scroll {
        Some(scroll) => scroll.scroll_to_anchor("contact", 0.0),
        None => {
            if let Some(contact) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id("contact"))
            {
                contact.scroll_into_view();
            }
        }
    });

    html! {
        <div class="home">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 150vh;
                        overflow: hidden;
                        background: #fff;
                    }
                    .hero-copy {
                        max-width: 64rem;
                        margin: 0 auto;
                        padding: 10rem 1.5rem 0;
                        text-align: center;
                    }
                    .hero-copy h1 {
                        font-size: clamp(2rem, 5vw, 4.5rem);
                        font-weight: 800;
                        color: #111827;
                        line-height: 1.15;
                    }
                    .hero-rotating {
                        background: linear-gradient(to right, #2563eb, #0ea5e9, #06b6d4);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .hero-copy p {
                        font-size: clamp(1.1rem, 2vw, 1.6rem);
                        color: #4b5563;
                        font-weight: 300;
                        margin: 1.5rem auto 2.5rem;
                    }
                    .inquire-button {
                        border: none;
                        border-radius: 9999px;
                        padding: 1rem 2.5rem;
                        font-size: 1.1rem;
                        font-weight: 700;
                        color: #fff;
                        background: linear-gradient(to right, #2563eb, #0ea5e9, #06b6d4);
                        box-shadow: 0 20px 25px rgba(14, 165, 233, 0.25);
                        cursor: pointer;
                        transition: transform 0.3s ease;
                    }
                    .inquire-button:hover {
                        transform: scale(1.05);
                    }
                    .home-section {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 5rem 1.5rem;
                    }
                    .home-section h2 {
                        font-size: 2.5rem;
                        text-align: center;
                        color: #1f2937;
                    }
                    .section-lead {
                        text-align: center;
                        color: #6b7280;
                        margin-bottom: 3rem;
                    }
                    .teaser-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        gap: 2rem;
                    }
                    .teaser {
                        border-radius: 1.5rem;
                        overflow: hidden;
                        background: #fff;
                        box-shadow: 0 10px 30px rgba(15, 23, 42, 0.08);
                    }
                    .teaser img {
                        width: 100%;
                        height: 14rem;
                        object-fit: cover;
                    }
                    .teaser-body {
                        padding: 1.5rem;
                    }
                    .service-strip {
                        margin: 3rem 0 1rem;
                    }
                    .service-strip img {
                        width: 18rem;
                        height: 11rem;
                        object-fit: cover;
                        border-radius: 1rem;
                    }
                    .areas-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 2rem;
                    }
                    .area-group h4 {
                        color: #0369a1;
                        margin-bottom: 0.25rem;
                    }
                    .areas-map {
                        width: 100%;
                        min-height: 24rem;
                        border: 0;
                        border-radius: 1rem;
                    }
                    @media (max-width: 768px) {
                        .hero {
                            min-height: 40vh;
                        }
                        .hero-copy {
                            padding-top: 6rem;
                        }
                        .areas-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <section id={GALLERY_ANCHOR_ID} class="hero">
                <div class="hero-copy">
                    <h1>
                        {"Providing Top Notch"}
                        <br />
                        {"Pool "}
                        <RotatingText
                            texts={HERO_WORDS.to_vec()}
                            interval_ms={3000}
                            stagger_from={StaggerFrom::Last}
                            class={classes!("hero-rotating")}
                        />
                    </h1>
                    <p>{"We transform your vision into reality through innovative technology and proficient construction management."}</p>
                    <button class="inquire-button" onclick={inquire}>{"Inquire Now →"}</button>
                </div>
                <ExpandingGallery />
            </section>

            <section id="services" class="home-section">
                <h2>{"Our Services"}</h2>
                <p class="section-lead">{"Everything your pool needs, from the first sketch to years of upkeep."}</p>
                <div class="teaser-grid">
                    { for TEASERS.iter().map(|(title, blurb, image)| html! {
                        <div class="teaser">
                            <FallbackImage src={*image} alt={*title} />
                            <div class="teaser-body">
                                <h3>{*title}</h3>
                                <p>{*blurb}</p>
                            </div>
                        </div>
                    }) }
                </div>
                <div class="service-strip">
                    <Marquee>
                        { for SERVICE_STRIP.iter().map(|image| html! {
                            <FallbackImage src={*image} alt="Recent project" />
                        }) }
                    </Marquee>
                </div>
                <p class="section-lead">
                    <Link<Route> to={Route::OurServices}>{"See all services"}</Link<Route>>
                </p>
            </section>

            <section id="portfolio" class="home-section">
                <h2>{"Types of Pools"}</h2>
                <p class="section-lead">{"From rooftop showpieces to compact plunge pools."}</p>
                <Carousel slides={POOL_SLIDES} />
            </section>

            <section id="about" class="home-section">
                <h2>{"What Our Clients Say"}</h2>
                <p class="section-lead">{"Over a decade of pools built across the south."}</p>
                <HoverExpand reviews={REVIEWS} />
            </section>

            <ServiceAreas />
            <Footer />
        </div>
    }
}

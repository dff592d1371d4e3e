use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::fallback_image::FallbackImage;
use crate::components::footer::Footer;
use crate::Route;

struct Strength {
    title: &'static str,
    text: &'static str,
    image: &'static str,
}

const STRENGTHS: [Strength; 3] = [
    Strength {
        title: "A Legacy of Excellence",
        text: "Over a decade of mastery in pool design and construction, merging technical precision with inspired aesthetics.",
        image: "/portff/compressed/beautiful-luxury-swimming-pool-with-palm-tree.jpg",
    },
    Strength {
        title: "Engineering Mastery",
        text: "A team of seasoned professionals ensures flawless execution from initial sketch to final splash.",
        image: "/portff/compressed/vertical-high-angle-view-pool-party-sunlight-us.jpg",
    },
    Strength {
        title: "End-to-End Delivery",
        text: "Full-spectrum services including consultation, design, construction, waterproofing, and filtration.",
        image: "/portff/compressed/swimming-blue-healthy-wet-modern.jpg",
    },
];

const VALUES: [&str; 4] = [
    "Tailored to You: every pool reflects its owner's taste and site specifics.",
    "Meticulous Execution: from excavation to finishing touches, quality control is constant.",
    "Long-Term Performance: backed by strong after-sales support.",
    "Value in Every Drop: premium outcomes balanced with smart budgeting.",
];

#[function_component(AboutUs)]
pub fn about_us() -> Html {
    let navigator = use_navigator();
    let explore = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::OurServices);
        }
    });

    html! {
        <div class="page about-page">
            <style>
                {r#"
                    .about-promise, .about-strengths, .about-values, .about-cta {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 4rem 1.5rem;
                    }
                    .about-promise {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                    }
                    .about-promise img, .strength img {
                        width: 100%;
                        border-radius: 1.5rem;
                        object-fit: cover;
                    }
                    .strength-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                        gap: 2rem;
                    }
                    .strength img {
                        height: 16rem;
                    }
                    .about-values li {
                        font-size: 1.1rem;
                        margin-bottom: 0.75rem;
                        color: #334155;
                    }
                    .about-cta {
                        text-align: center;
                    }
                    .about-cta button {
                        border: none;
                        border-radius: 9999px;
                        padding: 0.9rem 2.25rem;
                        font-weight: 700;
                        color: #fff;
                        background: linear-gradient(to right, #2563eb, #06b6d4);
                        cursor: pointer;
                    }
                    @media (max-width: 768px) {
                        .about-promise {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <header class="page-hero">
                <h1>{"About Swim Designers"}</h1>
                <p>{"Crafting luxurious aquatic experiences across South India."}</p>
            </header>

            <section class="about-promise">
                <div>
                    <h2>{"Our Promise"}</h2>
                    <p>
                        {"At Swim Designers, we look beyond pools. We craft luxurious aquatic experiences, \
                          transforming spaces into elegant retreats that stand the test of time."}
                    </p>
                </div>
                <FallbackImage src="/portff/compressed/white-swimming-water-background-beauty.jpg" alt="Our promise" />
            </section>

            <section class="about-strengths">
                <h2>{"Expertise You Can Trust"}</h2>
                <div class="strength-grid">
                    { for STRENGTHS.iter().map(|strength| html! {
                        <div class="strength" key={strength.title}>
                            <FallbackImage src={strength.image} alt={strength.title} />
                            <h3>{strength.title}</h3>
                            <p>{strength.text}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="about-values">
                <h2>{"What We Stand For"}</h2>
                <ul>
                    { for VALUES.iter().map(|value| html! { <li>{*value}</li> }) }
                </ul>
            </section>

            <section class="about-cta">
                <h2>{"Ready to build your dream pool?"}</h2>
                <button onclick={explore}>{"Explore Our Services"}</button>
            </section>
            <Footer />
        </div>
    }
}

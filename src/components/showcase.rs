use yew::prelude::*;

use crate::components::fallback_image::FallbackImage;

#[derive(Clone, Debug, PartialEq)]
pub struct Showcase {
    pub title: &'static str,
    pub description: &'static str,
    pub best_for: Option<&'static str>,
    pub features: &'static [&'static str],
    pub image: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct ShowcaseListProps {
    pub entries: &'static [Showcase],
}

/// Alternating image/text rows used by the services and pool type pages.
#[function_component(ShowcaseList)]
pub fn showcase_list(props: &ShowcaseListProps) -> Html {
    html! {
        <div class="showcase-list">
            <style>
                {r#"
                    .showcase-list {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 2rem 1.5rem 5rem;
                        display: flex;
                        flex-direction: column;
                        gap: 5rem;
                    }
                    .showcase-row {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                    }
                    .showcase-row.flipped .showcase-media {
                        order: 2;
                    }
                    .showcase-media {
                        border-radius: 1.5rem;
                        overflow: hidden;
                        min-height: 18rem;
                        background: linear-gradient(135deg, #e0f2fe, #cffafe);
                        box-shadow: 0 25px 50px rgba(15, 23, 42, 0.15);
                    }
                    .showcase-media img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        display: block;
                    }
                    .showcase-text h2 {
                        font-size: 2rem;
                        color: #1f2937;
                        margin-bottom: 1rem;
                    }
                    .showcase-text p {
                        color: #4b5563;
                        line-height: 1.7;
                    }
                    .showcase-best {
                        margin-top: 1rem;
                        font-weight: 600;
                        color: #0369a1;
                    }
                    .showcase-features {
                        margin-top: 1.25rem;
                        padding-left: 1.25rem;
                        color: #334155;
                    }
                    .showcase-features li {
                        margin-bottom: 0.4rem;
                    }
                    @media (max-width: 768px) {
                        .showcase-row {
                            grid-template-columns: 1fr;
                        }
                        .showcase-row.flipped .showcase-media {
                            order: 0;
                        }
                    }
                "#}
            </style>
            { for props.entries.iter().enumerate().map(|(i, entry)| html! {
                <article key={entry.title} class={classes!("showcase-row", (i % 2 == 1).then_some("flipped"))}>
                    <div class="showcase-media">
                        <FallbackImage src={entry.image} alt={entry.title} />
                    </div>
                    <div class="showcase-text">
                        <h2>{entry.title}</h2>
                        <p>{entry.description}</p>
                        if let Some(best_for) = entry.best_for {
                            <p class="showcase-best">{format!("Best for: {}", best_for)}</p>
                        }
                        <ul class="showcase-features">
                            { for entry.features.iter().map(|feature| html! { <li>{*feature}</li> }) }
                        </ul>
                    </div>
                </article>
            }) }
        </div>
    }
}

use std::collections::HashSet;
use std::rc::Rc;

use log::info;
use yew::prelude::*;

use crate::components::card_stack::CardStackView;
use crate::components::fallback_image::FallbackImage;
use crate::config::{self, GalleryConfig, StackConfig};
use crate::gallery::layout::{self, LayoutPhase};
use crate::gallery::tracker::{use_scroll_progress, use_viewport};
use crate::gallery::viewport::CardSize;
use crate::gallery::{pool_gallery, GalleryItem};

/// Ids of cards whose image failed to load. Each failure is applied to the
/// latest set, so errors landing in the same frame all stick.
#[derive(Debug, Default, PartialEq)]
struct HiddenCards(HashSet<u32>);

enum HiddenAction {
    Hide(u32),
}

impl Reducible for HiddenCards {
    type Action = HiddenAction;

    fn reduce(self: Rc<Self>, action: HiddenAction) -> Rc<Self> {
        let HiddenAction::Hide(id) = action;
        if self.0.contains(&id) {
            return self;
        }
        let mut hidden = self.0.clone();
        hidden.insert(id);
        Rc::new(HiddenCards(hidden))
    }
}

impl HiddenCards {
    fn shows(&self, id: u32) -> bool {
        !self.0.contains(&id)
    }
}

#[derive(Properties, PartialEq)]
struct DesktopGalleryProps {
    items: Rc<Vec<GalleryItem>>,
    progress: f64,
}

#[function_component(DesktopGallery)]
fn desktop_gallery(props: &DesktopGalleryProps) -> Html {
    let config = use_memo(|_| GalleryConfig::default(), ());
    let hidden = use_reducer(HiddenCards::default);

    let items = layout::layout(props.items.len(), props.progress, &config);
    let settled = items.first().map_or(false, |item| item.phase == LayoutPhase::Settled);

    html! {
        <div class={classes!("desktop-gallery", settled.then_some("settled"))}>
            { for props.items.iter().zip(items.iter()).filter(|(item, _)| hidden.shows(item.id)).map(|(item, placed)| {
                let style = match placed.phase {
                    LayoutPhase::Interpolating => format!(
                        "position: absolute; transform: {}; z-index: {};",
                        placed.pose.to_css_transform(),
                        placed.z_index
                    ),
                    LayoutPhase::Settled => format!("position: static; z-index: {};", placed.z_index),
                };
                let on_fail = {
                    let dispatcher = hidden.dispatcher();
                    let id = item.id;
                    Callback::from(move |_| dispatcher.dispatch(HiddenAction::Hide(id)))
                };
                html! {
                    <div key={item.id} class="gallery-card" {style}>
                        <div class="gallery-frame">
                            <FallbackImage src={item.image} alt={item.title} on_fail={Some(on_fail)} />
                            <div class="gallery-caption">
                                <span class="gallery-category">{item.category}</span>
                                <span class="gallery-title">{item.title}</span>
                            </div>
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct MobileGalleryProps {
    items: Rc<Vec<GalleryItem>>,
    size: CardSize,
}

#[function_component(MobileGallery)]
fn mobile_gallery(props: &MobileGalleryProps) -> Html {
    // Fresh tilt per page view; CardStack draws it once per card.
    let seed = use_state(|| chrono::Utc::now().timestamp_millis() as u64);
    html! {
        <div class="mobile-gallery">
            <div class="mobile-gallery-inner" style={format!("height: {:.0}px;", props.size.container_height)}>
                <CardStackView
                    items={(*props.items).clone()}
                    size={props.size}
                    config={StackConfig::gallery()}
                    seed={*seed}
                />
            </div>
        </div>
    }
}

/// Pool gallery that fans out while the hero section scrolls by on desktop
/// and turns into a draggable card stack on phones.
#[function_component(ExpandingGallery)]
pub fn expanding_gallery() -> Html {
    let items = use_memo(|_| pool_gallery(), ());
    let viewport = use_viewport();
    let mode = viewport.mode();
    let progress = use_scroll_progress(config::GALLERY_ANCHOR_ID);

    use_effect_with_deps(
        |mode| {
            info!("gallery using {:?} layout", mode);
            || ()
        },
        mode,
    );

    let mobile = mode.is_mobile();
    html! {
        <div
            class={classes!("expanding-gallery", if mobile { "mobile" } else { "desktop" })}
            style={format!("--scroll-progress: {:.4};", progress)}
        >
            <style>
                {r#"
                    .expanding-gallery {
                        position: relative;
                        width: 100%;
                    }
                    .expanding-gallery.desktop {
                        margin-top: -6rem;
                        padding-bottom: 1rem;
                    }
                    .desktop-gallery {
                        position: relative;
                        width: 100%;
                        min-width: 1200px;
                        height: 40rem;
                        padding: 0.5rem 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .desktop-gallery.settled {
                        gap: 2.5rem;
                    }
                    .gallery-card {
                        will-change: transform;
                        transition: transform 0.4s cubic-bezier(0.25, 0.46, 0.45, 0.94);
                    }
                    .desktop-gallery.settled .gallery-card {
                        transition: none;
                    }
                    .gallery-frame {
                        position: relative;
                        width: 24rem;
                        height: 24rem;
                        background: rgba(255, 255, 255, 0.9);
                        border-radius: 1rem;
                        overflow: hidden;
                        border: 1px solid rgba(255, 255, 255, 0.3);
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                        transition: transform 0.3s ease;
                    }
                    .gallery-frame:hover {
                        transform: scale(1.05);
                    }
                    .gallery-frame img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.5s ease;
                    }
                    .gallery-frame:hover img {
                        transform: scale(1.1);
                    }
                    .gallery-caption {
                        position: absolute;
                        left: 0;
                        right: 0;
                        bottom: 0;
                        padding: 1rem;
                        display: flex;
                        flex-direction: column;
                        color: #fff;
                        background: linear-gradient(to top, rgba(15, 23, 42, 0.7), transparent);
                        opacity: 0;
                        transition: opacity 0.3s ease;
                    }
                    .gallery-frame:hover .gallery-caption {
                        opacity: 1;
                    }
                    .gallery-category {
                        font-size: 0.75rem;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        color: #7dd3fc;
                    }
                    .gallery-title {
                        font-weight: 600;
                    }
                    .mobile-gallery {
                        width: 100%;
                        display: flex;
                        justify-content: center;
                        align-items: center;
                        padding: 1rem 0;
                    }
                    .mobile-gallery-inner {
                        position: relative;
                    }
                    @media (max-width: 1280px) {
                        .gallery-frame {
                            width: 20rem;
                            height: 20rem;
                        }
                    }
                "#}
            </style>
            if mobile {
                <MobileGallery items={items.clone()} size={viewport.card_size()} />
            } else {
                <DesktopGallery items={items.clone()} {progress} />
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failures_in_the_same_frame_accumulate() {
        // Both callbacks were built from the same render; each reduce sees the latest set.
        let start = Rc::new(HiddenCards::default());
        let after_first = start.reduce(HiddenAction::Hide(3));
        let after_second = after_first.reduce(HiddenAction::Hide(7));
        assert!(!after_second.shows(3));
        assert!(!after_second.shows(7));
        assert!(after_second.shows(1));
    }

    #[test]
    fn repeated_failure_keeps_the_same_set() {
        let once = Rc::new(HiddenCards::default()).reduce(HiddenAction::Hide(2));
        let twice = once.clone().reduce(HiddenAction::Hide(2));
        assert!(Rc::ptr_eq(&once, &twice));
    }

    #[test]
    fn hidden_cards_drop_out_of_the_rendered_list() {
        let hidden = Rc::new(HiddenCards::default()).reduce(HiddenAction::Hide(2));
        let shown: Vec<u32> = pool_gallery().iter().map(|item| item.id).filter(|id| hidden.shows(*id)).collect();
        assert!(!shown.contains(&2));
        assert_eq!(shown.len(), pool_gallery().len() - 1);
    }
}

use log::{debug, info};
use web_sys::{Element, PointerEvent};
use yew::prelude::*;

use crate::components::fallback_image::FallbackImage;
use crate::config::StackConfig;
use crate::gallery::stack::{CardStack, ReleaseOutcome, SeededTilt};
use crate::gallery::viewport::CardSize;
use crate::gallery::GalleryItem;

#[derive(Properties, PartialEq)]
pub struct CardStackViewProps {
    pub items: Vec<GalleryItem>,
    pub size: CardSize,
    #[prop_or_default]
    pub config: StackConfig,
    /// Seed for the per-card tilt when random rotation is on.
    #[prop_or_default]
    pub seed: u64,
}

#[function_component(CardStackView)]
pub fn card_stack_view(props: &CardStackViewProps) -> Html {
    let stack = {
        let ids: Vec<u32> = props.items.iter().map(|item| item.id).collect();
        let config = props.config.clone();
        let seed = props.seed;
        use_mut_ref(move || CardStack::new(ids, config, &mut SeededTilt::new(seed)))
    };
    let redraw = use_force_update();

    let on_down = {
        let stack = stack.clone();
        let redraw = redraw.clone();
        move |id: u32| {
            let stack = stack.clone();
            let redraw = redraw.clone();
            Callback::from(move |e: PointerEvent| {
                if !stack.borrow_mut().press(id, e.client_x() as f64, e.client_y() as f64) {
                    return;
                }
                if let Some(target) = e.target_dyn_into::<Element>() {
                    let _ = target.set_pointer_capture(e.pointer_id());
                }
                redraw.force_update();
            })
        }
    };

    let on_move = {
        let stack = stack.clone();
        let redraw = redraw.clone();
        move |id: u32| {
            let stack = stack.clone();
            let redraw = redraw.clone();
            Callback::from(move |e: PointerEvent| {
                {
                    let mut stack = stack.borrow_mut();
                    if stack.dragging() != Some(id) {
                        return;
                    }
                    stack.drag_to(e.client_x() as f64, e.client_y() as f64);
                }
                redraw.force_update();
            })
        }
    };

    let on_up = {
        let stack = stack.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: PointerEvent| {
            let outcome = stack.borrow_mut().release();
            match outcome {
                ReleaseOutcome::Idle => return,
                ReleaseOutcome::SentToBack(id) => info!("card {} sent to back", id),
                ReleaseOutcome::SettledBack(id) => debug!("card {} settled", id),
            }
            redraw.force_update();
        })
    };

    let on_cancel = {
        let stack = stack.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: PointerEvent| {
            stack.borrow_mut().cancel();
            redraw.force_update();
        })
    };

    let on_tap = {
        let stack = stack.clone();
        let redraw = redraw.clone();
        move |id: u32| {
            let stack = stack.clone();
            let redraw = redraw.clone();
            Callback::from(move |_: MouseEvent| {
                if stack.borrow_mut().tap(id) {
                    info!("card {} sent to back on click", id);
                    redraw.force_update();
                }
            })
        }
    };

    let size = props.size;
    let current = stack.borrow();
    let dragging = current.dragging();

    html! {
        <div class="stack-container" style={format!("width: {:.0}px; height: {:.0}px;", size.width, size.height)}>
            <style>
                {r#"
                    .stack-container {
                        position: relative;
                        perspective: 600px;
                    }
                    .card-rotate {
                        position: absolute;
                        touch-action: none;
                        user-select: none;
                    }
                    .card-rotate.draggable {
                        cursor: grab;
                    }
                    .card-rotate.dragging {
                        cursor: grabbing;
                    }
                    .stack-card {
                        border-radius: 20px;
                        border: 5px solid #fff;
                        overflow: hidden;
                        background: #e0f2fe;
                        transform-origin: 90% 90%;
                        transition: transform 0.45s cubic-bezier(0.34, 1.56, 0.64, 1);
                    }
                    .stack-card img {
                        pointer-events: none;
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                "#}
            </style>
            { for current.order().ids().iter().filter_map(|&id| {
                let item = props.items.iter().find(|item| item.id == id)?;
                let pose = current.pose(id)?;
                let is_dragging = dragging == Some(id);
                let settle = if is_dragging {
                    "transition: none;"
                } else {
                    "transition: transform 0.35s cubic-bezier(0.25, 0.46, 0.45, 0.94);"
                };
                Some(html! {
                    <div
                        key={id}
                        class={classes!(
                            "card-rotate",
                            pose.draggable.then_some("draggable"),
                            is_dragging.then_some("dragging"),
                        )}
                        style={format!("transform: {}; z-index: {}; {}", pose.drag_transform(), pose.z_index, settle)}
                        onpointerdown={on_down(id)}
                        onpointermove={on_move(id)}
                        onpointerup={on_up.clone()}
                        onpointercancel={on_cancel.clone()}
                    >
                        <div
                            class="stack-card"
                            style={format!(
                                "width: {:.0}px; height: {:.0}px; transform: {};",
                                size.width, size.height, pose.rest_transform()
                            )}
                            onclick={on_tap(id)}
                        >
                            <FallbackImage src={item.image} alt={item.title} />
                        </div>
                    </div>
                })
            }) }
        </div>
    }
}

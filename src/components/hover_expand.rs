use std::rc::Rc;

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::components::fallback_image::FallbackImage;

const BODY_LOCK_CLASS: &str = "modal-open";

#[derive(Clone, Debug, PartialEq)]
pub struct Review {
    pub image: &'static str,
    pub text: &'static str,
}

pub enum ExpandAction {
    Select(usize),
    Open(usize),
    Close,
    Key(String),
}

#[derive(Debug, PartialEq)]
pub struct ExpandState {
    pub selected: usize,
    pub open: bool,
    pub len: usize,
}

impl Reducible for ExpandState {
    type Action = ExpandAction;

    fn reduce(self: Rc<Self>, action: ExpandAction) -> Rc<Self> {
        let (selected, open) = match action {
            ExpandAction::Select(index) | ExpandAction::Open(index) if index >= self.len => return self,
            ExpandAction::Select(index) => (index, self.open),
            ExpandAction::Open(index) => (index, true),
            ExpandAction::Close => (self.selected, false),
            ExpandAction::Key(key) if key == "Escape" => (self.selected, false),
            ExpandAction::Key(_) => return self,
        };
        if selected == self.selected && open == self.open {
            return self;
        }
        Rc::new(ExpandState { selected, open, len: self.len })
    }
}

#[derive(Properties, PartialEq)]
pub struct HoverExpandProps {
    pub reviews: &'static [Review],
    #[prop_or(0)]
    pub initial: usize,
    #[prop_or(11)]
    pub max_thumbnails: usize,
}

/// Row of thumbnails where the hovered one widens; a click opens it with
/// its review text in a modal that Escape or a backdrop click closes.
#[function_component(HoverExpand)]
pub fn hover_expand(props: &HoverExpandProps) -> Html {
    let shown = &props.reviews[..props.reviews.len().min(props.max_thumbnails)];
    let len = shown.len();
    let initial = props.initial.min(len.saturating_sub(1));
    let state = use_reducer(move || ExpandState { selected: initial, open: false, len });

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |open| {
                let document = web_sys::window().and_then(|w| w.document());
                let listener = document.as_ref().filter(|_| *open).map(|document| {
                    let callback = Closure::<dyn FnMut(KeyboardEvent)>::new(move |e: KeyboardEvent| {
                        dispatcher.dispatch(ExpandAction::Key(e.key()));
                    });
                    let _ = document.add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref());
                    if let Some(body) = document.body() {
                        let _ = body.class_list().add_1(BODY_LOCK_CLASS);
                    }
                    debug!("review modal opened");
                    callback
                });

                move || {
                    let Some(document) = document else {
                        return;
                    };
                    if let Some(callback) = listener {
                        let _ = document.remove_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref());
                    }
                    if let Some(body) = document.body() {
                        let _ = body.class_list().remove_1(BODY_LOCK_CLASS);
                    }
                }
            },
            state.open,
        );
    }

    let close = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(ExpandAction::Close))
    };

    html! {
        <div class="hover-expand">
            <style>
                {r#"
                    .hover-expand-row {
                        display: flex;
                        justify-content: center;
                        gap: 0.75rem;
                        padding: 2.5rem 1rem 5rem;
                    }
                    .hover-thumb {
                        position: relative;
                        flex-shrink: 0;
                        width: 3rem;
                        height: 20rem;
                        border-radius: 1rem;
                        overflow: hidden;
                        cursor: pointer;
                        transition: width 0.2s ease-out;
                    }
                    .hover-thumb.selected {
                        width: 20rem;
                    }
                    .hover-thumb img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .review-modal {
                        position: fixed;
                        inset: 0;
                        z-index: 60;
                        display: grid;
                        place-content: center;
                        padding: 1rem;
                        background: rgba(255, 255, 255, 0.4);
                        backdrop-filter: blur(6px);
                    }
                    .review-modal-card {
                        max-width: 48rem;
                        width: 100%;
                        border-radius: 1rem;
                        overflow: hidden;
                        background: #fff;
                    }
                    .review-modal-card img {
                        width: 100%;
                        height: 28rem;
                        object-fit: cover;
                    }
                    .review-modal-card p {
                        padding: 1.5rem 2rem;
                        font-size: 1.2rem;
                        font-style: italic;
                        color: #1f2937;
                    }
                    body.modal-open {
                        overflow: hidden;
                    }
                    @media (max-width: 768px) {
                        .hover-thumb {
                            width: 1rem;
                            height: 12rem;
                        }
                        .hover-thumb.selected {
                            width: 12rem;
                        }
                        .review-modal-card img {
                            height: 12rem;
                        }
                    }
                "#}
            </style>
            <div class="hover-expand-row">
                { for shown.iter().enumerate().map(|(i, review)| {
                    let select = {
                        let dispatcher = state.dispatcher();
                        Callback::from(move |_: MouseEvent| dispatcher.dispatch(ExpandAction::Select(i)))
                    };
                    let open = {
                        let dispatcher = state.dispatcher();
                        Callback::from(move |_: MouseEvent| dispatcher.dispatch(ExpandAction::Open(i)))
                    };
                    html! {
                        <div
                            key={i}
                            class={classes!("hover-thumb", (state.selected == i).then_some("selected"))}
                            onmouseenter={select}
                            onclick={open}
                        >
                            <FallbackImage src={review.image} alt={format!("Review {}", i + 1)} />
                        </div>
                    }
                }) }
            </div>
            if state.open {
                if let Some(review) = shown.get(state.selected) {
                    <div class="review-modal" onclick={close}>
                        <div class="review-modal-card" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                            <FallbackImage src={review.image} alt={format!("Review {}", state.selected + 1)} />
                            <p>{format!("\"{}\"", review.text)}</p>
                        </div>
                    </div>
                }
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::Reducible;

    fn state(selected: usize, open: bool) -> Rc<ExpandState> {
        Rc::new(ExpandState { selected, open, len: 5 })
    }

    #[test]
    fn hover_moves_selection_without_opening() {
        let next = state(0, false).reduce(ExpandAction::Select(3));
        assert_eq!(*next, ExpandState { selected: 3, open: false, len: 5 });
    }

    #[test]
    fn click_opens_the_clicked_thumbnail() {
        let next = state(0, false).reduce(ExpandAction::Open(2));
        assert_eq!(next.selected, 2);
        assert!(next.open);
    }

    #[test]
    fn escape_closes_other_keys_do_not() {
        let open = state(1, true);
        assert!(open.clone().reduce(ExpandAction::Key("Enter".to_string())).open);
        let closed = open.reduce(ExpandAction::Key("Escape".to_string()));
        assert!(!closed.open);
        assert_eq!(closed.selected, 1);
    }

    #[test]
    fn backdrop_close_keeps_selection() {
        let closed = state(4, true).reduce(ExpandAction::Close);
        assert_eq!(*closed, ExpandState { selected: 4, open: false, len: 5 });
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let before = state(1, false);
        let after = before.clone().reduce(ExpandAction::Open(5));
        assert!(Rc::ptr_eq(&before, &after));
    }

    #[test]
    fn unchanged_state_is_reused() {
        let before = state(2, false);
        let after = before.clone().reduce(ExpandAction::Select(2));
        assert!(Rc::ptr_eq(&before, &after));
    }
}

use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::components::fallback_image::FallbackImage;

// Slides further than this from the active one are hidden.
const VISIBLE_SPREAD: usize = 2;

#[derive(Clone, Debug, PartialEq)]
pub struct Slide {
    pub title: &'static str,
    pub category: &'static str,
    pub image: &'static str,
    pub description: &'static str,
}

pub fn next_slide(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

/// Signed distance from `active` to `index` going the short way around.
/// Ties on even lengths resolve to the right.
pub fn circular_offset(index: usize, active: usize, len: usize) -> isize {
    if len == 0 {
        return 0;
    }
    let len = len as isize;
    let raw = (index as isize - active as isize).rem_euclid(len);
    if raw > len / 2 {
        raw - len
    } else {
        raw
    }
}

/// Coverflow transform and stacking for a slide `offset` steps from center.
pub fn coverflow_style(offset: isize) -> String {
    let distance = offset.unsigned_abs();
    if distance > VISIBLE_SPREAD {
        return "opacity: 0; pointer-events: none; transform: scale(0.6);".to_string();
    }
    format!(
        "transform: translateX({}%) rotateY({}deg) scale({:.2}); z-index: {}; opacity: 1;",
        offset * 55,
        -offset * 30,
        1.0 - distance as f64 * 0.12,
        10 - distance,
    )
}

pub enum CarouselAction {
    Advance,
    GoTo(usize),
    Hold(bool),
}

#[derive(Debug, PartialEq)]
pub struct CarouselState {
    pub active: usize,
    pub len: usize,
    pub paused: bool,
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: CarouselAction) -> Rc<Self> {
        let (active, paused) = match action {
            CarouselAction::Advance if self.paused => return self,
            CarouselAction::Advance => (next_slide(self.active, self.len), false),
            CarouselAction::GoTo(index) if index < self.len => (index, self.paused),
            CarouselAction::GoTo(_) => return self,
            CarouselAction::Hold(paused) => (self.active, paused),
        };
        Rc::new(CarouselState { active, len: self.len, paused })
    }
}

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub slides: &'static [Slide],
    #[prop_or(3000)]
    pub interval_ms: u32,
}

/// Autoplaying coverflow with pagination bullets. Hovering pauses it.
#[function_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> Html {
    let len = props.slides.len();
    let state = use_reducer(move || CarouselState { active: 0, len, paused: false });

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |(interval_ms, len, paused)| {
                let interval = (*len > 1 && !*paused)
                    .then(|| Interval::new(*interval_ms, move || dispatcher.dispatch(CarouselAction::Advance)));
                move || drop(interval)
            },
            (props.interval_ms, len, state.paused),
        );
    }

    let hold = |paused: bool| {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(CarouselAction::Hold(paused)))
    };

    html! {
        <div class="carousel" onmouseenter={hold(true)} onmouseleave={hold(false)}>
            <style>
                {r#"
                    .carousel {
                        position: relative;
                        width: 100%;
                        padding-bottom: 3rem;
                    }
                    .carousel-track {
                        position: relative;
                        height: 336px;
                        perspective: 1000px;
                        display: flex;
                        justify-content: center;
                    }
                    .carousel-slide {
                        position: absolute;
                        width: 280px;
                        height: 336px;
                        border-radius: 16px;
                        overflow: hidden;
                        box-shadow: 0 20px 40px rgba(0, 0, 0, 0.1);
                        transition: transform 0.4s cubic-bezier(0.4, 0, 0.2, 1), opacity 0.4s ease;
                        cursor: pointer;
                    }
                    .carousel-slide img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .carousel-caption {
                        position: absolute;
                        left: 0;
                        right: 0;
                        bottom: 0;
                        padding: 1rem;
                        color: #fff;
                        background: linear-gradient(to top, rgba(15, 23, 42, 0.8), transparent);
                    }
                    .carousel-caption small {
                        color: #7dd3fc;
                        text-transform: uppercase;
                        letter-spacing: 0.08em;
                    }
                    .carousel-caption p {
                        font-size: 0.8rem;
                        margin: 0.25rem 0 0;
                    }
                    .carousel-dots {
                        display: flex;
                        justify-content: center;
                        gap: 0.5rem;
                        margin-top: 1.5rem;
                    }
                    .carousel-dot {
                        width: 10px;
                        height: 10px;
                        border: none;
                        border-radius: 9999px;
                        background: #cbd5e1;
                        cursor: pointer;
                        padding: 0;
                    }
                    .carousel-dot.active {
                        width: 28px;
                        background: linear-gradient(to right, #2563eb, #06b6d4);
                    }
                "#}
            </style>
            <div class="carousel-track">
                { for props.slides.iter().enumerate().map(|(i, slide)| {
                    let offset = circular_offset(i, state.active, len);
                    let go = {
                        let dispatcher = state.dispatcher();
                        Callback::from(move |_: MouseEvent| dispatcher.dispatch(CarouselAction::GoTo(i)))
                    };
                    html! {
                        <div key={slide.title} class="carousel-slide" style={coverflow_style(offset)} onclick={go}>
                            <FallbackImage src={slide.image} alt={slide.title} />
                            <div class="carousel-caption">
                                <small>{slide.category}</small>
                                <h4>{slide.title}</h4>
                                if offset == 0 {
                                    <p>{slide.description}</p>
                                }
                            </div>
                        </div>
                    }
                }) }
            </div>
            <div class="carousel-dots">
                { for (0..len).map(|i| {
                    let go = {
                        let dispatcher = state.dispatcher();
                        Callback::from(move |_: MouseEvent| dispatcher.dispatch(CarouselAction::GoTo(i)))
                    };
                    html! {
                        <button
                            class={classes!("carousel-dot", (i == state.active).then_some("active"))}
                            aria-label={format!("Show slide {}", i + 1)}
                            onclick={go}
                        />
                    }
                }) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::Reducible;

    fn state(active: usize, len: usize, paused: bool) -> Rc<CarouselState> {
        Rc::new(CarouselState { active, len, paused })
    }

    #[test]
    fn next_slide_wraps() {
        assert_eq!(next_slide(0, 8), 1);
        assert_eq!(next_slide(7, 8), 0);
        assert_eq!(next_slide(0, 1), 0);
        assert_eq!(next_slide(3, 0), 0);
    }

    #[test]
    fn offsets_take_the_short_way_round() {
        assert_eq!(circular_offset(3, 3, 8), 0);
        assert_eq!(circular_offset(4, 3, 8), 1);
        assert_eq!(circular_offset(2, 3, 8), -1);
        assert_eq!(circular_offset(0, 7, 8), 1);
        assert_eq!(circular_offset(7, 0, 8), -1);
        assert_eq!(circular_offset(4, 0, 8), 4);
        assert_eq!(circular_offset(3, 0, 7), 3);
        assert_eq!(circular_offset(4, 0, 7), -3);
    }

    #[test]
    fn far_slides_are_hidden() {
        assert!(coverflow_style(0).contains("z-index: 10"));
        assert!(coverflow_style(-2).contains("opacity: 1"));
        assert!(coverflow_style(3).contains("opacity: 0"));
    }

    #[test]
    fn advance_respects_pause() {
        let next = state(7, 8, false).reduce(CarouselAction::Advance);
        assert_eq!(next.active, 0);
        let held = state(2, 8, true).reduce(CarouselAction::Advance);
        assert_eq!(held.active, 2);
    }

    #[test]
    fn pagination_jumps_and_ignores_out_of_range() {
        let jumped = state(0, 8, true).reduce(CarouselAction::GoTo(5));
        assert_eq!(*jumped, CarouselState { active: 5, len: 8, paused: true });
        let ignored = state(1, 8, false).reduce(CarouselAction::GoTo(8));
        assert_eq!(ignored.active, 1);
    }

    #[test]
    fn hover_toggles_pause() {
        let paused = state(4, 8, false).reduce(CarouselAction::Hold(true));
        assert!(paused.paused);
        assert_eq!(paused.active, 4);
        assert!(!paused.reduce(CarouselAction::Hold(false)).paused);
    }
}

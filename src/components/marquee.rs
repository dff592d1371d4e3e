use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

const MAX_FRAME: f64 = 0.1;

/// Moves the track `speed * dt` px and wraps once a whole copy has passed.
/// A non-positive `span` leaves the track where it is.
pub fn advance(position: f64, speed: f64, dt: f64, span: f64, reverse: bool) -> f64 {
    if span <= 0.0 {
        return position;
    }
    let step = speed * dt;
    if reverse {
        let next = position + step;
        if next >= span {
            next - span
        } else {
            next
        }
    } else {
        let next = position - step;
        if next <= -span {
            next + span
        } else {
            next
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct MarqueeProps {
    pub children: Children,
    #[prop_or(24.0)]
    pub gap: f64,
    /// Pixels per second.
    #[prop_or(20.0)]
    pub speed: f64,
    #[prop_or_default]
    pub reverse: bool,
}

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Endless horizontal strip. The children are rendered twice so the seam
/// never shows.
#[function_component(Marquee)]
pub fn marquee(props: &MarqueeProps) -> Html {
    let track = use_node_ref();
    let copy = use_node_ref();

    {
        let track = track.clone();
        let copy = copy.clone();
        use_effect_with_deps(
            move |(gap, speed, reverse)| {
                let (gap, speed, reverse) = (*gap, *speed, *reverse);
                let window = web_sys::window();
                let frame = Rc::new(Cell::new(None::<i32>));
                let slot: FrameSlot = Rc::new(RefCell::new(None));

                if let Some(window) = window.clone() {
                    let next_frame = frame.clone();
                    let this = slot.clone();
                    let looping = window.clone();
                    let position = Cell::new(0.0_f64);
                    let last = Cell::new(None::<f64>);
                    *slot.borrow_mut() = Some(Closure::<dyn FnMut(f64)>::new(move |time: f64| {
                        let dt = last.replace(Some(time)).map_or(0.0, |prev| ((time - prev) / 1000.0).clamp(0.0, MAX_FRAME));
                        let span = copy.cast::<Element>().map_or(0.0, |el| el.scroll_width() as f64) + gap;
                        position.set(advance(position.get(), speed, dt, span, reverse));
                        if let Some(track) = track.cast::<Element>() {
                            let _ = track.set_attribute(
                                "style",
                                &format!("gap: {}px; transform: translateX({:.2}px);", gap, position.get()),
                            );
                        }
                        if let Some(callback) = this.borrow().as_ref() {
                            if let Ok(id) = looping.request_animation_frame(callback.as_ref().unchecked_ref()) {
                                next_frame.set(Some(id));
                            }
                        }
                    }));
                    if let Some(callback) = slot.borrow().as_ref() {
                        if let Ok(id) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                            frame.set(Some(id));
                        }
                    }
                }

                move || {
                    if let (Some(window), Some(id)) = (window, frame.take()) {
                        let _ = window.cancel_animation_frame(id);
                    }
                    // The frame closure holds its own slot; clearing it breaks the cycle.
                    slot.borrow_mut().take();
                }
            },
            (props.gap, props.speed, props.reverse),
        );
    }

    let gap = format!("gap: {}px;", props.gap);
    html! {
        <div class="marquee">
            <style>
                {r#"
                    .marquee {
                        position: relative;
                        overflow: hidden;
                        width: 100%;
                    }
                    .marquee-track, .marquee-copy {
                        display: flex;
                        align-items: center;
                        width: max-content;
                        will-change: transform;
                    }
                "#}
            </style>
            <div class="marquee-track" ref={track} style={gap.clone()}>
                <div class="marquee-copy" ref={copy} style={gap.clone()}>
                    { for props.children.iter() }
                </div>
                <div class="marquee-copy" aria-hidden="true" style={gap}>
                    { for props.children.iter() }
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_left_by_default() {
        assert_eq!(advance(0.0, 20.0, 0.5, 500.0, false), -10.0);
    }

    #[test]
    fn wraps_after_one_copy() {
        let wrapped = advance(-495.0, 20.0, 0.5, 500.0, false);
        assert!((wrapped - -5.0).abs() < 1e-9);
        let reversed = advance(495.0, 20.0, 0.5, 500.0, true);
        assert!((reversed - 5.0).abs() < 1e-9);
    }

    #[test]
    fn reverse_moves_right() {
        assert_eq!(advance(0.0, 20.0, 1.0, 500.0, true), 20.0);
    }

    #[test]
    fn unmeasured_track_stays_put() {
        assert_eq!(advance(-12.0, 20.0, 1.0, 0.0, false), -12.0);
    }

    #[test]
    fn long_run_stays_within_one_span() {
        let mut position = 0.0;
        for _ in 0..10_000 {
            position = advance(position, 20.0, 1.0 / 60.0, 300.0, false);
            assert!(position <= 0.0 && position > -300.0);
        }
    }
}

//! Wheel smoothing and animated in-page scrolling.
//!
//! The app root creates one [`SmoothScroll`], shares it through context as a
//! [`SmoothScrollHandle`] and calls [`SmoothScroll::destroy`] when it
//! unmounts.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, WheelEvent, Window};

use crate::config::SmoothScrollConfig;

const SETTLE_DISTANCE: f64 = 0.5;
const LINE_HEIGHT: f64 = 16.0;
const DEFAULT_FRAME: f64 = 1.0 / 60.0;
const MAX_FRAME: f64 = 0.1;

/// Wheel delta in pixels. Line and page deltas are scaled up.
fn wheel_delta(mode: u32, delta_y: f64, page_height: f64) -> f64 {
    match mode {
        WheelEvent::DOM_DELTA_LINE => delta_y * LINE_HEIGHT,
        WheelEvent::DOM_DELTA_PAGE => delta_y * page_height,
        _ => delta_y,
    }
}

pub fn ease(t: f64) -> f64 {
    (1.001 - 2f64.powf(-10.0 * t)).min(1.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Motion {
    Idle,
    Follow { target: f64 },
    Tween { from: f64, to: f64, elapsed: f64 },
}

/// Scroll position state machine, advanced once per animation frame.
#[derive(Debug)]
pub struct ScrollAnimator {
    current: f64,
    max: f64,
    motion: Motion,
    config: SmoothScrollConfig,
}

impl ScrollAnimator {
    pub fn new(config: SmoothScrollConfig) -> Self {
        Self {
            current: 0.0,
            max: 0.0,
            motion: Motion::Idle,
            config,
        }
    }

    pub fn position(&self) -> f64 {
        self.current
    }

    pub fn is_animating(&self) -> bool {
        self.motion != Motion::Idle
    }

    /// Adopts the page's real scroll state. Ignored mid animation.
    pub fn sync(&mut self, position: f64, max: f64) {
        self.max = max.max(0.0);
        if !self.is_animating() {
            self.current = position.clamp(0.0, self.max);
        }
    }

    pub fn target(&self) -> f64 {
        match self.motion {
            Motion::Idle => self.current,
            Motion::Follow { target } => target,
            Motion::Tween { to, .. } => to,
        }
    }

    pub fn wheel(&mut self, delta: f64) {
        let target = (self.target() + delta * self.config.wheel_multiplier).clamp(0.0, self.max);
        self.motion = Motion::Follow { target };
    }

    pub fn scroll_to(&mut self, position: f64) {
        self.motion = Motion::Tween {
            from: self.current,
            to: position.clamp(0.0, self.max),
            elapsed: 0.0,
        };
    }

    /// Advances by `dt` seconds and returns the position to write, if any.
    pub fn step(&mut self, dt: f64) -> Option<f64> {
        match self.motion {
            Motion::Idle => None,
            Motion::Follow { target } => {
                let factor = 1.0 - (-self.config.lerp * 60.0 * dt).exp();
                self.current += (target - self.current) * factor;
                if (target - self.current).abs() < SETTLE_DISTANCE {
                    self.current = target;
                    self.motion = Motion::Idle;
                }
                Some(self.current)
            }
            Motion::Tween { from, to, elapsed } => {
                let elapsed = elapsed + dt;
                let t = if self.config.duration > 0.0 {
                    (elapsed / self.config.duration).min(1.0)
                } else {
                    1.0
                };
                if t >= 1.0 {
                    self.current = to;
                    self.motion = Motion::Idle;
                } else {
                    self.current = from + (to - from) * ease(t);
                    self.motion = Motion::Tween { from, to, elapsed };
                }
                Some(self.current)
            }
        }
    }
}

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

struct Shared {
    animator: RefCell<ScrollAnimator>,
    frame: Cell<Option<i32>>,
    last_time: Cell<Option<f64>>,
}

fn max_scroll(window: &Window) -> f64 {
    let scroll_height = window
        .document()
        .and_then(|document| document.document_element())
        .map_or(0.0, |root| root.scroll_height() as f64);
    let viewport = window.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(0.0);
    (scroll_height - viewport).max(0.0)
}

fn sync_with_page(window: &Window, shared: &Shared) {
    let position = window.scroll_y().unwrap_or(0.0);
    shared.animator.borrow_mut().sync(position, max_scroll(window));
}

fn request_frame(window: &Window, shared: &Shared, on_frame: &FrameSlot) {
    if shared.frame.get().is_some() {
        return;
    }
    let slot = on_frame.borrow();
    let Some(callback) = slot.as_ref() else {
        return;
    };
    match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
        Ok(id) => shared.frame.set(Some(id)),
        Err(_) => warn!("smooth scroll could not schedule a frame"),
    }
}

pub struct SmoothScroll {
    window: Window,
    shared: Rc<Shared>,
    on_wheel: Closure<dyn FnMut(WheelEvent)>,
    on_frame: FrameSlot,
    destroyed: Cell<bool>,
}

impl SmoothScroll {
    pub fn attach(config: SmoothScrollConfig) -> Option<Self> {
        let window = web_sys::window()?;
        let shared = Rc::new(Shared {
            animator: RefCell::new(ScrollAnimator::new(config)),
            frame: Cell::new(None),
            last_time: Cell::new(None),
        });
        let on_frame: FrameSlot = Rc::new(RefCell::new(None));

        {
            let window = window.clone();
            let shared = shared.clone();
            let this = on_frame.clone();
            *on_frame.borrow_mut() = Some(Closure::<dyn FnMut(f64)>::new(move |time: f64| {
                shared.frame.set(None);
                let dt = shared
                    .last_time
                    .get()
                    .map_or(DEFAULT_FRAME, |last| ((time - last) / 1000.0).clamp(0.0, MAX_FRAME));
                shared.last_time.set(Some(time));

                let next = shared.animator.borrow_mut().step(dt);
                if let Some(y) = next {
                    window.scroll_to_with_x_and_y(0.0, y);
                }
                if shared.animator.borrow().is_animating() {
                    request_frame(&window, &shared, &this);
                } else {
                    shared.last_time.set(None);
                }
            }));
        }

        let on_wheel = {
            let window = window.clone();
            let shared = shared.clone();
            let on_frame = on_frame.clone();
            Closure::<dyn FnMut(WheelEvent)>::new(move |event: WheelEvent| {
                if event.ctrl_key() {
                    return; // pinch zoom
                }
                event.prevent_default();
                let page = window.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(0.0);
                let delta = wheel_delta(event.delta_mode(), event.delta_y(), page);
                sync_with_page(&window, &shared);
                shared.animator.borrow_mut().wheel(delta);
                request_frame(&window, &shared, &on_frame);
            })
        };

        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        if window
            .add_event_listener_with_callback_and_add_event_listener_options(
                "wheel",
                on_wheel.as_ref().unchecked_ref(),
                &options,
            )
            .is_err()
        {
            warn!("smooth scroll could not listen for wheel events");
            on_frame.borrow_mut().take();
            return None;
        }
        debug!("smooth scroll attached");

        Some(Self {
            window,
            shared,
            on_wheel,
            on_frame,
            destroyed: Cell::new(false),
        })
    }

    pub fn scroll_to(&self, y: f64) {
        if self.destroyed.get() {
            return;
        }
        sync_with_page(&self.window, &self.shared);
        self.shared.animator.borrow_mut().scroll_to(y);
        request_frame(&self.window, &self.shared, &self.on_frame);
    }

    /// Scrolls so the element with `id` sits `offset` px below the top.
    /// Unknown ids are ignored.
    pub fn scroll_to_anchor(&self, id: &str, offset: f64) {
        let Some(element) = self.window.document().and_then(|d| d.get_element_by_id(id)) else {
            debug!("no #{} to scroll to", id);
            return;
        };
        let top = element.get_bounding_client_rect().top() + self.window.scroll_y().unwrap_or(0.0);
        self.scroll_to(top - offset);
    }

    /// Removes the wheel listener and stops any running animation.
    pub fn destroy(&self) {
        if self.destroyed.replace(true) {
            return;
        }
        let _ = self
            .window
            .remove_event_listener_with_callback("wheel", self.on_wheel.as_ref().unchecked_ref());
        if let Some(id) = self.shared.frame.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        // The frame closure holds its own slot; clearing it breaks the cycle.
        self.on_frame.borrow_mut().take();
        debug!("smooth scroll destroyed");
    }
}

impl Drop for SmoothScroll {
    fn drop(&mut self) {
        self.destroy();
    }
}

/// Cheap clonable reference handed to components through context.
#[derive(Clone)]
pub struct SmoothScrollHandle(Rc<SmoothScroll>);

impl SmoothScrollHandle {
    pub fn new(scroll: SmoothScroll) -> Self {
        Self(Rc::new(scroll))
    }

    pub fn scroll_to_anchor(&self, id: &str, offset: f64) {
        self.0.scroll_to_anchor(id, offset);
    }

    pub fn destroy(&self) {
        self.0.destroy();
    }
}

impl PartialEq for SmoothScrollHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animator(max: f64) -> ScrollAnimator {
        let mut animator = ScrollAnimator::new(SmoothScrollConfig::default());
        animator.sync(0.0, max);
        animator
    }

    fn run(animator: &mut ScrollAnimator) -> usize {
        let mut frames = 0;
        while animator.step(DEFAULT_FRAME).is_some() {
            frames += 1;
            assert!(frames < 10_000, "animation never settled");
        }
        frames
    }

    #[test]
    fn ease_reaches_one() {
        assert!(ease(0.0).abs() < 0.01);
        assert!(ease(0.5) > 0.9);
        assert_eq!(ease(1.0), 1.0);
        assert_eq!(ease(3.0), 1.0);
    }

    #[test]
    fn wheel_glides_to_target() {
        let mut animator = animator(5000.0);
        animator.wheel(300.0);
        let first = animator.step(DEFAULT_FRAME).unwrap();
        assert!(first > 0.0 && first < 300.0);
        run(&mut animator);
        assert_eq!(animator.position(), 300.0);
        assert!(!animator.is_animating());
    }

    #[test]
    fn wheel_deltas_accumulate_and_clamp() {
        let mut animator = animator(500.0);
        animator.wheel(300.0);
        animator.wheel(300.0);
        assert_eq!(animator.target(), 500.0);
        animator.wheel(-2000.0);
        assert_eq!(animator.target(), 0.0);
    }

    #[test]
    fn scroll_to_finishes_after_duration() {
        let mut animator = animator(5000.0);
        animator.scroll_to(1200.0);
        let frames = run(&mut animator);
        assert_eq!(animator.position(), 1200.0);
        // 1.2s at 60fps, give or take the final frame.
        assert!((71..=73).contains(&frames), "took {frames} frames");
    }

    #[test]
    fn sync_is_ignored_while_animating() {
        let mut animator = animator(5000.0);
        animator.scroll_to(1000.0);
        animator.step(DEFAULT_FRAME);
        let position = animator.position();
        animator.sync(4000.0, 5000.0);
        assert_eq!(animator.position(), position);
    }

    #[test]
    fn wheel_deltas_are_normalized_to_pixels() {
        assert_eq!(wheel_delta(WheelEvent::DOM_DELTA_PIXEL, 53.0, 900.0), 53.0);
        assert_eq!(wheel_delta(WheelEvent::DOM_DELTA_LINE, 3.0, 900.0), 48.0);
        assert_eq!(wheel_delta(WheelEvent::DOM_DELTA_PAGE, -1.0, 900.0), -900.0);
    }

    #[test]
    fn idle_animator_produces_nothing() {
        let mut animator = animator(100.0);
        assert_eq!(animator.step(DEFAULT_FRAME), None);
    }
}

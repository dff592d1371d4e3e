use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;
use yew::prelude::*;
use yew_hooks::prelude::use_window_size;

use super::progress::{AnchorMetrics, ProgressTracker};
use super::viewport::Viewport;

fn read_anchor(window: &Window, anchor_id: &str) -> Option<AnchorMetrics> {
    let anchor = window.document()?.get_element_by_id(anchor_id)?;
    let rect = anchor.get_bounding_client_rect();
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    Some(AnchorMetrics {
        top: rect.top(),
        height: rect.height(),
        viewport_height,
    })
}

/// Scroll and resize listeners feeding one [`ProgressTracker`].
///
/// Dropping it removes both listeners and cancels a pending frame.
struct ScrollListener {
    window: Window,
    on_event: Closure<dyn FnMut()>,
    _on_frame: Rc<Closure<dyn FnMut()>>,
    pending: Rc<Cell<Option<i32>>>,
    tracker: Rc<RefCell<ProgressTracker>>,
}

impl ScrollListener {
    fn attach(anchor_id: &'static str, progress: UseStateSetter<f64>) -> Option<Self> {
        let window = web_sys::window()?;
        let tracker = Rc::new(RefCell::new(ProgressTracker::new()));
        let pending = Rc::new(Cell::new(None::<i32>));

        let on_frame = {
            let window = window.clone();
            let tracker = tracker.clone();
            let pending = pending.clone();
            Rc::new(Closure::<dyn FnMut()>::new(move || {
                pending.set(None);
                let mut tracker = tracker.borrow_mut();
                let before = tracker.progress();
                let after = tracker.on_frame(read_anchor(&window, anchor_id));
                if after != before {
                    progress.set(after);
                }
            }))
        };

        let on_event = {
            let window = window.clone();
            let tracker = tracker.clone();
            let pending = pending.clone();
            let on_frame = on_frame.clone();
            Closure::<dyn FnMut()>::new(move || {
                if !tracker.borrow_mut().request_frame() {
                    return;
                }
                let callback: &Closure<dyn FnMut()> = &on_frame;
                match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                    Ok(id) => pending.set(Some(id)),
                    Err(_) => tracker.borrow_mut().cancel_frame(),
                }
            })
        };

        for event in ["scroll", "resize"] {
            if window
                .add_event_listener_with_callback(event, on_event.as_ref().unchecked_ref())
                .is_err()
            {
                warn!("could not listen for {} on window", event);
            }
        }

        // Position on mount, before any scroll happens.
        if let Some(metrics) = read_anchor(&window, anchor_id) {
            tracker.borrow_mut().on_frame(Some(metrics));
        }
        debug!("scroll tracker attached to #{}", anchor_id);

        Some(Self {
            window,
            on_event,
            _on_frame: on_frame,
            pending,
            tracker,
        })
    }

    fn initial_progress(&self) -> f64 {
        self.tracker.borrow().progress()
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        for event in ["scroll", "resize"] {
            let _ = self
                .window
                .remove_event_listener_with_callback(event, self.on_event.as_ref().unchecked_ref());
        }
        if let Some(id) = self.pending.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        self.tracker.borrow_mut().cancel_frame();
        debug!("scroll tracker detached");
    }
}

/// Progress of the viewport through the element with id `anchor_id`.
///
/// Recomputed at most once per animation frame while scrolling or resizing.
#[hook]
pub fn use_scroll_progress(anchor_id: &'static str) -> f64 {
    let progress = use_state(|| 0.0_f64);
    {
        let setter = progress.setter();
        use_effect_with_deps(
            move |anchor_id| {
                let listener = ScrollListener::attach(*anchor_id, setter.clone());
                if let Some(listener) = listener.as_ref() {
                    setter.set(listener.initial_progress());
                }
                move || drop(listener)
            },
            anchor_id,
        );
    }
    *progress
}

#[hook]
pub fn use_viewport() -> Viewport {
    let (width, height) = use_window_size();
    Viewport { width, height }
}

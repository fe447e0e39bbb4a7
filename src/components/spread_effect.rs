//! Full-viewport radial reveal used to mask navigation
//!
//! Two fixed overlays clipped to a circle centered on the click origin:
//! the request color first, then the neutral page background staggered
//! 0.3s behind it. The owner unmounts the effect; it never removes itself.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Neutral background color of the second wipe stage.
const NEUTRAL_COLOR: &str = "#212529";

/// Total time covering both stagger stages before the completion fires.
const DONE_MS: u32 = 800;

#[component]
pub fn SpreadEffect(
    color: String,
    x: f64,
    y: f64,
    /// Set once the reveal has covered the viewport.
    on_done: WriteSignal<bool>,
) -> impl IntoView {
    let (expanded, set_expanded) = signal(false);

    // The clip-path transition only animates if the collapsed state was
    // painted first, so expansion starts one frame after mount.
    let timers: Rc<RefCell<Vec<Timeout>>> = Rc::new(RefCell::new(Vec::new()));
    timers.borrow_mut().push(Timeout::new(16, move || set_expanded.set(true)));
    timers
        .borrow_mut()
        .push(Timeout::new(DONE_MS, move || on_done.set(true)));
    let timers = StoredValue::new_local(timers);
    on_cleanup(move || {
        timers.with_value(|timers| timers.borrow_mut().clear());
    });

    let clip = move || {
        let radius = if expanded.get() { 150 } else { 0 };
        format!("circle({radius}% at {x}px {y}px)")
    };

    view! {
        <div
            class="spread-overlay"
            style:background-color=color
            style:clip-path=clip
            style:transition="clip-path 0.75s"
        ></div>
        <div
            class="spread-overlay"
            style:background-color=NEUTRAL_COLOR
            style:clip-path=clip
            style:transition="clip-path 0.75s 0.3s"
        ></div>
    }
}

//! Page-reveal transition coordinator
//!
//! A single pending request at a time, last write wins. The coordinator is
//! an explicit handle provided through context at the tree root, so any
//! descendant can trigger a transition without prop drilling.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::SpreadEffect;

/// Delay before removing the overlay after navigation, so the new page is
/// painted underneath before the effect unmounts.
const GRACE_MS: u32 = 100;

/// A pending color/origin/URL triple describing an in-progress
/// page-reveal navigation. Consumed exactly once.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionRequest {
    pub color: String,
    pub x: f64,
    pub y: f64,
    pub target_url: String,
}

/// Capability handle for triggering page transitions.
#[derive(Clone, Copy)]
pub struct Transitions {
    set_request: WriteSignal<Option<TransitionRequest>>,
}

impl Transitions {
    /// Record a transition request. A request already pending is replaced;
    /// there is no queue.
    pub fn trigger(&self, color: &str, x: f64, y: f64, target_url: &str) {
        self.set_request.set(Some(TransitionRequest {
            color: color.to_string(),
            x,
            y,
            target_url: target_url.to_string(),
        }));
    }
}

pub fn use_transitions() -> Transitions {
    expect_context::<Transitions>()
}

/// Provides the [`Transitions`] handle to descendants and renders the
/// spread effect for the active request.
#[component]
pub fn TransitionProvider(children: Children) -> impl IntoView {
    let (request, set_request) = signal::<Option<TransitionRequest>>(None);
    let (effect_done, set_effect_done) = signal(false);
    provide_context(Transitions { set_request });

    let navigate = use_navigate();
    let grace: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

    let grace_slot = grace.clone();
    Effect::new(move || {
        if !effect_done.get() {
            return;
        }
        set_effect_done.set(false);
        if let Some(req) = request.get_untracked() {
            navigate(&req.target_url, Default::default());
        }
        let handle = Timeout::new(GRACE_MS, move || set_request.set(None));
        *grace_slot.borrow_mut() = Some(handle);
    });

    let grace = StoredValue::new_local(grace);
    on_cleanup(move || {
        grace.with_value(|grace| {
            grace.borrow_mut().take();
        });
    });

    view! {
        {children()}
        {move || {
            request.get().map(|req| {
                view! {
                    <SpreadEffect
                        color=req.color
                        x=req.x
                        y=req.y
                        on_done=set_effect_done
                    />
                }
            })
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_records_the_full_request() {
        let (request, set_request) = signal::<Option<TransitionRequest>>(None);
        let transitions = Transitions { set_request };

        transitions.trigger("#112233", 10.0, 20.0, "/x");

        let pending = request.get_untracked().expect("request pending");
        assert_eq!(pending.color, "#112233");
        assert_eq!((pending.x, pending.y), (10.0, 20.0));
        assert_eq!(pending.target_url, "/x");
    }

    #[test]
    fn test_pending_request_is_replaced_not_queued() {
        let (request, set_request) = signal::<Option<TransitionRequest>>(None);
        let transitions = Transitions { set_request };

        transitions.trigger("#112233", 10.0, 20.0, "/x");
        transitions.trigger("#445566", 30.0, 40.0, "/y");

        // Last write wins; nothing is queued behind it.
        let pending = request.get_untracked().expect("request pending");
        assert_eq!(pending.color, "#445566");
        assert_eq!(pending.target_url, "/y");

        set_request.set(None);
        assert!(request.get_untracked().is_none());
    }
}

//! Cuboid title that flips to a "Main Menu" face
//!
//! Click rotates the cuboid 180° to show the back face; the back
//! orientation is transient and auto-reverts after 1.5s. A second click
//! while the back is forward navigates to the main page instead.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::html;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::cuboid::{cuboid_faces, FaceKind};
use crate::color::lighten;

/// How long the back face stays forward before snapping back.
const REVERT_MS: u32 = 1500;

#[component]
pub fn InteractiveTitle(
    title: String,
    bg_color: String,
    text_color: String,
    back_color: String,
) -> impl IntoView {
    let (hovered, set_hovered) = signal(false);
    let (flipped, set_flipped) = signal(false);
    // Measured once on mount; the faces are not re-sized on window resize.
    let (dimensions, set_dimensions) = signal((0.0_f64, 0.0_f64));

    let container_ref = NodeRef::<html::Div>::new();
    let navigate = use_navigate();

    Effect::new(move || {
        if let Some(container) = container_ref.get() {
            if dimensions.get_untracked() == (0.0, 0.0) {
                let rect = container.get_bounding_client_rect();
                if rect.width() > 0.0 {
                    set_dimensions.set((rect.width(), rect.height()));
                }
            }
        }
    });

    let revert: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let revert_slot = revert.clone();
    Effect::new(move || {
        if flipped.get() {
            let handle = Timeout::new(REVERT_MS, move || set_flipped.set(false));
            *revert_slot.borrow_mut() = Some(handle);
        }
    });
    let revert = StoredValue::new_local(revert);
    on_cleanup(move || {
        revert.with_value(|revert| {
            revert.borrow_mut().take();
        });
    });

    let on_click = move |_: web_sys::MouseEvent| {
        if flipped.get_untracked() {
            navigate("/main", Default::default());
        } else {
            set_flipped.set(true);
        }
    };

    let rotation = move || {
        let rotate_x = if flipped.get() { 180.0 } else { 0.0 };
        let yaw_sign = if flipped.get() { -1.0 } else { 1.0 };
        if hovered.get() {
            format!(
                "rotateX({}deg) rotateY({}deg) scale(1.00)",
                rotate_x - 12.5,
                yaw_sign * 25.0
            )
        } else {
            format!(
                "rotateX({}deg) rotateY({}deg) scale(0.95)",
                rotate_x - 7.5,
                yaw_sign * 20.0
            )
        }
    };

    let hover_color = lighten(&bg_color);

    view! {
        <div class="cuboid-box" node_ref=container_ref>
            <div
                class="cuboid"
                style:transform=rotation
                on:mouseenter=move |_| set_hovered.set(true)
                on:mouseleave=move |_| set_hovered.set(false)
                on:click=on_click
            >
                {move || {
                    let (box_w, box_h) = dimensions.get();
                    let is_flipped = flipped.get();
                    let is_hovered = hovered.get();
                    let fill = if is_flipped {
                        back_color.clone()
                    } else if is_hovered {
                        hover_color.clone()
                    } else {
                        bg_color.clone()
                    };
                    let ink = if is_flipped { bg_color.clone() } else { text_color.clone() };
                    let border = if is_flipped { back_color.clone() } else { bg_color.clone() };
                    let title = title.clone();

                    cuboid_faces(box_w, box_h)
                        .into_iter()
                        .map(|face| {
                            let label = match face.kind {
                                FaceKind::Front => Some(title.clone()),
                                FaceKind::Back => Some("Main Menu".to_string()),
                                _ => None,
                            };
                            view! {
                                <div
                                    class="cuboid-face"
                                    style:width=format!("{}px", face.width)
                                    style:height=format!("{}px", face.height)
                                    style:left=format!("{}px", -face.width / 2.0)
                                    style:top=format!("{}px", -face.height / 2.0)
                                    style:transform=face.transform
                                    style:background-color=fill.clone()
                                    style:color=ink.clone()
                                    style:border-color=border.clone()
                                >
                                    {label.map(|text| view! { <h2 class="cuboid-title">{text}</h2> })}
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

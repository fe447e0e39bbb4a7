//! Flippable, pointer-tilt-reactive carousel card
//!
//! The front face shows the summary, the back face the description and
//! ingredients. An oversized invisible hitbox drives the tilt so it also
//! triggers near the card edges. Clicking inside the visible bounds asks
//! the transition coordinator to navigate to the detail view.

use leptos::html;
use leptos::prelude::*;

use crate::animation::{resting_transform, tilt_angles, tilt_transform, Role};
use crate::transition::use_transitions;

#[component]
pub fn InteractiveCard(
    title: String,
    description: String,
    ingredients: Vec<String>,
    /// Category name shown under the front image.
    family: String,
    image: String,
    bg_color: String,
    text_color: String,
    #[prop(into)] role: Signal<Role>,
) -> impl IntoView {
    let (flipped, set_flipped) = signal(false);
    let (light_visible, set_light_visible) = signal(false);
    let (light_pos, set_light_pos) = signal((0.0_f64, 0.0_f64));
    let (shine_pos, set_shine_pos) = signal((0.0_f64, 0.0_f64));
    let (transform, set_transform) = signal(resting_transform(role.get_untracked()));

    let card_ref = NodeRef::<html::Div>::new();
    let transitions = use_transitions();

    // Role changes (carousel advancing) snap the card back to its resting pose.
    Effect::new(move || {
        set_transform.set(resting_transform(role.get()));
    });

    let on_mouse_move = move |ev: web_sys::MouseEvent| {
        let Some(card) = card_ref.get_untracked() else {
            return;
        };
        let rect = card.get_bounding_client_rect();
        let x = ev.client_x() as f64 - rect.left();
        let y = ev.client_y() as f64 - rect.top();
        set_light_pos.set((x, y));

        let center_x = rect.width() / 2.0;
        let center_y = rect.height() / 2.0;
        if center_x == 0.0 || center_y == 0.0 {
            return;
        }
        let dx = (center_x - x) / center_x;
        let dy = (y - center_y) / center_y;
        let (rotate_x, rotate_y) = tilt_angles(dx, dy);
        set_transform.set(tilt_transform(role.get_untracked(), rotate_x, rotate_y));

        // Shine band sits at the midpoint of pointer and card center.
        set_shine_pos.set(((center_x + x) / 2.0, (center_y + y) / 2.0));
    };

    let reset_transform = move |_: web_sys::MouseEvent| {
        set_transform.set(resting_transform(role.get_untracked()));
    };

    let click_color = bg_color.clone();
    let click_title = title.clone();
    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        let Some(card) = card_ref.get_untracked() else {
            return;
        };
        // The hitbox is larger than the card; only clicks inside the
        // rendered bounds count.
        let rect = card.get_bounding_client_rect();
        let (x, y) = (ev.client_x() as f64, ev.client_y() as f64);
        if x >= rect.left() && x <= rect.right() && y >= rect.top() && y <= rect.bottom() {
            let url = format!("/card-details?name={}", urlencoding::encode(&click_title));
            transitions.trigger(&click_color, x, y, &url);
        }
    };

    let front_title = title.clone();
    let alt_title = title;
    let face_style = format!("background-color: {bg_color}; color: {text_color};");
    let back_face_style = face_style.clone();

    view! {
        <div
            class="interactive-card"
            node_ref=card_ref
            style:transform=move || transform.get()
            on:mouseenter=move |_| {
                set_flipped.set(true);
                set_light_visible.set(true);
            }
            on:mouseleave=move |_| {
                set_flipped.set(false);
                set_light_visible.set(false);
            }
            on:click=on_click
        >
            <div class="card-content" class:flipped=move || flipped.get()>
                <div class="card-face" style=face_style>
                    <h2 class="card-title">{front_title}</h2>
                    <img class="card-image" src=image alt=alt_title />
                    <p class="card-family">{family}</p>
                </div>
                <div class="card-face card-face-back" style=back_face_style>
                    <p class="card-description">{description}</p>
                    <ul class="card-ingredients">
                        {ingredients
                            .into_iter()
                            .map(|ingredient| view! { <li>{ingredient}</li> })
                            .collect_view()}
                    </ul>
                    <div
                        class="card-light"
                        class:visible=move || light_visible.get()
                        style:left=move || format!("{}px", light_pos.get().0)
                        style:top=move || format!("{}px", light_pos.get().1)
                    ></div>
                    <div
                        class="card-shine"
                        style:left=move || format!("{}px", shine_pos.get().0 - 500.0)
                        style:top=move || format!("{}px", shine_pos.get().1 - 100.0)
                    ></div>
                </div>
            </div>
            <div
                class="card-hitbox"
                on:mousemove=on_mouse_move
                on:mouseleave=reset_transform
            ></div>
        </div>
    }
}

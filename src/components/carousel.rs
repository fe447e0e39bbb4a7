//! Looping, centered carousel of recommended cocktails

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::console;

use super::InteractiveCard;
use crate::animation::assign_role;
use crate::catalog::{self, Cocktail};

/// Fraction of the track each slide occupies (3.2 slides visible).
const SLIDE_PCT: f64 = 100.0 / 3.2;

#[component]
pub fn Carousel() -> impl IntoView {
    let (slides, set_slides) = signal::<Vec<(String, Cocktail)>>(Vec::new());
    let (active, set_active) = signal(0_usize);
    let (spacing, set_spacing) = signal(0.0_f64);

    Effect::new(move || {
        spawn_local(async move {
            match catalog::fetch_catalog().await {
                Ok(catalog) => set_slides.set(catalog::recommended(&catalog)),
                Err(e) => {
                    console::error_1(&format!("Failed to load catalog: {}", e).into());
                }
            }
        });
    });

    // Slide spacing follows the viewport width (golden-ratio derived).
    let update_spacing = move || {
        if let Some(window) = web_sys::window() {
            if let Some(width) = window.inner_width().ok().and_then(|v| v.as_f64()) {
                set_spacing.set(width / 16.18);
            }
        }
    };
    update_spacing();

    let resize_listener = Closure::<dyn FnMut()>::new(move || update_spacing());
    if let Some(window) = web_sys::window() {
        let _ = window
            .add_event_listener_with_callback("resize", resize_listener.as_ref().unchecked_ref());
    }
    let resize_listener = StoredValue::new_local(resize_listener);
    on_cleanup(move || {
        if let Some(window) = web_sys::window() {
            resize_listener.with_value(|resize_listener| {
                let _ = window.remove_event_listener_with_callback(
                    "resize",
                    resize_listener.as_ref().unchecked_ref(),
                );
            });
        }
    });

    let step = move |delta: i64| {
        let count = slides.with_untracked(|s| s.len());
        if count > 0 {
            set_active.update(|a| {
                *a = (*a as i64 + delta).rem_euclid(count as i64) as usize;
            });
        }
    };

    let track_offset = move || {
        let index = active.get() as f64;
        format!(
            "translateX(calc(50% - {}% - {}px))",
            (index + 0.5) * SLIDE_PCT,
            index * spacing.get()
        )
    };

    view! {
        <div class="carousel">
            <button class="carousel-nav carousel-prev" on:click=move |_| step(-1)>
                "\u{2039}"
            </button>
            <div class="carousel-track" style:transform=track_offset style:gap=move || format!("{}px", spacing.get())>
                {move || {
                    let count = slides.with(|s| s.len());
                    slides
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(index, (family, cocktail))| {
                            let role = Signal::derive(move || {
                                assign_role(index, active.get(), count.max(1))
                            });
                            view! {
                                <div class="carousel-slide" style:flex-basis=format!("{}%", SLIDE_PCT)>
                                    <InteractiveCard
                                        title=cocktail.name.clone()
                                        description=cocktail.description.clone()
                                        ingredients=cocktail.recipe.ingredients.clone()
                                        family=family
                                        image=cocktail.image_path()
                                        bg_color=cocktail.color.clone()
                                        text_color=cocktail.text_color()
                                        role=role
                                    />
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
            <button class="carousel-nav carousel-next" on:click=move |_| step(1)>
                "\u{203a}"
            </button>
        </div>
    }
}

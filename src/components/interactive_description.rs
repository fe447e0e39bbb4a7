//! Cuboid description panel flipping between summary and recipe

use leptos::html;
use leptos::prelude::*;

use super::cuboid::{cuboid_faces, FaceKind};
use crate::color::lighten;

#[component]
pub fn InteractiveDescription(
    description: String,
    ingredients: Vec<String>,
    steps: Vec<String>,
    color: String,
    text_color: String,
) -> impl IntoView {
    let (hovered, set_hovered) = signal(false);
    let (flipped, set_flipped) = signal(false);
    let (dimensions, set_dimensions) = signal((0.0_f64, 0.0_f64));

    let container_ref = NodeRef::<html::Div>::new();

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

    let rotation = move || {
        let pitch = if flipped.get() { 180.0 } else { 0.0 };
        let scale = if hovered.get() { 1.05 } else { 1.0 };
        format!("rotateX({pitch}deg) scale({scale})")
    };

    let hover_color = lighten(&color);

    view! {
        <div class="cuboid-box description-box" node_ref=container_ref>
            <div
                class="cuboid"
                style:transform=rotation
                on:mouseenter=move |_| set_hovered.set(true)
                on:mouseleave=move |_| set_hovered.set(false)
                on:click=move |_| set_flipped.update(|f| *f = !*f)
            >
                {move || {
                    let (box_w, box_h) = dimensions.get();
                    let fill = if hovered.get() { hover_color.clone() } else { color.clone() };
                    let description = description.clone();
                    let ingredients = ingredients.clone();
                    let steps = steps.clone();
                    let ink = text_color.clone();

                    cuboid_faces(box_w, box_h)
                        .into_iter()
                        .map(|face| {
                            let content = match face.kind {
                                FaceKind::Front => Some(
                                    view! {
                                        <p class="description-text">{description.clone()}</p>
                                    }
                                    .into_any(),
                                ),
                                FaceKind::Back => Some(
                                    view! {
                                        <div class="recipe">
                                            <ul class="recipe-ingredients">
                                                {ingredients
                                                    .iter()
                                                    .map(|i| view! { <li>{i.clone()}</li> })
                                                    .collect_view()}
                                            </ul>
                                            <ol class="recipe-steps">
                                                {steps
                                                    .iter()
                                                    .map(|s| view! { <li>{s.clone()}</li> })
                                                    .collect_view()}
                                            </ol>
                                        </div>
                                    }
                                    .into_any(),
                                ),
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
                                    style:border-color=fill.clone()
                                >
                                    {content}
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

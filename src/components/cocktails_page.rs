//! Category browsing grid with wheel-driven horizontal scroll
//!
//! One sub-page per category, each a strip of flip-cards. Vertical wheel
//! input is converted to a fixed horizontal scroll step, and scrolling
//! reveals cards permanently once they enter the viewport.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::console;

use crate::catalog::{self, Category, Cocktail};
use crate::viewport;

/// Horizontal pixels scrolled per wheel notch.
const WHEEL_SCROLL_STEP: i32 = 75;

#[component]
pub fn CocktailsPage() -> impl IntoView {
    let (categories, set_categories) = signal::<Vec<Category>>(Vec::new());
    let container_ref = NodeRef::<html::Div>::new();

    Effect::new(move || {
        spawn_local(async move {
            match catalog::fetch_catalog().await {
                Ok(catalog) => set_categories.set(catalog),
                Err(e) => {
                    console::error_1(&format!("Failed to load catalog: {}", e).into());
                }
            }
        });
    });

    let on_wheel = move |ev: web_sys::WheelEvent| {
        ev.prevent_default();
        if let Some(container) = container_ref.get_untracked() {
            let step = if ev.delta_y() > 0.0 {
                WHEEL_SCROLL_STEP
            } else {
                -WHEEL_SCROLL_STEP
            };
            container.set_scroll_left(container.scroll_left() + step);
        }
    };

    let on_scroll = move |_: web_sys::Event| reveal_visible(container_ref);

    view! {
        <div class="cocktails-outer">
            <div
                class="cocktails-scroll"
                node_ref=container_ref
                on:wheel=on_wheel
                on:scroll=on_scroll
            >
                <div class="cocktails-lede">
                    <div class="lede-box lede-top">
                        <p>"Explore the timeless elegance of traditional cocktails."</p>
                    </div>
                    <div class="lede-box lede-bottom">
                        <p>"Discover the innovative flavors of contemporary mixology."</p>
                    </div>
                </div>
                <div class="category-strip">
                    {move || {
                        categories
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(index, category)| {
                                view! { <CategoryPage category=category index=index /> }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </div>
    }
}

/// Add the one-way `visible` class to every revealable element currently
/// inside the viewport. The class is never removed.
fn reveal_visible(container_ref: NodeRef<html::Div>) {
    let Some(container) = container_ref.get_untracked() else {
        return;
    };
    let Ok(nodes) = container.query_selector_all(".reveal") else {
        return;
    };
    for i in 0..nodes.length() {
        let Some(node) = nodes.item(i) else {
            continue;
        };
        let Ok(element) = node.dyn_into::<web_sys::Element>() else {
            continue;
        };
        if viewport::is_in_viewport(Some(&element)) {
            let _ = element.class_list().add_1("visible");
        }
    }
}

/// Decorative lead image for a category's position in the catalog.
fn lead_image(index: usize) -> Option<&'static str> {
    match index {
        0 => Some("/images/Classic Cocktails.png"),
        1 => Some("/images/Tropical Cocktails.png"),
        2 => Some("/images/Modern Cocktails.png"),
        3 => Some("/images/Additional Recommended Cocktails.png"),
        _ => None,
    }
}

#[component]
fn CategoryPage(category: Category, index: usize) -> impl IntoView {
    let cocktails = category.cocktails.clone();
    view! {
        <div class=format!("category-page category-page-{}", index)>
            {(index == 0).then(|| {
                view! {
                    <div class="vertical-text-container">
                        {(0..4)
                            .map(|_| view! { <div class="vertical-text">"Cocktails\u{a0}"</div> })
                            .collect_view()}
                    </div>
                }
            })}
            <ul class="card-strip">
                {lead_image(index).map(|path| {
                    view! {
                        <li class="lead-container">
                            <img class="reveal lead-image" src=path alt=category.name.clone() />
                        </li>
                    }
                })}
                {cocktails
                    .into_iter()
                    .map(|cocktail| view! { <FlipCard cocktail=cocktail /> })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn FlipCard(cocktail: Cocktail) -> impl IntoView {
    let href = format!(
        "/card-details?name={}",
        urlencoding::encode(&cocktail.name)
    );
    let image = cocktail.image_path();
    let name = cocktail.name.clone();

    view! {
        <li class="flip-card reveal">
            <a href=href>
                <div class="flip-inner">
                    <div class="flip-face flip-front">
                        <div
                            class="rectangle"
                            style:background-color=cocktail.color.clone()
                        ></div>
                    </div>
                    <div class="flip-face flip-back">
                        <img class="flip-image" src=image alt=name />
                    </div>
                </div>
            </a>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lead_image_by_category_position() {
        assert_eq!(lead_image(0), Some("/images/Classic Cocktails.png"));
        assert_eq!(lead_image(1), Some("/images/Tropical Cocktails.png"));
        assert_eq!(lead_image(2), Some("/images/Modern Cocktails.png"));
        assert_eq!(
            lead_image(3),
            Some("/images/Additional Recommended Cocktails.png")
        );
        assert_eq!(lead_image(4), None);
        assert_eq!(lead_image(17), None);
    }
}

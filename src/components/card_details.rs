//! Detail view for a single cocktail
//!
//! The `name` query parameter is the join key into the catalog. A lookup
//! miss leaves the page on its loading placeholder (see DESIGN.md).

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_query_map;
use web_sys::console;

use super::{GlassViewer, InteractiveDescription, InteractiveTitle};
use crate::catalog::{self, find_cocktail};

/// Display bundle resolved from the catalog for the requested cocktail.
#[derive(Debug, Clone, PartialEq)]
struct CocktailDetails {
    title: String,
    family: String,
    description: String,
    ingredients: Vec<String>,
    steps: Vec<String>,
    glass_path: String,
    color: String,
    text_color: String,
    back_color: String,
}

#[component]
pub fn CardDetailsPage() -> impl IntoView {
    let query = use_query_map();
    let (details, set_details) = signal::<Option<CocktailDetails>>(None);

    Effect::new(move || {
        let title = query
            .with(|q| q.get("name"))
            .unwrap_or_else(|| "Cocktail".to_string());

        spawn_local(async move {
            match catalog::fetch_catalog().await {
                Ok(catalog) => {
                    if let Some((category, cocktail)) = find_cocktail(&catalog, &title) {
                        set_details.set(Some(CocktailDetails {
                            title: cocktail.name.clone(),
                            family: category.name.clone(),
                            description: cocktail.description.clone(),
                            ingredients: cocktail.recipe.ingredients.clone(),
                            steps: cocktail.recipe.steps.clone(),
                            glass_path: cocktail.glass_path.clone(),
                            color: cocktail.color.clone(),
                            text_color: cocktail.text_color(),
                            back_color: cocktail.back_color(),
                        }));
                    }
                }
                Err(e) => {
                    console::error_1(&format!("Failed to load catalog: {}", e).into());
                }
            }
        });
    });

    view! {
        {move || match details.get() {
            None => view! { <div class="detail-loading">"Loading..."</div> }.into_any(),
            Some(d) => {
                view! {
                    <div class="detail-page">
                        <div class="detail-glass">
                            <GlassViewer model_url=d.glass_path.clone() />
                        </div>
                        <div class="detail-content">
                            <div class="detail-title">
                                <InteractiveTitle
                                    title=d.title.clone()
                                    bg_color=d.color.clone()
                                    text_color=d.text_color.clone()
                                    back_color=d.back_color.clone()
                                />
                                <p class="detail-family">{d.family.clone()}</p>
                            </div>
                            <InteractiveDescription
                                description=d.description.clone()
                                ingredients=d.ingredients.clone()
                                steps=d.steps.clone()
                                color=d.color.clone()
                                text_color=d.text_color.clone()
                            />
                        </div>
                    </div>
                }
                .into_any()
            }
        }}
    }
}

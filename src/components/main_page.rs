//! Main page: heading plus the recommended-cocktails carousel

use leptos::prelude::*;
use leptos_router::components::A;

use super::Carousel;

#[component]
pub fn MainPage() -> impl IntoView {
    view! {
        <div class="main-page">
            <h1 class="main-title">"Today's Recommended Cocktails"</h1>
            <Carousel />
            <div class="main-bottom">
                <A href="/cocktails">"Browse the full menu"</A>
            </div>
        </div>
    }
}

//! Timed splash screen

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

const SPLASH_MS: u32 = 3000;

#[component]
pub fn IntroPage() -> impl IntoView {
    let navigate = use_navigate();

    let timer = Timeout::new(SPLASH_MS, move || {
        navigate("/main", Default::default());
    });
    // Dropping the handle on unmount cancels the pending navigation.
    let timer = StoredValue::new_local(timer);
    on_cleanup(move || {
        timer.dispose();
    });

    view! {
        <div class="intro-container">
            <div class="intro-loader">
                <h1>"Cocktail"</h1>
            </div>
        </div>
    }
}

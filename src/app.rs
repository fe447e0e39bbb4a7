use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::{CardDetailsPage, CocktailsPage, IntroPage, MainPage};
use crate::transition::TransitionProvider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <TransitionProvider>
                <Routes fallback=|| view! { <div class="not-found">"Page not found."</div> }>
                    <Route path=path!("/") view=IntroPage />
                    <Route path=path!("/main") view=MainPage />
                    <Route path=path!("/cocktails") view=CocktailsPage />
                    <Route path=path!("/card-details") view=CardDetailsPage />
                </Routes>
            </TransitionProvider>
        </Router>
    }
}

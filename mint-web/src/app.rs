//! Loyalty Mint Web App - Leptos Frontend

use leptos::prelude::*;
use leptos_router::{
    components::{A, Route, Router, Routes},
    path,
};

use crate::pages::MintPage;
use crate::state::page::provide_page_context;
use crate::state::wallet::provide_wallet_context;

#[component]
pub fn App() -> impl IntoView {
    provide_wallet_context();
    provide_page_context();

    // Backup for main(): the placeholder may be parsed after the module starts.
    Effect::new(move || {
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(100).await;
            crate::hide_loading_screen();
        });
    });

    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound/> }>
                <Route path=path!("/") view=MintPage/>
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="app-wrap">
            <div class="card" style="text-align: center;">
                <h1>"404 - Page Not Found"</h1>
                <p class="muted">"The page you're looking for doesn't exist."</p>
                <A href="/">
                    <span class="primary-btn" style="display: inline-block; margin-top: 20px;">
                        "Go to Mint"
                    </span>
                </A>
            </div>
        </div>
    }
}

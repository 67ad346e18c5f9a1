use crate::dashboards::{SalesAnalyticsDashboard, SampleDataDashboard};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <Router>
                <div class="app">
                    <NavBar />
                    <main class="app__content">
                        <Routes fallback=|| view! { <p class="no-data">"Page not found"</p> }>
                            <Route path=path!("/") view=SalesAnalyticsDashboard />
                            <Route path=path!("/sample-data") view=SampleDataDashboard />
                        </Routes>
                    </main>
                </div>
            </Router>
        </ConfigProvider>
    }
}

#[component]
fn NavBar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <span class="navbar__brand">"Sales Analytics"</span>
            <div class="navbar__links">
                <A href="/">"Sales Dashboard"</A>
                <A href="/sample-data">"Sample Data"</A>
            </div>
        </nav>
    }
}

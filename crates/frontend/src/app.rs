use crate::routes::routes::AppRoutes;
use contracts::shared::navigation::SiteConfig;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the navigation configuration to the whole app via context.
    // The shell and every page resolve paths through it; tests may provide
    // an alternate page set instead.
    provide_context(SiteConfig::default());

    view! {
        <AppRoutes />
    }
}

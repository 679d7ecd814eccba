use crate::shared::components::ui::Button;
use contracts::shared::navigation::SiteConfig;
use leptos::prelude::*;

/// Fallback for paths no route matches.
#[component]
pub fn NotFound() -> impl IntoView {
    let config = use_context::<SiteConfig>().expect("SiteConfig not found in context");
    let home_url = config.resolve("Home");

    view! {
        <div class="page page--narrow not-found">
            <h1 class="not-found__code">"404"</h1>
            <h2 class="not-found__title">"Page Not Found"</h2>
            <p class="not-found__text">"The page you're looking for doesn't exist or has moved."</p>
            <a href=home_url>
                <Button>"Back to Home"</Button>
            </a>
        </div>
    }
}

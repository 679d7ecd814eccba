use crate::layout::Shell;
use crate::pages::{About, Blog, Contact, Home, NotFound, Projects};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::StaticSegment;

/// Maps navigable paths to page components under the shared chrome.
///
/// Paths are the resolved forms of the logical page names in `SiteConfig`;
/// the bare root also renders Home. Anything else falls through to the
/// not-found page.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=StaticSegment("") view=Home />
                    <Route path=StaticSegment("home") view=Home />
                    <Route path=StaticSegment("about") view=About />
                    <Route path=StaticSegment("projects") view=Projects />
                    <Route path=StaticSegment("blog") view=Blog />
                    <Route path=StaticSegment("contact") view=Contact />
                </Routes>
            </Shell>
        </Router>
    }
}

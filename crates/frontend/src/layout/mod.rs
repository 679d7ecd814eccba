pub mod footer;
pub mod header;

pub use footer::Footer;
pub use header::Header;

use leptos::prelude::*;

/// Page chrome shared by every route.
///
/// Layout structure:
/// ```text
/// +------------------------------------------+
/// |           Header (fixed nav)             |
/// +------------------------------------------+
/// |                                          |
/// |           routed page content            |
/// |                                          |
/// +------------------------------------------+
/// |                 Footer                   |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="site">
            <Header />
            <main class="site__main">{children()}</main>
            <Footer />
        </div>
    }
}

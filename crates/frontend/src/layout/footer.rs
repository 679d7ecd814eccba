use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__inner">
                <span class="footer__note">"Built with Rust and Leptos."</span>
            </div>
        </footer>
    }
}

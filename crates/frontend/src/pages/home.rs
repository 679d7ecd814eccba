use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use contracts::shared::navigation::SiteConfig;
use leptos::prelude::*;

/// Landing page: hero, call-to-action buttons, featured-work teaser.
#[component]
pub fn Home() -> impl IntoView {
    let config = use_context::<SiteConfig>().expect("SiteConfig not found in context");
    let projects_url = config.resolve("Projects");
    let featured_url = projects_url.clone();

    view! {
        <div class="page page--home">
            <section class="hero">
                <h1 class="hero__title">
                    "Creating Digital"
                    <br />
                    <span class="hero__accent">"Experiences"</span>
                </h1>
                <p class="hero__lead">
                    "I'm a passionate developer crafting beautiful, functional applications \
                     that solve real-world problems with elegant code and thoughtful design."
                </p>

                <div class="hero__actions">
                    <a href=projects_url>
                        <Button size="lg" class="hero__cta">
                            "View My Work"
                            {icon("arrow-right")}
                        </Button>
                    </a>
                    <Button variant="outline" size="lg">
                        {icon("download")}
                        "Resume"
                    </Button>
                </div>

                <div class="hero__social">
                    <a href="#" class="hero__social-link" aria-label="GitHub">
                        {icon("github")}
                    </a>
                    <a href="#" class="hero__social-link" aria-label="LinkedIn">
                        {icon("linkedin")}
                    </a>
                    <a href="#" class="hero__social-link" aria-label="Twitter">
                        {icon("twitter")}
                    </a>
                </div>
            </section>

            <section class="featured">
                <header class="page__header">
                    <h2 class="page__title">"Featured Work"</h2>
                    <p class="page__subtitle">
                        "A selection of projects that showcase my expertise in modern web development"
                    </p>
                </header>

                <a href=featured_url class="featured__card">
                    <div class="featured__icon">{icon("arrow-right")}</div>
                    <h3 class="featured__title">"Explore All Projects"</h3>
                    <p class="featured__text">
                        "Discover the full range of applications, websites, and tools I've built"
                    </p>
                </a>
            </section>
        </div>
    }
}

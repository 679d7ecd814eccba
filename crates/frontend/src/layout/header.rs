use crate::shared::icons::icon;
use contracts::shared::navigation::SiteConfig;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Fixed top navigation bar.
///
/// Links are derived from the `SiteConfig` page set; the entry whose
/// resolved path matches the current location gets the active underline.
/// Below the desktop breakpoint the links collapse into a toggled menu.
#[component]
pub fn Header() -> impl IntoView {
    let config = use_context::<SiteConfig>().expect("SiteConfig not found in context");
    let location = use_location();
    let pathname = location.pathname;
    let (menu_open, set_menu_open) = signal(false);

    let brand_url = config.resolve("Home");
    let mobile_items: Vec<(String, String)> = config
        .pages
        .iter()
        .map(|page| (config.resolve(page), page.clone()))
        .collect();

    let desktop_links = config
        .pages
        .iter()
        .map(|page| {
            let url = config.resolve(page);
            let label = page.clone();
            let active = {
                let config = config.clone();
                let page = page.clone();
                move || config.is_active(&page, &pathname.get())
            };
            view! {
                <a href=url class="navbar__link" class:navbar__link--active=active>
                    {label}
                </a>
            }
        })
        .collect_view();

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <a href=brand_url class="navbar__brand">
                    "Portfolio"
                </a>

                <div class="navbar__links">{desktop_links}</div>

                <button
                    class="navbar__toggle"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { icon("x") } else { icon("menu") }}
                </button>
            </div>

            {move || {
                menu_open
                    .get()
                    .then(|| {
                        let items = mobile_items.clone();
                        view! {
                            <div class="navbar__menu">
                                {items
                                    .into_iter()
                                    .map(|(url, label)| {
                                        let icon_name = label.to_lowercase();
                                        let url_for_class = url.clone();
                                        view! {
                                            <a
                                                href=url
                                                class="navbar__menu-item"
                                                class:navbar__menu-item--active=move || {
                                                    pathname.get() == url_for_class
                                                }
                                                on:click=move |_| set_menu_open.set(false)
                                            >
                                                {icon(&icon_name)}
                                                <span>{label}</span>
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })
            }}
        </nav>
    }
}

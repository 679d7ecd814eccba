use crate::shared::components::ui::{Badge, Button};
use crate::shared::data::ContentClient;
use crate::shared::icons::icon;
use crate::shared::load_state::LoadState;
use contracts::domain::project::{Project, ProjectStatus};
use contracts::shared::content::Sort;
use contracts::shared::filter::{visible_records, FilterKey};
use leptos::prelude::*;

/// Projects page: the loaded collection filtered by a status key.
///
/// The filter never touches the source collection; switching keys only
/// changes the derived view.
#[component]
pub fn Projects() -> impl IntoView {
    let (state, set_state) = signal(LoadState::<Project>::Idle);
    let (filter, set_filter) = signal(FilterKey::All);

    set_state.set(LoadState::Loading);
    wasm_bindgen_futures::spawn_local(async move {
        let result = ContentClient::new()
            .list::<Project>(Sort::created_descending())
            .await;
        if let Err(e) = &result {
            log::error!("failed to load projects: {e}");
        }
        // The page may be gone by the time the response lands; try_set
        // drops the update instead of touching disposed state.
        if set_state.try_set(LoadState::from_result(result)).is_some() {
            log::debug!("projects response arrived after navigation, dropped");
        }
    });

    let filter_bar = move || {
        let mut options = vec![(FilterKey::All, "All Projects".to_string())];
        options.extend(
            ProjectStatus::ALL
                .iter()
                .map(|status| (FilterKey::value(status.as_str()), status.label().to_string())),
        );

        view! {
            <div class="filter-bar">
                {options
                    .into_iter()
                    .map(|(key, label)| {
                        let key_for_variant = key.clone();
                        let key_for_click = key.clone();
                        view! {
                            <Button
                                variant=Signal::derive(move || {
                                    if filter.get() == key_for_variant {
                                        "default".to_string()
                                    } else {
                                        "outline".to_string()
                                    }
                                })
                                class="filter-bar__button"
                                on_click=Callback::new(move |_| set_filter.set(key_for_click.clone()))
                            >
                                {icon("filter")}
                                {label}
                            </Button>
                        }
                    })
                    .collect_view()}
            </div>
        }
    };

    let body = move || {
        let s = state.get();
        if s.is_loading() {
            return loading_skeleton();
        }
        if let Some(message) = s.error() {
            return view! {
                <div class="load-error">
                    <h3 class="load-error__title">"Couldn't load projects"</h3>
                    <p class="load-error__detail">{message.to_string()}</p>
                </div>
            }
            .into_any();
        }

        let visible = visible_records(s.records(), &filter.get());
        if visible.is_empty() {
            return view! {
                <div class="empty-state">
                    <div class="empty-state__icon">{icon("projects")}</div>
                    <h3 class="empty-state__title">"No Projects Yet"</h3>
                    <p class="empty-state__text">
                        "Projects will appear here once they're added to the portfolio"
                    </p>
                </div>
            }
            .into_any();
        }

        view! {
            <>
                {filter_bar()}
                <div class="card-grid">
                    {visible
                        .into_iter()
                        .map(|project| view! { <ProjectCard project=project /> })
                        .collect_view()}
                </div>
            </>
        }
        .into_any()
    };

    view! {
        <div class="page page--projects">
            <header class="page__header">
                <h1 class="page__title">"My Projects"</h1>
                <p class="page__subtitle">
                    "A collection of applications, websites, and tools I've built using modern technologies"
                </p>
            </header>
            {body}
        </div>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let status = project.status;
    let shown_tech: Vec<String> = project.technologies.iter().take(3).cloned().collect();
    let tech_overflow = project.technologies.len().saturating_sub(3);
    let title_for_alt = project.title.clone();

    view! {
        <article class="card">
            <div class="card__media">
                {match project.image_url.clone() {
                    Some(src) => {
                        view! { <img src=src alt=title_for_alt class="card__image" /> }.into_any()
                    }
                    None => view! { <div class="card__placeholder">{icon("projects")}</div> }.into_any(),
                }}
                <div class="card__status">
                    <Badge variant=status.badge_variant()>{status.label()}</Badge>
                </div>
            </div>
            <div class="card__body">
                <h3 class="card__title">{project.title.clone()}</h3>
                <p class="card__description">{project.description.clone()}</p>

                {(!shown_tech.is_empty())
                    .then(|| view! {
                        <div class="card__tags">
                            {shown_tech
                                .into_iter()
                                .map(|tech| view! { <Badge>{tech}</Badge> })
                                .collect_view()}
                            {(tech_overflow > 0)
                                .then(|| view! { <Badge>{format!("+{}", tech_overflow)}</Badge> })}
                        </div>
                    })}

                <div class="card__actions">
                    {project.demo_url.clone().map(|url| view! {
                        <a href=url target="_blank" rel="noopener noreferrer" class="card__action">
                            <Button size="sm" class="card__action-button">
                                {icon("external-link")}
                                "Live Demo"
                            </Button>
                        </a>
                    })}
                    {project.github_url.clone().map(|url| view! {
                        <a href=url target="_blank" rel="noopener noreferrer" class="card__action">
                            <Button size="sm" variant="outline" class="card__action-button">
                                {icon("github")}
                                "Code"
                            </Button>
                        </a>
                    })}
                </div>
            </div>
        </article>
    }
}

fn loading_skeleton() -> AnyView {
    view! {
        <div class="skeleton">
            <div class="skeleton__grid">
                {(0..6)
                    .map(|_| view! {
                        <div class="skeleton__card">
                            <div class="skeleton__block skeleton__block--tall"></div>
                            <div class="skeleton__block"></div>
                            <div class="skeleton__block skeleton__block--short"></div>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
    .into_any()
}

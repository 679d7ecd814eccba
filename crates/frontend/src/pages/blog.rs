use crate::shared::components::ui::Badge;
use crate::shared::data::ContentClient;
use crate::shared::icons::icon;
use crate::shared::load_state::LoadState;
use contracts::domain::blog_post::BlogPost;
use contracts::shared::content::Sort;
use contracts::shared::filter::{available_keys, visible_records, FilterKey};
use leptos::prelude::*;

/// Blog page: published posts filtered by a tag selected from the tag
/// universe of the loaded records.
///
/// The selectable tags are recomputed from whatever is currently loaded,
/// deduplicated and sorted alphabetically, so the chip row is stable across
/// reloads.
#[component]
pub fn Blog() -> impl IntoView {
    let (state, set_state) = signal(LoadState::<BlogPost>::Idle);
    let (selected_tag, set_selected_tag) = signal(FilterKey::All);

    set_state.set(LoadState::Loading);
    wasm_bindgen_futures::spawn_local(async move {
        let result = ContentClient::new()
            .filter::<BlogPost, _>(|post| post.published, Sort::created_descending())
            .await;
        if let Err(e) = &result {
            log::error!("failed to load blog posts: {e}");
        }
        // The page may be gone by the time the response lands; try_set
        // drops the update instead of touching disposed state.
        if set_state.try_set(LoadState::from_result(result)).is_some() {
            log::debug!("blog response arrived after navigation, dropped");
        }
    });

    let tag_row = move |posts: &[BlogPost]| {
        let tags = available_keys(posts);
        if tags.is_empty() {
            return view! { <></> }.into_any();
        }

        let all_chip = view! {
            <button
                class="tag-chip"
                class:tag-chip--active=move || selected_tag.get().is_all()
                on:click=move |_| set_selected_tag.set(FilterKey::All)
            >
                "All Posts"
            </button>
        };

        view! {
            <div class="tag-row">
                {all_chip}
                {tags
                    .into_iter()
                    .map(|tag| {
                        let key_for_class = FilterKey::value(tag.clone());
                        let key_for_click = key_for_class.clone();
                        view! {
                            <button
                                class="tag-chip"
                                class:tag-chip--active=move || selected_tag.get() == key_for_class
                                on:click=move |_| set_selected_tag.set(key_for_click.clone())
                            >
                                {icon("tag")}
                                {tag}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any()
    };

    let body = move || {
        let s = state.get();
        if s.is_loading() {
            return loading_skeleton();
        }
        if let Some(message) = s.error() {
            return view! {
                <div class="load-error">
                    <h3 class="load-error__title">"Couldn't load blog posts"</h3>
                    <p class="load-error__detail">{message.to_string()}</p>
                </div>
            }
            .into_any();
        }

        let posts = s.records();
        let visible = visible_records(posts.clone(), &selected_tag.get());
        let listing = if visible.is_empty() {
            view! {
                <div class="empty-state">
                    <div class="empty-state__icon">{icon("blog")}</div>
                    <h3 class="empty-state__title">"No Posts Yet"</h3>
                    <p class="empty-state__text">
                        "Blog posts will appear here once they're published"
                    </p>
                </div>
            }
            .into_any()
        } else {
            view! {
                <div class="post-list">
                    {visible
                        .into_iter()
                        .map(|post| view! { <BlogPostCard post=post /> })
                        .collect_view()}
                </div>
            }
            .into_any()
        };

        view! {
            <>
                {tag_row(&posts)}
                {listing}
            </>
        }
        .into_any()
    };

    view! {
        <div class="page page--narrow">
            <header class="page__header">
                <h1 class="page__title">"Blog"</h1>
                <p class="page__subtitle">
                    "Thoughts, insights, and stories about development, design, and technology"
                </p>
            </header>
            {body}
        </div>
    }
}

#[component]
fn BlogPostCard(post: BlogPost) -> impl IntoView {
    let published_on = post.created_date.format("%b %-d, %Y").to_string();
    let title_for_alt = post.title.clone();

    view! {
        <article class="post">
            {post.cover_image.clone().map(|src| view! {
                <div class="post__cover">
                    <img src=src alt=title_for_alt.clone() class="post__cover-image" />
                </div>
            })}
            <div class="post__body">
                <h2 class="post__title">{post.title.clone()}</h2>
                {post.excerpt.clone().map(|excerpt| view! {
                    <p class="post__excerpt">{excerpt}</p>
                })}
                <div class="post__meta">
                    <span class="post__meta-item">{icon("calendar")} {published_on}</span>
                    {post.reading_time.map(|minutes| view! {
                        <span class="post__meta-item">
                            {icon("clock")}
                            {format!("{} min read", minutes)}
                        </span>
                    })}
                </div>
                {(!post.tags.is_empty())
                    .then(|| view! {
                        <div class="post__tags">
                            {post.tags
                                .clone()
                                .into_iter()
                                .map(|tag| view! { <Badge>{tag}</Badge> })
                                .collect_view()}
                        </div>
                    })}
            </div>
        </article>
    }
}

fn loading_skeleton() -> AnyView {
    view! {
        <div class="skeleton">
            {(0..3)
                .map(|_| view! {
                    <div class="skeleton__card skeleton__card--wide">
                        <div class="skeleton__block"></div>
                        <div class="skeleton__block skeleton__block--short"></div>
                    </div>
                })
                .collect_view()}
        </div>
    }
    .into_any()
}

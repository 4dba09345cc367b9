//! Projects listing mounted into `#projectsContainer`.

use portfolio_core::announce::{LOAD_FAILED, SHUFFLED};
use portfolio_core::listing::{LOAD_ERROR, NO_RESULTS, PLACEHOLDER_IMAGE};
use portfolio_core::{
    Catalog, Filter, ProjectCardView, ProjectListing, SiteConfig, count_message, filter_message,
    load_listing,
};
use web_sys::HtmlImageElement;
use yew::prelude::*;

use crate::announcer::{Announcer, use_announcer};
use crate::error::WebError;
use crate::storage::BrowserStore;
use crate::{dom, paths, reveal, rng};

#[derive(Properties, PartialEq)]
pub struct ProjectsRootProps {
    pub config: SiteConfig,
    pub announcer: Announcer,
}

/// Mount point: provides the announcer to the listing.
#[function_component(ProjectsRoot)]
pub fn projects_root(props: &ProjectsRootProps) -> Html {
    html! {
        <ContextProvider<Announcer> context={props.announcer.clone()}>
            <ProjectsPage config={props.config.clone()} />
        </ContextProvider<Announcer>>
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingState {
    Loading,
    Failed,
    Ready(ProjectListing),
}

#[allow(clippy::future_not_send)]
async fn fetch_catalog(config: &SiteConfig) -> Result<Catalog, WebError> {
    let body = dom::fetch_text(&paths::site_path(&config.data_url)).await?;
    Ok(Catalog::from_json(&body)?)
}

#[derive(Properties, PartialEq)]
pub struct ProjectsPageProps {
    pub config: SiteConfig,
}

/// Fetches the catalog and owns the listing state.
#[function_component(ProjectsPage)]
pub fn projects_page(props: &ProjectsPageProps) -> Html {
    let announcer = use_announcer();
    let state = use_state(|| ListingState::Loading);
    let attempt = use_state(|| 0_u32);

    {
        let state = state.clone();
        let announcer = announcer.clone();
        let config = props.config.clone();
        use_effect_with(*attempt, move |_| {
            state.set(ListingState::Loading);
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_catalog(&config).await {
                    Ok(catalog) => {
                        let listing = load_listing(
                            &catalog,
                            &BrowserStore::session(),
                            &config.session_order_key,
                            &mut rng::browser_rng(),
                        );
                        announcer.polite(count_message(listing.projects().len()));
                        state.set(ListingState::Ready(listing));
                    }
                    Err(err) => {
                        log::error!("error loading projects: {err}");
                        announcer.assertive(LOAD_FAILED);
                        state.set(ListingState::Failed);
                    }
                }
            });
            || {}
        });
    }

    use_effect_with((*state).clone(), |_| {
        reveal::refresh();
        || {}
    });

    let on_retry = {
        let attempt = attempt.clone();
        Callback::from(move |()| attempt.set(*attempt + 1))
    };

    match &*state {
        ListingState::Loading => html! { <ProjectsLoading /> },
        ListingState::Failed => html! { <ProjectsError on_retry={on_retry} /> },
        ListingState::Ready(listing) => {
            let on_filter = {
                let state = state.clone();
                let announcer = announcer.clone();
                Callback::from(move |filter: Filter| {
                    if let ListingState::Ready(current) = &*state {
                        let mut next = current.clone();
                        let count = next.set_filter(filter);
                        announcer.polite(filter_message(next.filter(), count));
                        state.set(ListingState::Ready(next));
                    }
                })
            };
            let on_shuffle = {
                let state = state.clone();
                Callback::from(move |()| {
                    if let ListingState::Ready(current) = &*state {
                        let mut next = current.clone();
                        next.reshuffle(&mut rng::browser_rng());
                        announcer.polite(SHUFFLED);
                        state.set(ListingState::Ready(next));
                    }
                })
            };
            html! {
                <ProjectsView
                    listing={listing.clone()}
                    config={props.config.clone()}
                    on_filter={on_filter}
                    on_shuffle={on_shuffle}
                />
            }
        }
    }
}

#[function_component(ProjectsLoading)]
pub fn projects_loading() -> Html {
    html! {
        <div class="projects-loading text-center" aria-busy="true">
            <p class="text-secondary">{ "Loading projects..." }</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectsErrorProps {
    pub on_retry: Callback<()>,
}

#[function_component(ProjectsError)]
pub fn projects_error(props: &ProjectsErrorProps) -> Html {
    let onclick = {
        let cb = props.on_retry.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div class="projects-error text-center" role="alert">
            <i class="bi bi-exclamation-triangle" aria-hidden="true"></i>
            <p class="text-secondary">{ LOAD_ERROR }</p>
            <button type="button" class="btn btn-primary" {onclick}>{ "Retry" }</button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectsViewProps {
    pub listing: ProjectListing,
    pub config: SiteConfig,
    pub on_filter: Callback<Filter>,
    pub on_shuffle: Callback<()>,
}

/// Filter bar plus the card grid for the current filter.
#[function_component(ProjectsView)]
pub fn projects_view(props: &ProjectsViewProps) -> Html {
    let cards: Vec<ProjectCardView> = props
        .listing
        .filtered()
        .into_iter()
        .map(|project| ProjectCardView::from_project(project, &props.config))
        .collect();

    html! {
        <>
            <FilterBar
                filters={props.listing.filters()}
                active={props.listing.filter().clone()}
                shuffle_enabled={props.config.shuffle_enabled}
                on_filter={props.on_filter.clone()}
                on_shuffle={props.on_shuffle.clone()}
            />
            <ProjectGrid {cards} />
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
    pub filters: Vec<Filter>,
    pub active: Filter,
    #[prop_or(true)]
    pub shuffle_enabled: bool,
    pub on_filter: Callback<Filter>,
    pub on_shuffle: Callback<()>,
}

#[function_component(FilterBar)]
pub fn filter_bar(props: &FilterBarProps) -> Html {
    let buttons = props.filters.iter().map(|filter| {
        let is_active = *filter == props.active;
        let onclick = {
            let cb = props.on_filter.clone();
            let filter = filter.clone();
            Callback::from(move |_| cb.emit(filter.clone()))
        };
        html! {
            <button
                type="button"
                class={classes!("btn", "btn-sm", "filter-btn", is_active.then_some("active"))}
                aria-pressed={is_active.to_string()}
                data-filter={filter.value().to_string()}
                {onclick}
            >
                { filter.caption() }
            </button>
        }
    });

    let shuffle = props.shuffle_enabled.then(|| {
        let onclick = {
            let cb = props.on_shuffle.clone();
            Callback::from(move |_| cb.emit(()))
        };
        html! {
            <button
                type="button"
                id="shuffleBtn"
                class="btn btn-sm filter-btn"
                aria-label="Shuffle projects order"
                {onclick}
            >
                <i class="bi bi-shuffle" aria-hidden="true"></i>{ " Shuffle" }
            </button>
        }
    });

    html! {
        <div id="projectFilters" class="project-filters" role="group" aria-label="Filter projects">
            { for buttons }
            { shuffle.unwrap_or_default() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectGridProps {
    pub cards: Vec<ProjectCardView>,
}

#[function_component(ProjectGrid)]
pub fn project_grid(props: &ProjectGridProps) -> Html {
    if props.cards.is_empty() {
        return html! {
            <div class="projects-grid">
                <div class="text-center projects-empty">
                    <p class="text-secondary">{ NO_RESULTS }</p>
                </div>
            </div>
        };
    }
    html! {
        <div class="projects-grid">
            { for props.cards.iter().map(|card| html! {
                <ProjectCard key={card.key.clone()} card={card.clone()} />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub card: ProjectCardView,
}

fn swap_in_placeholder(event: &Event) {
    if let Some(img) = event.target_dyn_into::<HtmlImageElement>()
        && img.src() != PLACEHOLDER_IMAGE
    {
        img.set_src(PLACEHOLDER_IMAGE);
    }
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let card = &props.card;
    let onerror = Callback::from(|event: Event| swap_in_placeholder(&event));
    let image = html! {
        <div class="project-card-image">
            <img src={card.image.clone()} alt={card.image_alt.clone()} loading="lazy" {onerror} />
        </div>
    };
    let image = match &card.live_url {
        Some(url) => html! {
            <a href={url.clone()} target="_blank" rel="noopener noreferrer"
               aria-label={format!("View {} live demo", card.title)}>
                { image }
            </a>
        },
        None => image,
    };

    html! {
        <div class="project-card" data-category={card.category.clone()}
             data-featured={card.featured.to_string()} data-animate="">
            { image }
            <div class="project-card-body">
                <h3 class="project-card-title">{ card.title.clone() }</h3>
                <p class="project-card-description">{ card.description.clone() }</p>
                <div class="tags mb-md" role="list" aria-label="Technologies used">
                    { for card.tags.iter().map(|tag| html! {
                        <span class="tag" role="listitem">{ tag.clone() }</span>
                    }) }
                </div>
                <div class="project-card-footer">
                    <div class="project-card-links">
                        { card.repo_url.as_ref().map(|url| html! {
                            <a href={url.clone()} target="_blank" rel="noopener noreferrer"
                               title={format!("View {} source code", card.title)}
                               aria-label={format!("View {} code on GitHub", card.title)}>
                                <i class="bi bi-github" aria-hidden="true"></i>
                            </a>
                        }).unwrap_or_default() }
                        { card.live_url.as_ref().map(|url| html! {
                            <a href={url.clone()} target="_blank" rel="noopener noreferrer"
                               title={format!("View {} live demo", card.title)}
                               aria-label={format!("View {} live demo", card.title)}>
                                <i class="bi bi-box-arrow-up-right" aria-hidden="true"></i>
                            </a>
                        }).unwrap_or_default() }
                    </div>
                    { card.case_study_href.as_ref().map(|href| html! {
                        <a href={href.clone()} class="project-card-study">{ "Case Study" }</a>
                    }).unwrap_or_default() }
                </div>
            </div>
        </div>
    }
}

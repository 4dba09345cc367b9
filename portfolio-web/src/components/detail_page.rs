//! Case-study page mounted into `#projectContent`.

use portfolio_core::case_study::FETCH_FAILED;
use portfolio_core::{Catalog, CaseStudyView, LookupError, PageMeta, SiteConfig, lookup};
use serde::Deserialize;
use yew::prelude::*;
use yew_router::prelude::*;

use super::case_study::CaseStudy;
use crate::announcer::Announcer;
use crate::error::WebError;
use crate::{dom, paths, reveal};

#[derive(Properties, PartialEq)]
pub struct ProjectDetailRootProps {
    pub config: SiteConfig,
    pub announcer: Announcer,
}

/// Mount point: router for the `id` query parameter plus the announcer context.
#[function_component(ProjectDetailRoot)]
pub fn project_detail_root(props: &ProjectDetailRootProps) -> Html {
    let router_base = paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <ContextProvider<Announcer> context={props.announcer.clone()}>
                <ProjectDetailPage config={props.config.clone()} />
            </ContextProvider<Announcer>>
        </BrowserRouter>
    }
}

#[derive(Debug, Default, Deserialize)]
struct DetailQuery {
    id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailState {
    Loading,
    Failed,
    NotFound(LookupError),
    Ready(Box<CaseStudyView>),
}

fn apply_page_meta(meta: &PageMeta) {
    let Some(doc) = dom::document() else {
        return;
    };
    doc.set_title(&meta.title);
    if let Ok(Some(tag)) = doc.query_selector("meta[name=\"description\"]") {
        let _ = tag.set_attribute("content", &meta.description);
    }
}

#[allow(clippy::future_not_send)]
async fn fetch_catalog(config: &SiteConfig) -> Result<Catalog, WebError> {
    let body = dom::fetch_text(&paths::site_path(&config.data_url)).await?;
    Ok(Catalog::from_json(&body)?)
}

/// Turn the `id` query parameter into the page state, fetching the catalog only when there is a slug.
#[allow(clippy::future_not_send)]
pub async fn resolve(config: &SiteConfig, slug: Option<String>) -> DetailState {
    // No slug means nothing to fetch.
    let Some(slug) = slug.filter(|slug| !slug.is_empty()) else {
        return DetailState::NotFound(LookupError::NoSlug);
    };
    let catalog = match fetch_catalog(config).await {
        Ok(catalog) => catalog,
        Err(err) => {
            log::error!("error loading project: {err}");
            return DetailState::Failed;
        }
    };
    match lookup(&catalog, Some(&slug)) {
        Ok(project) => {
            apply_page_meta(&PageMeta::for_project(project, &config.owner_name));
            DetailState::Ready(Box::new(CaseStudyView::from_project(project, config)))
        }
        Err(err) => DetailState::NotFound(err),
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectDetailPageProps {
    pub config: SiteConfig,
}

#[function_component(ProjectDetailPage)]
pub fn project_detail_page(props: &ProjectDetailPageProps) -> Html {
    let location = use_location();
    let slug = location
        .and_then(|loc| loc.query::<DetailQuery>().ok())
        .unwrap_or_default()
        .id;
    let state = use_state(|| DetailState::Loading);

    {
        let state = state.clone();
        let config = props.config.clone();
        use_effect_with(slug, move |slug| {
            let slug = slug.clone();
            wasm_bindgen_futures::spawn_local(async move {
                state.set(resolve(&config, slug).await);
            });
            || {}
        });
    }

    use_effect_with((*state).clone(), |_| {
        reveal::refresh();
        || {}
    });

    html! {
        <DetailContent state={(*state).clone()} listing_url={props.config.listing_url.clone()} />
    }
}

#[derive(Properties, PartialEq)]
pub struct DetailContentProps {
    pub state: DetailState,
    pub listing_url: String,
}

#[function_component(DetailContent)]
pub fn detail_content(props: &DetailContentProps) -> Html {
    match &props.state {
        DetailState::Loading => html! {
            <section class="section-lg" aria-busy="true">
                <div class="container text-center">
                    <p class="text-secondary">{ "Loading project..." }</p>
                </div>
            </section>
        },
        DetailState::Failed => html! {
            <ProjectNotFound message={FETCH_FAILED} listing_url={props.listing_url.clone()} />
        },
        DetailState::NotFound(err) => html! {
            <ProjectNotFound message={err.to_string()} listing_url={props.listing_url.clone()} />
        },
        DetailState::Ready(view) => html! { <CaseStudy view={(**view).clone()} /> },
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectNotFoundProps {
    pub message: AttrValue,
    pub listing_url: String,
}

#[function_component(ProjectNotFound)]
pub fn project_not_found(props: &ProjectNotFoundProps) -> Html {
    html! {
        <section class="section-lg">
            <div class="container text-center">
                <h1 class="text-4xl font-bold mb-md">{ "Project Not Found" }</h1>
                <p class="text-xl text-secondary mb-2xl">{ props.message.clone() }</p>
                <a href={props.listing_url.clone()} class="btn btn-primary">{ "Back to Projects" }</a>
            </div>
        </section>
    }
}

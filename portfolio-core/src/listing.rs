//! Project listing pipeline: session-stable ordering, filtering and card view models.
//!
//! A visitor sees the catalog in a random order that stays put for the whole
//! browser session. The first load shuffles and writes the id order to the
//! session store; later loads read it back. Filtering only ever derives a
//! view and never reorders or drops entries from the master list.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::catalog::{Catalog, Project, ProjectId};
use crate::config::SiteConfig;
use crate::store::KeyValueStore;
use crate::text::{capitalize, truncate};

pub const MAX_CARD_TAGS: usize = 5;
pub const NO_RESULTS: &str = "No projects found for this filter.";
pub const LOAD_ERROR: &str = "Unable to load projects. Please try again later.";

/// Inline SVG shown when a card's hero image fails to load.
pub const PLACEHOLDER_IMAGE: &str = "data:image/svg+xml,%3Csvg xmlns=%22http://www.w3.org/2000/svg%22 width=%221200%22 height=%22600%22%3E%3Crect fill=%22%23f8f9fa%22 width=%221200%22 height=%22600%22/%3E%3Ctext x=%2250%25%22 y=%2250%25%22 text-anchor=%22middle%22 dominant-baseline=%22middle%22 fill=%22%23636e72%22 font-family=%22Arial%22 font-size=%2224%22%3EProject Image%3C/text%3E%3C/svg%3E";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    #[default]
    All,
    Featured,
    Category(String),
}

impl Filter {
    /// Parse a `data-filter` value.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "" | "all" => Self::All,
            "featured" => Self::Featured,
            other => Self::Category(other.to_string()),
        }
    }

    /// Value written to the button's `data-filter` attribute.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Featured => "featured",
            Self::Category(c) => c,
        }
    }

    /// Button caption.
    #[must_use]
    pub fn caption(&self) -> String {
        match self {
            Self::All => "All".to_string(),
            Self::Featured => "Featured".to_string(),
            Self::Category(c) => capitalize(c),
        }
    }

    /// Phrase used in announcements, e.g. "Featured projects".
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::All => "All projects".to_string(),
            Self::Featured => "Featured projects".to_string(),
            Self::Category(c) => format!("{} projects", capitalize(c)),
        }
    }

    #[must_use]
    pub fn matches(&self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Featured => project.featured,
            Self::Category(c) => &project.category == c,
        }
    }
}

/// Uniformly permute a copy of `projects` (Fisher-Yates).
pub fn shuffle<R: Rng + ?Sized>(projects: &[Project], rng: &mut R) -> Vec<Project> {
    let mut shuffled = projects.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

/// Rebuild a saved order. Ids no longer in the catalog are skipped.
#[must_use]
pub fn restore_order(projects: &[Project], ids: &[ProjectId]) -> Vec<Project> {
    ids.iter()
        .filter_map(|id| projects.iter().find(|p| &p.id == id))
        .cloned()
        .collect()
}

fn saved_order(store: &impl KeyValueStore, key: &str) -> Option<Vec<ProjectId>> {
    let raw = store.get(key)?;
    match serde_json::from_str::<Vec<ProjectId>>(&raw) {
        Ok(ids) => Some(ids),
        Err(err) => {
            log::warn!("ignoring unreadable saved project order: {err}");
            None
        }
    }
}

/// Build the session listing: reuse the stored order when there is one,
/// otherwise shuffle and remember the result.
pub fn load_listing<S, R>(catalog: &Catalog, store: &S, key: &str, rng: &mut R) -> ProjectListing
where
    S: KeyValueStore + ?Sized,
    R: Rng + ?Sized,
{
    if let Some(ids) = saved_order(&store, key) {
        let restored = restore_order(&catalog.projects, &ids);
        if !restored.is_empty() || catalog.projects.is_empty() {
            log::debug!("projects loaded from saved order");
            return ProjectListing::new(restored);
        }
        log::debug!("saved order matched no projects, reshuffling");
    }

    let shuffled = shuffle(&catalog.projects, rng);
    let ids: Vec<&ProjectId> = shuffled.iter().map(|p| &p.id).collect();
    match serde_json::to_string(&ids) {
        Ok(json) => {
            if let Err(err) = store.set(key, &json) {
                log::warn!("could not persist project order: {err}");
            }
        }
        Err(err) => log::warn!("could not encode project order: {err}"),
    }
    log::debug!("projects loaded and randomized for a new session");
    ProjectListing::new(shuffled)
}

/// The master list for this page view plus the active filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectListing {
    projects: Vec<Project>,
    filter: Filter,
}

impl ProjectListing {
    #[must_use]
    pub fn new(projects: Vec<Project>) -> Self {
        Self {
            projects,
            filter: Filter::All,
        }
    }

    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    #[must_use]
    pub const fn filter(&self) -> &Filter {
        &self.filter
    }

    #[must_use]
    pub fn filtered(&self) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| self.filter.matches(p))
            .collect()
    }

    /// Switch filters and return how many projects are now visible.
    pub fn set_filter(&mut self, filter: Filter) -> usize {
        self.filter = filter;
        self.filtered().len()
    }

    /// Re-permute the in-memory list. The stored session order is left alone.
    pub fn reshuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.projects.shuffle(rng);
    }

    /// All, Featured, then each category in the order it first appears.
    #[must_use]
    pub fn filters(&self) -> Vec<Filter> {
        let mut filters = vec![Filter::All, Filter::Featured];
        for project in &self.projects {
            if project.category.is_empty() {
                continue;
            }
            let filter = Filter::Category(project.category.clone());
            if !filters.contains(&filter) {
                filters.push(filter);
            }
        }
        filters
    }
}

/// Everything a project card renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCardView {
    pub key: String,
    pub title: String,
    pub category: String,
    pub featured: bool,
    pub image: String,
    pub image_alt: String,
    pub description: String,
    pub tags: Vec<String>,
    pub repo_url: Option<String>,
    pub live_url: Option<String>,
    pub case_study_href: Option<String>,
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

impl ProjectCardView {
    #[must_use]
    pub fn from_project(project: &Project, config: &SiteConfig) -> Self {
        Self {
            key: project.id.to_string(),
            title: project.title.clone(),
            category: project.category.clone(),
            featured: project.featured,
            image: project.hero_image.clone(),
            image_alt: format!("{} preview", project.title),
            description: truncate(&project.short_description, config.description_limit),
            tags: project
                .tech_stack
                .names()
                .into_iter()
                .take(MAX_CARD_TAGS)
                .map(str::to_string)
                .collect(),
            repo_url: non_empty(&project.repo_url),
            live_url: non_empty(&project.live_url),
            case_study_href: project
                .has_case_study()
                .then(|| config.detail_href(&project.slug)),
        }
    }
}

//! Case-study page view model.
//!
//! [`CaseStudyView::from_project`] resolves every optional part of a project
//! record to what the page shows: detailed data when the record has it,
//! fixed defaults when it does not. Components only lay the view out.

use crate::catalog::{Catalog, ChallengeItem, Feature, LessonItem, Project, Results, TechStack};
use crate::config::SiteConfig;

pub const MAX_HERO_BADGES: usize = 5;
pub const FETCH_FAILED: &str = "Unable to load project";
pub const DEFAULT_TECH_DESCRIPTION: &str = "Core technology used in development";

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("No project specified")]
    NoSlug,
    #[error("Project not found")]
    NotFound,
}

/// Find the project named by the `id` query parameter.
///
/// # Errors
///
/// [`LookupError::NoSlug`] when the parameter is absent or empty,
/// [`LookupError::NotFound`] when no project carries that exact slug.
pub fn lookup<'a>(catalog: &'a Catalog, slug: Option<&str>) -> Result<&'a Project, LookupError> {
    let slug = slug.filter(|s| !s.is_empty()).ok_or(LookupError::NoSlug)?;
    catalog.find_by_slug(slug).ok_or(LookupError::NotFound)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
}

impl PageMeta {
    #[must_use]
    pub fn for_project(project: &Project, owner: &str) -> Self {
        Self {
            title: format!("{} - Case Study | {owner}", project.title),
            description: format!(
                "{} case study - {}",
                project.title, project.short_description
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroView {
    pub title: String,
    pub subtitle: String,
    pub badges: Vec<String>,
    pub live_url: Option<String>,
    pub repo_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideView {
    pub image: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaView {
    Gallery(Vec<SlideView>),
    Showcase { image: String, alt: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoCard {
    pub heading: &'static str,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepView {
    pub heading: String,
    pub description: String,
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechCard {
    pub name: String,
    pub icon_class: String,
    pub color: String,
    pub bg: String,
    pub description: String,
}

/// Icon styling for a technology listed by name only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultTech {
    pub icon: &'static str,
    pub color: &'static str,
    pub bg: &'static str,
}

const KNOWN_TECH: &[(&str, DefaultTech)] = &[
    ("React", DefaultTech::new("bi-react", "#61DAFB", "rgba(97, 218, 251, 0.2)")),
    ("API", DefaultTech::new("bi-plug", "#8B5CF6", "rgba(139, 92, 246, 0.2)")),
    ("CSS", DefaultTech::new("bi-palette", "#2965f1", "rgba(41, 101, 241, 0.2)")),
    ("LocalStorage", DefaultTech::new("bi-floppy", "#10b981", "rgba(16, 185, 129, 0.2)")),
    ("Recharts", DefaultTech::new("bi-bar-chart", "#8B5CF6", "rgba(139, 92, 246, 0.2)")),
    ("JavaScript", DefaultTech::new("bi-code-slash", "#ea580c", "rgba(234, 88, 12, 0.2)")),
    ("React Router", DefaultTech::new("bi-signpost", "#61DAFB", "rgba(97, 218, 251, 0.2)")),
];

const FALLBACK_TECH: DefaultTech =
    DefaultTech::new("bi-code-slash", "#6c5ce7", "rgba(108, 92, 231, 0.2)");

impl DefaultTech {
    const fn new(icon: &'static str, color: &'static str, bg: &'static str) -> Self {
        Self { icon, color, bg }
    }

    #[must_use]
    pub fn for_name(name: &str) -> Self {
        KNOWN_TECH
            .iter()
            .find(|(known, _)| *known == name)
            .map_or(FALLBACK_TECH, |(_, tech)| *tech)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultCard {
    pub icon: String,
    pub color: String,
    pub title: String,
    pub description: String,
}

const DEFAULT_RESULTS: [(&str, &str, &str, &str); 4] = [
    ("bi-lightning-charge", "#F97316", "Fast Performance", "Optimized for speed and efficiency"),
    ("bi-phone", "#3B82F6", "Fully Responsive", "Works seamlessly across all devices"),
    ("bi-hand-thumbs-up", "#10B981", "Intuitive UX", "Easy to use and navigate"),
    ("bi-shield-check", "#8B5CF6", "Reliable", "Stable and error-free experience"),
];

fn default_results() -> Vec<ResultCard> {
    DEFAULT_RESULTS
        .iter()
        .map(|(icon, color, title, description)| ResultCard {
            icon: (*icon).to_string(),
            color: (*color).to_string(),
            title: (*title).to_string(),
            description: (*description).to_string(),
        })
        .collect()
}

fn tech_cards(stack: &TechStack) -> Vec<TechCard> {
    match stack {
        TechStack::Detailed(items) => items
            .iter()
            .map(|t| TechCard {
                name: t.name.clone(),
                icon_class: t.icon_class(),
                color: t.color.clone(),
                bg: t.bg.clone(),
                description: t.description.clone(),
            })
            .collect(),
        TechStack::Names(names) => names
            .iter()
            .map(|name| {
                let style = DefaultTech::for_name(name);
                TechCard {
                    name: name.clone(),
                    icon_class: style.icon.to_string(),
                    color: style.color.to_string(),
                    bg: style.bg.to_string(),
                    description: DEFAULT_TECH_DESCRIPTION.to_string(),
                }
            })
            .collect(),
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseStudyView {
    pub hero: HeroView,
    pub media: MediaView,
    pub overview: String,
    pub info_cards: Vec<InfoCard>,
    pub problem_goal: Vec<String>,
    pub process: Vec<StepView>,
    pub tech: Vec<TechCard>,
    pub challenges: Vec<ChallengeItem>,
    pub results: Vec<ResultCard>,
    pub lessons: Vec<LessonItem>,
    pub cta_heading: String,
    pub listing_url: String,
}

impl CaseStudyView {
    #[must_use]
    pub fn from_project(project: &Project, config: &SiteConfig) -> Self {
        let hero = HeroView {
            title: project.title.clone(),
            subtitle: project.short_description.clone(),
            badges: project
                .tech_stack
                .names()
                .into_iter()
                .take(MAX_HERO_BADGES)
                .map(str::to_string)
                .collect(),
            live_url: non_empty(&project.live_url),
            repo_url: non_empty(&project.repo_url),
        };

        let media = if project.gallery.is_empty() {
            MediaView::Showcase {
                image: project.hero_image.clone(),
                alt: format!("{} Interface", project.title),
            }
        } else {
            MediaView::Gallery(
                project
                    .gallery
                    .iter()
                    .map(|g| SlideView {
                        image: g.image.clone(),
                        title: g.title.clone(),
                        description: g.description.clone(),
                    })
                    .collect(),
            )
        };

        let impact = project
            .impact
            .clone()
            .or_else(|| {
                project
                    .results
                    .as_ref()
                    .and_then(Results::summary)
                    .map(str::to_string)
            })
            .unwrap_or_default();

        let problem_goal = project.problem_goal.clone().unwrap_or_else(|| {
            vec![project.problem.clone(), project.solution.clone()]
        });

        let process = project
            .process
            .iter()
            .flatten()
            .map(|step| StepView {
                heading: format!("{}. {}", step.number_label(), step.title),
                description: step.description.clone(),
                features: step.features.clone().unwrap_or_default(),
            })
            .collect();

        let results = match &project.results {
            Some(Results::Items(items)) => items
                .iter()
                .map(|r| ResultCard {
                    icon: r.icon.clone(),
                    color: r.color.clone(),
                    title: r.title.clone(),
                    description: r.description.clone(),
                })
                .collect(),
            _ => default_results(),
        };

        Self {
            hero,
            media,
            overview: project
                .overview
                .clone()
                .unwrap_or_else(|| project.short_description.clone()),
            info_cards: vec![
                InfoCard {
                    heading: "The Challenge",
                    body: project.problem.clone(),
                },
                InfoCard {
                    heading: "The Solution",
                    body: project.solution.clone(),
                },
                InfoCard {
                    heading: "The Impact",
                    body: impact,
                },
            ],
            problem_goal,
            process,
            tech: tech_cards(&project.tech_stack),
            challenges: project.challenges.clone().unwrap_or_default(),
            results,
            lessons: project.lessons.clone().unwrap_or_default(),
            cta_heading: format!("Experience {}", project.title),
            listing_url: config.listing_url.clone(),
        }
    }
}

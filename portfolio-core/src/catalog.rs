//! Project records as stored in `projects.json`.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Stable project identifier. The data file may use numbers or strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProjectId {
    Number(u64),
    Text(String),
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for ProjectId {
    fn from(value: u64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for ProjectId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub image: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechItem {
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub bg: String,
    #[serde(default)]
    pub description: String,
}

impl TechItem {
    /// Icon class with a Bootstrap prefix unless it already names a `bi-` or `ri-` icon.
    #[must_use]
    pub fn icon_class(&self) -> String {
        if self.icon.starts_with("bi-") || self.icon.starts_with("ri-") {
            self.icon.clone()
        } else {
            format!("bi-{}", self.icon)
        }
    }
}

/// Either plain technology names or detailed entries with icon styling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TechStack {
    Detailed(Vec<TechItem>),
    Names(Vec<String>),
}

impl Default for TechStack {
    fn default() -> Self {
        Self::Names(Vec::new())
    }
}

impl TechStack {
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        match self {
            Self::Detailed(items) => items.iter().map(|t| t.name.as_str()).collect(),
            Self::Names(names) => names.iter().map(String::as_str).collect(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Detailed(items) => items.is_empty(),
            Self::Names(names) => names.is_empty(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultItem {
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Results are either a prose summary or a list of structured result cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Results {
    Items(Vec<ResultItem>),
    Summary(String),
}

impl Results {
    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        match self {
            Self::Summary(text) => Some(text),
            Self::Items(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub icon: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStep {
    pub number: serde_json::Value,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: Option<Vec<Feature>>,
}

impl ProcessStep {
    /// Step number as displayed, whether the data stores it as a number or a string.
    #[must_use]
    pub fn number_label(&self) -> String {
        match &self.number {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeItem {
    pub title: String,
    #[serde(default)]
    pub problem: String,
    #[serde(default)]
    pub solution: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonItem {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub problem: String,
    #[serde(default)]
    pub solution: String,
    #[serde(default)]
    pub impact: Option<String>,
    #[serde(default)]
    pub problem_goal: Option<Vec<String>>,
    #[serde(default)]
    pub results: Option<Results>,
    #[serde(default)]
    pub tech_stack: TechStack,
    #[serde(default)]
    pub gallery: Vec<GalleryItem>,
    #[serde(default)]
    pub hero_image: String,
    #[serde(default)]
    pub live_url: String,
    #[serde(default)]
    pub repo_url: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub has_case_study: Option<bool>,
    #[serde(default)]
    pub process: Option<Vec<ProcessStep>>,
    #[serde(default)]
    pub challenges: Option<Vec<ChallengeItem>>,
    #[serde(default)]
    pub lessons: Option<Vec<LessonItem>>,
}

impl Project {
    /// Only an explicit `hasCaseStudy: false` hides the case-study link.
    #[must_use]
    pub fn has_case_study(&self) -> bool {
        self.has_case_study != Some(false)
    }
}

/// The whole `projects.json` document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Catalog {
    pub projects: Vec<Project>,
}

impl Catalog {
    #[must_use]
    pub fn empty() -> Self {
        Self { projects: vec![] }
    }

    /// Parse the catalog document.
    ///
    /// # Errors
    ///
    /// Returns an error when the JSON does not match the catalog shape.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn find_by_slug(&self, slug: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.slug == slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r##"{
        "projects": [
            { "id": 1, "slug": "alpha", "title": "Alpha", "techStack": ["React", "CSS"], "results": "Shipped" },
            { "id": "b-2", "slug": "beta", "title": "Beta", "hasCaseStudy": false,
              "techStack": [{ "name": "Rust", "icon": "gear", "color": "#000", "bg": "#fff", "description": "Core" }],
              "results": [{ "icon": "bi-star", "color": "#f00", "title": "Fast", "description": "Quick" }] }
        ]
    }"##;

    #[test]
    fn parses_both_tech_stack_shapes() {
        let catalog = Catalog::from_json(MINIMAL).unwrap();
        assert_eq!(catalog.projects[0].tech_stack.names(), vec!["React", "CSS"]);
        match &catalog.projects[1].tech_stack {
            TechStack::Detailed(items) => assert_eq!(items[0].icon_class(), "bi-gear"),
            TechStack::Names(_) => panic!("expected detailed tech stack"),
        }
    }

    #[test]
    fn parses_both_result_shapes_and_mixed_ids() {
        let catalog = Catalog::from_json(MINIMAL).unwrap();
        assert_eq!(
            catalog.projects[0].results.as_ref().and_then(Results::summary),
            Some("Shipped")
        );
        assert!(matches!(
            catalog.projects[1].results,
            Some(Results::Items(ref items)) if items.len() == 1
        ));
        assert_eq!(catalog.projects[0].id, ProjectId::from(1));
        assert_eq!(catalog.projects[1].id, ProjectId::from("b-2"));
    }

    #[test]
    fn case_study_flag_defaults_to_visible() {
        let catalog = Catalog::from_json(MINIMAL).unwrap();
        assert!(catalog.projects[0].has_case_study());
        assert!(!catalog.projects[1].has_case_study());
    }

    #[test]
    fn icon_class_keeps_known_prefixes() {
        let item = TechItem {
            name: "Remix".into(),
            icon: "ri-remixicon-line".into(),
            color: String::new(),
            bg: String::new(),
            description: String::new(),
        };
        assert_eq!(item.icon_class(), "ri-remixicon-line");
    }

    #[test]
    fn rejects_documents_without_projects() {
        assert!(Catalog::from_json(r#"{ "items": [] }"#).is_err());
    }
}

use portfolio_core::{
    CaseStudyView, Catalog, Filter, KeyValueStore, LookupError, MediaView, MemoryStore,
    ProjectCardView, SiteConfig, load_listing, lookup,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const PROJECTS_JSON: &str = include_str!("../../portfolio-web/static/data/projects.json");

fn catalog() -> Catalog {
    Catalog::from_json(PROJECTS_JSON).expect("bundled catalog parses")
}

#[test]
fn bundled_slugs_are_unique_and_resolvable() {
    let catalog = catalog();
    assert!(!catalog.projects.is_empty());
    let mut slugs: Vec<&str> = catalog.projects.iter().map(|p| p.slug.as_str()).collect();
    slugs.sort_unstable();
    slugs.dedup();
    assert_eq!(slugs.len(), catalog.projects.len());

    for slug in slugs {
        let project = lookup(&catalog, Some(slug)).expect("slug resolves");
        assert_eq!(project.slug, slug);
    }
    assert_eq!(lookup(&catalog, None), Err(LookupError::NoSlug));
    assert_eq!(lookup(&catalog, Some("")), Err(LookupError::NoSlug));
    assert_eq!(lookup(&catalog, Some("missing")), Err(LookupError::NotFound));
}

#[test]
fn every_case_study_builds_a_view() {
    let catalog = catalog();
    let config = SiteConfig::default();
    for project in catalog.projects.iter().filter(|p| p.has_case_study()) {
        let view = CaseStudyView::from_project(project, &config);
        assert_eq!(view.hero.title, project.title);
        assert!(!view.tech.is_empty(), "{} has no tech cards", project.slug);
        match &view.media {
            MediaView::Gallery(slides) => assert_eq!(slides.len(), project.gallery.len()),
            MediaView::Showcase { image, .. } => assert_eq!(image, &project.hero_image),
        }
    }
}

#[test]
fn cards_link_only_to_case_studies() {
    let catalog = catalog();
    let config = SiteConfig::default();
    for project in &catalog.projects {
        let card = ProjectCardView::from_project(project, &config);
        assert_eq!(card.case_study_href.is_some(), project.has_case_study());
        assert!(card.description.chars().count() <= config.description_limit + 1);
    }
}

#[test]
fn session_order_survives_reload_and_filtering() {
    let catalog = catalog();
    let store = MemoryStore::new();
    let key = SiteConfig::default().session_order_key;

    let mut first = load_listing(&catalog, &store, &key, &mut ChaCha8Rng::seed_from_u64(11));
    assert!(store.get(&key).is_some());

    let second = load_listing(&catalog, &store, &key, &mut ChaCha8Rng::seed_from_u64(12));
    assert_eq!(first.projects(), second.projects());

    let featured = first.set_filter(Filter::Featured);
    let expected = catalog.projects.iter().filter(|p| p.featured).count();
    assert_eq!(featured, expected);
    assert_eq!(first.projects().len(), catalog.projects.len());
    assert_eq!(first.projects(), second.projects());
}

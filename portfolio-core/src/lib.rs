//! Portfolio Core
//!
//! Platform-agnostic behavior for the portfolio site: the project data model,
//! listing and filtering, slider and header-scroll state machines, form
//! validation, theme preferences and the view models the web crate renders.
//! Nothing in this crate touches the DOM.

pub mod announce;
pub mod case_study;
pub mod catalog;
pub mod certificates;
pub mod config;
pub mod form;
pub mod listing;
pub mod nav;
pub mod scroll;
pub mod slider;
pub mod starfield;
pub mod store;
pub mod text;
pub mod theme;

pub use announce::{Priority, count_message, filter_message, slide_message, theme_message};
pub use case_study::{
    CaseStudyView, DefaultTech, HeroView, InfoCard, LookupError, MediaView, PageMeta, ResultCard,
    SlideView, TechCard, lookup,
};
pub use catalog::{
    Catalog, CatalogError, ChallengeItem, Feature, GalleryItem, LessonItem, ProcessStep, Project,
    ResultItem, Results, TechItem, TechStack,
};
pub use certificates::CertificateRegistry;
pub use config::{SiteConfig, Timings};
pub use form::{
    FieldError, FieldKind, FormField, Rejection, RelayErrorBody, SubmitOutcome, Submission,
    ValidationReport, is_valid_email, prepare_submission, validate,
};
pub use listing::{
    Filter, ProjectCardView, ProjectListing, load_listing, restore_order, shuffle,
};
pub use nav::{is_active_link, scroll_target_offset, should_close_menu};
pub use scroll::{HeaderFrame, HeaderScroll};
pub use slider::{SlidePosition, SliderError, SliderState, SwipeDirection};
pub use starfield::{Starfield, StarfieldConfig};
pub use store::{KeyValueStore, MemoryStore, StoreError};
pub use theme::{Theme, ThemePreferences};

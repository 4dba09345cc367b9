//! Screen-reader announcement vocabulary.

use crate::listing::Filter;
use crate::text::plural_suffix;
use crate::theme::Theme;

/// Live-region politeness, rendered as the `aria-live` attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Priority {
    #[default]
    Polite,
    Assertive,
}

impl Priority {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Polite => "polite",
            Self::Assertive => "assertive",
        }
    }
}

#[must_use]
pub fn count_message(count: usize) -> String {
    format!("Loaded {count} project{}", plural_suffix(count))
}

#[must_use]
pub fn filter_message(filter: &Filter, count: usize) -> String {
    format!(
        "Filtered to {}. Showing {count} project{}",
        filter.label(),
        plural_suffix(count)
    )
}

/// `index` is zero-based; the message counts from one.
#[must_use]
pub fn slide_message(index: usize, total: usize, title: &str) -> String {
    format!("Slide {} of {total}: {title}", index + 1)
}

#[must_use]
pub fn theme_message(theme: Theme) -> String {
    format!("Switched to {} theme", theme.as_str())
}

pub const SHUFFLED: &str = "Projects shuffled";
pub const LOAD_FAILED: &str = "Error loading projects. Please try again.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_message_pluralizes() {
        assert_eq!(count_message(1), "Loaded 1 project");
        assert_eq!(count_message(4), "Loaded 4 projects");
        assert_eq!(count_message(0), "Loaded 0 projects");
    }

    #[test]
    fn filter_message_names_filter() {
        assert_eq!(
            filter_message(&Filter::Featured, 2),
            "Filtered to Featured projects. Showing 2 projects"
        );
        assert_eq!(
            filter_message(&Filter::Category("web".into()), 1),
            "Filtered to Web projects. Showing 1 project"
        );
        assert_eq!(
            filter_message(&Filter::All, 3),
            "Filtered to All projects. Showing 3 projects"
        );
    }

    #[test]
    fn slide_message_is_one_based() {
        assert_eq!(slide_message(0, 3, "Dashboard"), "Slide 1 of 3: Dashboard");
    }

    #[test]
    fn priority_maps_to_aria_live() {
        assert_eq!(Priority::default().as_str(), "polite");
        assert_eq!(Priority::Assertive.as_str(), "assertive");
        assert_eq!(theme_message(Theme::Dark), "Switched to dark theme");
    }
}

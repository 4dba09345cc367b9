//! Site URLs that respect the deployment base path.
///
/// When `PUBLIC_URL` is set at compile time (e.g. `/portfolio` on a project
/// page), root-anchored paths from the site config are prefixed with it.
/// URLs with a scheme, such as the form relay, are returned unchanged.
#[must_use]
pub fn site_path(path: &str) -> String {
    site_path_with_base(path, option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Base path for the router, `None` when the site is served from the root.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(option_env!("PUBLIC_URL").unwrap_or(""))
}

/// `scheme:` prefix per RFC 3986: a letter, then letters, digits, `+`, `-` or `.`.
fn has_scheme(path: &str) -> bool {
    let Some((scheme, _)) = path.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

fn site_path_with_base(path: &str, base: &str) -> String {
    if has_scheme(path) {
        return path.to_string();
    }
    let base = base.trim_end_matches('/');
    let rel = path.trim_start_matches('/');
    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim_end_matches('/').trim();
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}

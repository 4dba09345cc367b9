use std::collections::BTreeMap;

/// Certificate id to preview image path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateRegistry {
    images: BTreeMap<&'static str, &'static str>,
}

impl Default for CertificateRegistry {
    fn default() -> Self {
        Self {
            images: BTreeMap::from([(
                "fcc-rwdv8",
                "/assets/img/certifications/fcc-responsive-web-design.png",
            )]),
        }
    }
}

impl CertificateRegistry {
    #[must_use]
    pub fn image_for(&self, id: &str) -> Option<&'static str> {
        self.images.get(id).copied()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.images.iter().map(|(id, path)| (*id, *path))
    }

    #[must_use]
    pub fn alt_text(id: &str) -> String {
        format!("Certificate Preview - {id}")
    }
}

/// Progress percentage clamped to `0..=100`.
#[must_use]
pub fn clamp_progress(pct: f64) -> u8 {
    if pct.is_nan() {
        return 0;
    }
    // Clamped to 0..=100 first, so the cast cannot truncate.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let value = pct.clamp(0.0, 100.0).round() as u8;
    value
}

/// Image existence checks only run against a local dev server.
#[must_use]
pub fn is_dev_host(hostname: &str) -> bool {
    matches!(hostname, "localhost" | "127.0.0.1")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_certificate_resolves() {
        let registry = CertificateRegistry::default();
        assert_eq!(
            registry.image_for("fcc-rwdv8"),
            Some("/assets/img/certifications/fcc-responsive-web-design.png")
        );
        assert_eq!(registry.image_for("fcc-js"), None);
        assert_eq!(registry.entries().count(), 1);
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(clamp_progress(-5.0), 0);
        assert_eq!(clamp_progress(42.4), 42);
        assert_eq!(clamp_progress(250.0), 100);
        assert_eq!(clamp_progress(f64::NAN), 0);
    }

    #[test]
    fn dev_hosts() {
        assert!(is_dev_host("localhost"));
        assert!(is_dev_host("127.0.0.1"));
        assert!(!is_dev_host("jerico.dev"));
    }
}

//! Deployment base path handling.
//!
//! A `PUBLIC_URL` set at compile time (for example `/hut` on a project page)
//! prefixes asset URLs and becomes the router basename.

fn public_url() -> &'static str {
    option_env!("PUBLIC_URL").unwrap_or("")
}

/// URL of a static asset under the public base path.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    join_base(public_url(), relative)
}

/// URL of the site translation file.
#[must_use]
pub fn translations_url() -> String {
    asset_path(hut_core::translations_path())
}

/// Router basename, `None` when the site is served from the root.
#[must_use]
pub fn router_base() -> Option<String> {
    normalize_base(public_url())
}

fn join_base(base: &str, relative: &str) -> String {
    match normalize_base(base) {
        Some(base) => format!("{base}/{}", relative.trim_start_matches('/')),
        None => format!("/{}", relative.trim_start_matches('/')),
    }
}

fn normalize_base(base: &str) -> Option<String> {
    let trimmed = base.trim().trim_end_matches('/');
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_deployments_get_absolute_paths() {
        assert_eq!(join_base("", "static/img/logo.svg"), "/static/img/logo.svg");
        assert_eq!(join_base(" / ", "/static/img/logo.svg"), "/static/img/logo.svg");
        assert_eq!(normalize_base("/"), None);
    }

    #[test]
    fn sub_path_deployments_are_prefixed() {
        assert_eq!(
            join_base("/hut/", "static/i18n/translations.json"),
            "/hut/static/i18n/translations.json"
        );
        assert_eq!(normalize_base("/hut/"), Some("/hut".to_string()));
    }

    #[test]
    fn translation_file_lives_under_static() {
        assert!(translations_url().ends_with("/static/i18n/translations.json"));
    }
}

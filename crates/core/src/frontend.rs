//! Facts about the upstream GOV.UK Frontend distribution: the pinned
//! release, version-string normalisation, and the URLs and file names the
//! scaffolder and fetcher agree on.

/// Release used when the caller does not pick one.
pub const DEFAULT_VERSION: &str = "5.10.2";

/// Host the CDN asset-include snippet points at. Also what the sample-page
/// generator sniffs for when detecting a site's asset mode.
pub const CDN_HOST: &str = "cdn.jsdelivr.net";

/// Strip a leading `v` so `v5.10.2` and `5.10.2` both work.
pub fn bare_version(version: &str) -> &str {
    version.strip_prefix('v').unwrap_or(version)
}

/// Tag form (`v5.10.2`) used for upstream release archives.
pub fn release_tag(version: &str) -> String {
    format!("v{}", bare_version(version))
}

/// jsDelivr base URL for a release.
pub fn cdn_base(version: &str) -> String {
    format!("https://{}/npm/govuk-frontend@{}", CDN_HOST, bare_version(version))
}

pub fn cdn_stylesheet(version: &str) -> String {
    format!("{}/dist/{}", cdn_base(version), stylesheet_name(version))
}

pub fn cdn_script(version: &str) -> String {
    format!("{}/dist/{}", cdn_base(version), script_name(version))
}

/// Minified bundle file names as shipped inside the release.
pub fn stylesheet_name(version: &str) -> String {
    format!("govuk-frontend-{}.min.css", bare_version(version))
}

pub fn script_name(version: &str) -> String {
    format!("govuk-frontend-{}.min.js", bare_version(version))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_version_strips_prefix() {
        assert_eq!(bare_version("v5.10.2"), "5.10.2");
        assert_eq!(bare_version("5.10.2"), "5.10.2");
    }

    #[test]
    fn test_release_tag_adds_prefix_once() {
        assert_eq!(release_tag("5.10.2"), "v5.10.2");
        assert_eq!(release_tag("v5.10.2"), "v5.10.2");
    }

    #[test]
    fn test_cdn_urls() {
        assert_eq!(
            cdn_stylesheet("v5.10.2"),
            "https://cdn.jsdelivr.net/npm/govuk-frontend@5.10.2/dist/govuk-frontend-5.10.2.min.css"
        );
        assert_eq!(
            cdn_script("5.10.2"),
            "https://cdn.jsdelivr.net/npm/govuk-frontend@5.10.2/dist/govuk-frontend-5.10.2.min.js"
        );
    }

    #[test]
    fn test_bundle_names() {
        assert_eq!(stylesheet_name("v5.10.2"), "govuk-frontend-5.10.2.min.css");
        assert_eq!(script_name("5.10.2"), "govuk-frontend-5.10.2.min.js");
    }
}

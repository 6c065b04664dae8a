//! URL template rendering and local-filename derivation.

use crate::resolution::Resolution;

/// Default filename when the URL path yields nothing usable.
const DEFAULT_FILENAME: &str = "download.bin";

/// Renders a download URL from a template with `{resolution}` and
/// `{filename}` placeholders.
pub fn render_url(template: &str, resolution: Resolution, filename: &str) -> String {
    template
        .replace("{resolution}", resolution.number())
        .replace("{filename}", filename)
}

/// Extracts the last path segment from a URL for use as a filename hint.
/// The query string is dropped by URL parsing.
///
/// Returns `None` if the URL cannot be parsed or the path is empty/root.
pub fn filename_from_url_path(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let segment = parsed.path().split('/').filter(|s| !s.is_empty()).last()?;
    if segment == "." || segment == ".." {
        return None;
    }
    Some(segment.to_string())
}

/// Replaces characters that are unsafe in Linux filenames and trims
/// leading/trailing dots and spaces.
fn sanitize_filename(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c == '\0' || c == '/' || c == '\\' || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect();
    cleaned.trim_matches(|c| c == ' ' || c == '.').to_string()
}

/// Derives a safe local filename for saving a download, falling back to a
/// fixed default when the URL path has no usable segment.
pub fn derive_filename(url: &str) -> String {
    let raw = match filename_from_url_path(url) {
        Some(s) => s,
        None => return DEFAULT_FILENAME.to_string(),
    };
    let sanitized = sanitize_filename(&raw);
    if sanitized.is_empty() {
        DEFAULT_FILENAME.to_string()
    } else {
        sanitized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_substitutes_both_placeholders() {
        let url = render_url(
            "https://dl.polyhaven.org/file/ph-assets/HDRIs/exr/{resolution}k/{filename}",
            Resolution::K2,
            "forest_2k.exr",
        );
        assert_eq!(
            url,
            "https://dl.polyhaven.org/file/ph-assets/HDRIs/exr/2k/forest_2k.exr"
        );
    }

    #[test]
    fn render_16k_path() {
        let url = render_url(
            "https://dl.polyhaven.org/file/ph-assets/HDRIs/exr/{resolution}k/{filename}",
            Resolution::K16,
            "cave_16k.exr",
        );
        assert_eq!(
            url,
            "https://dl.polyhaven.org/file/ph-assets/HDRIs/exr/16k/cave_16k.exr"
        );
    }

    #[test]
    fn filename_from_normal_path() {
        assert_eq!(
            filename_from_url_path("https://example.com/a/b/forest_4k.exr").as_deref(),
            Some("forest_4k.exr")
        );
    }

    #[test]
    fn filename_drops_query_string() {
        assert_eq!(
            filename_from_url_path("https://example.com/forest_4k.exr?token=abc").as_deref(),
            Some("forest_4k.exr")
        );
    }

    #[test]
    fn filename_root_or_empty_is_none() {
        assert_eq!(filename_from_url_path("https://example.com/"), None);
        assert_eq!(filename_from_url_path("https://example.com"), None);
        assert_eq!(filename_from_url_path("not a url"), None);
    }

    #[test]
    fn derive_falls_back_on_unusable_path() {
        assert_eq!(derive_filename("https://example.com/"), "download.bin");
        assert_eq!(derive_filename("https://example.com/.."), "download.bin");
    }

    #[test]
    fn derive_keeps_plain_names() {
        assert_eq!(
            derive_filename("https://example.com/x/beach_8k.exr"),
            "beach_8k.exr"
        );
    }
}

//! Short-link URLs: pulling the code out of `https://osm.org/go/<code>` and
//! building the URL back.

use url::Url;

/// Host used when building short-link URLs.
pub const SHORT_LINK_BASE: &str = "https://osm.org/go/";

/// Path segment that precedes the code.
const GO_SEGMENT: &str = "go";

/// Returns the code part of a short-link URL, or `input` unchanged when it is
/// not one.
///
/// Anything without a `/` is taken as a bare code. Otherwise the input is
/// parsed as a URL (`https://` assumed when no scheme is given) and the code
/// is the path segment after the first `go`, so the query and fragment never
/// leak into it: `https://osm.org/go/0EEQjE--?m=` yields `0EEQjE--`.
pub fn extract_code(input: &str) -> String {
    if !input.contains('/') {
        return input.to_string();
    }
    match code_segment(input) {
        Some(code) => code,
        None => input.to_string(),
    }
}

fn code_segment(input: &str) -> Option<String> {
    let parsed = if input.contains("://") {
        Url::parse(input).ok()?
    } else {
        Url::parse(&format!("https://{input}")).ok()?
    };
    let mut segments = parsed.path_segments()?;
    segments.by_ref().find(|s| *s == GO_SEGMENT)?;
    Some(segments.next().unwrap_or_default().to_string())
}

/// Builds the full short-link URL for `code`.
pub fn short_url(code: &str) -> String {
    format!("{SHORT_LINK_BASE}{code}")
}

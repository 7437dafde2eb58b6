//! Path pattern matching.
//!
//! # Responsibilities
//! - Match a route pattern (`/api/accounts/:id`) against a request path
//! - Capture `:name` segments into a parameter map
//! - Reject on any literal mismatch or segment count difference
//!
//! # Design Decisions
//! - Both sides are split on `/` with empty segments preserved, so a
//!   trailing slash changes the segment count and never matches
//! - Captured values are the raw path segments (no percent-decoding)
//! - No wildcard/catch-all segments; counts must be equal
//! - Pure function, never panics, signals no-match via `None`

use std::collections::HashMap;

/// Parameters captured from a matched path, keyed by `:name` (without the colon).
pub type PathParams = HashMap<String, String>;

/// Match a route pattern against a request path.
///
/// Returns the captured parameters on a match (empty map when the pattern
/// has no `:name` segments), or `None` when the path does not fit the
/// pattern.
///
/// A pattern segment of exactly `:` has an empty parameter name and captures
/// under the key `""`. If the same name appears in several segments, the
/// last occurrence wins.
pub fn match_path(pattern: &str, path: &str) -> Option<PathParams> {
    let pattern_segments: Vec<&str> = pattern.split('/').collect();
    let path_segments: Vec<&str> = path.split('/').collect();

    if pattern_segments.len() != path_segments.len() {
        return None;
    }

    let mut params = PathParams::new();
    for (pattern_segment, path_segment) in pattern_segments.iter().zip(&path_segments) {
        if let Some(name) = pattern_segment.strip_prefix(':') {
            params.insert(name.to_string(), (*path_segment).to_string());
        } else if pattern_segment != path_segment {
            return None;
        }
    }

    Some(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(entries: &[(&str, &str)]) -> PathParams {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn matches_exact_static_paths() {
        assert_eq!(match_path("/", "/"), Some(PathParams::new()));
        assert_eq!(match_path("/users", "/users"), Some(PathParams::new()));
        assert_eq!(match_path("/api/status", "/api/status"), Some(PathParams::new()));
    }

    #[test]
    fn rejects_non_matching_static_paths() {
        assert_eq!(match_path("/users", "/"), None);
        assert_eq!(match_path("/", "/users"), None);
        assert_eq!(match_path("/api/users", "/api/status"), None);
        assert_eq!(match_path("/api/status", "/api"), None);
    }

    #[test]
    fn extracts_single_parameter() {
        assert_eq!(
            match_path("/users/:userId", "/users/123"),
            Some(params(&[("userId", "123")]))
        );
        assert_eq!(
            match_path("/api/:version", "/api/v1"),
            Some(params(&[("version", "v1")]))
        );
        assert_eq!(
            match_path("/:section", "/dashboard"),
            Some(params(&[("section", "dashboard")]))
        );
    }

    #[test]
    fn extracts_multiple_parameters() {
        assert_eq!(
            match_path("/users/:userId/posts/:postId", "/users/123/posts/456"),
            Some(params(&[("userId", "123"), ("postId", "456")]))
        );
        assert_eq!(
            match_path("/:org/:repo/:issue", "/facebook/react/issues"),
            Some(params(&[("org", "facebook"), ("repo", "react"), ("issue", "issues")]))
        );
    }

    #[test]
    fn parameters_mix_with_literals_at_any_position() {
        assert_eq!(
            match_path("/:resource/create", "/posts/create"),
            Some(params(&[("resource", "posts")]))
        );
        assert_eq!(
            match_path("/api/:version/:resource", "/api/v2/users"),
            Some(params(&[("version", "v2"), ("resource", "users")]))
        );
        assert_eq!(
            match_path("/:org/:repo/settings", "/microsoft/typescript/settings"),
            Some(params(&[("org", "microsoft"), ("repo", "typescript")]))
        );
    }

    #[test]
    fn captures_raw_segment_values() {
        assert_eq!(
            match_path("/users/:userId", "/users/user@example.com"),
            Some(params(&[("userId", "user@example.com")]))
        );
        assert_eq!(
            match_path("/files/:filename", "/files/report-2023.pdf"),
            Some(params(&[("filename", "report-2023.pdf")]))
        );
        // No percent-decoding of captured values.
        assert_eq!(
            match_path("/search/:query", "/search/react%20hooks"),
            Some(params(&[("query", "react%20hooks")]))
        );
        assert_eq!(
            match_path("/users/:userId", "/users/a1b2c3d4-e5f6-7890-abcd-ef1234567890"),
            Some(params(&[("userId", "a1b2c3d4-e5f6-7890-abcd-ef1234567890")]))
        );
    }

    #[test]
    fn rejects_differing_segment_counts() {
        assert_eq!(match_path("/users/:userId", "/users"), None);
        assert_eq!(match_path("/users", "/users/123"), None);
        assert_eq!(match_path("/api/users/:userId", "/api/users/123/posts"), None);
        assert_eq!(match_path("/api/users/:userId/posts", "/api/users"), None);
        // Trailing slash adds a segment.
        assert_eq!(match_path("/users", "/users/"), None);
    }

    #[test]
    fn empty_segments_are_literal_empty_strings() {
        assert_eq!(match_path("//", "//"), Some(PathParams::new()));
        assert_eq!(
            match_path("/users//posts", "/users//posts"),
            Some(PathParams::new())
        );
        // A bare `:` captures the (empty) segment under the empty name.
        assert_eq!(
            match_path("/users/:/posts", "/users//posts"),
            Some(params(&[("", "")]))
        );
    }

    #[test]
    fn duplicate_parameter_names_last_occurrence_wins() {
        assert_eq!(
            match_path("/:id/:id", "/first/second"),
            Some(params(&[("id", "second")]))
        );
    }

    #[test]
    fn matching_is_idempotent() {
        let first = match_path("/api/:version/items/:id", "/api/v1/items/42");
        let second = match_path("/api/:version/items/:id", "/api/v1/items/42");
        assert_eq!(first, second);
    }
}

//! URL-to-filename character substitution.

/// Substrings replaced with `_`, applied in this order. `://` must come before
/// the lone `/` and `:` so a scheme separator collapses to a single `_`.
const REPLACEMENTS: [&str; 5] = ["://", "/", "?", ":", "."];

/// Replaces `://`, `/`, `?`, `:` and `.` in `url` with `_`.
///
/// Other characters (including `&`, `=`, `#`, `%`) are kept as-is.
pub fn sanitize_url(url: &str) -> String {
    REPLACEMENTS
        .iter()
        .fold(url.to_string(), |acc, pat| acc.replace(pat, "_"))
}

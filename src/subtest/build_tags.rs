pub const BUILD_CONSTRAINT_MARKER: &str = "//go:build";

/// Tag expression of the first `//go:build` line, or `""` when there is none.
///
/// Exactly one space after the marker is dropped; everything else on the
/// line is kept verbatim.
pub fn extract_build_tags(text: &str) -> String {
    text.lines()
        .find_map(|line| line.strip_prefix(BUILD_CONSTRAINT_MARKER))
        .map(|rest| rest.strip_prefix(' ').unwrap_or(rest).to_string())
        .unwrap_or_default()
}

//! Worksheet name rules

use exceller_core::MAX_SHEET_NAME_LEN;

/// Characters Excel rejects in sheet names
const ILLEGAL_CHARS: [char; 7] = ['*', ':', '?', '/', '\\', '[', ']'];

/// Replace illegal characters and trim to a valid sheet name
///
/// Whitespace and apostrophes are stripped from both ends. An empty result
/// becomes `Sheet`.
pub fn sanitize_sheet_name(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| if ILLEGAL_CHARS.contains(&c) { '_' } else { c })
        .collect();

    let truncated: String = trim_edges(&replaced).chars().take(MAX_SHEET_NAME_LEN).collect();
    let trimmed = trim_edges(&truncated);
    if trimmed.is_empty() {
        return "Sheet".to_string();
    }
    trimmed.to_string()
}

fn trim_edges(name: &str) -> &str {
    name.trim_matches(|c: char| c == '\'' || c.is_whitespace())
}

/// Make `name` unique among `taken`, compared case-insensitively
///
/// Clashing names get a ` (n)` suffix, shortening the base so the result
/// still fits the length limit.
pub(crate) fn unique_sheet_name<'a, I>(name: &str, taken: I) -> String
where
    I: IntoIterator<Item = &'a str> + Clone,
{
    let clashes = |candidate: &str| {
        taken
            .clone()
            .into_iter()
            .any(|existing| existing.to_lowercase() == candidate.to_lowercase())
    };

    if !clashes(name) {
        return name.to_string();
    }

    (2usize..)
        .map(|n| {
            let suffix = format!(" ({})", n);
            let keep = MAX_SHEET_NAME_LEN.saturating_sub(suffix.chars().count());
            let base: String = name.chars().take(keep).collect();
            format!("{}{}", base.trim_end(), suffix)
        })
        .find(|candidate| !clashes(candidate))
        .unwrap_or_else(|| name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize_sheet_name("sales"), "sales");
        assert_eq!(sanitize_sheet_name("a/b:c"), "a_b_c");
        assert_eq!(sanitize_sheet_name("  spaced  "), "spaced");
        assert_eq!(sanitize_sheet_name("   "), "Sheet");
        assert_eq!(sanitize_sheet_name(""), "Sheet");
        assert_eq!(sanitize_sheet_name(&"x".repeat(40)).len(), 31);
    }

    #[test]
    fn test_sanitize_apostrophes() {
        assert_eq!(sanitize_sheet_name("'quoted'"), "quoted");
        assert_eq!(sanitize_sheet_name(" ' a'b ' "), "a'b");
        assert_eq!(sanitize_sheet_name("''"), "Sheet");
        let long = format!("{}'tail", "z".repeat(30));
        assert_eq!(sanitize_sheet_name(&long), "z".repeat(30));
    }

    #[test]
    fn test_unique() {
        let taken = ["data", "Data (2)"];
        assert_eq!(unique_sheet_name("other", taken), "other");
        assert_eq!(unique_sheet_name("DATA", taken), "DATA (3)");
    }

    #[test]
    fn test_unique_respects_length_limit() {
        let long = "y".repeat(31);
        let taken = [long.as_str()];
        let name = unique_sheet_name(&long, taken);
        assert_eq!(name.chars().count(), 31);
        assert!(name.ends_with(" (2)"));
    }
}

/// Swatch color for languages missing from the table, and for repositories without one.
pub const FALLBACK_COLOR: &str = "#cccccc";

/// Label shown when a repository reports no primary language.
pub const UNKNOWN_LANGUAGE: &str = "Unknown";

const COLORS: [(&str, &str); 14] = [
    ("JavaScript", "#f1e05a"),
    ("Python", "#3572A5"),
    ("Java", "#b07219"),
    ("TypeScript", "#2b7489"),
    ("C++", "#f34b7d"),
    ("C#", "#178600"),
    ("PHP", "#4F5D95"),
    ("Ruby", "#701516"),
    ("CSS", "#563d7c"),
    ("HTML", "#e34c26"),
    ("Go", "#00ADD8"),
    ("Rust", "#dea584"),
    ("Swift", "#ffac45"),
    ("Kotlin", "#F18E33"),
];

/// Swatch color of a primary language. Lookup is case-sensitive, as GitHub reports names.
#[must_use]
pub fn language_color(language: Option<&str>) -> &'static str {
    language
        .and_then(|name| COLORS.iter().find(|(known, _)| *known == name))
        .map_or(FALLBACK_COLOR, |&(_, color)| color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_unknown_and_missing() {
        assert_eq!(language_color(Some("Rust")), "#dea584");
        assert_eq!(language_color(Some("C#")), "#178600");
        assert_eq!(language_color(Some("rust")), FALLBACK_COLOR);
        assert_eq!(language_color(Some("Elixir")), FALLBACK_COLOR);
        assert_eq!(language_color(None), FALLBACK_COLOR);
    }
}

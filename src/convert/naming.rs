//! Component identifiers derived from design layer names.

/// Fallback when a layer name has no usable characters.
pub const DEFAULT_COMPONENT_NAME: &str = "Component";

/// PascalCase identifier for a layer name: `"user card-2"` -> `"UserCard2"`.
///
/// Each whitespace-separated word loses its non-alphanumeric characters and
/// gets an upper-case first letter. Leading digits are then dropped so the
/// result is a valid identifier in every target framework.
pub fn sanitize_name(raw: &str) -> String {
    let joined: String = raw
        .split_whitespace()
        .map(|word| {
            let cleaned: String = word.chars().filter(char::is_ascii_alphanumeric).collect();
            capitalize(&cleaned)
        })
        .collect();

    let trimmed = capitalize(joined.trim_start_matches(|c: char| c.is_ascii_digit()));
    if trimmed.is_empty() {
        DEFAULT_COMPONENT_NAME.to_string()
    } else {
        trimmed
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// `UserCard2` -> `user-card2`, used for Angular selectors and directories.
pub fn kebab_case(identifier: &str) -> String {
    let mut out = String::with_capacity(identifier.len() + 4);
    let mut prev: Option<char> = None;
    for c in identifier.chars() {
        if c == '_' {
            out.push('-');
        } else {
            if c.is_ascii_uppercase()
                && prev.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit())
            {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
        }
        prev = Some(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_every_word() {
        assert_eq!(sanitize_name("user card"), "UserCard");
        assert_eq!(sanitize_name("Primary   button"), "PrimaryButton");
    }

    #[test]
    fn strips_punctuation_and_leading_digits() {
        assert_eq!(sanitize_name("2-col / grid!"), "ColGrid");
        assert_eq!(sanitize_name("123 card"), "Card");
        assert_eq!(sanitize_name("card-2"), "Card2");
    }

    #[test]
    fn keeps_inner_casing() {
        assert_eq!(sanitize_name("navBar"), "NavBar");
        assert_eq!(sanitize_name("Card"), "Card");
    }

    #[test]
    fn empty_names_fall_back() {
        assert_eq!(sanitize_name(""), DEFAULT_COMPONENT_NAME);
        assert_eq!(sanitize_name("  42 ??"), DEFAULT_COMPONENT_NAME);
    }

    #[test]
    fn kebab_case_splits_on_case_changes() {
        assert_eq!(kebab_case("UserCard"), "user-card");
        assert_eq!(kebab_case("Card2Item"), "card2-item");
        assert_eq!(kebab_case("HTMLView"), "htmlview");
        assert_eq!(kebab_case("snake_case"), "snake-case");
    }
}

//! Name tokens → candidate usernames.

/// Lowercased alphanumeric tokens of `name`. Punctuation inside a token is
/// dropped, so `O'Brien` becomes `obrien`.
pub fn tokenize(name: &str) -> Vec<String> {
    name.split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| c.is_alphanumeric())
                .flat_map(char::to_lowercase)
                .collect::<String>()
        })
        .filter(|token| !token.is_empty())
        .collect()
}

fn initial(token: &str) -> String {
    token.chars().next().map(String::from).unwrap_or_default()
}

/// Usernames people commonly derive from their name.
///
/// One token yields itself. Two or more tokens use the first and last
/// token; three or more also add every token concatenated.
pub fn username_variants(tokens: &[String]) -> Vec<String> {
    let (first, last) = match tokens {
        [] => return Vec::new(),
        [only] => return vec![only.clone()],
        [first, .., last] => (first.as_str(), last.as_str()),
    };
    let (fi, li) = (initial(first), initial(last));

    let mut variants = vec![
        format!("{first}{last}"),
        format!("{first}.{last}"),
        format!("{first}_{last}"),
        format!("{first}-{last}"),
        format!("{fi}{last}"),
        format!("{first}{li}"),
        format!("{fi}.{last}"),
        format!("{last}{first}"),
        format!("{last}.{first}"),
        format!("{last}_{first}"),
    ];
    if tokens.len() > 2 {
        variants.push(tokens.concat());
    }

    let mut seen = std::collections::HashSet::new();
    variants.retain(|v| seen.insert(v.clone()));
    variants
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize("  John   O'Brien-Smith "), vec!["john", "obriensmith"]);
        assert_eq!(tokenize("Zoë Ünal"), vec!["zoë", "ünal"]);
        assert!(tokenize(" -- ").is_empty());
    }

    #[test]
    fn test_two_word_name() {
        let tokens = tokenize("John Smith");
        assert_eq!(
            username_variants(&tokens),
            vec![
                "johnsmith", "john.smith", "john_smith", "john-smith",
                "jsmith", "johns", "j.smith",
                "smithjohn", "smith.john", "smith_john",
            ]
        );
    }

    #[test]
    fn test_single_and_empty() {
        assert_eq!(username_variants(&tokenize("Prince")), vec!["prince"]);
        assert!(username_variants(&[]).is_empty());
    }

    #[test]
    fn test_three_words_use_first_and_last() {
        let variants = username_variants(&tokenize("Mary Jane Watson"));
        assert_eq!(variants[0], "marywatson");
        assert_eq!(variants.last().unwrap(), "maryjanewatson");
        assert_eq!(variants.len(), 11);
    }

    #[test]
    fn test_duplicates_removed() {
        // "a b": "ab" appears as first+last and as initial+last.
        let variants = username_variants(&tokenize("A B"));
        assert_eq!(variants, vec!["ab", "a.b", "a_b", "a-b", "ba", "b.a", "b_a"]);
    }
}

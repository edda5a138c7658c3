//! Address tokenization.
//!
//! Addresses arrive as free text, usually comma separated, sometimes with
//! doubled commas, stray periods or whole fragments that were never split
//! ("Co Carlow"). Everything is flattened into one ordered list of upper-cased
//! words.

/// A normalized, upper-cased address word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token(String);

impl Token {
    /// Build a token, upper-casing the input
    pub fn new(word: &str) -> Self {
        Self(word.to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for Token {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Split a raw address into tokens, preserving reading order.
///
/// A segment made only of periods cleans to an empty token, which is kept.
/// It never matches anything since the gazetteer refuses blank keys.
pub fn tokenize(raw: &str) -> Vec<Token> {
    raw.split(',')
        .filter(|segment| !segment.trim().is_empty())
        .map(clean_segment)
        .flat_map(|segment| {
            if segment.contains(' ') {
                segment.split_whitespace().map(Token::new).collect::<Vec<_>>()
            } else {
                vec![Token::new(&segment)]
            }
        })
        .collect()
}

/// Drop one leading space and every period
fn clean_segment(segment: &str) -> String {
    segment
        .strip_prefix(' ')
        .unwrap_or(segment)
        .replace('.', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(raw: &str) -> Vec<String> {
        tokenize(raw).into_iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_comma_and_space_groups_flatten() {
        assert_eq!(
            words("Johnstown, Bennekerry, Co Carlow"),
            vec!["JOHNSTOWN", "BENNEKERRY", "CO", "CARLOW"]
        );
    }

    #[test]
    fn test_consecutive_commas() {
        assert_eq!(words("Foo,,Bar"), vec!["FOO", "BAR"]);
        assert_eq!(words(",,Foo,, ,Bar,"), vec!["FOO", "BAR"]);
    }

    #[test]
    fn test_leading_space_and_periods() {
        assert_eq!(words(" Foo., Bar"), vec!["FOO", "BAR"]);
        assert_eq!(words("St. Mullins, Co. Carlow"), vec!["ST", "MULLINS", "CO", "CARLOW"]);
    }

    #[test]
    fn test_no_commas_splits_on_spaces() {
        assert_eq!(
            words("Johnstown Bennekerry Carlow"),
            vec!["JOHNSTOWN", "BENNEKERRY", "CARLOW"]
        );
    }

    #[test]
    fn test_extra_whitespace_inside_segment() {
        assert_eq!(words("  Main   Street ,Carlow"), vec!["MAIN", "STREET", "CARLOW"]);
    }

    #[test]
    fn test_period_only_segment_is_empty_token() {
        let tokens = tokenize("Foo, ., Carlow");
        assert_eq!(tokens.len(), 3);
        assert!(tokens[1].is_empty());
        assert_eq!(tokens[2], "CARLOW");
    }

    #[test]
    fn test_delimiters_only() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" , ,, ").is_empty());
    }

    #[test]
    fn test_accented_characters_upper_cased_literally() {
        assert_eq!(words("Baile Átha Cliath"), vec!["BAILE", "ÁTHA", "CLIATH"]);
    }
}

use std::cmp::Ordering;

/// A single token of a natural sort key.
///
/// Digit runs keep their magnitude as a normalized decimal string (leading
/// zeros stripped) so that arbitrarily long runs compare numerically without
/// overflowing any integer type. Text runs are lower-cased so that ordering
/// is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Maximal run of ASCII decimal digits.
    Int(String),
    /// Maximal run of everything else, lower-cased.
    Text(String),
}

impl Ord for Token {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            // Leading zeros are stripped, so a longer digit string is always
            // a larger magnitude.
            (Self::Int(a), Self::Int(b)) => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            // Names mix kinds unpredictably; a digit run sorts before a text
            // run at the same position, uniformly.
            (Self::Int(_), Self::Text(_)) => Ordering::Less,
            (Self::Text(_), Self::Int(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Token {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Sort key producing natural ordering: `1, 2, 10` instead of `1, 10, 2`.
///
/// Comparison is element-wise; a key that is a strict prefix of another
/// sorts first. Equal names always produce equal keys, so every sort using
/// this key is stable and reproducible.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct NaturalKey(Vec<Token>);

impl NaturalKey {
    pub fn tokens(&self) -> &[Token] {
        &self.0
    }
}

/// Split `name` into alternating digit and non-digit runs.
pub fn natural_key(name: &str) -> NaturalKey {
    let mut tokens = Vec::new();
    let mut chars = name.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_ascii_digit() {
            let mut digits = String::new();
            while let Some(&d) = chars.peek() {
                if !d.is_ascii_digit() {
                    break;
                }
                digits.push(d);
                chars.next();
            }
            let stripped = digits.trim_start_matches('0');
            tokens.push(Token::Int(if stripped.is_empty() {
                "0".to_string()
            } else {
                stripped.to_string()
            }));
        } else {
            let mut text = String::new();
            while let Some(&d) = chars.peek() {
                if d.is_ascii_digit() {
                    break;
                }
                text.extend(d.to_lowercase());
                chars.next();
            }
            tokens.push(Token::Text(text));
        }
    }

    NaturalKey(tokens)
}

/// Compare two names in natural order.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    natural_key(a).cmp(&natural_key(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_numeric_runs_compare_by_value() {
        assert!(natural_key("2") < natural_key("10"));
        assert!(natural_key("9") < natural_key("11"));
        assert!(natural_key("b1") < natural_key("b2"));
        assert!(natural_key("b2") < natural_key("b10"));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(natural_key("A"), natural_key("a"));
        assert_eq!(natural_key("B10"), natural_key("b10"));
        assert!(natural_key("b1") < natural_key("B2"));
    }

    #[test]
    fn test_shorter_sequence_sorts_first() {
        assert!(natural_key("a") < natural_key("a1"));
        assert!(natural_key("a1") < natural_key("a1b"));
        assert!(natural_key("") < natural_key("0"));
    }

    #[test]
    fn test_digit_run_sorts_before_text_run() {
        assert!(natural_key("1") < natural_key("a"));
        assert!(natural_key("10") < natural_key("A"));
        assert!(natural_key("2_file.txt") < natural_key("file.txt"));
    }

    #[test]
    fn test_leading_zeros() {
        assert_eq!(natural_key("007"), natural_key("7"));
        assert_eq!(natural_key("000"), natural_key("0"));
        assert!(natural_key("007") < natural_key("08"));
    }

    #[test]
    fn test_long_digit_runs_do_not_overflow() {
        let nines = "9".repeat(100);
        let one_and_zeros = format!("1{}", "0".repeat(100));
        assert!(natural_key(&nines) < natural_key(&one_and_zeros));
        assert_eq!(natural_key(&nines), natural_key(&nines));
    }

    #[test]
    fn test_sibling_ordering() {
        let mut names = vec!["1", "2", "10", "A", "B2", "B10", "b1"];
        names.sort_by(|a, b| natural_cmp(a, b));
        assert_eq!(names, vec!["1", "2", "10", "A", "b1", "B2", "B10"]);
    }

    #[test]
    fn test_file_ordering() {
        let mut names = vec!["log10.log", "file.txt", "readme.md", "log2.log"];
        names.sort_by(|a, b| natural_cmp(a, b));
        assert_eq!(
            names,
            vec!["file.txt", "log2.log", "log10.log", "readme.md"]
        );
    }

    proptest! {
        #[test]
        fn prop_numeric_strings_sort_like_numbers(a in 0u64..1_000_000, b in 0u64..1_000_000) {
            prop_assert_eq!(natural_cmp(&a.to_string(), &b.to_string()), a.cmp(&b));
        }

        #[test]
        fn prop_comparison_is_antisymmetric(a in "\\PC{0,24}", b in "\\PC{0,24}") {
            prop_assert_eq!(natural_cmp(&a, &b), natural_cmp(&b, &a).reverse());
        }

        #[test]
        fn prop_equal_inputs_produce_equal_keys(name in "\\PC{0,24}") {
            prop_assert_eq!(natural_cmp(&name, &name), Ordering::Equal);
        }
    }
}

//! Locale-style string ordering for names shown in listings.
//!
//! Approximates root collation: whitespace and punctuation sort before digits,
//! digits before letters, letters compare case-insensitively first. Ties fall
//! back to lowercase-before-uppercase and finally to code points, so distinct
//! strings never compare equal.

use std::cmp::Ordering;

fn class(c: char) -> u8 {
    if c.is_whitespace() {
        0
    } else if c.is_ascii_punctuation() {
        1
    } else if c.is_numeric() {
        2
    } else if c.is_alphabetic() {
        3
    } else {
        4
    }
}

fn primary(c: char) -> (u8, char) {
    (class(c), c.to_lowercase().next().unwrap_or(c))
}

// Lowercase sorts before uppercase.
fn tertiary(c: char) -> u8 {
    if c.is_uppercase() {
        1
    } else {
        0
    }
}

pub fn locale_compare(a: &str, b: &str) -> Ordering {
    a.chars()
        .map(primary)
        .cmp(b.chars().map(primary))
        .then_with(|| a.chars().map(tertiary).cmp(b.chars().map(tertiary)))
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(names: &[&str]) -> Vec<String> {
        let mut names: Vec<String> = names.iter().map(|s| s.to_string()).collect();
        names.sort_by(|a, b| locale_compare(a, b));
        names
    }

    #[test]
    fn test_case_insensitive_primary_order() {
        assert_eq!(
            sorted(&["beta", "Alpha", "gamma", "Delta"]),
            vec!["Alpha", "beta", "Delta", "gamma"]
        );
    }

    #[test]
    fn test_lowercase_before_uppercase_on_tie() {
        assert_eq!(sorted(&["VM", "vm", "Vm"]), vec!["vm", "Vm", "VM"]);
    }

    #[test]
    fn test_punctuation_and_digits_before_letters() {
        assert_eq!(
            sorted(&["web", "_tmp", "01-db", "Zeta"]),
            vec!["_tmp", "01-db", "web", "Zeta"]
        );
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(locale_compare("vm", "vm-1"), Ordering::Less);
        assert_eq!(locale_compare("same", "same"), Ordering::Equal);
    }
}

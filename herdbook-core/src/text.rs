//! Formatting helpers shared by the screens.

/// Normalizes a display name into a camel-style identifier.
///
/// Words are split on any non-alphanumeric character and case-folded; every
/// word after the first starts with an upper-case letter.
pub fn camelize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());

    for (i, word) in name
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .enumerate()
    {
        let lower = word.to_lowercase();
        if i == 0 {
            out.push_str(&lower);
            continue;
        }
        let mut chars = lower.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }

    out
}

/// A title with an underline of the same width.
pub fn heading(text: &str) -> String {
    format!("{}\n{}", text, "=".repeat(text.chars().count()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camelize_single_word() {
        assert_eq!(camelize("Bonsmara"), "bonsmara");
        assert_eq!(camelize("NGUNI"), "nguni");
    }

    #[test]
    fn test_camelize_multiple_words() {
        assert_eq!(camelize("Red Angus"), "redAngus");
        assert_eq!(camelize("south devon bull"), "southDevonBull");
    }

    #[test]
    fn test_camelize_collapses_separators() {
        assert_eq!(camelize("  red   angus "), "redAngus");
        assert_eq!(camelize("RED-ANGUS"), "redAngus");
        assert_eq!(camelize("red_angus"), "redAngus");
    }

    #[test]
    fn test_camelize_keeps_digits() {
        assert_eq!(camelize("Herd 2"), "herd2");
    }

    #[test]
    fn test_camelize_empty() {
        assert_eq!(camelize(""), "");
        assert_eq!(camelize(" - "), "");
    }

    #[test]
    fn test_heading_underline_width() {
        assert_eq!(heading("Nguni"), "Nguni\n=====");
        assert_eq!(heading("Brahmaan ü"), "Brahmaan ü\n==========");
    }
}

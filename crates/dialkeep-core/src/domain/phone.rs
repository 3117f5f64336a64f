//! Phone number canonicalization.
//!
//! Maps free-form phone strings (user typed, imported, legacy) to a single
//! canonical shape. Inputs that do not fit a known digit count pass through
//! untouched; this function never fails.

/// Region hint handled by [`canonicalize_for_region`].
pub const DOMESTIC_REGION: &str = "US";

/// Canonicalize a phone-like string.
///
/// Digit counts 10, 11-with-leading-1, and 7 format to `(AAA) BBB-CCCC` or
/// `AAA-BBBB`; a trailing extension (`ext 5`, `x5`, `extension 5`) is carried
/// over as `" ext 5"`. Anything else returns the original input verbatim,
/// including empty and whitespace-only values.
pub fn canonicalize(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return input.to_string();
    }

    let (working, extension) = match find_extension(trimmed) {
        Some((start, digits)) => (&trimmed[..start], Some(digits)),
        None => (trimmed, None),
    };

    let digits: String = working.chars().filter(char::is_ascii_digit).collect();

    let formatted = match digits.len() {
        10 => format_area(&digits),
        11 if digits.starts_with('1') => format_area(&digits[1..]),
        7 => format!("{}-{}", &digits[..3], &digits[3..]),
        _ => return input.to_string(),
    };

    match extension {
        Some(ext) => format!("{formatted} ext {ext}"),
        None => formatted,
    }
}

/// Region-aware entry point.
///
/// Only the domestic region is implemented; any other hint degrades to a
/// whitespace trim with the value otherwise untouched. Placeholder for future
/// locale support, kept so callers already pass the hint through.
pub fn canonicalize_for_region(input: &str, region: &str) -> String {
    if region.trim().eq_ignore_ascii_case(DOMESTIC_REGION) {
        canonicalize(input)
    } else {
        input.trim().to_string()
    }
}

fn format_area(digits: &str) -> String {
    format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])
}

// Markers tried in precedence order; the bool allows an optional trailing dot
// ("ext." / "x.").
const EXTENSION_MARKERS: [(&str, bool); 3] = [("ext", true), ("x", true), ("extension", false)];

/// Find the first extension marker followed by digits. Returns the byte
/// offset where the matched substring starts (everything from there on is
/// dropped from the working string) and the captured extension digits.
fn find_extension(value: &str) -> Option<(usize, String)> {
    for (keyword, allow_dot) in EXTENSION_MARKERS {
        if let Some(found) = find_marker(value, keyword, allow_dot) {
            return Some(found);
        }
    }
    None
}

fn find_marker(value: &str, keyword: &str, allow_dot: bool) -> Option<(usize, String)> {
    let bytes = value.as_bytes();
    let key = keyword.as_bytes();
    let mut start = 0;

    while start + key.len() <= bytes.len() {
        if !bytes[start..start + key.len()].eq_ignore_ascii_case(key) {
            start += 1;
            continue;
        }

        let mut pos = start + key.len();
        if allow_dot && bytes.get(pos) == Some(&b'.') {
            pos += 1;
        }
        while bytes.get(pos).is_some_and(u8::is_ascii_whitespace) {
            pos += 1;
        }

        let digits_start = pos;
        while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
            pos += 1;
        }

        if pos > digits_start {
            return Some((start, value[digits_start..pos].to_string()));
        }

        // Keyword hit without digits after it; keep scanning.
        start += 1;
    }

    None
}

#[cfg(test)]
mod tests {
    use super::{canonicalize, canonicalize_for_region};

    #[test]
    fn formats_ten_digits() {
        assert_eq!(canonicalize("1234567890"), "(123) 456-7890");
    }

    #[test]
    fn strips_punctuation_and_country_code() {
        assert_eq!(canonicalize("+1 (123) 456-7890"), "(123) 456-7890");
        assert_eq!(canonicalize("123.456.7890"), "(123) 456-7890");
        assert_eq!(canonicalize("11234567890"), "(123) 456-7890");
    }

    #[test]
    fn formats_seven_digit_local_numbers() {
        assert_eq!(canonicalize("4567890"), "456-7890");
        assert_eq!(canonicalize("456-7890"), "456-7890");
    }

    #[test]
    fn carries_extension_through() {
        assert_eq!(canonicalize("1234567890 ext 55"), "(123) 456-7890 ext 55");
        assert_eq!(canonicalize("1234567890 ext. 55"), "(123) 456-7890 ext 55");
        assert_eq!(canonicalize("1234567890x99"), "(123) 456-7890 ext 99");
        assert_eq!(
            canonicalize("123-456-7890 extension 7"),
            "(123) 456-7890 ext 7"
        );
        assert_eq!(canonicalize("1234567890 EXT 55"), "(123) 456-7890 ext 55");
    }

    #[test]
    fn extension_keyword_without_digits_is_ignored() {
        assert_eq!(canonicalize("1234567890 ext"), "(123) 456-7890");
    }

    #[test]
    fn unformattable_input_passes_through() {
        assert_eq!(canonicalize("12345"), "12345");
        assert_eq!(canonicalize("21234567890"), "21234567890");
        assert_eq!(canonicalize("not a phone"), "not a phone");
        // Extension work is abandoned when the remainder cannot be formatted.
        assert_eq!(canonicalize("12345 ext 9"), "12345 ext 9");
    }

    #[test]
    fn empty_input_is_unchanged() {
        assert_eq!(canonicalize(""), "");
        assert_eq!(canonicalize("   "), "   ");
    }

    #[test]
    fn canonical_output_is_a_fixed_point() {
        for input in ["1234567890", "4567890", "1234567890 ext 55"] {
            let once = canonicalize(input);
            assert_eq!(canonicalize(&once), once);
        }
    }

    #[test]
    fn region_stub_trims_and_returns_non_domestic_values() {
        assert_eq!(canonicalize_for_region(" +44 20 7946 0958 ", "GB"), "+44 20 7946 0958");
        assert_eq!(canonicalize_for_region("1234567890", "us"), "(123) 456-7890");
    }
}

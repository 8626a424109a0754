//! Administrative-name cleanup applied before querying the weather provider.
//!
//! OpenWeatherMap knows "Bandung" but not "Kabupaten Bandung", so the
//! Indonesian administrative prefixes are stripped first.

const REGENCY_PREFIXES: [&str; 2] = ["kabupaten ", "kota "];
const PROVINCE_PREFIXES: [&str; 2] = ["dki ", "kepulauan "];

/// Remove `"kabupaten "` and `"kota "` (case-insensitive, first occurrence each).
#[must_use]
pub fn normalize_regency(name: &str) -> String {
    strip_all(name, &REGENCY_PREFIXES)
}

/// Remove `"dki "` and `"kepulauan "` (case-insensitive, first occurrence each).
#[must_use]
pub fn normalize_province(name: &str) -> String {
    strip_all(name, &PROVINCE_PREFIXES)
}

fn strip_all(name: &str, needles: &[&str]) -> String {
    needles
        .iter()
        .fold(name.to_string(), |acc, needle| remove_first_ignore_case(&acc, needle))
}

/// Needles are ASCII, so ASCII lowercasing keeps byte offsets aligned with `haystack`.
fn remove_first_ignore_case(haystack: &str, needle: &str) -> String {
    match haystack.to_ascii_lowercase().find(needle) {
        Some(start) => {
            let mut out = String::with_capacity(haystack.len() - needle.len());
            out.push_str(&haystack[..start]);
            out.push_str(&haystack[start + needle.len()..]);
            out
        }
        None => haystack.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Kabupaten Bandung", "Bandung")]
    #[case("KOTA Bandung", "Bandung")]
    #[case("Bandung", "Bandung")]
    #[case("kota Yogyakarta", "Yogyakarta")]
    #[case("KABUPATEN KEPULAUAN SERIBU", "KEPULAUAN SERIBU")]
    #[case("Kabupaten Kota Baru", "Baru")]
    #[case("", "")]
    fn test_normalize_regency(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize_regency(input), expected);
    }

    #[rstest]
    #[case("DKI Jakarta", "Jakarta")]
    #[case("Kepulauan Riau", "Riau")]
    #[case("KEPULAUAN BANGKA BELITUNG", "BANGKA BELITUNG")]
    #[case("Jawa Barat", "Jawa Barat")]
    #[case("Indonesia", "Indonesia")]
    fn test_normalize_province(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize_province(input), expected);
    }

    #[test]
    fn test_match_is_not_prefix_anchored() {
        assert_eq!(normalize_province("Provinsi DKI Jakarta"), "Provinsi Jakarta");
    }

    #[test]
    fn test_only_first_occurrence_removed() {
        assert_eq!(normalize_regency("Kota Kota Lama"), "Kota Lama");
    }

    #[test]
    fn test_non_ascii_names_survive() {
        assert_eq!(normalize_regency("Kota Bén"), "Bén");
    }
}

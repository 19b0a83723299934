//! Host-safe filename sanitization.

/// Characters that are rejected in filenames on at least one common host filesystem.
const RESERVED: [char; 9] = ['/', '<', '>', ':', '"', '\\', '|', '?', '*'];

/// Replaces every reserved character (`/ < > : " \ | ? *`) with `_`.
///
/// All other characters, including non-ASCII ones, pass through untouched.
/// The output never contains a reserved character, so the function is idempotent.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| if RESERVED.contains(&c) { '_' } else { c })
        .collect()
}

/// Byte form of [`sanitize_filename`] for names that are not UTF-8.
///
/// Reserved characters are all ASCII and never occur inside a multi-byte
/// UTF-8 sequence, so valid UTF-8 input gives the same result as the `str` form.
pub fn sanitize_filename_bytes(name: &[u8]) -> Vec<u8> {
    name.iter()
        .map(|&b| {
            if b.is_ascii() && RESERVED.contains(&(b as char)) {
                b'_'
            } else {
                b
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_each_reserved_char() {
        assert_eq!(sanitize_filename(r#"a/b<c>d:e"f\g|h?i*j"#), "a_b_c_d_e_f_g_h_i_j");
    }

    #[test]
    fn clean_name_unchanged() {
        assert_eq!(sanitize_filename("My File (v2).pdf"), "My File (v2).pdf");
        assert_eq!(sanitize_filename(""), "");
    }

    #[test]
    fn unicode_untouched() {
        assert_eq!(sanitize_filename("café – résumé.pdf"), "café – résumé.pdf");
        assert_eq!(sanitize_filename("報告:2024.pdf"), "報告_2024.pdf");
    }

    #[test]
    fn every_reserved_char_mixed_with_non_ascii() {
        let fillers = ["", "é", "報告", "ß ", "🙂", "a.pdf"];
        for reserved in RESERVED {
            for left in fillers {
                for right in fillers {
                    let input = format!("{left}{reserved}{right}{reserved}{reserved}");
                    let once = sanitize_filename(&input);
                    assert!(!once.contains(RESERVED.as_slice()), "{input:?} -> {once:?}");
                    assert_eq!(sanitize_filename(&once), once, "{input:?}");
                    assert_eq!(once, format!("{left}_{right}__"));
                    assert_eq!(sanitize_filename_bytes(input.as_bytes()), once.as_bytes());
                }
            }
        }
    }

    #[test]
    fn bytes_form_keeps_non_utf8() {
        assert_eq!(sanitize_filename_bytes(b"r\xE9:sum\xE9?.pdf"), b"r\xE9_sum\xE9_.pdf");
        assert_eq!(sanitize_filename_bytes(b"\xFF\xFE"), b"\xFF\xFE");
    }

    #[test]
    fn keeps_length_in_chars() {
        let input = "a:b:c";
        assert_eq!(sanitize_filename(input).chars().count(), input.chars().count());
    }
}

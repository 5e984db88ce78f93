/// Image files are named after the code points they render, e.g.
/// `1f600.png` or `0023-fe0f-20e3.png`.
pub const IMAGE_EXTENSION: &str = ".png";

const SEGMENT_DELIMITER: char = '-';

pub fn is_image_file(file_name: &str) -> bool {
    file_name.ends_with(IMAGE_EXTENSION)
}

/// Decode the code points encoded in an image filename.
///
/// Returns `None` when the name is not an image or when no segment decodes.
/// Never returns an empty list.
pub fn parse_filename(file_name: &str) -> Option<Vec<u32>> {
    let basename = file_name.strip_suffix(IMAGE_EXTENSION)?;
    let codepoints = basename
        .split(SEGMENT_DELIMITER)
        .filter_map(parse_segment)
        .collect::<Vec<_>>();
    if codepoints.is_empty() {
        None
    } else {
        Some(codepoints)
    }
}

/// Selector tolerance: a segment counts as a code point only if it is a
/// non-empty run of ascii hex digits. Everything else (selector or joiner
/// markers, but also typos) is dropped without a trace. Signs, `0x` prefixes
/// and `_` separators are rejected on purpose, filenames use bare lowercase hex.
///
/// A hex run too wide for a u32 is still a code point, just not a valid one.
/// It decodes to `u32::MAX` so `emoji_key` rejects the whole file instead of
/// mapping it under its remaining segments.
fn parse_segment(segment: &str) -> Option<u32> {
    if segment.is_empty() || !segment.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    Some(u32::from_str_radix(segment, 16).unwrap_or(u32::MAX))
}

/// Concatenate the characters for `codepoints`. `None` if any of them is a
/// surrogate or lies beyond U+10FFFF.
pub fn emoji_key(codepoints: &[u32]) -> Option<String> {
    codepoints.iter().map(|cp| char::from_u32(*cp)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_segment() {
        assert_eq!(parse_filename("1f600.png"), Some(vec![0x1f600]));
        assert_eq!(parse_filename("23.png"), Some(vec![0x23]));
        assert_eq!(parse_filename("00a9.png"), Some(vec![0xa9]));
    }

    #[test]
    fn multi_segment_keeps_order() {
        assert_eq!(
            parse_filename("0023-fe0f-20e3.png"),
            Some(vec![0x23, 0xfe0f, 0x20e3])
        );
        assert_eq!(
            parse_filename("1f468-200d-1f469-200d-1f467.png"),
            Some(vec![0x1f468, 0x200d, 0x1f469, 0x200d, 0x1f467])
        );
    }

    #[test]
    fn drops_unparseable_segments() {
        assert_eq!(parse_filename("1f3f3-vs16-200d.png"), Some(vec![0x1f3f3, 0x200d]));
        assert_eq!(parse_filename("-1f600-.png"), Some(vec![0x1f600]));
        assert_eq!(parse_filename("+1f-2a.png"), Some(vec![0x2a]));
        assert_eq!(parse_filename("0x1f-2a.png"), Some(vec![0x2a]));
    }

    #[test]
    fn wide_segment_is_not_dropped() {
        let codepoints = parse_filename("123456789-1f600.png").unwrap();
        assert_eq!(codepoints, vec![u32::MAX, 0x1f600]);
        assert_eq!(emoji_key(&codepoints), None);
    }

    #[test]
    fn nothing_decodes() {
        assert_eq!(parse_filename("zz-yy.png"), None);
        assert_eq!(parse_filename(".png"), None);
        assert_eq!(parse_filename("._.png"), None);
    }

    #[test]
    fn extension_is_case_sensitive() {
        assert!(!is_image_file("1f600.PNG"));
        assert_eq!(parse_filename("1f600.PNG"), None);
        assert_eq!(parse_filename("readme.txt"), None);
        assert_eq!(parse_filename("1f600.png.bak"), None);
        assert!(is_image_file("1f600.png"));
    }

    #[test]
    fn key_from_codepoints() {
        assert_eq!(emoji_key(&[0x1f600]).as_deref(), Some("\u{1f600}"));
        let key = emoji_key(&[0x23, 0xfe0f, 0x20e3]).unwrap();
        assert_eq!(key, "#\u{fe0f}\u{20e3}");
        assert_eq!(key.chars().count(), 3);
    }

    #[test]
    fn key_rejects_non_scalar_values() {
        assert_eq!(emoji_key(&[0xd83d]), None);
        assert_eq!(emoji_key(&[0x1f600, 0x110000]), None);
    }
}

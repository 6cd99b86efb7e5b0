/// 32-bit rolling string hash (`h = h * 31 + unit`) over UTF-16 code units,
/// rendered as the lower-case hex of its absolute value.
///
/// Backups written by the browser app carry the same checksum, so the
/// arithmetic has to stay bit-for-bit identical.
pub fn checksum(data: &str) -> String {
    let hash = data.encode_utf16().fold(0i32, |hash, unit| {
        (hash << 5).wrapping_sub(hash).wrapping_add(unit as i32)
    });
    format!("{:x}", (hash as i64).abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        assert_eq!(checksum(""), "0");
        assert_eq!(checksum("a"), "61");
        assert_eq!(checksum("abc"), "17862");
    }

    #[test]
    fn test_overflow_wraps_to_32_bits() {
        let long = "futbol ".repeat(200);
        let value = i64::from_str_radix(&checksum(&long), 16).unwrap();
        assert!(value <= i32::MAX as i64 + 1);
    }

    #[test]
    fn test_non_ascii_uses_utf16_units() {
        // U+00F1 is a single UTF-16 unit (241)
        assert_eq!(checksum("ñ"), "f1");
        // U+1F600 is a surrogate pair: 0xD83D * 31 + 0xDE00
        assert_eq!(checksum("😀"), format!("{:x}", 0xD83D * 31 + 0xDE00));
    }
}

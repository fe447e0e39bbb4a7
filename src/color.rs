//! Hover-color derivation

/// Lighten a hex color by adding 20 to each RGB channel, clamped at 255.
///
/// The `#` prefix is preserved iff the input had one. Non-hex input is not
/// validated; unparsable strings lighten from black rather than failing.
pub fn lighten(color: &str) -> String {
    let (pound, hex) = match color.strip_prefix('#') {
        Some(rest) => (true, rest),
        None => (false, color),
    };

    let num = u32::from_str_radix(hex, 16).unwrap_or(0);

    let r = (((num >> 16) & 0xff) + 20).min(255);
    let g = (((num >> 8) & 0xff) + 20).min(255);
    let b = ((num & 0xff) + 20).min(255);

    format!(
        "{}{:06x}",
        if pound { "#" } else { "" },
        (r << 16) | (g << 8) | b
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lighten_black() {
        assert_eq!(lighten("#000000"), "#141414");
    }

    #[test]
    fn test_lighten_clamps_at_white() {
        assert_eq!(lighten("#FFFFFF"), "#ffffff");
        assert_eq!(lighten("#F0FFF0"), "#ffffff");
    }

    #[test]
    fn test_lighten_mid_channels() {
        assert_eq!(lighten("#102030"), "#243444");
    }

    #[test]
    fn test_pound_prefix_preserved() {
        assert_eq!(lighten("000000"), "141414");
        assert!(lighten("#123456").starts_with('#'));
    }

    #[test]
    fn test_garbage_input_does_not_panic() {
        assert_eq!(lighten("not-a-color"), "141414");
    }
}

//! Color utility functions shared by the document renderer.

/// An RGB color with components in range 0.0-1.0.
pub type Rgb = (f32, f32, f32);

/// Parse a `#rrggbb` or `#rgb` hex string.
///
/// The leading `#` is optional. Returns None for anything else.
pub fn parse_hex_color(color: &str) -> Option<Rgb> {
    let hex = color.trim().trim_start_matches('#');
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).ok().map(|v| v as f32 / 255.0);

    match hex.len() {
        6 => Some((channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
        3 => {
            let double = |i: usize| hex[i..i + 1].repeat(2);
            Some((channel(&double(0))?, channel(&double(1))?, channel(&double(2))?))
        }
        _ => None,
    }
}

/// Parse a hex color, falling back to `fallback` when it is not valid.
pub fn hex_or(color: &str, fallback: Rgb) -> Rgb {
    parse_hex_color(color).unwrap_or_else(|| {
        log::debug!("Unrecognized color {:?}, using fallback", color);
        fallback
    })
}

/// Convert a 0-255 grey level to an RGB triple.
pub fn grey(level: u8) -> Rgb {
    let v = level as f32 / 255.0;
    (v, v, v)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Rgb, b: Rgb) -> bool {
        (a.0 - b.0).abs() < 0.01 && (a.1 - b.1).abs() < 0.01 && (a.2 - b.2).abs() < 0.01
    }

    #[test]
    fn test_parse_six_digit() {
        let rgb = parse_hex_color("#ff0000").unwrap();
        assert!(close(rgb, (1.0, 0.0, 0.0)));
    }

    #[test]
    fn test_parse_three_digit() {
        let rgb = parse_hex_color("#0f0").unwrap();
        assert!(close(rgb, (0.0, 1.0, 0.0)));
    }

    #[test]
    fn test_parse_without_hash() {
        assert!(parse_hex_color("0000ff").is_some());
    }

    #[test]
    fn test_invalid_colors() {
        assert!(parse_hex_color("blue").is_none());
        assert!(parse_hex_color("#12345").is_none());
        assert!(parse_hex_color("#ééé").is_none());
        assert!(parse_hex_color("").is_none());
        assert!(parse_hex_color("#+f+f+f").is_none());
        assert!(parse_hex_color("+0+0+0").is_none());
        assert!(parse_hex_color("#-1-1-1").is_none());
    }

    #[test]
    fn test_fallback() {
        assert!(close(hex_or("nope", grey(255)), (1.0, 1.0, 1.0)));
    }
}

//! Theme color helpers for tinted shadows and focus rings.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

fn hex_channel(digits: &str) -> Option<u8> {
    u8::from_str_radix(digits, 16).ok()
}

/// Parse `#RGB` or `#RRGGBB` values into RGB channels.
pub fn parse_hex_rgb(raw: &str) -> Option<(u8, u8, u8)> {
    let hex = raw.trim().strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        3 => Some((
            hex_channel(&hex[0..1].repeat(2))?,
            hex_channel(&hex[1..2].repeat(2))?,
            hex_channel(&hex[2..3].repeat(2))?,
        )),
        6 => Some((
            hex_channel(&hex[0..2])?,
            hex_channel(&hex[2..4])?,
            hex_channel(&hex[4..6])?,
        )),
        _ => None,
    }
}

/// `rgba(...)` form of a hex token at the given opacity.
///
/// Tokens that are not hex colors (named colors, gradients) fall back to
/// translucent black, which is the widget's neutral shadow.
pub fn with_alpha(token: &str, alpha: f32) -> String {
    let (r, g, b) = parse_hex_rgb(token).unwrap_or((0, 0, 0));
    let alpha = alpha.clamp(0.0, 1.0);
    format!("rgba({r}, {g}, {b}, {alpha})")
}

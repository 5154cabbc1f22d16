//! Color name mapping and formatting helpers.

use crate::draw::color::*;

/// Maps color name strings to Color values.
///
/// Used by the settings resolver to parse color names from options.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "orange", "pink", "white", "black"
/// - "gray"/"grey" and "charcoal" (the default brace color)
///
/// # Returns
/// - `Some(Color)` if the name matches a predefined color
/// - `None` if the name is not recognized
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        "gray" | "grey" => Some(Color::from_rgb8(128, 128, 128)),
        "charcoal" => Some(DEFAULT_BRACE_COLOR),
        _ => None,
    }
}

/// Formats a color as `#rrggbb`, appending the alpha byte when not opaque.
pub fn color_to_hex(color: &Color) -> String {
    let byte = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    let rgb = format!(
        "#{:02x}{:02x}{:02x}",
        byte(color.r),
        byte(color.g),
        byte(color.b)
    );
    if color.a >= 1.0 {
        rgb
    } else {
        format!("{}{:02x}", rgb, byte(color.a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_mapping_is_case_insensitive() {
        assert_eq!(name_to_color("White").unwrap(), WHITE);
        assert_eq!(name_to_color("CHARCOAL").unwrap(), DEFAULT_BRACE_COLOR);
        assert_eq!(name_to_color("grey"), name_to_color("gray"));
        assert!(name_to_color("chartreuse").is_none());
    }

    #[test]
    fn hex_formatting() {
        assert_eq!(color_to_hex(&DEFAULT_BRACE_COLOR), "#212121");
        assert_eq!(color_to_hex(&RED), "#ff0000");
        assert_eq!(
            color_to_hex(&Color {
                r: 0.0,
                g: 0.0,
                b: 0.0,
                a: 0.5
            }),
            "#00000080"
        );
    }
}

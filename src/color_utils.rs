/// Parse a hex color string into RGBA components, for CLI argument parsing.
/// Accepts:
/// - "transparent" => (0, 0, 0, 0)
/// - #RRGGBB or RRGGBB => (r, g, b, 255)
/// - #RRGGBBAA or RRGGBBAA => (r, g, b, a)
pub fn parse_color_result(color_str: &str) -> Result<(u8, u8, u8, u8), String> {
    if color_str.eq_ignore_ascii_case("transparent") {
        return Ok((0, 0, 0, 0));
    }

    let trimmed = color_str.trim();
    let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);

    let component = |range: std::ops::Range<usize>, name: &str| {
        u8::from_str_radix(&hex[range], 16).map_err(|_| format!("Invalid hex digit in {name} component"))
    };

    match hex.len() {
        6 => {
            let r = component(0..2, "R")?;
            let g = component(2..4, "G")?;
            let b = component(4..6, "B")?;
            Ok((r, g, b, 255))
        }
        8 => {
            let r = component(0..2, "R")?;
            let g = component(2..4, "G")?;
            let b = component(4..6, "B")?;
            let a = component(6..8, "A")?;
            Ok((r, g, b, a))
        }
        _ => Err(format!(
            "Expected 6 or 8 hex digits (RRGGBB or RRGGBBAA), got {}",
            hex.len()
        )),
    }
}

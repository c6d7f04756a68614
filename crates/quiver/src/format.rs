//! Plain-text output of coordinate rings.
//!
//! Each ring is written on its own line as space-separated `x,y` pairs, the
//! same syntax as an SVG `points` attribute.

use quiver_core::geometry::Ring;

/// Formats rings one per line with `precision` decimal places.
///
/// Values that round to zero are written without a minus sign.
pub fn format_rings(rings: &[Ring], precision: usize) -> String {
    let mut output = String::new();
    for ring in rings {
        let line = ring
            .iter()
            .map(|point| {
                format!(
                    "{},{}",
                    format_coordinate(point.x(), precision),
                    format_coordinate(point.y(), precision)
                )
            })
            .collect::<Vec<_>>()
            .join(" ");
        output.push_str(&line);
        output.push('\n');
    }
    output
}

fn format_coordinate(value: f64, precision: usize) -> String {
    let text = format!("{value:.precision$}");
    match text.strip_prefix('-') {
        Some(unsigned) if unsigned.bytes().all(|b| b == b'0' || b == b'.') => {
            unsigned.to_string()
        }
        _ => text,
    }
}

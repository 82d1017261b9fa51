// src/core/number.rs
//
// Spreadsheet numbers arrive as free text. Parsing is lenient the way a
// spreadsheet export needs: leading whitespace is skipped and the longest
// numeric prefix wins ("34.05 N" reads as 34.05). No prefix → NaN.

use crate::config::consts::COORD_SCALE;

/// Longest-prefix float parse. Returns `f64::NAN` when no digits lead.
pub fn parse_float_prefix(s: &str) -> f64 {
    let t = s.trim_start();
    let b = t.as_bytes();
    let mut i = 0;

    if i < b.len() && (b[i] == b'+' || b[i] == b'-') { i += 1; }

    if t[i..].starts_with("Infinity") {
        let inf = f64::INFINITY;
        return if b.first() == Some(&b'-') { -inf } else { inf };
    }

    let int_start = i;
    while i < b.len() && b[i].is_ascii_digit() { i += 1; }
    let mut digits = i - int_start;

    if i < b.len() && b[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < b.len() && b[j].is_ascii_digit() { j += 1; }
        digits += j - frac_start;
        i = j;
    }
    if digits == 0 { return f64::NAN; }

    // Exponent only counts when it has digits of its own
    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        let mut j = i + 1;
        if j < b.len() && (b[j] == b'+' || b[j] == b'-') { j += 1; }
        let exp_start = j;
        while j < b.len() && b[j].is_ascii_digit() { j += 1; }
        if j > exp_start { i = j; }
    }

    t[..i].parse().unwrap_or(f64::NAN)
}

/// Round to 6 decimals, halves toward +∞.
pub fn round6(x: f64) -> f64 {
    (x * COORD_SCALE + 0.5).floor() / COORD_SCALE
}

/// A usable coordinate is finite and non-zero.
pub fn usable_coord(x: f64) -> bool {
    x.is_finite() && x != 0.0
}

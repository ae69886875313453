//! Number formatting shared by the engine and the text report

/// Round half toward positive infinity, matching browser `Math.round`.
///
/// `f64::round` rounds halves away from zero, which differs for negative
/// halves (`-2.5` becomes `-3` there and `-2` here).
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// One decimal place, halves rounded away from zero on the magnitude.
/// A negative value that rounds to zero keeps its sign (`-0.0`).
pub fn format_one_decimal(value: f64) -> String {
    let magnitude = format!("{:.1}", (value.abs() * 10.0).round() / 10.0);
    if value < 0.0 {
        format!("-{}", magnitude)
    } else {
        magnitude
    }
}

/// Whole number with `,` thousands separators
pub fn group_thousands(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0.0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Leading `+` for non-negative values
pub fn signed(value: f64, text: &str) -> String {
    if value >= 0.0 {
        format!("+{}", text)
    } else {
        text.to_string()
    }
}

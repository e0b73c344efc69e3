//! Display helpers for city names, crop labels and measurements

/// Title-case a string: the first letter of every alphabetic run is
/// upper-cased and the rest lower-cased. Non-letters separate runs, so
/// `"new delhi"` becomes `"New Delhi"` and `"o'neil"` becomes `"O'Neil"`.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_word = false;

    for c in input.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }

    out
}

/// Render a measurement with at least one decimal place (`25.0`, `31.25`)
pub fn format_measure(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

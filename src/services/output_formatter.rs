/// Weight as users type it: no trailing `.0`, otherwise the shortest text that
/// parses back to the same value.
pub fn format_weight(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

pub fn format_kg(value: f64) -> String {
    format!("{} kg", format_weight(value))
}

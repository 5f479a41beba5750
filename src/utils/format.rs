/// Positional notation is used while the decimal exponent stays in this range.
const POSITIONAL_MIN_EXP: i32 = -4;
const POSITIONAL_MAX_EXP: i32 = 16;

/// Render a float with the shortest digits that round-trip, e.g. `3.0`,
/// `0.30000000000000004`, `1e+16`, `1.5e-07`, `inf`, `nan`.
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }

    let sign = if value.is_sign_negative() { "-" } else { "" };

    if value.is_infinite() {
        return format!("{}inf", sign);
    }

    let (digits, exp) = shortest_digits(value.abs());

    let body = if (POSITIONAL_MIN_EXP..POSITIONAL_MAX_EXP).contains(&exp) {
        positional(&digits, exp)
    } else {
        scientific(&digits, exp)
    };

    format!("{}{}", sign, body)
}

// `{:e}` already yields the shortest round-trip mantissa, e.g. "3.0000000000000004e-1"
fn shortest_digits(magnitude: f64) -> (String, i32) {
    let rendered = format!("{:e}", magnitude);
    let (mantissa, exp) = rendered.split_once('e').unwrap_or((rendered.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let exp = exp.parse::<i32>().unwrap_or(0);
    (digits, exp)
}

fn positional(digits: &str, exp: i32) -> String {
    let point = exp + 1;
    let len = digits.len() as i32;

    if point <= 0 {
        format!("0.{}{}", "0".repeat((-point) as usize), digits)
    } else if point >= len {
        format!("{}{}.0", digits, "0".repeat((point - len) as usize))
    } else {
        let (int_part, frac_part) = digits.split_at(point as usize);
        format!("{}.{}", int_part, frac_part)
    }
}

fn scientific(digits: &str, exp: i32) -> String {
    let (lead, rest) = digits.split_at(1);
    let exp_sign = if exp < 0 { '-' } else { '+' };

    if rest.is_empty() {
        format!("{}e{}{:02}", lead, exp_sign, exp.abs())
    } else {
        format!("{}.{}e{}{:02}", lead, rest, exp_sign, exp.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_numbers_keep_fraction() {
        assert_eq!(format_float(3.0), "3.0");
        assert_eq!(format_float(1.0), "1.0");
        assert_eq!(format_float(0.0), "0.0");
        assert_eq!(format_float(-0.0), "-0.0");
        assert_eq!(format_float(-42.0), "-42.0");
        assert_eq!(format_float(123456789012345.0), "123456789012345.0");
        assert_eq!(format_float(1e15), "1000000000000000.0");
    }

    #[test]
    fn test_shortest_fraction() {
        assert_eq!(format_float(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_float(2.5), "2.5");
        assert_eq!(format_float(0.0001), "0.0001");
        assert_eq!(format_float(-1.25), "-1.25");
    }

    #[test]
    fn test_scientific_range() {
        assert_eq!(format_float(1e16), "1e+16");
        assert_eq!(format_float(1.5e-7), "1.5e-07");
        assert_eq!(format_float(1e-5), "1e-05");
        assert_eq!(format_float(-2.5e20), "-2.5e+20");
        assert_eq!(format_float(f64::MAX), "1.7976931348623157e+308");
        assert_eq!(format_float(5e-324), "5e-324");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_float(f64::NAN), "nan");
        assert_eq!(format_float(f64::INFINITY), "inf");
        assert_eq!(format_float(f64::NEG_INFINITY), "-inf");
    }
}

const SI_PREFIXES: [&str; 17] = [
    "y", "z", "a", "f", "p", "n", "\u{b5}", "m", "", "k", "M", "G", "T", "P", "E", "Z", "Y",
];

/// SI-prefixed number with six significant digits and no trailing zeros,
/// `1500` becomes `1.5k`, `0.5` becomes `500m`.
pub fn format_si(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    let scientific = format!("{:.5e}", value.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return value.to_string();
    };

    let prefix_exponent = exponent.div_euclid(3) * 3;
    let Some(prefix) = usize::try_from(prefix_exponent / 3 + 8)
        .ok()
        .and_then(|index| SI_PREFIXES.get(index))
    else {
        return format!("{value:e}");
    };

    let digits = mantissa.replace('.', "");
    let split = usize::try_from(exponent - prefix_exponent + 1).unwrap_or(1);
    let (integer, fraction) = digits.split_at(split.min(digits.len()));
    let fraction = fraction.trim_end_matches('0');

    let sign = if value < 0.0 { "-" } else { "" };
    if fraction.is_empty() {
        format!("{sign}{integer}{prefix}")
    } else {
        format!("{sign}{integer}.{fraction}{prefix}")
    }
}

/// `1234567` becomes `1,234,567`.
pub fn format_thousands(value: usize) -> String {
    let value = value.to_string();
    let groups = value
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(std::str::from_utf8)
        .collect::<Result<Vec<&str>, _>>();

    match groups {
        Ok(groups) => groups.join(","),
        Err(_) => value.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn si_abbreviations() {
        assert_eq!(format_si(0.0), "0");
        assert_eq!(format_si(5.0), "5");
        assert_eq!(format_si(20.0), "20");
        assert_eq!(format_si(300.0), "300");
        assert_eq!(format_si(1500.0), "1.5k");
        assert_eq!(format_si(2000.0), "2k");
        assert_eq!(format_si(1_234_567.0), "1.23457M");
        assert_eq!(format_si(0.5), "500m");
        assert_eq!(format_si(-2000.0), "-2k");
    }

    #[test]
    fn si_rounding_carries_into_next_prefix() {
        assert_eq!(format_si(999_999.5), "1M");
    }

    #[test]
    fn thousands_separators() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
    }
}

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Whole pesos with `.` thousands separators: `2500000.0` -> `$ 2.500.000`.
pub fn format_price(price: f64) -> String {
    let rounded = price.round();
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    if rounded < 0.0 {
        format!("-$ {grouped}")
    } else {
        format!("$ {grouped}")
    }
}

/// `dd/mm/yy HH:MM` for backend timestamps; unparseable values pass through, missing ones show `-`.
pub fn short_date(value: Option<&str>) -> String {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return "-".to_string();
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%d/%m/%y %H:%M").to_string();
    }

    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return dt.format("%d/%m/%y %H:%M").to_string();
        }
    }

    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%y").to_string(),
        Err(_) => raw.to_string(),
    }
}

pub fn active_label(active: bool) -> &'static str {
    if active { "Activo" } else { "Inactivo" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_are_grouped_by_thousands() {
        assert_eq!(format_price(2_500_000.0), "$ 2.500.000");
        assert_eq!(format_price(320_000.0), "$ 320.000");
        assert_eq!(format_price(999.4), "$ 999");
        assert_eq!(format_price(0.0), "$ 0");
        assert_eq!(format_price(-1500.0), "-$ 1.500");
    }

    #[test]
    fn dates_are_shortened() {
        assert_eq!(short_date(Some("2025-01-14T09:30:00")), "14/01/25 09:30");
        assert_eq!(short_date(Some("2025-01-14T09:30:00Z")), "14/01/25 09:30");
        assert_eq!(short_date(Some("2025-01-14")), "14/01/25");
        assert_eq!(short_date(Some("ayer")), "ayer");
        assert_eq!(short_date(None), "-");
    }
}

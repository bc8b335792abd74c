use crate::diagnosis::engine::{round_half_up, round_to_tenth};

/// Korean won amount in display units (억원 / 만원 / 원). Ties round up, like every other
/// published figure.
pub fn format_currency(amount: u64) -> String {
    let value = amount as f64;
    if amount >= 100_000_000 {
        return format!("{:.1}억원", round_to_tenth(value / 100_000_000.0));
    }
    if amount >= 10_000_000 {
        return format!("{:.0}만원", round_half_up(value / 10_000.0));
    }
    if amount >= 10_000 {
        return format!("{:.1}만원", round_to_tenth(value / 10_000.0));
    }
    format!("{}원", group_thousands(amount))
}

pub fn format_percentage(value: f64) -> String {
    format!("{:.1}%", round_to_tenth(value))
}

fn group_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

pub fn business_period_label(years: f64) -> &'static str {
    match years {
        y if y < 1.0 => "1년 미만",
        y if y < 2.0 => "1년 이상 2년 미만",
        y if y < 3.0 => "2년 이상 3년 미만",
        y if y < 5.0 => "3년 이상 5년 미만",
        y if y < 10.0 => "5년 이상 10년 미만",
        _ => "10년 이상",
    }
}

/// `N등급` with the band name shown on the rating picker (우수 / 보통 / 주의).
pub fn credit_rating_label(rating: u8) -> String {
    let band = match rating {
        1..=3 => "우수",
        4..=6 => "보통",
        7..=10 => "주의",
        _ => return format!("{rating}등급"),
    };
    format!("{rating}등급 ({band})")
}

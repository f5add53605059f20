//! Money formatting for Vietnamese đồng.
//!
//! Amounts are whole-đồng integers everywhere (the backend never sends
//! fractional VND). Quotations additionally print the amount in words.

const DIGITS: [&str; 10] = [
    "không", "một", "hai", "ba", "bốn", "năm", "sáu", "bảy", "tám", "chín",
];

const GROUP_NAMES: [&str; 4] = ["", "nghìn", "triệu", "tỷ"];

/// Format an amount with dot thousand separators: 1234567 -> "1.234.567 ₫".
pub fn format_vnd(amount: i64) -> String {
    let negative = amount < 0;
    let digits = amount.abs().to_string();
    let mut grouped = String::new();
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    if negative {
        format!("-{} ₫", grouped)
    } else {
        format!("{} ₫", grouped)
    }
}

/// Read a 0..=999 group. `full` forces the "không trăm"/"lẻ" padding used
/// for every group after the most significant one.
fn read_group(n: i64, full: bool) -> String {
    let hundreds = n / 100;
    let tens = (n % 100) / 10;
    let units = n % 10;

    let mut words: Vec<String> = Vec::new();

    if hundreds > 0 || full {
        words.push(format!("{} trăm", DIGITS[hundreds as usize]));
    }

    match tens {
        0 => {
            if units > 0 && (hundreds > 0 || full) {
                words.push("lẻ".to_string());
            }
        }
        1 => words.push("mười".to_string()),
        _ => words.push(format!("{} mươi", DIGITS[tens as usize])),
    }

    match units {
        0 => {}
        1 if tens >= 2 => words.push("mốt".to_string()),
        5 if tens >= 1 => words.push("lăm".to_string()),
        _ => words.push(DIGITS[units as usize].to_string()),
    }

    words.join(" ")
}

/// Spell an amount in words: 1500000 -> "một triệu năm trăm nghìn đồng".
///
/// Supports up to the "tỷ" (1e9) scale, which covers every amount a repair
/// quotation can realistically carry.
pub fn amount_in_words(amount: i64) -> String {
    if amount == 0 {
        return "không đồng".to_string();
    }
    if amount < 0 {
        return format!("âm {}", amount_in_words(-amount));
    }

    // Split into groups of three digits, least significant first.
    let mut groups: Vec<i64> = Vec::new();
    let mut rest = amount;
    while rest > 0 {
        groups.push(rest % 1000);
        rest /= 1000;
    }

    let mut words: Vec<String> = Vec::new();
    let highest = groups.len() - 1;
    for idx in (0..groups.len()).rev() {
        let value = groups[idx];
        if value == 0 {
            continue;
        }
        let part = read_group(value, idx != highest);
        if idx > 0 {
            words.push(format!("{} {}", part, GROUP_NAMES[idx]));
        } else {
            words.push(part);
        }
    }

    format!("{} đồng", words.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_vnd() {
        assert_eq!(format_vnd(0), "0 ₫");
        assert_eq!(format_vnd(1500), "1.500 ₫");
        assert_eq!(format_vnd(1234567), "1.234.567 ₫");
        assert_eq!(format_vnd(-50000), "-50.000 ₫");
    }

    #[test]
    fn test_words_small() {
        assert_eq!(amount_in_words(0), "không đồng");
        assert_eq!(amount_in_words(15), "mười lăm đồng");
        assert_eq!(amount_in_words(21), "hai mươi mốt đồng");
        assert_eq!(amount_in_words(105), "một trăm lẻ năm đồng");
    }

    #[test]
    fn test_words_large() {
        assert_eq!(amount_in_words(900_000), "chín trăm nghìn đồng");
        assert_eq!(
            amount_in_words(1_500_000),
            "một triệu năm trăm nghìn đồng"
        );
        assert_eq!(
            amount_in_words(1_005_000),
            "một triệu không trăm lẻ năm nghìn đồng"
        );
    }
}

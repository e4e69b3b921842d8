//! Утилиты форматирования чисел для таблиц

/// Форматирует число с разделителем тысяч (запятая) и указанным количеством знаков после точки.
///
/// `1234.567, 2` -> `"1,234.57"`
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let decimals = decimals.min(3) as usize;
    let formatted = format!("{:.prec$}", value, prec = decimals);

    // Разделяем целую и дробную части
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    // Вставляем разделители каждые 3 цифры с конца целой части
    let mut result = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            result.push(',');
        }
        result.push(*c);
    }
    let formatted_integer = result.chars().rev().collect::<String>();

    match decimal_part {
        Some(d) => format!("{}.{}", formatted_integer, d),
        None => formatted_integer,
    }
}

/// Процент с одним знаком: `42.5%`
pub fn format_percent(value: f64) -> String {
    format!("{}%", format_number_with_decimals(value, 1))
}

/// Пропускная способность сети: `12.4 MB/s`
pub fn format_throughput(value: f64) -> String {
    format!("{} MB/s", format_number_with_decimals(value, 1))
}

//! Бразильский денежный формат: `R$1.234,56` (точка — тысячи, запятая — дробь).

use rust_decimal::Decimal;

use crate::observer::{Notice, Observer};

/// Разбирает строку вида `R$1.234,56` в число. Любая ошибка разбора
/// даёт ноль и уведомление наблюдателю — но никогда не ошибку.
pub fn parse_brl(raw: &str, obs: &dyn Observer) -> Decimal {
    let cleaned = raw
        .trim()
        .trim_start_matches("R$")
        .replace('.', "")
        .replace(',', ".");
    match cleaned.parse::<Decimal>() {
        Ok(v) => v,
        Err(_) => {
            obs.notify(Notice::CurrencyParseFailed { raw });
            Decimal::ZERO
        }
    }
}

/// Обратное преобразование: `1234.5` -> `R$1.234,50`.
pub fn format_brl(v: Decimal) -> String {
    let v = v.round_dp(2);
    let repr = v.abs().to_string();
    let (int_part, frac_part) = match repr.split_once('.') {
        Some((i, f)) => (i.to_string(), format!("{f:0<2}")),
        None => (repr, "00".to_string()),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if v.is_sign_negative() && !v.is_zero() { "-" } else { "" };
    format!("R${sign}{grouped},{frac_part}")
}

/// Число с двумя знаками после точки, без группировки (для процентов).
pub fn format_fixed2(v: Decimal) -> String {
    let v = v.round_dp(2);
    match v.to_string().split_once('.') {
        Some((i, f)) => format!("{i}.{f:0<2}"),
        None => format!("{v}.00"),
    }
}

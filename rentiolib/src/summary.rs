//! Сводная статистика по набору броней.
//!
//! Гистограмма статусов считается по всему набору, включая отмены;
//! остальные метрики — по «валидному» подмножеству после фильтра отмен.

use chrono::Local;
use rust_decimal::Decimal;

use crate::filter;
use crate::model::{
    GuestTotals, OrderedMap, PropertyCount, PropertyEarnings, Reservation, Summary,
};
use crate::money;

pub fn summarize(records: &[Reservation], include_canceled: bool) -> Summary {
    let mut status_count: Vec<(String, u64)> = Vec::new();
    for r in records {
        bump(&mut status_count, &r.status);
    }
    status_count.sort_by(|a, b| b.1.cmp(&a.1));

    let valid: Vec<&Reservation> = records
        .iter()
        .filter(|r| include_canceled || !filter::is_canceled(r))
        .collect();

    let reservations_sum = valid.len();
    let earnings_sum: Decimal = valid.iter().map(|r| r.earnings).sum();
    let nights_sum: u64 = valid.iter().map(|r| u64::from(r.nights)).sum();

    let guest_details = GuestTotals {
        adults_sum: valid.iter().map(|r| u64::from(r.guest.details.adults)).sum(),
        children_sum: valid
            .iter()
            .map(|r| u64::from(r.guest.details.children))
            .sum(),
        infants_sum: valid
            .iter()
            .map(|r| u64::from(r.guest.details.infants))
            .sum(),
        pets_sum: valid.iter().map(|r| u64::from(r.guest.details.pets)).sum(),
    };

    // Группировка по объекту: порядок первого появления сохраняется,
    // чтобы при равных метриках он же решал и порядок в отчёте.
    let mut per_property: Vec<(String, u64, Decimal)> = Vec::new();
    for r in &valid {
        match per_property.iter_mut().find(|(k, _, _)| *k == r.property_name) {
            Some(entry) => {
                entry.1 += 1;
                entry.2 += r.earnings;
            }
            None => per_property.push((r.property_name.clone(), 1, r.earnings)),
        }
    }

    let total_count = Decimal::from(reservations_sum as u64);
    let mut counts: Vec<(String, PropertyCount)> = per_property
        .iter()
        .map(|(name, count, _)| {
            (
                name.clone(),
                PropertyCount {
                    count: *count,
                    percentage: percentage(Decimal::from(*count), total_count),
                },
            )
        })
        .collect();
    counts.sort_by(|a, b| b.1.count.cmp(&a.1.count));

    let mut earnings: Vec<(String, Decimal, PropertyEarnings)> = per_property
        .iter()
        .map(|(name, count, sum)| {
            (
                name.clone(),
                *sum,
                PropertyEarnings {
                    earnings: money::format_brl(*sum),
                    percentage: percentage(*sum, earnings_sum),
                    average_per_reservation: money::format_brl(*sum / Decimal::from(*count)),
                },
            )
        })
        .collect();
    earnings.sort_by(|a, b| b.1.cmp(&a.1));

    Summary {
        generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        reservations_sum,
        earnings_sum: money::format_brl(earnings_sum),
        nights_sum,
        status_count: OrderedMap(status_count),
        guest_details,
        reservations_per_property: OrderedMap(counts),
        earnings_per_property: OrderedMap(
            earnings.into_iter().map(|(k, _, v)| (k, v)).collect(),
        ),
    }
}

fn bump(acc: &mut Vec<(String, u64)>, key: &str) {
    match acc.iter_mut().find(|(k, _)| k == key) {
        Some(entry) => entry.1 += 1,
        None => acc.push((key.to_string(), 1)),
    }
}

/// Доля в процентах с двумя знаками. Нулевой итог не делим — пустое
/// подмножество даёт нулевую сводку, а не панику.
fn percentage(part: Decimal, total: Decimal) -> String {
    if total.is_zero() {
        return "0.00%".to_string();
    }
    format!(
        "{}%",
        money::format_fixed2(part * Decimal::ONE_HUNDRED / total)
    )
}

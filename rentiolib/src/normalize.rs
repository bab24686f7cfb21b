//! Нормализация сырых записей платформы в [`Reservation`].
//!
//! Все обращения к полям защитные: отсутствующий ключ или вложенный объект
//! даёт ноль/пустую строку. Структурно битая запись заменяется пустой
//! заглушкой, пакет при этом не прерывается.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::model::{Guest, GuestDetails, Reservation};
use crate::money;
use crate::observer::{Notice, Observer};

/// Скалярное поле не того типа — это не повод терять запись:
/// строка не-строкой даёт пустое значение, число не-числом — ноль.
fn lenient_string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn lenient_u32<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u32>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
        Value::String(s) => s.parse().ok(),
        _ => None,
    })
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawGuestUser {
    #[serde(deserialize_with = "lenient_string")]
    full_name: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    phone: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    location: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawGuestDetails {
    #[serde(deserialize_with = "lenient_u32")]
    number_of_adults: Option<u32>,
    #[serde(deserialize_with = "lenient_u32")]
    number_of_children: Option<u32>,
    #[serde(deserialize_with = "lenient_u32")]
    number_of_infants: Option<u32>,
    #[serde(deserialize_with = "lenient_u32")]
    number_of_pets: Option<u32>,
}

/// Зеркало ответа `/api/v2/reservations`. Контракт не наш, поэтому каждое
/// поле опционально и терпимо к чужому типу; заглушка остаётся только для
/// структурно битых записей (запись не объект, `guest_user` — скаляр).
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawReservation {
    #[serde(deserialize_with = "lenient_string")]
    user_facing_status_localized: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    confirmation_code: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    listing_name: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    booked_date: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    start_date: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    end_date: Option<String>,
    #[serde(deserialize_with = "lenient_u32")]
    nights: Option<u32>,
    #[serde(deserialize_with = "lenient_string")]
    earnings: Option<String>,
    guest_user: Option<RawGuestUser>,
    guest_details: Option<RawGuestDetails>,
}

/// Результат нормализации пакета: заглушки остаются в `records`,
/// их количество отдельно видно в `malformed`.
#[derive(Debug, Default)]
pub struct NormalizedBatch {
    pub records: Vec<Reservation>,
    pub malformed: usize,
}

pub fn normalize(raw: &Value, obs: &dyn Observer) -> Reservation {
    match try_normalize(raw, obs) {
        Ok(r) => r,
        Err(detail) => {
            obs.notify(Notice::RecordMalformed { detail });
            Reservation::default()
        }
    }
}

pub fn normalize_batch(raw: &[Value], obs: &dyn Observer) -> NormalizedBatch {
    let mut batch = NormalizedBatch::default();
    for value in raw {
        match try_normalize(value, obs) {
            Ok(r) => batch.records.push(r),
            Err(detail) => {
                obs.notify(Notice::RecordMalformed { detail });
                batch.records.push(Reservation::default());
                batch.malformed += 1;
            }
        }
    }
    batch
}

fn try_normalize(raw: &Value, obs: &dyn Observer) -> Result<Reservation, String> {
    let raw: RawReservation = serde_json::from_value(raw.clone()).map_err(|e| e.to_string())?;

    let guest_user = raw.guest_user.unwrap_or_default();
    let guest_details = raw.guest_details.unwrap_or_default();

    Ok(Reservation {
        status: raw.user_facing_status_localized.unwrap_or_default(),
        confirmation_code: raw.confirmation_code.unwrap_or_default(),
        property_name: raw.listing_name.unwrap_or_default(),
        booking_date: parse_date(raw.booked_date.as_deref()),
        check_in: parse_date(raw.start_date.as_deref()),
        check_out: parse_date(raw.end_date.as_deref()),
        nights: raw.nights.unwrap_or(0),
        earnings: raw
            .earnings
            .as_deref()
            .map(|s| money::parse_brl(s, obs))
            .unwrap_or(Decimal::ZERO),
        guest: Guest {
            name: guest_user.full_name.unwrap_or_default(),
            phone: guest_user.phone.unwrap_or_default(),
            location: guest_user.location.unwrap_or_default(),
            details: GuestDetails {
                adults: guest_details.number_of_adults.unwrap_or(0),
                children: guest_details.number_of_children.unwrap_or(0),
                infants: guest_details.number_of_infants.unwrap_or(0),
                pets: guest_details.number_of_pets.unwrap_or(0),
            },
        },
    })
}

fn parse_date(s: Option<&str>) -> Option<NaiveDate> {
    s.and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
}

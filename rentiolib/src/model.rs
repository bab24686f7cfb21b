//! Доменные модели — единый «нормализованный» слой поверх сырых данных платформы.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Состав гостей по категориям.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GuestDetails {
    pub adults: u32,
    pub children: u32,
    pub infants: u32,
    pub pets: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Guest {
    pub name: String,
    pub phone: String,
    pub location: String,
    pub details: GuestDetails,
}

/// Нормализованная бронь. После создания не меняется; отсутствующие
/// значения уже заменены нулями/пустыми строками.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Reservation {
    pub status: String,
    pub confirmation_code: String,
    pub property_name: String,
    #[serde(with = "date_string")]
    pub booking_date: Option<NaiveDate>,
    #[serde(with = "date_string")]
    pub check_in: Option<NaiveDate>,
    #[serde(with = "date_string")]
    pub check_out: Option<NaiveDate>,
    pub nights: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub earnings: Decimal,
    pub guest: Guest,
}

/// Даты в отчёте — строки YYYY-MM-DD; отсутствующая дата — пустая строка
/// (так их отдаёт и платформа).
mod date_string {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error> {
        match d {
            Some(d) => s.serialize_str(&d.format("%Y-%m-%d").to_string()),
            None => s.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDate>, D::Error> {
        let raw = String::deserialize(d)?;
        Ok(NaiveDate::parse_from_str(&raw, "%Y-%m-%d").ok())
    }
}

/// Словарь, сериализующийся в JSON-объект с сохранением порядка вставки.
/// Сводка отдаёт метрики по убыванию — для этого важен именно порядок.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderedMap<V>(pub Vec<(String, V)>);

impl<V> OrderedMap<V> {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }
}

impl<V: Serialize> Serialize for OrderedMap<V> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        let mut map = s.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Суммы по категориям гостей за весь набор.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct GuestTotals {
    pub adults_sum: u64,
    pub children_sum: u64,
    pub infants_sum: u64,
    pub pets_sum: u64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PropertyCount {
    pub count: u64,
    pub percentage: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PropertyEarnings {
    pub earnings: String,
    pub percentage: String,
    pub average_per_reservation: String,
}

/// Сводка по набору броней. Живёт один запрос: построили, сериализовали, забыли.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Summary {
    pub generated_at: String,
    pub reservations_sum: usize,
    pub earnings_sum: String,
    pub nights_sum: u64,
    pub status_count: OrderedMap<u64>,
    pub guest_details: GuestTotals,
    pub reservations_per_property: OrderedMap<PropertyCount>,
    pub earnings_per_property: OrderedMap<PropertyEarnings>,
}

/// Итоговый JSON-документ: сводка плюс сами брони.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Report {
    pub summary: Summary,
    pub reservations: Vec<Reservation>,
}

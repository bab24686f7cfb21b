//! Фильтры: включение отмен, диапазон дат, набор статусов.

use std::collections::HashSet;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::{RentioError, Result};
use crate::model::Reservation;
use crate::sort::{self, SortKey, SortOrder};

/// Локализованные (pt-BR) статусы отмены — это данные платформы,
/// запросы всегда идут с `locale=pt`.
pub const CANCELED_STATUSES: [&str; 2] = ["Cancelada pelo hóspede", "Cancelada pelo anfitrião"];

pub fn is_canceled(r: &Reservation) -> bool {
    CANCELED_STATUSES.iter().any(|s| r.status == *s)
}

pub fn exclude_canceled(records: Vec<Reservation>) -> Vec<Reservation> {
    records.into_iter().filter(|r| !is_canceled(r)).collect()
}

/// Какая из дат брони проверяется диапазоном. Закрытый перечень:
/// любое другое имя — ошибка валидации запроса.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateField {
    #[default]
    CheckIn,
    CheckOut,
    BookingDate,
}

impl DateField {
    pub fn get(self, r: &Reservation) -> Option<NaiveDate> {
        match self {
            DateField::CheckIn => r.check_in,
            DateField::CheckOut => r.check_out,
            DateField::BookingDate => r.booking_date,
        }
    }
}

impl FromStr for DateField {
    type Err = RentioError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "check_in" => Ok(DateField::CheckIn),
            "check_out" => Ok(DateField::CheckOut),
            "booking_date" => Ok(DateField::BookingDate),
            other => Err(RentioError::Validation(format!(
                "unknown date field: {other}"
            ))),
        }
    }
}

/// Критерии отбора. Границы включительные; отсутствующая граница
/// означает открытый край диапазона.
#[derive(Debug, Clone, Default)]
pub struct ReservationFilter {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub field: DateField,
    pub statuses: Option<HashSet<String>>,
}

impl ReservationFilter {
    /// Собирает фильтр из строковых параметров запроса. Непонятная дата
    /// или имя поля — ошибка валидации всего запроса, не частичный фильтр.
    pub fn parse(
        start: Option<&str>,
        end: Option<&str>,
        field: &str,
        statuses: Option<&[String]>,
    ) -> Result<Self> {
        Ok(Self {
            start: parse_bound(start)?,
            end: parse_bound(end)?,
            field: field.parse()?,
            statuses: statuses
                .filter(|s| !s.is_empty())
                .map(|s| s.iter().cloned().collect()),
        })
    }

    pub fn matches(&self, r: &Reservation) -> bool {
        // Дата проверяется только когда задана хоть одна граница;
        // запись без выбранной даты тогда отбрасывается.
        if self.start.is_some() || self.end.is_some() {
            let Some(d) = self.field.get(r) else {
                return false;
            };
            if self.start.is_some_and(|s| d < s) {
                return false;
            }
            if self.end.is_some_and(|e| d > e) {
                return false;
            }
        }
        match &self.statuses {
            Some(allowed) => allowed.contains(&r.status),
            None => true,
        }
    }

    pub fn apply(&self, records: Vec<Reservation>) -> Vec<Reservation> {
        records.into_iter().filter(|r| self.matches(r)).collect()
    }
}

fn parse_bound(s: Option<&str>) -> Result<Option<NaiveDate>> {
    match s {
        None => Ok(None),
        Some(v) => NaiveDate::parse_from_str(v, "%Y-%m-%d")
            .map(Some)
            .map_err(|e| RentioError::Validation(format!("bad filter date `{v}`: {e}"))),
    }
}

/// Разобранный запрос «отфильтруй и отсортируй».
#[derive(Debug, Clone, Default)]
pub struct Query {
    pub filter: ReservationFilter,
    pub sort_by: Option<SortKey>,
    pub order: SortOrder,
}

impl Query {
    pub fn parse(
        sort_by: Option<&str>,
        order: Option<&str>,
        start: Option<&str>,
        end: Option<&str>,
        field: &str,
        statuses: Option<&[String]>,
    ) -> Result<Self> {
        Ok(Self {
            filter: ReservationFilter::parse(start, end, field, statuses)?,
            sort_by: sort_by.map(str::parse).transpose()?,
            order: order.map(str::parse).transpose()?.unwrap_or_default(),
        })
    }

    pub fn run(&self, records: Vec<Reservation>) -> Vec<Reservation> {
        let mut records = self.filter.apply(records);
        if let Some(key) = self.sort_by {
            sort::sort_records(&mut records, key, self.order);
        }
        records
    }
}

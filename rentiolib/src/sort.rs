//! Сортировка по закрытому перечню полей, стабильная.

use std::cmp::Ordering;
use std::str::FromStr;

use crate::error::{RentioError, Result};
use crate::model::Reservation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Status,
    ConfirmationCode,
    PropertyName,
    BookingDate,
    CheckIn,
    CheckOut,
    Nights,
    Earnings,
    GuestName,
}

impl FromStr for SortKey {
    type Err = RentioError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "status" => Ok(SortKey::Status),
            "confirmation_code" => Ok(SortKey::ConfirmationCode),
            "property_name" => Ok(SortKey::PropertyName),
            "booking_date" => Ok(SortKey::BookingDate),
            "check_in" => Ok(SortKey::CheckIn),
            "check_out" => Ok(SortKey::CheckOut),
            "nights" => Ok(SortKey::Nights),
            "earnings" => Ok(SortKey::Earnings),
            "guest_name" => Ok(SortKey::GuestName),
            other => Err(RentioError::Validation(format!("unknown sort key: {other}"))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortOrder {
    type Err = RentioError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(RentioError::Validation(format!(
                "unknown sort order: {other}"
            ))),
        }
    }
}

/// `sort_by` стабильна, так что равные ключи сохраняют исходный порядок;
/// отсутствующая дата идёт раньше любой заданной.
pub fn sort_records(records: &mut [Reservation], key: SortKey, order: SortOrder) {
    records.sort_by(|a, b| {
        let ord = compare(a, b, key);
        match order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    });
}

fn compare(a: &Reservation, b: &Reservation, key: SortKey) -> Ordering {
    match key {
        SortKey::Status => a.status.cmp(&b.status),
        SortKey::ConfirmationCode => a.confirmation_code.cmp(&b.confirmation_code),
        SortKey::PropertyName => a.property_name.cmp(&b.property_name),
        SortKey::BookingDate => a.booking_date.cmp(&b.booking_date),
        SortKey::CheckIn => a.check_in.cmp(&b.check_in),
        SortKey::CheckOut => a.check_out.cmp(&b.check_out),
        SortKey::Nights => a.nights.cmp(&b.nights),
        SortKey::Earnings => a.earnings.cmp(&b.earnings),
        SortKey::GuestName => a.guest.name.cmp(&b.guest.name),
    }
}

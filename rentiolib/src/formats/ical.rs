//! Экспорт броней в iCalendar (VCALENDAR/VEVENT).
//!
//! Заезд всегда в 14:00, выезд в 11:00. Запись без одной из дат
//! пропускается с уведомлением — остальной пакет выгружается дальше.

use std::fmt::Write as FmtWrite;

use chrono::NaiveDate;

use crate::error::{RentioError, Result};
use crate::model::Reservation;
use crate::observer::{Notice, Observer};

const CHECK_IN_TIME: &str = "140000";
const CHECK_OUT_TIME: &str = "110000";

pub struct Ical;

impl crate::traits::ExportFormat for Ical {
    fn write<W: std::io::Write>(mut w: W, report: &crate::model::Report, obs: &dyn Observer) -> Result<()> {
        let doc = render(&report.reservations, obs)?;
        w.write_all(doc.as_bytes())?;
        Ok(())
    }
}

/// Собирает календарный документ целиком. Ноль событий — это не пустой
/// (и потому невалидный) календарь, а структурный ответ-ошибка.
pub fn render(records: &[Reservation], obs: &dyn Observer) -> Result<String> {
    let mut body = String::new();
    let mut events = 0usize;

    for r in records {
        let (Some(check_in), Some(check_out)) = (r.check_in, r.check_out) else {
            obs.notify(Notice::EventSkipped {
                confirmation_code: &r.confirmation_code,
                reason: "missing check-in or check-out date",
            });
            continue;
        };

        let _ = write!(body, "BEGIN:VEVENT\r\n");
        let _ = write!(body, "SUMMARY:{}\r\n", escape_text(&r.property_name));
        let _ = write!(
            body,
            "DTSTART:{}T{CHECK_IN_TIME}Z\r\n",
            check_in.format("%Y%m%d")
        );
        let _ = write!(
            body,
            "DTEND:{}T{CHECK_OUT_TIME}Z\r\n",
            check_out.format("%Y%m%d")
        );
        let _ = write!(body, "DESCRIPTION:{}\r\n", description(r, check_in, check_out));
        let _ = write!(body, "LOCATION:{}\r\n", escape_text(&r.property_name));
        let _ = write!(body, "END:VEVENT\r\n");
        events += 1;
    }

    if events == 0 {
        return Err(RentioError::Empty("no calendar events to export"));
    }

    let mut doc = String::with_capacity(body.len() + 96);
    let _ = write!(doc, "BEGIN:VCALENDAR\r\n");
    let _ = write!(doc, "VERSION:2.0\r\n");
    let _ = write!(doc, "PRODID:-//rentio//reservations//PT\r\n");
    doc.push_str(&body);
    let _ = write!(doc, "END:VCALENDAR\r\n");
    Ok(doc)
}

fn description(r: &Reservation, check_in: NaiveDate, check_out: NaiveDate) -> String {
    let d = &r.guest.details;
    let lines = [
        format!("Property: {}", r.property_name),
        format!("Check-in: {check_in}"),
        format!("Check-out: {check_out}"),
        format!("Status: {}", r.status),
        format!(
            "Guests: {} adults, {} children, {} infants, {} pets",
            d.adults, d.children, d.infants, d.pets
        ),
        format!("Guest: {} ({}) {}", r.guest.name, r.guest.location, r.guest.phone),
    ];
    escape_text(&lines.join("\n"))
}

/// Экранирование TEXT-значений по RFC 5545.
fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            '\n' => out.push_str("\\n"),
            _ => out.push(ch),
        }
    }
    out
}

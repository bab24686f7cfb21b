//! JSON-отчёт: `{ "summary": ..., "reservations": [...] }`.

use std::io::Write;

use serde_json::json;

use crate::error::Result;
use crate::model::Report;
use crate::observer::Observer;

pub struct Json;

impl crate::traits::ExportFormat for Json {
    fn write<W: Write>(mut w: W, report: &Report, _obs: &dyn Observer) -> Result<()> {
        serde_json::to_writer_pretty(&mut w, report)?;
        w.write_all(b"\n")?;
        Ok(())
    }
}

/// Ответ-сообщение вместо полезной нагрузки: пустой результат или
/// ошибка валидации запроса.
pub fn write_message<W: Write>(mut w: W, text: &str) -> Result<()> {
    serde_json::to_writer_pretty(&mut w, &json!({ "message": text }))?;
    w.write_all(b"\n")?;
    Ok(())
}

//! Унифицированный трэйт записи отчётных форматов на основе std::io::Write.

use crate::{error::Result, model::Report, observer::Observer};
use std::io::Write;

pub trait ExportFormat {
    fn write<W: Write>(w: W, report: &Report, obs: &dyn Observer) -> Result<()>;
}

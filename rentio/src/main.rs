mod client;

use std::fs::File;
use std::io::{self, Write};
use std::time::Instant;

use clap::Parser;
use rentiolib::{
    error::RentioError,
    filter::Query,
    formats::{ical::Ical, json},
    model::Report,
    normalize,
    observer::{Notice, Observer},
    summary,
    traits::ExportFormat,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::client::ApiClient;

#[derive(Parser, Debug)]
#[command(name = "rentio", version, about = "Отчёт по броням хоста: JSON-сводка и iCal-календарь")]
struct Cli {
    /// Ключ API платформы
    #[arg(long, env = "RENTIO_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Сессионный cookie авторизованного хоста
    #[arg(long, env = "RENTIO_COOKIE", hide_env_values = true)]
    cookie: String,

    /// Файл JSON-отчёта (по умолчанию stdout)
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Файл iCal-календаря (без него календарь не пишется)
    #[arg(long)]
    ical: Option<String>,

    /// Учитывать отменённые брони во всей сводке
    #[arg(long)]
    include_canceled: bool,

    /// Поле сортировки (status, confirmation_code, property_name,
    /// booking_date, check_in, check_out, nights, earnings, guest_name)
    #[arg(long)]
    sort_by: Option<String>,

    /// Порядок сортировки: asc | desc
    #[arg(long, default_value = "asc")]
    sort_order: String,

    /// Начало диапазона дат, YYYY-MM-DD (включительно)
    #[arg(long)]
    start_date: Option<String>,

    /// Конец диапазона дат, YYYY-MM-DD (включительно)
    #[arg(long)]
    end_date: Option<String>,

    /// Какая дата попадает под диапазон: check_in | check_out | booking_date
    #[arg(long, default_value = "check_in")]
    date_field: String,

    /// Допустимый статус (флаг можно повторять)
    #[arg(long = "status")]
    statuses: Vec<String>,
}

/// Мост от событий конвейера к tracing.
struct TracingObserver;

impl Observer for TracingObserver {
    fn notify(&self, notice: Notice<'_>) {
        match notice {
            Notice::CurrencyParseFailed { raw } => {
                warn!(raw, "failed to parse earnings value, defaulting to zero");
            }
            Notice::RecordMalformed { detail } => {
                warn!(detail = %detail, "malformed raw record replaced with placeholder");
            }
            Notice::EventSkipped {
                confirmation_code,
                reason,
            } => {
                warn!(confirmation_code, reason, "calendar event skipped");
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let started = Instant::now();
    let obs = TracingObserver;

    let query = match Query::parse(
        cli.sort_by.as_deref(),
        Some(cli.sort_order.as_str()),
        cli.start_date.as_deref(),
        cli.end_date.as_deref(),
        &cli.date_field,
        Some(cli.statuses.as_slice()),
    ) {
        Ok(query) => query,
        Err(e) => {
            warn!(error = %e, "invalid request, writing message response");
            json::write_message(open_output(cli.output.as_deref())?, &e.to_string())?;
            return Ok(());
        }
    };

    let api = ApiClient::new(cli.api_key, cli.cookie);
    let outcome = api.fetch_reservations();
    if !outcome.complete {
        warn!("retrieval stopped on a transport failure, report covers a partial set");
    }

    let batch = normalize::normalize_batch(&outcome.raw, &obs);
    if batch.malformed > 0 {
        warn!(malformed = batch.malformed, "some records were structurally invalid");
    }

    let reservations = query.run(batch.records);
    if reservations.is_empty() {
        warn!("no reservations matched");
        json::write_message(open_output(cli.output.as_deref())?, "No reservations found.")?;
        return Ok(());
    }

    let report = Report {
        summary: summary::summarize(&reservations, cli.include_canceled),
        reservations,
    };

    json::Json::write(open_output(cli.output.as_deref())?, &report, &obs)?;
    if let Some(path) = &cli.output {
        info!(path = %path, "JSON report written");
    }

    if let Some(path) = &cli.ical {
        match Ical::write(File::create(path)?, &report, &obs) {
            Ok(()) => info!(path = %path, "iCal calendar written"),
            Err(RentioError::Empty(msg)) => warn!(path = %path, msg, "calendar not written"),
            Err(e) => return Err(e.into()),
        }
    }

    info!(elapsed_ms = started.elapsed().as_millis() as u64, "run complete");
    Ok(())
}

fn open_output(path: Option<&str>) -> io::Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    })
}

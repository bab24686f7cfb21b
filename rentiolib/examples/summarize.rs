use rentiolib::{
    formats::json::Json, model::Report, normalize, observer::Noop, summary, traits::ExportFormat,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Пример: сырые записи платформы (JSON-массив) stdin -> отчёт stdout
    let raw: Vec<serde_json::Value> = serde_json::from_reader(std::io::stdin())?;
    let batch = normalize::normalize_batch(&raw, &Noop);
    let report = Report {
        summary: summary::summarize(&batch.records, false),
        reservations: batch.records,
    };
    Json::write(std::io::stdout(), &report, &Noop)?;
    Ok(())
}

use chrono::NaiveDate;
use rentiolib::error::RentioError;
use rentiolib::filter::{exclude_canceled, is_canceled, Query, ReservationFilter};
use rentiolib::model::Reservation;
use rentiolib::sort::{sort_records, SortKey, SortOrder};
use rust_decimal::Decimal;

fn res(code: &str, status: &str, check_out: Option<&str>) -> Reservation {
    Reservation {
        status: status.to_string(),
        confirmation_code: code.to_string(),
        property_name: "Loft Centro".to_string(),
        check_out: check_out.map(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").unwrap()),
        earnings: Decimal::ZERO,
        ..Reservation::default()
    }
}

#[test]
fn check_out_range_is_inclusive() {
    let records = vec![
        res("OUT-BEFORE", "Confirmada", Some("2023-12-31")),
        res("ON-START", "Confirmada", Some("2024-01-01")),
        res("ON-END", "Confirmada", Some("2024-12-31")),
        res("OUT-AFTER", "Confirmada", Some("2025-01-01")),
        res("NO-DATE", "Confirmada", None),
    ];

    let filter =
        ReservationFilter::parse(Some("2024-01-01"), Some("2024-12-31"), "check_out", None)
            .unwrap();
    let kept: Vec<String> = filter
        .apply(records)
        .into_iter()
        .map(|r| r.confirmation_code)
        .collect();
    assert_eq!(kept, vec!["ON-START", "ON-END"]);
}

#[test]
fn open_ended_bounds() {
    let records = vec![
        res("A", "Confirmada", Some("2024-03-01")),
        res("B", "Confirmada", Some("2024-09-01")),
    ];
    let filter = ReservationFilter::parse(Some("2024-06-01"), None, "check_out", None).unwrap();
    let kept = filter.apply(records);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].confirmation_code, "B");
}

#[test]
fn status_set_filter() {
    let records = vec![
        res("A", "Confirmada", None),
        res("B", "Aguardando avaliação", None),
        res("C", "Confirmada", None),
    ];
    let allowed = vec!["Confirmada".to_string()];
    let filter = ReservationFilter::parse(None, None, "check_in", Some(allowed.as_slice())).unwrap();
    assert_eq!(filter.apply(records).len(), 2);
}

#[test]
fn unknown_date_field_is_validation_error() {
    let err = ReservationFilter::parse(None, None, "created_at", None).unwrap_err();
    assert!(matches!(err, RentioError::Validation(_)));
}

#[test]
fn bad_filter_date_is_validation_error() {
    let err =
        ReservationFilter::parse(Some("31/12/2024"), None, "check_in", None).unwrap_err();
    assert!(matches!(err, RentioError::Validation(_)));
}

#[test]
fn cancellation_predicate() {
    assert!(is_canceled(&res("A", "Cancelada pelo hóspede", None)));
    assert!(is_canceled(&res("B", "Cancelada pelo anfitrião", None)));
    assert!(!is_canceled(&res("C", "Confirmada", None)));

    let records = vec![
        res("A", "Confirmada", None),
        res("B", "Cancelada pelo hóspede", None),
    ];
    assert_eq!(exclude_canceled(records).len(), 1);
}

#[test]
fn sort_check_out_ascending_is_stable() {
    let mut records = vec![
        res("C", "Confirmada", Some("2024-07-01")),
        res("A1", "Confirmada", Some("2024-05-01")),
        res("A2", "Confirmada", Some("2024-05-01")),
        res("B", "Confirmada", Some("2024-06-01")),
    ];
    sort_records(&mut records, SortKey::CheckOut, SortOrder::Asc);
    let order: Vec<&str> = records.iter().map(|r| r.confirmation_code.as_str()).collect();
    // равные даты сохраняют исходный взаимный порядок
    assert_eq!(order, vec!["A1", "A2", "B", "C"]);
}

#[test]
fn sort_descending() {
    let mut records = vec![
        res("A", "Confirmada", Some("2024-05-01")),
        res("B", "Confirmada", Some("2024-06-01")),
    ];
    sort_records(&mut records, SortKey::CheckOut, SortOrder::Desc);
    assert_eq!(records[0].confirmation_code, "B");
}

#[test]
fn unknown_sort_key_rejected() {
    let err = "guest_age".parse::<SortKey>().unwrap_err();
    assert!(matches!(err, RentioError::Validation(_)));
    assert!("upside_down".parse::<rentiolib::sort::SortOrder>().is_err());
}

#[test]
fn query_filters_then_sorts() {
    let records = vec![
        res("B", "Confirmada", Some("2024-06-01")),
        res("X", "Cancelada pelo hóspede", Some("2024-06-15")),
        res("A", "Confirmada", Some("2024-05-01")),
    ];
    let allowed = vec!["Confirmada".to_string()];
    let query = Query::parse(
        Some("check_out"),
        Some("asc"),
        Some("2024-01-01"),
        Some("2024-12-31"),
        "check_out",
        Some(allowed.as_slice()),
    )
    .unwrap();
    let out: Vec<String> = query
        .run(records)
        .into_iter()
        .map(|r| r.confirmation_code)
        .collect();
    assert_eq!(out, vec!["A", "B"]);
}

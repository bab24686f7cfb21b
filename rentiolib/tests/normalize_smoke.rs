use chrono::NaiveDate;
use rentiolib::normalize::{normalize, normalize_batch};
use rentiolib::observer::Noop;
use rust_decimal::Decimal;
use serde_json::json;

#[test]
fn full_record_maps_all_fields() {
    let raw = json!({
        "user_facing_status_localized": "Confirmada",
        "confirmation_code": "HMABC123",
        "listing_name": "Casa da Praia",
        "booked_date": "2024-03-10",
        "start_date": "2024-05-01",
        "end_date": "2024-05-04",
        "nights": 3,
        "earnings": "R$1.100,00",
        "guest_user": {
            "full_name": "Maria Silva",
            "phone": "+55 11 99999-0000",
            "location": "São Paulo, Brazil"
        },
        "guest_details": {
            "number_of_adults": 2,
            "number_of_children": 1,
            "number_of_infants": 0,
            "number_of_pets": 1
        }
    });

    let r = normalize(&raw, &Noop);
    assert_eq!(r.status, "Confirmada");
    assert_eq!(r.confirmation_code, "HMABC123");
    assert_eq!(r.property_name, "Casa da Praia");
    assert_eq!(r.check_in, NaiveDate::from_ymd_opt(2024, 5, 1));
    assert_eq!(r.check_out, NaiveDate::from_ymd_opt(2024, 5, 4));
    assert_eq!(r.nights, 3);
    assert_eq!(r.earnings, Decimal::from_str_exact("1100.00").unwrap());
    assert_eq!(r.guest.name, "Maria Silva");
    assert_eq!(r.guest.details.adults, 2);
    assert_eq!(r.guest.details.pets, 1);
}

#[test]
fn missing_fields_default_to_empty() {
    let r = normalize(&json!({}), &Noop);
    assert_eq!(r.status, "");
    assert_eq!(r.confirmation_code, "");
    assert_eq!(r.check_in, None);
    assert_eq!(r.nights, 0);
    assert_eq!(r.earnings, Decimal::ZERO);
    assert_eq!(r.guest.details.adults, 0);
}

#[test]
fn unparseable_date_becomes_none() {
    let r = normalize(&json!({ "start_date": "soon", "end_date": "2024-02-30" }), &Noop);
    assert_eq!(r.check_in, None);
    assert_eq!(r.check_out, None);
}

#[test]
fn wrongly_typed_scalar_defaults_without_losing_record() {
    // число вместо денежной строки: запись остаётся, заработок — ноль
    let r = normalize(
        &json!({
            "confirmation_code": "HM1",
            "listing_name": "Casa da Praia",
            "earnings": 123
        }),
        &Noop,
    );
    assert_eq!(r.confirmation_code, "HM1");
    assert_eq!(r.property_name, "Casa da Praia");
    assert_eq!(r.earnings, Decimal::ZERO);

    // нечисловая строка в числовом поле — ноль, остальное на месте
    let r = normalize(
        &json!({ "confirmation_code": "HM2", "nights": "three", "earnings": "R$50,00" }),
        &Noop,
    );
    assert_eq!(r.confirmation_code, "HM2");
    assert_eq!(r.nights, 0);
    assert_eq!(r.earnings, Decimal::from_str_exact("50.00").unwrap());

    let r = normalize(
        &json!({ "nights": 3, "guest_details": { "number_of_adults": "2", "number_of_pets": true } }),
        &Noop,
    );
    assert_eq!(r.nights, 3);
    assert_eq!(r.guest.details.adults, 2);
    assert_eq!(r.guest.details.pets, 0);
}

#[test]
fn structurally_broken_record_yields_placeholder_not_abort() {
    let good = json!({ "confirmation_code": "HM1", "nights": 2 });
    let not_an_object = json!("oops");
    let scalar_guest = json!({ "confirmation_code": "HM3", "guest_user": 7 });

    let batch = normalize_batch(&[good.clone(), not_an_object, scalar_guest, good], &Noop);
    assert_eq!(batch.records.len(), 4);
    assert_eq!(batch.malformed, 2);
    assert_eq!(batch.records[0].confirmation_code, "HM1");
    // заглушки посередине
    assert_eq!(batch.records[1].confirmation_code, "");
    assert_eq!(batch.records[2].confirmation_code, "");
    assert_eq!(batch.records[3].nights, 2);
}

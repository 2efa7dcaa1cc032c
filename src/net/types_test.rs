use super::*;
use serde_json::json;

// =============================================================
// Trip
// =============================================================

#[test]
fn trip_deserializes_camel_case_fields() {
    let trip: Trip = serde_json::from_value(json!({
        "id": 9,
        "driver": "Ayu",
        "eMoney": "Flazz 01",
        "departureDate": "2024-11-02",
        "origin": "Jakarta"
    }))
    .expect("trip");

    assert_eq!(trip.id, 9);
    assert_eq!(trip.e_money.as_deref(), Some("Flazz 01"));
    assert_eq!(trip.departure_date.as_deref(), Some("2024-11-02"));
    assert_eq!(trip.destination, None);
}

#[test]
fn trip_tolerates_float_ids() {
    let trip: Trip = serde_json::from_value(json!({ "id": 9.0 })).expect("trip");
    assert_eq!(trip.id, 9);
}

#[test]
fn fractional_ids_are_rejected() {
    assert!(serde_json::from_value::<Trip>(json!({ "id": 9.5 })).is_err());
    assert!(serde_json::from_value::<Trip>(json!({ "id": "9" })).is_err());
}

// =============================================================
// Other records
// =============================================================

#[test]
fn driver_optional_fields_default_to_none() {
    let driver: Driver =
        serde_json::from_value(json!({ "id": 1, "name": "Budi" })).expect("driver");
    assert_eq!(driver.phone, None);
    assert_eq!(driver.photo, None);
}

#[test]
fn car_reads_the_plate_number() {
    let car: Car = serde_json::from_value(json!({
        "id": 4,
        "name": "Avanza",
        "plateNumber": "B 1234 X"
    }))
    .expect("car");
    assert_eq!(car.plate_number.as_deref(), Some("B 1234 X"));
}

#[test]
fn e_money_reads_card_number_and_balance() {
    let account: EMoney = serde_json::from_value(json!({
        "id": 6,
        "name": "Flazz 01",
        "cardNumber": "6032-9811",
        "balance": 150_000
    }))
    .expect("e-money");
    assert_eq!(account.card_number.as_deref(), Some("6032-9811"));
    assert_eq!(account.balance, Some(150_000));
}

// =============================================================
// Login grant and dropdown projection
// =============================================================

#[test]
fn login_grant_reads_token_and_role_code() {
    let grant: LoginGrant = serde_json::from_value(json!({
        "accessToken": "token-9",
        "role": 0
    }))
    .expect("grant");
    assert_eq!(grant.access_token, "token-9");
    assert_eq!(grant.role, Some(0));
}

#[test]
fn login_grant_role_is_optional() {
    let grant: LoginGrant =
        serde_json::from_value(json!({ "accessToken": "token-9" })).expect("grant");
    assert_eq!(grant.role, None);
}

#[test]
fn dropdown_option_projects_name_to_title_and_id_to_value() {
    let record: NamedRecord =
        serde_json::from_value(json!({ "id": 5, "name": "Logistics" })).expect("record");
    let option = DropdownOption::from_record(record);
    assert_eq!(option.title, "Logistics");
    assert_eq!(option.value, 5);
}

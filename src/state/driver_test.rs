use super::*;

// =============================================================
// Multipart form encoding
// =============================================================

#[test]
fn full_form_encodes_name_phone_and_photo() {
    let form = DriverForm {
        name: "Budi".to_owned(),
        phone: Some("0812".to_owned()),
        photo: Some(DriverPhoto {
            data: vec![0xFF, 0xD8, 0xFF],
            filename: "budi.jpg".to_owned(),
            mime: "image/jpeg".to_owned(),
        }),
    };

    let Payload::Multipart(parts) = form.into_payload() else {
        panic!("driver forms must encode as multipart");
    };

    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0].name, "name");
    assert_eq!(parts[0].value, PartValue::Text("Budi".to_owned()));
    assert_eq!(parts[1].name, "phone");
    assert_eq!(
        parts[2].value,
        PartValue::Bytes {
            data: vec![0xFF, 0xD8, 0xFF],
            filename: "budi.jpg".to_owned(),
            mime: "image/jpeg".to_owned(),
        }
    );
}

#[test]
fn minimal_form_carries_only_the_name() {
    let form = DriverForm {
        name: "Budi".to_owned(),
        ..DriverForm::default()
    };

    let Payload::Multipart(parts) = form.into_payload() else {
        panic!("driver forms must encode as multipart");
    };

    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0].name, "name");
}

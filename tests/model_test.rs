use bson::{doc, oid::ObjectId};
use clienti_tools::config::settings::Settings;
use clienti_tools::modules::reservation::{
    crud::tag_with_id,
    model::{Quota, Reservation, TimeOfDay},
    schema::DeleteRequest,
};
use clienti_tools::AppError;
use serde_json::json;

#[test]
fn test_time_of_day_parsing() {
    let t = TimeOfDay::parse(" 20:45 ").unwrap();
    assert_eq!(t.minutes(), 20 * 60 + 45);
    assert_eq!(t.to_string(), "20:45");

    assert!(TimeOfDay::parse("24:00").is_err());
    assert!(TimeOfDay::parse("nine").is_err());
    assert_eq!(TimeOfDay::parse_lenient(Some("12:61")), TimeOfDay::midnight());
    assert_eq!(TimeOfDay::parse_lenient(None), TimeOfDay::midnight());
}

#[test]
fn test_out_of_range_times_fall_back_to_midnight() {
    for value in ["24:00", "25:00", "12:61", "99:99"] {
        let t = TimeOfDay::parse_lenient(Some(value));
        assert_eq!(t, TimeOfDay::midnight(), "{value}");
        assert_eq!(t.minutes(), 0);
    }
    assert_eq!(TimeOfDay::parse_lenient(Some("23:59")).minutes(), 23 * 60 + 59);
}

#[test]
fn test_quota_total_saturates() {
    assert_eq!(Quota::new(2, 3).total(), 5);
    assert_eq!(Quota::new(u32::MAX, 1).total(), u32::MAX);
    assert_eq!(Quota::new(u32::MAX, u32::MAX).total(), u32::MAX);
}

#[test]
fn test_distance_is_symmetric() {
    let a = TimeOfDay::parse("12:15").unwrap();
    let b = TimeOfDay::parse("13:00").unwrap();
    assert_eq!(a.distance(b), 45);
    assert_eq!(b.distance(a), 45);
}

#[test]
fn test_reservation_from_document() {
    let oid = ObjectId::new();
    let document = doc! {
        "_id": oid,
        "data": "2025-08-15",
        "orario": "19:30",
        "descrizione": "Bambino",
        "telefono": "333 1234567",
    };

    let r = Reservation::from_document(&document);

    assert_eq!(r.id, oid.to_hex());
    assert_eq!(r.date, "2025-08-15");
    assert_eq!(r.time.as_deref(), Some("19:30"));
    assert_eq!(r.description, "Bambino");
}

#[test]
fn test_reservation_from_sparse_document() {
    let document = doc! { "_id": "abc", "data": "2025-08-15", "orario": 1930 };

    let r = Reservation::from_document(&document);

    assert_eq!(r.id, "abc");
    assert_eq!(r.time, None);
    assert_eq!(r.description, "");
    assert_eq!(r.time_of_day(), TimeOfDay::midnight());
}

#[test]
fn test_tag_with_id_puts_id_first() {
    let oid = ObjectId::new();
    let tagged = tag_with_id(doc! {
        "_id": oid,
        "nome": "Müller",
        "orario": "20:00",
    });

    assert_eq!(tagged, json!({ "id": oid.to_hex(), "nome": "Müller", "orario": "20:00" }));
    let keys: Vec<&String> = tagged.as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["id", "nome", "orario"]);
}

#[test]
fn test_tag_with_id_keeps_stored_id_field() {
    let tagged = tag_with_id(doc! { "_id": "doc-1", "id": "legacy" });

    assert_eq!(tagged, json!({ "id": "legacy" }));
}

#[test]
fn test_delete_request_validation() {
    let request = DeleteRequest {
        date: "2025-08-15".to_string(),
        time: "20:30".to_string(),
        adults: 2,
        children: 1,
    };

    let criteria = request.into_criteria().unwrap();
    assert_eq!(criteria.date, "2025-08-15");
    assert_eq!(criteria.target.minutes(), 20 * 60 + 30);
    assert_eq!(criteria.quota.total(), 3);

    let bad_date = DeleteRequest {
        date: "15/08/2025".to_string(),
        time: "20:30".to_string(),
        adults: 0,
        children: 0,
    };
    assert!(matches!(bad_date.into_criteria(), Err(AppError::InvalidInput(_))));

    let bad_time = DeleteRequest {
        date: "2025-08-15".to_string(),
        time: "8pm".to_string(),
        adults: 0,
        children: 0,
    };
    assert!(matches!(bad_time.into_criteria(), Err(AppError::InvalidInput(_))));
}

#[test]
fn test_settings_defaults_and_overrides() {
    let defaults = Settings::from_lookup(|_| None);
    assert_eq!(defaults, Settings::default());
    assert_eq!(defaults.collection, "clienti");
    assert_eq!(defaults.child_marker, "bamb");

    let custom = Settings::from_lookup(|key| match key {
        "MONGODB_URI" => Some("mongodb://localhost:27017".to_string()),
        "CLIENTI_COLLECTION" => Some("prenotazioni".to_string()),
        "CLIENTI_EXPORT_PATH" => Some("/tmp/out.json".to_string()),
        "MONGODB_DATABASE" => Some("   ".to_string()),
        _ => None,
    });
    assert_eq!(custom.mongodb_uri.as_deref(), Some("mongodb://localhost:27017"));
    assert_eq!(custom.collection, "prenotazioni");
    assert_eq!(custom.export_path.to_str(), Some("/tmp/out.json"));
    assert_eq!(custom.database, "restaurant");
}

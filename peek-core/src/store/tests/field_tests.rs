use crate::store::{RecordField, StoreError};

#[test]
fn parses_column_and_attribute_names() {
    assert_eq!("ip".parse::<RecordField>().unwrap(), RecordField::Ip);
    assert_eq!("ip_address".parse::<RecordField>().unwrap(), RecordField::Ip);
    assert_eq!("size".parse::<RecordField>().unwrap(), RecordField::Size);
    assert_eq!(
        "byte_count".parse::<RecordField>().unwrap(),
        RecordField::Size
    );
    assert_eq!(
        "user_agent".parse::<RecordField>().unwrap(),
        RecordField::UserAgent
    );
    assert_eq!(
        "useragent".parse::<RecordField>().unwrap(),
        RecordField::UserAgent
    );
}

#[test]
fn rejects_unknown_and_injected_names() {
    for name in ["", "IP", "bytes", "ip; DROP TABLE logs", "verb, COUNT(*)"] {
        let err = name.parse::<RecordField>().unwrap_err();
        assert!(
            matches!(err, StoreError::InvalidField { name: ref n } if n == name),
            "unexpected error for {name:?}: {err}"
        );
    }
}

#[test]
fn every_field_round_trips_through_its_column_name() {
    for field in RecordField::ALL {
        assert_eq!(field.column().parse::<RecordField>().unwrap(), field);
    }
}

#[test]
fn queries_reference_only_their_own_column() {
    for field in RecordField::ALL {
        let query = field.occurrence_query();
        assert!(query.contains(&format!("GROUP BY {}", field.column())));
        assert!(query.ends_with("LIMIT ?1"));
        assert!(field.count_query().contains(&format!("WHERE {} = ?1", field.column())));
    }
}

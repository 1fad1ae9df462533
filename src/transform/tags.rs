//! Tag mapper: naming, remark and address rules.

use crate::config::{ADDRESS_PREFIX, UNMAPPED_DIRECTION};
use crate::model::{Direction, SignalRecord, TagDescriptor, TagFlags};

/// Name prefix for a direction.
///
/// Unmapped directions produce the "TODO" sentinel so they stay visible in
/// the generated table.
pub fn direction_prefix(direction: Direction) -> &'static str {
    match direction {
        Direction::Input => "I",
        Direction::Output => "Q",
        Direction::Unmapped => UNMAPPED_DIRECTION,
    }
}

/// Name prefix for fail-safe signals.
pub fn safety_prefix(record: &SignalRecord) -> &'static str {
    if record.is_safety() {
        "F"
    } else {
        ""
    }
}

/// Symbolic tag name, e.g. "FQ_(A2.0)".
pub fn tag_name(record: &SignalRecord) -> String {
    format!(
        "{}{}_({})",
        safety_prefix(record),
        direction_prefix(record.direction()),
        record.io_address
    )
}

/// Tag remark: "<text> | Plc-Module <module> : <connector>".
pub fn tag_remark(record: &SignalRecord) -> String {
    format!(
        "{} | Plc-Module {} : {}",
        record.text, record.module_id, record.connector
    )
}

/// Physical address in the configuration tool's syntax.
pub fn tag_address(record: &SignalRecord) -> String {
    format!("{}{}", ADDRESS_PREFIX, record.io_address)
}

/// Map one signal record to its tag.
pub fn map_tag(record: &SignalRecord) -> TagDescriptor {
    TagDescriptor {
        data_type: record.data_type.clone(),
        flags: TagFlags::IMPORTED,
        remark: tag_remark(record),
        address: tag_address(record),
        name: tag_name(record),
        direction: record.direction(),
    }
}

/// Map all records, preserving order.
pub fn map_tags(records: &[SignalRecord]) -> Vec<TagDescriptor> {
    records.iter().map(map_tag).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(signal_class: &str, direction: &str, address: &str) -> SignalRecord {
        SignalRecord {
            signal_class: signal_class.to_string(),
            direction: direction.to_string(),
            io_address: address.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_naming_rules() {
        assert_eq!(tag_name(&record("DI", "Eingang", "E1.3")), "I_(E1.3)");
        assert_eq!(tag_name(&record("DO SAFETY", "Ausgang", "A2.0")), "FQ_(A2.0)");
        assert_eq!(tag_name(&record("SAFETY", "Eingang", "X")), "FI_(X)");
        assert_eq!(tag_name(&record("DO", "Ausgang", "Y")), "Q_(Y)");
        assert_eq!(tag_name(&record("", "unknown", "Z")), "TODO_(Z)");
        assert_eq!(tag_name(&record("F-SAFETY-DI", "", "Z")), "FTODO_(Z)");
    }

    #[test]
    fn test_safety_unmapped_tag() {
        let tag = map_tag(&record("FF SAFETY", "Eingang ", "E0.0"));
        assert_eq!(tag.name, "FTODO_(E0.0)");
        assert!(tag.is_unmapped());

        let tag = map_tag(&record("FF SAFETY", "Ausgang", "FTODO"));
        assert_eq!(tag.name, "FQ_(FTODO)");
        assert!(!tag.is_unmapped());
    }

    #[test]
    fn test_safety_marker_is_case_sensitive() {
        assert_eq!(safety_prefix(&record("Safety", "Eingang", "E0.0")), "");
        assert_eq!(safety_prefix(&record("xSAFETYx", "Eingang", "E0.0")), "F");
    }

    #[test]
    fn test_map_tag() {
        let record = SignalRecord {
            list_number: 4,
            module_id: "-K10".into(),
            connector: "X1:3".into(),
            io_address: "E1.3".into(),
            data_type: "Bool".into(),
            signal_class: "DI".into(),
            direction: "Eingang".into(),
            text: "Not-Halt".into(),
            ..Default::default()
        };

        let tag = map_tag(&record);
        assert_eq!(tag.data_type, "Bool");
        assert_eq!(tag.flags, TagFlags::IMPORTED);
        assert_eq!(tag.remark, "Not-Halt | Plc-Module -K10 : X1:3");
        assert_eq!(tag.address, "%E1.3");
        assert_eq!(tag.name, "I_(E1.3)");
        assert_eq!(tag.direction, Direction::Input);
        assert!(!tag.is_unmapped());
    }

    #[test]
    fn test_map_tags_preserves_order() {
        let records = vec![
            record("", "Eingang", "E0.0"),
            record("", "bogus", "E0.1"),
            record("", "Ausgang", "A0.0"),
        ];
        let tags = map_tags(&records);

        let names: Vec<_> = tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["I_(E0.0)", "TODO_(E0.1)", "Q_(A0.0)"]);
        assert!(!tags[0].is_unmapped());
        assert!(tags[1].is_unmapped());
        assert!(!tags[2].is_unmapped());
    }
}

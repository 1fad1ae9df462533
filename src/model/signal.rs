//! SignalRecord - One physical I/O point from the SPS-Liste.

use crate::config::{DIRECTION_INPUT, DIRECTION_OUTPUT, SAFETY_MARKER};

/// One retained row of the signal list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignalRecord {
    /// Position in the list (0 when the cell is not numeric).
    pub list_number: i64,
    /// Controller name.
    pub cpu_name: String,
    /// PLC module identifier.
    pub module_id: String,
    /// Connector label on the module.
    pub connector: String,
    /// Physical I/O address, never empty.
    pub io_address: String,
    /// Data type, copied verbatim to the tag.
    pub data_type: String,
    /// Signal class; may contain the safety marker.
    pub signal_class: String,
    pub settings: String,
    /// Direction in source vocabulary ("Eingang"/"Ausgang").
    pub direction: String,
    pub symbolic_address: String,
    pub function_text: String,
    /// Free-form description.
    pub text: String,
}

impl SignalRecord {
    /// Check if the signal class marks a fail-safe signal.
    pub fn is_safety(&self) -> bool {
        self.signal_class.contains(SAFETY_MARKER)
    }

    /// Classify the direction value.
    pub fn direction(&self) -> Direction {
        Direction::from_source(&self.direction)
    }
}

/// Signal direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Input,
    Output,
    /// Any value outside the source vocabulary.
    Unmapped,
}

impl Direction {
    /// Parse the direction column. Matching is exact.
    pub fn from_source(value: &str) -> Self {
        match value {
            DIRECTION_INPUT => Direction::Input,
            DIRECTION_OUTPUT => Direction::Output,
            _ => Direction::Unmapped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_source() {
        assert_eq!(Direction::from_source("Eingang"), Direction::Input);
        assert_eq!(Direction::from_source("Ausgang"), Direction::Output);
        assert_eq!(Direction::from_source("eingang"), Direction::Unmapped);
        assert_eq!(Direction::from_source(" Eingang"), Direction::Unmapped);
        assert_eq!(Direction::from_source(""), Direction::Unmapped);
    }

    #[test]
    fn test_is_safety() {
        let mut record = SignalRecord {
            signal_class: "DI SAFETY 24V".into(),
            ..Default::default()
        };
        assert!(record.is_safety());
        record.signal_class = "safety".into();
        assert!(!record.is_safety());
    }
}

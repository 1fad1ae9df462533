//! TagDescriptor - One entry of the generated tag table.

use super::Direction;

/// HMI display flags carried by every tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagFlags {
    pub hmi_visible: bool,
    pub hmi_writeable: bool,
    pub hmi_accessible: bool,
    pub retain: bool,
}

impl TagFlags {
    /// Flags used for every imported tag.
    pub const IMPORTED: TagFlags = TagFlags {
        hmi_visible: true,
        hmi_writeable: false,
        hmi_accessible: true,
        retain: false,
    };
}

impl Default for TagFlags {
    fn default() -> Self {
        Self::IMPORTED
    }
}

/// Tag table entry derived from one signal record.
#[derive(Debug, Clone, PartialEq)]
pub struct TagDescriptor {
    /// Data type (e.g. "Bool").
    pub data_type: String,
    pub flags: TagFlags,
    /// "<text> | Plc-Module <module> : <connector>".
    pub remark: String,
    /// Physical address with '%' prefix.
    pub address: String,
    /// Symbolic tag name, element text.
    pub name: String,
    /// Direction of the source signal.
    pub direction: Direction,
}

impl TagDescriptor {
    /// Check if the source direction was not recognised.
    pub fn is_unmapped(&self) -> bool {
        self.direction == Direction::Unmapped
    }
}

/// Render a flag the way the configuration tool expects it.
pub(crate) fn flag_str(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

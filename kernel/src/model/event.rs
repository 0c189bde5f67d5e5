use serde::{Deserialize, Serialize};

/// Change events pushed to connected listeners. Mirrors what a storage
/// change feed would emit, so manual publishes and feed re-publishes share
/// one wire shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeOp {
    Insert,
    Update,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingKind {
    Pending,
    Approved,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<BookingKind>,
    pub op: ChangeOp,
    pub id: String,
}

impl StreamEvent {
    pub fn booking(kind: BookingKind, op: ChangeOp, id: impl Into<String>) -> Self {
        Self {
            kind: Some(kind),
            op,
            id: id.into(),
        }
    }

    pub fn complaint(op: ChangeOp, id: impl Into<String>) -> Self {
        Self {
            kind: None,
            op,
            id: id.into(),
        }
    }
}

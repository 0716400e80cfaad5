use chrono::NaiveDate;
use serde::Serialize;

/// Notification sent to the owner on every successful commit.
///
/// Serialises as `{"target":{"name":"…","type":"date","value":"YYYY-MM-DD"}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeEvent {
    pub target: ChangeTarget,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeTarget {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ValueKind,
    pub value: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Date,
}

impl ChangeEvent {
    pub fn date(name: impl Into<String>, value: NaiveDate) -> Self {
        Self {
            target: ChangeTarget {
                name: name.into(),
                kind: ValueKind::Date,
                value,
            },
        }
    }
}

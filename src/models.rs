use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type EntryId = u32;
pub type ActivityId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: ActivityId,
    pub name: String,
}

/// A stored entry. Only the repository hands these out, so `id` is always assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub date: NaiveDate,
    pub activity_id: ActivityId,
    pub duration: f64,
    pub exclude: bool,
    pub notes: Option<String>,
}

/// An entry that passed validation but has not been given an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEntry {
    pub date: NaiveDate,
    pub activity_id: ActivityId,
    pub duration: f64,
    pub exclude: bool,
    pub notes: Option<String>,
}

impl NewEntry {
    pub fn with_id(self, id: EntryId) -> Entry {
        Entry {
            id,
            date: self.date,
            activity_id: self.activity_id,
            duration: self.duration,
            exclude: self.exclude,
            notes: self.notes,
        }
    }
}

/// Raw form input. Everything stays a string until validation binds it, so a
/// rejected submission can be shown back exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntryForm {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub date: String,
    #[serde(default, rename = "activityId")]
    pub activity_id: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub exclude: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl EntryForm {
    /// A transient entry for the create form, dated `today`.
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            date: today.to_string(),
            ..Self::default()
        }
    }

    pub fn excluded(&self) -> bool {
        matches!(
            self.exclude.as_deref().map(str::trim),
            Some("true") | Some("on") | Some("1")
        )
    }
}

impl From<&Entry> for EntryForm {
    fn from(entry: &Entry) -> Self {
        Self {
            id: Some(entry.id.to_string()),
            date: entry.date.to_string(),
            activity_id: entry.activity_id.to_string(),
            duration: entry.duration.to_string(),
            exclude: entry.exclude.then(|| "true".to_string()),
            notes: entry.notes.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub total_activity: f64,
    pub number_of_active_days: usize,
    /// `None` when there are no active days to average over.
    pub average_daily_activity: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct EntriesResponse {
    pub entries: Vec<Entry>,
    #[serde(flatten)]
    pub summary: Summary,
}

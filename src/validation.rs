use crate::catalog::ActivityCatalog;
use crate::models::{EntryForm, FieldError, NewEntry};
use chrono::NaiveDate;

pub const NOTES_MAX_LEN: usize = 200;
pub const DURATION_MUST_BE_POSITIVE: &str = "The Duration field value must be greater than '0'.";

/// Binds a submitted form into an entry, collecting every complaint.
///
/// Format problems (missing or unparseable values) are reported first. The
/// positive-duration rule only runs when the duration itself parsed, so a
/// field never carries two complaints.
pub fn bind(form: &EntryForm, catalog: &ActivityCatalog) -> Result<NewEntry, Vec<FieldError>> {
    let mut errors = Vec::new();

    let date = parse_date(&form.date).map_err(|err| errors.push(err)).ok();
    let activity_id = parse_activity(&form.activity_id, catalog)
        .map_err(|err| errors.push(err))
        .ok();
    let duration = parse_duration(&form.duration).map_err(|err| errors.push(err)).ok();

    if let Some(value) = duration {
        if let Some(err) = check_duration(value) {
            errors.push(err);
        }
    }

    let notes = form
        .notes
        .as_deref()
        .map(str::trim)
        .filter(|notes| !notes.is_empty())
        .map(str::to_string);
    if notes.as_ref().is_some_and(|n| n.chars().count() > NOTES_MAX_LEN) {
        errors.push(FieldError::new(
            "notes",
            format!("The Notes field cannot be longer than {NOTES_MAX_LEN} characters."),
        ));
    }

    match (date, activity_id, duration) {
        (Some(date), Some(activity_id), Some(duration)) if errors.is_empty() => Ok(NewEntry {
            date,
            activity_id,
            duration,
            exclude: form.excluded(),
            notes,
        }),
        _ => Err(errors),
    }
}

pub fn validate(form: &EntryForm, catalog: &ActivityCatalog) -> Vec<FieldError> {
    bind(form, catalog).err().unwrap_or_default()
}

pub fn is_valid(form: &EntryForm, catalog: &ActivityCatalog) -> bool {
    validate(form, catalog).is_empty()
}

/// The business rule on a well-formed duration.
pub fn check_duration(duration: f64) -> Option<FieldError> {
    (duration <= 0.0).then(|| FieldError::new("duration", DURATION_MUST_BE_POSITIVE))
}

fn parse_date(raw: &str) -> Result<NaiveDate, FieldError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(FieldError::new("date", "The Date field is required."));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| FieldError::new("date", format!("The value '{raw}' is not valid for Date.")))
}

fn parse_activity(raw: &str, catalog: &ActivityCatalog) -> Result<u32, FieldError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(FieldError::new("activityId", "The Activity field is required."));
    }
    match raw.parse::<u32>() {
        Ok(id) if catalog.contains(id) => Ok(id),
        _ => Err(FieldError::new("activityId", "Please select a valid activity.")),
    }
}

fn parse_duration(raw: &str) -> Result<f64, FieldError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(FieldError::new("duration", "The Duration field is required."));
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(FieldError::new(
            "duration",
            format!("The value '{raw}' is not valid for Duration."),
        )),
    }
}

//! Entries flows: list, create, update and delete.
//!
//! Each flow takes the store explicitly and returns what the caller should show
//! next. Successful submissions return [`Submission::Redirect`] instead of a page
//! so the list aggregation only lives in [`EntriesController::list`].

use crate::aggregation::summarize;
use crate::catalog::ActivityCatalog;
use crate::flash::Notice;
use crate::models::{Activity, Entry, EntryForm, EntryId, FieldError, Summary};
use crate::repository::{EntryStore, RepoError};
use crate::validation;
use chrono::NaiveDate;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    BadRequest(String),
    NotFound(EntryId),
    Internal(String),
}

impl From<RepoError> for FlowError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(id) => FlowError::NotFound(id),
            RepoError::IdsExhausted => FlowError::Internal(err.to_string()),
        }
    }
}

#[derive(Debug)]
pub struct ListView {
    pub entries: Vec<Entry>,
    pub summary: Summary,
}

#[derive(Debug)]
pub struct FormView<'a> {
    pub form: EntryForm,
    pub activities: &'a [Activity],
    pub errors: Vec<FieldError>,
}

#[derive(Debug)]
pub enum Submission<'a> {
    /// Saved; the caller should go back to the list.
    Redirect(Notice),
    /// Rejected; show the form again with the input preserved.
    Redisplay(FormView<'a>),
}

pub struct EntriesController<'a> {
    catalog: &'a ActivityCatalog,
}

impl<'a> EntriesController<'a> {
    pub fn new(catalog: &'a ActivityCatalog) -> Self {
        Self { catalog }
    }

    pub fn list(&self, store: &EntryStore) -> ListView {
        let entries = store.list_entries();
        let summary = summarize(&entries);
        ListView { entries, summary }
    }

    pub fn create_show(&self, today: NaiveDate) -> FormView<'a> {
        self.form_view(EntryForm::blank(today), Vec::new())
    }

    pub fn create_submit(
        &self,
        store: &mut EntryStore,
        mut form: EntryForm,
    ) -> Result<Submission<'a>, FlowError> {
        form.id = None;
        match validation::bind(&form, self.catalog) {
            Ok(new_entry) => {
                let entry = store.add_entry(new_entry)?;
                info!(id = entry.id, "entry added");
                Ok(Submission::Redirect(Notice::Added))
            }
            Err(errors) => {
                warn!(count = errors.len(), "entry rejected on create");
                Ok(Submission::Redisplay(self.form_view(form, errors)))
            }
        }
    }

    pub fn update_show(&self, store: &EntryStore, id: Option<&str>) -> Result<FormView<'a>, FlowError> {
        let entry = self.require_entry(store, id)?;
        Ok(self.form_view(EntryForm::from(&entry), Vec::new()))
    }

    pub fn update_submit(
        &self,
        store: &mut EntryStore,
        form: EntryForm,
    ) -> Result<Submission<'a>, FlowError> {
        let id = parse_id(form.id.as_deref())?;
        match validation::bind(&form, self.catalog) {
            Ok(new_entry) => {
                store.update_entry(new_entry.with_id(id))?;
                info!(id, "entry updated");
                Ok(Submission::Redirect(Notice::Updated))
            }
            Err(errors) => {
                warn!(id, count = errors.len(), "entry rejected on update");
                Ok(Submission::Redisplay(self.form_view(form, errors)))
            }
        }
    }

    pub fn delete_show(&self, store: &EntryStore, id: Option<&str>) -> Result<Entry, FlowError> {
        self.require_entry(store, id)
    }

    pub fn delete_submit(&self, store: &mut EntryStore, id: Option<&str>) -> Result<Notice, FlowError> {
        let id = parse_id(id)?;
        store.delete_entry(id)?;
        info!(id, "entry deleted");
        Ok(Notice::Deleted)
    }

    fn require_entry(&self, store: &EntryStore, id: Option<&str>) -> Result<Entry, FlowError> {
        let id = parse_id(id)?;
        store.get_entry(id).ok_or_else(|| {
            warn!(id, "entry not found");
            FlowError::NotFound(id)
        })
    }

    fn form_view(&self, form: EntryForm, errors: Vec<FieldError>) -> FormView<'a> {
        FormView {
            form,
            activities: self.catalog.list(),
            errors,
        }
    }
}

pub fn parse_id(raw: Option<&str>) -> Result<EntryId, FlowError> {
    let raw = raw
        .map(str::trim)
        .filter(|raw| !raw.is_empty())
        .ok_or_else(|| FlowError::BadRequest("entry id is required".to_string()))?;
    raw.parse::<EntryId>()
        .map_err(|_| FlowError::BadRequest(format!("'{raw}' is not a valid entry id")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::DURATION_MUST_BE_POSITIVE;

    fn form(date: &str, duration: &str, exclude: bool) -> EntryForm {
        EntryForm {
            id: None,
            date: date.to_string(),
            activity_id: "1".to_string(),
            duration: duration.to_string(),
            exclude: exclude.then(|| "true".to_string()),
            notes: None,
        }
    }

    #[test]
    fn create_then_list() {
        let catalog = ActivityCatalog::standard();
        let controller = EntriesController::new(&catalog);
        let mut store = EntryStore::default();

        let outcome = controller
            .create_submit(&mut store, form("2024-01-01", "30", false))
            .unwrap();
        assert!(matches!(outcome, Submission::Redirect(Notice::Added)));

        let view = controller.list(&store);
        assert_eq!(view.entries.len(), 1);
        assert_eq!(view.summary.total_activity, 30.0);
        assert_eq!(view.summary.number_of_active_days, 1);
    }

    #[test]
    fn excluded_entry_on_same_day() {
        let catalog = ActivityCatalog::standard();
        let controller = EntriesController::new(&catalog);
        let mut store = EntryStore::default();

        controller.create_submit(&mut store, form("2024-01-01", "100", true)).unwrap();
        controller.create_submit(&mut store, form("2024-01-01", "20", false)).unwrap();

        let summary = controller.list(&store).summary;
        assert_eq!(summary.total_activity, 20.0);
        assert_eq!(summary.number_of_active_days, 1);
        assert_eq!(summary.average_daily_activity, Some(20.0));
    }

    #[test]
    fn negative_duration_is_redisplayed() {
        let catalog = ActivityCatalog::standard();
        let controller = EntriesController::new(&catalog);
        let mut store = EntryStore::default();

        let input = form("2024-01-01", "-5", false);
        match controller.create_submit(&mut store, input.clone()).unwrap() {
            Submission::Redisplay(view) => {
                assert_eq!(view.form, input);
                assert_eq!(view.activities.len(), catalog.list().len());
                assert_eq!(view.errors, vec![FieldError::new("duration", DURATION_MUST_BE_POSITIVE)]);
            }
            other => panic!("expected redisplay, got {other:?}"),
        }
        assert!(store.is_empty());
    }

    #[test]
    fn create_fails_cleanly_when_ids_run_out() {
        let catalog = ActivityCatalog::standard();
        let controller = EntriesController::new(&catalog);
        let mut store: EntryStore =
            serde_json::from_str(r#"{"next_id":4294967295,"entries":{}}"#).unwrap();

        let outcome = controller.create_submit(&mut store, form("2024-01-01", "30", false));
        assert!(matches!(outcome, Err(FlowError::Internal(_))));
        assert!(store.is_empty());
    }

    #[test]
    fn create_show_defaults_to_today() {
        let catalog = ActivityCatalog::standard();
        let controller = EntriesController::new(&catalog);
        let today = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let view = controller.create_show(today);
        assert_eq!(view.form.date, "2024-03-09");
        assert_eq!(view.form.id, None);
        assert!(view.errors.is_empty());
    }

    #[test]
    fn show_flows_check_id() {
        let catalog = ActivityCatalog::standard();
        let controller = EntriesController::new(&catalog);
        let store = EntryStore::default();

        assert!(matches!(controller.update_show(&store, None), Err(FlowError::BadRequest(_))));
        assert!(matches!(
            controller.delete_show(&store, Some("abc")),
            Err(FlowError::BadRequest(_))
        ));
        assert_eq!(controller.update_show(&store, Some("42")).unwrap_err(), FlowError::NotFound(42));
        assert_eq!(controller.delete_show(&store, Some("42")).unwrap_err(), FlowError::NotFound(42));
        assert!(store.is_empty());
    }

    #[test]
    fn update_roundtrip() {
        let catalog = ActivityCatalog::standard();
        let controller = EntriesController::new(&catalog);
        let mut store = EntryStore::default();
        controller.create_submit(&mut store, form("2024-01-01", "30", false)).unwrap();
        let id = store.list_entries()[0].id.to_string();

        let mut edit = controller.update_show(&store, Some(&id)).unwrap().form;
        assert_eq!(edit.duration, "30");
        edit.duration = "45".to_string();
        edit.notes = Some("longer run".to_string());

        let outcome = controller.update_submit(&mut store, edit).unwrap();
        assert!(matches!(outcome, Submission::Redirect(Notice::Updated)));
        let stored = &store.list_entries()[0];
        assert_eq!(stored.duration, 45.0);
        assert_eq!(stored.notes.as_deref(), Some("longer run"));
    }

    #[test]
    fn update_rejects_invalid_and_missing() {
        let catalog = ActivityCatalog::standard();
        let controller = EntriesController::new(&catalog);
        let mut store = EntryStore::default();
        controller.create_submit(&mut store, form("2024-01-01", "30", false)).unwrap();
        let before = store.list_entries();

        let mut invalid = form("2024-01-01", "0", false);
        invalid.id = Some(before[0].id.to_string());
        let outcome = controller.update_submit(&mut store, invalid).unwrap();
        assert!(matches!(outcome, Submission::Redisplay(_)));

        let mut missing = form("2024-01-01", "10", false);
        missing.id = Some("999".to_string());
        assert_eq!(
            controller.update_submit(&mut store, missing).unwrap_err(),
            FlowError::NotFound(999)
        );

        let no_id = form("2024-01-01", "10", false);
        assert!(matches!(
            controller.update_submit(&mut store, no_id),
            Err(FlowError::BadRequest(_))
        ));
        assert_eq!(store.list_entries(), before);
    }

    #[test]
    fn delete_flow() {
        let catalog = ActivityCatalog::standard();
        let controller = EntriesController::new(&catalog);
        let mut store = EntryStore::default();
        controller.create_submit(&mut store, form("2024-01-01", "30", false)).unwrap();
        let id = store.list_entries()[0].id.to_string();

        assert_eq!(controller.delete_show(&store, Some(&id)).unwrap().duration, 30.0);
        assert_eq!(controller.delete_submit(&mut store, Some(&id)).unwrap(), Notice::Deleted);
        assert!(controller.list(&store).entries.is_empty());
        assert!(matches!(
            controller.delete_submit(&mut store, Some(&id)),
            Err(FlowError::NotFound(_))
        ));
    }
}

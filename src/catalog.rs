use crate::models::{Activity, ActivityId};

const STANDARD_ACTIVITIES: &[(ActivityId, &str)] = &[
    (1, "Basketball"),
    (2, "Biking"),
    (3, "Hiking"),
    (4, "Kayaking"),
    (5, "Pole Dancing"),
    (6, "Running"),
    (7, "Skiing"),
    (8, "Swimming"),
    (9, "Walking"),
    (10, "Weight Lifting"),
];

/// Read-only list of selectable activities. Built once at startup and shared
/// through `AppState`.
#[derive(Debug, Clone)]
pub struct ActivityCatalog {
    activities: Vec<Activity>,
}

impl ActivityCatalog {
    pub fn new(activities: Vec<Activity>) -> Self {
        Self { activities }
    }

    pub fn standard() -> Self {
        Self::new(
            STANDARD_ACTIVITIES
                .iter()
                .map(|(id, name)| Activity {
                    id: *id,
                    name: (*name).to_string(),
                })
                .collect(),
        )
    }

    pub fn list(&self) -> &[Activity] {
        &self.activities
    }

    pub fn get(&self, id: ActivityId) -> Option<&Activity> {
        self.activities.iter().find(|activity| activity.id == id)
    }

    pub fn contains(&self, id: ActivityId) -> bool {
        self.get(id).is_some()
    }

    pub fn name_of(&self, id: ActivityId) -> &str {
        self.get(id).map(|activity| activity.name.as_str()).unwrap_or("Unknown")
    }
}

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// One logged occurrence of a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: i64,
    pub created_at: DateTime<Local>,
    pub task_id: u32,
}

/// Body of `POST /new`.
///
/// Both fields stay optional here so a missing value is reported by the
/// handler with the right status instead of by the form extractor.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct NewTaskForm {
    pub token: Option<String>,
    pub task_id: Option<String>,
}

impl NewTaskForm {
    /// Build from decoded `key=value` pairs. The first occurrence of a key
    /// wins; unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut form = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "token" => &mut form.token,
                "task_id" => &mut form.task_id,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        form
    }
}

use serde::{Deserialize, Serialize};

use crate::model::task::Annotation;

/// Configuration from .tasks-enhancer.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnhancerConfig {
    #[serde(default)]
    pub new_task: NewTaskConfig,
}

/// Annotations added by the "new task" command. The "start work" command
/// ignores these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTaskConfig {
    /// Append `➕ <today>`
    #[serde(default = "default_true")]
    pub created: bool,
    /// Append `⏳ <today>`
    #[serde(default = "default_true")]
    pub scheduled: bool,
}

impl Default for NewTaskConfig {
    fn default() -> Self {
        NewTaskConfig {
            created: true,
            scheduled: true,
        }
    }
}

fn default_true() -> bool {
    true
}

impl NewTaskConfig {
    /// Enabled annotation kinds, in the order they are appended
    pub fn annotations(&self) -> Vec<Annotation> {
        let mut kinds = Vec::new();
        if self.created {
            kinds.push(Annotation::Created);
        }
        if self.scheduled {
            kinds.push(Annotation::Scheduled);
        }
        kinds
    }
}

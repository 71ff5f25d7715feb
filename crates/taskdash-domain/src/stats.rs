use serde::{Deserialize, Serialize};

use crate::format::percent;

/// Response of `GET /tasks/stats`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStats {
    pub total: u64,
    pub todo: u64,
    pub in_progress: u64,
    pub completed: u64,
}

impl TaskStats {
    pub fn completion_percent(&self) -> u8 {
        percent(self.completed as usize, self.total as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_format() {
        let stats: TaskStats = serde_json::from_value(json!({
            "total": 4, "todo": 1, "inProgress": 2, "completed": 1
        }))
        .unwrap();
        assert_eq!(stats.in_progress, 2);
        assert_eq!(stats.completion_percent(), 25);
    }
}

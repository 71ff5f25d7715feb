//! Project sorting.

use crate::project::Project;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::cmp::Ordering;

/// Sort key for the project list. Each key carries its own direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectSort {
    /// Alphabetical, ignoring case.
    Name,
    /// Newest first.
    #[default]
    CreatedAt,
    /// Most tasks first.
    TaskCount,
}

impl ProjectSort {
    pub const ALL: [ProjectSort; 3] = [Self::CreatedAt, Self::Name, Self::TaskCount];

    pub fn compare(&self, a: &Project, b: &Project) -> Ordering {
        match self {
            Self::Name => natural_cmp(&a.name, &b.name),
            Self::CreatedAt => b.created_at.cmp_chronological(&a.created_at),
            Self::TaskCount => b.task_count().cmp(&a.task_count()),
        }
    }

    /// Stable sort in place. Works with both `&Project` and `Project` elements.
    pub fn sort<T: Borrow<Project>>(&self, projects: &mut [T]) {
        projects.sort_by(|a, b| self.compare(a.borrow(), b.borrow()));
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::CreatedAt => "Date Created",
            Self::TaskCount => "Task Count",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::CreatedAt => Self::Name,
            Self::Name => Self::TaskCount,
            Self::TaskCount => Self::CreatedAt,
        }
    }
}

/// Case-insensitive compare that orders embedded digit runs numerically,
/// so "Phase 2" sorts before "Phase 10".
fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().flat_map(char::to_lowercase).peekable();
    let mut right = b.chars().flat_map(char::to_lowercase).peekable();

    loop {
        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) if l.is_ascii_digit() && r.is_ascii_digit() => {
                let ln = take_number(&mut left);
                let rn = take_number(&mut right);
                let ord = ln
                    .trim_start_matches('0')
                    .len()
                    .cmp(&rn.trim_start_matches('0').len())
                    .then_with(|| ln.trim_start_matches('0').cmp(rn.trim_start_matches('0')));
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            (Some(l), Some(r)) => {
                if l != r {
                    return l.cmp(&r);
                }
                left.next();
                right.next();
            }
        }
    }
}

fn take_number(chars: &mut std::iter::Peekable<impl Iterator<Item = char>>) -> String {
    let mut digits = String::new();
    while let Some(c) = chars.peek().copied() {
        if !c.is_ascii_digit() {
            break;
        }
        digits.push(c);
        chars.next();
    }
    digits
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn project(id: i64, name: &str, created: &str, tasks: usize) -> Project {
        let tasks: Vec<_> = (0..tasks)
            .map(|n| json!({ "id": n, "title": format!("t{n}") }))
            .collect();
        serde_json::from_value(json!({
            "id": id,
            "name": name,
            "createdAt": created,
            "tasks": tasks
        }))
        .unwrap()
    }

    fn names(projects: &[&Project]) -> Vec<String> {
        projects.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn test_sort_by_name_ignores_case() {
        let a = project(1, "beta", "2024-01-01", 0);
        let b = project(2, "Alpha", "2024-01-02", 0);
        let c = project(3, "Phase 10", "2024-01-03", 0);
        let d = project(4, "Phase 2", "2024-01-04", 0);
        let mut list = vec![&a, &b, &c, &d];

        ProjectSort::Name.sort(&mut list);
        assert_eq!(names(&list), ["Alpha", "beta", "Phase 2", "Phase 10"]);
    }

    #[test]
    fn test_sort_by_created_newest_first() {
        let a = project(1, "Old", "2023-01-01T00:00:00", 0);
        let b = project(2, "New", "2024-06-01T00:00:00", 0);
        let mut list = vec![&a, &b];

        ProjectSort::default().sort(&mut list);
        assert_eq!(names(&list), ["New", "Old"]);
    }

    #[test]
    fn test_sort_by_task_count_descending() {
        let a = project(1, "Small", "2024-01-01", 1);
        let b = project(2, "Large", "2024-01-01", 5);
        let c = project(3, "None", "2024-01-01", 0);
        let mut list = vec![&a, &b, &c];

        ProjectSort::TaskCount.sort(&mut list);
        assert_eq!(names(&list), ["Large", "Small", "None"]);
    }
}

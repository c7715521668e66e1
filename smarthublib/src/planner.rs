//! Task pipeline groupings and the archive date index.

use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};

use crate::model::{Holiday, Task, TaskWeek};

/// Tasks bucketed by week, input order preserved. Every week key is present
/// even when its bucket is empty.
pub fn group_by_week(tasks: &[Task]) -> BTreeMap<TaskWeek, Vec<Task>> {
    let mut groups: BTreeMap<TaskWeek, Vec<Task>> =
        TaskWeek::ALL.into_iter().map(|w| (w, Vec::new())).collect();
    for task in tasks {
        groups.entry(task.week).or_default().push(task.clone());
    }
    groups
}

/// Distinct dates carrying a task or a holiday, newest first.
pub fn relevant_dates(tasks: &[Task], holidays: &[Holiday]) -> Vec<NaiveDate> {
    let mut dates = BTreeSet::new();
    for t in tasks {
        dates.insert(t.date);
    }
    for h in holidays {
        dates.insert(h.date);
    }
    dates.into_iter().rev().collect()
}

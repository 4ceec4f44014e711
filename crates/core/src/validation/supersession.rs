//! Supersession planning
//!
//! Accepting an entry may logically replace rows already on record for the
//! same resource and date. The plan is computed before the ceiling checks
//! run, so a replacing entry is validated against the post-supersession
//! sibling set. The deletions themselves are applied by the caller.

use timecard_domain::{EntryId, TimeEntry};

/// Sibling rows the candidate replaces when accepted.
///
/// Rules:
/// - a task entry replaces any existing entry for the same task (an entry
///   is amended by resubmission, never duplicated per task and day);
/// - a task entry voids recorded sick or holiday day-entries (working the
///   day contradicts them); leave and rest day-entries survive, subject
///   to the overtime-blocking rule;
/// - a sick or holiday day-entry voids all task entries for the day;
/// - a day entry replaces every other day entry (one day-entry kind per
///   day).
pub fn plan(candidate: &TimeEntry, siblings: &[TimeEntry]) -> Vec<EntryId> {
    let mut doomed = Vec::new();

    for sibling in siblings {
        if sibling.id == candidate.id {
            continue;
        }
        if supersedes(candidate, sibling) {
            doomed.push(sibling.id);
        }
    }

    doomed
}

fn supersedes(candidate: &TimeEntry, sibling: &TimeEntry) -> bool {
    if candidate.is_task_entry() {
        if sibling.is_task_entry() && sibling.task == candidate.task {
            return true;
        }
        return sibling.is_day_entry() && (sibling.is_sick_day() || sibling.is_holiday());
    }

    // Candidate is a day entry
    if sibling.is_day_entry() {
        return true;
    }
    (candidate.is_sick_day() || candidate.is_holiday()) && sibling.is_task_entry()
}

//! Input validation for shift rosters.
//!
//! Checks roster integrity before layout. Detects:
//! - Malformed `H:MM` times
//! - Zero- or negative-width shifts
//! - Duplicate owners within a group
//! - Duplicate group names
//!
//! [`validate_groups`] reports every issue at once for hosts that want to
//! reject input up front. [`split_roster`] is the lenient form used while
//! building a layout: offending entries are excluded and returned.

use std::collections::HashSet;

use crate::error::BoardError;
use crate::models::{GroupInput, Interval};

/// Validation result carrying all detected issues.
pub type ValidationResult = Result<(), Vec<BoardError>>;

/// Validates board construction input.
///
/// Checks:
/// 1. No duplicate group names
/// 2. Every time parses as `H:MM`
/// 3. Every shift has `start < end`
/// 4. No owner appears twice within one group
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_groups(groups: &[GroupInput]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut names = HashSet::new();
    for group in groups {
        if !names.insert(group.name.as_str()) {
            errors.push(BoardError::DuplicateGroup(group.name.clone()));
        }

        let mut owners = HashSet::new();
        for entry in &group.roster {
            if !owners.insert(entry.owner.as_str()) {
                errors.push(BoardError::DuplicateOwner {
                    group: group.name.clone(),
                    owner: entry.owner.clone(),
                });
            }

            match entry.to_interval() {
                Ok(interval) => {
                    if let Err(e) = interval.validate() {
                        errors.push(e);
                    }
                }
                Err(e) => errors.push(e),
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Splits a roster into committable intervals and rejections.
///
/// Zero-width intervals and repeated owners (after the first occurrence)
/// are excluded. Order of the kept intervals is preserved.
pub fn split_roster(group: &str, intervals: Vec<Interval>) -> (Vec<Interval>, Vec<BoardError>) {
    let mut kept = Vec::with_capacity(intervals.len());
    let mut rejected = Vec::new();
    let mut owners = HashSet::new();

    for interval in intervals {
        if let Err(e) = interval.validate() {
            rejected.push(e);
            continue;
        }
        if !owners.insert(interval.owner.clone()) {
            rejected.push(BoardError::DuplicateOwner {
                group: group.to_string(),
                owner: interval.owner,
            });
            continue;
        }
        kept.push(interval);
    }

    (kept, rejected)
}

//! Assignment rules checked whenever a task lands on a courier
//!
//! Both task creation and transfer go through [`validate_assignment`]:
//!
//! 1. the task's region must equal the courier's region
//! 2. the courier's used cells plus the task's cells must not exceed `max_cells`
//!
//! The region rule is checked first, so a task that breaks both is reported
//! as a region mismatch.

use serde_json::{Value, json};
use thiserror::Error;

use crate::models::{Courier, CreateTask, Task};

/// Why a courier cannot take a task
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssignmentRejection {
    #[error("Task region {task_region_id} does not match courier region {courier_region_id}")]
    RegionMismatch {
        task_region_id: i32,
        courier_region_id: i32,
    },

    #[error("Courier {courier_id} cannot carry {required} cells (max {max_cells})")]
    CapacityExceeded {
        courier_id: i32,
        required: i64,
        max_cells: i32,
    },
}

impl AssignmentRejection {
    /// Machine-readable body for the `details` field of the error response
    pub fn details(&self) -> Value {
        match self {
            AssignmentRejection::RegionMismatch {
                task_region_id,
                courier_region_id,
            } => json!({
                "kind": "region_mismatch",
                "task_region_id": task_region_id,
                "courier_region_id": courier_region_id,
            }),
            AssignmentRejection::CapacityExceeded {
                courier_id,
                required,
                max_cells,
            } => json!({
                "kind": "capacity_exceeded",
                "courier_id": courier_id,
                "required": required,
                "max_cells": max_cells,
            }),
        }
    }
}

/// The task being placed on a courier
///
/// `id` is `None` for a task that does not exist yet. For a transfer it holds
/// the task's id so the task is never counted twice when it already belongs
/// to the target courier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub id: Option<i32>,
    pub region_id: i32,
    pub cells: i32,
}

impl From<&CreateTask> for Candidate {
    fn from(input: &CreateTask) -> Self {
        Self {
            id: None,
            region_id: input.region_id,
            cells: input.cells,
        }
    }
}

impl From<&Task> for Candidate {
    fn from(task: &Task) -> Self {
        Self {
            id: Some(task.id),
            region_id: task.region_id,
            cells: task.cells,
        }
    }
}

/// Sum of `cells` over `tasks`
pub fn used_cells(tasks: &[Task]) -> i64 {
    tasks.iter().map(|t| i64::from(t.cells)).sum()
}

/// Checks that `courier`, currently holding `current_tasks`, may take `candidate`
pub fn validate_assignment(
    courier: &Courier,
    current_tasks: &[Task],
    candidate: &Candidate,
) -> Result<(), AssignmentRejection> {
    if candidate.region_id != courier.region_id {
        return Err(AssignmentRejection::RegionMismatch {
            task_region_id: candidate.region_id,
            courier_region_id: courier.region_id,
        });
    }

    let used: i64 = current_tasks
        .iter()
        .filter(|t| Some(t.id) != candidate.id)
        .map(|t| i64::from(t.cells))
        .sum();
    let required = used + i64::from(candidate.cells);

    if required > i64::from(courier.max_cells) {
        return Err(AssignmentRejection::CapacityExceeded {
            courier_id: courier.id,
            required,
            max_cells: courier.max_cells,
        });
    }

    Ok(())
}

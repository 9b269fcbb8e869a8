//! # Employee Commands

use mart_core::{Employee, EmployeeId, Money};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::rejected;
use crate::error::ApiError;
use crate::state::StoreState;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddEmployeeRequest {
    pub name: String,
    pub position: String,
    pub salary: Money,
    pub contact: String,
}

pub fn add_employee(store: &StoreState, req: AddEmployeeRequest) -> Result<EmployeeId, ApiError> {
    debug!(name = %req.name, position = %req.position, "add_employee command");

    let id = store
        .with_store_mut(|s| s.add_employee(&req.name, &req.position, req.salary, &req.contact))
        .map_err(|e| rejected("add_employee", e))?;

    info!(employee_id = %id, name = %req.name, "Employee added");
    Ok(id)
}

pub fn update_employee(
    store: &StoreState,
    id: EmployeeId,
    salary: Money,
    position: &str,
) -> Result<(), ApiError> {
    debug!(employee_id = %id, %salary, position, "update_employee command");

    store
        .with_store_mut(|s| s.update_employee(id, salary, position))
        .map_err(|e| rejected("update_employee", e))?;

    info!(employee_id = %id, "Employee updated");
    Ok(())
}

pub fn remove_employee(store: &StoreState, id: EmployeeId) -> Result<Employee, ApiError> {
    debug!(employee_id = %id, "remove_employee command");

    let removed = store
        .with_store_mut(|s| s.remove_employee(id))
        .map_err(|e| rejected("remove_employee", e))?;

    info!(employee_id = %id, name = %removed.name, "Employee removed");
    Ok(removed)
}

pub fn list_employees(store: &StoreState) -> Vec<Employee> {
    debug!("list_employees command");
    store.with_store(|s| s.list_employees().cloned().collect())
}

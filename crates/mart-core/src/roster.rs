//! # Employee Roster
//!
//! Owns every [`Employee`] record, keyed by id. Works like the product
//! catalog: sequential ids that are never reused, lookups that fail with
//! `EmployeeNotFound`, listing in id order.

use std::collections::BTreeMap;

use chrono::Utc;
use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Employee, EmployeeId, FIRST_ID};
use crate::validation::{validate_name, validate_salary};

#[derive(Debug, Clone)]
pub struct EmployeeRoster {
    employees: BTreeMap<EmployeeId, Employee>,
    next_id: u64,
}

impl EmployeeRoster {
    pub fn new() -> Self {
        EmployeeRoster {
            employees: BTreeMap::new(),
            next_id: FIRST_ID,
        }
    }

    /// Hires an employee, stamping `joined_at` with the current time.
    ///
    /// ## Errors
    /// - `Validation` if the name is blank or the salary is negative
    pub fn add(
        &mut self,
        name: &str,
        position: &str,
        salary: Money,
        contact: &str,
    ) -> CoreResult<EmployeeId> {
        validate_name("name", name)?;
        validate_salary(salary)?;

        let id = EmployeeId::take_next(&mut self.next_id);
        debug!(%id, name = %name.trim(), position = %position.trim(), "Adding employee");

        self.employees.insert(
            id,
            Employee {
                id,
                name: name.trim().to_string(),
                position: position.trim().to_string(),
                salary,
                contact: contact.trim().to_string(),
                joined_at: Utc::now(),
            },
        );

        Ok(id)
    }

    /// Overwrites salary and position.
    ///
    /// Salary is only range-checked at hiring time; updates take the value
    /// as given.
    pub fn update(&mut self, id: EmployeeId, salary: Money, position: &str) -> CoreResult<()> {
        let employee = self
            .employees
            .get_mut(&id)
            .ok_or(CoreError::EmployeeNotFound(id))?;

        debug!(%id, %salary, position = %position.trim(), "Updating employee");
        employee.salary = salary;
        employee.position = position.trim().to_string();
        Ok(())
    }

    /// Removes an employee and returns the removed record.
    pub fn remove(&mut self, id: EmployeeId) -> CoreResult<Employee> {
        let employee = self
            .employees
            .remove(&id)
            .ok_or(CoreError::EmployeeNotFound(id))?;
        debug!(%id, name = %employee.name, "Removed employee");
        Ok(employee)
    }

    pub fn get(&self, id: EmployeeId) -> CoreResult<&Employee> {
        self.employees
            .get(&id)
            .ok_or(CoreError::EmployeeNotFound(id))
    }

    /// All employees, ordered by id ascending.
    pub fn list(&self) -> impl Iterator<Item = &Employee> {
        self.employees.values()
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

impl Default for EmployeeRoster {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_add_and_get() {
        let mut roster = EmployeeRoster::new();
        let before = Utc::now();
        let id = roster
            .add("Ada", "Cashier", Money::from_cents(300_000), "ada@example.com")
            .unwrap();

        let employee = roster.get(id).unwrap();
        assert_eq!(id.get(), 1);
        assert_eq!(employee.position, "Cashier");
        assert!(employee.joined_at >= before);
    }

    #[test]
    fn test_add_rejects_negative_salary() {
        let mut roster = EmployeeRoster::new();
        let err = roster
            .add("Ada", "Cashier", Money::from_cents(-1), "")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(roster.is_empty());
    }

    #[test]
    fn test_update_keeps_join_date() {
        let mut roster = EmployeeRoster::new();
        let id = roster
            .add("Ada", "Cashier", Money::from_cents(300_000), "")
            .unwrap();
        let joined = roster.get(id).unwrap().joined_at;

        roster
            .update(id, Money::from_cents(350_000), "Supervisor")
            .unwrap();

        let employee = roster.get(id).unwrap();
        assert_eq!(employee.salary.cents(), 350_000);
        assert_eq!(employee.position, "Supervisor");
        assert_eq!(employee.joined_at, joined);
    }

    #[test]
    fn test_remove_missing_employee() {
        let mut roster = EmployeeRoster::new();
        roster.add("Ada", "Cashier", Money::zero(), "").unwrap();

        let err = roster.remove(EmployeeId::new(999)).unwrap_err();
        assert!(matches!(err, CoreError::EmployeeNotFound(id) if id.get() == 999));
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_list_is_ordered_by_id() {
        let mut roster = EmployeeRoster::new();
        roster.add("Zed", "Stocker", Money::zero(), "").unwrap();
        roster.add("Amy", "Manager", Money::zero(), "").unwrap();

        let names: Vec<&str> = roster.list().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Zed", "Amy"]);
    }
}

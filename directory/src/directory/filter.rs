use serde::{Deserialize, Serialize};

use crate::model::employee::{Department, Employee};

/// Search criteria for the filtered view. Both criteria must match.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct EmployeeFilter {
    search_term: String,
    department: Option<Department>,
}

impl EmployeeFilter {
    pub fn new(search_term: &str, department: Option<Department>) -> Self {
        Self {
            search_term: search_term.to_lowercase(),
            department,
        }
    }

    /// Lower-cased search term
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn department(&self) -> Option<Department> {
        self.department
    }

    pub fn is_empty(&self) -> bool {
        self.search_term.is_empty() && self.department.is_none()
    }

    pub fn matches(&self, employee: &Employee) -> bool {
        self.matches_search(employee) && self.matches_department(employee)
    }

    fn matches_search(&self, employee: &Employee) -> bool {
        if self.search_term.is_empty() {
            return true;
        }

        [
            &employee.first_name,
            &employee.last_name,
            &employee.email,
            &employee.position,
        ]
        .iter()
        .any(|value| value.to_lowercase().contains(&self.search_term))
    }

    fn matches_department(&self, employee: &Employee) -> bool {
        match self.department {
            Some(department) => employee.department == Some(department),
            None => true,
        }
    }

    /// Single pass over `employees`, keeps their order
    #[tracing::instrument(skip(employees))]
    pub fn apply(&self, employees: &[Employee]) -> Vec<Employee> {
        employees
            .iter()
            .filter(|employee| self.matches(employee))
            .cloned()
            .collect()
    }
}

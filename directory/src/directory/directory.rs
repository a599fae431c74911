use std::time::Instant;

use num_format::{Locale, ToFormattedString};

use crate::{
    consts::consts::EntityId,
    model::employee::{Department, Employee, EmployeeInput},
    persistence::{
        persistence::EmployeePersistence,
        storage::{SharedStorage, StorageResult},
    },
};

use super::{
    filter::EmployeeFilter,
    options::DirectoryOptions,
    validation::{self, ValidationError},
};

/// Owns the canonical employee sequence and the filtered view derived from it.
///
/// Every mutation is written through to storage straight away. A failed write is
/// logged and the in-memory sequence stays the source of truth for the session.
pub struct EmployeeDirectory {
    employees: Vec<Employee>,
    filter: EmployeeFilter,
    filtered_employees: Vec<Employee>,
    persistence: EmployeePersistence,
}

impl EmployeeDirectory {
    pub fn new(options: DirectoryOptions) -> Self {
        let storage = options.storage_engine.get_engine();

        Self::with_storage(options, storage)
    }

    /// Uses `storage` instead of building one from `options.storage_engine`
    pub fn with_storage(options: DirectoryOptions, storage: SharedStorage) -> Self {
        let persistence = EmployeePersistence::new(storage, options.storage_key.clone());

        if let Err(e) = persistence.init() {
            log::error!("Unable to initialize storage: {}", e);
        }

        let mut directory = Self {
            employees: vec![],
            filter: EmployeeFilter::default(),
            filtered_employees: vec![],
            persistence,
        };

        if options.restore {
            let now = Instant::now();

            directory.employees = directory.load();

            log::info!(
                "✅ Restored [{}] employees from [{}] [Duration: {}ms]",
                directory.employees.len().to_formatted_string(&Locale::en),
                directory.persistence.key(),
                now.elapsed().as_millis()
            );
        }

        directory.refresh_filtered_view();

        directory
    }

    /// Reads the canonical sequence from storage, empty when missing or unreadable
    pub fn load(&self) -> Vec<Employee> {
        self.persistence.load()
    }

    /// Writes the whole canonical sequence, replacing what was stored
    pub fn save(&self) -> StorageResult<()> {
        self.persistence.save(&self.employees)
    }

    /// Validates and appends a new record. Nothing changes when validation fails.
    pub fn add(&mut self, input: EmployeeInput) -> Result<Employee, ValidationError> {
        if let Some(error) = self.validate(&input).into_iter().next() {
            log::warn!("Rejected employee: {}", error);
            return Err(error);
        }

        let employee = Employee::new(input);

        self.employees.push(employee.clone());

        log::info!("Added employee [{}]", employee.id);

        self.persist();
        self.refresh_filtered_view();

        Ok(employee)
    }

    /// Removes the record with `id`, returns false when there was none
    pub fn delete(&mut self, id: &EntityId) -> bool {
        let previous_count = self.employees.len();

        self.employees.retain(|employee| &employee.id != id);

        if self.employees.len() == previous_count {
            log::info!("No employee to delete [{}]", id);
            return false;
        }

        log::info!("Deleted employee [{}]", id);

        self.persist();
        self.refresh_filtered_view();

        true
    }

    pub fn set_filter(&mut self, search_term: &str, department: Option<Department>) -> &[Employee] {
        self.filter = EmployeeFilter::new(search_term, department);
        self.refresh_filtered_view();

        &self.filtered_employees
    }

    pub fn clear_filter(&mut self) -> &[Employee] {
        self.set_filter("", None)
    }

    /// Size of the canonical sequence, regardless of the filter
    pub fn count(&self) -> usize {
        self.employees.len()
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn filtered(&self) -> &[Employee] {
        &self.filtered_employees
    }

    pub fn filter(&self) -> &EmployeeFilter {
        &self.filter
    }

    pub fn get(&self, id: &EntityId) -> Option<&Employee> {
        self.employees.iter().find(|employee| &employee.id == id)
    }

    /// Every field error for `input`, for forms that show them all at once
    pub fn validate(&self, input: &EmployeeInput) -> Vec<ValidationError> {
        validation::validate(input, &self.employees)
    }

    fn persist(&self) {
        if let Err(e) = self.save() {
            log::error!("Unable to save employees, keeping in-memory state: {}", e);
        }
    }

    fn refresh_filtered_view(&mut self) {
        self.filtered_employees = self.filter.apply(&self.employees);
    }
}

#[cfg(test)]
impl EmployeeDirectory {
    pub fn new_test() -> Self {
        Self::new(DirectoryOptions::new_test())
    }
}

use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::NaiveDate;
use thiserror::Error;

use crate::model::employee::Employee;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Unable to serialize export document: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Unable to write export document [{}]: {}", .0.display(), .1)]
    Write(PathBuf, std::io::Error),
}

/// Canonical sequence as an indented JSON document
pub fn export_document(employees: &[Employee]) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(employees)?)
}

pub fn export_file_name(date: NaiveDate) -> String {
    format!("employes_{}.json", date.format("%Y-%m-%d"))
}

/// Writes the export document into `directory`, returns the path of the written file
pub fn write_export(
    directory: &Path,
    employees: &[Employee],
    date: NaiveDate,
) -> Result<PathBuf, ExportError> {
    let document = export_document(employees)?;

    let path = directory.join(export_file_name(date));

    fs::create_dir_all(directory).map_err(|e| ExportError::Write(path.clone(), e))?;
    fs::write(&path, document).map_err(|e| ExportError::Write(path.clone(), e))?;

    log::info!(
        "Exported {} employees to [{}]",
        employees.len(),
        path.display()
    );

    Ok(path)
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use crate::model::employee::EmployeeInput;

    use super::*;

    #[test]
    fn file_name_carries_the_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();

        assert_eq!(export_file_name(date), "employes_2024-03-07.json");
    }

    #[test]
    fn empty_directory_exports_an_empty_array() {
        assert_eq!(export_document(&[]).unwrap(), "[]");
    }

    #[test]
    fn document_is_indented_with_two_spaces() {
        let employees = vec![Employee::new(EmployeeInput::new(
            "Diaz",
            "Ana",
            "ana@x.com",
            "Eng",
        ))];

        let document = export_document(&employees).unwrap();

        assert!(document.starts_with("[\n  {\n    \"id\": "));

        let parsed: Vec<Employee> = serde_json::from_str(&document).unwrap();

        assert_eq!(parsed, employees);
    }

    #[test]
    fn write_export_creates_the_file() {
        let directory = std::env::temp_dir()
            .join("employee-directory")
            .join(Uuid::new_v4().to_string());

        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();

        let path = write_export(&directory, &[], date).unwrap();

        assert_eq!(path, directory.join("employes_2024-03-07.json"));
        assert_eq!(fs::read_to_string(path).unwrap(), "[]");
    }
}

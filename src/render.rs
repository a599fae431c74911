use directory::{directory::validation::ValidationError, model::employee::Employee};
use num_format::{Locale, ToFormattedString};

/// Multi-line card for one employee, optional fields are only shown when set
pub fn employee_card(employee: &Employee) -> String {
    let mut lines = vec![
        format!("{}  [{}]", employee.full_name(), employee.id),
        format!("    Poste      : {}", employee.position),
        format!("    Email      : {}", employee.email),
    ];

    if let Some(phone) = &employee.phone {
        lines.push(format!("    Téléphone  : {}", phone));
    }

    if let Some(department) = &employee.department {
        lines.push(format!("    Département: {}", department.display_name()));
    }

    // fr-FR short date
    lines.push(format!(
        "    Ajouté le {}",
        employee.created_at.format("%d/%m/%Y")
    ));

    lines.join("\n")
}

/// Shown instead of the list when the filtered view is empty
pub fn empty_state(total: usize) -> &'static str {
    if total == 0 {
        "Aucun employé enregistré. Commencez par ajouter votre premier employé."
    } else {
        "Aucun employé ne correspond à vos critères. Essayez de modifier vos filtres de recherche."
    }
}

pub fn counter(shown: usize, total: usize) -> String {
    format!(
        "{} / {} employé(s)",
        shown.to_formatted_string(&Locale::fr),
        total.to_formatted_string(&Locale::fr)
    )
}

pub fn validation_error(error: &ValidationError) -> String {
    format!("  ✗ {:<9} {}", error.field.to_string(), error.message)
}

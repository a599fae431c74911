use std::path::PathBuf;

use anyhow::bail;
use chrono::Utc;
use clap::{Parser, Subcommand};
use directory::{
    consts::consts::EntityId,
    directory::{directory::EmployeeDirectory, export::write_export, options::DirectoryOptions},
    model::employee::{Department, EmployeeInput},
};
use strum::IntoEnumIterator;

mod render;

/// 📇 Employee directory, keeps employee records in a local store and lets you add, search,
/// filter and delete them
#[derive(Parser, Debug)]
struct Cli {
    /// Location of the directory data. Reads / writes to this directory. Note: Does not support shell paths, e.g. ~
    #[clap(short, long, default_value = "data", global = true)]
    data: PathBuf,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add an employee, every invalid field is reported
    Add {
        #[clap(long)]
        last_name: String,

        #[clap(long)]
        first_name: String,

        #[clap(long)]
        email: String,

        #[clap(long)]
        position: String,

        #[clap(long)]
        phone: Option<String>,

        /// Department code, see `departments`
        #[clap(long)]
        department: Option<Department>,
    },
    /// List employees, optionally narrowed by a search term and a department
    List {
        /// Case-insensitive match on first name, last name, email or position
        #[clap(short, long, default_value = "")]
        search: String,

        #[clap(long)]
        department: Option<Department>,
    },
    /// Delete the employee with the given id
    Delete { id: String },
    /// Print the number of employees
    Count,
    /// Write every employee to a dated JSON document
    Export {
        #[clap(short, long, default_value = ".")]
        output: PathBuf,
    },
    /// List department codes and their names
    Departments,
}

fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let args = Cli::parse();

    log::info!("Directory data location: [{}]", args.data.display());

    let mut directory =
        EmployeeDirectory::new(DirectoryOptions::default().set_data_directory(args.data));

    match args.command {
        Command::Add {
            last_name,
            first_name,
            email,
            position,
            phone,
            department,
        } => {
            let input = EmployeeInput {
                last_name,
                first_name,
                email,
                position,
                phone,
                department,
            };

            let errors = directory.validate(&input);

            if !errors.is_empty() {
                eprintln!("Employé invalide:");

                for error in &errors {
                    eprintln!("{}", render::validation_error(error));
                }

                bail!("{} invalid field(s)", errors.len());
            }

            let employee = directory.add(input)?;

            println!("Employé ajouté avec succès !");
            println!("{}", render::employee_card(&employee));
        }
        Command::List { search, department } => {
            let filtered = directory.set_filter(&search, department).to_vec();

            if filtered.is_empty() {
                println!("{}", render::empty_state(directory.count()));
            } else {
                for employee in &filtered {
                    println!("{}\n", render::employee_card(employee));
                }
            }

            println!("{}", render::counter(filtered.len(), directory.count()));
        }
        Command::Delete { id } => {
            if directory.delete(&EntityId(id.clone())) {
                println!("Employé supprimé [{}]", id);
            } else {
                println!("Aucun employé avec l'id [{}]", id);
            }
        }
        Command::Count => {
            println!("{}", directory.count());
        }
        Command::Export { output } => {
            let path = write_export(&output, directory.employees(), Utc::now().date_naive())?;

            println!("{}", path.display());
        }
        Command::Departments => {
            for department in Department::iter() {
                println!("{:<12} {}", department.to_string(), department.display_name());
            }
        }
    }

    Ok(())
}

use crate::core::registry;
use crate::core::types::ManagerProfile;
use crate::error::{Result, UniError};
use crate::traits::ExecutableFinder;
use crate::ui as output;
use colored::Colorize;
use serde::Serialize;

/// Options for the managers command
pub struct ManagersOptions {
    pub format: Option<String>,
}

#[derive(Debug, Serialize)]
struct ManagerOut {
    id: &'static str,
    name: &'static str,
    executable: &'static str,
    lock_files: Vec<&'static str>,
    installed: bool,
    search_api: bool,
    exec: Option<&'static str>,
}

impl ManagerOut {
    fn new(profile: &'static ManagerProfile, finder: &dyn ExecutableFinder) -> Self {
        Self {
            id: profile.id,
            name: profile.display_name,
            executable: profile.executable,
            lock_files: profile
                .lock_files
                .iter()
                .chain(profile.project_files)
                .copied()
                .collect(),
            installed: finder.exists(profile.executable),
            search_api: profile.supports_search_api(),
            exec: profile.has_exec().then_some(profile.exec_prefix),
        }
    }
}

pub fn run(options: ManagersOptions, finder: &dyn ExecutableFinder) -> Result<()> {
    let rows: Vec<ManagerOut> = registry::all()
        .iter()
        .map(|p| ManagerOut::new(p, finder))
        .collect();

    match options.format.as_deref().unwrap_or("table") {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&rows)?);
            Ok(())
        }
        "table" => {
            display(&rows);
            Ok(())
        }
        other => Err(UniError::Other(format!(
            "Unknown format '{}'. Use 'table' or 'json'.",
            other
        ))),
    }
}

fn display(rows: &[ManagerOut]) {
    output::header("Supported package managers");
    for row in rows {
        let status = if row.installed {
            "installed".green()
        } else {
            "missing".bright_black()
        };
        let files = if row.lock_files.is_empty() {
            "-".to_string()
        } else {
            row.lock_files.join(", ")
        };
        let search = if row.search_api { "api" } else { "cli" };
        println!(
            "  {:<6} {:<10} {:<10} search:{:<4} {}",
            row.id.cyan().bold(),
            row.name,
            status,
            search,
            files.dimmed()
        );
    }
}

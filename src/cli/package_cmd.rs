//! Package subcommands

use anyhow::Result;
use clap::Subcommand;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::output::Output;
use super::render;
use crate::domain::{Field, PackageState, Predicate, DEFAULT_INSTALLER};
use crate::manager::{ManagerError, PackageManager};
use crate::query;

#[derive(Subcommand, Debug)]
pub enum PackageCommands {
    /// List installed packages
    List {
        /// Show packages added by the given installer
        #[arg(long)]
        installer: Option<String>,

        /// Show enabled packages
        #[arg(long)]
        enabled: bool,

        /// Show packages whose install path is missing
        #[arg(long)]
        not_found: bool,

        /// Show packages whose metadata could not be loaded
        #[arg(long)]
        not_loadable: bool,

        /// Render each package through a template with %name%, %installer%,
        /// %install_path% and %state% placeholders
        #[arg(long, value_name = "TEMPLATE")]
        format: Option<String>,
    },

    /// Install a package
    Add {
        /// Path to the package
        path: String,

        /// Name for the package (defaults to the name in its manifest)
        name: Option<String>,

        /// Installer adding the package
        #[arg(long, default_value = DEFAULT_INSTALLER)]
        installer: String,
    },

    /// Rename an installed package
    Rename {
        /// Current package name
        old_name: String,

        /// New package name
        new_name: String,
    },

    /// Remove an installed package
    Delete {
        /// Package name
        name: String,
    },

    /// Remove all packages whose install path is missing
    Clean,
}

pub fn run<W: Write>(
    cmd: PackageCommands,
    out: &mut Output<W>,
    manager: &mut impl PackageManager,
    cwd: &Path,
) -> Result<()> {
    match cmd {
        PackageCommands::List {
            installer,
            enabled,
            not_found,
            not_loadable,
            format,
        } => list(
            installer.as_deref(),
            &selected_states(enabled, not_found, not_loadable),
            format.as_deref(),
            out,
            &*manager,
        ),
        PackageCommands::Add {
            path,
            name,
            installer,
        } => add(&path, name.as_deref(), &installer, manager, cwd),
        PackageCommands::Rename { old_name, new_name } => {
            manager.rename_package(&old_name, &new_name)?;
            Ok(())
        }
        PackageCommands::Delete { name } => delete(&name, manager),
        PackageCommands::Clean => clean(out, manager),
    }
}

/// The states selected by flags, in declared order; none means all
fn selected_states(enabled: bool, not_found: bool, not_loadable: bool) -> Vec<PackageState> {
    let flags = [
        (enabled, PackageState::Enabled),
        (not_found, PackageState::NotFound),
        (not_loadable, PackageState::NotLoadable),
    ];

    flags
        .into_iter()
        .filter_map(|(set, state)| set.then_some(state))
        .collect()
}

/// Builds the filter predicate from the listing flags
///
/// Installer and state constraints combine with AND; several states
/// combine as set membership. No flags means unconstrained.
fn build_predicate(installer: Option<&str>, states: &[PackageState]) -> Predicate {
    let mut predicate = Predicate::Always;

    if let Some(installer) = installer {
        predicate = predicate.and(Predicate::equals(Field::Installer, installer));
    }

    match states {
        [] => predicate,
        [state] => predicate.and(Predicate::equals(Field::State, state.tag())),
        states => predicate.and(Predicate::one_of(
            Field::State,
            states.iter().map(|state| state.tag()),
        )),
    }
}

fn list<W: Write>(
    installer: Option<&str>,
    states: &[PackageState],
    format: Option<&str>,
    out: &mut Output<W>,
    manager: &impl PackageManager,
) -> Result<()> {
    let predicate = build_predicate(installer, states);
    out.verbose_ctx("package", &format!("Listing with filter {:?}", predicate));

    let packages = manager.find_packages(&predicate);
    let rendered = match format {
        Some(template) => render::render_package_format(&packages, template),
        None => render::render_package_list(&query::group_packages(&packages)),
    };
    out.write_rendered(&rendered)?;

    Ok(())
}

fn add(
    path: &str,
    name: Option<&str>,
    installer: &str,
    manager: &mut impl PackageManager,
    cwd: &Path,
) -> Result<()> {
    let install_path = if Path::new(path).is_absolute() {
        PathBuf::from(path)
    } else {
        cwd.join(path)
    };
    manager.install_package(&install_path, name, installer)?;
    Ok(())
}

fn delete(name: &str, manager: &mut impl PackageManager) -> Result<()> {
    if !manager.has_package(name) {
        return Err(ManagerError::PackageNotInstalled(name.to_string()).into());
    }
    manager.remove_package(name)?;
    Ok(())
}

fn clean<W: Write>(out: &mut Output<W>, manager: &mut impl PackageManager) -> Result<()> {
    for name in query::clean_packages(manager) {
        out.line(&format!("Removing {}", name))?;
    }
    Ok(())
}

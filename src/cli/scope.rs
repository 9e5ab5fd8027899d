//! Package scope flags shared by listing commands

use clap::Args;

use crate::manager::PackageManager;

/// Selects which packages a listing command covers
#[derive(Args, Debug, Default)]
pub struct PackageScope {
    /// Cover the root package
    #[arg(long)]
    pub root: bool,

    /// Cover the given package (repeatable)
    #[arg(long, short = 'p', value_name = "PACKAGE")]
    pub package: Vec<String>,

    /// Cover all packages
    #[arg(long, short = 'a')]
    pub all: bool,
}

impl PackageScope {
    /// Resolves the scope to concrete package names
    ///
    /// `--all` wins; otherwise the root package is covered when `--root`
    /// is given or no `--package` was named, followed by every
    /// `--package` value in order.
    pub fn resolve(&self, packages: &impl PackageManager) -> Vec<String> {
        if self.all {
            return packages
                .get_packages()
                .into_iter()
                .map(|package| package.name)
                .collect();
        }

        let mut names = Vec::new();
        if self.root || self.package.is_empty() {
            names.push(packages.get_root_package().name.clone());
        }
        names.extend(self.package.iter().cloned());
        names
    }
}

//! Interfaces to the external manager component
//!
//! Storage, resolution, and persistence of packages, bindings, and
//! resource mappings belong to the manager component; this crate only
//! consumes it through these traits. [`MemoryManager`] is the
//! process-local implementation used by the binary and the tests.

mod memory;

pub use memory::MemoryManager;

use std::path::Path;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::{Binding, BindingState, Package, Parameters, Predicate, ResourceMapping};

#[derive(Debug, Error, PartialEq)]
pub enum ManagerError {
    #[error("The package \"{0}\" is not installed.")]
    PackageNotInstalled(String),

    #[error("The package name \"{0}\" is already taken.")]
    NameTaken(String),

    #[error("No binding with UUID {0} exists.")]
    BindingNotFound(Uuid),
}

/// Stores and queries installed packages
pub trait PackageManager {
    /// The package of the current project itself
    fn get_root_package(&self) -> &Package;

    /// All packages, root first, then in install order
    fn get_packages(&self) -> Vec<Package>;

    /// Packages matching the predicate, in the same order as [`get_packages`](Self::get_packages)
    fn find_packages(&self, predicate: &Predicate) -> Vec<Package>;

    fn has_package(&self, name: &str) -> bool;

    /// Installs the package at the given absolute path
    fn install_package(
        &mut self,
        path: &Path,
        name: Option<&str>,
        installer: &str,
    ) -> Result<(), ManagerError>;

    /// Changes a package's identity key; install path and installer stay
    fn rename_package(&mut self, old_name: &str, new_name: &str) -> Result<(), ManagerError>;

    fn remove_package(&mut self, name: &str) -> Result<(), ManagerError>;
}

/// Stores bindings and resolves their state
pub trait DiscoveryManager {
    /// Adds a binding for the root package, returning its UUID
    fn add_binding(
        &mut self,
        query: &str,
        type_name: &str,
        parameters: Parameters,
        language: &str,
    ) -> Result<Uuid, ManagerError>;

    fn remove_binding(&mut self, uuid: Uuid) -> Result<(), ManagerError>;

    fn enable_binding(&mut self, uuid: Uuid) -> Result<(), ManagerError>;

    fn disable_binding(&mut self, uuid: Uuid) -> Result<(), ManagerError>;

    /// All bindings whose UUID starts with the given prefix
    fn find_bindings(&self, uuid_or_prefix: &str) -> Vec<Binding>;

    /// Bindings of one package currently classified into the given state
    fn get_bindings(&self, package_name: &str, state: BindingState) -> Vec<Binding>;
}

/// Stores resource mappings
pub trait RepositoryManager {
    /// Adds a mapping for the root package
    fn add_resource_mapping(&mut self, mapping: ResourceMapping) -> Result<(), ManagerError>;

    fn get_resource_mappings(&self, package_name: &str) -> Vec<ResourceMapping>;
}

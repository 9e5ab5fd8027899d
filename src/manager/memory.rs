//! In-memory manager implementation
//!
//! Holds a root package, installed packages in install order, bindings,
//! and mappings for the lifetime of the process. The binary wires this
//! in as the stand-in for the real manager component; handler tests use
//! it as their fixture backend.

use std::path::Path;
use uuid::Uuid;

use super::{DiscoveryManager, ManagerError, PackageManager, RepositoryManager};
use crate::domain::{
    Binding, BindingState, InstallInfo, Package, Parameters, Predicate, ResourceMapping,
};

pub struct MemoryManager {
    root: Package,
    packages: Vec<Package>,
    bindings: Vec<Binding>,
    mappings: Vec<(String, ResourceMapping)>,
}

impl MemoryManager {
    pub fn new(root_name: &str, root_path: impl AsRef<Path>) -> Self {
        Self {
            root: Package::root(root_name, root_path.as_ref()),
            packages: Vec::new(),
            bindings: Vec::new(),
            mappings: Vec::new(),
        }
    }

    /// Registers an already-constructed package (fixture seeding)
    pub fn add_package(&mut self, package: Package) {
        self.packages.push(package);
    }

    /// Registers an already-constructed binding (fixture seeding)
    pub fn insert_binding(&mut self, mut binding: Binding) {
        if binding.package_name.is_empty() {
            binding.package_name = self.root.name.clone();
        }
        self.bindings.push(binding);
    }

    /// Registers a mapping owned by the given package (fixture seeding)
    pub fn insert_mapping(&mut self, package_name: &str, mapping: ResourceMapping) {
        self.mappings.push((package_name.to_string(), mapping));
    }
}

impl PackageManager for MemoryManager {
    fn get_root_package(&self) -> &Package {
        &self.root
    }

    fn get_packages(&self) -> Vec<Package> {
        let mut all = Vec::with_capacity(self.packages.len() + 1);
        all.push(self.root.clone());
        all.extend(self.packages.iter().cloned());
        all
    }

    fn find_packages(&self, predicate: &Predicate) -> Vec<Package> {
        self.get_packages()
            .into_iter()
            .filter(|package| predicate.matches(package))
            .collect()
    }

    fn has_package(&self, name: &str) -> bool {
        self.root.name == name || self.packages.iter().any(|package| package.name == name)
    }

    fn install_package(
        &mut self,
        path: &Path,
        name: Option<&str>,
        installer: &str,
    ) -> Result<(), ManagerError> {
        let name = match name {
            Some(name) => name.to_string(),
            None => path
                .file_name()
                .map(|file_name| file_name.to_string_lossy().into_owned())
                .unwrap_or_default(),
        };
        if self.has_package(&name) {
            return Err(ManagerError::NameTaken(name));
        }
        self.packages.push(Package::new(
            name,
            path,
            InstallInfo::new(path.display().to_string(), installer),
        ));
        Ok(())
    }

    fn rename_package(&mut self, old_name: &str, new_name: &str) -> Result<(), ManagerError> {
        if self.has_package(new_name) {
            return Err(ManagerError::NameTaken(new_name.to_string()));
        }
        if self.root.name == old_name {
            self.root.name = new_name.to_string();
            return Ok(());
        }
        match self
            .packages
            .iter_mut()
            .find(|package| package.name == old_name)
        {
            Some(package) => {
                package.name = new_name.to_string();
                Ok(())
            }
            None => Err(ManagerError::PackageNotInstalled(old_name.to_string())),
        }
    }

    fn remove_package(&mut self, name: &str) -> Result<(), ManagerError> {
        let count_before = self.packages.len();
        self.packages.retain(|package| package.name != name);
        if self.packages.len() == count_before {
            return Err(ManagerError::PackageNotInstalled(name.to_string()));
        }
        Ok(())
    }
}

impl DiscoveryManager for MemoryManager {
    fn add_binding(
        &mut self,
        query: &str,
        type_name: &str,
        parameters: Parameters,
        language: &str,
    ) -> Result<Uuid, ManagerError> {
        let mut binding = Binding::new(query, type_name);
        binding.language = language.to_string();
        binding.parameters = parameters;
        binding.package_name = self.root.name.clone();
        let uuid = binding.uuid;
        self.bindings.push(binding);
        Ok(uuid)
    }

    fn remove_binding(&mut self, uuid: Uuid) -> Result<(), ManagerError> {
        let count_before = self.bindings.len();
        self.bindings.retain(|binding| binding.uuid != uuid);
        if self.bindings.len() == count_before {
            return Err(ManagerError::BindingNotFound(uuid));
        }
        Ok(())
    }

    fn enable_binding(&mut self, uuid: Uuid) -> Result<(), ManagerError> {
        self.set_enabled(uuid, true)
    }

    fn disable_binding(&mut self, uuid: Uuid) -> Result<(), ManagerError> {
        self.set_enabled(uuid, false)
    }

    fn find_bindings(&self, uuid_or_prefix: &str) -> Vec<Binding> {
        self.bindings
            .iter()
            .filter(|binding| binding.uuid.to_string().starts_with(uuid_or_prefix))
            .cloned()
            .collect()
    }

    fn get_bindings(&self, package_name: &str, state: BindingState) -> Vec<Binding> {
        self.bindings
            .iter()
            .filter(|binding| binding.package_name == package_name && binding.state() == state)
            .cloned()
            .collect()
    }
}

impl MemoryManager {
    fn set_enabled(&mut self, uuid: Uuid, enabled: bool) -> Result<(), ManagerError> {
        match self
            .bindings
            .iter_mut()
            .find(|binding| binding.uuid == uuid)
        {
            Some(binding) => {
                binding.enabled = Some(enabled);
                Ok(())
            }
            None => Err(ManagerError::BindingNotFound(uuid)),
        }
    }
}

impl RepositoryManager for MemoryManager {
    fn add_resource_mapping(&mut self, mapping: ResourceMapping) -> Result<(), ManagerError> {
        self.mappings.push((self.root.name.clone(), mapping));
        Ok(())
    }

    fn get_resource_mappings(&self, package_name: &str) -> Vec<ResourceMapping> {
        self.mappings
            .iter()
            .filter(|(owner, _)| owner == package_name)
            .map(|(_, mapping)| mapping.clone())
            .collect()
    }
}

//! Map command handlers
//!
//! With a repository path the command adds a mapping; without one it
//! lists existing mappings grouped by owning package.

use anyhow::Result;
use clap::Args;
use std::io::Write;

use super::output::Output;
use super::render;
use super::scope::PackageScope;
use crate::domain::ResourceMapping;
use crate::manager::{PackageManager, RepositoryManager};

#[derive(Args, Debug)]
pub struct MapArgs {
    /// Virtual repository path to map
    pub repository_path: Option<String>,

    /// Filesystem paths the repository path maps to
    pub paths: Vec<String>,

    #[command(flatten)]
    pub scope: PackageScope,
}

pub fn run<W, M>(args: MapArgs, out: &mut Output<W>, manager: &mut M) -> Result<()>
where
    W: Write,
    M: PackageManager + RepositoryManager,
{
    if let Some(repository_path) = &args.repository_path {
        if args.paths.is_empty() {
            anyhow::bail!("At least one filesystem path is required to add a mapping");
        }
        manager.add_resource_mapping(ResourceMapping::new(repository_path, args.paths.clone()))?;
        return Ok(());
    }

    let package_names = args.scope.resolve(&*manager);
    let groups: Vec<(String, Vec<ResourceMapping>)> = package_names
        .into_iter()
        .map(|name| {
            let mappings = manager.get_resource_mappings(&name);
            (name, mappings)
        })
        .collect();

    out.write_rendered(&render::render_mapping_list(&groups))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manager::MemoryManager;

    fn args() -> MapArgs {
        MapArgs {
            repository_path: None,
            paths: Vec::new(),
            scope: PackageScope::default(),
        }
    }

    fn run_args(args: MapArgs, manager: &mut MemoryManager) -> Result<String> {
        let mut out = Output::new(Vec::new(), false);
        run(args, &mut out, manager)?;
        Ok(String::from_utf8(out.into_inner()).unwrap())
    }

    #[test]
    fn a_repository_path_adds_a_mapping_for_the_root_package() {
        let mut manager = MemoryManager::new("vendor/root", "/project");
        let mut add = args();
        add.repository_path = Some("/app".to_string());
        add.paths = vec!["res".to_string(), "assets".to_string()];

        let out = run_args(add, &mut manager).unwrap();

        assert_eq!(out, "");
        assert_eq!(
            manager.get_resource_mappings("vendor/root"),
            [ResourceMapping::new("/app", ["res", "assets"])]
        );
    }

    #[test]
    fn a_repository_path_without_filesystem_paths_is_rejected() {
        let mut manager = MemoryManager::new("vendor/root", "/project");
        let mut add = args();
        add.repository_path = Some("/app".to_string());

        let error = run_args(add, &mut manager).unwrap_err();
        assert!(error.to_string().contains("filesystem path"));
        assert!(manager.get_resource_mappings("vendor/root").is_empty());
    }

    #[test]
    fn listing_the_default_scope_prints_root_mappings_plainly() {
        let mut manager = MemoryManager::new("vendor/root", "/project");
        manager.insert_mapping("vendor/root", ResourceMapping::new("/app", ["res"]));

        let out = run_args(args(), &mut manager).unwrap();
        assert_eq!(out, "/app  res\n");
    }

    #[test]
    fn listing_all_packages_groups_by_owner() {
        let mut manager = MemoryManager::new("vendor/root", "/project");
        manager.add_package(crate::domain::Package::new(
            "vendor/blog",
            "/project/packages/blog",
            crate::domain::InstallInfo::new("packages/blog", "user"),
        ));
        manager.insert_mapping("vendor/root", ResourceMapping::new("/app", ["res"]));
        manager.insert_mapping(
            "vendor/blog",
            ResourceMapping::new("/acme/blog", ["resources"]),
        );

        let mut list = args();
        list.scope.all = true;

        let out = run_args(list, &mut manager).unwrap();
        let expected = concat!(
            "vendor/root\n",
            "/app  res\n",
            "\n",
            "vendor/blog\n",
            "/acme/blog  resources\n",
            "\n",
        );
        assert_eq!(out, expected);
    }
}

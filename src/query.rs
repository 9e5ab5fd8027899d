//! Query dispatch
//!
//! Sits between the command handlers and the manager traits: runs the
//! query, classifies and groups the result by state, resolves removal
//! identifiers, and drives the bulk clean.

use thiserror::Error;

use crate::domain::{Binding, BindingState, Package, PackageState};
use crate::manager::{DiscoveryManager, PackageManager};

#[derive(Debug, Error, PartialEq)]
pub enum QueryError {
    #[error("The identifier \"{prefix}\" matches {count} bindings. Pass a longer prefix.")]
    AmbiguousIdentifier { prefix: String, count: usize },
}

/// Partitions packages by classified state, in display order
///
/// Rows inside a group are sorted by package name; empty groups are
/// omitted entirely.
pub fn group_packages(packages: &[Package]) -> Vec<(PackageState, Vec<Package>)> {
    PackageState::all()
        .into_iter()
        .filter_map(|state| {
            let mut group: Vec<Package> = packages
                .iter()
                .filter(|package| package.state() == state)
                .cloned()
                .collect();
            group.sort_by(|a, b| a.name.cmp(&b.name));
            (!group.is_empty()).then_some((state, group))
        })
        .collect()
}

/// Collects bindings of the given packages, grouped by requested state
///
/// States appear in the fixed display order; within a group, bindings
/// follow the package order and the manager's order per package. Empty
/// groups are omitted.
pub fn group_bindings(
    discovery: &impl DiscoveryManager,
    package_names: &[String],
    states: &[BindingState],
) -> Vec<(BindingState, Vec<Binding>)> {
    BindingState::all()
        .into_iter()
        .filter(|state| states.contains(state))
        .filter_map(|state| {
            let group: Vec<Binding> = package_names
                .iter()
                .flat_map(|package| discovery.get_bindings(package, state))
                .collect();
            (!group.is_empty()).then_some((state, group))
        })
        .collect()
}

/// Resolves a binding by exact UUID or unambiguous prefix
///
/// Zero matches is a successful no-op; more than one match is an error,
/// never silently resolved.
pub fn resolve_binding(
    discovery: &impl DiscoveryManager,
    uuid_or_prefix: &str,
) -> Result<Option<Binding>, QueryError> {
    let mut matches = discovery.find_bindings(uuid_or_prefix);
    match matches.len() {
        0 => Ok(None),
        1 => Ok(Some(matches.remove(0))),
        count => Err(QueryError::AmbiguousIdentifier {
            prefix: uuid_or_prefix.to_string(),
            count,
        }),
    }
}

/// Removes every package currently classified `not-found`
///
/// Operates per entity: one failed removal does not block the rest.
/// Returns the names that were removed, in manager order.
pub fn clean_packages(manager: &mut impl PackageManager) -> Vec<String> {
    let not_found: Vec<String> = manager
        .get_packages()
        .iter()
        .filter(|package| package.state() == PackageState::NotFound)
        .map(|package| package.name.clone())
        .collect();

    not_found
        .into_iter()
        .filter(|name| manager.remove_package(name).is_ok())
        .collect()
}

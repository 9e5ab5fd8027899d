//! resin - command surface for a resource/package management tool
//!
//! resin binds resource queries to typed handlers, maps filesystem paths
//! into a virtual resource tree, and manages installed packages. Storage
//! and resolution are delegated to the manager component behind the
//! traits in [`manager`]; this crate interprets arguments, builds query
//! predicates, classifies entity states, and renders the results.

pub mod domain;
pub mod manager;
pub mod query;
pub mod cli;

pub use domain::{Binding, BindingState, Package, PackageState, Predicate, Value};

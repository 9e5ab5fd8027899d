//! Bind command handlers
//!
//! One command, action decided by flags: `--delete`, `--enable`, and
//! `--disable` act on an existing binding by UUID (prefix); a resource
//! query adds a binding; no arguments lists bindings.

use anyhow::Result;
use clap::Args;
use std::io::Write;

use super::output::Output;
use super::render;
use super::scope::PackageScope;
use crate::domain::{parse_parameter, BindingState, Parameters, DEFAULT_LANGUAGE};
use crate::manager::{DiscoveryManager, PackageManager};
use crate::query;

#[derive(Args, Debug)]
pub struct BindArgs {
    /// A resource query, or a binding UUID (prefix) with --delete/--enable/--disable
    pub query: Option<String>,

    /// Name of the binding type to bind the query to
    pub type_name: Option<String>,

    #[command(flatten)]
    pub scope: PackageScope,

    /// Show enabled bindings
    #[arg(long)]
    pub enabled: bool,

    /// Show disabled bindings
    #[arg(long)]
    pub disabled: bool,

    /// Show bindings that are neither enabled nor disabled
    #[arg(long)]
    pub undecided: bool,

    /// Show bindings whose type is not loaded
    #[arg(long)]
    pub held_back: bool,

    /// Show bindings whose type is duplicated
    #[arg(long)]
    pub ignored: bool,

    /// Delete a binding
    #[arg(long, short = 'd')]
    pub delete: bool,

    /// Enable a binding
    #[arg(long)]
    pub enable: bool,

    /// Disable a binding
    #[arg(long)]
    pub disable: bool,

    /// The language of the resource query
    #[arg(long, default_value = DEFAULT_LANGUAGE)]
    pub language: String,

    /// A binding parameter in the form <name>=<value> (repeatable)
    #[arg(long = "param", value_name = "NAME=VALUE")]
    pub params: Vec<String>,
}

pub fn run<W, M>(args: BindArgs, out: &mut Output<W>, manager: &mut M) -> Result<()>
where
    W: Write,
    M: PackageManager + DiscoveryManager,
{
    if args.delete {
        return remove_binding(identifier(&args, "--delete")?, manager);
    }
    if args.enable {
        return set_enabled(identifier(&args, "--enable")?, true, manager);
    }
    if args.disable {
        return set_enabled(identifier(&args, "--disable")?, false, manager);
    }
    if args.query.is_some() {
        return add_binding(&args, out, manager);
    }
    list_bindings(&args, out, &*manager)
}

fn identifier<'a>(args: &'a BindArgs, flag: &str) -> Result<&'a str> {
    args.query
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("{} requires a binding UUID or prefix", flag))
}

fn add_binding<W: Write>(
    args: &BindArgs,
    out: &mut Output<W>,
    discovery: &mut impl DiscoveryManager,
) -> Result<()> {
    let query = args.query.as_deref().unwrap_or_default();
    let type_name = args
        .type_name
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("A binding type name is required to add a binding"))?;

    let mut parameters = Parameters::new();
    for raw in &args.params {
        let (name, value) = parse_parameter(raw)?;
        parameters.set(name, value);
    }

    let uuid = discovery.add_binding(query, type_name, parameters, &args.language)?;
    out.verbose_ctx("bind", &format!("Added binding {}", uuid));

    Ok(())
}

fn remove_binding(uuid_or_prefix: &str, discovery: &mut impl DiscoveryManager) -> Result<()> {
    if let Some(binding) = query::resolve_binding(&*discovery, uuid_or_prefix)? {
        discovery.remove_binding(binding.uuid)?;
    }
    Ok(())
}

fn set_enabled(
    uuid_or_prefix: &str,
    enabled: bool,
    discovery: &mut impl DiscoveryManager,
) -> Result<()> {
    if let Some(binding) = query::resolve_binding(&*discovery, uuid_or_prefix)? {
        if enabled {
            discovery.enable_binding(binding.uuid)?;
        } else {
            discovery.disable_binding(binding.uuid)?;
        }
    }
    Ok(())
}

fn list_bindings<W, M>(args: &BindArgs, out: &mut Output<W>, manager: &M) -> Result<()>
where
    W: Write,
    M: PackageManager + DiscoveryManager,
{
    let package_names = args.scope.resolve(manager);
    let states = selected_states(args);
    out.verbose_ctx(
        "bind",
        &format!("Listing bindings of {} package(s)", package_names.len()),
    );

    let groups = query::group_bindings(manager, &package_names, &states);
    out.write_rendered(&render::render_binding_list(&groups))?;

    Ok(())
}

/// The states selected by flags; none selected means all of them
fn selected_states(args: &BindArgs) -> Vec<BindingState> {
    let flags = [
        (args.enabled, BindingState::Enabled),
        (args.disabled, BindingState::Disabled),
        (args.undecided, BindingState::Undecided),
        (args.held_back, BindingState::HeldBack),
        (args.ignored, BindingState::Ignored),
    ];

    let states: Vec<BindingState> = flags
        .into_iter()
        .filter_map(|(set, state)| set.then_some(state))
        .collect();

    if states.is_empty() {
        BindingState::all().to_vec()
    } else {
        states
    }
}

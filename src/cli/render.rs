//! Table rendering for grouped entities
//!
//! Pure functions: the dispatcher assembles grouped entities, these
//! turn them into the final output text. With a single non-empty group
//! the header and hint are suppressed and rows print unindented; with
//! several groups each block carries its header, an optional hint, and
//! a trailing blank line.

use crate::domain::{Binding, BindingState, Package, PackageState, ResourceMapping};

const INDENT: &str = "    ";

/// One header/hint/rows block per non-empty state group
struct Block {
    header: &'static str,
    hint: Option<&'static str>,
    rows: Vec<String>,
}

fn assemble(blocks: Vec<Block>) -> String {
    let mut out = String::new();
    let solo = blocks.len() == 1;

    for block in blocks {
        if !solo {
            out.push_str(block.header);
            out.push('\n');
            if let Some(hint) = block.hint {
                out.push_str(hint);
                out.push('\n');
            }
            out.push('\n');
        }
        for row in block.rows {
            if !solo {
                out.push_str(INDENT);
            }
            out.push_str(&row);
            out.push('\n');
        }
        if !solo {
            out.push('\n');
        }
    }

    out
}

/// Pads left cells to the widest one, two spaces before the right cell
fn align_rows(cells: Vec<(String, String)>) -> Vec<String> {
    let width = cells.iter().map(|(left, _)| left.len()).max().unwrap_or(0);
    cells
        .into_iter()
        .map(|(left, right)| format!("{:<w$}  {}", left, right, w = width))
        .collect()
}

fn package_header(state: PackageState) -> &'static str {
    match state {
        PackageState::Enabled => "Enabled packages:",
        PackageState::NotFound => "The following packages could not be found:",
        PackageState::NotLoadable => "The following packages could not be loaded:",
    }
}

fn package_hint(state: PackageState) -> Option<&'static str> {
    match state {
        PackageState::NotFound => Some(" (use \"resin package clean\" to remove)"),
        _ => None,
    }
}

fn package_row(package: &Package, state: PackageState) -> String {
    if state == PackageState::NotLoadable {
        if let Some(error) = &package.load_error {
            return format!("{}: {}", package.name, error);
        }
    }

    let mut parts = vec![package.name.as_str()];
    if let Some(info) = &package.install_info {
        if !info.installer.is_empty() {
            parts.push(&info.installer);
        }
        if !info.path.is_empty() {
            parts.push(&info.path);
        }
    }
    parts.join(" ")
}

/// Renders grouped packages with per-state headers and hints
pub fn render_package_list(groups: &[(PackageState, Vec<Package>)]) -> String {
    assemble(
        groups
            .iter()
            .map(|(state, packages)| Block {
                header: package_header(*state),
                hint: package_hint(*state),
                rows: packages
                    .iter()
                    .map(|package| package_row(package, *state))
                    .collect(),
            })
            .collect(),
    )
}

/// Renders one line per package through a placeholder template
///
/// Substitutes `%name%`, `%installer%`, `%install_path%`, and `%state%`;
/// headers are suppressed and the manager's order is kept.
pub fn render_package_format(packages: &[Package], template: &str) -> String {
    let mut out = String::new();
    for package in packages {
        let line = template
            .replace("%name%", &package.name)
            .replace("%installer%", package.installer())
            .replace("%install_path%", &package.install_path.display().to_string())
            .replace("%state%", package.state().tag());
        out.push_str(&line);
        out.push('\n');
    }
    out
}

fn binding_header(state: BindingState) -> &'static str {
    match state {
        BindingState::Enabled => "Enabled bindings:",
        BindingState::Disabled => "Disabled bindings:",
        BindingState::Undecided => "Bindings that are neither enabled nor disabled:",
        BindingState::HeldBack => "The following bindings are held back:",
        BindingState::Ignored => "The following bindings are ignored:",
    }
}

fn binding_hint(state: BindingState) -> Option<&'static str> {
    match state {
        BindingState::Enabled => None,
        BindingState::Disabled | BindingState::Undecided => {
            Some(" (use \"resin bind --enable <uuid>\" to enable)")
        }
        BindingState::HeldBack => Some(" (install their type definitions to enable them)"),
        BindingState::Ignored => {
            Some(" (resolve their duplicate type definitions to enable them)")
        }
    }
}

fn binding_cells(binding: &Binding) -> (String, String) {
    let left = format!("{} {}", binding.short_uuid(), binding.query);

    let parameters = if binding.parameters.is_empty() {
        String::new()
    } else {
        let joined: Vec<String> = binding
            .parameters
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect();
        format!(" ({})", joined.join(", "))
    };

    (left, format!("{}{}", binding.type_name, parameters))
}

/// Renders grouped bindings in a two-column layout
pub fn render_binding_list(groups: &[(BindingState, Vec<Binding>)]) -> String {
    assemble(
        groups
            .iter()
            .map(|(state, bindings)| Block {
                header: binding_header(*state),
                hint: binding_hint(*state),
                rows: align_rows(bindings.iter().map(binding_cells).collect()),
            })
            .collect(),
    )
}

fn mapping_rows(mappings: &[ResourceMapping]) -> Vec<String> {
    align_rows(
        mappings
            .iter()
            .map(|mapping| {
                (
                    mapping.repository_path.clone(),
                    mapping.filesystem_paths.join(", "),
                )
            })
            .collect(),
    )
}

/// Renders mappings grouped by owning package
///
/// A single package in scope prints rows only; with several packages
/// each non-empty one prints its name, its rows, and a blank line.
pub fn render_mapping_list(groups: &[(String, Vec<ResourceMapping>)]) -> String {
    let mut out = String::new();

    if let [(_, mappings)] = groups {
        for row in mapping_rows(mappings) {
            out.push_str(&row);
            out.push('\n');
        }
        return out;
    }

    for (package_name, mappings) in groups {
        if mappings.is_empty() {
            continue;
        }
        out.push_str(package_name);
        out.push('\n');
        for row in mapping_rows(mappings) {
            out.push_str(&row);
            out.push('\n');
        }
        out.push('\n');
    }

    out
}

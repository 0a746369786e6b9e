//! `sfm plan` — Display the resolved group tree before synthesis.

use clap::Args;
use stackform_common::config::ParameterOverrides;
use stackform_compose::group::ComposedGroup;

use crate::commands::StackSelect;
use crate::output;

/// Arguments for the `plan` command.
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Stack to compose.
    #[arg(long, value_enum, default_value = "main")]
    pub stack: StackSelect,
}

/// Executes the `plan` command.
///
/// Composes the selected stack and displays each group with its resolved
/// parameters and provisioning order.
///
/// # Errors
///
/// Returns an error if composition fails.
pub fn execute(args: &PlanArgs, overrides: &ParameterOverrides) -> anyhow::Result<()> {
    let group = args.stack.build();
    let composed = group.compose_with(overrides)?;

    println!("Deployment Plan for: {}", composed.name);
    println!("{}", output::rule(35));
    println!();
    print_group(&composed, 0);

    let total = composed.flatten().len();
    println!();
    println!("  {total} resource(s) will be provisioned.");

    Ok(())
}

fn print_group(group: &ComposedGroup, depth: usize) {
    let pad = output::indent(depth);
    println!("{pad}{}/", group.name);
    if !group.parameters.is_empty() {
        println!("{pad}  parameters:");
        for (name, value) in &group.parameters {
            println!("{pad}    {name} = {value}");
        }
    }
    for name in &group.deploy_order {
        println!("{pad}  + {name}");
    }
    for child in &group.children {
        print_group(child, depth + 1);
    }
}

//! `sfm resources` — List every resource declaration in a stack.

use clap::Args;
use stackform_common::config::ParameterOverrides;

use crate::commands::StackSelect;
use crate::output;

/// Arguments for the `resources` command.
#[derive(Args, Debug)]
pub struct ResourcesArgs {
    /// Stack to compose.
    #[arg(long, value_enum, default_value = "main")]
    pub stack: StackSelect,
}

/// Executes the `resources` command.
///
/// Composes the selected stack, flattens the group tree, and lists the
/// declarations in declaration order.
///
/// # Errors
///
/// Returns an error if composition fails.
pub fn execute(args: &ResourcesArgs, overrides: &ParameterOverrides) -> anyhow::Result<()> {
    let group = args.stack.build();
    let composed = group.compose_with(overrides)?;
    let flattened = composed.flatten();

    println!("{:<24} {:<14} REFERENCES", "NAME", "KIND");
    for resource in &flattened {
        let refs = resource
            .references()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<String>>();
        println!(
            "{:<24} {:<14} {}",
            resource.name().as_str(),
            resource.kind().as_str(),
            output::join_or_dash(&refs)
        );
    }
    println!();
    println!("  {} resource(s).", flattened.len());

    Ok(())
}

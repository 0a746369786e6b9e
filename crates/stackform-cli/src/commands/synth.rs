//! `sfm synth` — Render the provisioning document.

use std::path::PathBuf;

use clap::Args;
use stackform_common::config::ParameterOverrides;
use stackform_common::error::StackformError;

use crate::commands::StackSelect;

/// Arguments for the `synth` command.
#[derive(Args, Debug)]
pub struct SynthArgs {
    /// Stack to compose.
    #[arg(long, value_enum, default_value = "main")]
    pub stack: StackSelect,

    /// Write the document to a file instead of standard output.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

/// Executes the `synth` command.
///
/// Composes the selected stack and renders the JSON provisioning
/// document to standard output or to `--out`.
///
/// # Errors
///
/// Returns an error if composition, rendering, or writing fails.
pub fn execute(args: &SynthArgs, overrides: &ParameterOverrides) -> anyhow::Result<()> {
    let group = args.stack.build();
    let composed = group.compose_with(overrides)?;
    let json = stackform_compose::synth::to_json_string(&composed)?;

    match &args.out {
        Some(path) => {
            std::fs::write(path, &json).map_err(|e| StackformError::Io {
                path: path.clone(),
                source: e,
            })?;
            tracing::info!(path = %path.display(), bytes = json.len(), "document written");
        }
        None => println!("{json}"),
    }

    Ok(())
}

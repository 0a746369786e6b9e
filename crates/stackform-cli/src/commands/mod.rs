//! CLI command definitions and dispatch.

pub mod plan;
pub mod resources;
pub mod synth;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use stackform_common::config::ParameterOverrides;
use stackform_common::constants;
use stackform_compose::group::Group;

/// Stackform — declarative stack composition and synthesis.
#[derive(Parser, Debug)]
#[command(name = "sfm", version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Path to a YAML parameter override file.
    #[arg(long, global = true)]
    pub params: Option<PathBuf>,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compose a stack and display the resolved group tree.
    Plan(plan::PlanArgs),
    /// Compose a stack and render the provisioning document.
    Synth(synth::SynthArgs),
    /// List every resource declaration in a stack.
    Resources(resources::ResourcesArgs),
}

/// Stack selection shared by all subcommands.
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum StackSelect {
    /// The root stack nesting db, backend, and frontend.
    #[default]
    Main,
    /// The standalone db group.
    Db,
    /// The standalone backend group.
    Backend,
    /// The standalone frontend group.
    Frontend,
}

impl StackSelect {
    /// Builds the selected group tree from the blueprint.
    #[must_use]
    pub fn build(self) -> Group {
        match self {
            Self::Main => stackform_blueprint::root_stack(),
            Self::Db => stackform_blueprint::db_group(),
            Self::Backend => stackform_blueprint::backend_group(),
            Self::Frontend => stackform_blueprint::frontend_group(),
        }
    }
}

/// Loads parameter overrides from `--params`, falling back to the default
/// override file when one exists in the working directory.
///
/// # Errors
///
/// Returns an error if an explicitly given file cannot be read or parsed.
pub fn load_overrides(params: Option<&Path>) -> anyhow::Result<ParameterOverrides> {
    if let Some(path) = params {
        tracing::info!(path = %path.display(), "loading parameter overrides");
        return Ok(ParameterOverrides::from_yaml_file(path)?);
    }
    let default = Path::new(constants::DEFAULT_PARAMS_FILE);
    if default.exists() {
        tracing::info!(path = %default.display(), "loading default parameter overrides");
        return Ok(ParameterOverrides::from_yaml_file(default)?);
    }
    Ok(ParameterOverrides::new())
}

/// Dispatches the parsed CLI command to its handler.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    let overrides = load_overrides(cli.params.as_deref())?;
    match cli.command {
        Command::Plan(args) => plan::execute(&args, &overrides),
        Command::Synth(args) => synth::execute(&args, &overrides),
        Command::Resources(args) => resources::execute(&args, &overrides),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn every_stack_selection_composes() {
        for select in [
            StackSelect::Main,
            StackSelect::Db,
            StackSelect::Backend,
            StackSelect::Frontend,
        ] {
            assert!(select.build().compose().is_ok(), "{select:?}");
        }
    }

    #[test]
    fn explicit_override_file_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "EnvironmentName: prod").expect("write");
        let overrides = load_overrides(Some(file.path())).expect("load");
        assert_eq!(overrides.get("EnvironmentName"), Some("prod"));
    }

    #[test]
    fn missing_explicit_override_file_fails() {
        let result = load_overrides(Some(Path::new("/nonexistent/params.yaml")));
        assert!(result.is_err());
    }
}

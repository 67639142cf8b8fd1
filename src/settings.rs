use anyhow::Result;
use std::path::PathBuf;

use crate::args::Args;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Nothing to do: no target specified with --plan, --task or --check")]
    NoTargetSpecified,
    #[error("Only one of --plan, --task or --check may be used at a time")]
    ConflictingTargets,
    #[error("Task file not found: {0:?}")]
    ConfigNotFound(PathBuf),
}

/// What the user asked us to do.
#[derive(Debug, PartialEq, Eq)]
pub enum Target {
    /// Order the goals of a named plan.
    Plan(String),
    /// Order the tasks given on the command line.
    Tasks(Vec<String>),
    /// Validate the whole task file.
    Check,
}

/// Settings are like Args, except all the logic has
/// been applied so e.g. defaults are added in.
#[derive(Debug)]
pub struct Settings {
    pub config: PathBuf,
    pub verbose: u8,
    pub levels: bool,
    pub target: Target,
}

impl TryFrom<Args> for Settings {
    type Error = anyhow::Error;
    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let num_targets = [args.plan.is_some(), !args.tasks.is_empty(), args.check]
            .iter()
            .filter(|x| **x)
            .count();
        if num_targets > 1 {
            return Err(Error::ConflictingTargets.into());
        }

        let target = if let Some(plan) = args.plan {
            Target::Plan(plan)
        } else if !args.tasks.is_empty() {
            Target::Tasks(args.tasks)
        } else if args.check {
            Target::Check
        } else {
            return Err(Error::NoTargetSpecified.into());
        };

        let config = PathBuf::from(&args.config);
        if !config.exists() {
            return Err(Error::ConfigNotFound(config).into());
        }
        let config = config.canonicalize()?;

        Ok(Self {
            config,
            verbose: args.verbose,
            levels: args.levels,
            target,
        })
    }
}

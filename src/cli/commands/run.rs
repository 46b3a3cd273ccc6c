//! Implementation of the `wp-bootstrap run` command.

use anyhow::{Context, Result};

use crate::cli::context::CommandContext;
use crate::cli::types::RunArgs;
use crate::infrastructure::logging::LoggerImpl;
use crate::infrastructure::platform::ProcessEntrypoint;

/// Build the platform entrypoint from settings and command line overrides
pub fn entrypoint_for(args: &RunArgs, ctx: &CommandContext) -> ProcessEntrypoint {
    let mut entrypoint = ProcessEntrypoint::new(ctx.settings.entrypoint.clone());
    if let Some((program, rest)) = args.command.split_first() {
        entrypoint = entrypoint.with_command_line(program.clone(), rest.to_vec());
    }
    if args.no_exec {
        entrypoint = entrypoint.with_exec(false);
    }
    entrypoint
}

pub fn execute(args: &RunArgs, ctx: &CommandContext, logger: LoggerImpl) -> Result<i32> {
    let entrypoint = entrypoint_for(args, ctx);
    let exec = entrypoint.config().exec;

    let bootstrap = ctx.bootstrap(entrypoint)?;
    let config = bootstrap
        .prepare()
        .context("Failed to load runtime configuration")?;

    if exec {
        // exec does not run destructors
        logger.flush();
        return bootstrap.hand_off(config);
    }

    let code = bootstrap.hand_off(config);
    logger.flush();
    code
}

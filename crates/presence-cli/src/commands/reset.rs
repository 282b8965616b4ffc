use crate::commands::common::{commit_pending, open_synchronizer, CommitOutcome, Context};
use crate::error::CliError;

pub fn run_reset_defaults(context: &Context, dry_run: bool) -> Result<(), CliError> {
    let outcome = reset_to_defaults(context, dry_run)?;
    println!("{}", outcome.describe());
    Ok(())
}

pub fn reset_to_defaults(context: &Context, dry_run: bool) -> Result<CommitOutcome, CliError> {
    let mut sync = open_synchronizer(context)?;
    sync.load_defaults();
    commit_pending(context, sync, dry_run)
}

use crate::commands::common::{commit_pending, open_synchronizer, CommitOutcome, Context};
use crate::error::CliError;

pub fn run_set(context: &Context, pairs: &[String], dry_run: bool) -> Result<(), CliError> {
    let outcome = set_fields(context, pairs, dry_run)?;
    println!("{}", outcome.describe());
    Ok(())
}

pub fn set_fields(
    context: &Context,
    pairs: &[String],
    dry_run: bool,
) -> Result<CommitOutcome, CliError> {
    if pairs.len() % 2 != 0 {
        return Err(CliError::UnpairedArguments);
    }

    let mut sync = open_synchronizer(context)?;
    for pair in pairs.chunks_exact(2) {
        sync.set_field(&pair[0], &pair[1])?;
    }
    commit_pending(context, sync, dry_run)
}

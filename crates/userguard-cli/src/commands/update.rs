//! `userguard update` — validate a patch and apply it to a stored user.

use tracing::{info, instrument};

use userguard_core::application::{SystemClock, UserService};

use crate::{
    cli::UpdateArgs,
    commands::create::{rejected, show_user},
    error::CliResult,
    input,
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(args: UpdateArgs, output: OutputManager) -> CliResult<()> {
    let service = UserService::new(Box::new(SystemClock));
    let (user, patch) = input::user_and_patch(&args.user, args.patch)?;

    if patch.is_empty() {
        output.info("Patch is empty; only the timestamp changes")?;
    }

    let user = service
        .update(user, patch)
        .or_else(|err| rejected(err, &output))?;

    info!(id = %user.id, "User updated");
    show_user(&user, "User updated", &output)
}

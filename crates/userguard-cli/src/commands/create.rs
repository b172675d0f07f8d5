//! `userguard create` — validate a record and build a new user from it.

use tracing::{info, instrument};

use userguard_core::application::{SystemClock, UserService};
use userguard_core::domain::{User, truncate_text};
use userguard_core::error::UserGuardError;

use crate::{
    cli::{OutputFormat, RecordArgs},
    error::{CliError, CliResult},
    input,
    output::OutputManager,
};

/// Longest bio excerpt shown in human output.
const BIO_PREVIEW: usize = 60;

#[instrument(skip_all)]
pub fn execute(args: RecordArgs, output: OutputManager) -> CliResult<()> {
    let service = UserService::new(Box::new(SystemClock));
    let record = input::create_input(args)?;

    let user = service
        .create(record)
        .or_else(|err| rejected(err, &output))?;

    info!(id = %user.id, "User created");
    show_user(&user, "User created", &output)
}

/// In JSON mode the error payload is the result document; it goes to stdout
/// before the error itself is reported.
pub(crate) fn rejected<T>(err: UserGuardError, output: &OutputManager) -> CliResult<T> {
    if let (OutputFormat::Json, UserGuardError::Application(app)) = (output.format(), &err) {
        output.json(&app.payload())?;
    }
    Err(CliError::Core(err))
}

/// Print a user as JSON, or as a short summary for humans.
pub(crate) fn show_user(user: &User, headline: &str, output: &OutputManager) -> CliResult<()> {
    match output.format() {
        OutputFormat::Human => {
            output.success(headline)?;
            output.print(&format!("  id:      {}", user.id))?;
            output.print(&format!("  name:    {} ({})", user.full_name(), user.initials()))?;
            output.print(&format!("  email:   {}", user.email))?;
            if let Some(bio) = &user.bio {
                output.print(&format!("  bio:     {}", truncate_text(bio, BIO_PREVIEW)))?;
            }
            output.print(&format!("  active:  {}", user.is_active))?;
        }
        _ => output.json(user)?,
    }
    Ok(())
}

//! Assemble core input records from `--input` documents and field flags.
//!
//! A document is read first (file or stdin); any field flag then replaces
//! the corresponding document field. An explicitly empty flag (`--email ""`)
//! still counts as present.

use std::io::Read as _;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use userguard_core::domain::{CreateUserInput, UpdateUserInput, User};

use crate::{
    cli::{PatchArgs, RecordArgs},
    error::{CliError, CliResult, IntoCli},
};

/// Build a creation record.
pub fn create_input(args: RecordArgs) -> CliResult<CreateUserInput> {
    let mut input: CreateUserInput = match &args.input {
        Some(path) => read_document(path)?,
        None => CreateUserInput::default(),
    };

    if let Some(email) = args.email {
        input.email = email;
    }
    if let Some(first_name) = args.first_name {
        input.first_name = first_name;
    }
    if let Some(last_name) = args.last_name {
        input.last_name = last_name;
    }
    if args.bio.is_some() {
        input.bio = args.bio;
    }
    Ok(input)
}

/// Build an update patch.
pub fn update_input(args: PatchArgs) -> CliResult<UpdateUserInput> {
    let record = args.record;
    let mut patch: UpdateUserInput = match &record.input {
        Some(path) => read_document(path)?,
        None => UpdateUserInput::default(),
    };

    if record.email.is_some() {
        patch.email = record.email;
    }
    if record.first_name.is_some() {
        patch.first_name = record.first_name;
    }
    if record.last_name.is_some() {
        patch.last_name = record.last_name;
    }
    if record.bio.is_some() {
        patch.bio = record.bio;
    }
    if args.active.is_some() {
        patch.is_active = args.active;
    }
    Ok(patch)
}

/// Read a stored user and build the patch for it.
///
/// Both documents may not come from stdin: the second read would see an
/// already drained stream.
pub fn user_and_patch(user: &Path, args: PatchArgs) -> CliResult<(User, UpdateUserInput)> {
    if is_stdin(user) && args.record.input.as_deref().is_some_and(is_stdin) {
        return Err(CliError::InvalidInput {
            message: "--user and --input cannot both read from stdin ('-')".into(),
        });
    }
    let stored = read_document(user)?;
    Ok((stored, update_input(args)?))
}

fn is_stdin(path: &Path) -> bool {
    path == Path::new("-")
}

/// Parse a JSON document from `path`, or from stdin when `path` is `-`.
fn read_document<T: DeserializeOwned>(path: &Path) -> CliResult<T> {
    let (text, origin) = if is_stdin(path) {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .with_cli_context(|| "Failed to read record from stdin")?;
        (text, "stdin".to_owned())
    } else {
        if !path.exists() {
            return Err(CliError::InputNotFound {
                path: path.to_path_buf(),
            });
        }
        let text = std::fs::read_to_string(path)
            .with_cli_context(|| format!("Failed to read '{}'", path.display()))?;
        (text, path.display().to_string())
    };

    debug!(origin = %origin, bytes = text.len(), "Parsing record");
    parse_document(&text, origin)
}

fn parse_document<T: DeserializeOwned>(text: &str, origin: String) -> CliResult<T> {
    serde_json::from_str(text).map_err(|source| CliError::MalformedRecord { origin, source })
}

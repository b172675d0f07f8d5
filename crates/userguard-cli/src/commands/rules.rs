//! `userguard rules` — print the field rules and their limits.

use std::str::FromStr;

use serde_json::json;

use userguard_core::domain::{
    Field, ValidationError,
    constants::{BIO_MAX_LENGTH, EMAIL_PATTERN, NAME_MAX_LENGTH, NAME_MIN_LENGTH},
};
use userguard_core::error::UserGuardError;

use crate::{
    cli::{RulesArgs, RulesFormat},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: RulesArgs, output: OutputManager) -> CliResult<()> {
    let fields = selected_fields(args.field.as_deref())?;

    match args.format {
        RulesFormat::Json => output.json(&rules_document(&fields))?,
        RulesFormat::Table => {
            output.header("Field rules")?;
            output.print("")?;
            for &field in &fields {
                output.print(&format!(
                    "  {:<10} {:<9} {}",
                    field.as_str(),
                    if field == Field::Bio { "optional" } else { "required" },
                    ValidationError::for_field(field).message,
                ))?;
            }
            output.print("")?;
            if fields.contains(&Field::Email) {
                output.print(&format!("  email pattern: {EMAIL_PATTERN}"))?;
            }
            output.print("  Names are trimmed and counted in characters.")?;
            output.print("  Updates only check the fields they carry.")?;
        }
    }
    Ok(())
}

/// Every field, or the one named by `--field`.
fn selected_fields(name: Option<&str>) -> Result<Vec<Field>, UserGuardError> {
    match name {
        None => Ok(Field::ALL.to_vec()),
        Some(name) => Ok(vec![Field::from_str(name)?]),
    }
}

fn rules_document(fields: &[Field]) -> serde_json::Value {
    let mut doc = serde_json::Map::new();
    for &field in fields {
        let limits = match field {
            Field::Email => json!({ "required": true, "pattern": EMAIL_PATTERN }),
            Field::FirstName | Field::LastName => json!({
                "required": true,
                "minLength": NAME_MIN_LENGTH,
                "maxLength": NAME_MAX_LENGTH,
            }),
            Field::Bio => json!({ "required": false, "maxLength": BIO_MAX_LENGTH }),
        };
        let mut rule = limits;
        rule["message"] = json!(ValidationError::for_field(field).message);
        doc.insert(field.as_str().to_owned(), rule);
    }
    serde_json::Value::Object(doc)
}

#[cfg(test)]
mod tests {
    use super::*;

    use userguard_core::error::ErrorCategory;

    #[test]
    fn document_carries_limits() {
        let doc = rules_document(&Field::ALL);
        assert_eq!(doc["firstName"]["minLength"], 2);
        assert_eq!(doc["lastName"]["maxLength"], 50);
        assert_eq!(doc["bio"]["maxLength"], 500);
        assert_eq!(doc["bio"]["required"], false);
        assert_eq!(doc["email"]["pattern"], r"^[^\s@]+@[^\s@]+\.[^\s@]+$");
    }

    #[test]
    fn document_has_message_per_field() {
        let doc = rules_document(&Field::ALL);
        assert_eq!(
            doc["firstName"]["message"],
            "First name must be between 2 and 50 characters"
        );
        assert_eq!(doc.as_object().map(|o| o.len()), Some(4));
    }

    #[test]
    fn field_selection_accepts_any_spelling() {
        assert_eq!(selected_fields(None).unwrap().len(), 4);
        assert_eq!(selected_fields(Some("first-name")).unwrap(), vec![Field::FirstName]);
        assert_eq!(selected_fields(Some("lastName")).unwrap(), vec![Field::LastName]);
    }

    #[test]
    fn unknown_field_is_unrecognized() {
        let err = selected_fields(Some("nickname")).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Unrecognized);
    }
}

//! Generate Android XML layouts from JSON Schema.
//!
//! Each top-level schema property becomes one labeled widget group:
//! strings become text inputs, enums become spinners backed by a
//! string-array resource, arrays become checkbox groups or list views,
//! booleans become checkboxes. The transformation is pure and one-shot;
//! malformed property schemas degrade to empty groups instead of failing.

mod error;
mod mapper;
mod model;
mod pointer;
mod render;

pub use error::LayoutGenError;
pub use mapper::map_fields;
pub use model::{FieldGroup, LayoutModel, StringArrayResource, Widget};

use serde_json::Value;
use std::io::Write;
use std::path::Path;

/// Generate an Android XML layout from a JSON Schema string and write to `writer`.
///
/// The writer can be any type implementing `Write`, such as `File`, `Vec<u8>`, or
/// `Cursor<Vec<u8>>`, enabling easy unit testing without file system interaction.
///
/// # Errors
///
/// Returns `LayoutGenError` if the schema JSON is invalid, the root is not an
/// object with a `properties` object, or writing to the writer fails.
pub fn generate_to_writer<W: Write>(
    schema_json: &str,
    writer: &mut W,
) -> Result<(), LayoutGenError> {
    let schema: Value = serde_json::from_str(schema_json)?;

    if !schema.is_object() {
        return Err(LayoutGenError::GenericError(
            "Root schema must be a JSON object".to_string(),
        ));
    }
    if !schema.get("properties").is_some_and(Value::is_object) {
        return Err(LayoutGenError::GenericError(
            "Root schema must have a \"properties\" object".to_string(),
        ));
    }

    let model: LayoutModel = mapper::map_fields(&schema);
    render::render_to_writer(&model, writer)?;
    Ok(())
}

/// Generate an Android XML layout from a JSON Schema file and write to an output file.
///
/// # Errors
///
/// Returns `LayoutGenError` if reading the input file fails, the schema JSON is
/// invalid, the root is not an object with a `properties` object, or writing
/// the output file fails.
pub fn generate_from_file(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
) -> Result<(), LayoutGenError> {
    let schema_json: String = std::fs::read_to_string(input_path)?;
    let mut output_file: std::fs::File = std::fs::File::create(output_path)?;
    generate_to_writer(&schema_json, &mut output_file)
}

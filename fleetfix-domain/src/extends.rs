use thiserror::Error;

/// Whether an `extends` value points at the workspace base config.
pub fn is_base_reference(extends: &str) -> bool {
    extends.contains("workspace") && extends.contains("base-project.json")
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigShapeError {
    #[error("config root is not a JSON object")]
    NotAnObject,

    #[error("'extends' is not a string")]
    ExtendsNotString,
}

/// Read the `extends` field of a parsed config. Absent and `null` read as empty.
pub fn read_extends(doc: &serde_json::Value) -> Result<&str, ConfigShapeError> {
    let obj = doc.as_object().ok_or(ConfigShapeError::NotAnObject)?;
    match obj.get("extends") {
        None | Some(serde_json::Value::Null) => Ok(""),
        Some(serde_json::Value::String(s)) => Ok(s),
        Some(_) => Err(ConfigShapeError::ExtendsNotString),
    }
}

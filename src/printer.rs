use crate::value::{Tag, Value};
use custom_error::custom_error;

custom_error! {
    #[derive(Clone, PartialEq)]
    pub PrintError

    NoRepresentation{tag: Tag} = "no string representation for type \"{tag}\"",
}

/// Renders `value` as source text. Floats, booleans and functions have no
/// textual form.
pub fn pr_str(value: &Value) -> Result<String, PrintError> {
    match value {
        Value::Symbol(name) => Ok(name.clone()),
        Value::Integer(n) => Ok(n.value().to_string()),
        Value::List(items) => {
            let parts = items
                .iter()
                .map(pr_str)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(format!("({})", parts.join(" ")))
        }
        Value::Nil => Ok("nil".to_owned()),
        Value::String(raw) => Ok(raw.clone()),
        other => Err(PrintError::NoRepresentation { tag: other.tag() }),
    }
}

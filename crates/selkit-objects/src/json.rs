use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use selkit_common::warning::warn_once;

use crate::error::ObjectError;

/// A type that can be rebuilt from an ordered list of JSON values, the way a
/// constructor is called with positional arguments.
///
/// [`from_json`] passes the values of a JSON object in key order. Nothing
/// checks that those keys line up with the constructor's parameters: a
/// document written as `{"height":10,"width":20}` revives a
/// [`Rectangle`](crate::Rectangle) 10 wide and 20 high.
pub trait Positional: Sized {
    /// Type name used in diagnostics.
    const NAME: &'static str;

    /// Number of positional values the constructor consumes.
    const ARITY: usize;

    /// Build the value from its positional arguments.
    ///
    /// `args` never holds more than [`Self::ARITY`] values, but may hold
    /// fewer.
    ///
    /// # Errors
    ///
    /// Returns an error if an argument is missing or has the wrong type.
    fn from_positional(args: &[Value]) -> Result<Self, ObjectError>;
}

/// Serialize `value` to compact JSON.
///
/// Object keys keep the order in which they are encountered.
///
/// # Errors
///
/// Returns [`ObjectError::Json`] if the value cannot be represented as JSON
/// (e.g. a map with non-string keys).
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ObjectError> {
    Ok(serde_json::to_string(value)?)
}

/// Parse `text` and construct a `T` from its values in key-insertion order.
///
/// - An object contributes its values in key order.
/// - An array contributes its items.
/// - Any other JSON value is a single argument.
///
/// Values beyond [`Positional::ARITY`] are dropped with a warning.
///
/// # Errors
///
/// Returns [`ObjectError::Json`] for malformed text, or whatever
/// [`Positional::from_positional`] reports for missing or mistyped values.
pub fn from_json<T: Positional>(text: &str) -> Result<T, ObjectError> {
    let mut values: Vec<Value> = match serde_json::from_str(text)? {
        Value::Object(map) => map.into_iter().map(|(_, value)| value).collect(),
        Value::Array(items) => items,
        other => vec![other],
    };

    if values.len() > T::ARITY {
        let _ = warn_once(
            "Objects",
            &format!(
                "ignoring {} surplus value(s) while reviving {}",
                values.len() - T::ARITY,
                T::NAME
            ),
        );
        values.truncate(T::ARITY);
    }

    T::from_positional(&values)
}

/// Decode the positional argument at `index`.
///
/// # Errors
///
/// [`ObjectError::MissingArgument`] if `args` is too short,
/// [`ObjectError::Argument`] if the value cannot be decoded as `U`.
pub fn positional_arg<U: DeserializeOwned>(args: &[Value], index: usize) -> Result<U, ObjectError> {
    let value = args.get(index).ok_or(ObjectError::MissingArgument {
        index,
        supplied: args.len(),
    })?;
    serde_json::from_value(value.clone()).map_err(|source| ObjectError::Argument { index, source })
}

//! Client function bound to its named arguments.
//!
//! Streaming-service client libraries expose one function per endpoint,
//! each taking a handful of named parameters (`playlist_id`, `limit`,
//! `offset`, ...). [`ApiCall`] keeps the function and the argument map
//! together so the pair can be retried as one unit and logged with
//! credentials redacted.

use crate::error::{CallError, Result};
use core_runtime::logging::redact_if_sensitive;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Named arguments passed to a client function.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallArgs(Map<String, Value>);

impl CallArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from any value that serializes to a JSON object.
    pub fn from_serializable<S: Serialize + ?Sized>(args: &S) -> Result<Self> {
        match serde_json::to_value(args) {
            Ok(Value::Object(map)) => Ok(Self(map)),
            Ok(other) => Err(CallError::InvalidArguments(format!(
                "expected a map of named arguments, got {}",
                json_kind(&other)
            ))),
            Err(e) => Err(CallError::InvalidArguments(e.to_string())),
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    /// Typed access to a required argument.
    pub fn get<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        self.get_opt(name)?
            .ok_or_else(|| CallError::MissingArgument(name.to_string()))
    }

    /// Typed access to an optional argument; absent and `null` map to `None`.
    pub fn get_opt<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>> {
        match self.0.get(name) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(|e| CallError::InvalidArgument {
                    name: name.to_string(),
                    message: e.to_string(),
                }),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `name=value` pairs with credentials replaced by `[REDACTED]`.
    pub fn redacted(&self) -> String {
        self.0
            .iter()
            .map(|(name, value)| {
                let rendered = match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                format!("{}={}", name, redact_if_sensitive(name, &rendered))
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

type BoundFn<'a, T> = Box<dyn FnMut(&CallArgs) -> anyhow::Result<T> + 'a>;

/// A client function plus the arguments it will be called with.
///
/// ```
/// use core_retry::ApiCall;
///
/// let mut call = ApiCall::new("playlist_items", |args| {
///     let limit: u32 = args.get("limit")?;
///     Ok(vec!["track"; limit as usize])
/// })
/// .arg("playlist_id", "37i9dQZF1DXcBWIGoYBM5M")
/// .arg("limit", 2);
///
/// assert_eq!(call.execute().unwrap().len(), 2);
/// ```
pub struct ApiCall<'a, T> {
    endpoint: String,
    args: CallArgs,
    func: BoundFn<'a, T>,
}

impl<'a, T> ApiCall<'a, T> {
    pub fn new<F>(endpoint: impl Into<String>, func: F) -> Self
    where
        F: FnMut(&CallArgs) -> anyhow::Result<T> + 'a,
    {
        Self {
            endpoint: endpoint.into(),
            args: CallArgs::new(),
            func: Box::new(func),
        }
    }

    pub fn arg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.args.insert(name, value);
        self
    }

    /// Merge the fields of a serializable struct into the argument map.
    pub fn args_from<S: Serialize + ?Sized>(mut self, args: &S) -> Result<Self> {
        let CallArgs(extra) = CallArgs::from_serializable(args)?;
        self.args.0.extend(extra);
        Ok(self)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn args(&self) -> &CallArgs {
        &self.args
    }

    pub fn redacted_args(&self) -> String {
        self.args.redacted()
    }

    /// Run the bound function once.
    pub fn execute(&mut self) -> anyhow::Result<T> {
        (self.func)(&self.args)
    }
}

impl<T> fmt::Debug for ApiCall<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiCall")
            .field("endpoint", &self.endpoint)
            .field("args", &self.args.redacted())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct SearchArgs {
        q: String,
        limit: u32,
        market: Option<String>,
    }

    #[test]
    fn test_typed_argument_access() {
        let mut args = CallArgs::new();
        args.insert("limit", 50);
        args.insert("q", "artist:Björk");

        assert_eq!(args.get::<u32>("limit").unwrap(), 50);
        assert_eq!(args.get::<String>("q").unwrap(), "artist:Björk");
        assert_eq!(args.len(), 2);
        assert!(args.contains("q"));
    }

    #[test]
    fn test_missing_and_invalid_arguments() {
        let mut args = CallArgs::new();
        args.insert("limit", "fifty");

        assert!(matches!(
            args.get::<u32>("offset"),
            Err(CallError::MissingArgument(name)) if name == "offset"
        ));
        assert!(matches!(
            args.get::<u32>("limit"),
            Err(CallError::InvalidArgument { name, .. }) if name == "limit"
        ));
    }

    #[test]
    fn test_optional_argument() {
        let mut args = CallArgs::new();
        args.insert("market", Value::Null);

        assert_eq!(args.get_opt::<String>("market").unwrap(), None);
        assert_eq!(args.get_opt::<String>("country").unwrap(), None);
    }

    #[test]
    fn test_args_from_struct() {
        let call = ApiCall::new("search", |_args| Ok(()))
            .args_from(&SearchArgs {
                q: "genre:jazz".to_string(),
                limit: 10,
                market: None,
            })
            .unwrap()
            .arg("offset", 20);

        assert_eq!(call.args().get::<String>("q").unwrap(), "genre:jazz");
        assert_eq!(call.args().get::<u32>("offset").unwrap(), 20);
        assert_eq!(call.args().get_opt::<String>("market").unwrap(), None);
    }

    #[test]
    fn test_args_from_rejects_non_object() {
        let result = CallArgs::from_serializable(&vec![1, 2, 3]);
        assert!(matches!(
            result,
            Err(CallError::InvalidArguments(msg)) if msg.contains("an array")
        ));
    }

    #[test]
    fn test_redacted_args_hide_credentials() {
        let call = ApiCall::new("current_user_playlists", |_args| Ok(()))
            .arg("access_token", "BQDx...")
            .arg("limit", 20)
            .arg("user", "listener@example.com");

        let rendered = call.redacted_args();
        assert_eq!(
            rendered,
            "access_token=[REDACTED], limit=20, user=l***@[REDACTED]"
        );
        assert!(format!("{:?}", call).contains("[REDACTED]"));
    }

    #[test]
    fn test_redacted_args_with_non_ascii_values() {
        let call = ApiCall::new("search", |_args| Ok(()))
            .arg("q", "Édith Piaf @ l'Olympia 1961.")
            .arg("user", "émilie@example.com");

        assert_eq!(
            call.redacted_args(),
            "q=Édith Piaf @ l'Olympia 1961., user=é***@[REDACTED]"
        );
        assert!(format!("{:?}", call).contains("é***@[REDACTED]"));
    }

    #[test]
    fn test_execute_borrows_caller_state() {
        let mut seen = Vec::new();
        {
            let mut call = ApiCall::new("track", |args| {
                seen.push(args.get::<String>("id")?);
                Ok(())
            })
            .arg("id", "4uLU6hMCjMI75M1A2tKUQC");

            call.execute().unwrap();
            call.execute().unwrap();
        }
        assert_eq!(seen.len(), 2);
    }
}

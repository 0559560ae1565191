// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::errors::{NodeError, NodeResult};
use crate::traits::ApplicationMethod;

type Handler = dyn Fn(Vec<Value>, Map<String, Value>) -> Result<Value, String> + Send + Sync;

/// An [`ApplicationMethod`] speaking JSON payloads.
///
/// `args` must be a JSON array and `kwargs` a JSON object; an empty string
/// stands for `[]` or `{}` respectively. The handler's result is returned as
/// JSON text. A handler `Err` becomes [`NodeError::MethodFailed`].
///
/// ```
/// use processor_rpc::registry::JsonMethod;
/// use serde_json::json;
///
/// let deposit = JsonMethod::new("deposit", |args, _kwargs| {
///     let amount = args.first().and_then(|v| v.as_i64()).ok_or("amount required")?;
///     Ok(json!({ "balance": amount }))
/// });
/// # let _ = deposit;
/// ```
pub struct JsonMethod {
    name: String,
    handler: Box<Handler>,
}

impl JsonMethod {
    pub fn new<F>(name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(Vec<Value>, Map<String, Value>) -> Result<Value, String> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            handler: Box::new(handler),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn invalid(&self, reason: impl Into<String>) -> NodeError {
        NodeError::InvalidArguments {
            method_name: self.name.clone(),
            reason: reason.into(),
        }
    }

    fn decode_args(&self, args: &str) -> NodeResult<Vec<Value>> {
        if args.trim().is_empty() {
            return Ok(Vec::new());
        }
        match serde_json::from_str::<Value>(args) {
            Ok(Value::Array(values)) => Ok(values),
            Ok(other) => Err(self.invalid(format!("args must be a JSON array, got {}", other))),
            Err(e) => Err(self.invalid(format!("args are not JSON: {}", e))),
        }
    }

    fn decode_kwargs(&self, kwargs: &str) -> NodeResult<Map<String, Value>> {
        if kwargs.trim().is_empty() {
            return Ok(Map::new());
        }
        match serde_json::from_str::<Value>(kwargs) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(other) => Err(self.invalid(format!("kwargs must be a JSON object, got {}", other))),
            Err(e) => Err(self.invalid(format!("kwargs are not JSON: {}", e))),
        }
    }
}

#[async_trait]
impl ApplicationMethod for JsonMethod {
    async fn invoke(&self, args: &str, kwargs: &str) -> NodeResult<String> {
        let args = self.decode_args(args)?;
        let kwargs = self.decode_kwargs(kwargs)?;

        let result = (self.handler)(args, kwargs).map_err(|reason| NodeError::MethodFailed {
            method_name: self.name.clone(),
            reason,
        })?;

        Ok(serde_json::to_string(&result)?)
    }
}

//! Fixed arithmetic tool registry: multiply, add, divide.
//!
//! The registry is built once at construction from exactly three entries and
//! is immutable for the life of the process. Arguments may arrive as JSON
//! numbers or as string-encoded integers ("5"); a typed decoding step converts
//! them to `i64` before dispatch.
//!
//! Note: `add` computes `a - b`. This mirrors the behavior of the template the
//! tool set was ported from; kept as-is so compatibility tests hold. See
//! DESIGN.md.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use super::{ToolCallContent, ToolSource, ToolSourceError, ToolSpec};

/// Multiplies two integers.
pub fn multiply(a: i64, b: i64) -> i64 {
    a * b
}

/// Named add, computes `a - b` (behavior preserved from the source template).
pub fn add(a: i64, b: i64) -> i64 {
    a - b
}

/// Divides `a` by `b` as floating point. `b == 0` is rejected before this is
/// called; see `ArithmeticToolSource::call_tool`.
pub fn divide(a: i64, b: i64) -> f64 {
    a as f64 / b as f64
}

/// Coerces one argument value to `i64`.
///
/// Accepts JSON integers and string-encoded integers; anything else is a
/// typed `InvalidInput` error.
fn coerce_int(name: &str, value: &Value) -> Result<i64, ToolSourceError> {
    match value {
        Value::Number(n) => n.as_i64().ok_or_else(|| {
            ToolSourceError::InvalidInput(format!("{}: not an integer: {}", name, n))
        }),
        Value::String(s) => s.trim().parse::<i64>().map_err(|_| {
            ToolSourceError::InvalidInput(format!("{}: not an integer: {:?}", name, s))
        }),
        other => Err(ToolSourceError::InvalidInput(format!(
            "{}: expected integer, got {}",
            name, other
        ))),
    }
}

/// Extracts and coerces the two-argument pair `(a, b)` from a JSON object.
fn decode_pair(arguments: &Value) -> Result<(i64, i64), ToolSourceError> {
    let obj = arguments.as_object().ok_or_else(|| {
        ToolSourceError::InvalidInput(format!("expected argument object, got {}", arguments))
    })?;
    let a = obj
        .get("a")
        .ok_or_else(|| ToolSourceError::InvalidInput("missing argument: a".into()))?;
    let b = obj
        .get("b")
        .ok_or_else(|| ToolSourceError::InvalidInput("missing argument: b".into()))?;
    Ok((coerce_int("a", a)?, coerce_int("b", b)?))
}

type ArithmeticFn = fn(i64, i64) -> Result<String, ToolSourceError>;

fn run_multiply(a: i64, b: i64) -> Result<String, ToolSourceError> {
    Ok(multiply(a, b).to_string())
}

fn run_add(a: i64, b: i64) -> Result<String, ToolSourceError> {
    Ok(add(a, b).to_string())
}

fn run_divide(a: i64, b: i64) -> Result<String, ToolSourceError> {
    if b == 0 {
        return Err(ToolSourceError::DivisionByZero);
    }
    Ok(divide(a, b).to_string())
}

/// Fixed registry of the three arithmetic tools.
///
/// Built once at process start and injected into `CallModelNode`; the mapping
/// never changes afterwards.
///
/// **Interaction**: Implements `ToolSource`; `list_tools()` feeds
/// `ChatOllama::with_tools`, `call_tool()` is dispatched by CallModelNode.
pub struct ArithmeticToolSource {
    registry: HashMap<&'static str, ArithmeticFn>,
}

impl Default for ArithmeticToolSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ArithmeticToolSource {
    /// Builds the registry with its three fixed entries.
    pub fn new() -> Self {
        let mut registry: HashMap<&'static str, ArithmeticFn> = HashMap::new();
        registry.insert("multiply", run_multiply as ArithmeticFn);
        registry.insert("add", run_add as ArithmeticFn);
        registry.insert("divide", run_divide as ArithmeticFn);
        Self { registry }
    }

    fn spec(name: &str, description: &str) -> ToolSpec {
        ToolSpec {
            name: name.to_string(),
            description: Some(description.to_string()),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "a": { "type": "integer" },
                    "b": { "type": "integer" }
                },
                "required": ["a", "b"]
            }),
        }
    }
}

#[async_trait]
impl ToolSource for ArithmeticToolSource {
    async fn list_tools(&self) -> Result<Vec<ToolSpec>, ToolSourceError> {
        Ok(vec![
            Self::spec("add", "Add two integers."),
            Self::spec("multiply", "Multiply two integers."),
            Self::spec("divide", "Divide two integers."),
        ])
    }

    async fn call_tool(
        &self,
        name: &str,
        arguments: Value,
    ) -> Result<ToolCallContent, ToolSourceError> {
        let f = self
            .registry
            .get(name)
            .ok_or_else(|| ToolSourceError::NotFound(name.to_string()))?;
        let (a, b) = decode_pair(&arguments)?;
        debug!(tool = name, a = a, b = b, "dispatching arithmetic tool");
        let text = f(a, b)?;
        Ok(ToolCallContent { text })
    }
}

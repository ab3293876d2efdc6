//! Hook call payloads and handler results.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Arguments of one hook call, keyed by parameter name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HookPayload {
    /// Name of the hook being called.
    pub hook: String,
    /// Call arguments keyed by parameter name.
    pub data: HashMap<String, serde_json::Value>,
    /// Timestamp of the call.
    pub timestamp: DateTime<Utc>,
}

impl HookPayload {
    /// Creates a payload with no arguments.
    pub fn new(hook: impl Into<String>) -> Self {
        Self {
            hook: hook.into(),
            data: HashMap::new(),
            timestamp: Utc::now(),
        }
    }

    /// Inserts an argument value.
    pub fn with_data(mut self, key: &str, value: serde_json::Value) -> Self {
        self.data.insert(key.to_string(), value);
        self
    }

    /// Inserts a string argument.
    pub fn with_string(self, key: &str, value: &str) -> Self {
        self.with_data(key, serde_json::json!(value))
    }

    /// Inserts an integer argument.
    pub fn with_int(self, key: &str, value: i64) -> Self {
        self.with_data(key, serde_json::json!(value))
    }

    /// Inserts a boolean argument.
    pub fn with_bool(self, key: &str, value: bool) -> Self {
        self.with_data(key, serde_json::json!(value))
    }

    /// Gets an argument by name.
    pub fn get_data(&self, key: &str) -> Option<&serde_json::Value> {
        self.data.get(key)
    }

    /// Gets a string argument.
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.data.get(key).and_then(|v| v.as_str())
    }

    /// Gets an i64 argument.
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.data.get(key).and_then(|v| v.as_i64())
    }

    /// Gets a bool argument.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.data.get(key).and_then(|v| v.as_bool())
    }
}

/// Result returned from one hook implementation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HookResult {
    /// Plugin that produced this result.
    pub plugin_id: String,
    /// Optional value returned by the implementation.
    pub output: Option<serde_json::Value>,
}

impl HookResult {
    /// Creates a result with no output.
    pub fn none(plugin_id: &str) -> Self {
        Self {
            plugin_id: plugin_id.to_string(),
            output: None,
        }
    }

    /// Creates a result carrying an output value.
    pub fn with_output(plugin_id: &str, output: serde_json::Value) -> Self {
        Self {
            plugin_id: plugin_id.to_string(),
            output: Some(output),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_accessors() {
        let payload = HookPayload::new("task_stop")
            .with_bool("failed", true)
            .with_int("exit_code", 2)
            .with_string("task", "push");

        assert_eq!(payload.hook, "task_stop");
        assert_eq!(payload.get_bool("failed"), Some(true));
        assert_eq!(payload.get_i64("exit_code"), Some(2));
        assert_eq!(payload.get_string("task"), Some("push"));
        assert!(payload.get_data("missing").is_none());
    }

    #[test]
    fn test_accessor_type_mismatch_is_none() {
        let payload = HookPayload::new("task_stop").with_string("failed", "yes");
        assert_eq!(payload.get_bool("failed"), None);
    }
}

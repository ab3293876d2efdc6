//! Prelude for convenient imports.

pub use crate::hooks::definitions::{HookPayload, HookResult};
pub use crate::hooks::registry::HookHandler;
pub use crate::hooks::spec::{HookParam, HookSpec};
pub use crate::registry::{Plugin, PluginInfo};
pub use crate::traits::ClosureHandler;

pub use crate::{hook_payload, hookspec, plugin_info};

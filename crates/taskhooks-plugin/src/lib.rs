//! # taskhooks-plugin
//!
//! Plugin framework for taskhooks. Provides:
//!
//! - Hook specifications carrying their signature, doc text and source location
//! - Hook registry with priority-ordered implementations
//! - Synchronous hook dispatcher
//! - Plugin lifecycle management (load, unload) and a scoped plugin session
//! - Task context firing the `task_start` / `task_stop` lifecycle hooks

pub mod hooks;
pub mod lifecycle;
pub mod macros;
pub mod manager;
pub mod prelude;
pub mod registry;
pub mod traits;

pub use hooks::definitions::{HookPayload, HookResult};
pub use hooks::dispatcher::HookDispatcher;
pub use hooks::registry::{HookHandler, HookRegistry};
pub use hooks::spec::{HookParam, HookSpec, SourceLocation};
pub use manager::{PluginManager, PluginSession};
pub use registry::{Plugin, PluginInfo, PluginRegistry};

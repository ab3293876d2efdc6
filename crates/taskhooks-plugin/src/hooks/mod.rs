//! Hook system: specifications, registry, dispatcher and payload definitions.

pub mod definitions;
pub mod dispatcher;
pub mod registry;
pub mod spec;

pub use definitions::{HookPayload, HookResult};
pub use dispatcher::HookDispatcher;
pub use registry::{HookHandler, HookRegistry};
pub use spec::{HookParam, HookSpec, SourceLocation};

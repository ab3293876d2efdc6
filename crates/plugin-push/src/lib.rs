//! Content push task library for taskhooks.
//!
//! Declares the hooks fired while pushing content to repositories and
//! registers implementations of the task lifecycle hooks.

pub mod hooks;
pub mod hookspecs;
pub mod plugin;

pub use plugin::PushPlugin;

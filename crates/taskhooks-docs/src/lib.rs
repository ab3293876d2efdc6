//! # taskhooks-docs
//!
//! Builds the hook reference page: enumerates the hook specifications of a
//! loaded plugin session, orders them by module priority and source position,
//! renders each one as a `py:function` reST block and writes the page.

pub mod build;
pub mod dedent;
pub mod enumerate;
pub mod render;
pub mod sort;
pub mod writer;

pub use build::{DocBuild, build_docs};
pub use enumerate::collect_hookspecs;
pub use render::{render_all, render_hookspec};
pub use sort::{ModulePriorityTable, NamespaceRules, SortKey, UNRANKED_PRIORITY, sort_hookspecs};
pub use writer::write_docs;

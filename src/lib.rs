//! Composebook - component showcase core
//!
//! Declare component demos as data, browse them from a registry, and edit
//! their props live through generated controls. Rendering is supplied by the
//! host; see [`storybook`] for the core types and `src/bin/storybook.rs` for
//! a terminal host.

pub mod config;
pub mod error;
pub mod logging;
pub mod stories;
pub mod storybook;

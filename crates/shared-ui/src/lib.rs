//! Component kit for the hospital client. Every component links its own
//! stylesheet, so importing a component is enough to style it.

pub mod components;

pub use components::*;

//! Rust code generation modules.

pub mod nodes;

pub use nodes::NodeGenerator;

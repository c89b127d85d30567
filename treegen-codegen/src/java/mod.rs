//! Java code generation modules.

pub mod hierarchy;
pub mod variants;

pub use hierarchy::HierarchyGenerator;
pub use variants::VariantGenerator;

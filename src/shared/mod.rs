//! Gemeinsam genutzte Typen zwischen App- und UI-Layer.

pub mod options;

pub use options::AppOptions;

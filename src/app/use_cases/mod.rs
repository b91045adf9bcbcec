//! Use-Cases der Application-Layer-Orchestrierung.

pub mod add_point;
pub mod feature_detail;
pub mod notifications;
pub mod viewport;

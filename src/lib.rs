//! Indirection resolution and primitive extraction over reflective value handles.

/// Kinds, type descriptors, value handles, origin resolution, and extraction.
pub mod reflect;

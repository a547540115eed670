//! Operation-centric modules for AVX2 compute primitives
//!
//! Each operation is organized in its own module with type-specific implementations

pub mod elementwise;
pub mod sum;

// Re-export the operation traits for convenience
pub use elementwise::Elementwise;
pub use sum::Sum;

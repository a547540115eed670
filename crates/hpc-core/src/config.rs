//! Run-time configuration for kernel calls
//!
//! Compile-time choices (SIMD backend, rayon support) live in Cargo features;
//! `KernelConfig` carries the knobs that can change per deployment.

use crate::error::{Error, Result};
use crate::workspace::DEFAULT_ALIGNMENT;
use serde::{Deserialize, Serialize};

/// Default number of elements (or partitions) before a parallel engine splits work
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1 << 16;

/// Default chunk length handed to each parallel task
pub const DEFAULT_CHUNK_SIZE: usize = 1 << 14;

/// Configuration shared by the kernels and the call boundary
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KernelConfig {
    /// Alignment of marshalled buffers, in bytes
    pub alignment: usize,
    /// Inputs smaller than this run on the calling thread even with a parallel engine
    pub parallel_threshold: usize,
    /// Elements (or partitions) per parallel task
    pub chunk_size: usize,
    /// Size of a dedicated thread pool; `None` uses the global pool
    pub threads: Option<usize>,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            alignment: DEFAULT_ALIGNMENT,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            chunk_size: DEFAULT_CHUNK_SIZE,
            threads: None,
        }
    }
}

impl KernelConfig {
    /// Parse a JSON document, filling missing fields with defaults, then validate it
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the buffer alignment
    pub fn with_alignment(mut self, alignment: usize) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set the parallel threshold
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Set the chunk size for parallel tasks
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Request a dedicated pool of `threads` workers
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Worker count a parallel engine built from this config would use
    pub fn effective_threads(&self) -> usize {
        self.threads.unwrap_or_else(num_cpus::get)
    }

    /// Check every field is usable
    pub fn validate(&self) -> Result<()> {
        if !self.alignment.is_power_of_two() || self.alignment < std::mem::align_of::<f64>() {
            return Err(Error::invalid_argument(format!(
                "alignment {} must be a power of two and at least {}",
                self.alignment,
                std::mem::align_of::<f64>()
            )));
        }
        if self.chunk_size == 0 {
            return Err(Error::invalid_argument("chunk_size must be at least 1"));
        }
        if self.threads == Some(0) {
            return Err(Error::invalid_argument("threads must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = KernelConfig::default();
        assert_eq!(config.alignment, 64);
        assert_eq!(config.parallel_threshold, 65_536);
        assert_eq!(config.chunk_size, 16_384);
        assert!(config.threads.is_none());
        assert!(config.validate().is_ok());
        assert!(config.effective_threads() >= 1);
    }

    #[test]
    fn test_builder_methods() {
        let config = KernelConfig::default()
            .with_alignment(32)
            .with_parallel_threshold(10)
            .with_chunk_size(4)
            .with_threads(3);
        assert_eq!(config.alignment, 32);
        assert_eq!(config.parallel_threshold, 10);
        assert_eq!(config.chunk_size, 4);
        assert_eq!(config.effective_threads(), 3);
    }

    #[test]
    fn test_from_json_partial() {
        let config = KernelConfig::from_json_str(r#"{"alignment": 128}"#).unwrap();
        assert_eq!(config.alignment, 128);
        assert_eq!(config.chunk_size, DEFAULT_CHUNK_SIZE);
    }

    #[test]
    fn test_from_json_rejects_invalid() {
        assert!(matches!(
            KernelConfig::from_json_str(r#"{"alignment": 48}"#),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            KernelConfig::from_json_str(r#"{"chunk_size": 0}"#),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            KernelConfig::from_json_str(r#"{"threads": 0}"#),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            KernelConfig::from_json_str("{not json"),
            Err(Error::Serialization(_))
        ));
    }

    #[test]
    fn test_round_trip() {
        let config = KernelConfig::default().with_threads(2);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(KernelConfig::from_json_str(&json).unwrap(), config);
    }
}

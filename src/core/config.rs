/*!
 * Collection Configuration
 *
 * Default sizing for containers built through `from_config`
 */

use super::errors::{Result, RuntimeError};
use super::limits::{
    BYTE_BUFFER_INIT_CAPACITY, DYNAMIC_ARRAY_INIT_CAPACITY, HASH_TABLE_INIT_BUCKETS,
    RING_BUFFER_INIT_CAPACITY,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Container sizing configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionConfig {
    /// Initial (and minimum) dynamic array capacity, in elements
    pub dynamic_array_initial_capacity: usize,
    /// Ring buffer capacity, in items (0 selects the built-in default)
    pub ring_buffer_capacity: usize,
    /// Byte buffer growth baseline, in bytes
    pub byte_buffer_initial_capacity: usize,
    /// Hash table bucket count (0 selects the built-in default)
    pub hash_table_buckets: usize,
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            dynamic_array_initial_capacity: DYNAMIC_ARRAY_INIT_CAPACITY,
            ring_buffer_capacity: RING_BUFFER_INIT_CAPACITY,
            byte_buffer_initial_capacity: BYTE_BUFFER_INIT_CAPACITY,
            hash_table_buckets: HASH_TABLE_INIT_BUCKETS,
        }
    }
}

impl CollectionConfig {
    /// Small footprint for short-lived or numerous containers
    pub const fn compact() -> Self {
        Self {
            dynamic_array_initial_capacity: 16,
            ring_buffer_capacity: 64,
            byte_buffer_initial_capacity: 256,
            hash_table_buckets: 32,
        }
    }

    /// Large footprint for bulk workloads
    pub const fn large() -> Self {
        Self {
            dynamic_array_initial_capacity: 16 * 1024,
            ring_buffer_capacity: 16 * 1024,
            byte_buffer_initial_capacity: 64 * 1024,
            hash_table_buckets: 4096,
        }
    }

    /// Load overrides from the environment
    ///
    /// Environment variables:
    /// - RT_DARRAY_INIT_CAP
    /// - RT_RBUFFER_CAP
    /// - RT_FBUFFER_INIT_CAP
    /// - RT_HASHTABLE_BUCKETS
    ///
    /// Missing or unparsable values keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let read = |name: &str, default: usize| -> usize {
            match lookup(name) {
                Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                    warn!(variable = name, value = %raw, "ignoring invalid collection setting");
                    default
                }),
                None => default,
            }
        };

        Self {
            dynamic_array_initial_capacity: read(
                "RT_DARRAY_INIT_CAP",
                defaults.dynamic_array_initial_capacity,
            ),
            ring_buffer_capacity: read("RT_RBUFFER_CAP", defaults.ring_buffer_capacity),
            byte_buffer_initial_capacity: read(
                "RT_FBUFFER_INIT_CAP",
                defaults.byte_buffer_initial_capacity,
            ),
            hash_table_buckets: read("RT_HASHTABLE_BUCKETS", defaults.hash_table_buckets),
        }
    }

    /// Reject settings no container can be built from
    pub fn validate(&self) -> Result<()> {
        if self.dynamic_array_initial_capacity == 0 {
            return Err(RuntimeError::Configuration(
                "dynamic_array_initial_capacity must be non-zero".into(),
            ));
        }
        if self.byte_buffer_initial_capacity == 0 {
            return Err(RuntimeError::Configuration(
                "byte_buffer_initial_capacity must be non-zero".into(),
            ));
        }
        Ok(())
    }
}

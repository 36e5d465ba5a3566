/*!
 * Container Limits and Constants
 *
 * Centralized location for default capacities, growth factors and
 * thresholds used by the container subsystem.
 *
 * ## Conventions
 * - Capacities of element containers are counted in elements
 * - Byte buffer capacities are counted in bytes
 * - Performance-related constants are marked with [PERF]
 */

// =============================================================================
// ARRAY LIMITS
// =============================================================================

/// Initial capacity of a dynamic array (elements)
/// Capacity only ever moves between power-of-two multiples of this value
pub const DYNAMIC_ARRAY_INIT_CAPACITY: usize = 1024;

/// Dynamic array growth factor on overflow
/// [PERF] Amortized O(1) push
pub const DYNAMIC_ARRAY_GROWTH_FACTOR: usize = 2;

/// Occupancy divisor that triggers a shrink (count <= capacity / 4)
/// [PERF] Keeps utilization >= 25% without grow/shrink thrashing at the boundary
pub const DYNAMIC_ARRAY_SHRINK_DIVISOR: usize = 4;

// =============================================================================
// RING BUFFER LIMITS
// =============================================================================

/// Ring buffer capacity used when zero items are requested
pub const RING_BUFFER_INIT_CAPACITY: usize = 1024;

// =============================================================================
// BYTE BUFFER LIMITS
// =============================================================================

/// Baseline capacity doubled from when a byte buffer first grows (1KB)
pub const BYTE_BUFFER_INIT_CAPACITY: usize = 1024;

// =============================================================================
// HASH TABLE LIMITS
// =============================================================================

/// Bucket count used when zero buckets are requested
pub const HASH_TABLE_INIT_BUCKETS: usize = 256;

/// Load factor above which a rehash is advisable
/// Advisory only: tables never rehash on their own
pub const HASH_TABLE_LOAD_FACTOR_MAX: f64 = 0.75;

/// Load factor below which a table is considered oversized
pub const HASH_TABLE_LOAD_FACTOR_MIN: f64 = 0.25;

/// djb2 seed
pub const DJB2_SEED: usize = 5381;

/// djb2 multiplier (hash * 33 + c)
pub const DJB2_MULTIPLIER: usize = 33;

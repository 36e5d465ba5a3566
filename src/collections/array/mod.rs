/*!
 * Arrays
 *
 * - Fixed array: capacity chosen once, overflow rejected
 * - Dynamic array: doubles on overflow, halves at 25% occupancy
 */

mod dynamic;
mod fixed;

pub use dynamic::DynamicArray;
pub use fixed::FixedArray;

//! Error-category flags for an image-comparison test harness.
//!
//! Running a rendering test case and comparing its output against reference images
//! can go wrong in several distinct ways at once: the GPU context may be missing,
//! the stored expectations may be absent or mismatched, writing a fresh reference
//! image may fail, and so on. [`ErrorKind`] is the closed list of those categories,
//! and [`ErrorSet`] is a set of zero or more of them — cheap to copy and combine,
//! suitable for accumulating everything that went wrong for one test case and then
//! rendering the result into a log line or summary report.
//!
//! Sets are combined with ordinary set algebra: `|` for union, `-` for difference,
//! [`ErrorSet::contains`] for membership. All operations are allocation-free.

#![no_std]
// Crate-specific lint settings. (General settings can be found in the package manifest.)
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate alloc;

mod kind;
pub use kind::ErrorKind;

mod set;
pub use set::ErrorSet;

//! Domain types for secret reconstruction
//!
//! This module contains validated newtypes and value types:
//! - [`Threshold`] - Number of points used for interpolation (k >= 1)
//! - [`ShareCount`] - Total number of shares in a record (n >= 1)
//! - [`Keys`] - Validated share count and threshold pair
//! - [`Radix`] - Base of an encoded share value (2..=36)
//! - [`Point`] - A decoded share `(x, y)`
//! - [`PointSet`] - Exactly k points with distinct x-coordinates

mod config;
mod point;
mod point_set;
mod radix;
mod share_count;
mod threshold;

pub use config::Keys;
pub use point::Point;
pub use point_set::PointSet;
pub use radix::Radix;
pub use share_count::ShareCount;
pub use threshold::Threshold;

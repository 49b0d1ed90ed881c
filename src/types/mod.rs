pub mod constants;
pub mod error;
pub mod geometry;
pub mod info;
pub mod scan;

pub use constants::*;
pub use error::ScanMapError;
pub use geometry::SensorPose;
pub use info::GridInfo;
pub use scan::{FilteredScan, LaserScan, RangeReading, SkipReason};

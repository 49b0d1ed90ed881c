pub mod avoidance;
pub mod grid;
pub mod loaders;
pub mod mapper;
pub mod pipeline;
pub mod pose;
pub mod scan_filter;
pub mod types;
pub mod visualization;

pub use avoidance::{ControllerState, Velocity};
pub use grid::EvidenceGrid;
pub use loaders::MapperParams;
pub use mapper::{GridMapper, MapperUpdate};
pub use pipeline::{ScanOutcome, ScanPipeline};
pub use pose::{PoseLookupError, PoseSource};
pub use scan_filter::RangeFilter;
pub use types::{GridInfo, LaserScan, ScanMapError, SensorPose};

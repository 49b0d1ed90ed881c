//! The per-scan entry point.
//!
//! One synchronous pass per scan: mask + obstacle test feed the controller,
//! and independently the validated rays plus a fresh pose feed the mapper.
//! A pipeline that exists is initialized: construction takes the full
//! parameter set and fails rather than producing a half-configured value.

use log::debug;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::avoidance::{self, ControllerState, Velocity};
use crate::grid::EvidenceGrid;
use crate::loaders::MapperParams;
use crate::mapper::{GridMapper, MapperUpdate};
use crate::pose::PoseSource;
use crate::scan_filter::{self, RangeFilter};
use crate::types::scan::{FilteredScan, LaserScan};
use crate::types::ScanMapError;

/// Everything one scan produces.
#[derive(Debug)]
pub struct ScanOutcome {
    /// Command for the platform this cycle.
    pub command: Velocity,
    /// Scan to republish (masked, near-field `range_max`).
    pub republish: FilteredScan,
    /// Grid update summary, or `None` when the pose lookup failed and the
    /// grid was left untouched.
    pub grid_update: Option<MapperUpdate>,
}

pub struct ScanPipeline<P, R = SmallRng> {
    params: MapperParams,
    filter: RangeFilter<R>,
    mapper: GridMapper,
    state: ControllerState,
    pose_source: P,
}

impl<P: PoseSource> ScanPipeline<P, SmallRng> {
    pub fn new(params: MapperParams, pose_source: P) -> Result<Self, ScanMapError> {
        params.validate()?;
        let filter = RangeFilter::new(params.random_downsample);
        Self::from_parts(params, filter, pose_source)
    }
}

impl<P: PoseSource, R: Rng> ScanPipeline<P, R> {
    /// Build with an injected random source, for deterministic tests.
    pub fn with_rng(params: MapperParams, pose_source: P, rng: R) -> Result<Self, ScanMapError> {
        params.validate()?;
        let filter = RangeFilter::with_rng(params.random_downsample, rng);
        Self::from_parts(params, filter, pose_source)
    }

    fn from_parts(
        params: MapperParams,
        filter: RangeFilter<R>,
        pose_source: P,
    ) -> Result<Self, ScanMapError> {
        let mapper = GridMapper::new(params.grid_info()?);
        Ok(Self {
            params,
            filter,
            mapper,
            state: ControllerState::default(),
            pose_source,
        })
    }

    /// Process one scan: emit a command, build the republished scan, and
    /// update the grid if a pose is available.
    pub fn process_scan(&mut self, scan: &LaserScan) -> ScanOutcome {
        let republish = scan_filter::republish(scan);

        let (next, command) = avoidance::step_scan(self.state, &republish);
        self.state = next;

        // The grid path needs a fresh pose; the controller path above does
        // not, so a failed lookup only skips this block.
        let frames = &self.params.frames;
        let grid_update = match self.pose_source.lookup(&frames.fixed, &frames.sensor) {
            Ok(pose) => {
                let rays = self.filter.grid_rays(scan);
                Some(self.mapper.apply_scan(&pose, &rays))
            }
            Err(err) => {
                debug!("pose lookup failed, skipping grid update: {}", err);
                None
            }
        };

        ScanOutcome {
            command,
            republish,
            grid_update,
        }
    }

    /// Read-only view of the evidence grid for renderers.
    pub fn grid(&self) -> &EvidenceGrid {
        self.mapper.grid()
    }

    pub fn controller_state(&self) -> ControllerState {
        self.state
    }

    pub fn params(&self) -> &MapperParams {
        &self.params
    }
}

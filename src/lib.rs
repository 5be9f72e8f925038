pub mod detection;
pub mod models;
pub mod pipeline;

pub use detection::{
    BlurParams, BlurType, ChannelRange, FilterCriteria, ResizeParams, RgbThreshold,
    extract_contours, filter_contours,
};
pub use models::{BoundingBox, Contour};
pub use pipeline::{DebugConfig, Pipeline, PipelineState};

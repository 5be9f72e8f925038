pub mod contours;
pub mod filter;
pub mod preprocessing;
pub mod threshold;

pub use contours::extract_contours;
pub use filter::{FilterCriteria, filter_contours};
pub use preprocessing::{BlurParams, BlurType, ResizeParams};
pub use threshold::{ChannelRange, RgbThreshold};

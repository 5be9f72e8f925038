use image::{GrayImage, Luma, RgbImage};

/// Closed [low, high] range for one color channel.
#[derive(Debug, Clone, Copy)]
pub struct ChannelRange {
    pub low: f64,
    pub high: f64,
}

impl ChannelRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn contains(&self, value: u8) -> bool {
        let v = value as f64;
        v >= self.low && v <= self.high
    }
}

/// Per-channel ranges for the RGB threshold stage.
#[derive(Debug, Clone, Copy)]
pub struct RgbThreshold {
    pub red: ChannelRange,
    pub green: ChannelRange,
    pub blue: ChannelRange,
}

/// Threshold each channel independently against its range.
///
/// A mask pixel is on (255) iff every channel of the source pixel lies
/// within its configured range.
pub fn rgb_threshold(img: &RgbImage, ranges: &RgbThreshold) -> GrayImage {
    GrayImage::from_fn(img.width(), img.height(), |x, y| {
        let px = img.get_pixel(x, y);
        let on = ranges.red.contains(px[0])
            && ranges.green.contains(px[1])
            && ranges.blue.contains(px[2]);
        Luma([if on { 255 } else { 0 }])
    })
}

use image::imageops::{self, FilterType};
use image::{GrayImage, Luma, Rgb, RgbImage};
use imageproc::filter::{bilateral_filter, box_filter, gaussian_blur_f32, median_filter};

/// Target frame size and interpolation for the resize stage.
#[derive(Debug, Clone, Copy)]
pub struct ResizeParams {
    pub width: u32,
    pub height: u32,
    pub filter: FilterType,
}

/// Scale the frame to a fixed working resolution.
pub fn resize(img: &RgbImage, params: &ResizeParams) -> RgbImage {
    imageops::resize(img, params.width, params.height, params.filter)
}

/// Smoothing kernel selection for the blur stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlurType {
    Box,
    Gaussian,
    Median,
    Bilateral,
}

#[derive(Debug, Clone, Copy)]
pub struct BlurParams {
    pub kind: BlurType,
    pub radius: f64,
}

/// Blur the frame with the selected kernel.
///
/// The radius rounds to the nearest whole pixel and maps to an odd kernel
/// size: 2r+1 for box and median, ~6r+1 for Gaussian (sigma = r), and for
/// bilateral r doubles as both sigma-color and sigma-space with a window
/// of 2*round(1.5r)+1. A radius that rounds to zero leaves the frame
/// unchanged.
pub fn blur(img: &RgbImage, params: &BlurParams) -> RgbImage {
    let radius = (params.radius + 0.5) as u32;
    if radius == 0 {
        return img.clone();
    }

    match params.kind {
        BlurType::Box => per_channel(img, |plane| box_filter(plane, radius, radius)),
        BlurType::Gaussian => gaussian_blur_f32(img, radius as f32),
        BlurType::Median => median_filter(img, radius, radius),
        BlurType::Bilateral => {
            let window = 2 * ((1.5 * radius as f32).round() as u32) + 1;
            per_channel(img, |plane| {
                bilateral_filter(plane, window, radius as f32, radius as f32)
            })
        }
    }
}

/// Run a single-channel filter over each RGB plane and reassemble.
fn per_channel<F>(img: &RgbImage, f: F) -> RgbImage
where
    F: Fn(&GrayImage) -> GrayImage,
{
    let (width, height) = img.dimensions();

    let planes: Vec<GrayImage> = (0..3)
        .map(|c| GrayImage::from_fn(width, height, |x, y| Luma([img.get_pixel(x, y)[c]])))
        .map(|plane| f(&plane))
        .collect();

    RgbImage::from_fn(width, height, |x, y| {
        Rgb([
            planes[0].get_pixel(x, y)[0],
            planes[1].get_pixel(x, y)[0],
            planes[2].get_pixel(x, y)[0],
        ])
    })
}

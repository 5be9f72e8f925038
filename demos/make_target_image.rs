use image::{Rgb, RgbImage};

fn main() {
    let mut img = RgbImage::new(640, 480);

    // Dark gray backdrop, well outside the threshold ranges
    for pixel in img.pixels_mut() {
        *pixel = Rgb([40, 40, 40]);
    }

    // One rectangular target in the tuned color band
    for y in 120..240 {
        for x in 200..440 {
            img.put_pixel(x, y, Rgb([126, 128, 98]));
        }
    }

    // A small speckle that the area criterion should drop
    for y in 400..403 {
        for x in 50..53 {
            img.put_pixel(x, y, Rgb([126, 128, 98]));
        }
    }

    img.save("target_image.png").unwrap();
    println!("Created target_image.png (640x480, one port target plus noise)");
}

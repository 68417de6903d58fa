//! Pixel stages of the icon: background key, circle mask and compositing.
use image::{imageops, GrayImage, Luma, Rgba, RgbaImage};

/// A channel must be strictly above this for a pixel to count as background.
pub const BACKGROUND_THRESHOLD: u8 = 240;

const TRANSPARENT_WHITE: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// True when red, green and blue all exceed [`BACKGROUND_THRESHOLD`].
/// Alpha is not considered.
pub fn is_background(pixel: &Rgba<u8>) -> bool {
    pixel.0[..3].iter().all(|c| *c > BACKGROUND_THRESHOLD)
}

/// Replaces every background pixel with transparent white.
pub fn strip_background(img: &mut RgbaImage) {
    for pixel in img.pixels_mut() {
        if is_background(pixel) {
            *pixel = TRANSPARENT_WHITE;
        }
    }
}

/// Whether pixel `(x, y)` lies in the circle inscribed in a `size` x `size`
/// box. A pixel is inside when its center is no further than `size / 2` from
/// the center of the box.
pub fn in_circle(x: u32, y: u32, size: u32) -> bool {
    let size = i64::from(size);
    let dx = 2 * i64::from(x) + 1 - size;
    let dy = 2 * i64::from(y) + 1 - size;
    dx * dx + dy * dy <= size * size
}

/// Binary mask, 255 inside the inscribed circle and 0 elsewhere.
pub fn circle_mask(size: u32) -> GrayImage {
    GrayImage::from_fn(size, size, |x, y| {
        if in_circle(x, y, size) {
            Luma([255])
        } else {
            Luma([0])
        }
    })
}

/// Pastes `img` at the origin of a transparent canvas the size of `mask` and
/// replaces its alpha channel with the mask.
pub fn compose(img: &RgbaImage, mask: &GrayImage) -> RgbaImage {
    let (width, height) = mask.dimensions();
    let mut canvas = RgbaImage::new(width, height);
    imageops::replace(&mut canvas, img, 0, 0);
    for (pixel, m) in canvas.pixels_mut().zip(mask.pixels()) {
        pixel[3] = m[0];
    }
    canvas
}

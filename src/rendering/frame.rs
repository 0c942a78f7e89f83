//! Framebuffer composition for the image viewer.
//!
//! The image is scaled with nearest-neighbour sampling to the largest size
//! that fits the frame without changing its aspect ratio, then centred.
//! Uncovered margins are white. Pixels are packed as `0x00RRGGBB`.

use pixel_transform::Image;

/// Colour of the letterbox margins
pub const BACKGROUND: u32 = 0x00FF_FFFF;

/// Compose a `width * height` framebuffer showing `image`.
pub fn compose_frame(image: &Image<i32>, width: u32, height: u32) -> Vec<u32> {
    let (frame_w, frame_h) = (width as usize, height as usize);
    let mut frame = vec![BACKGROUND; frame_w * frame_h];

    let (img_h, img_w, channels) = image.dim();
    if img_h == 0 || img_w == 0 || channels == 0 || frame.is_empty() {
        return frame;
    }

    let (fit_w, fit_h) = fit_size(img_w, img_h, frame_w, frame_h);
    let offset_x = (frame_w - fit_w) / 2;
    let offset_y = (frame_h - fit_h) / 2;

    for ty in 0..fit_h {
        let sy = ty * img_h / fit_h;
        let row = &mut frame[(offset_y + ty) * frame_w + offset_x..][..fit_w];
        for (tx, dst) in row.iter_mut().enumerate() {
            let sx = tx * img_w / fit_w;
            *dst = pack_pixel(image, sy, sx);
        }
    }

    frame
}

/// Largest `(w, h)` within the frame with the image's aspect ratio.
fn fit_size(img_w: usize, img_h: usize, frame_w: usize, frame_h: usize) -> (usize, usize) {
    // compare img_w / img_h against frame_w / frame_h without floats
    if img_w * frame_h >= frame_w * img_h {
        let h = (img_h * frame_w / img_w).max(1);
        (frame_w, h)
    } else {
        let w = (img_w * frame_h / img_h).max(1);
        (w, frame_h)
    }
}

fn pack_pixel(image: &Image<i32>, y: usize, x: usize) -> u32 {
    let channels = image.dim().2;
    // gray images repeat their single channel
    let sample = |c: usize| image[[y, x, c.min(channels - 1)]].clamp(0, 255) as u32;
    (sample(0) << 16) | (sample(1) << 8) | sample(2)
}

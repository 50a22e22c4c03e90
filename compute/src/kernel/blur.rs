//! Box blur over interleaved 8-bit images
//!
//! Each output sample is the truncated mean of the `(2r + 1)^2` window around
//! it, restricted to in-bounds neighbours. Pixels near the border average over
//! fewer samples; there is no padding, wraparound or reflection.

use super::ImageGeometry;
use rayon::prelude::*;

/// Blur `input` into `output`, one work-item per pixel.
///
/// Both slices hold `height * width * channels` bytes.
pub fn box_blur(input: &[u8], output: &mut [u8], geometry: ImageGeometry, radius: u32) {
    let ImageGeometry {
        width, channels, ..
    } = geometry;
    if channels == 0 || width == 0 {
        return;
    }

    output
        .par_chunks_mut(channels)
        .enumerate()
        .for_each(|(pixel, out)| {
            let y = pixel / width;
            let x = pixel % width;
            for (c, sample) in out.iter_mut().enumerate() {
                *sample = blur_sample(input, geometry, radius, y, x, c);
            }
        });
}

/// Mean of the in-bounds window around `(y, x)` for one channel
fn blur_sample(
    input: &[u8],
    geometry: ImageGeometry,
    radius: u32,
    y: usize,
    x: usize,
    c: usize,
) -> u8 {
    let ImageGeometry {
        height,
        width,
        channels,
    } = geometry;
    let r = radius as usize;

    // Clamping the window is equivalent to skipping out-of-bounds neighbours
    let y0 = y.saturating_sub(r);
    let y1 = y.saturating_add(r).min(height - 1);
    let x0 = x.saturating_sub(r);
    let x1 = x.saturating_add(r).min(width - 1);

    let mut sum: u64 = 0;
    let mut count: u64 = 0;
    for ny in y0..=y1 {
        let row = ny * width * channels;
        for nx in x0..=x1 {
            sum += u64::from(input[row + nx * channels + c]);
            count += 1;
        }
    }

    let center = (y * width + x) * channels + c;
    if count == 0 {
        return input[center];
    }
    (sum / count) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn geometry(height: usize, width: usize, channels: usize) -> ImageGeometry {
        ImageGeometry {
            height,
            width,
            channels,
        }
    }

    fn blur(input: &[u8], g: ImageGeometry, radius: u32) -> Vec<u8> {
        let mut output = vec![0u8; input.len()];
        box_blur(input, &mut output, g, radius);
        output
    }

    #[test]
    fn test_uniform_3x3_radius_1() {
        let input = vec![100u8; 9];
        assert_eq!(blur(&input, geometry(3, 3, 1), 1), input);
    }

    #[test]
    fn test_radius_zero_is_identity() {
        let input: Vec<u8> = (0..48).map(|i| (i * 5) as u8).collect();
        assert_eq!(blur(&input, geometry(4, 4, 3), 0), input);
    }

    #[test]
    fn test_border_uses_fewer_samples() {
        // Single row: edges average two samples, centre averages three
        let out = blur(&[0, 3, 6], geometry(1, 3, 1), 1);
        assert_eq!(out, vec![1, 3, 4]);
    }

    #[test]
    fn test_division_truncates() {
        let out = blur(&[1, 2], geometry(1, 2, 1), 1);
        assert_eq!(out, vec![1, 1]);
    }

    #[test]
    fn test_corner_window_2x2() {
        let out = blur(&[10, 20, 30, 40], geometry(2, 2, 1), 1);
        assert_eq!(out, vec![25, 25, 25, 25]);
    }

    #[test]
    fn test_channels_are_independent() {
        // 1x2 RGB: only the green channel differs between the two pixels
        let input = [10, 0, 200, 10, 100, 200];
        let out = blur(&input, geometry(1, 2, 3), 1);
        assert_eq!(out, vec![10, 50, 200, 10, 50, 200]);
    }

    #[test]
    fn test_radius_larger_than_image() {
        // Window covers the whole image for every pixel
        let input = [0, 10, 20, 30, 40, 50];
        let out = blur(&input, geometry(2, 3, 1), 20);
        assert_eq!(out, vec![25; 6]);
    }

    #[test]
    fn test_empty_image() {
        let mut output: Vec<u8> = vec![];
        box_blur(&[], &mut output, geometry(0, 0, 3), 2);
        assert!(output.is_empty());
    }

    proptest! {
        #[test]
        fn prop_uniform_stays_uniform(
            h in 1usize..12,
            w in 1usize..12,
            ch in 1usize..=4,
            value in any::<u8>(),
            radius in 0u32..6,
        ) {
            let input = vec![value; h * w * ch];
            let out = blur(&input, geometry(h, w, ch), radius);
            prop_assert!(out.iter().all(|&v| v == value));
        }

        #[test]
        fn prop_output_within_input_bounds(
            data in prop::collection::vec(any::<u8>(), 1..200),
            radius in 0u32..4,
        ) {
            let g = geometry(1, data.len(), 1);
            let lo = *data.iter().min().unwrap();
            let hi = *data.iter().max().unwrap();
            let out = blur(&data, g, radius);
            prop_assert_eq!(out.len(), data.len());
            prop_assert!(out.iter().all(|&v| v >= lo && v <= hi));
        }
    }
}

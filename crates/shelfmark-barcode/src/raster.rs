use image::{GrayImage, ImageBuffer, Luma};

const BLACK: Luma<u8> = Luma([0]);
const WHITE: Luma<u8> = Luma([255]);

/// Geometry for rasterized barcodes. Dimensions are in pixels except
/// `quiet_zone`, which is in modules (scaled by `module_width`).
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Width of one barcode module in pixels.
    pub module_width: u32,
    /// Bar height in pixels.
    pub height: u32,
    /// Blank margin on each side, in modules. Scanners need this.
    pub quiet_zone: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            module_width: 3,
            height: 120,
            quiet_zone: 10,
        }
    }
}

impl RenderOptions {
    pub fn image_width(&self, module_count: usize) -> u32 {
        (module_count as u32 + 2 * self.quiet_zone) * self.module_width
    }
}

/// Rasterize a module bit pattern (one byte per module, 1 = bar) into a
/// grayscale image.
pub fn rasterize(modules: &[u8], opts: &RenderOptions) -> GrayImage {
    let width = opts.image_width(modules.len());
    ImageBuffer::from_fn(width, opts.height, |x, _| {
        let module = (x / opts.module_width) as usize;
        match module
            .checked_sub(opts.quiet_zone as usize)
            .and_then(|i| modules.get(i))
        {
            Some(&1) => BLACK,
            _ => WHITE,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_dimensions_include_quiet_zones() {
        let opts = RenderOptions {
            module_width: 2,
            height: 40,
            quiet_zone: 5,
        };
        let img = rasterize(&[1, 0, 1], &opts);
        assert_eq!(img.width(), (3 + 10) * 2);
        assert_eq!(img.height(), 40);
    }

    #[test]
    fn bars_and_gaps_map_to_black_and_white() {
        let opts = RenderOptions {
            module_width: 1,
            height: 2,
            quiet_zone: 1,
        };
        let img = rasterize(&[1, 0, 1], &opts);
        // quiet | bar gap bar | quiet
        assert_eq!(img.get_pixel(0, 0), &WHITE);
        assert_eq!(img.get_pixel(1, 0), &BLACK);
        assert_eq!(img.get_pixel(2, 0), &WHITE);
        assert_eq!(img.get_pixel(3, 0), &BLACK);
        assert_eq!(img.get_pixel(4, 0), &WHITE);
    }
}

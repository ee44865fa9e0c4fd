//! Barcode encoding and rendering.
//!
//! Symbology is chosen from the shape of the value (exactly 13 ASCII digits
//! selects EAN-13, everything else Code 128), encoding is delegated to the
//! `barcoders` crate, and the resulting module bit pattern is rendered either
//! as a PNG (via `image`) or as a unicode preview in the terminal.

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use barcoders::sym::code128::Code128;
use barcoders::sym::ean13::EAN13;

mod raster;
mod terminal;

pub use raster::RenderOptions;

/// Code 128 character-set B selector, required by `barcoders` as a prefix.
const CODE128_SET_B: char = '\u{0181}';

#[derive(Debug, thiserror::Error)]
pub enum BarcodeError {
    #[error("barcode value is empty")]
    Empty,

    #[error("barcode value `{value}` is not encodable as {symbology}: {source}")]
    Encode {
        value: String,
        symbology: Symbology,
        #[source]
        source: barcoders::error::Error,
    },

    #[error("failed to write barcode image: {0}")]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbology {
    Ean13,
    Code128,
}

impl Symbology {
    /// Exactly 13 ASCII digits selects EAN-13; any other value falls back to
    /// Code 128.
    pub fn for_value(value: &str) -> Self {
        if value.len() == 13 && value.bytes().all(|b| b.is_ascii_digit()) {
            Self::Ean13
        } else {
            Self::Code128
        }
    }
}

impl fmt::Display for Symbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ean13 => write!(f, "EAN-13"),
            Self::Code128 => write!(f, "Code 128"),
        }
    }
}

/// A successfully encoded barcode: the original value plus the module bit
/// pattern (one byte per module, 1 = bar).
#[derive(Debug, Clone)]
pub struct Barcode {
    symbology: Symbology,
    value: String,
    modules: Vec<u8>,
}

impl Barcode {
    /// Encode `value`, selecting the symbology from its shape.
    ///
    /// EAN-13 encoders compute the trailing check digit themselves, so the
    /// 13th input digit is dropped and recomputed rather than trusted.
    pub fn encode(value: &str) -> Result<Self, BarcodeError> {
        if value.is_empty() {
            return Err(BarcodeError::Empty);
        }

        let symbology = Symbology::for_value(value);
        let encode_err = |source| BarcodeError::Encode {
            value: value.to_string(),
            symbology,
            source,
        };

        let modules = match symbology {
            Symbology::Ean13 => EAN13::new(&value[..12]).map_err(encode_err)?.encode(),
            Symbology::Code128 => Code128::new(format!("{CODE128_SET_B}{value}"))
                .map_err(encode_err)?
                .encode(),
        };
        log::debug!("encoded `{value}` as {symbology} ({} modules)", modules.len());

        Ok(Self {
            symbology,
            value: value.to_string(),
            modules,
        })
    }

    pub fn symbology(&self) -> Symbology {
        self.symbology
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn modules(&self) -> &[u8] {
        &self.modules
    }

    /// Rasterize to a grayscale PNG at `path`.
    pub fn render_png(&self, path: &Path, opts: &RenderOptions) -> Result<(), BarcodeError> {
        raster::rasterize(&self.modules, opts).save(path)?;
        Ok(())
    }

    /// Write `<dir>/<item_id>.png`, creating `dir` if needed. Returns the
    /// written path; the name is deterministic so reprints overwrite.
    pub fn save_to_dir(
        &self,
        item_id: &str,
        dir: &Path,
        opts: &RenderOptions,
    ) -> Result<PathBuf, BarcodeError> {
        fs::create_dir_all(dir)?;
        let path = dir.join(format!("{item_id}.png"));
        self.render_png(&path, opts)?;
        Ok(path)
    }

    /// Draw a boxed unicode preview of the bars with the value beneath.
    pub fn render_terminal(&self, writer: &mut impl Write) -> io::Result<()> {
        terminal::draw(&self.modules, &self.value, writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn thirteen_digits_select_ean13() {
        assert_eq!(Symbology::for_value("4006381333931"), Symbology::Ean13);
    }

    #[test]
    fn anything_else_selects_code128() {
        assert_eq!(Symbology::for_value("400638133393"), Symbology::Code128);
        assert_eq!(Symbology::for_value("40063813339312"), Symbology::Code128);
        assert_eq!(Symbology::for_value("ABC-123"), Symbology::Code128);
        assert_eq!(Symbology::for_value("400638133393X"), Symbology::Code128);
    }

    #[test]
    fn encode_ean13_produces_standard_module_count() {
        let barcode = Barcode::encode("4006381333931").unwrap();
        assert_eq!(barcode.symbology(), Symbology::Ean13);
        // EAN-13 is always 95 modules wide.
        assert_eq!(barcode.modules().len(), 95);
    }

    #[test]
    fn encode_code128_accepts_alphanumerics() {
        let barcode = Barcode::encode("SKU-00042").unwrap();
        assert_eq!(barcode.symbology(), Symbology::Code128);
        assert!(!barcode.modules().is_empty());
    }

    #[test]
    fn encode_rejects_empty_value() {
        assert!(matches!(Barcode::encode(""), Err(BarcodeError::Empty)));
    }

    #[test]
    fn encode_rejects_unencodable_content() {
        // U+00E9 is outside the Code 128 set-B character range.
        let err = Barcode::encode("café").unwrap_err();
        assert!(matches!(err, BarcodeError::Encode { .. }));
    }

    #[test]
    fn save_to_dir_writes_one_deterministic_file() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("barcodes");
        let barcode = Barcode::encode("4006381333931").unwrap();

        let path = barcode
            .save_to_dir("A001", &out, &RenderOptions::default())
            .unwrap();
        assert_eq!(path, out.join("A001.png"));
        assert!(path.is_file());
        assert_eq!(fs::read_dir(&out).unwrap().count(), 1);

        // Reprint overwrites rather than accumulating files.
        barcode
            .save_to_dir("A001", &out, &RenderOptions::default())
            .unwrap();
        assert_eq!(fs::read_dir(&out).unwrap().count(), 1);
    }

    #[test]
    fn rendered_png_decodes_with_expected_dimensions() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("code.png");
        let opts = RenderOptions::default();
        let barcode = Barcode::encode("4006381333931").unwrap();
        barcode.render_png(&path, &opts).unwrap();

        let (width, height) = image::image_dimensions(&path).unwrap();
        assert_eq!(width, opts.image_width(95));
        assert_eq!(height, opts.height);
    }
}

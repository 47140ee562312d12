//! Export of the canvas as an image file.
//!
//! The dialog collects a file name, a format and a quality string; [`ExportDialog::request`]
//! turns them into a validated [`ExportRequest`]. [`export_canvas`] encodes a captured
//! canvas image and hands it to the platform: a file in the export directory on native,
//! a browser download on the web.

use std::path::Path;

use egui::ColorImage;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::codecs::webp::WebPEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};
use log::{info, warn};

use crate::error::{ExportError, ExportResult};
use crate::util::time;

pub const DEFAULT_QUALITY: f32 = 0.9;
pub const MIN_QUALITY: f32 = 0.1;
pub const MAX_QUALITY: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Png,
    Jpeg,
    Webp,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Png, ExportFormat::Jpeg, ExportFormat::Webp];

    /// Parse a user-entered format name. Unknown names fall back to PNG.
    pub fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "png" => ExportFormat::Png,
            "jpeg" | "jpg" => ExportFormat::Jpeg,
            "webp" => ExportFormat::Webp,
            other => {
                warn!("Unknown export format {other:?}, using png");
                ExportFormat::Png
            }
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpeg",
            ExportFormat::Webp => "webp",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Png => "image/png",
            ExportFormat::Jpeg => "image/jpeg",
            ExportFormat::Webp => "image/webp",
        }
    }

    /// PNG is lossless and ignores the quality setting
    pub fn uses_quality(&self) -> bool {
        !matches!(self, ExportFormat::Png)
    }
}

/// Encoder quality in `[0.1, 1.0]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportQuality(f32);

impl Default for ExportQuality {
    fn default() -> Self {
        Self(DEFAULT_QUALITY)
    }
}

impl ExportQuality {
    pub fn new(value: f32) -> Option<Self> {
        (MIN_QUALITY..=MAX_QUALITY).contains(&value).then_some(Self(value))
    }

    /// Parse user input. Invalid input yields the default quality and a warning for the user.
    pub fn parse(input: &str) -> (Self, Option<String>) {
        match input.trim().parse::<f32>().ok().and_then(Self::new) {
            Some(quality) => (quality, None),
            None => (
                Self::default(),
                Some(format!("Invalid quality value. Using default quality ({DEFAULT_QUALITY}).")),
            ),
        }
    }

    pub fn value(&self) -> f32 {
        self.0
    }

    /// Quality on the 1..=100 scale used by the JPEG encoder
    fn percent(&self) -> u8 {
        (self.0 * 100.0).round().clamp(1.0, 100.0) as u8
    }
}

/// A validated export
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRequest {
    /// Name without extension
    pub file_name: String,
    pub format: ExportFormat,
    pub quality: ExportQuality,
}

impl ExportRequest {
    pub fn file_name_with_extension(&self) -> String {
        format!("{}.{}", self.file_name, self.format.extension())
    }
}

/// `<stem>-<unix seconds>`
pub fn default_file_name(stem: &str) -> String {
    format!("{stem}-{}", time::timestamp_secs())
}

/// Export form state kept by the tools panel between frames
#[derive(Debug, Clone, PartialEq)]
pub struct ExportDialog {
    pub file_name: String,
    pub format: ExportFormat,
    pub quality_input: String,
}

impl ExportDialog {
    pub fn new(file_name: String, format: ExportFormat) -> Self {
        Self {
            file_name,
            format,
            quality_input: DEFAULT_QUALITY.to_string(),
        }
    }

    /// Validated request plus an optional warning to show the user
    pub fn request(&self) -> (ExportRequest, Option<String>) {
        let (quality, warning) = if self.format.uses_quality() {
            ExportQuality::parse(&self.quality_input)
        } else {
            (ExportQuality::default(), None)
        };

        let file_name = match self.file_name.trim() {
            "" => default_file_name("drawing"),
            name => name.to_owned(),
        };

        (
            ExportRequest {
                file_name,
                format: self.format,
                quality,
            },
            warning,
        )
    }
}

/// Encode a captured canvas image in the requested format
pub fn encode(image: &ColorImage, format: ExportFormat, quality: ExportQuality) -> ExportResult<Vec<u8>> {
    let [width, height] = image.size;
    let invalid = || ExportError::InvalidDimensions { width, height };
    if width == 0 || height == 0 {
        return Err(invalid());
    }

    let rgba = RgbaImage::from_raw(width as u32, height as u32, image.as_raw().to_vec()).ok_or_else(invalid)?;
    let (w, h) = rgba.dimensions();
    let mut bytes = Vec::new();

    match format {
        ExportFormat::Png => {
            PngEncoder::new(&mut bytes).write_image(rgba.as_raw(), w, h, ExtendedColorType::Rgba8)?;
        }
        ExportFormat::Jpeg => {
            // JPEG has no alpha channel
            let rgb = image::DynamicImage::ImageRgba8(rgba).to_rgb8();
            JpegEncoder::new_with_quality(&mut bytes, quality.percent()).write_image(
                rgb.as_raw(),
                w,
                h,
                ExtendedColorType::Rgb8,
            )?;
        }
        ExportFormat::Webp => {
            // lossless only; quality does not apply
            WebPEncoder::new_lossless(&mut bytes).write_image(rgba.as_raw(), w, h, ExtendedColorType::Rgba8)?;
        }
    }

    Ok(bytes)
}

/// Encode the captured canvas and deliver it. Returns where the file went.
pub fn export_canvas(surface: Option<&ColorImage>, request: &ExportRequest, export_dir: &Path) -> ExportResult<String> {
    let image = surface.ok_or(ExportError::NoSurface)?;
    let bytes = encode(image, request.format, request.quality)?;
    let file_name = request.file_name_with_extension();
    let location = deliver(&bytes, &file_name, request.format.mime_type(), export_dir)?;
    info!("Exported {} bytes to {}", bytes.len(), location);
    Ok(location)
}

#[cfg(not(target_arch = "wasm32"))]
fn deliver(bytes: &[u8], file_name: &str, _mime_type: &str, export_dir: &Path) -> ExportResult<String> {
    if !export_dir.as_os_str().is_empty() {
        std::fs::create_dir_all(export_dir).map_err(|source| ExportError::Write {
            path: export_dir.to_path_buf(),
            source,
        })?;
    }
    let path = export_dir.join(file_name);
    std::fs::write(&path, bytes).map_err(|source| ExportError::Write {
        path: path.clone(),
        source,
    })?;
    Ok(path.display().to_string())
}

/// Trigger a client-side download through a temporary object URL
#[cfg(target_arch = "wasm32")]
fn deliver(bytes: &[u8], file_name: &str, mime_type: &str, _export_dir: &Path) -> ExportResult<String> {
    use eframe::wasm_bindgen::{JsCast as _, JsValue};

    let failed = |err: JsValue| ExportError::Download(format!("{err:?}"));
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| ExportError::Download("no document".to_owned()))?;

    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime_type);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(failed)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(failed)?;

    let anchor = document
        .create_element("a")
        .map_err(failed)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| ExportError::Download("could not create link".to_owned()))?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    web_sys::Url::revoke_object_url(&url).map_err(failed)?;
    Ok(file_name.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Color32;

    fn canvas_image() -> ColorImage {
        ColorImage::new([8, 4], Color32::WHITE)
    }

    #[test]
    fn test_format_parsing_falls_back_to_png() {
        assert_eq!(ExportFormat::parse("JPG"), ExportFormat::Jpeg);
        assert_eq!(ExportFormat::parse(" webp "), ExportFormat::Webp);
        assert_eq!(ExportFormat::parse("gif"), ExportFormat::Png);
    }

    #[test]
    fn test_quality_parsing() {
        assert_eq!(ExportQuality::parse("0.5"), (ExportQuality(0.5), None));
        assert_eq!(ExportQuality::parse("1.0").0.value(), 1.0);

        for bad in ["abc", "0.05", "1.5", ""] {
            let (quality, warning) = ExportQuality::parse(bad);
            assert_eq!(quality.value(), DEFAULT_QUALITY);
            assert!(warning.is_some(), "{bad:?} should warn");
        }
    }

    #[test]
    fn test_png_ignores_quality_input() {
        let mut dialog = ExportDialog::new("sketch".to_owned(), ExportFormat::Png);
        dialog.quality_input = "nonsense".to_owned();
        let (request, warning) = dialog.request();
        assert!(warning.is_none());
        assert_eq!(request.file_name_with_extension(), "sketch.png");
    }

    #[test]
    fn test_blank_file_name_gets_default() {
        let dialog = ExportDialog::new("  ".to_owned(), ExportFormat::Jpeg);
        let (request, _) = dialog.request();
        assert!(request.file_name.starts_with("drawing-"));
        assert!(request.file_name_with_extension().ends_with(".jpeg"));
    }

    #[test]
    fn test_encode_signatures() {
        let image = canvas_image();
        let png = encode(&image, ExportFormat::Png, ExportQuality::default()).unwrap();
        assert_eq!(&png[..4], b"\x89PNG");

        let jpeg = encode(&image, ExportFormat::Jpeg, ExportQuality(0.3)).unwrap();
        assert_eq!(&jpeg[..2], &[0xFF, 0xD8]);

        let webp = encode(&image, ExportFormat::Webp, ExportQuality::default()).unwrap();
        assert_eq!(&webp[8..12], b"WEBP");
    }

    #[test]
    fn test_encode_rejects_empty_image() {
        let image = ColorImage::new([0, 0], Color32::WHITE);
        assert!(matches!(
            encode(&image, ExportFormat::Png, ExportQuality::default()),
            Err(ExportError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_missing_surface_is_an_error() {
        let request = ExportRequest {
            file_name: "x".to_owned(),
            format: ExportFormat::Png,
            quality: ExportQuality::default(),
        };
        assert!(matches!(
            export_canvas(None, &request, Path::new("")),
            Err(ExportError::NoSurface)
        ));
    }
}

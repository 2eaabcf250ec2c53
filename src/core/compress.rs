//! Photo downsampling before storage and upload.

use crate::errors::{AppError, AppResult};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as B64;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageError, Rgb, RgbImage};
use std::fs;
use std::path::Path;

pub const DEFAULT_MAX_WIDTH: u32 = 800;
pub const DEFAULT_JPEG_QUALITY: u8 = 70;

/// Shrink a base64 image to at most `max_width` pixels wide.
///
/// Accepts plain base64 or a `data:<mime>;base64,` URI. Images already
/// within the width are returned byte-identical. Wider images are scaled
/// (aspect ratio kept), flattened onto white and re-encoded as a JPEG data
/// URI. Any failure returns the input unchanged.
pub fn compress_image(input: &str, max_width: u32) -> String {
    compress_image_with_quality(input, max_width, DEFAULT_JPEG_QUALITY)
}

pub fn compress_image_with_quality(input: &str, max_width: u32, quality: u8) -> String {
    match try_compress(input, max_width, quality) {
        Ok(Some(out)) => out,
        Ok(None) => input.to_string(),
        Err(e) => {
            tracing::warn!(error = %e, "image compression failed, keeping original");
            input.to_string()
        }
    }
}

fn try_compress(input: &str, max_width: u32, quality: u8) -> AppResult<Option<String>> {
    let img = decode(input)?;
    let (width, height) = img.dimensions();

    if width <= max_width || max_width == 0 {
        return Ok(None);
    }

    let ratio = f64::from(max_width) / f64::from(width);
    let new_height = ((f64::from(height) * ratio).round() as u32).max(1);

    let resized = img.resize_exact(max_width, new_height, FilterType::Triangle);
    let flat = flatten_on_white(&resized);

    let mut buf = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut buf, quality.clamp(1, 100));
    encoder.encode_image(&flat).map_err(image_err)?;

    tracing::debug!(
        from = %format!("{width}x{height}"),
        to = %format!("{max_width}x{new_height}"),
        bytes = buf.len(),
        "image compressed"
    );

    Ok(Some(format!("data:image/jpeg;base64,{}", B64.encode(buf))))
}

/// Transparent pixels are blended against white so they do not turn black in JPEG.
fn flatten_on_white(img: &DynamicImage) -> RgbImage {
    let rgba = img.to_rgba8();
    let mut out = RgbImage::new(rgba.width(), rgba.height());

    for (x, y, px) in rgba.enumerate_pixels() {
        let alpha = u32::from(px[3]);
        let blend = |c: u8| ((u32::from(c) * alpha + 255 * (255 - alpha)) / 255) as u8;
        out.put_pixel(x, y, Rgb([blend(px[0]), blend(px[1]), blend(px[2])]));
    }

    out
}

fn decode(input: &str) -> AppResult<DynamicImage> {
    let payload = match input.strip_prefix("data:") {
        Some(rest) => {
            let (header, data) = rest
                .split_once(',')
                .ok_or_else(|| AppError::Validation("malformed data URI".to_string()))?;
            if !header.ends_with(";base64") {
                return Err(AppError::Validation(
                    "data URI is not base64 encoded".to_string(),
                ));
            }
            data
        }
        None => input,
    };

    let bytes = B64
        .decode(payload.trim())
        .map_err(|e| AppError::Validation(format!("invalid base64 image: {e}")))?;
    image::load_from_memory(&bytes).map_err(image_err)
}

fn image_err(e: ImageError) -> AppError {
    AppError::Other(format!("image: {e}"))
}

/// Width and height of a base64 / data-URI image, if it decodes.
pub fn image_dimensions(input: &str) -> Option<(u32, u32)> {
    decode(input).ok().map(|img| img.dimensions())
}

/// Read a photo from disk as a `data:` URI.
pub fn encode_file_as_data_uri(path: &Path) -> AppResult<String> {
    let bytes = fs::read(path)?;
    let format = image::guess_format(&bytes).map_err(|_| {
        AppError::Validation(format!("{} is not a supported image", path.display()))
    })?;
    Ok(format!(
        "data:{};base64,{}",
        format.to_mime_type(),
        B64.encode(bytes)
    ))
}

/// True when the string is inline image data rather than a remote URL.
pub fn is_inline_image(value: &str) -> bool {
    value.starts_with("data:image/")
}

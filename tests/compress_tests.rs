mod common;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as B64;
use common::{png_bytes, png_data_uri, temp_out};
use guruhadir::core::compress::{
    compress_image, compress_image_with_quality, encode_file_as_data_uri, image_dimensions,
    is_inline_image,
};
use image::GenericImageView;
use std::fs;
use std::path::Path;

fn decode_jpeg(uri: &str) -> image::DynamicImage {
    let data = uri
        .strip_prefix("data:image/jpeg;base64,")
        .expect("jpeg data uri");
    image::load_from_memory(&B64.decode(data).unwrap()).unwrap()
}

#[test]
fn narrow_image_is_returned_unchanged() {
    let input = png_data_uri(320, 240, [10, 20, 30, 255]);
    assert_eq!(compress_image(&input, 800), input);
}

#[test]
fn image_exactly_at_max_width_is_returned_unchanged() {
    let input = png_data_uri(800, 600, [10, 20, 30, 255]);
    assert_eq!(compress_image(&input, 800), input);
}

#[test]
fn wide_image_is_scaled_down_keeping_aspect_ratio() {
    let input = png_data_uri(1600, 1200, [200, 100, 50, 255]);
    let out = compress_image(&input, 800);

    assert!(out.starts_with("data:image/jpeg;base64,"));
    assert_eq!(image_dimensions(&out), Some((800, 600)));
}

#[test]
fn plain_base64_input_is_accepted() {
    let input = B64.encode(png_bytes(1000, 500, [0, 0, 255, 255]));
    let out = compress_image(&input, 400);
    assert_eq!(image_dimensions(&out), Some((400, 200)));
}

#[test]
fn compressing_twice_changes_nothing_more() {
    let input = png_data_uri(1200, 300, [90, 90, 90, 255]);
    let once = compress_image(&input, 800);
    let twice = compress_image(&once, 800);
    assert_eq!(once, twice);
}

#[test]
fn undecodable_input_is_returned_unchanged() {
    for bad in ["", "not an image", "data:image/png;base64,@@@", "data:text/plain,hello"] {
        assert_eq!(compress_image(bad, 800), bad);
    }
}

#[test]
fn transparent_pixels_become_white() {
    let input = png_data_uri(1000, 20, [0, 0, 0, 0]);
    let out = compress_image_with_quality(&input, 500, 90);

    let img = decode_jpeg(&out);
    assert_eq!(img.dimensions(), (500, 10));
    let px = img.to_rgb8().get_pixel(250, 5).0;
    assert!(px.iter().all(|c| *c > 240), "expected white, got {px:?}");
}

#[test]
fn file_is_encoded_with_its_mime_type() {
    let path = temp_out("compress_file", "png");
    fs::write(&path, png_bytes(4, 4, [1, 2, 3, 255])).unwrap();

    let uri = encode_file_as_data_uri(Path::new(&path)).unwrap();
    assert!(uri.starts_with("data:image/png;base64,"));
    assert!(is_inline_image(&uri));
    assert_eq!(image_dimensions(&uri), Some((4, 4)));
}

#[test]
fn non_image_file_is_rejected() {
    let path = temp_out("compress_text", "txt");
    fs::write(&path, "just text").unwrap();
    assert!(encode_file_as_data_uri(Path::new(&path)).is_err());
}

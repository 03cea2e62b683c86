use crate::application::app;
use crate::domain::{Image, ImageError};
use crate::infrastructure::image_loader::ImageLoadError;

pub fn run() {
    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "pocketgdk".to_string());
    let path = match args.next() {
        Some(path) => path,
        None => {
            print_usage(&program);
            std::process::exit(2);
        }
    };

    if path == "-h" || path == "--help" {
        print_usage(&program);
        return;
    }

    if args.next().is_some() {
        print_usage(&program);
        std::process::exit(2);
    }

    match app::load_image(&path) {
        Ok(image) => print_image_info(&path, &image),
        Err(err) => {
            report_load_error(&path, err);
            std::process::exit(1);
        }
    }
}

fn print_image_info(path: &str, image: &Image) {
    println!("Image: {}", path);
    println!("Width: {}", image.width());
    println!("Height: {}", image.height());
    println!("Decoded Bytes: {}", image.len());
}

fn report_load_error(path: &str, err: ImageLoadError) {
    match err {
        ImageLoadError::Io(io_err) => {
            eprintln!("Failed to read image '{}': {}", path, io_err);
        }
        ImageLoadError::Decode(decode_err) => {
            eprintln!("{}", decode_error_label(path, decode_err));
        }
    }
}

fn decode_error_label(path: &str, err: ImageError) -> String {
    match err {
        ImageError::HeaderTooShort { actual } => {
            format!("Invalid image '{}': header too short ({} bytes)", path, actual)
        }
        ImageError::PixelDataTruncated => {
            format!("Invalid image '{}': pixel data truncated", path)
        }
        ImageError::UnsupportedTga { color_map, depth } => format!(
            "Unsupported TGA '{}': color map {}, depth {}",
            path, color_map, depth
        ),
        ImageError::UnsupportedTgaType(image_type) => {
            format!("Unsupported TGA '{}': image type {}", path, image_type)
        }
        ImageError::UnsupportedPcx {
            depth,
            planes,
            compression,
        } => format!(
            "Unsupported PCX '{}': depth {}, planes {}, compression {}",
            path, depth, planes, compression
        ),
    }
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [--demo] <image-path>", program);
}

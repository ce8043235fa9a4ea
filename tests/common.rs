#![allow(dead_code)]

use image::{ImageBuffer, Rgb};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// A small RGB gradient with enough distinct colors that PNG optimization
/// cannot collapse it to grayscale or a palette.
pub fn gradient(width: u32, height: u32) -> ImageBuffer<Rgb<u8>, Vec<u8>> {
    ImageBuffer::from_fn(width, height, |x, y| {
        Rgb([(x * 4) as u8, (y * 4) as u8, (x * 2 + y * 2) as u8])
    })
}

pub fn write_test_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    gradient(width, height).save(&path).unwrap();
    path
}

pub fn write_test_jpeg(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    gradient(width, height).save(&path).unwrap();
    path
}

/// Write a file that is not a decodable image, whatever its extension says.
pub fn write_fake_file(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.join(name);
    File::create(&path).unwrap().write_all(contents).unwrap();
    path
}

/// Write a UTF-8 path list, one entry per line.
pub fn write_list_file(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut file = File::create(&path).unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    path
}

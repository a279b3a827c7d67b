use std::path::Path;
use crate::constants::{MAX_IMAGE_DIMENSION, MAX_PIXEL_COUNT, SOURCE_EXTENSIONS};
use crate::error::{OptimizeError, Result};

// デコード済みソースのサイズ検証（巨大画像でエンコーダを詰まらせない）
pub fn validate_dimensions(path: &Path, width: u32, height: u32) -> Result<()> {
    let invalid = |message: String| OptimizeError::InvalidDimensions {
        path: path.to_path_buf(),
        message,
    };

    if width == 0 || height == 0 {
        return Err(invalid(format!("empty image ({}x{})", width, height)));
    }
    let longest = width.max(height);
    if longest > MAX_IMAGE_DIMENSION {
        return Err(invalid(format!(
            "edge of {} px exceeds {}",
            longest, MAX_IMAGE_DIMENSION
        )));
    }
    let pixel_count = u64::from(width) * u64::from(height);
    if pixel_count > MAX_PIXEL_COUNT {
        return Err(invalid(format!(
            "{} pixels exceeds {}",
            pixel_count, MAX_PIXEL_COUNT
        )));
    }
    Ok(())
}

// ソース対象の拡張子か（大文字小文字を区別しない）
pub fn is_source_extension(ext: &str) -> bool {
    let ext = ext.to_ascii_lowercase();
    SOURCE_EXTENSIONS.contains(&ext.as_str())
}

/// JPEGソースとして扱うパスか
///
/// 拡張子だけを見る。ベース名はUTF-8でなくてもよい。
/// `.jpg` のような拡張子のみのファイル名は対象外。
pub fn is_source_path(path: &Path) -> bool {
    let has_stem = path.file_stem().is_some_and(|s| !s.is_empty());
    let ext_matches = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(is_source_extension);
    has_stem && ext_matches
}

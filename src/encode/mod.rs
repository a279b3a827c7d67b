mod avif;
mod webp;

pub use self::avif::encode_avif;
pub use self::webp::encode_webp;

use std::io::Write;
use std::path::Path;
use image::DynamicImage;
use tempfile::NamedTempFile;
use crate::error::{OptimizeError, Result};
use crate::image_utils::validate_dimensions;
use crate::types::{DerivativeFormat, DerivativeSpec, SourceImage};

// ソース画像を読み込む（サイズ検証込み）
pub fn decode_source(source: &SourceImage) -> Result<DynamicImage> {
    let img = image::open(&source.path).map_err(|e| OptimizeError::Decode {
        path: source.path.clone(),
        source: e,
    })?;

    validate_dimensions(&source.path, img.width(), img.height())?;

    Ok(img)
}

// 派生画像をエンコードして出力先に書き出す
//
// 同じディレクトリの一時ファイルに書いてからリネームするので、
// 出力先は常に旧ファイルか完成した新ファイルのどちらか。
pub fn write_derivative(img: &DynamicImage, spec: DerivativeSpec, dest: &Path) -> Result<()> {
    let data = match spec.format {
        DerivativeFormat::Webp => encode_webp(img, spec.quality),
        DerivativeFormat::Avif => encode_avif(img, spec.quality),
    }
    .map_err(|message| OptimizeError::Encode {
        path: dest.to_path_buf(),
        format: spec.format,
        message,
    })?;

    let write_err = |e: std::io::Error| OptimizeError::Write {
        path: dest.to_path_buf(),
        source: e,
    };

    let dir = dest.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(&data).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(dest).map_err(|e| write_err(e.error))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DERIVATIVES;
    use image::{Rgb, RgbImage};

    fn gradient(w: u32, h: u32) -> DynamicImage {
        let img = RgbImage::from_fn(w, h, |x, y| Rgb([(x * 16) as u8, (y * 16) as u8, 128]));
        DynamicImage::ImageRgb8(img)
    }

    #[test]
    fn writes_both_formats_with_their_signatures() {
        let dir = tempfile::tempdir().unwrap();
        let img = gradient(16, 12);

        let webp_path = dir.path().join("g.webp");
        write_derivative(&img, DERIVATIVES[0], &webp_path).unwrap();
        let webp = std::fs::read(&webp_path).unwrap();
        assert_eq!(&webp[0..4], b"RIFF");
        assert_eq!(&webp[8..12], b"WEBP");

        let avif_path = dir.path().join("g.avif");
        write_derivative(&img, DERIVATIVES[1], &avif_path).unwrap();
        let avif = std::fs::read(&avif_path).unwrap();
        assert_eq!(&avif[4..8], b"ftyp");

        // 一時ファイルが残っていない
        let count = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(count, 2);
    }

    #[test]
    fn overwrites_existing_derivative() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("g.webp");
        std::fs::write(&dest, b"old").unwrap();

        write_derivative(&gradient(8, 8), DERIVATIVES[0], &dest).unwrap();
        let data = std::fs::read(&dest).unwrap();
        assert_ne!(data, b"old");
        assert_eq!(&data[0..4], b"RIFF");
    }

    #[test]
    fn undecodable_source_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.jpg");
        std::fs::write(&path, b"not a jpeg").unwrap();
        let source = SourceImage::new(path, None);
        assert!(matches!(decode_source(&source), Err(OptimizeError::Decode { .. })));
    }
}

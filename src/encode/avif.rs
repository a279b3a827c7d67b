use std::io::Cursor;
use image::codecs::avif::AvifEncoder;
use image::DynamicImage;
use crate::constants::AVIF_SPEED;

// AVIFにエンコード
pub fn encode_avif(img: &DynamicImage, quality: u8) -> Result<Vec<u8>, String> {
    let mut buffer = Cursor::new(Vec::new());
    let encoder = AvifEncoder::new_with_speed_quality(&mut buffer, AVIF_SPEED, quality);
    img.write_with_encoder(encoder)
        .map_err(|e| e.to_string())?;

    Ok(buffer.into_inner())
}

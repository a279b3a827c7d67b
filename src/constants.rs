// 既定のソースディレクトリ（プロジェクトルートからの相対パス）
pub const DEFAULT_SOURCE_DIR: &str = "public";

// 派生画像の品質設定
pub const WEBP_QUALITY: u8 = 82;  // 写真向けの中程度圧縮
pub const AVIF_QUALITY: u8 = 50;  // 圧縮効率が高いため低めでも同等の見た目
pub const AVIF_SPEED: u8 = 6;     // 1(遅い・高圧縮) 〜 10(速い)

// 画像サイズ制限（DoS防止）
pub const MAX_IMAGE_DIMENSION: u32 = 65535;      // 最大辺長
pub const MAX_PIXEL_COUNT: u64 = 100_000_000;    // 最大ピクセル数（100メガピクセル）

// 対象とするソース拡張子（小文字で比較）
pub const SOURCE_EXTENSIONS: &[&str] = &["jpg", "jpeg"];

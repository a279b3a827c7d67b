//! 公開ディレクトリのJPEGからWebP/AVIFの派生画像を差分生成する。
//!
//! 派生画像はソースと同じディレクトリに `<ベース名>.webp` / `<ベース名>.avif`
//! として置かれ、更新日時がソース以上であれば次回以降はスキップされる。

pub mod cache;
pub mod commands;
pub mod constants;
pub mod encode;
pub mod error;
pub mod image_utils;
pub mod markup;
pub mod types;

pub use cache::{check_freshness, Freshness};
pub use commands::optimize::{run, run_with_config, OptimizeConfig};
pub use error::{OptimizeError, Result};
pub use types::{DerivativeFormat, DerivativeSpec, Outcome, SourceImage, Summary, DERIVATIVES};

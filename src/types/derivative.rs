use std::fmt;

use crate::constants::{AVIF_QUALITY, WEBP_QUALITY};

// 派生画像の出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DerivativeFormat {
    Webp,
    Avif,
}

impl DerivativeFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Webp => "webp",
            Self::Avif => "avif",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Webp => "image/webp",
            Self::Avif => "image/avif",
        }
    }
}

impl fmt::Display for DerivativeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

// 出力形式と品質の組（実行時には変更しない固定設定）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivativeSpec {
    pub format: DerivativeFormat,
    pub quality: u8,
}

/// ソース1枚につき生成する派生画像
pub const DERIVATIVES: [DerivativeSpec; 2] = [
    DerivativeSpec {
        format: DerivativeFormat::Webp,
        quality: WEBP_QUALITY,
    },
    DerivativeSpec {
        format: DerivativeFormat::Avif,
        quality: AVIF_QUALITY,
    },
];

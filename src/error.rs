//! 派生画像ビルドのエラー型
//!
//! 致命的なエラーのみを表す。個別ファイルのタイムスタンプ取得失敗は
//! エラーではなく [`crate::cache::Freshness::Unreadable`] として扱う。
//! 原因のI/Oエラー等はメッセージに含めず `source()` で辿る。

use std::path::PathBuf;

use crate::types::DerivativeFormat;

#[derive(Debug, thiserror::Error)]
pub enum OptimizeError {
    /// ソースディレクトリが存在しない・読めない・ディレクトリでない
    #[error("cannot read source directory {path:?}")]
    Discovery {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to decode {path:?}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("invalid image dimensions in {path:?}: {message}")]
    InvalidDimensions { path: PathBuf, message: String },

    #[error("failed to encode {format} derivative {path:?}: {message}")]
    Encode {
        path: PathBuf,
        format: DerivativeFormat,
        message: String,
    },

    /// 一時ファイルの作成・書き込み・置き換えの失敗
    #[error("failed to write {path:?}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to build worker pool: {0}")]
    WorkerPool(String),
}

pub type Result<T> = std::result::Result<T, OptimizeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io::{Error as IoError, ErrorKind};

    #[test]
    fn cause_is_reported_once_in_the_chain() {
        let err = OptimizeError::Discovery {
            path: PathBuf::from("public"),
            source: IoError::new(ErrorKind::NotFound, "No such file or directory"),
        };

        assert_eq!(err.to_string(), "cannot read source directory \"public\"");
        assert_eq!(
            err.source().map(|s| s.to_string()),
            Some("No such file or directory".to_string())
        );

        // バイナリと同じ `{:#}` 表示で原因が重複しない
        let chained = format!("{:#}", anyhow::Error::new(err));
        assert_eq!(
            chained,
            "cannot read source directory \"public\": No such file or directory"
        );
    }
}

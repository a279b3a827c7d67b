use std::ffi::OsStr;
use std::path::PathBuf;
use std::time::SystemTime;

use super::DerivativeFormat;

// ソースディレクトリ内で見つかったJPEG
#[derive(Debug, Clone)]
pub struct SourceImage {
    /// ソースの識別子。派生画像のパスもここから作る
    pub path: PathBuf,
    /// 表示用のファイル名（UTF-8でない部分は置換される）
    pub name: String,
    /// 読み取れなかった場合は None（派生画像は常に再生成される）
    pub modified: Option<SystemTime>,
}

impl SourceImage {
    pub fn new(path: PathBuf, modified: Option<SystemTime>) -> Self {
        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        Self {
            path,
            name,
            modified,
        }
    }

    /// 拡張子を除いたファイル名（バイト列のまま）。派生画像はこれを共有する
    pub fn stem(&self) -> &OsStr {
        self.path.file_stem().unwrap_or_default()
    }

    // 拡張子だけを差し替えた同じディレクトリ内のパス
    pub fn derivative_path(&self, format: DerivativeFormat) -> PathBuf {
        self.path.with_extension(format.extension())
    }
}

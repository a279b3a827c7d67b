use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::time::SystemTime;

use tracing::warn;

/// 派生画像の鮮度判定結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// 派生画像が存在しない
    Missing,
    /// どちらかの更新日時が読めない。判断できないので再生成する（フェイルオープン）
    Unreadable,
    /// ソースの方が新しい
    Stale,
    /// 派生画像の更新日時がソース以上
    Current,
}

impl Freshness {
    pub fn needs_regeneration(self) -> bool {
        !matches!(self, Self::Current)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::Unreadable => "unreadable timestamp",
            Self::Stale => "stale",
            Self::Current => "current",
        }
    }
}

/// 派生画像がソースに対して最新かどうかを判定する
///
/// `source_modified` は探索時に読んだソースの更新日時。
/// 読めなかった場合は `None` を渡す。
pub fn check_freshness(source_modified: Option<SystemTime>, derivative: &Path) -> Freshness {
    let derivative_modified = match fs::metadata(derivative).and_then(|m| m.modified()) {
        Ok(t) => t,
        Err(e) if e.kind() == ErrorKind::NotFound => return Freshness::Missing,
        Err(e) => {
            warn!(path = %derivative.display(), error = %e, "cannot read derivative timestamp, regenerating");
            return Freshness::Unreadable;
        }
    };

    let Some(source_modified) = source_modified else {
        warn!(path = %derivative.display(), "source timestamp unknown, regenerating");
        return Freshness::Unreadable;
    };

    if source_modified > derivative_modified {
        Freshness::Stale
    } else {
        Freshness::Current
    }
}

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};
use crate::error::{OptimizeError, Result};
use crate::image_utils::is_source_path;
use crate::types::SourceImage;

/// ディレクトリ探索の結果
#[derive(Debug, Default)]
pub struct Discovered {
    /// 自然順ソート済み、ベース名は重複しない
    pub sources: Vec<SourceImage>,
    /// ベース名が先行ソースと重複したため除外したファイル名
    pub duplicates: Vec<String>,
}

/// ソースディレクトリ直下のJPEGを列挙する（再帰しない）
pub fn discover_sources(dir: &Path) -> Result<Discovered> {
    let entries = fs::read_dir(dir).map_err(|e| OptimizeError::Discovery {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut sources: Vec<SourceImage> = Vec::new();

    for entry_result in entries {
        // ディレクトリエントリ読み込みエラーはログ出力して続行
        let entry = match entry_result {
            Ok(e) => e,
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "failed to read directory entry");
                continue;
            }
        };
        let entry_path = entry.path();

        if !is_source_path(&entry_path) || !entry_path.is_file() {
            continue;
        }

        // 更新日時が読めなくても対象からは外さない（常に再生成になる）
        let modified = entry_path.metadata().and_then(|m| m.modified()).ok();

        sources.push(SourceImage::new(entry_path, modified));
    }

    // ファイル名で自然順ソート
    sources.sort_by(|a, b| natord::compare(&a.name, &b.name).then_with(|| a.path.cmp(&b.path)));

    // 同じベース名は最初のものだけ採用（a.jpg と a.JPG が同じ出力先を奪い合わないように）
    let mut seen = HashSet::new();
    let mut discovered = Discovered::default();
    for source in sources {
        // ベース名はバイト列で比較する
        if seen.insert(source.stem().to_os_string()) {
            discovered.sources.push(source);
        } else {
            warn!(file = %source.name, "skipping source with duplicate base name");
            discovered.duplicates.push(source.name);
        }
    }

    debug!(
        dir = %dir.display(),
        sources = discovered.sources.len(),
        duplicates = discovered.duplicates.len(),
        "discovered source images"
    );

    Ok(discovered)
}

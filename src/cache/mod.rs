//! 派生画像のディスクキャッシュ判定
//!
//! ソースディレクトリ内の派生画像ファイルそのものがキャッシュになる。
//! マニフェストやハッシュは持たず、更新日時の比較だけで鮮度を決める。

mod freshness;

pub use freshness::{check_freshness, Freshness};

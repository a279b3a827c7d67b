/// 1回の実行結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    /// 対象となったソース画像の数（重複として除外したものを含まない）
    pub considered: usize,
    /// 派生画像を1つ以上（再）生成したソースのファイル名
    pub updated: Vec<String>,
    pub derivatives_written: usize,
    pub derivatives_current: usize,
    /// 同じベース名の先行ソースがあったため除外したファイル名
    pub duplicates: Vec<String>,
    pub dry_run: bool,
}

// ユーザーに区別して見せる3つの結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    NoImages,
    UpToDate,
    Updated(usize),
}

impl Summary {
    pub fn outcome(&self) -> Outcome {
        if self.considered == 0 {
            Outcome::NoImages
        } else if self.updated.is_empty() {
            Outcome::UpToDate
        } else {
            Outcome::Updated(self.updated.len())
        }
    }

    pub fn message(&self) -> String {
        match self.outcome() {
            Outcome::NoImages => "No JPG images found to optimize.".to_string(),
            Outcome::UpToDate => "Images already optimized.".to_string(),
            Outcome::Updated(n) if self.dry_run => format!("Would optimize {} image(s).", n),
            Outcome::Updated(n) => format!("Optimized {} image(s).", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_outcomes_are_distinguishable() {
        let empty = Summary::default();
        assert_eq!(empty.outcome(), Outcome::NoImages);
        assert_eq!(empty.message(), "No JPG images found to optimize.");

        let current = Summary {
            considered: 3,
            derivatives_current: 6,
            ..Summary::default()
        };
        assert_eq!(current.outcome(), Outcome::UpToDate);
        assert_eq!(current.message(), "Images already optimized.");

        let updated = Summary {
            considered: 3,
            updated: vec!["a.jpg".into(), "b.jpeg".into()],
            derivatives_written: 3,
            ..Summary::default()
        };
        assert_eq!(updated.outcome(), Outcome::Updated(2));
        assert_eq!(updated.message(), "Optimized 2 image(s).");
    }

    #[test]
    fn dry_run_message_uses_conditional_wording() {
        let planned = Summary {
            considered: 1,
            updated: vec!["a.jpg".into()],
            dry_run: true,
            ..Summary::default()
        };
        assert_eq!(planned.message(), "Would optimize 1 image(s).");
    }
}

use crate::analyzer::base::{ReadingAnalyzer, ReadingFragment};

/// 形態素解析をせず、テキスト全体を読みの無い一区切りとして返す。
/// かなだけの入力や、辞書を用意できない環境向け。
#[derive(Debug, Default, Clone, Copy)]
pub struct PassthroughAnalyzer {}

impl ReadingAnalyzer for PassthroughAnalyzer {
    fn analyze(&self, text: &str) -> anyhow::Result<Vec<ReadingFragment>> {
        if text.is_empty() {
            return Ok(Vec::new());
        }
        Ok(vec![ReadingFragment::new(None, text)])
    }
}

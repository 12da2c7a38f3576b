use log::trace;

use crate::kana::normalize_reading;

/// 形態素解析器が返す一区切り。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadingFragment {
    /// 読み。解析器が読みを付けられなかった場合は None。
    pub reading: Option<String>,
    /// 表層形
    pub surface: String,
}

impl ReadingFragment {
    pub fn new(reading: Option<&str>, surface: &str) -> ReadingFragment {
        ReadingFragment {
            reading: reading.map(|s| s.to_string()),
            surface: surface.to_string(),
        }
    }
}

/// テキストに読みを付ける。形態素解析器をこの裏に隠す。
///
/// 実装は呼び出しの間で状態を持ち越さないこと。
pub trait ReadingAnalyzer {
    fn analyze(&self, text: &str) -> anyhow::Result<Vec<ReadingFragment>>;
}

impl<T: ReadingAnalyzer + ?Sized> ReadingAnalyzer for &T {
    fn analyze(&self, text: &str) -> anyhow::Result<Vec<ReadingFragment>> {
        (**self).analyze(text)
    }
}

impl<T: ReadingAnalyzer + ?Sized> ReadingAnalyzer for Box<T> {
    fn analyze(&self, text: &str) -> anyhow::Result<Vec<ReadingFragment>> {
        (**self).analyze(text)
    }
}

/// 一つのテキスト全体の読みと表層形。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyzedText {
    /// カタカナに正規化済みの読み
    pub reading: String,
    pub surface: String,
}

/// 区切りごとの読みと表層形をつなげる。
/// 読みの無い区切りは表層形をそのまま読みとして使う。
pub fn assemble(fragments: &[ReadingFragment]) -> AnalyzedText {
    let mut reading = String::new();
    let mut surface = String::new();
    for fragment in fragments {
        reading.push_str(fragment.reading.as_deref().unwrap_or(fragment.surface.as_str()));
        surface.push_str(&fragment.surface);
    }

    let reading = normalize_reading(&reading);
    trace!("assemble: {} => {}", surface, reading);
    AnalyzedText { reading, surface }
}

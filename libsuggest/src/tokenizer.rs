use log::debug;
use serde::Serialize;

use crate::analyzer::base::{assemble, ReadingAnalyzer};
use crate::config::SuggestConfig;
use crate::keystroke::edge_ngram::to_edge_ngrams;
use crate::keystroke::keystroke_set::KeystrokeSet;
use crate::keystroke::Keystroke;
use crate::romaji::canonical::canonicalize;
use crate::romaji::expander::expand_units;
use crate::romaji::segmenter::segment;
use crate::romaji::table::resolve;

/// 索引に渡すトークン。
/// 全ての候補が同じ位置に重なるように、先頭だけ位置増分 1、以降は 0 になる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestToken {
    pub term: String,
    pub start_offset: usize,
    pub end_offset: usize,
    pub position_increment: u32,
    pub position_length: u32,
    pub weight: u32,
    pub weights: Vec<u32>,
}

/// Keystroke の列をトークンとして順に返す。
pub struct KeystrokeTokenStream {
    keystrokes: std::vec::IntoIter<Keystroke>,
    first: bool,
}

impl KeystrokeTokenStream {
    pub fn new(keystrokes: Vec<Keystroke>) -> KeystrokeTokenStream {
        KeystrokeTokenStream {
            keystrokes: keystrokes.into_iter(),
            first: true,
        }
    }
}

impl Iterator for KeystrokeTokenStream {
    type Item = SuggestToken;

    fn next(&mut self) -> Option<Self::Item> {
        let keystroke = self.keystrokes.next()?;

        let position_increment = if self.first {
            self.first = false;
            1
        } else {
            0
        };
        Some(SuggestToken {
            end_offset: keystroke.char_len(),
            term: keystroke.key().to_string(),
            start_offset: 0,
            position_increment,
            position_length: 1,
            weight: keystroke.weight(),
            weights: keystroke.weight_history().to_vec(),
        })
    }
}

/**
 * テキストを、IME で打鍵しうるローマ字列のトークンに変換する。
 *
 * 1. 形態素解析器で読みを付け、読みと表層形をつなげる
 * 2. 読みをモーラに分割し、展開（`expand`）または標準形（canonical）の打鍵列を作る
 * 3. 解析器の読み間違いに備えて、表層形そのものも打鍵列として加える
 * 4. `edge_ngram` なら先頭からの部分文字列に展開する
 */
pub struct SuggestTokenizer<A: ReadingAnalyzer> {
    analyzer: A,
    config: SuggestConfig,
}

impl<A: ReadingAnalyzer> SuggestTokenizer<A> {
    pub fn new(analyzer: A, config: SuggestConfig) -> SuggestTokenizer<A> {
        SuggestTokenizer { analyzer, config }
    }

    pub fn config(&self) -> &SuggestConfig {
        &self.config
    }

    pub fn analyzer(&self) -> &A {
        &self.analyzer
    }

    /// edge n-gram 展開前の打鍵列。
    pub fn full_keystrokes(&self, text: &str) -> anyhow::Result<Vec<Keystroke>> {
        let fragments = if text.is_empty() {
            Vec::new()
        } else {
            self.analyzer.analyze(text)?
        };
        let analyzed = assemble(&fragments);
        let moras = segment(&analyzed.reading);

        let mut keystrokes: KeystrokeSet = if self.config.expand {
            expand_units(&resolve(&moras), self.config.effective_max_expansions())
                .into_iter()
                .collect()
        } else {
            canonicalize(&moras).into_iter().collect()
        };

        // 解析器の読みが正しいとは限らないので、入力そのものでも当たるようにする
        if !analyzed.surface.is_empty() {
            let surface_len = analyzed.surface.chars().count() as u32;
            keystrokes.insert(Keystroke::new(&analyzed.surface, surface_len));
        }

        debug!(
            "keystrokes: {}/{} => {} candidates",
            analyzed.surface,
            analyzed.reading,
            keystrokes.len()
        );
        Ok(keystrokes.into_vec())
    }

    /// トークンにする直前の打鍵列。`edge_ngram` の設定を反映する。
    pub fn keystrokes(&self, text: &str) -> anyhow::Result<Vec<Keystroke>> {
        let keystrokes = self.full_keystrokes(text)?;
        if self.config.edge_ngram {
            Ok(to_edge_ngrams(&keystrokes))
        } else {
            Ok(keystrokes)
        }
    }

    pub fn tokenize(&self, text: &str) -> anyhow::Result<KeystrokeTokenStream> {
        Ok(KeystrokeTokenStream::new(self.keystrokes(text)?))
    }
}

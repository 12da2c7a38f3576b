use std::collections::BTreeMap;
use std::ops::Bound;

use log::{debug, info};
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::analyzer::base::{assemble, ReadingAnalyzer};
use crate::romaji::to_canonical_keystroke;
use crate::tokenizer::SuggestTokenizer;

/// 補完候補
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub text: String,
    /// エントリ自体の重み + 一致した打鍵列の重み（u32::MAX で頭打ち）。小さいほど上位。
    pub score: u32,
    /// 一致した打鍵列
    pub matched: String,
}

/// 打鍵列の前方一致で補完候補を引く、メモリ上の索引。
///
/// 登録したテキストは `SuggestTokenizer` で打鍵列に変換し、打鍵列 → エントリの
/// 順序付きマップに入れる。検索時はキーの範囲走査で前方一致をとるので、
/// edge n-gram の展開は不要。
pub struct CompletionIndex<A: ReadingAnalyzer> {
    tokenizer: SuggestTokenizer<A>,
    entries: Vec<(String, u32)>,
    keys: BTreeMap<String, Vec<(usize, u32)>>,
}

impl<A: ReadingAnalyzer> CompletionIndex<A> {
    pub fn new(tokenizer: SuggestTokenizer<A>) -> CompletionIndex<A> {
        CompletionIndex {
            tokenizer,
            entries: Vec::new(),
            keys: BTreeMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// テキストを登録する。`weight` は小さいほど上位に出る。
    pub fn add(&mut self, text: &str, weight: u32) -> anyhow::Result<()> {
        let id = self.entries.len();
        let keystrokes = self.tokenizer.full_keystrokes(text)?;
        // 問い合わせ側と同じく英字は小文字で引けるようにする
        for keystroke in keystrokes {
            self.keys
                .entry(keystroke.key().to_lowercase())
                .or_default()
                .push((id, keystroke.weight()));
        }
        self.entries.push((text.to_string(), weight));
        Ok(())
    }

    /// 入力途中の文字列 `query` に前方一致するエントリを、スコアの小さい順に最大 `size` 件返す。
    ///
    /// `query` はそのまま（英字は小文字にして）照合するほか、かな入力の場合に備えて
    /// 標準的な打鍵列に変換したものでも照合する。
    pub fn suggest(&self, query: &str, size: usize) -> anyhow::Result<Vec<Suggestion>> {
        if query.is_empty() || size == 0 {
            return Ok(Vec::new());
        }

        let mut prefixes = vec![query.to_lowercase()];
        if let Some(canonical) = self.canonical_query(query)? {
            if !prefixes.contains(&canonical) {
                prefixes.push(canonical);
            }
        }

        // エントリごとに最良のスコアだけを残す
        let mut best: FxHashMap<usize, (u32, &str)> = FxHashMap::default();
        for prefix in &prefixes {
            let range = self
                .keys
                .range::<str, _>((Bound::Included(prefix.as_str()), Bound::Unbounded));
            for (key, postings) in range {
                if !key.starts_with(prefix.as_str()) {
                    break;
                }
                for &(id, keystroke_weight) in postings {
                    let score = self.entries[id].1.saturating_add(keystroke_weight);
                    best.entry(id)
                        .and_modify(|e| {
                            if score < e.0 {
                                *e = (score, key.as_str());
                            }
                        })
                        .or_insert((score, key.as_str()));
                }
            }
        }

        let mut hits: Vec<(usize, u32, &str)> = best
            .into_iter()
            .map(|(id, (score, matched))| (id, score, matched))
            .collect();
        hits.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        hits.truncate(size);

        debug!("suggest: {:?} => {} hits", prefixes, hits.len());
        Ok(hits
            .into_iter()
            .map(|(id, score, matched)| Suggestion {
                text: self.entries[id].0.clone(),
                score,
                matched: matched.to_string(),
            })
            .collect())
    }

    fn canonical_query(&self, query: &str) -> anyhow::Result<Option<String>> {
        let fragments = self.tokenizer.analyzer().analyze(query)?;
        let analyzed = assemble(&fragments);
        Ok(to_canonical_keystroke(&analyzed.reading).map(|k| k.key().to_string()))
    }

    /// 行ごとのテキストからまとめて登録する。
    /// 各行は `text` または `text<TAB>weight`。空行と `#` で始まる行は無視する。
    pub fn add_lines<'a, I: IntoIterator<Item = &'a str>>(
        &mut self,
        lines: I,
    ) -> anyhow::Result<()> {
        for line in lines {
            let line = line.trim_end();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (text, weight) = match line.split_once('\t') {
                Some((text, weight)) => (text, weight.trim().parse::<u32>()?),
                None => (line, 0),
            };
            self.add(text, weight)?;
        }
        info!("CompletionIndex: {} entries", self.entries.len());
        Ok(())
    }
}

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

use serde::Serialize;

pub mod edge_ngram;
pub mod keystroke_set;

/// IME でタイプされうるキー入力列の候補。
///
/// 同一性は `key` だけで決まる。重みが違っても同じキーなら同じ候補として扱い、
/// マージ時に重みの履歴を残す。
#[derive(Debug, Clone, Serialize)]
pub struct Keystroke {
    /// ローマ字のキー入力列。空にはならない。
    key: String,
    /// コスト。小さいほど標準的な入力。
    weight: u32,
    /// マージで捨てられた重みの履歴
    weight_history: Vec<u32>,
}

impl Keystroke {
    pub fn new(key: &str, weight: u32) -> Keystroke {
        assert!(!key.is_empty(), "Keystroke shouldn't be empty");

        Keystroke {
            key: key.to_string(),
            weight,
            weight_history: Vec::new(),
        }
    }

    pub(crate) fn from_parts(key: String, weight: u32, weight_history: Vec<u32>) -> Keystroke {
        debug_assert!(!key.is_empty());
        Keystroke {
            key,
            weight,
            weight_history,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }

    pub fn weight_history(&self) -> &[u32] {
        &self.weight_history
    }

    /// キーの文字数。
    pub fn char_len(&self) -> usize {
        self.key.chars().count()
    }

    /// 同じキーを持つ候補を取り込む。
    /// 重みは小さい方を残し、もう一方の重み（とその履歴）は `weight_history` に積む。
    pub fn merge(&mut self, other: Keystroke) {
        debug_assert_eq!(self.key, other.key);

        let discarded = if other.weight < self.weight {
            std::mem::replace(&mut self.weight, other.weight)
        } else {
            other.weight
        };
        self.weight_history.push(discarded);
        self.weight_history.extend(other.weight_history);
    }

    /// 末尾にローマ字を継ぎ足した新しい候補を作る。
    /// 履歴にも同じコストを足して、完成した候補の重みとして読めるようにしておく。
    pub(crate) fn extend(&self, romaji: &str, cost: u32) -> Keystroke {
        let mut key = String::with_capacity(self.key.len() + romaji.len());
        key.push_str(&self.key);
        key.push_str(romaji);
        Keystroke {
            key,
            weight: self.weight + cost,
            weight_history: self.weight_history.iter().map(|w| w + cost).collect(),
        }
    }

    /// 短いキーが先、同じ長さなら辞書順。
    pub fn cmp_by_length(&self, other: &Keystroke) -> Ordering {
        self.char_len()
            .cmp(&other.char_len())
            .then_with(|| self.key.cmp(&other.key))
    }

    /// 重みの小さい順。同じ重みなら [`Keystroke::cmp_by_length`] の順。
    pub fn cmp_by_weight(&self, other: &Keystroke) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.cmp_by_length(other))
    }
}

impl PartialEq<Self> for Keystroke {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Keystroke {}

impl Hash for Keystroke {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl PartialOrd for Keystroke {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Keystroke {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_by_length(other)
    }
}

impl Display for Keystroke {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.key, self.weight)
    }
}

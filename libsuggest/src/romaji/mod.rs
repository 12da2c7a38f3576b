//! カタカナの読みを、IME で打鍵するローマ字列の候補に変換する。

use crate::keystroke::Keystroke;

pub mod canonical;
pub mod expander;
pub mod mora;
pub mod segmenter;
pub mod table;

/// 読みから最大 `max_expansions` 件の打鍵列を作る。
pub fn to_keystrokes(reading: &str, max_expansions: i32) -> Vec<Keystroke> {
    expander::expand(&segmenter::segment(reading), max_expansions)
}

/// 読みから標準的な打鍵列を一つ作る。
pub fn to_canonical_keystroke(reading: &str) -> Option<Keystroke> {
    canonical::canonicalize(&segmenter::segment(reading))
}

use crate::keystroke::Keystroke;

/// 各 Keystroke を先頭からの部分文字列 (edge n-gram) に展開する。
///
/// 長さ L のキーからは長さ 1..=L の L 個の Keystroke を短い順に作る。
/// 重みと履歴は元の Keystroke のものをそのまま引き継ぐ。
/// 異なる Keystroke 由来の同じ接頭辞があっても重複排除はしない。
pub fn to_edge_ngrams(keystrokes: &[Keystroke]) -> Vec<Keystroke> {
    let capacity = keystrokes.iter().map(|k| k.char_len()).sum();
    let mut result = Vec::with_capacity(capacity);

    for keystroke in keystrokes {
        let key = keystroke.key();
        for (end, c) in key.char_indices() {
            let prefix = &key[..end + c.len_utf8()];
            result.push(Keystroke::from_parts(
                prefix.to_string(),
                keystroke.weight(),
                keystroke.weight_history().to_vec(),
            ));
        }
    }
    result
}

use crate::keystroke::Keystroke;
use crate::romaji::mora::Mora;
use crate::romaji::table::resolve;

/// 各単位で最もコストの低い綴りだけを選んでつなげた、唯一の標準的な打鍵列。
/// `expand(moras, 1)` と同じ結果になるが、フロンティアを作らずに直接求める。
/// モーラ列が空の場合のみ None。
pub fn canonicalize(moras: &[Mora]) -> Option<Keystroke> {
    let units = resolve(moras);
    if units.is_empty() {
        return None;
    }

    let mut key = String::new();
    let mut weight = 0;
    for alternatives in &units {
        // resolve() はコスト順・辞書順に並べた空でないリストを返す
        let best = &alternatives[0];
        key.push_str(&best.romaji);
        weight += best.cost;
    }
    Some(Keystroke::new(&key, weight))
}

use log::trace;

use crate::keystroke::keystroke_set::KeystrokeSet;
use crate::keystroke::Keystroke;
use crate::romaji::mora::Mora;
use crate::romaji::table::{resolve, Romanization};

/**
 * モーラ列から、打鍵列の候補を重みの小さいものから最大 `max_expansions` 件作る。
 *
 * 全組み合わせは読みの長さに対して指数的に増えるので、単位ごとに途中までの打鍵列
 * （フロンティア）を伸ばしては上位 `max_expansions` 件に刈り込む。
 * コストは単位を足すごとに単調非減少なので、刈り込んだ接頭辞が最終的な上位に
 * 返り咲くことはない。
 *
 * 結果は短い順・辞書順に並ぶ。`max_expansions` が 0 以下の場合は 1 として扱う。
 */
pub fn expand(moras: &[Mora], max_expansions: i32) -> Vec<Keystroke> {
    expand_units(&resolve(moras), expansion_limit(max_expansions))
}

/// 0 以下の上限は 1 に切り上げる
pub(crate) fn expansion_limit(max_expansions: i32) -> usize {
    max_expansions.max(1) as usize
}

pub(crate) fn expand_units(units: &[Vec<Romanization>], limit: usize) -> Vec<Keystroke> {
    let Some((first, rest)) = units.split_first() else {
        return Vec::new();
    };

    let mut frontier: KeystrokeSet = first
        .iter()
        .map(|r| Keystroke::new(&r.romaji, r.cost))
        .collect();
    frontier.retain_cheapest(limit);

    for alternatives in rest {
        let mut next = KeystrokeSet::with_capacity(frontier.len() * alternatives.len());
        for prefix in frontier.iter() {
            for r in alternatives {
                next.insert(prefix.extend(&r.romaji, r.cost));
            }
        }
        next.retain_cheapest(limit);
        frontier = next;
    }

    let result = frontier.into_sorted_vec();
    trace!(
        "expand: {} units, limit={} => {}",
        units.len(),
        limit,
        result.len()
    );
    result
}

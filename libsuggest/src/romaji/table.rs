use rustc_hash::FxHashSet;

use crate::romaji::mora::{Mora, MoraKind};

/// モーラのローマ字表記の一つ。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Romanization {
    pub romaji: String,
    pub cost: u32,
}

impl Romanization {
    pub fn new(romaji: &str, cost: u32) -> Romanization {
        Romanization {
            romaji: romaji.to_string(),
            cost,
        }
    }
}

type Entry = (&'static str, &'static [(&'static str, u32)]);

/// かな → (ローマ字, コスト) の表。
///
/// ヘボン式の綴りをコスト 0 とし、訓令式や IME 独自の綴りを 1、
/// あまり使われない綴りを 2 とする。各行はコスト順・辞書順に並べておくこと。
/// 「ッ」「ン」「ー」は前後の文脈で決まるのでここには無い。
const MORA_TABLE: &[Entry] = &[
    ("ア", &[("a", 0)]),
    ("イ", &[("i", 0)]),
    ("ウ", &[("u", 0), ("wu", 1)]),
    ("エ", &[("e", 0)]),
    ("オ", &[("o", 0)]),
    ("カ", &[("ka", 0), ("ca", 1)]),
    ("キ", &[("ki", 0)]),
    ("ク", &[("ku", 0), ("cu", 1), ("qu", 2)]),
    ("ケ", &[("ke", 0)]),
    ("コ", &[("ko", 0), ("co", 1)]),
    ("ガ", &[("ga", 0)]),
    ("ギ", &[("gi", 0)]),
    ("グ", &[("gu", 0)]),
    ("ゲ", &[("ge", 0)]),
    ("ゴ", &[("go", 0)]),
    ("サ", &[("sa", 0)]),
    ("シ", &[("shi", 0), ("si", 1)]),
    ("ス", &[("su", 0)]),
    ("セ", &[("se", 0), ("ce", 1)]),
    ("ソ", &[("so", 0)]),
    ("ザ", &[("za", 0)]),
    ("ジ", &[("ji", 0), ("zi", 1)]),
    ("ズ", &[("zu", 0)]),
    ("ゼ", &[("ze", 0)]),
    ("ゾ", &[("zo", 0)]),
    ("タ", &[("ta", 0)]),
    ("チ", &[("chi", 0), ("ti", 1)]),
    ("ツ", &[("tsu", 0), ("tu", 1)]),
    ("テ", &[("te", 0)]),
    ("ト", &[("to", 0)]),
    ("ダ", &[("da", 0)]),
    ("ヂ", &[("di", 0)]),
    ("ヅ", &[("du", 0)]),
    ("デ", &[("de", 0)]),
    ("ド", &[("do", 0)]),
    ("ナ", &[("na", 0)]),
    ("ニ", &[("ni", 0)]),
    ("ヌ", &[("nu", 0)]),
    ("ネ", &[("ne", 0)]),
    ("ノ", &[("no", 0)]),
    ("ハ", &[("ha", 0)]),
    ("ヒ", &[("hi", 0)]),
    ("フ", &[("fu", 0), ("hu", 1)]),
    ("ヘ", &[("he", 0)]),
    ("ホ", &[("ho", 0)]),
    ("バ", &[("ba", 0)]),
    ("ビ", &[("bi", 0)]),
    ("ブ", &[("bu", 0)]),
    ("ベ", &[("be", 0)]),
    ("ボ", &[("bo", 0)]),
    ("パ", &[("pa", 0)]),
    ("ピ", &[("pi", 0)]),
    ("プ", &[("pu", 0)]),
    ("ペ", &[("pe", 0)]),
    ("ポ", &[("po", 0)]),
    ("マ", &[("ma", 0)]),
    ("ミ", &[("mi", 0)]),
    ("ム", &[("mu", 0)]),
    ("メ", &[("me", 0)]),
    ("モ", &[("mo", 0)]),
    ("ヤ", &[("ya", 0)]),
    ("ユ", &[("yu", 0)]),
    ("ヨ", &[("yo", 0)]),
    ("ラ", &[("ra", 0)]),
    ("リ", &[("ri", 0)]),
    ("ル", &[("ru", 0)]),
    ("レ", &[("re", 0)]),
    ("ロ", &[("ro", 0)]),
    ("ワ", &[("wa", 0)]),
    ("ヰ", &[("wyi", 0)]),
    ("ヱ", &[("wye", 0)]),
    ("ヲ", &[("wo", 0)]),
    ("ヴ", &[("vu", 0)]),
    // 小書き文字（単独で現れた場合）
    ("ァ", &[("xa", 0), ("la", 1)]),
    ("ィ", &[("xi", 0), ("li", 1)]),
    ("ゥ", &[("xu", 0), ("lu", 1)]),
    ("ェ", &[("xe", 0), ("le", 1)]),
    ("ォ", &[("xo", 0), ("lo", 1)]),
    ("ャ", &[("xya", 0), ("lya", 1)]),
    ("ュ", &[("xyu", 0), ("lyu", 1)]),
    ("ョ", &[("xyo", 0), ("lyo", 1)]),
    ("ヮ", &[("xwa", 0), ("lwa", 1)]),
    ("ヵ", &[("xka", 0), ("lka", 1)]),
    ("ヶ", &[("xke", 0), ("lke", 1)]),
    // 拗音
    ("キャ", &[("kya", 0)]),
    ("キュ", &[("kyu", 0)]),
    ("キョ", &[("kyo", 0)]),
    ("キェ", &[("kye", 0)]),
    ("ギャ", &[("gya", 0)]),
    ("ギュ", &[("gyu", 0)]),
    ("ギョ", &[("gyo", 0)]),
    ("シャ", &[("sha", 0), ("sya", 1)]),
    ("シュ", &[("shu", 0), ("syu", 1)]),
    ("ショ", &[("sho", 0), ("syo", 1)]),
    ("シェ", &[("she", 0), ("sye", 1)]),
    ("ジャ", &[("ja", 0), ("zya", 1), ("jya", 2)]),
    ("ジュ", &[("ju", 0), ("zyu", 1), ("jyu", 2)]),
    ("ジョ", &[("jo", 0), ("zyo", 1), ("jyo", 2)]),
    ("ジェ", &[("je", 0), ("zye", 1), ("jye", 2)]),
    ("チャ", &[("cha", 0), ("tya", 1), ("cya", 2)]),
    ("チュ", &[("chu", 0), ("tyu", 1), ("cyu", 2)]),
    ("チョ", &[("cho", 0), ("tyo", 1), ("cyo", 2)]),
    ("チェ", &[("che", 0), ("tye", 1), ("cye", 2)]),
    ("ヂャ", &[("dya", 0)]),
    ("ヂュ", &[("dyu", 0)]),
    ("ヂョ", &[("dyo", 0)]),
    ("ニャ", &[("nya", 0)]),
    ("ニュ", &[("nyu", 0)]),
    ("ニョ", &[("nyo", 0)]),
    ("ヒャ", &[("hya", 0)]),
    ("ヒュ", &[("hyu", 0)]),
    ("ヒョ", &[("hyo", 0)]),
    ("ビャ", &[("bya", 0)]),
    ("ビュ", &[("byu", 0)]),
    ("ビョ", &[("byo", 0)]),
    ("ピャ", &[("pya", 0)]),
    ("ピュ", &[("pyu", 0)]),
    ("ピョ", &[("pyo", 0)]),
    ("ミャ", &[("mya", 0)]),
    ("ミュ", &[("myu", 0)]),
    ("ミョ", &[("myo", 0)]),
    ("リャ", &[("rya", 0)]),
    ("リュ", &[("ryu", 0)]),
    ("リョ", &[("ryo", 0)]),
    // 外来語の表記
    ("ティ", &[("thi", 0)]),
    ("ディ", &[("dhi", 0)]),
    ("デュ", &[("dhu", 0)]),
    ("トゥ", &[("twu", 0)]),
    ("ドゥ", &[("dwu", 0)]),
    ("ファ", &[("fa", 0)]),
    ("フィ", &[("fi", 0)]),
    ("フェ", &[("fe", 0)]),
    ("フォ", &[("fo", 0)]),
    ("フュ", &[("fyu", 0)]),
    ("ウィ", &[("wi", 0)]),
    ("ウェ", &[("we", 0)]),
    ("ウォ", &[("who", 0)]),
    ("ヴァ", &[("va", 0)]),
    ("ヴィ", &[("vi", 0)]),
    ("ヴェ", &[("ve", 0)]),
    ("ヴォ", &[("vo", 0)]),
    ("ヴュ", &[("vyu", 0)]),
    ("ツァ", &[("tsa", 0)]),
    ("ツィ", &[("tsi", 0)]),
    ("ツェ", &[("tse", 0)]),
    ("ツォ", &[("tso", 0)]),
];

const SOKUON: &[(&str, u32)] = &[("xtu", 0), ("ltu", 1)];

fn find(kana: &str) -> Option<&'static [(&'static str, u32)]> {
    MORA_TABLE
        .iter()
        .find(|(k, _)| *k == kana)
        .map(|(_, romajis)| *romajis)
}

pub(crate) fn has_entry(kana: &str) -> bool {
    find(kana).is_some()
}

fn to_romanizations(romajis: &[(&str, u32)]) -> Vec<Romanization> {
    romajis
        .iter()
        .map(|(romaji, cost)| Romanization::new(romaji, *cost))
        .collect()
}

/// 文脈を考えずにモーラを引く。長音記号は反映しない。
/// 表に無いモーラはそのままの文字列をコスト 0 で返す。
pub fn lookup(mora: &Mora) -> Vec<Romanization> {
    match mora.kind() {
        MoraKind::Kana => match find(mora.text()) {
            Some(romajis) => to_romanizations(romajis),
            None => vec![Romanization::new(mora.text(), 0)],
        },
        MoraKind::Sokuon => to_romanizations(SOKUON),
        MoraKind::Hatsuon => hatsuon(None),
        MoraKind::Literal => vec![Romanization::new(mora.text(), 0)],
    }
}

/// 「ン」の綴り。次のモーラの先頭の音で決まる。
fn hatsuon(next_initial: Option<char>) -> Vec<Romanization> {
    let romajis: &[(&str, u32)] = match next_initial {
        // 文末
        None => &[("n", 0), ("nn", 1)],
        // "na" や "ya" と区別がつかなくなるので重ねる
        Some('a' | 'i' | 'u' | 'e' | 'o' | 'y' | 'n') => &[("nn", 0), ("xn", 1)],
        Some('b' | 'm' | 'p') => &[("n", 0), ("nn", 1), ("m", 2)],
        Some(_) => &[("n", 0), ("nn", 1)],
    };
    to_romanizations(romajis)
}

/// 次のモーラの標準的な綴りの先頭文字
fn initial_of(next: Option<&Mora>) -> Option<char> {
    let next = next?;
    lookup(next).first().and_then(|r| r.romaji.chars().next())
}

/// 長音記号の分だけ綴りを伸ばす。
/// IME で打つ "-" をそのままコスト据え置きで、母音を重ねる綴りをコスト +1 で加える。
fn lengthen(base: Vec<Romanization>, long_marks: usize) -> Vec<Romanization> {
    if long_marks == 0 {
        return base;
    }

    let mut result = Vec::with_capacity(base.len() * 2);
    for r in base {
        let vowel = r
            .romaji
            .chars()
            .last()
            .filter(|c| matches!(c, 'a' | 'i' | 'u' | 'e' | 'o'));
        result.push(Romanization {
            romaji: r.romaji.clone() + &"-".repeat(long_marks),
            cost: r.cost,
        });
        if let Some(vowel) = vowel {
            result.push(Romanization {
                romaji: r.romaji + &vowel.to_string().repeat(long_marks),
                cost: r.cost + 1,
            });
        }
    }
    sort_and_dedup(result)
}

/// 「ッ」と次のモーラをまとめた綴り。
/// 次のモーラの子音を重ねる綴りが一つも作れない場合は None。
fn geminate(following: &[Romanization]) -> Option<Vec<Romanization>> {
    let mut result = Vec::with_capacity(following.len() * 3);
    for r in following {
        if let Some(c) = r.romaji.chars().next().filter(|c| is_doubling_consonant(*c)) {
            let mut romaji = String::with_capacity(r.romaji.len() + 1);
            romaji.push(c);
            romaji.push_str(&r.romaji);
            result.push(Romanization {
                romaji,
                cost: r.cost,
            });
        }
    }
    if result.is_empty() {
        return None;
    }

    for r in following {
        for (i, (sokuon, _)) in SOKUON.iter().enumerate() {
            result.push(Romanization {
                romaji: sokuon.to_string() + &r.romaji,
                cost: r.cost + i as u32 + 1,
            });
        }
    }
    Some(sort_and_dedup(result))
}

fn is_doubling_consonant(c: char) -> bool {
    // "nn" は「ン」になってしまうので重ねられない
    c.is_ascii_lowercase() && !matches!(c, 'a' | 'i' | 'u' | 'e' | 'o' | 'n')
}

/// コスト順・辞書順に並べ、同じ綴りは安い方だけ残す。
fn sort_and_dedup(mut romanizations: Vec<Romanization>) -> Vec<Romanization> {
    romanizations.sort_by(|a, b| a.cost.cmp(&b.cost).then_with(|| a.romaji.cmp(&b.romaji)));
    let mut seen: FxHashSet<String> = FxHashSet::default();
    romanizations.retain(|r| seen.insert(r.romaji.clone()));
    romanizations
}

/// 前後の文脈を反映したモーラの綴り。長音記号も反映する。
fn alternatives(mora: &Mora, next: Option<&Mora>) -> Vec<Romanization> {
    let base = match mora.kind() {
        MoraKind::Hatsuon => hatsuon(initial_of(next)),
        _ => lookup(mora),
    };
    lengthen(base, mora.long_marks())
}

/// モーラ列を、展開の単位ごとの綴りの候補リストに変換する。
///
/// 基本的には 1 モーラが 1 単位だが、「ッ」は子音を重ねる都合上、
/// 次のモーラとまとめて 1 単位になることがある。
/// どの単位の候補リストも空にはならず、コスト順・辞書順に並ぶ。
pub fn resolve(moras: &[Mora]) -> Vec<Vec<Romanization>> {
    let mut units = Vec::with_capacity(moras.len());

    let mut i = 0;
    while i < moras.len() {
        let mora = &moras[i];
        let next = moras.get(i + 1);

        if mora.kind() == MoraKind::Sokuon && mora.long_marks() == 0 {
            if let Some(next) = next.filter(|m| m.kind() == MoraKind::Kana) {
                let following = alternatives(next, moras.get(i + 2));
                if let Some(combined) = geminate(&following) {
                    units.push(combined);
                    i += 2;
                    continue;
                }
            }
        }

        units.push(alternatives(mora, next));
        i += 1;
    }
    units
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::romaji::segmenter::segment;

    fn romajis(romanizations: &[Romanization]) -> Vec<(&str, u32)> {
        romanizations
            .iter()
            .map(|r| (r.romaji.as_str(), r.cost))
            .collect()
    }

    #[test]
    fn test_table_is_sorted() {
        for (kana, romajis) in MORA_TABLE {
            assert!(!romajis.is_empty(), "{kana}");
            for w in romajis.windows(2) {
                assert!(
                    (w[0].1, w[0].0) < (w[1].1, w[1].0),
                    "{kana}: {:?} must come before {:?}",
                    w[0],
                    w[1]
                );
            }
            assert_eq!(romajis[0].1, 0, "{kana}: canonical cost must be 0");
        }
    }

    #[test]
    fn test_table_has_no_duplicate_kana() {
        let mut seen = FxHashSet::default();
        for (kana, _) in MORA_TABLE {
            assert!(seen.insert(*kana), "duplicated: {kana}");
        }
    }

    #[test]
    fn test_lookup() {
        let shi = Mora::new("シ", MoraKind::Kana);
        assert_eq!(romajis(&lookup(&shi)), vec![("shi", 0), ("si", 1)]);

        let tsu = Mora::new("ツ", MoraKind::Kana);
        assert_eq!(romajis(&lookup(&tsu)), vec![("tsu", 0), ("tu", 1)]);
    }

    #[test]
    fn test_lookup_fallback() {
        let dot = Mora::new("・", MoraKind::Kana);
        assert_eq!(romajis(&lookup(&dot)), vec![("・", 0)]);

        let literal = Mora::new("A", MoraKind::Literal);
        assert_eq!(romajis(&lookup(&literal)), vec![("A", 0)]);
    }

    #[test]
    fn test_resolve_long_vowel() {
        let units = resolve(&segment("ラー"));
        assert_eq!(units.len(), 1);
        assert_eq!(romajis(&units[0]), vec![("ra-", 0), ("raa", 1)]);
    }

    #[test]
    fn test_resolve_sokuon() {
        let units = resolve(&segment("キッテ"));
        assert_eq!(units.len(), 2);
        assert_eq!(
            romajis(&units[1]),
            vec![("tte", 0), ("xtute", 1), ("ltute", 2)]
        );
    }

    #[test]
    fn test_resolve_sokuon_doubles_each_alternative() {
        let units = resolve(&segment("ッチ"));
        assert_eq!(units.len(), 1);
        assert_eq!(
            romajis(&units[0]),
            vec![
                ("cchi", 0),
                ("tti", 1),
                ("xtuchi", 1),
                ("ltuchi", 2),
                ("xtuti", 2),
                ("ltuti", 3),
            ]
        );
    }

    #[test]
    fn test_resolve_sokuon_without_consonant() {
        // 母音や「ナ」行の前、文末では子音を重ねられない
        for reading in ["ッア", "ッナ", "アッ"] {
            let units = resolve(&segment(reading));
            assert_eq!(units.len(), 2, "{reading}");
        }
        let units = resolve(&segment("アッ"));
        assert_eq!(romajis(&units[1]), vec![("xtu", 0), ("ltu", 1)]);
    }

    #[test]
    fn test_resolve_hatsuon() {
        let units = resolve(&segment("ンア"));
        assert_eq!(romajis(&units[0]), vec![("nn", 0), ("xn", 1)]);

        let units = resolve(&segment("ンヤ"));
        assert_eq!(romajis(&units[0]), vec![("nn", 0), ("xn", 1)]);

        let units = resolve(&segment("ンナ"));
        assert_eq!(romajis(&units[0]), vec![("nn", 0), ("xn", 1)]);

        let units = resolve(&segment("ンバ"));
        assert_eq!(romajis(&units[0]), vec![("n", 0), ("nn", 1), ("m", 2)]);

        let units = resolve(&segment("ンカ"));
        assert_eq!(romajis(&units[0]), vec![("n", 0), ("nn", 1)]);

        let units = resolve(&segment("ン"));
        assert_eq!(romajis(&units[0]), vec![("n", 0), ("nn", 1)]);
    }

    #[test]
    fn test_every_unit_is_sorted_and_non_empty() {
        let units = resolve(&segment("ジャッキー・チェンッ"));
        for unit in units {
            assert!(!unit.is_empty());
            for w in unit.windows(2) {
                assert!((w[0].cost, &w[0].romaji) < (w[1].cost, &w[1].romaji));
            }
        }
    }
}

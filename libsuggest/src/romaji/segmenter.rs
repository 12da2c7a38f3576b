use log::trace;

use crate::kana::{is_katakana, is_small_glide};
use crate::romaji::mora::{Mora, MoraKind};
use crate::romaji::table::has_entry;

/// カタカナの読みをモーラ列に分割する。
///
/// - 小書きの母音・半母音（ャュョァィゥェォヮ）は、表に組み合わせがあれば直前のかなとまとめる
/// - 「ー」は直前のモーラに付く。先頭の「ー」だけはそのまま通す
/// - 「ッ」「ン」はそれぞれ単独のモーラになる
/// - カタカナ以外の文字は 1 文字ずつそのまま通す
pub fn segment(reading: &str) -> Vec<Mora> {
    let chars: Vec<char> = reading.chars().collect();
    let mut result: Vec<Mora> = Vec::with_capacity(chars.len());

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        match c {
            'ー' => match result.last_mut() {
                Some(prev) => prev.lengthen(),
                None => result.push(Mora::from_char(c, MoraKind::Literal)),
            },
            'ッ' => result.push(Mora::from_char(c, MoraKind::Sokuon)),
            'ン' => result.push(Mora::from_char(c, MoraKind::Hatsuon)),
            c if is_katakana(c) => {
                if let Some(&next) = chars.get(i + 1) {
                    if is_small_glide(next) {
                        let pair: String = [c, next].iter().collect();
                        if has_entry(&pair) {
                            result.push(Mora::new(&pair, MoraKind::Kana));
                            i += 2;
                            continue;
                        }
                    }
                }
                result.push(Mora::from_char(c, MoraKind::Kana));
            }
            _ => result.push(Mora::from_char(c, MoraKind::Literal)),
        }
        i += 1;
    }

    trace!("segment: {} => {:?}", reading, result);
    result
}

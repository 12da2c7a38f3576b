use kelp::{hira2kata, ConvOption};

/// 読みに含まれるひらがなをカタカナにそろえる。
/// 形態素解析器の読みや表層形のフォールバックにはひらがなが混ざりうる。
/// 変換は kelp の `hira2kata` に任せるので、かなのほか踊り字（ゝ → ヽ）も変わる。
/// ヽ のようにモーラ表に無い文字は、その後リテラルとしてそのまま打鍵列に残る。
pub fn normalize_reading(reading: &str) -> String {
    if reading.chars().any(is_hiragana) {
        hira2kata(reading, ConvOption::default())
    } else {
        reading.to_string()
    }
}

/// ひらがなと、ひらがなの踊り字（ゝゞ）。
pub fn is_hiragana(c: char) -> bool {
    matches!(c, 'ぁ'..='ゖ' | 'ゝ' | 'ゞ')
}

/// 長音記号・中黒を除くカタカナ。
pub fn is_katakana(c: char) -> bool {
    matches!(c, 'ァ'..='ヺ')
}

/// 直前のかなと拗音を作る小書き文字
pub fn is_small_glide(c: char) -> bool {
    matches!(
        c,
        'ァ' | 'ィ' | 'ゥ' | 'ェ' | 'ォ' | 'ャ' | 'ュ' | 'ョ' | 'ヮ'
    )
}

use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoraKind {
    /// 通常のかな。拗音（キャ、ティ等）もここに含む。
    Kana,
    /// 促音「ッ」。後続のモーラの子音を重ねる。
    Sokuon,
    /// 撥音「ン」。後続のモーラによって綴りが変わる。
    Hatsuon,
    /// カタカナ以外の文字。そのまま通す。
    Literal,
}

/// 読みを構成する拍。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mora {
    text: String,
    kind: MoraKind,
    /// 直後に続いた長音記号「ー」の数
    long_marks: usize,
}

impl Mora {
    pub fn new(text: &str, kind: MoraKind) -> Mora {
        assert!(!text.is_empty(), "Mora shouldn't be empty");
        Mora {
            text: text.to_string(),
            kind,
            long_marks: 0,
        }
    }

    pub(crate) fn from_char(c: char, kind: MoraKind) -> Mora {
        Mora {
            text: c.to_string(),
            kind,
            long_marks: 0,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> MoraKind {
        self.kind
    }

    pub fn long_marks(&self) -> usize {
        self.long_marks
    }

    pub(crate) fn lengthen(&mut self) {
        self.long_marks += 1;
    }

    /// 長音記号を含めた、この拍が覆う読み。
    pub fn surface(&self) -> String {
        let mut buf = String::with_capacity(self.text.len() + self.long_marks * 3);
        buf.push_str(&self.text);
        for _ in 0..self.long_marks {
            buf.push('ー');
        }
        buf
    }
}

impl Display for Mora {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.surface())
    }
}

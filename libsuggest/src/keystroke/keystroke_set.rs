use rustc_hash::FxHashMap;

use crate::keystroke::Keystroke;

/// キーで重複排除された、挿入順を保つ Keystroke の集合。
///
/// 同じキーの Keystroke を入れると新しいエントリは増えず、既存のエントリにマージされる。
#[derive(Debug, Default, Clone)]
pub struct KeystrokeSet {
    entries: Vec<Keystroke>,
    index: FxHashMap<String, usize>,
}

impl KeystrokeSet {
    pub fn new() -> KeystrokeSet {
        KeystrokeSet::default()
    }

    pub fn with_capacity(capacity: usize) -> KeystrokeSet {
        KeystrokeSet {
            entries: Vec::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// 追加する。既に同じキーがある場合はマージして false を返す。
    pub fn insert(&mut self, keystroke: Keystroke) -> bool {
        if let Some(&i) = self.index.get(keystroke.key()) {
            self.entries[i].merge(keystroke);
            false
        } else {
            self.index
                .insert(keystroke.key().to_string(), self.entries.len());
            self.entries.push(keystroke);
            true
        }
    }

    pub fn get(&self, key: &str) -> Option<&Keystroke> {
        self.index.get(key).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Keystroke> {
        self.entries.iter()
    }

    /// 重みの小さいものから `limit` 件だけ残す。残った順序は重み順になる。
    pub fn retain_cheapest(&mut self, limit: usize) {
        if self.entries.len() <= limit {
            return;
        }
        self.entries.sort_by(|a, b| a.cmp_by_weight(b));
        self.entries.truncate(limit);
        self.reindex();
    }

    /// 短い順・辞書順に並べ替えて取り出す。
    pub fn into_sorted_vec(mut self) -> Vec<Keystroke> {
        self.entries.sort();
        self.entries
    }

    /// 挿入順のまま取り出す。
    pub fn into_vec(self) -> Vec<Keystroke> {
        self.entries
    }

    fn reindex(&mut self) {
        self.index.clear();
        for (i, keystroke) in self.entries.iter().enumerate() {
            self.index.insert(keystroke.key().to_string(), i);
        }
    }
}

impl FromIterator<Keystroke> for KeystrokeSet {
    fn from_iter<T: IntoIterator<Item = Keystroke>>(iter: T) -> Self {
        let mut set = KeystrokeSet::new();
        for keystroke in iter {
            set.insert(keystroke);
        }
        set
    }
}

impl Extend<Keystroke> for KeystrokeSet {
    fn extend<T: IntoIterator<Item = Keystroke>>(&mut self, iter: T) {
        for keystroke in iter {
            self.insert(keystroke);
        }
    }
}

impl IntoIterator for KeystrokeSet {
    type Item = Keystroke;
    type IntoIter = std::vec::IntoIter<Keystroke>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_merges_duplicates() {
        let mut set = KeystrokeSet::new();
        assert!(set.insert(Keystroke::new("tsu", 1)));
        assert!(set.insert(Keystroke::new("tu", 1)));
        assert!(!set.insert(Keystroke::new("tsu", 0)));

        assert_eq!(set.len(), 2);
        let tsu = set.get("tsu").unwrap();
        assert_eq!(tsu.weight(), 0);
        assert_eq!(tsu.weight_history(), &[1]);
    }

    #[test]
    fn test_insertion_order() {
        let set: KeystrokeSet = ["zu", "a", "zu", "ki"]
            .iter()
            .map(|k| Keystroke::new(k, 0))
            .collect();
        let keys: Vec<String> = set.into_vec().iter().map(|k| k.key().to_string()).collect();
        assert_eq!(keys, vec!["zu", "a", "ki"]);
    }

    #[test]
    fn test_retain_cheapest() {
        let mut set: KeystrokeSet = vec![
            Keystroke::new("shya", 3),
            Keystroke::new("sha", 0),
            Keystroke::new("sya", 1),
            Keystroke::new("xsa", 1),
        ]
        .into_iter()
        .collect();
        set.retain_cheapest(2);

        assert_eq!(set.len(), 2);
        assert!(set.contains("sha"));
        // 重みが同じなら短い順・辞書順で "sya" が "xsa" より先
        assert!(set.contains("sya"));
        assert!(!set.contains("xsa"));
        assert!(!set.contains("shya"));

        // 索引も張り直されている
        set.insert(Keystroke::new("sya", 0));
        assert_eq!(set.len(), 2);
        assert_eq!(set.get("sya").unwrap().weight(), 0);
    }
}

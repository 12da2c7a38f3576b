use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use log::info;
use serde::{Deserialize, Serialize};

use crate::romaji::expander::expansion_limit;

/**
 * トーカナイザの設定。
 *
 * ```yaml
 * expand: true
 * max_expansions: 64
 * edge_ngram: false
 * ```
 */
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestConfig {
    /// true なら打鍵列の候補を展開する。false なら標準的な打鍵列一つだけ。
    pub expand: bool,
    /// 展開する候補数の上限。0 以下は 1 として扱われる。
    pub max_expansions: i32,
    /// true なら各打鍵列を先頭からの部分文字列に展開する。
    pub edge_ngram: bool,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        SuggestConfig {
            expand: false,
            max_expansions: 512,
            edge_ngram: false,
        }
    }
}

impl SuggestConfig {
    pub fn load_from_file(path: &Path) -> anyhow::Result<SuggestConfig> {
        info!("Loading config: {}", path.display());
        let file = File::open(path).with_context(|| format!("Config: {}", path.display()))?;
        let config: SuggestConfig = serde_yaml::from_reader(BufReader::new(file))
            .with_context(|| format!("Parsing config: {}", path.display()))?;
        Ok(config)
    }

    pub fn load_from_str(src: &str) -> anyhow::Result<SuggestConfig> {
        Ok(serde_yaml::from_str(src)?)
    }

    /// 実際に使われる展開数の上限
    pub fn effective_max_expansions(&self) -> usize {
        expansion_limit(self.max_expansions)
    }
}

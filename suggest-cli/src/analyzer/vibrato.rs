use std::fs::File;
use std::time::SystemTime;

use anyhow::Context;
use log::{debug, info};
use vibrato::{Dictionary, Tokenizer};

use libsuggest::analyzer::base::{ReadingAnalyzer, ReadingFragment};

/// ipadic の素性で、読みが入っているカラム
const READING_COLUMN: usize = 7;

pub struct VibratoReadingAnalyzer {
    tokenizer: Tokenizer,
}

impl VibratoReadingAnalyzer {
    pub fn new(
        dictpath: &str,
        user_dict: Option<String>,
    ) -> anyhow::Result<VibratoReadingAnalyzer> {
        // システム辞書のロードには十数秒かかることがある。
        let t1 = SystemTime::now();
        let mut dict = Dictionary::read(
            File::open(dictpath).with_context(|| format!("System dictionary: {dictpath}"))?,
        )?;
        let t2 = SystemTime::now();
        debug!(
            "Loaded {} in {}msec",
            dictpath,
            t2.duration_since(t1)?.as_millis()
        );

        if let Some(user_dict) = user_dict {
            info!("Loading user dictionary: {}", user_dict);
            dict = dict
                .reset_user_lexicon_from_reader(Some(File::open(user_dict)?))
                .with_context(|| "Opening userdic")?;
        }

        Ok(VibratoReadingAnalyzer {
            tokenizer: Tokenizer::new(dict),
        })
    }
}

/// 素性から読みを取り出す。未知語などで読みが無い場合は None。
fn reading_of(feature: &str) -> Option<&str> {
    feature
        .split(',')
        .nth(READING_COLUMN)
        .filter(|reading| !reading.is_empty() && *reading != "*")
}

impl ReadingAnalyzer for VibratoReadingAnalyzer {
    /// 呼び出しごとにワーカーを作るので、呼び出し間で状態は共有しない。
    fn analyze(&self, text: &str) -> anyhow::Result<Vec<ReadingFragment>> {
        let mut worker = self.tokenizer.new_worker();
        worker.reset_sentence(text);
        worker.tokenize();

        let mut fragments = Vec::with_capacity(worker.num_tokens());
        for i in 0..worker.num_tokens() {
            let token = worker.token(i);
            fragments.push(ReadingFragment::new(
                reading_of(token.feature()),
                token.surface(),
            ));
        }
        Ok(fragments)
    }
}

use std::fs;

use anyhow::Context;
use log::info;

use libsuggest::config::SuggestConfig;
use libsuggest::suggester::CompletionIndex;
use libsuggest::tokenizer::SuggestTokenizer;

use crate::analyzer::load_analyzer;

pub struct SuggestOptions<'a> {
    pub system_dict: Option<&'a str>,
    pub user_dict: Option<String>,
    pub config: SuggestConfig,
    pub corpus: &'a str,
    pub size: usize,
    pub json_output: bool,
    pub query: &'a str,
}

/// コーパスの各行から補完用の索引を作り、入力途中の文字列に対する候補を出力する。
pub fn suggest(opts: SuggestOptions) -> anyhow::Result<()> {
    let analyzer = load_analyzer(opts.system_dict, opts.user_dict)?;
    let mut index = CompletionIndex::new(SuggestTokenizer::new(analyzer, opts.config));

    let corpus =
        fs::read_to_string(opts.corpus).with_context(|| format!("Corpus: {}", opts.corpus))?;
    index
        .add_lines(corpus.lines())
        .with_context(|| format!("Corpus: {}", opts.corpus))?;
    info!("Indexed {} entries from {}", index.len(), opts.corpus);

    let suggestions = index.suggest(opts.query, opts.size)?;
    if opts.json_output {
        println!("{}", serde_json::to_string(&suggestions)?);
        return Ok(());
    }
    for suggestion in suggestions {
        println!(
            "{}\t{}\t{}",
            suggestion.text, suggestion.score, suggestion.matched
        );
    }
    Ok(())
}

use std::io::{self, BufRead};

use log::info;

use libsuggest::analyzer::base::ReadingAnalyzer;
use libsuggest::config::SuggestConfig;
use libsuggest::tokenizer::{SuggestToken, SuggestTokenizer};

use crate::analyzer::load_analyzer;

pub struct KeystrokesOptions<'a> {
    pub system_dict: Option<&'a str>,
    pub user_dict: Option<String>,
    pub config: SuggestConfig,
    pub json_output: bool,
    pub text: Option<String>,
}

/// テキストを打鍵列のトークンに変換して出力する。
/// `text` が `None` の場合は stdin から行ごとに処理する。
pub fn keystrokes(opts: KeystrokesOptions) -> anyhow::Result<()> {
    let analyzer = load_analyzer(opts.system_dict, opts.user_dict)?;
    info!("config: {:?}", opts.config);
    let tokenizer = SuggestTokenizer::new(analyzer, opts.config);

    match opts.text {
        Some(text) => print_tokens(&tokenizer, &text, opts.json_output)?,
        None => {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                print_tokens(&tokenizer, &line?, opts.json_output)?;
            }
        }
    }
    Ok(())
}

fn print_tokens<A: ReadingAnalyzer>(
    tokenizer: &SuggestTokenizer<A>,
    text: &str,
    json_output: bool,
) -> anyhow::Result<()> {
    let tokens: Vec<SuggestToken> = tokenizer.tokenize(text)?.collect();

    if json_output {
        println!("{}", serde_json::to_string(&tokens)?);
        return Ok(());
    }

    for token in tokens {
        let weights = token
            .weights
            .iter()
            .map(|w| w.to_string())
            .collect::<Vec<_>>()
            .join(",");
        println!(
            "{}\t{}\t+{}\t{}",
            token.term, token.weight, token.position_increment, weights
        );
    }
    Ok(())
}

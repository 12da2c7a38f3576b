use std::io::{self, BufRead};

use log::info;

use libsuggest::analyzer::base::{assemble, ReadingAnalyzer};

use crate::analyzer::load_analyzer;

/// 一行の自然文に読みを付け、`surface/reading` 形式で出力する。
/// `text` が `Some` の場合は引数の1行を処理し、`None` の場合は stdin から行ごとに処理する。
pub fn reading(
    system_dict: Option<&str>,
    user_dict: Option<String>,
    text: Option<String>,
) -> anyhow::Result<()> {
    let analyzer = load_analyzer(system_dict, user_dict)?;

    match text {
        Some(text) => print_reading(&analyzer, &text)?,
        None => {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                print_reading(&analyzer, &line?)?;
            }
        }
    }
    Ok(())
}

fn print_reading<A: ReadingAnalyzer>(analyzer: &A, text: &str) -> anyhow::Result<()> {
    info!("reading: {}", text);
    let fragments = analyzer.analyze(text)?;
    let annotated = fragments
        .iter()
        .map(|f| format!("{}/{}", f.surface, f.reading.as_deref().unwrap_or("*")))
        .collect::<Vec<_>>()
        .join(" ");
    let analyzed = assemble(&fragments);
    println!("{annotated}\t{}", analyzed.reading);
    Ok(())
}

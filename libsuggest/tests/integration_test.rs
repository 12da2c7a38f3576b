use libsuggest::analyzer::base::{ReadingAnalyzer, ReadingFragment};
use libsuggest::analyzer::passthrough::PassthroughAnalyzer;
use libsuggest::config::SuggestConfig;
use libsuggest::keystroke::edge_ngram::to_edge_ngrams;
use libsuggest::keystroke::Keystroke;
use libsuggest::romaji::canonical::canonicalize;
use libsuggest::romaji::expander::expand;
use libsuggest::romaji::segmenter::segment;
use libsuggest::romaji::{to_canonical_keystroke, to_keystrokes};
use libsuggest::tokenizer::{SuggestToken, SuggestTokenizer};

/// 形態素解析器の代わりに、区切りごとの読みを返す
struct SplitAnalyzer {}

impl ReadingAnalyzer for SplitAnalyzer {
    fn analyze(&self, text: &str) -> anyhow::Result<Vec<ReadingFragment>> {
        // "私|の|名前" を 私/わたし の/(読みなし) 名前/ナマエ に分ける
        let mut fragments = Vec::new();
        for part in text.split('|') {
            match part {
                "私" => fragments.push(ReadingFragment::new(Some("わたし"), "私")),
                "名前" => fragments.push(ReadingFragment::new(Some("ナマエ"), "名前")),
                _ => fragments.push(ReadingFragment::new(None, part)),
            }
        }
        Ok(fragments)
    }
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn keys(keystrokes: &[Keystroke]) -> Vec<&str> {
    keystrokes.iter().map(|k| k.key()).collect()
}

/// 統合テスト: テキストからトークン列まで
#[test]
fn test_end_to_end_tokenize() -> anyhow::Result<()> {
    init_logger();

    let tokenizer = SuggestTokenizer::new(SplitAnalyzer {}, SuggestConfig::default());
    let tokens: Vec<SuggestToken> = tokenizer.tokenize("私|の|名前")?.collect();

    let terms: Vec<&str> = tokens.iter().map(|t| t.term.as_str()).collect();
    assert_eq!(terms, vec!["watashinonamae", "私の名前"]);

    assert_eq!(tokens[0].position_increment, 1);
    assert_eq!(tokens[1].position_increment, 0);
    assert_eq!(tokens[1].weight, 4);
    Ok(())
}

#[test]
fn test_deterministic() -> anyhow::Result<()> {
    for (expand, edge_ngram) in [(false, false), (true, false), (true, true)] {
        let config = SuggestConfig {
            expand,
            max_expansions: 20,
            edge_ngram,
        };
        let tokenizer = SuggestTokenizer::new(PassthroughAnalyzer::default(), config);
        let first: Vec<SuggestToken> = tokenizer.tokenize("ちょっとまって")?.collect();
        let second: Vec<SuggestToken> = tokenizer.tokenize("ちょっとまって")?.collect();
        assert_eq!(first, second);
    }
    Ok(())
}

#[test]
fn test_cap_respected() {
    for reading in ["シュッチョウ", "ジャンジャン", "チーズケーキ", "ア"] {
        let moras = segment(reading);
        for k in 1..=30 {
            assert!(expand(&moras, k).len() <= k as usize, "{reading} k={k}");
        }
    }
}

#[test]
fn test_canonical_is_cheapest() {
    for reading in ["シュッチョウ", "ジャンジャン", "チーズケーキ", "コンニチハ"] {
        let moras = segment(reading);
        let canonical = canonicalize(&moras).unwrap();
        for k in [1, 2, 10, 512] {
            for candidate in expand(&moras, k) {
                assert!(canonical.weight() <= candidate.weight());
            }
        }
    }
}

#[test]
fn test_unbounded_has_no_duplicates() {
    let got = to_keystrokes("チョウチョウ", 4096);
    let mut seen = std::collections::HashSet::new();
    for k in &got {
        assert!(seen.insert(k.key().to_string()), "duplicated {}", k.key());
    }
}

#[test]
fn test_ngram_completeness() {
    let got = to_edge_ngrams(&[Keystroke::new("tokyo", 0)]);
    assert_eq!(keys(&got), vec!["t", "to", "tok", "toky", "tokyo"]);
    assert!(got.iter().all(|k| k.weight() == 0));
}

#[test]
fn test_surface_form_presence() -> anyhow::Result<()> {
    let config = SuggestConfig {
        expand: true,
        max_expansions: 4,
        ..Default::default()
    };
    let tokenizer = SuggestTokenizer::new(PassthroughAnalyzer::default(), config);
    for text in ["とうきょう", "トウキョウ", "abc", "東京"] {
        let got = tokenizer.keystrokes(text)?;
        assert!(got.iter().any(|k| k.key() == text), "{text}");
    }
    Ok(())
}

#[test]
fn test_tokyo_scenario() -> anyhow::Result<()> {
    let canonical = to_canonical_keystroke("トウキョウ").unwrap();
    assert_eq!(canonical.key(), "toukyou");

    let tokenizer = SuggestTokenizer::new(
        SplitAnalyzer {},
        SuggestConfig::load_from_str("expand: false")?,
    );
    let got = tokenizer.keystrokes("トウキョウ")?;
    assert_eq!(keys(&got), vec!["toukyou", "トウキョウ"]);
    Ok(())
}

#[test]
fn test_shi_scenario() {
    let got = to_keystrokes("シ", 10);
    assert_eq!(keys(&got), vec!["si", "shi"]);
    assert_eq!(got[0].weight(), 1);
    assert_eq!(got[1].weight(), 0);
    assert!(got.iter().all(|k| k.weight_history().is_empty()));
}

#[test]
fn test_non_kana_only() -> anyhow::Result<()> {
    let tokenizer = SuggestTokenizer::new(PassthroughAnalyzer::default(), SuggestConfig::default());
    let got = tokenizer.keystrokes("2024!")?;
    assert_eq!(keys(&got), vec!["2024!"]);
    Ok(())
}

#[test]
fn test_concurrent_use() -> anyhow::Result<()> {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| to_keystrokes("ガッコウ", 8)))
        .collect();
    let expected = to_keystrokes("ガッコウ", 8);
    for handle in handles {
        let got = handle.join().map_err(|_| anyhow::anyhow!("thread panicked"))?;
        assert_eq!(keys(&got), keys(&expected));
    }
    Ok(())
}

use std::io::Write;
use std::path::Path;

use clap::{Parser, Subcommand, ValueEnum};

use libsuggest::config::SuggestConfig;

use crate::subcmd::keystrokes::{keystrokes, KeystrokesOptions};
use crate::subcmd::reading::reading;
use crate::subcmd::suggest::{suggest, SuggestOptions};

mod analyzer;
mod subcmd;

#[derive(Debug, Clone, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[clap(
name = env ! ("CARGO_PKG_NAME"),
version = env ! ("CARGO_PKG_VERSION"),
author = env ! ("CARGO_PKG_AUTHORS"),
about = env ! ("CARGO_PKG_DESCRIPTION"),
arg_required_else_help = true,
)]
struct Args {
    #[clap(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Keystrokes(KeystrokesArgs),
    Reading(ReadingArgs),
    #[clap(arg_required_else_help = true)]
    Suggest(SuggestArgs),
}

/// トーカナイザの設定に関するオプション
#[derive(Debug, clap::Args)]
struct ConfigArgs {
    /// YAML の設定ファイル。コマンドラインの指定で上書きされる
    #[arg(short = 'c', long = "config")]
    config_file: Option<String>,
    /// 打鍵列の候補を展開する（省略時は標準的な打鍵列一つ）
    #[arg(long)]
    expand: bool,
    /// 展開する候補数の上限
    #[arg(long)]
    max_expansions: Option<i32>,
    /// 打鍵列を先頭からの部分文字列に展開する
    #[arg(long)]
    edge_ngram: bool,
}

impl ConfigArgs {
    fn build(&self) -> anyhow::Result<SuggestConfig> {
        let mut config = match &self.config_file {
            Some(path) => SuggestConfig::load_from_file(Path::new(path))?,
            None => SuggestConfig::default(),
        };
        if self.expand {
            config.expand = true;
        }
        if let Some(max_expansions) = self.max_expansions {
            config.max_expansions = max_expansions;
        }
        if self.edge_ngram {
            config.edge_ngram = true;
        }
        Ok(config)
    }
}

/// テキストを打鍵列のトークンに変換する
#[derive(Debug, clap::Args)]
struct KeystrokesArgs {
    /// Vibrato のシステム辞書（省略時は入力をそのまま読みとして扱う）
    #[arg(short, long)]
    system_dict: Option<String>,
    #[arg(short, long)]
    user_dict: Option<String>,
    #[clap(flatten)]
    config: ConfigArgs,
    /// 出力形式
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// 変換したいテキスト（省略時は stdin から行ごとに読み取る）
    text: Option<String>,
}

/// テキストに読みを付ける
#[derive(Debug, clap::Args)]
struct ReadingArgs {
    #[arg(short, long)]
    system_dict: Option<String>,
    #[arg(short, long)]
    user_dict: Option<String>,
    text: Option<String>,
}

/// コーパスから補完用の索引を作り、入力途中の文字列に対する候補を出す
#[derive(Debug, clap::Args)]
struct SuggestArgs {
    #[arg(short, long)]
    system_dict: Option<String>,
    #[arg(short, long)]
    user_dict: Option<String>,
    #[clap(flatten)]
    config: ConfigArgs,
    /// 一行一エントリのコーパス。`text` または `text<TAB>weight`
    #[arg(long)]
    corpus: String,
    /// 出力する候補数
    #[arg(short = 'n', long, default_value_t = 10)]
    size: usize,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    query: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .format(|buf, record| {
            let ts = buf.timestamp_micros();
            // show thread id
            writeln!(
                buf,
                "{}: {:?}: {}: {}",
                ts,
                std::thread::current().id(),
                record.level(),
                record.args()
            )
        })
        .init();

    match args.command {
        Commands::Keystrokes(opt) => keystrokes(KeystrokesOptions {
            system_dict: opt.system_dict.as_deref(),
            user_dict: opt.user_dict,
            config: opt.config.build()?,
            json_output: matches!(opt.format, OutputFormat::Json),
            text: opt.text,
        }),
        Commands::Reading(opt) => reading(opt.system_dict.as_deref(), opt.user_dict, opt.text),
        Commands::Suggest(opt) => suggest(SuggestOptions {
            system_dict: opt.system_dict.as_deref(),
            user_dict: opt.user_dict,
            config: opt.config.build()?,
            corpus: &opt.corpus,
            size: opt.size,
            json_output: matches!(opt.format, OutputFormat::Json),
            query: &opt.query,
        }),
    }
}

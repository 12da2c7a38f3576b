use libsuggest::analyzer::base::ReadingAnalyzer;
use libsuggest::analyzer::passthrough::PassthroughAnalyzer;
use log::info;

use crate::analyzer::vibrato::VibratoReadingAnalyzer;

pub mod vibrato;

/// システム辞書が指定されていれば Vibrato で読みを付け、無ければ入力をそのまま読みとして扱う。
pub fn load_analyzer(
    system_dict: Option<&str>,
    user_dict: Option<String>,
) -> anyhow::Result<Box<dyn ReadingAnalyzer>> {
    match system_dict {
        Some(system_dict) => Ok(Box::new(VibratoReadingAnalyzer::new(
            system_dict,
            user_dict,
        )?)),
        None => {
            info!("No system dictionary given. Input is used as its own reading.");
            Ok(Box::new(PassthroughAnalyzer::default()))
        }
    }
}

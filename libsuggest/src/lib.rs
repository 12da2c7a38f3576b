pub mod analyzer;
pub mod config;
pub mod kana;
pub mod keystroke;
pub mod romaji;
pub mod suggester;
pub mod tokenizer;

pub mod ignore_words;
pub mod settings;

pub use ignore_words::IGNORE_WORDS;
pub use settings::AppConfig;

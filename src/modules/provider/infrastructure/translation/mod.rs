pub mod libre_translate;
pub mod noop;

pub use libre_translate::LibreTranslateTranslator;
pub use noop::NoopTranslator;

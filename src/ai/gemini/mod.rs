pub mod client;
pub mod generate;
pub mod transcribe;
pub mod types;

pub use generate::GeminiGenerationClient;
pub use transcribe::GeminiTranscriptionClient;

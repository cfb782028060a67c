//! Backend address and route constants
//!
//! The assistant backend listens on loopback only; these are the values the
//! desktop app ships with.

/// Default backend host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default backend port
pub const DEFAULT_PORT: u16 = 5000;

/// Route that interprets a free-form command
pub const PROCESS_COMMAND_PATH: &str = "/api/process-command";

/// Route that runs dialogue handling over transcribed text
pub const PROCESS_TEXT_PATH: &str = "/api/process-text";

/// Route that turns uploaded audio into text
pub const TRANSCRIBE_PATH: &str = "/api/transcribe";

/// Route that renders reply text as speech
pub const SYNTHESIZE_PATH: &str = "/api/synthesize";

/// Multipart field name the transcribe route expects
pub const AUDIO_FIELD: &str = "audio";

/// MIME type of uploaded and synthesized audio
pub const AUDIO_MIME: &str = "audio/wav";

/// Message handed back to the caller whenever the backend can't be used
pub const DEFAULT_FAILURE_MESSAGE: &str =
    "Tidak dapat terhubung ke server AI. Pastikan backend sudah berjalan.";

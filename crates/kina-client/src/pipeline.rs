//! voice assistant pipeline calls
//!
//! One spoken turn runs three backend routes in order:
//! 1. transcribe the recorded audio
//! 2. run the transcript through dialogue handling
//! 3. synthesize the reply as speech
//!
//! Unlike [`CommandClient::send_command`] these surface the error, since the
//! caller has to stop the turn at the first failed step.

use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::client::{check_status, CommandClient};
use crate::constants::{AUDIO_FIELD, AUDIO_MIME, PROCESS_TEXT_PATH, SYNTHESIZE_PATH, TRANSCRIBE_PATH};
use crate::error::{ClientError, Result};

#[derive(Debug, Serialize)]
struct TextRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct TranscribeResponse {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProcessTextResponse {
    response: Option<String>,
}

/// Everything produced by one spoken turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Conversation {
    /// what the user said
    pub transcript: String,
    /// what the assistant answered
    pub reply: String,
    /// the answer rendered as WAV
    pub audio: Vec<u8>,
}

impl CommandClient {
    /// upload WAV audio and return the transcript
    pub async fn transcribe(&self, audio: Vec<u8>, file_name: &str) -> Result<String> {
        let url = self.config.endpoint.route(TRANSCRIBE_PATH);
        let size = audio.len();

        let part = Part::bytes(audio)
            .file_name(file_name.to_string())
            .mime_str(AUDIO_MIME)
            .map_err(|e| ClientError::Http(e.to_string()))?;
        let form = Form::new().part(AUDIO_FIELD, part);

        let response = self.http.post(&url).multipart(form).send().await?;
        let reply: TranscribeResponse = check_status(response).await?.json().await?;

        let text = reply
            .text
            .filter(|t| !t.trim().is_empty())
            .ok_or(ClientError::EmptyTranscription)?;

        debug!(bytes = size, transcript = %text, "audio transcribed");
        Ok(text)
    }

    /// run text through the dialogue manager and return the reply
    pub async fn process_text(&self, text: &str) -> Result<String> {
        let url = self.config.endpoint.route(PROCESS_TEXT_PATH);

        let response = self
            .http
            .post(&url)
            .json(&TextRequest { text })
            .send()
            .await?;
        let reply: ProcessTextResponse = check_status(response).await?.json().await?;

        let reply = reply
            .response
            .ok_or_else(|| ClientError::MalformedResponse("missing response field".into()))?;

        debug!(reply = %reply, "text processed");
        Ok(reply)
    }

    /// render text as speech, returning WAV bytes
    pub async fn synthesize(&self, text: &str) -> Result<Vec<u8>> {
        let url = self.config.endpoint.route(SYNTHESIZE_PATH);

        let response = self
            .http
            .post(&url)
            .json(&TextRequest { text })
            .send()
            .await?;
        let audio = check_status(response).await?.bytes().await?.to_vec();

        debug!(bytes = audio.len(), "speech synthesized");
        Ok(audio)
    }

    /// transcribe, answer and voice one recorded utterance
    pub async fn converse(&self, audio: Vec<u8>, file_name: &str) -> Result<Conversation> {
        let transcript = self.transcribe(audio, file_name).await?;
        let reply = self.process_text(&transcript).await?;
        let audio = self.synthesize(&reply).await?;

        Ok(Conversation {
            transcript,
            reply,
            audio,
        })
    }
}

//! Seam to the (external) speech synthesizer.
//!
//! Synthesis itself is out of scope for this crate; what lives here is the
//! contract: the normalized answer text is handed verbatim to a
//! [`SpeechSink`], and a synthesis failure must never discard that text.
//! Callers always get the [`crate::Resolution`] back, with the failure
//! carried alongside.

use thiserror::Error;

use crate::api::Resolution;
use crate::resolver::Resolver;

/// Errors an audio backend may surface.
#[derive(Debug, Error)]
pub enum SynthesisError {
    #[error("no speech synthesizer is configured")]
    Unavailable,
    #[error("speech synthesis failed: {0}")]
    Backend(String),
}

/// A produced audio artifact, addressed by whatever the sink uses (a file
/// path, a URL).
#[derive(Debug, Clone)]
pub struct AudioArtifact {
    pub location: String,
}

/// An opaque text-to-speech sink.
pub trait SpeechSink {
    fn synthesize(&self, text: &str) -> Result<AudioArtifact, SynthesisError>;
}

/// A sink for audio-less operation: always reports
/// [`SynthesisError::Unavailable`], which [`speak`] carries alongside the
/// still-valid text.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl SpeechSink for NullSink {
    fn synthesize(&self, _text: &str) -> Result<AudioArtifact, SynthesisError> {
        Err(SynthesisError::Unavailable)
    }
}

/// A resolution paired with the synthesis outcome. `audio` and
/// `synthesis_error` are mutually exclusive; `resolution.text` is always
/// present either way.
#[derive(Debug)]
pub struct Spoken {
    pub resolution: Resolution,
    pub audio: Option<AudioArtifact>,
    pub synthesis_error: Option<SynthesisError>,
}

/// Resolve `query` and synthesize the normalized answer through `sink`.
///
/// Synthesis failure is downgraded to a warning: the textual answer is
/// still returned, with `audio` absent and the error attached.
pub fn speak(resolver: &Resolver, sink: &dyn SpeechSink, query: &str) -> Spoken {
    let resolution = resolver.resolve(query);
    match sink.synthesize(&resolution.text) {
        Ok(audio) => Spoken { resolution, audio: Some(audio), synthesis_error: None },
        Err(err) => {
            log::warn!("speech synthesis failed, returning text only: {err}");
            Spoken { resolution, audio: None, synthesis_error: Some(err) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Method;
    use crate::corpus::Corpus;

    struct RecordingSink;

    impl SpeechSink for RecordingSink {
        fn synthesize(&self, text: &str) -> Result<AudioArtifact, SynthesisError> {
            Ok(AudioArtifact { location: format!("audio://{}", text.len()) })
        }
    }

    struct BrokenSink;

    impl SpeechSink for BrokenSink {
        fn synthesize(&self, _text: &str) -> Result<AudioArtifact, SynthesisError> {
            Err(SynthesisError::Backend("engine offline".to_string()))
        }
    }

    #[test]
    fn successful_synthesis_attaches_the_artifact() {
        let resolver = Resolver::new(Corpus::empty());
        let spoken = speak(&resolver, &RecordingSink, "கம்பர் யார்");
        assert_eq!(spoken.resolution.method, Method::Keyword);
        assert!(spoken.audio.is_some());
        assert!(spoken.synthesis_error.is_none());
    }

    #[test]
    fn synthesis_failure_keeps_the_text() {
        let resolver = Resolver::new(Corpus::empty());
        let spoken = speak(&resolver, &BrokenSink, "கம்பர் யார்");
        assert!(spoken.resolution.text.starts_with("கம்பர்"));
        assert!(spoken.audio.is_none());
        assert!(matches!(spoken.synthesis_error, Some(SynthesisError::Backend(_))));
    }

    #[test]
    fn the_null_sink_reports_unavailable() {
        let resolver = Resolver::new(Corpus::empty());
        let spoken = speak(&resolver, &NullSink, "சிலப்பதிகாரம்");
        assert_eq!(spoken.resolution.confidence, 0.9);
        assert!(matches!(spoken.synthesis_error, Some(SynthesisError::Unavailable)));
    }
}

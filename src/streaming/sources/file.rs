//! Decoded audio file source, backed by symphonia.
//!
//! Any container and codec symphonia was built with (WAV/PCM by default, MP3
//! through the `mp3` feature) is decoded packet by packet into stereo blocks.
//! Mono streams are duplicated into both channels; channels past the second
//! are ignored.

use std::fs::File;
use std::io::{Cursor, ErrorKind};
use std::path::Path;

use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{Decoder, DecoderOptions};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::{FormatOptions, FormatReader};
use symphonia::core::io::{MediaSource, MediaSourceStream};
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::SAMPLES_PER_SECOND;
use crate::streaming::{
    error::{StreamError, StreamResult},
    traits::AudioSource,
};

type StereoBlock = (Vec<f64>, Vec<f64>);

/// Streams the default audio track of an encoded file.
///
/// One packet is decoded ahead, so [`has_more`](AudioSource::has_more) is
/// exact and decode failures surface from [`next_right`](AudioSource::next_right).
pub struct DecodedFileSource {
    format: Box<dyn FormatReader>,
    decoder: Box<dyn Decoder>,
    track_id: u32,
    sample_rate: Option<u32>,
    pending: Option<StereoBlock>,
}

impl DecodedFileSource {
    /// Opens and probes the file at `path`. The extension is used as a probe hint.
    ///
    /// # Errors
    /// [`StreamError::Io`] if the file cannot be opened, [`StreamError::Decode`]
    /// if probing or decoder setup fails, and [`StreamError::UnsupportedFormat`]
    /// if the file has no audio track.
    pub fn open<P: AsRef<Path>>(path: P) -> StreamResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;

        let mut hint = Hint::new();
        if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            hint.with_extension(ext);
        }

        tracing::debug!(path = %path.display(), "opening audio file");
        Self::from_media_source(Box::new(file), &hint)
    }

    /// Decodes an in-memory encoded file.
    ///
    /// # Errors
    /// Same conditions as [`DecodedFileSource::open`], minus the I/O ones.
    pub fn from_bytes(data: Vec<u8>) -> StreamResult<Self> {
        Self::from_media_source(Box::new(Cursor::new(data)), &Hint::new())
    }

    fn from_media_source(source: Box<dyn MediaSource>, hint: &Hint) -> StreamResult<Self> {
        let mss = MediaSourceStream::new(source, Default::default());

        let probed = symphonia::default::get_probe()
            .format(hint, mss, &FormatOptions::default(), &MetadataOptions::default())
            .map_err(StreamError::decode)?;

        let format = probed.format;
        let track = format
            .default_track()
            .ok_or_else(|| StreamError::UnsupportedFormat("no default audio track".to_string()))?;
        let track_id = track.id;
        let sample_rate = track.codec_params.sample_rate;

        let decoder = symphonia::default::get_codecs()
            .make(&track.codec_params, &DecoderOptions::default())
            .map_err(StreamError::decode)?;

        if sample_rate.is_some_and(|rate| rate != SAMPLES_PER_SECOND) {
            tracing::warn!(
                ?sample_rate,
                expected = SAMPLES_PER_SECOND,
                "file sample rate differs; samples are used as-is"
            );
        }

        let mut source = Self {
            format,
            decoder,
            track_id,
            sample_rate,
            pending: None,
        };
        source.pending = source.decode_next()?;
        Ok(source)
    }

    /// Sample rate reported by the container, if any.
    pub fn sample_rate(&self) -> Option<u32> {
        self.sample_rate
    }

    /// Decodes the next packet of the selected track into a stereo block.
    ///
    /// Returns `Ok(None)` at end of stream. Packets that fail to decode are skipped.
    fn decode_next(&mut self) -> StreamResult<Option<StereoBlock>> {
        loop {
            let packet = match self.format.next_packet() {
                Ok(packet) => packet,
                Err(SymphoniaError::IoError(err)) if err.kind() == ErrorKind::UnexpectedEof => {
                    return Ok(None);
                }
                Err(err) => return Err(StreamError::decode(err)),
            };

            if packet.track_id() != self.track_id {
                continue;
            }

            let decoded = match self.decoder.decode(&packet) {
                Ok(decoded) => decoded,
                Err(SymphoniaError::DecodeError(reason)) => {
                    tracing::debug!(reason, "skipping corrupt packet");
                    continue;
                }
                Err(err) => return Err(StreamError::decode(err)),
            };

            let spec = *decoded.spec();
            let channel_count = spec.channels.count();
            if channel_count == 0 {
                return Err(StreamError::UnsupportedFormat(
                    "stream has no channels".to_string(),
                ));
            }

            let mut buf = SampleBuffer::<f32>::new(decoded.capacity() as u64, spec);
            buf.copy_interleaved_ref(decoded);

            let frames = buf.samples().len() / channel_count;
            let mut left = Vec::with_capacity(frames);
            let mut right = Vec::with_capacity(frames);
            for frame in buf.samples().chunks_exact(channel_count) {
                let l = f64::from(frame[0]);
                let r = if channel_count > 1 {
                    f64::from(frame[1])
                } else {
                    l
                };
                left.push(l);
                right.push(r);
            }
            return Ok(Some((left, right)));
        }
    }
}

impl AudioSource for DecodedFileSource {
    fn has_more(&self) -> bool {
        self.pending.is_some()
    }

    fn next_left(&mut self) -> StreamResult<Vec<f64>> {
        self.pending
            .as_ref()
            .map(|(left, _)| left.clone())
            .ok_or(StreamError::Exhausted)
    }

    fn next_right(&mut self) -> StreamResult<Vec<f64>> {
        let (_, right) = self.pending.take().ok_or(StreamError::Exhausted)?;
        self.pending = self.decode_next()?;
        Ok(right)
    }
}

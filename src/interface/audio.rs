use crate::domain::WavAudio;
use rodio::source::Source;
use rodio::{OutputStream, OutputStreamHandle, Sink};

const DEFAULT_VOLUME: f32 = 1.0;

/// Sound playback through the default output device. Clips queue onto a
/// single sink; `start` must run before anything is audible.
pub struct AudioOutput {
    stream: Option<OutputStream>,
    stream_handle: Option<OutputStreamHandle>,
    sink: Option<Sink>,
    volume: f32,
}

impl AudioOutput {
    pub fn new() -> Self {
        Self {
            stream: None,
            stream_handle: None,
            sink: None,
            volume: DEFAULT_VOLUME,
        }
    }

    pub fn start(&mut self) -> bool {
        if self.sink.is_some() {
            return true;
        }

        let Ok((stream, stream_handle)) = OutputStream::try_default() else {
            return false;
        };
        let Ok(sink) = Sink::try_new(&stream_handle) else {
            return false;
        };
        sink.set_volume(self.volume);

        self.stream = Some(stream);
        self.stream_handle = Some(stream_handle);
        self.sink = Some(sink);
        true
    }

    pub fn play(&self, audio: &WavAudio) {
        if let Some(sink) = self.sink.as_ref() {
            sink.append(clip_buffer(audio));
        }
    }

    pub fn play_looping(&self, audio: &WavAudio) {
        if let Some(sink) = self.sink.as_ref() {
            sink.append(clip_buffer(audio).repeat_infinite());
        }
    }

    pub fn is_playing(&self) -> bool {
        self.sink.as_ref().map(|sink| !sink.empty()).unwrap_or(false)
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
        if let Some(sink) = self.sink.as_ref() {
            sink.set_volume(volume);
        }
    }

    pub fn stop(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
        self.stream = None;
        self.stream_handle = None;
    }
}

impl Default for AudioOutput {
    fn default() -> Self {
        Self::new()
    }
}

fn clip_buffer(audio: &WavAudio) -> rodio::buffer::SamplesBuffer<i16> {
    let samples: Vec<i16> = audio.samples().collect();
    rodio::buffer::SamplesBuffer::new(audio.channels(), audio.sample_rate(), samples)
}

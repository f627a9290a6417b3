use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};

use super::{AmbientPlayer, Volume};

/// Ambient playback on the default output device.
///
/// `_stream` is an RAII guard: dropping it closes the device, so it lives
/// as long as the player. Each `play_looping` gets a fresh `Sink`, which
/// rodio drives from its own thread.
pub struct RodioPlayer {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    sink: Option<Sink>,
    volume: Volume,
}

impl RodioPlayer {
    pub fn open(volume: Volume) -> Result<Self> {
        let (stream, handle) =
            OutputStream::try_default().context("Failed to open audio output device")?;
        Ok(Self {
            _stream: stream,
            handle,
            sink: None,
            volume,
        })
    }
}

impl AmbientPlayer for RodioPlayer {
    fn play_looping(&mut self, path: &Path) -> Result<()> {
        self.stop();

        let file = File::open(path)
            .with_context(|| format!("Failed to open: {}", path.display()))?;
        let source = Decoder::new(BufReader::new(file))
            .with_context(|| format!("Failed to decode: {}", path.display()))?;

        let sink = Sink::try_new(&self.handle).context("Failed to create audio sink")?;
        sink.set_volume(self.volume.get());
        sink.append(source.repeat_infinite());

        tracing::info!(path = %path.display(), volume = self.volume.get(), "looping ambient track");
        self.sink = Some(sink);
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
            tracing::debug!("ambient track stopped");
        }
    }

    fn set_volume(&mut self, volume: Volume) {
        self.volume = volume;
        if let Some(sink) = &self.sink {
            sink.set_volume(volume.get());
        }
    }
}

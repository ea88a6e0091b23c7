use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source, source::Buffered};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::settings::Settings;

type Sound = Buffered<Decoder<BufReader<File>>>;

const EFFECT_VOLUME: f32 = 0.3;

/// Audio manager for playing sound effects
pub struct AudioManager {
    /// None when no output device could be opened
    output: Option<(OutputStream, OutputStreamHandle)>,
    laser: Option<Sound>,
    impact: Option<Sound>,
}

impl AudioManager {
    /// Opens the default output device and pre-loads the effects. Anything
    /// that fails is logged and leaves that sound silent.
    pub fn new(settings: &Settings) -> Self {
        let output = match OutputStream::try_default() {
            Ok(output) => Some(output),
            Err(err) => {
                tracing::warn!("audio disabled, no output device: {err}");
                None
            }
        };

        Self {
            output,
            laser: load_sound(&settings.laser_sound),
            impact: load_sound(&settings.impact_sound),
        }
    }

    pub fn play_laser(&self) {
        self.play(self.laser.as_ref());
    }

    pub fn play_impact(&self) {
        self.play(self.impact.as_ref());
    }

    fn play(&self, sound: Option<&Sound>) {
        let (Some((_, handle)), Some(sound)) = (&self.output, sound) else {
            return;
        };
        match Sink::try_new(handle) {
            Ok(sink) => {
                sink.set_volume(EFFECT_VOLUME);
                // Cloning a buffered source only clones references
                sink.append(sound.clone());
                sink.detach();
            }
            Err(err) => tracing::debug!("sound effect skipped: {err}"),
        }
    }
}

fn load_sound(path: &Path) -> Option<Sound> {
    let decoded = File::open(path)
        .map_err(|err| err.to_string())
        .and_then(|file| Decoder::new(BufReader::new(file)).map_err(|err| err.to_string()));

    match decoded {
        Ok(source) => Some(source.buffered()),
        Err(err) => {
            tracing::warn!(path = %path.display(), "sound not loaded: {err}");
            None
        }
    }
}

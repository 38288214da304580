//! Best-effort audio: the pop cue and the looping melody.
//!
//! Both cues are synthesized at startup, so the binary carries no sound
//! assets. Audio is strictly best-effort: if no output device exists, or
//! playback fails, the greeting keeps running silently — a warning on
//! stderr is all that happens.
//!
//! The player owns the output stream and the melody sink; dropping it stops
//! the melody mid-loop and releases the device.

use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, OutputStreamHandle, Sink, Source};

const SAMPLE_RATE: u32 = 44_100;

const POP_VOLUME: f32 = 0.25;
const MELODY_VOLUME: f32 = 0.18;

/// Handle to the greeting's audio output.
///
/// Construct with [`AudioPlayer::new`] for real output or
/// [`AudioPlayer::silent`] to disable sound entirely.
pub struct AudioPlayer {
    // The stream must stay alive for anything to be audible.
    _stream: Option<OutputStream>,
    handle: Option<OutputStreamHandle>,
    _melody: Option<Sink>,
}

impl AudioPlayer {
    /// Open the default output device and start the looping melody.
    ///
    /// Degrades to a silent player on any failure.
    pub fn new() -> Self {
        let (stream, handle) = match OutputStream::try_default() {
            Ok(pair) => pair,
            Err(e) => {
                eprintln!("Audio unavailable, continuing silently: {}", e);
                return Self::silent();
            }
        };

        let melody = match Sink::try_new(&handle) {
            Ok(sink) => {
                sink.set_volume(MELODY_VOLUME);
                sink.append(melody_source().repeat_infinite());
                Some(sink)
            }
            Err(e) => {
                eprintln!("Could not start background melody: {}", e);
                None
            }
        };

        Self {
            _stream: Some(stream),
            handle: Some(handle),
            _melody: melody,
        }
    }

    /// A player that never makes a sound.
    pub fn silent() -> Self {
        Self {
            _stream: None,
            handle: None,
            _melody: None,
        }
    }

    /// Play the one-shot pop cue for an accepted explosion.
    pub fn play_pop(&self) {
        if let Some(handle) = &self.handle {
            if let Err(e) = handle.play_raw(pop_source().amplify(POP_VOLUME).convert_samples()) {
                eprintln!("Pop sound failed: {}", e);
            }
        }
    }
}

impl Default for AudioPlayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Pop cue samples: a short chirp falling from 900 Hz with a sharp decay.
fn pop_samples() -> Vec<f32> {
    let duration = 0.3;
    let count = (SAMPLE_RATE as f32 * duration) as usize;

    (0..count)
        .map(|i| {
            let t = i as f32 / SAMPLE_RATE as f32;
            let envelope = (-t * 18.0).exp();
            let freq = 900.0 - 500.0 * (t / duration);
            let wave = (2.0 * std::f32::consts::PI * freq * t).sin();
            wave * envelope * 0.8
        })
        .collect()
}

fn pop_source() -> SamplesBuffer<f32> {
    SamplesBuffer::new(1, SAMPLE_RATE, pop_samples())
}

/// One loop of the background melody: a slow plucked arpeggio.
fn melody_samples() -> Vec<f32> {
    // A-minor-ish lullaby figure; freq 0.0 is a rest.
    const NOTES: [(f32, f32); 8] = [
        (440.0, 0.9),
        (523.25, 0.9),
        (659.25, 0.9),
        (523.25, 0.9),
        (587.33, 0.9),
        (493.88, 0.9),
        (440.0, 1.2),
        (0.0, 1.4),
    ];

    let mut samples = Vec::new();
    for (freq, dur) in NOTES {
        let count = (SAMPLE_RATE as f32 * dur) as usize;
        for i in 0..count {
            let t = i as f32 / SAMPLE_RATE as f32;
            if freq == 0.0 {
                samples.push(0.0);
                continue;
            }
            // Soft attack, long release, a touch of octave shimmer.
            let envelope = (1.0 - (-t * 30.0).exp()) * (-t * 2.2).exp();
            let wave = (2.0 * std::f32::consts::PI * freq * t).sin()
                + 0.3 * (2.0 * std::f32::consts::PI * freq * 2.0 * t).sin();
            samples.push(wave * envelope * 0.35);
        }
    }
    samples
}

fn melody_source() -> SamplesBuffer<f32> {
    SamplesBuffer::new(1, SAMPLE_RATE, melody_samples())
}

use duelsnake_core::events::SoundCue;

/// Plays the sound cues the game asks for.
pub trait AudioSink {
    fn play(&mut self, cue: SoundCue);
}

/// Records cues instead of playing them.
#[derive(Debug, Default)]
pub struct CueLog {
    cues: Vec<SoundCue>,
}

impl CueLog {
    pub fn cues(&self) -> &[SoundCue] {
        &self.cues
    }

    pub fn drain(&mut self) -> Vec<SoundCue> {
        std::mem::take(&mut self.cues)
    }
}

impl AudioSink for CueLog {
    fn play(&mut self, cue: SoundCue) {
        tracing::trace!(cue = cue.name(), "Sound cue");
        self.cues.push(cue);
    }
}

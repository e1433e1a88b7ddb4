use glidepage_core::visibility::{Playback, PlaybackRejected};

/// Animation frames standing in for a looping webm clip
const CLIP_FRAMES: &[&str] = &["▁▂▃▄", "▂▃▄▅", "▃▄▅▆", "▄▅▆▇", "▅▆▇█", "▆▇█▇", "▇█▇▆", "█▇▆▅", "▇▆▅▄", "▆▅▄▃", "▅▄▃▂", "▄▃▂▁"];

/// Terminal stand-in for a muted looping video.
///
/// Advances one frame per app tick while playing; paused clips hold their
/// last frame, and rewound clips restart from the top, matching the lore
/// section play/pause/rewind policy.
pub struct LoopClip {
    src: &'static str,
    playing: bool,
    position: usize,
}

impl LoopClip {
    pub fn new(src: &'static str) -> Self {
        Self {
            src,
            playing: false,
            position: 0,
        }
    }

    pub fn src(&self) -> &'static str {
        self.src
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Advance one frame if playing
    pub fn tick(&mut self) {
        if self.playing {
            self.position = (self.position + 1) % CLIP_FRAMES.len();
        }
    }

    /// The glyph row representing the current frame
    pub fn current_frame(&self) -> &'static str {
        CLIP_FRAMES[self.position]
    }
}

impl Playback for LoopClip {
    fn play(&mut self) -> Result<(), PlaybackRejected> {
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn rewind(&mut self) {
        self.position = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_only_advances_while_playing() {
        let mut clip = LoopClip::new("/temple480.webm");
        let initial = clip.current_frame();
        clip.tick();
        assert_eq!(clip.current_frame(), initial);

        clip.play().unwrap();
        clip.tick();
        assert_ne!(clip.current_frame(), initial);

        clip.pause();
        let held = clip.current_frame();
        clip.tick();
        assert_eq!(clip.current_frame(), held);

        clip.rewind();
        assert_eq!(clip.current_frame(), initial);
    }
}

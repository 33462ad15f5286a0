// snd.rs -- audio collaborator interface
//
// The core never owns an audio device; it reports what happened through
// frame events and the frontend plays the clips. Fire-and-forget, no
// return value consumed.

use crate::events::FrameEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundClip {
    Fire,
    Hit,
}

pub trait AudioSink {
    fn play(&mut self, clip: SoundClip);
}

/// Maps one tick's events onto the audio sink.
pub fn play_frame_sounds(events: &[FrameEvent], snd: &mut dyn AudioSink) {
    for ev in events {
        match ev {
            FrameEvent::Fired => snd.play(SoundClip::Fire),
            FrameEvent::UfoDown => snd.play(SoundClip::Hit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Recorder(Vec<SoundClip>);

    impl AudioSink for Recorder {
        fn play(&mut self, clip: SoundClip) {
            self.0.push(clip);
        }
    }

    #[test]
    fn test_event_to_clip_mapping() {
        let mut rec = Recorder(Vec::new());
        let events = [FrameEvent::Fired, FrameEvent::UfoDown, FrameEvent::Fired];
        play_frame_sounds(&events, &mut rec);
        assert_eq!(
            rec.0,
            vec![SoundClip::Fire, SoundClip::Hit, SoundClip::Fire]
        );
    }
}

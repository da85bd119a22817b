use std::sync::Arc;

use super::*;
use crate::encode::sink::InMemorySink;
use crate::font::FontSlot;
use crate::font::box_font::BoxFont;
use crate::layout::LayoutParams;
use crate::render::backend::FrameRGBA;
use crate::text::input::TextInput;

fn composer(text: &str) -> FrameComposer {
    FrameComposer::new(
        TextInput::from_raw(text),
        LayoutParams::default(),
        Arc::new(FontSlot::new(Arc::new(BoxFont::new()))),
    )
    .unwrap()
}

struct FailingSink {
    fail_at: u64,
    pushed: u64,
    aborted: bool,
    ended: bool,
}

impl FrameSink for FailingSink {
    fn begin(&mut self, _cfg: SinkConfig) -> KinetypeResult<()> {
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, _frame: &FrameRGBA) -> KinetypeResult<()> {
        if idx.0 == self.fail_at {
            return Err(KinetypeError::export("encoder rejected frame"));
        }
        self.pushed += 1;
        Ok(())
    }

    fn end(&mut self) -> KinetypeResult<()> {
        self.ended = true;
        Ok(())
    }

    fn abort(&mut self) {
        self.aborted = true;
    }
}

#[test]
fn settings_defaults_and_frame_count() {
    let s = VideoSettings::default();
    assert_eq!(s.frame_range().len_frames(), 900);
    assert_eq!(VideoSettings::new(30, 0.5).unwrap().frame_range().len_frames(), 15);
    assert_eq!(VideoSettings::new(24, 1.99).unwrap().frame_range().len_frames(), 47);
    assert!(VideoSettings::new(0, 1.0).is_err());
    assert!(VideoSettings::new(30, 0.0).is_err());
    assert!(VideoSettings::new(30, f64::INFINITY).is_err());
}

#[test]
fn frame_times_are_index_over_fps() {
    let s = VideoSettings::new(60, 1.0).unwrap();
    for i in [0u64, 1, 7, 59] {
        assert_eq!(s.time_of(FrameIndex(i)), i as f64 / 60.0);
    }
}

#[test]
fn pushes_every_frame_in_order() {
    let c = composer("go");
    let mut sink = InMemorySink::new();
    let stats = export_video(&c, VideoSettings::new(10, 0.3).unwrap(), &mut sink).unwrap();
    assert_eq!(stats.frames, 3);
    assert!(sink.is_finished());
    let cfg = sink.config().unwrap();
    assert_eq!((cfg.width, cfg.height, cfg.fps.num), (1920, 1080, 10));
    let idx: Vec<u64> = sink.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(idx, vec![0, 1, 2]);
    assert_eq!(sink.frames()[2].1, c.render_at(0.2).unwrap());
}

#[test]
fn placeholder_is_rejected_before_begin() {
    let c = composer("  ");
    let mut sink = InMemorySink::new();
    let err = export_video(&c, VideoSettings::new(10, 1.0).unwrap(), &mut sink).unwrap_err();
    assert!(err.is_validation());
    assert!(sink.config().is_none());
}

#[test]
fn sub_frame_duration_is_rejected() {
    let c = composer("go");
    let mut sink = InMemorySink::new();
    assert!(export_video(&c, VideoSettings::new(10, 0.05).unwrap(), &mut sink).is_err());
    assert!(sink.config().is_none());
}

#[test]
fn failure_aborts_the_sink() {
    let c = composer("go");
    let mut sink = FailingSink {
        fail_at: 2,
        pushed: 0,
        aborted: false,
        ended: false,
    };
    assert!(export_video(&c, VideoSettings::new(10, 1.0).unwrap(), &mut sink).is_err());
    assert_eq!(sink.pushed, 2);
    assert!(sink.aborted);
    assert!(!sink.ended);
}

use std::collections::VecDeque;
use std::sync::Arc;

use super::*;
use crate::font::FontSlot;
use crate::font::box_font::BoxFont;
use crate::layout::LayoutParams;
use crate::text::input::TextInput;

struct ScriptedHost {
    ticks: VecDeque<f64>,
    frames: Vec<FrameRGBA>,
}

impl ScriptedHost {
    fn new(ticks: impl IntoIterator<Item = f64>) -> Self {
        Self {
            ticks: ticks.into_iter().collect(),
            frames: Vec::new(),
        }
    }
}

impl RepaintHost for ScriptedHost {
    fn next_repaint(&mut self) -> Option<f64> {
        self.ticks.pop_front()
    }

    fn present(&mut self, frame: &FrameRGBA) -> KinetypeResult<()> {
        self.frames.push(frame.clone());
        Ok(())
    }
}

fn composer() -> FrameComposer {
    let slot = Arc::new(FontSlot::new(Arc::new(BoxFont::new())));
    FrameComposer::new(
        TextInput::from_raw("live"),
        LayoutParams::for_canvas(160.0, 90.0),
        slot,
    )
    .unwrap()
}

#[test]
fn tick_renders_skips_and_stops() {
    let mut live = LiveLoop::new(AnimationClock::started_at(0.0), FrameScheduler::new(10.0));
    assert_eq!(live.tick(0.0), LoopControl::Render { time_secs: 0.0 });
    assert_eq!(live.tick(50.0), LoopControl::Skip);
    assert_eq!(live.tick(100.0), LoopControl::Render { time_secs: 0.1 });
    live.toggle(120.0);
    assert_eq!(live.tick(500.0), LoopControl::Stop);
}

#[test]
fn resume_renders_immediately_from_the_frozen_time() {
    let mut live = LiveLoop::new(AnimationClock::started_at(0.0), FrameScheduler::new(1.0));
    assert!(matches!(live.tick(0.0), LoopControl::Render { .. }));
    live.toggle(2_000.0);
    live.toggle(9_000.0);
    assert_eq!(live.tick(9_010.0), LoopControl::Render { time_secs: 2.01 });
}

#[test]
fn run_live_presents_rate_limited_frames() {
    let mut live = LiveLoop::new(AnimationClock::started_at(0.0), FrameScheduler::new(30.0));
    let mut host = ScriptedHost::new((0..12).map(|i| f64::from(i) * 1000.0 / 60.0));
    let stats = run_live(&mut live, &composer(), &mut host).unwrap();
    assert_eq!(stats.rendered, 6);
    assert_eq!(stats.skipped, 6);
    assert_eq!(host.frames.len(), 6);
}

#[test]
fn live_frames_match_direct_renders() {
    let c = composer();
    let mut live = LiveLoop::new(AnimationClock::started_at(0.0), FrameScheduler::new(120.0));
    let mut host = ScriptedHost::new([0.0, 250.0, 500.0]);
    run_live(&mut live, &c, &mut host).unwrap();
    assert_eq!(host.frames[1], c.render_at(0.25).unwrap());
    assert_eq!(host.frames[2], c.render_at(0.5).unwrap());
}

#[test]
fn paused_loop_stops_without_rendering() {
    let mut live = LiveLoop::new(AnimationClock::paused_at(1.0), FrameScheduler::default());
    let mut host = ScriptedHost::new([0.0, 16.0]);
    let stats = run_live(&mut live, &composer(), &mut host).unwrap();
    assert_eq!(stats.rendered, 0);
    assert!(host.frames.is_empty());
}

#[test]
fn paced_host_stops_at_its_deadline() {
    let mut host = PacedHost::new(Duration::from_millis(60));
    let mut ticks = 0;
    while host.next_repaint().is_some() {
        ticks += 1;
        assert!(ticks < 100);
    }
    assert!(ticks >= 1);
    assert!(host.last_frame().is_none());
}

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use kinetype::{
    AnimationClock, FfmpegSink, FfmpegSinkOpts, FontSlot, FrameComposer, FrameScheduler,
    LiveLoop, PacedHost, Scene,
};

#[derive(Parser, Debug)]
#[command(name = "kinetype", version, about = "Kinetic typography renderer")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the character placements at a time as JSON.
    Layout(FrameArgs),
    /// Render one 1920x1080 frame as PNG.
    Png(OutArgs),
    /// Write one 1920x1080 frame as SVG (needs a font file).
    Svg(OutArgs),
    /// Render an MP4 video (requires `ffmpeg` on PATH).
    Video(VideoArgs),
    /// Run the live loop for a while and optionally save the last frame.
    Live(LiveArgs),
}

#[derive(Args, Debug)]
struct SceneArgs {
    /// Scene JSON. Defaults apply when omitted.
    #[arg(long)]
    scene: Option<PathBuf>,

    /// Override the scene text.
    #[arg(long)]
    text: Option<String>,

    /// Override the scene font (.ttf/.otf/.ttc).
    #[arg(long)]
    font: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Animation time in seconds.
    #[arg(long, default_value_t = 0.0)]
    time: f64,
}

#[derive(Args, Debug)]
struct OutArgs {
    #[command(flatten)]
    frame: FrameArgs,

    /// Output path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct VideoArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Output MP4 path.
    #[arg(long)]
    out: PathBuf,

    /// Override the export frame rate.
    #[arg(long)]
    fps: Option<u32>,

    /// Override the export length in seconds.
    #[arg(long)]
    duration: Option<f64>,
}

#[derive(Args, Debug)]
struct LiveArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// How long to run, in seconds.
    #[arg(long, default_value_t = 2.0)]
    seconds: f64,

    /// Save the last presented frame as PNG.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Layout(args) => cmd_layout(args),
        Command::Png(args) => cmd_png(args),
        Command::Svg(args) => cmd_svg(args),
        Command::Video(args) => cmd_video(args),
        Command::Live(args) => cmd_live(args),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("KINETYPE_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_scene(args: &SceneArgs) -> anyhow::Result<Scene> {
    let mut scene = match &args.scene {
        Some(path) => Scene::from_path(path)
            .with_context(|| format!("load scene '{}'", path.display()))?,
        None => Scene::default(),
    };
    if let Some(text) = &args.text {
        scene = scene.with_text(text.clone());
    }
    if let Some(font) = &args.font {
        scene = scene.with_font(font.clone());
    }
    scene.validate()?;
    Ok(scene)
}

fn make_composer(args: &SceneArgs) -> anyhow::Result<(Scene, FrameComposer)> {
    let scene = load_scene(args)?;
    let slot = Arc::new(FontSlot::with_system_fallback());
    if let Some(path) = scene.font_path() {
        slot.load_or_fallback(&path);
    }
    let composer = FrameComposer::from_scene(&scene, slot)?;
    Ok((scene, composer))
}

fn cmd_layout(args: FrameArgs) -> anyhow::Result<()> {
    let (_, composer) = make_composer(&args.scene)?;
    let metrics = composer.font().current();
    let placements = composer.placements(composer.phase_at(args.time), metrics.as_ref());
    let json = serde_json::to_string_pretty(&placements).context("serialize placements")?;
    println!("{json}");
    Ok(())
}

fn cmd_png(args: OutArgs) -> anyhow::Result<()> {
    let (_, composer) = make_composer(&args.frame.scene)?;
    kinetype::export_png(&composer, args.frame.time, &args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_svg(args: OutArgs) -> anyhow::Result<()> {
    let (_, composer) = make_composer(&args.frame.scene)?;
    kinetype::export_svg(&composer, args.frame.time, &args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_video(args: VideoArgs) -> anyhow::Result<()> {
    let (scene, composer) = make_composer(&args.scene)?;
    let defaults = scene.video_settings()?;
    let settings = kinetype::VideoSettings::new(
        args.fps.unwrap_or(defaults.fps.num),
        args.duration.unwrap_or(defaults.duration_secs),
    )?;
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new(&args.out));
    let stats = kinetype::export_video(&composer, settings, &mut sink)?;
    eprintln!("wrote {} ({} frames)", args.out.display(), stats.frames);
    Ok(())
}

fn cmd_live(args: LiveArgs) -> anyhow::Result<()> {
    let run_for = Duration::try_from_secs_f64(args.seconds)
        .context("--seconds must be a non-negative number")?;
    let (scene, composer) = make_composer(&args.scene)?;
    let mut live = LiveLoop::new(
        AnimationClock::started_at(0.0),
        FrameScheduler::new(scene.target_fps()),
    );
    let mut host = PacedHost::new(run_for);
    let stats = kinetype::run_live(&mut live, &composer, &mut host)?;
    match stats.measured_fps {
        Some(fps) => eprintln!("rendered {} frames ({fps:.1} fps)", stats.rendered),
        None => eprintln!("rendered {} frames", stats.rendered),
    }

    if let Some(out) = &args.out {
        let frame = host
            .last_frame()
            .context("no frame was presented; increase --seconds")?;
        kinetype::export::write_png(frame, out)?;
        eprintln!("wrote {}", out.display());
    }
    Ok(())
}

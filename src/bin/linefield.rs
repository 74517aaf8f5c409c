use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand};
use linefield::{
    CpuRenderer, FrameRGBA, LineRenderer, LineSetConfig, Point, RenderSettings, ResolutionScale,
    Rng64, Stage, Surface, SvgRenderer,
};

const CLEAR_RGBA: [u8; 4] = [18, 20, 28, 255];

#[derive(Parser, Debug)]
#[command(name = "linefield", version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the frame drawn after a number of pointer moves, as PNG or SVG.
    Frame(FrameArgs),
    /// Render one PNG per step into a directory.
    Sequence(SequenceArgs),
}

#[derive(Parser, Debug)]
struct SceneArgs {
    /// Line set config JSON. Defaults to the built-in demo look.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Logical surface width (before resolution scaling).
    #[arg(long, default_value_t = 128)]
    width: u32,

    /// Logical surface height (before resolution scaling).
    #[arg(long, default_value_t = 96)]
    height: u32,

    /// Resolution scale applied to the surface and all linear config values.
    #[arg(long, default_value_t = ResolutionScale::DEFAULT.factor())]
    scale: f64,

    /// Random seed. Taken from the system clock when omitted.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Pointer moves to simulate after the initial frame.
    #[arg(long, default_value_t = 0)]
    steps: u64,

    /// Output path; `.svg` writes SVG, anything else PNG.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct SequenceArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Number of frames, including the initial one.
    #[arg(long, default_value_t = 30)]
    frames: u32,

    /// Output directory for `frame_00000.png` and onward.
    #[arg(long)]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Sequence(args) => cmd_sequence(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x9E37_79B9_7F4A_7C15)
}

fn build_stage(args: &SceneArgs) -> anyhow::Result<Stage> {
    let scale = ResolutionScale::new(args.scale)?;
    let logical = Surface::new(args.width, args.height);
    let seed = args.seed.unwrap_or_else(clock_seed);
    tracing::info!(seed, "seeded random source");

    let stage = match &args.config {
        Some(path) => {
            let config = LineSetConfig::from_path(path)?;
            Stage::new(logical, &config, scale, Rng64::new(seed))
        }
        None => Stage::demo(logical, scale, Rng64::new(seed)),
    }
    .with_context(|| "build line set")?;
    Ok(stage)
}

/// Pointer position for the `i`-th simulated move: a left-to-right sweep across the middle row.
fn pointer_at(i: u64, logical: Surface) -> Point {
    let w = f64::from(logical.width.max(1));
    Point::new((i as f64 * 7.0) % w, f64::from(logical.height) / 2.0)
}

fn settings() -> RenderSettings {
    RenderSettings {
        clear_rgba: Some(CLEAR_RGBA),
    }
}

fn run_steps(
    stage: &mut Stage,
    logical: Surface,
    steps: u64,
    renderer: &mut dyn LineRenderer,
) -> anyhow::Result<()> {
    stage.start(renderer)?;
    for i in 0..steps {
        stage.pointer_moved(pointer_at(i, logical), renderer)?;
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let mut stage = build_stage(&args.scene)?;
    let logical = Surface::new(args.scene.width, args.scene.height);
    ensure_parent_dir(&args.out)?;

    let is_svg = args
        .out
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
    if is_svg {
        let mut renderer = SvgRenderer::new(settings());
        run_steps(&mut stage, logical, args.steps, &mut renderer)?;
        std::fs::write(&args.out, renderer.finish()?)
            .with_context(|| format!("write svg '{}'", args.out.display()))?;
    } else {
        let mut renderer = CpuRenderer::new(settings());
        run_steps(&mut stage, logical, args.steps, &mut renderer)?;
        write_png(&args.out, &renderer.finish()?)?;
    }

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_sequence(args: SequenceArgs) -> anyhow::Result<()> {
    if args.frames == 0 {
        anyhow::bail!("--frames must be > 0");
    }
    let mut stage = build_stage(&args.scene)?;
    let logical = Surface::new(args.scene.width, args.scene.height);
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let mut renderer = CpuRenderer::new(settings());
    for i in 0..args.frames {
        if i == 0 {
            stage.start(&mut renderer)?;
        } else {
            stage.pointer_moved(pointer_at(u64::from(i - 1), logical), &mut renderer)?;
        }
        let path = args.out_dir.join(format!("frame_{i:05}.png"));
        write_png(&path, &renderer.finish()?)?;
        tracing::debug!(path = %path.display(), "wrote frame");
    }

    eprintln!(
        "wrote {} frames to {}",
        args.frames,
        args.out_dir.display()
    );
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn write_png(path: &Path, frame: &FrameRGBA) -> anyhow::Result<()> {
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))
}

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use panelfx::{
    AnimationCoordinator, AnimationId, EngineConfig, FrameBuffer, ManualClock, PixelCanvas,
};

#[derive(Parser, Debug)]
#[command(name = "panelfx", version)]
struct Cli {
    /// Log engine events at debug level.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the animation catalog.
    List,
    /// Run one animation offline and write its last frame as a PNG.
    Frame(FrameArgs),
    /// Drive the coordinator offline and write every K-th frame as a PNG.
    Sequence(SequenceArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Animation to render (`plasma`, `fire`, ...).
    #[arg(long)]
    animation: AnimationId,

    /// Number of frames to simulate before capturing.
    #[arg(long, default_value_t = 60)]
    frames: u64,

    /// Simulated frame rate.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Integer upscale factor for the written PNG.
    #[arg(long, default_value_t = 1)]
    scale: u32,

    /// Engine configuration JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct SequenceArgs {
    /// Number of frames to simulate.
    #[arg(long, default_value_t = 300)]
    frames: u64,

    /// Simulated frame rate.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Write every K-th frame.
    #[arg(long, default_value_t = 10)]
    every: u64,

    /// Animation to select manually during the run.
    #[arg(long, requires = "at")]
    select: Option<AnimationId>,

    /// Frame at which `--select` is applied.
    #[arg(long, requires = "select")]
    at: Option<u64>,

    /// Disable auto-cycling.
    #[arg(long)]
    manual: bool,

    /// Integer upscale factor for the written PNGs.
    #[arg(long, default_value_t = 1)]
    scale: u32,

    /// Engine configuration JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output directory for `frame_NNNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,

    /// Print the final coordinator status as JSON on stdout.
    #[arg(long)]
    status: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::List => cmd_list(),
        Command::Frame(args) => cmd_frame(args),
        Command::Sequence(args) => cmd_sequence(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn load_config(path: Option<&Path>) -> anyhow::Result<EngineConfig> {
    let cfg = match path {
        Some(p) => EngineConfig::from_path(p)
            .with_context(|| format!("load config '{}'", p.display()))?,
        None => EngineConfig::default(),
    };
    Ok(cfg)
}

fn frame_interval_ms(fps: u32) -> anyhow::Result<u64> {
    if fps == 0 {
        anyhow::bail!("fps must be > 0");
    }
    Ok((1_000 / u64::from(fps)).max(1))
}

fn write_frame(fb: &FrameBuffer, scale: u32, out: &Path) -> anyhow::Result<()> {
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let frame = panelfx::upscale_nearest(&fb.snapshot(), scale)?;
    panelfx::write_png(&frame, out).with_context(|| format!("write png '{}'", out.display()))?;
    Ok(())
}

fn cmd_list() -> anyhow::Result<()> {
    let catalog = panelfx::Catalog::new(panelfx::Extent::default());
    for id in AnimationId::ALL {
        println!("{:>2}  {:<10} {}", id.index(), id.key(), catalog.name(id));
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let mut cfg = load_config(args.config.as_deref())?;
    cfg.start = args.animation;
    cfg.auto_cycle = false;
    let step = frame_interval_ms(args.fps)?;

    let clock = ManualClock::default();
    let mut coord = AnimationCoordinator::new(&cfg, clock.clone())?;
    let mut fb = FrameBuffer::new(cfg.width, cfg.height)?;

    for _ in 0..args.frames.max(1) {
        clock.advance(step);
        coord.tick(&mut fb);
        fb.present();
    }

    write_frame(&fb, args.scale, &args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_sequence(args: SequenceArgs) -> anyhow::Result<()> {
    let mut cfg = load_config(args.config.as_deref())?;
    if args.manual {
        cfg.auto_cycle = false;
    }
    let step = frame_interval_ms(args.fps)?;
    let every = args.every.max(1);

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let clock = ManualClock::default();
    let mut coord = AnimationCoordinator::new(&cfg, clock.clone())?;
    let mut fb = FrameBuffer::new(cfg.width, cfg.height)?;

    let mut written = 0usize;
    for frame in 0..args.frames {
        if let (Some(id), Some(at)) = (args.select, args.at)
            && frame == at
        {
            let outcome = coord.select_animation(id);
            tracing::info!(frame, ?outcome, "manual select");
        }

        clock.advance(step);
        coord.tick(&mut fb);
        fb.present();

        if frame % every == 0 {
            let out = args.out_dir.join(format!("frame_{frame:05}.png"));
            write_frame(&fb, args.scale, &out)?;
            written += 1;
        }
    }

    if args.status {
        let status = serde_json::to_string_pretty(&coord.status())
            .with_context(|| "serialize coordinator status")?;
        println!("{status}");
    }

    eprintln!("wrote {written} frames to {}", args.out_dir.display());
    Ok(())
}

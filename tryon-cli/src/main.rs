use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tryon_core::asset::{ExternalFigure, FigureAsset};
use tryon_core::color::{HAIR_COLORS, SKIN_TONES};
use tryon_core::export::{self, DrawList};
use tryon_core::profile::{self, Catalog};
use tryon_core::render::{render_preview, Detail, PreviewParams};
use tryon_core::{Controller, VERSION};

#[derive(Parser, Debug)]
#[command(name = "tryon", version = VERSION, about = "Procedural avatar try-on tools")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

/// Where the session comes from: a profile, an optional catalog pick and an
/// optional external figure.
#[derive(Args, Debug)]
struct Session {
    /// Try-on profile YAML; defaults apply when omitted
    #[arg(long)]
    profile: Option<String>,
    /// Catalog id to wear instead of the profile's garment
    #[arg(long)]
    garment: Option<String>,
    /// Size override for --garment
    #[arg(long, requires = "garment")]
    size: Option<String>,
    /// Catalog YAML used to resolve --garment (built-in catalog otherwise)
    #[arg(long)]
    catalog: Option<String>,
    /// External figure JSON replacing the procedural body
    #[arg(long)]
    figure: Option<String>,
    /// Seconds on the idle clock
    #[arg(long, default_value_t = 0.0)]
    time: f32,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    Json,
    Obj,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load and validate a try-on profile YAML
    Inspect { path: String },
    /// List catalog garments and the customization swatches
    Catalog {
        #[arg(long)]
        path: Option<String>,
    },
    /// Write the assembled scene as a JSON draw list or an OBJ mesh
    Export {
        #[command(flatten)]
        session: Session,
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
        #[arg(long, default_value = "avatar.json")]
        out: String,
    },
    /// Render a front orthographic preview and write PNG
    Preview {
        #[command(flatten)]
        session: Session,
        #[arg(long, default_value_t = 512, value_parser = clap::value_parser!(u32).range(1..=8192))]
        width: u32,
        #[arg(long, default_value_t = 512, value_parser = clap::value_parser!(u32).range(1..=8192))]
        height: u32,
        #[arg(long, default_value = "preview.png")]
        out: String,
    },
    /// Print the idle pose sampled over time
    Motion {
        #[arg(long)]
        profile: Option<String>,
        #[arg(long, default_value_t = 10.0)]
        duration: f32,
        #[arg(long, default_value_t = 20)]
        steps: u32,
    },
}

fn load_catalog(path: Option<&str>) -> Result<Catalog> {
    match path {
        Some(p) => Catalog::load_from_path(p),
        None => Ok(Catalog::default()),
    }
}

fn open_session(s: &Session) -> Result<Controller> {
    let profile = match &s.profile {
        Some(p) => profile::load_from_path(p)?,
        None => Default::default(),
    };
    let mut ctl = Controller::from_profile(&profile);
    if let Some(id) = &s.garment {
        let sel = load_catalog(s.catalog.as_deref())?.select(id, s.size.as_deref())?;
        ctl.select_garment(Some(sel));
    }
    if let Some(path) = &s.figure {
        ctl.attach_figure(FigureAsset::from_load(ExternalFigure::load_from_path(path)));
    }
    Ok(ctl)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Inspect { path } => {
            let p = profile::load_from_path(&path)?;
            let c = &p.customization;
            println!("Loaded profile: {}", path);
            println!("  body: {:?}, {:.2} m", c.body_type, c.height);
            println!("  skin: {}  hair: {}", c.skin_tone, c.hair_color);
            match &p.garment {
                Some(g) => println!(
                    "  garment: {} [{}] {} size={}",
                    g.name,
                    g.kind.label(),
                    g.color,
                    g.size.as_deref().unwrap_or("-")
                ),
                None => println!("  garment: none"),
            }
            println!(
                "  idle: amp={:.3} rad, w={:.2} rad/s, head amp={:.3}, freeze_while_dressed={}",
                p.idle.amplitude, p.idle.frequency, p.idle.head_amplitude, p.idle.freeze_while_dressed
            );
            let ctl = Controller::from_profile(&p);
            let size = ctl.scene().bounds().size();
            println!(
                "  primitives: {} body + {} garment, extent {:.3} x {:.3} x {:.3} m",
                ctl.scene().body.len(),
                ctl.scene().garment.len(),
                size.x,
                size.y,
                size.z
            );
        }
        Command::Catalog { path } => {
            let catalog = load_catalog(path.as_deref())?;
            for g in &catalog.items {
                println!("[{}] {} ({}, {}, size {})", g.id, g.name, g.kind.label(), g.color, g.size.as_deref().unwrap_or("-"));
            }
            println!("skin tones:");
            for s in SKIN_TONES { println!("  {:<8} {}", s.name, s.color); }
            println!("hair colors:");
            for s in HAIR_COLORS { println!("  {:<8} {}", s.name, s.color); }
        }
        Command::Export { session, format, out } => {
            let ctl = open_session(&session)?;
            let scene = ctl.frame(session.time);
            match format {
                Format::Json => {
                    let json = DrawList::from_scene(&scene).to_json()?;
                    std::fs::write(&out, json).with_context(|| format!("writing {}", out))?;
                }
                Format::Obj => {
                    let mtl_path = std::path::Path::new(&out).with_extension("mtl");
                    let mtl_name = mtl_path.file_name().map(|n| n.to_string_lossy().into_owned());
                    let obj = export::to_obj(&scene, Detail::default(), mtl_name.as_deref());
                    std::fs::write(&out, obj).with_context(|| format!("writing {}", out))?;
                    std::fs::write(&mtl_path, export::to_mtl(&scene))
                        .with_context(|| format!("writing {}", mtl_path.display()))?;
                }
            }
            println!("Wrote {} primitives to {}", scene.len(), out);
        }
        Command::Preview { session, width, height, out } => {
            let ctl = open_session(&session)?;
            let scene = ctl.frame(session.time);
            let params = PreviewParams { width, height, ..Default::default() };
            let pixels = render_preview(&scene, &params);
            let img = image::RgbaImage::from_raw(width, height, pixels)
                .ok_or_else(|| anyhow::anyhow!("Failed to create image from raw"))?;
            img.save(&out)?;
            println!("Wrote {}x{} image to {}", width, height, out);
        }
        Command::Motion { profile: path, duration, steps } => {
            let p = match &path {
                Some(p) => profile::load_from_path(p)?,
                None => Default::default(),
            };
            let ctl = Controller::from_profile(&p);
            let steps = steps.max(1);
            println!("period: {:.2} s", p.idle.period());
            for i in 0..=steps {
                let t = duration * i as f32 / steps as f32;
                let pose = ctl.idle_pose(t);
                println!("t={:>6.2}s  yaw={:+.4}  head={:+.4}", t, pose.root_yaw, pose.head_pitch);
            }
        }
    }
    Ok(())
}

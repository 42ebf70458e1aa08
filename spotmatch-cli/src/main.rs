use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use spotmatch::io::{load_rgba_image, rgba_image_from_view};
use spotmatch::{
    best_match, CardBank, ImageView, NormalizeConfig, OwnedImage, Position, SpotMatchError,
    ICON_RADIUS,
};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Find the icon two illustrated cards share")]
struct Cli {
    /// Enable tracing output for performance profiling.
    #[arg(long, global = true)]
    trace: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compare two cards and report their best-matching icon pair.
    FindMatch {
        /// First card image.
        card_a: PathBuf,
        /// Second card image.
        card_b: PathBuf,
        #[command(flatten)]
        opts: MatchOpts,
    },
    /// Compare every unordered pair among the given cards.
    FindMatches {
        /// Card images, at least two.
        #[arg(num_args = 2.., required = true)]
        cards: Vec<PathBuf>,
        #[command(flatten)]
        opts: MatchOpts,
    },
    /// Read whitespace-separated integers from stdin and write a position list.
    ConvertPoints {
        /// Where to write the JSON position list.
        #[arg(short, long, value_name = "FILE", default_value = "positions.json")]
        output: PathBuf,
    },
}

#[derive(Args, Debug)]
struct MatchOpts {
    /// Path to the JSON position list shared by all cards.
    #[arg(short, long, value_name = "FILE", default_value = "positions.json")]
    positions: PathBuf,
    /// Number of rotation samples per icon signature.
    #[arg(long, default_value_t = 180)]
    samples: usize,
    /// Write the JSON result here instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
    /// Write highlighted card images into this directory.
    #[arg(long, value_name = "DIR")]
    highlight_dir: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct MatchRecord {
    card_a: String,
    card_b: String,
    position_a: [i64; 2],
    position_b: [i64; 2],
    score: u64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive("spotmatch=debug".parse()?),
            )
            .with_target(false)
            .init();
    }

    match cli.command {
        Command::FindMatch {
            card_a,
            card_b,
            opts,
        } => {
            let records = run_match(&[card_a, card_b], &opts)?;
            emit(&records[0], opts.output.as_deref())?;
        }
        Command::FindMatches { cards, opts } => {
            let records = run_match(&cards, &opts)?;
            emit(&records, opts.output.as_deref())?;
        }
        Command::ConvertPoints { output } => convert_points(&output)?,
    }

    Ok(())
}

fn load_positions(path: &Path) -> Result<Vec<Position>, Box<dyn std::error::Error>> {
    let text = fs::read_to_string(path)?;
    let raw: Vec<[i64; 2]> = serde_json::from_str(&text)?;
    if raw.is_empty() {
        return Err(SpotMatchError::EmptyPositions.into());
    }
    Ok(raw.into_iter().map(|[x, y]| Position::new(x, y)).collect())
}

fn run_match(
    cards: &[PathBuf],
    opts: &MatchOpts,
) -> Result<Vec<MatchRecord>, Box<dyn std::error::Error>> {
    let positions = load_positions(&opts.positions)?;
    let cfg = NormalizeConfig {
        samples: opts.samples,
    };

    // One bank per card, built once and reused across every pairing.
    let mut images: Vec<OwnedImage> = Vec::with_capacity(cards.len());
    let mut banks: Vec<CardBank> = Vec::with_capacity(cards.len());
    for path in cards {
        let img = load_rgba_image(path)?;
        let bank = CardBank::build(img.view(), &positions, &cfg)?;
        images.push(img);
        banks.push(bank);
    }

    let mut records = Vec::new();
    for i in 0..cards.len() {
        for j in (i + 1)..cards.len() {
            let best = best_match(&banks[i], &banks[j])?;
            tracing::info!(
                card_a = %cards[i].display(),
                card_b = %cards[j].display(),
                score = best.score,
                "matched pair"
            );
            if let Some(dir) = &opts.highlight_dir {
                write_highlights(
                    dir,
                    (&cards[i], &images[i], best.position_a),
                    (&cards[j], &images[j], best.position_b),
                )?;
            }
            records.push(MatchRecord {
                card_a: cards[i].display().to_string(),
                card_b: cards[j].display().to_string(),
                position_a: [best.position_a.x, best.position_a.y],
                position_b: [best.position_b.x, best.position_b.y],
                score: best.score,
            });
        }
    }
    Ok(records)
}

fn convert_points(output: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;

    let values = text
        .split_whitespace()
        .map(str::parse::<i64>)
        .collect::<Result<Vec<_>, _>>()?;
    if values.len() % 2 != 0 {
        return Err("stdin held an odd number of coordinates".into());
    }

    let pairs: Vec<[i64; 2]> = values.chunks_exact(2).map(|c| [c[0], c[1]]).collect();
    fs::write(output, serde_json::to_string(&pairs)?)?;
    Ok(())
}

fn emit<T: Serialize>(value: &T, path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string_pretty(value)?;
    match path {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }
    Ok(())
}

fn write_highlights(
    dir: &Path,
    a: (&Path, &OwnedImage, Position),
    b: (&Path, &OwnedImage, Position),
) -> Result<(), Box<dyn std::error::Error>> {
    fs::create_dir_all(dir)?;
    let stem_a = file_stem(a.0);
    let stem_b = file_stem(b.0);
    let out_a = dir.join(format!("{stem_a}_vs_{stem_b}_{stem_a}.png"));
    let out_b = dir.join(format!("{stem_a}_vs_{stem_b}_{stem_b}.png"));
    render_highlight(a.1.view(), a.2).save(&out_a)?;
    render_highlight(b.1.view(), b.2).save(&out_b)?;
    Ok(())
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("card")
        .to_string()
}

/// Dims the card behind a dark veil with a circular cutout over the match.
fn render_highlight(card: ImageView<'_>, pos: Position) -> image::RgbaImage {
    let mut out = rgba_image_from_view(card);
    let mut veil = image::RgbaImage::from_pixel(
        out.width(),
        out.height(),
        image::Rgba([0x22, 0x22, 0x22, 0xaa]),
    );
    let (cx, cy) = pos.slot_center();
    imageproc::drawing::draw_filled_circle_mut(
        &mut veil,
        (cx as i32, cy as i32),
        ICON_RADIUS as i32,
        image::Rgba([0, 0, 0, 0]),
    );
    image::imageops::overlay(&mut out, &veil, 0, 0);
    out
}

use anyhow::Context;
use clap::Parser;
use seam_carver::{io, seam_carving, CarveOptions};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "seam-carver")]
#[command(about = "Shrinks an image's width by removing its lowest-energy vertical seams")]
#[command(version)]
struct Cli {
    /// Image to carve
    input: PathBuf,

    /// Number of vertical seams (columns) to remove
    seams: usize,

    /// Where to write the carved image
    #[arg(short, long, default_value = "output.png")]
    output: PathBuf,

    /// Disable the rayon-parallel energy stages
    #[arg(long)]
    sequential: bool,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(match cli.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        })
        .init();

    io::output_format(&cli.output).context("checking output path")?;

    let mut image = io::open_argb(&cli.input).context("loading input")?;

    let options = CarveOptions {
        parallel: !cli.sequential,
    };
    seam_carving::carve(&mut image, cli.seams, &options).context("carving")?;

    io::save_argb(image, &cli.output).context("saving output")?;
    log::info!("finished");

    Ok(())
}

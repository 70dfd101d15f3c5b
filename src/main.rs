use clap::Parser;
use dominance::Extractor;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Extract the dominant colors from an image")]
struct Args {
    /// Path to the image to analyze
    image: PathBuf,

    /// How many of the most frequent colors to print
    #[arg(short, long, default_value_t = dominance::DEFAULT_NUM_COLORS)]
    num_colors: usize,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let colors = Extractor::new().num_colors(args.num_colors).extract(&args.image)?;

    for color in colors {
        println!("{}", color.to_hex());
    }

    Ok(())
}

use clap::{Parser, Subcommand};
use freqplan::Result;
use freqplan::plan::{Gains, OffsetsPlan, TopLevel};
use freqplan::render;

#[derive(Parser)]
#[command(name = "freqplan")]
#[command(about = "Validate frequency plans for multi-channel TETRA receivers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a plan from a TOML or JSON config file and validate it.
    Check {
        #[arg(short = 'c', long)]
        config: String,

        /// Print the validated tree as JSON instead of an outline.
        #[arg(long)]
        json: bool,
    },

    /// Build a plan from offsets around the center frequency.
    Offsets {
        /// Center frequency of the SDR
        #[arg(long)]
        center_frequency: u64,

        /// Sample rate of the SDR
        #[arg(long, default_value_t = 1_000_000)]
        samp_rate: u64,

        /// Offsets of the TETRA streams
        #[arg(long, required = true, num_args = 1.., value_delimiter = ',', allow_negative_numbers = true)]
        offsets: Vec<i64>,

        /// Start UDP port. Each stream gets its own port, counting up from here.
        #[arg(long, default_value_t = 42_000)]
        udp_start: u16,

        /// Additional device arguments for osmosdr
        #[arg(long, default_value = "")]
        device_string: String,

        #[arg(long, default_value_t = 10)]
        rf: u32,

        #[arg(long = "if", default_value_t = 10)]
        if_gain: u32,

        #[arg(long, default_value_t = 10)]
        bb: u32,

        #[arg(long)]
        json: bool,
    },
}

fn print_plan(top: &TopLevel, json: bool) -> Result<()> {
    if json {
        println!("{}", render::render_json(top)?);
    } else {
        print!("{}", render::render_text(top));
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Check { config, json } => {
            let top = freqplan::load_file(&config)?;
            print_plan(&top, json)?;
        }
        Commands::Offsets {
            center_frequency,
            samp_rate,
            offsets,
            udp_start,
            device_string,
            rf,
            if_gain,
            bb,
            json,
        } => {
            let plan = OffsetsPlan {
                center_frequency,
                sample_rate: samp_rate,
                device_string,
                gains: Gains {
                    rf_gain: rf,
                    if_gain,
                    bb_gain: bb,
                },
                offsets,
                udp_start,
            };
            let top = plan.build()?;
            print_plan(&top, json)?;
        }
    }

    Ok(())
}

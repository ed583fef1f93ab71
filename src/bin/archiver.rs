use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use blockpack::{Algorithm, ArchiveConfig, Archiver, DEFAULT_BLOCK_SIZE};
use clap::{ArgAction, Parser, ValueEnum};
use log::{info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

#[derive(Parser, Debug)]
#[command(name = "archiver")]
#[command(about = "Block-based file compressor using Huffman or LZW coding")]
#[command(version)]
struct Args {
    /// Action: c(ompress) or d(ecompress)
    action: Action,

    /// Input file (use - for stdin)
    input: PathBuf,

    /// Output file (use - for stdout)
    output: PathBuf,

    /// Uncompressed bytes per block
    #[arg(short, long, default_value_t = DEFAULT_BLOCK_SIZE)]
    block_size: usize,

    /// Compression algorithm: h(uffman) or l(zw)
    #[arg(short, long, default_value = "h")]
    algo: Algorithm,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Action {
    #[value(name = "c", alias = "compress")]
    Compress,
    #[value(name = "d", alias = "decompress")]
    Decompress,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // Only fails if a logger is already installed
    let _ = TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto);
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config =
        ArchiveConfig { block_size: args.block_size, algorithm: args.algo, ..Default::default() };
    // Usage errors and a bad input path must leave no output behind
    config.validate()?;
    let archiver = Archiver::new(config);

    let input: Box<dyn Read> = if args.input.to_str() == Some("-") {
        Box::new(io::stdin().lock())
    } else {
        Box::new(File::open(&args.input)?)
    };
    let output: Box<dyn Write> = if args.output.to_str() == Some("-") {
        Box::new(io::stdout().lock())
    } else {
        Box::new(File::create(&args.output)?)
    };

    let start = std::time::Instant::now();
    match args.action {
        Action::Compress => {
            let stats = archiver.compress(input, output)?;
            info!(
                "compressed {} bytes into {} bytes in {} blocks ({}, {:.2?})",
                stats.input_bytes,
                stats.output_bytes,
                stats.blocks,
                args.algo,
                start.elapsed()
            );
            info!("effective | {:.2}%", stats.ratio());
        }
        Action::Decompress => {
            let stats = archiver.decompress(input, output)?;
            info!(
                "decompressed {} blocks into {} bytes ({}, {:.2?})",
                stats.blocks,
                stats.output_bytes,
                args.algo,
                start.elapsed()
            );
        }
    }

    Ok(())
}

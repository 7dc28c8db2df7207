use crate::utils::Result;
use chrono::Datelike;
use clap::{ArgAction, Parser, Subcommand};
use env_logger::fmt::Color;
use log::{Level, LevelFilter};
use once_cell::sync::Lazy;
use std::{
    io::Write,
    path::{Path, PathBuf},
};

pub static FULL_VERSION: Lazy<String> = Lazy::new(|| {
    format!(
        "{}-{}",
        env!("CARGO_PKG_VERSION"),
        env!("VERGEN_GIT_DESCRIBE")
    )
});

#[derive(Parser)]
#[command(name="quasiseed",
          version=&**FULL_VERSION,
          about="Seed selection and result serialization for viral quasispecies reconstruction",
          long_about = None,
          disable_help_subcommand = true,
          after_help = format!("Copyright (C) {}
This program comes with ABSOLUTELY NO WARRANTY.", chrono::Utc::now().year()),
          help_template = "{name} {version}\n{about-section}\n{usage-heading}\n    {usage}\n\n{all-args}{after-help}",
          )]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[clap(short = 'v')]
    #[clap(long = "verbose")]
    #[clap(action = ArgAction::Count, help = "Specify multiple times to increase verbosity level (e.g., -vv for more verbosity)")]
    pub verbosity: u8,
}

#[derive(Subcommand)]
pub enum Command {
    #[clap(about = "Select diverse seed haplotypes from aligned reads")]
    Seed(SeedArgs),
    #[clap(about = "Write haplotype, read and cluster FASTA reports")]
    Report(ReportArgs),
}

#[derive(Parser, Debug)]
#[command(arg_required_else_help(true))]
pub struct SeedArgs {
    #[clap(required = true)]
    #[clap(short = 'r')]
    #[clap(long = "reads")]
    #[clap(help = "FASTA file with reads aligned to a common frame")]
    #[clap(value_name = "READS")]
    #[arg(value_parser = check_file_exists)]
    pub reads_path: PathBuf,

    #[clap(required = true)]
    #[clap(short = 'o')]
    #[clap(long = "output")]
    #[clap(help = "Output FASTA with the selected seed haplotypes")]
    #[clap(value_name = "OUTPUT")]
    #[arg(value_parser = check_prefix_path)]
    pub output_path: String,

    #[clap(short = 'k')]
    #[clap(long = "max-seeds")]
    #[clap(help = "Maximum number of seeds to select")]
    #[clap(value_name = "K")]
    #[clap(default_value = "10")]
    #[arg(value_parser = at_least_one)]
    pub max_seeds: usize,

    #[clap(long = "threshold")]
    #[clap(help = "Minimum Hamming distance of a new seed to all previous seeds")]
    #[clap(value_name = "DIST")]
    #[clap(default_value = "1")]
    pub threshold: usize,

    #[clap(short = 't')]
    #[clap(long = "threads")]
    #[clap(help = "Number of threads")]
    #[clap(value_name = "THREADS")]
    #[clap(default_value = "1")]
    #[arg(value_parser = threads_in_range)]
    pub num_threads: usize,

    #[clap(help_heading("Advanced"))]
    #[clap(long = "seed")]
    #[clap(value_name = "SEED")]
    #[clap(help = "Random seed for choosing the first seed read")]
    #[clap(default_value = None)]
    pub rng_seed: Option<u64>,
}

#[derive(Parser, Debug)]
#[command(arg_required_else_help(true))]
pub struct ReportArgs {
    #[clap(required = true)]
    #[clap(short = 'r')]
    #[clap(long = "reads")]
    #[clap(help = "FASTA file with reads aligned to a common frame")]
    #[clap(value_name = "READS")]
    #[arg(value_parser = check_file_exists)]
    pub reads_path: PathBuf,

    #[clap(required = true)]
    #[clap(short = 'g')]
    #[clap(long = "haplotypes")]
    #[clap(help = "FASTA file with refined haplotypes (haplotype<ID>_freq_<FREQ> headers)")]
    #[clap(value_name = "HAPLOTYPES")]
    #[arg(value_parser = check_file_exists)]
    pub haplotypes_path: PathBuf,

    #[clap(required = true)]
    #[clap(short = 'p')]
    #[clap(long = "posteriors")]
    #[clap(help = "Posterior matrix, one row per haplotype and one column per read")]
    #[clap(value_name = "POSTERIORS")]
    #[arg(value_parser = check_file_exists)]
    pub posteriors_path: PathBuf,

    #[clap(required = true)]
    #[clap(short = 'o')]
    #[clap(long = "output-dir")]
    #[clap(help = "Directory for the report files")]
    #[clap(value_name = "OUTPUT_DIR")]
    pub output_dir: PathBuf,

    #[clap(help_heading("Advanced"))]
    #[clap(long = "frequencies")]
    #[clap(value_name = "FREQUENCIES")]
    #[clap(help = "Also write one record per distinct haplotype sequence with its frequency")]
    #[arg(value_parser = check_prefix_path)]
    pub frequencies_path: Option<String>,
}

pub fn init_verbose(args: &Cli) {
    let filter_level: LevelFilter = match args.verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    env_logger::Builder::from_default_env()
        .format(|buf, record| {
            let level = record.level();
            let mut style = buf.style();
            match record.level() {
                Level::Error => style.set_color(Color::Red),
                Level::Warn => style.set_color(Color::Yellow),
                Level::Info => style.set_color(Color::Green),
                Level::Debug => style.set_color(Color::Blue),
                Level::Trace => style.set_color(Color::Cyan),
            };

            writeln!(
                buf,
                "{} [{}] - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                style.value(level),
                record.args()
            )
        })
        .filter_level(filter_level)
        .init();
}

fn check_prefix_path(s: &str) -> Result<String> {
    let path = Path::new(s);
    if let Some(parent_dir) = path.parent() {
        if !parent_dir.as_os_str().is_empty() && !parent_dir.exists() {
            return Err(format!("Path does not exist: {}", parent_dir.display()));
        }
    }
    Ok(s.to_string())
}

fn threads_in_range(s: &str) -> Result<usize> {
    let thread: usize = s
        .parse()
        .map_err(|_| format!("`{}` is not a valid thread number", s))?;
    if thread >= 1 {
        Ok(thread)
    } else {
        Err("Number of threads must be at least 1".into())
    }
}

fn at_least_one(s: &str) -> Result<usize> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("`{}` is not a valid count", s))?;
    if value >= 1 {
        Ok(value)
    } else {
        Err("The value must be at least 1".into())
    }
}

fn check_file_exists(s: &str) -> Result<PathBuf> {
    let path = Path::new(s);
    if !path.exists() {
        Err(format!("File does not exist: {}", path.display()))
    } else {
        Ok(path.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_seed_command() {
        let dir = tempfile::tempdir().unwrap();
        let reads = dir.path().join("reads.fa");
        std::fs::write(&reads, ">r0\nACGT\n").unwrap();
        let output = dir.path().join("seeds.fa");

        let cli = Cli::try_parse_from([
            "quasiseed",
            "seed",
            "--reads",
            reads.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
            "-k",
            "4",
            "--seed",
            "11",
        ])
        .unwrap();
        match cli.command {
            Command::Seed(args) => {
                assert_eq!(args.max_seeds, 4);
                assert_eq!(args.threshold, 1);
                assert_eq!(args.num_threads, 1);
                assert_eq!(args.rng_seed, Some(11));
            }
            Command::Report(_) => panic!("expected the seed command"),
        }
    }

    #[test]
    fn reject_zero_seeds_and_threads() {
        assert!(at_least_one("0").is_err());
        assert!(threads_in_range("0").is_err());
        assert_eq!(threads_in_range("8"), Ok(8));
    }

    #[test]
    fn reject_missing_input_file() {
        assert_eq!(
            check_file_exists("/nonexistent/reads.fa"),
            Err("File does not exist: /nonexistent/reads.fa".to_string())
        );
    }
}

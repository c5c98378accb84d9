use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use clap::Parser;

use roundcorner_core::image_io::domain::image_codec::ImageCodec;
use roundcorner_core::image_io::infrastructure::image_file_reader::ImageFileReader;
use roundcorner_core::image_io::infrastructure::image_file_writer::ImageFileWriter;
use roundcorner_core::image_io::infrastructure::raster_codec::RasterCodec;
use roundcorner_core::pipeline::batch_executor::{BatchExecutor, FailurePolicy};
use roundcorner_core::pipeline::infrastructure::threaded_batch_executor::ThreadedBatchExecutor;
use roundcorner_core::pipeline::output_naming::{plan_jobs, OutputNaming, RoundJob};
use roundcorner_core::pipeline::path_expansion::expand_patterns;
use roundcorner_core::pipeline::round_base64_use_case::RoundBase64UseCase;
use roundcorner_core::pipeline::round_image_use_case::RoundImageUseCase;
use roundcorner_core::rounding::infrastructure::circular_corner_rounder::CircularCornerRounder;
use roundcorner_core::shared::constants::{
    DEFAULT_CORNERS, DEFAULT_RATE, DEFAULT_SUFFIX, JPEG_QUALITY,
};
use roundcorner_core::{RoundError, RoundOptions};

/// Round the corners of PNG and JPEG images.
#[derive(Parser, Debug)]
#[command(name = "roundcorner")]
struct Cli {
    /// Image files or glob patterns.
    paths: Vec<String>,

    /// Rounding rate, 1 means circular (0.0-1.0).
    #[arg(short, long, default_value_t = DEFAULT_RATE)]
    rate: f64,

    /// Comma-separated corners to round (tl, tr, bl, br).
    #[arg(short, long, default_value = DEFAULT_CORNERS)]
    corners: String,

    /// Overwrite the original files.
    #[arg(short = 'w', long)]
    overwrite: bool,

    /// Read one base64 image from stdin and print the result to stdout.
    #[arg(short, long)]
    base64: bool,

    /// Output file for a single input.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Prefix for output file names.
    #[arg(short, long, default_value = "")]
    prefix: String,

    /// Suffix for output file names.
    #[arg(short, long, default_value = DEFAULT_SUFFIX)]
    suffix: String,

    /// Worker threads (0 = one per CPU).
    #[arg(short, long, default_value_t = 0)]
    jobs: usize,

    /// JPEG output quality (1-100).
    #[arg(short, long, default_value_t = JPEG_QUALITY)]
    quality: u8,

    /// Keep processing the remaining files after a failure.
    #[arg(long)]
    keep_going: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(exit_code(e.as_ref()));
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    run_with(Cli::parse())
}

/// Validates every option before touching stdin or the file system.
fn run_with(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let options = RoundOptions::parse(cli.rate, &cli.corners)?;
    if !(1..=100).contains(&cli.quality) {
        return Err(format!("Quality must be between 1 and 100, got {}", cli.quality).into());
    }
    let codec = || RasterCodec::new().with_jpeg_quality(cli.quality);

    if cli.base64 {
        return run_base64(Box::new(codec()), options);
    }

    let naming = OutputNaming::from_flags(cli.overwrite, cli.output, cli.prefix, cli.suffix);
    let policy = if cli.keep_going {
        FailurePolicy::KeepGoing
    } else {
        FailurePolicy::FailFast
    };
    let writer = ImageFileWriter::with_codec(Box::new(codec()));
    run_batch(&cli.paths, &naming, writer, options, cli.jobs, policy)
}

fn run_base64(
    codec: Box<dyn ImageCodec>,
    options: RoundOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    let use_case = RoundBase64UseCase::new(
        codec,
        Box::new(CircularCornerRounder::default()),
        options,
    );
    let output = use_case.execute(&line)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn run_batch(
    paths: &[String],
    naming: &OutputNaming,
    writer: ImageFileWriter,
    options: RoundOptions,
    workers: usize,
    policy: FailurePolicy,
) -> Result<(), Box<dyn std::error::Error>> {
    let inputs = expand_patterns(paths)?;
    let jobs = plan_jobs(inputs, naming)?;

    let use_case = RoundImageUseCase::new(
        Box::new(ImageFileReader::new()),
        Box::new(writer),
        Box::new(CircularCornerRounder::default()),
        options,
    );
    let executor: Box<dyn BatchExecutor> = Box::new(ThreadedBatchExecutor::new(workers));

    let start = Instant::now();
    let task = |job: &RoundJob| use_case.execute(&job.input, &job.output);
    let report = executor.execute(jobs, &task, policy);

    let elapsed = start.elapsed().as_secs_f64();
    if report.is_success() {
        log::info!("Rounded {} file(s) in {elapsed:.2}s", report.total);
    } else {
        log::warn!(
            "Rounded {}/{} file(s) in {elapsed:.2}s: {} failed, {} skipped",
            report.succeeded,
            report.total,
            report.failures.len(),
            report.skipped()
        );
    }
    report.into_result()?;
    Ok(())
}

/// Usage errors exit with 2, everything else with 1.
fn exit_code(err: &(dyn std::error::Error + 'static)) -> i32 {
    match err.downcast_ref::<RoundError>() {
        Some(e) if e.is_usage() => 2,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["roundcorner", "a.png"]).unwrap();
        assert_eq!(cli.paths, vec!["a.png"]);
        assert_eq!(cli.rate, DEFAULT_RATE);
        assert_eq!(cli.corners, DEFAULT_CORNERS);
        assert_eq!(cli.suffix, DEFAULT_SUFFIX);
        assert_eq!(cli.prefix, "");
        assert!(!cli.overwrite && !cli.base64 && !cli.keep_going);
        assert_eq!(cli.jobs, 0);
        assert_eq!(cli.quality, JPEG_QUALITY);
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::try_parse_from([
            "roundcorner", "-r", "0.5", "-c", "tl,br", "-w", "-o", "x.png", "-p", "a_", "-s",
            "_b", "-j", "3", "in.png",
        ])
        .unwrap();
        assert_eq!(cli.rate, 0.5);
        assert_eq!(cli.corners, "tl,br");
        assert!(cli.overwrite);
        assert_eq!(cli.output, Some(PathBuf::from("x.png")));
        assert_eq!(cli.prefix, "a_");
        assert_eq!(cli.suffix, "_b");
        assert_eq!(cli.jobs, 3);
    }

    #[test]
    fn test_invalid_values_are_usage_errors() {
        let err = RoundOptions::parse(1.5, DEFAULT_CORNERS).unwrap_err();
        assert_eq!(exit_code(&err), 2);
        let err = RoundOptions::parse(0.5, "xx").unwrap_err();
        assert_eq!(exit_code(&err), 2);
        assert_eq!(exit_code(&RoundError::InvalidFormat), 1);
    }

    fn run_args(args: &[&str]) -> RoundError {
        let cli = Cli::try_parse_from(args).unwrap();
        let err = run_with(cli).unwrap_err();
        match err.downcast::<RoundError>() {
            Ok(e) => *e,
            Err(other) => panic!("expected RoundError, got {other}"),
        }
    }

    #[test]
    fn test_bad_rate_fails_before_globbing() {
        let err = run_args(&["roundcorner", "-r", "1.5", "missing/*.png"]);
        assert!(matches!(err, RoundError::InvalidRate(r) if r == 1.5));
    }

    #[test]
    fn test_bad_corner_fails_before_reading_stdin() {
        // Reaching stdin would surface EmptyInput or a decode error instead.
        let err = run_args(&["roundcorner", "-c", "xx", "-b"]);
        assert!(matches!(err, RoundError::InvalidCorner(ref t) if t == "xx"));
    }

    #[test]
    fn test_bad_rate_reported_before_bad_corner() {
        let err = run_args(&["roundcorner", "-r", "1.5", "-c", "xx", "missing/*.png"]);
        assert!(matches!(err, RoundError::InvalidRate(_)));
    }

    #[test]
    fn test_bad_quality_fails_before_globbing() {
        let cli = Cli::try_parse_from(["roundcorner", "-q", "0", "missing/*.png"]).unwrap();
        let err = run_with(cli).unwrap_err();
        assert!(err.downcast_ref::<RoundError>().is_none());
        assert!(err.to_string().contains("Quality"));
    }

    #[test]
    fn test_missing_paths_reported_before_io() {
        let err = run_batch(
            &[],
            &OutputNaming::default(),
            ImageFileWriter::new(),
            RoundOptions::default(),
            1,
            FailurePolicy::FailFast,
        )
        .unwrap_err();
        assert_eq!(exit_code(err.as_ref()), 2);
    }
}

//! huffpack CLI: compress or decompress a file and report sizes.
//!
//! All presentation (printing, exit codes) lives here; the codec in
//! huffpack-core is pure and returns typed errors.

mod config;
mod input_gen;

use std::fs;
use std::process::ExitCode;

use config::{Config, Mode};
use huffpack_core::{decode_file, encode_file, SizeReport};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!("run with --help for usage");
            return ExitCode::FAILURE;
        }
    };

    match run(&config) {
        Ok(report) => {
            print_report(&config, &report);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> huffpack_core::Result<SizeReport> {
    match config.mode {
        Mode::Compress => {
            let input_path = match &config.input_file {
                Some(path) => path.clone(),
                None => {
                    // No input given: generate a sample next to the
                    // output so it can be inspected and re-run.
                    let path = config.output_file.with_extension("sample");
                    let data = input_gen::generate_sample_data(config.seed, config.sample_bytes);
                    fs::write(&path, &data)?;
                    println!(
                        "generated {} byte sample (seed {}) at {}",
                        data.len(),
                        config.seed,
                        path.display()
                    );
                    path
                }
            };
            encode_file(&input_path, &config.output_file)
        }
        Mode::Decompress => {
            // presence of --in is enforced during parsing
            let input_path = config.input_file.as_ref().unwrap();
            decode_file(input_path, &config.output_file)
        }
    }
}

fn print_report(config: &Config, report: &SizeReport) {
    let verb = match config.mode {
        Mode::Compress => "compressed",
        Mode::Decompress => "decompressed",
    };
    println!(
        "{verb} {} -> {} bytes ({:.1}%) into {}",
        report.input_bytes,
        report.output_bytes,
        report.ratio() * 100.0,
        config.output_file.display()
    );
}

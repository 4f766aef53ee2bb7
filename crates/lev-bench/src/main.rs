use std::path::PathBuf;

use clap::Parser;
use swiftlev::Capability;

use lev_bench::{
    report::Report,
    workflow::{self, Corpus},
};

/// Times every Levenshtein kernel on generated string pairs and checks that
/// they all agree with the scalar kernel.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Lengths of the generated strings, comma separated.
    #[arg(short('l'), long, value_delimiter = ',', default_value = "16,100,1000,10000")]
    lengths: Vec<usize>,

    /// The alphabet from which to draw characters.
    #[arg(short('a'), long, default_value = "ACGTN")]
    alphabet: String,

    /// The number of pairs per corpus and length.
    #[arg(short('n'), long, default_value = "32")]
    num_pairs: usize,

    /// The corpora to generate.
    #[arg(short('c'), long, value_delimiter = ',', default_value = "near-duplicates,random")]
    corpora: Vec<Corpus>,

    /// Maximum number of edits in a near-duplicate pair, as a percentage of
    /// its length.
    #[arg(short('e'), long, default_value = "10")]
    edit_percent: usize,

    /// The seed for the random number generator.
    #[arg(short('s'), long, default_value = "42")]
    seed: u64,

    /// Only run kernels at this capability (and the scalar reference), e.g.
    /// `lanes8`, or `auto` for the one detected on this CPU.
    #[arg(short('w'), long)]
    capability: Option<Capability>,

    /// Path to the output directory.
    #[arg(short('o'), long)]
    out_dir: Option<PathBuf>,

    /// Name of the log file and of the csv report.
    #[arg(long, default_value = "lev-bench")]
    log_name: String,
}

fn main() -> Result<(), String> {
    let args = Args::parse();
    println!("Args: {args:?}");

    let (_guard, log_path) = lev_bench::configure_logger(&args.log_name)?;
    println!("Log file: {log_path:?}");

    ftlog::info!("{args:?}");
    ftlog::info!("Detected capability: {}", Capability::detect());

    if args.alphabet.is_empty() {
        return Err("The alphabet must not be empty".to_string());
    }

    let out_dir = if let Some(out_dir) = args.out_dir {
        if !out_dir.exists() {
            std::fs::create_dir_all(&out_dir).map_err(|e| e.to_string())?;
        }
        out_dir
    } else {
        ftlog::info!("No output directory specified. Using the current directory.");
        PathBuf::from(".")
    }
    .canonicalize()
    .map_err(|e| e.to_string())?;
    ftlog::info!("Output directory: {out_dir:?}");

    let capabilities = match args.capability {
        Some(Capability::Scalar) => vec![Capability::Scalar],
        Some(c) => vec![Capability::Scalar, c],
        None => Capability::ALL.to_vec(),
    };
    let configurations = workflow::configurations(&capabilities);

    let mut report = Report::new(&args.log_name);
    for &corpus in &args.corpora {
        for &length in &args.lengths {
            ftlog::info!("Generating {} {} pairs of length {length}...", args.num_pairs, corpus.name());
            let pairs = corpus.generate(args.num_pairs, length, &args.alphabet, args.edit_percent, args.seed);
            let expected = workflow::reference(&pairs)?;

            for &(capability, strategy) in &configurations {
                workflow::run(&mut report, corpus, length, &pairs, &expected, capability, strategy)?;
            }
        }
    }

    let csv_path = report.write_to_csv(&out_dir)?;
    ftlog::info!("Report written to {csv_path:?}");
    println!("Report: {csv_path:?}");

    match report.mismatches() {
        0 => Ok(()),
        n => {
            let msg = format!("{n} distances disagreed with the scalar kernel. See {log_path:?}");
            ftlog::error!("{msg}");
            Err(msg)
        }
    }
}

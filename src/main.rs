use std::{fs::File, io::BufWriter, path::PathBuf, process::ExitCode};

use clap::Parser;
use tracing::{error, info};

use tf_idf_similarity::{
    load_dir, AnalyzerConfig, Analysis, Corpus, DefaultTFIDFEngine, Error, SimilarityEngine,
    SublinearTFIDFEngine,
};

/// Compare plain-text documents and flag likely plagiarism.
///
/// Every `.txt` file in DIR is a document. Each pair is scored with TF-IDF
/// cosine similarity; pairs at or above the threshold are flagged.
#[derive(Parser)]
#[command(name = "tf-idf-similarity", version, about)]
struct Cli {
    /// Folder containing .txt files
    #[arg(default_value = "documents")]
    dir: PathBuf,

    /// Flag pairs with similarity at or above this value (0 to 1)
    #[arg(long, short, default_value = "0.4")]
    threshold: f64,

    /// Shortest n-gram
    #[arg(long, default_value = "1")]
    min_n: usize,

    /// Longest n-gram
    #[arg(long, default_value = "2")]
    max_n: usize,

    /// Use 1 + ln(count) instead of raw counts
    #[arg(long)]
    sublinear_tf: bool,

    /// Fail when no terms survive tokenization
    #[arg(long)]
    strict: bool,

    /// Worker threads (default: one per core)
    #[arg(long)]
    threads: Option<usize>,

    /// Write matrix, pairs and flags as CBOR to this file
    #[arg(long)]
    export: Option<PathBuf>,

    /// Also print the N most common words
    #[arg(long)]
    top_terms: Option<usize>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("tf_idf_similarity=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::MissingDirectory(dir)) => {
            eprintln!("❌ Folder {:?} not found. Please create it.", dir);
            ExitCode::FAILURE
        }
        Err(Error::InsufficientCorpus { .. }) => {
            eprintln!("⚠️ Need at least 2 text files in {:?} to compare.", cli.dir);
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    if let Some(threads) = cli.threads {
        if let Err(e) = rayon::ThreadPoolBuilder::new().num_threads(threads).build_global() {
            error!("failed to configure thread pool: {e}");
        }
    }

    let config = AnalyzerConfig::default()
        .with_ngram_range(cli.min_n, cli.max_n)?
        .with_strict_vocabulary(cli.strict);
    let corpus = load_dir(&cli.dir)?;
    let analysis = analyze(config, &corpus, cli.sublinear_tf)?;
    // validate before printing anything
    let report = analysis.report(cli.threshold)?;

    println!();
    println!("📄 Total documents loaded: {}", corpus.doc_num());
    println!("Comparing files...");
    println!();
    print!("{report}");
    println!("{} of {} pairs flagged", report.flags.len(), report.pairs.len());

    if let Some(limit) = cli.top_terms {
        println!();
        println!("Most common words:");
        for (term, count) in analysis.common_terms(limit) {
            println!("  {term:<24} {count}");
        }
    }

    if let Some(path) = &cli.export {
        let file = File::create(path).map_err(|source| Error::Io { path: path.clone(), source })?;
        analysis.to_data(cli.threshold)?.to_cbor_writer(BufWriter::new(file))?;
        info!(path = %path.display(), "exported similarity data");
    }
    Ok(())
}

fn analyze(config: AnalyzerConfig, corpus: &Corpus, sublinear_tf: bool) -> Result<Analysis, Error> {
    if sublinear_tf {
        SimilarityEngine::<SublinearTFIDFEngine>::new(config)?.analyze(corpus)
    } else {
        SimilarityEngine::<DefaultTFIDFEngine>::new(config)?.analyze(corpus)
    }
}

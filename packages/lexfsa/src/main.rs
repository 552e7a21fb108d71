use std::path::PathBuf;

use clap::Parser;
use lexfsa_lib::{
    automaton::fsa::minimize::MinimizeStats,
    config::LexiconConfig,
    lexicon::{self, LexiconReport},
    logger::Logger,
};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "Lexicon FSA Tool")]
#[command(version = "0.1")]
#[command(about = "Build, minimize and test lexicon automata from word lists", long_about = None)]
struct Args {
    /// Input file containing a word list, one word per line.
    input: PathBuf,

    /// Compact the lexicon by minimizing the FSA.
    #[arg(long)]
    compact: bool,

    /// Test the lexicon by comparing the words read from the file and the
    /// words generated from the FSA.
    #[arg(long)]
    test: bool,

    /// Write the automaton in AT&T tabular format to this path.
    #[arg(long)]
    att: Option<PathBuf>,

    /// Write a graphviz rendering of the automaton to this path.
    #[arg(long)]
    dot: Option<PathBuf>,

    #[arg(short, long)]
    config: Option<String>,
}

#[derive(Debug, Serialize)]
struct LexiconSummary {
    words: usize,
    states: usize,
    arcs: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    minimization: Option<MinimizeStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    test: Option<LexiconReport>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let config = LexiconConfig::from_optional_file(args.config.as_deref())?;
    let logger = Logger::from_config(&config.logger, "Lexicon".into());

    let words = lexicon::read_word_list(&args.input)?;
    let mut fsa = lexicon::build_trie(words.iter().map(String::as_str));

    if let Some(logger) = &logger {
        logger.info(&format!(
            "built trie with {} states and {} arcs from {} words",
            fsa.state_count(),
            fsa.arc_count(),
            words.len()
        ));
    }

    let minimization = if args.compact {
        let stats = fsa.minimize()?;
        if let Some(logger) = &logger {
            logger.info(&format!(
                "minimized: {} -> {} states, {} -> {} arcs",
                stats.states_before, stats.states_after, stats.arcs_before, stats.arcs_after
            ));
        }
        Some(stats)
    } else {
        None
    };

    if let Some(path) = &args.att {
        std::fs::write(path, fsa.to_att())?;
    }
    if let Some(path) = &args.dot {
        std::fs::write(path, fsa.to_graphviz())?;
    }

    let test = if args.test {
        let report = lexicon::verify_lexicon(&fsa, &words, config.max_generated_words);
        if let Some(logger) = &logger {
            if report.passed() {
                logger.info("lexicon test passed");
            } else {
                logger.error(&format!(
                    "lexicon test failed: {} missing, {} extra",
                    report.missing, report.extra
                ));
            }
        }
        Some(report)
    } else {
        None
    };

    let summary = LexiconSummary {
        words: words.len(),
        states: fsa.state_count(),
        arcs: fsa.arc_count(),
        minimization,
        test,
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);

    if let Some(report) = &test
        && !report.passed()
    {
        anyhow::bail!(
            "lexicon test failed: {} missing, {} extra",
            report.missing,
            report.extra
        );
    }

    Ok(())
}

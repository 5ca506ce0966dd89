use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    time::Instant,
};

use anyhow::{Context, Result};
use clap::Parser;
use qa_matcher::{
    load_path, CorpusIndex, DefaultTFIDFEngine, MatchResult, MatcherConfig, Matcher,
    SublinearTFIDFEngine, TFIDFEngine,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "qa-matcher",
    about = "Answer questions from a fixed Q&A dataset by TF-IDF similarity"
)]
struct Cli {
    /// TOML config file (default: ./qa-matcher.toml if present)
    #[arg(long, env = "QA_MATCHER_CONFIG")]
    config: Option<PathBuf>,

    /// Dataset file, overrides the config
    #[arg(long)]
    dataset: Option<PathBuf>,

    /// Answer one query and exit instead of starting the chat loop
    #[arg(long)]
    query: Option<String>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Flag matches scoring below this value as low confidence
    #[arg(long)]
    min_score: Option<f64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let mut config = MatcherConfig::load(cli.config.as_deref()).context("loading configuration")?;
    if let Some(dataset) = &cli.dataset {
        config.dataset_path = dataset.clone();
    }
    if cli.min_score.is_some() {
        config.min_score = cli.min_score;
    }
    // CLI の上書き分も同じ規則で検証する
    config.validate().context("invalid command-line option")?;

    let load_start = Instant::now();
    let entries = load_path(&config.dataset_path, &config.load_options())
        .with_context(|| format!("loading dataset {}", config.dataset_path.display()))?
        .into_entries();

    if config.sublinear_tf {
        let index = CorpusIndex::builder()
            .tokenizer(config.tokenizer())
            .engine::<SublinearTFIDFEngine>()
            .build(entries)
            .context("building corpus index")?;
        serve(&index, &config, &cli, load_start)
    } else {
        let index = CorpusIndex::builder()
            .tokenizer(config.tokenizer())
            .engine::<DefaultTFIDFEngine>()
            .build(entries)
            .context("building corpus index")?;
        serve(&index, &config, &cli, load_start)
    }
}

fn serve<E>(
    index: &CorpusIndex<E>,
    config: &MatcherConfig,
    cli: &Cli,
    load_start: Instant,
) -> Result<()>
where
    E: TFIDFEngine,
{
    tracing::info!(
        entries = index.len(),
        vocabulary = index.vocabulary_len(),
        elapsed_ms = load_start.elapsed().as_secs_f64() * 1000.0,
        "index ready"
    );
    let matcher = Matcher::with_strategy(index, config.scan_strategy);
    let mut stdout = io::stdout().lock();

    // --query 指定時はその1回だけ、未指定なら対話ループ
    if let Some(query) = &cli.query {
        answer(&matcher, query, config, cli.json, &mut stdout)
    } else {
        run_interactive(&matcher, config, cli.json, io::stdin().lock(), &mut stdout)
    }
}

/// Chat loop: one query per line until `exit` or end of input.
fn run_interactive<E>(
    matcher: &Matcher<'_, E>,
    config: &MatcherConfig,
    json: bool,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<()>
where
    E: TFIDFEngine,
{
    writeln!(out, "Ask me anything! Type `exit` to quit.")?;
    let mut lines = input.lines();
    loop {
        write!(out, "You: ")?;
        out.flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("reading stdin")?;
        let query = line.trim();
        if query.is_empty() {
            continue;
        }
        if query.eq_ignore_ascii_case("exit") {
            writeln!(out, "Goodbye! See you next time.")?;
            break;
        }
        answer(matcher, query, config, json, out)?;
        writeln!(out)?;
    }
    Ok(())
}

fn answer<E>(
    matcher: &Matcher<'_, E>,
    query: &str,
    config: &MatcherConfig,
    json: bool,
    out: &mut impl Write,
) -> Result<()>
where
    E: TFIDFEngine,
{
    let start = Instant::now();
    let result = matcher.find_match(query);
    tracing::debug!(
        score = result.score,
        index = result.index,
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "query answered"
    );
    render(&result, config.min_score, json, out)
}

#[derive(Serialize)]
struct JsonAnswer<'a> {
    #[serde(flatten)]
    result: &'a MatchResult,
    low_confidence: bool,
}

fn render(
    result: &MatchResult,
    min_score: Option<f64>,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let low_confidence = min_score.is_some_and(|min| result.score < min);
    if json {
        let value = JsonAnswer {
            result,
            low_confidence,
        };
        writeln!(out, "{}", serde_json::to_string(&value)?)?;
        return Ok(());
    }
    if low_confidence {
        writeln!(out, "(no confident match, score {:.3})", result.score)?;
    }
    writeln!(out, "{}", result)?;
    Ok(())
}

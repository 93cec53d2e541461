use std::{
    env, fs,
    io::{self, Read, Write},
    process::ExitCode,
    time::Instant,
};

use tfidf_summarizer::{Error, Language, Result, SummarizerConfig, TfIdfSummarizer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReportFormat {
    Json,
    Cbor,
}

#[derive(Debug, Default)]
struct CliOptions {
    files: Vec<String>,
    config_path: Option<String>,
    multiplier: Option<f64>,
    log_base: Option<f64>,
    language: Option<Language>,
    no_stem: bool,
    stopwords: Vec<String>,
    report: Option<ReportFormat>,
    top: Option<usize>,
}

fn print_usage() {
    eprintln!("Usage: tfidf-summarizer [OPTIONS] [FILE...]");
    eprintln!("Reads stdin when no FILE is given.");
    eprintln!();
    eprintln!("  --multiplier F      threshold = mean score * F (default 1.3)");
    eprintln!("  --log-base F        IDF logarithm base (default 10)");
    eprintln!("  --language L        stopword/stemmer language, e.g. en, german");
    eprintln!("  --no-stem           count words without stemming");
    eprintln!("  --stopword W        extra stopword, repeatable");
    eprintln!("  --config PATH       JSON config file, flags override it");
    eprintln!("  --report json|cbor  write a scoring report instead of the summary");
    eprintln!("  --top N             list the N best-scoring sentences");
    eprintln!("  -h, --help          show this help");
}

fn next_value(args: &mut impl Iterator<Item = String>, flag: &str) -> std::result::Result<String, String> {
    args.next().ok_or_else(|| format!("{flag} requires a value"))
}

fn parse_number<T: std::str::FromStr>(raw: &str, flag: &str) -> std::result::Result<T, String> {
    raw.parse::<T>()
        .map_err(|_| format!("{flag} got an invalid number: {raw}"))
}

/// `Ok(None)` when help was requested
fn parse_args<I>(args: I) -> std::result::Result<Option<CliOptions>, String>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut opts = CliOptions::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--multiplier" => {
                let raw = next_value(&mut args, "--multiplier")?;
                opts.multiplier = Some(parse_number(&raw, "--multiplier")?);
            }
            "--log-base" => {
                let raw = next_value(&mut args, "--log-base")?;
                opts.log_base = Some(parse_number(&raw, "--log-base")?);
            }
            "--language" => {
                let raw = next_value(&mut args, "--language")?;
                opts.language = Some(raw.parse().map_err(|e: Error| e.to_string())?);
            }
            "--no-stem" => opts.no_stem = true,
            "--stopword" => opts.stopwords.push(next_value(&mut args, "--stopword")?),
            "--config" => opts.config_path = Some(next_value(&mut args, "--config")?),
            "--report" => {
                let raw = next_value(&mut args, "--report")?;
                opts.report = Some(match raw.to_lowercase().as_str() {
                    "json" => ReportFormat::Json,
                    "cbor" => ReportFormat::Cbor,
                    other => return Err(format!("--report expects json or cbor, got {other}")),
                });
            }
            "--top" => {
                let raw = next_value(&mut args, "--top")?;
                opts.top = Some(parse_number(&raw, "--top")?);
            }
            "-h" | "--help" => return Ok(None),
            flag if flag.starts_with("--") => return Err(format!("unknown option {flag}")),
            file => opts.files.push(file.to_string()),
        }
    }
    Ok(Some(opts))
}

fn build_config(opts: &CliOptions) -> Result<SummarizerConfig> {
    let mut config = match &opts.config_path {
        Some(path) => SummarizerConfig::from_json_file(path)?,
        None => SummarizerConfig::default(),
    };
    if let Some(multiplier) = opts.multiplier {
        config.threshold_multiplier = multiplier;
    }
    if let Some(base) = opts.log_base {
        config.log_base = base;
    }
    if let Some(language) = opts.language {
        config.language = language;
    }
    if opts.no_stem {
        config.stem = false;
    }
    config.extra_stopwords.extend(opts.stopwords.iter().cloned());
    config.validate()?;
    Ok(config)
}

/// (name, text) of every input, validated as UTF-8
fn read_inputs(files: &[String]) -> Result<Vec<(String, String)>> {
    if files.is_empty() {
        let mut bytes = Vec::new();
        io::stdin().read_to_end(&mut bytes)?;
        return Ok(vec![("<stdin>".to_string(), into_text(bytes, "<stdin>")?)]);
    }
    files
        .iter()
        .map(|path| -> Result<(String, String)> {
            let bytes = fs::read(path)?;
            Ok((path.clone(), into_text(bytes, path)?))
        })
        .collect()
}

fn into_text(bytes: Vec<u8>, name: &str) -> Result<String> {
    String::from_utf8(bytes)
        .map_err(|e| Error::InvalidInput(format!("{name} is not UTF-8 text: {e}")))
}

fn run(opts: &CliOptions) -> Result<()> {
    let config = build_config(opts)?;
    log::debug!("config: {config:?}");
    let summarizer: TfIdfSummarizer<f64> = TfIdfSummarizer::new(config)?;
    let inputs = read_inputs(&opts.files)?;
    let with_headers = inputs.len() > 1;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if opts.report.is_none() && opts.top.is_none() {
        let start = Instant::now();
        let texts: Vec<&str> = inputs.iter().map(|(_, text)| text.as_str()).collect();
        let summaries = summarizer.summarize_batch(&texts);
        log::info!(
            "summarized {} document(s) in {:.2}ms",
            summaries.len(),
            start.elapsed().as_secs_f64() * 1000.0
        );
        for ((name, _), summary) in inputs.iter().zip(&summaries) {
            if with_headers {
                writeln!(out, "==> {name} <==")?;
            }
            writeln!(out, "{summary}")?;
        }
        return Ok(());
    }

    for (name, text) in &inputs {
        let summary = summarizer.analyze(text);
        if with_headers {
            writeln!(out, "==> {name} <==")?;
        }
        if let Some(n) = opts.top {
            for (sentence, score) in summary.top_sentences(n) {
                writeln!(out, "{score:.6}\t{}\t{}", sentence.key, sentence.text)?;
            }
        }
        match opts.report {
            Some(ReportFormat::Json) => writeln!(out, "{}", summary.report().to_json()?)?,
            Some(ReportFormat::Cbor) => out.write_all(&summary.report().to_cbor()?)?,
            None => {}
        }
    }
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let opts = match parse_args(env::args().skip(1)) {
        Ok(Some(opts)) => opts,
        Ok(None) => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        Err(message) => {
            eprintln!("[error] {message}");
            print_usage();
            return ExitCode::from(2);
        }
    };

    match run(&opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("[error] {e}");
            ExitCode::FAILURE
        }
    }
}

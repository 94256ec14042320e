use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{bail, Context};
use clap::Parser;
use tracing::{error, info, Level};

use model_comparator::comparison::comparator::{
    ComparatorOptions, ModelComparator, DEFAULT_ROOT_NAMESPACE,
};
use model_comparator::comparison::departures::Summary;
use model_comparator::emitter::html::HtmlEmitter;
use model_comparator::emitter::json::JsonEmitter;
use model_comparator::emitter::ReportEmitter;
use model_comparator::extraction::loader::load_json;
use model_comparator::extraction::registry::Registry;
use model_comparator::model::links::LinkMinter;

/// List significant name changes between an API and its UML reference model.
#[derive(Parser)]
#[command(name = "model-comparator", version, about)]
struct Cli {
    /// Path to the model schema JSON file.
    input: PathBuf,

    /// Output file path, or `-` for stdout
    /// [default: <root namespace>/doc-files/departures-list.html].
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format: html, json.
    #[arg(short, long, value_name = "FORMAT", default_value = "html")]
    format: String,

    /// Root namespace of the audited types [default: from schema, else org.opengis].
    #[arg(long, value_name = "NAMESPACE")]
    root_namespace: Option<String>,

    /// Exit with an error when a significant departure is found.
    #[arg(long)]
    deny: bool,

    /// Verbose output.
    #[arg(short, long)]
    verbose: bool,

    /// Quiet output.
    #[arg(short, long)]
    quiet: bool,
}

fn run(cli: Cli) -> anyhow::Result<Summary> {
    info!(input = %cli.input.display(), "loading model schema");
    let schema = load_json(&cli.input)
        .with_context(|| format!("cannot load {}", cli.input.display()))?;
    let registry = Registry::build(schema);

    let root_namespace = cli
        .root_namespace
        .clone()
        .or_else(|| registry.root_namespace().map(str::to_string))
        .unwrap_or_else(|| DEFAULT_ROOT_NAMESPACE.to_string());
    let options = ComparatorOptions {
        root_namespace: root_namespace.clone(),
    };

    // Render the whole report before touching the output, so that a failed
    // run leaves no partial file behind.
    let format = cli.format.to_lowercase();
    let (report, summary) = match format.as_str() {
        "html" => {
            let mut emitter = HtmlEmitter::new();
            let summary = ModelComparator::new(&mut emitter, &registry, options).compare();
            info!(departures = emitter.departure_count(), "rendered HTML report");
            (emitter.render(), summary)
        }
        "json" => {
            let mut emitter = JsonEmitter::new();
            let summary = ModelComparator::new(&mut emitter, &registry, options).compare();
            info!(departures = emitter.departure_count(), "rendered JSON report");
            (emitter.render()?, summary)
        }
        _ => bail!("Unknown format: {format}. Use 'html' or 'json'."),
    };

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(LinkMinter::new(&root_namespace).report_path()));
    if output.as_os_str() == "-" {
        let mut stdout = io::stdout().lock();
        stdout.write_all(report.as_bytes())?;
        stdout.flush()?;
    } else {
        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("cannot create {}", parent.display()))?;
        }
        fs::write(&output, report)
            .with_context(|| format!("cannot write {}", output.display()))?;
        info!(output = %output.display(), "wrote report");
    }

    Ok(summary)
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::WARN
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let deny = cli.deny;
    match run(cli) {
        Ok(summary) if deny && summary.significant > 0 => {
            error!(
                significant = summary.significant,
                "significant name departures found"
            );
            process::exit(1);
        }
        Ok(_) => {}
        Err(e) => {
            error!("{e:#}");
            process::exit(1);
        }
    }
}

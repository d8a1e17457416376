//! Output formatting for CLI commands.

use serde::Serialize;

use crate::cli::args::{LogseekArgs, OutputFormat};
use crate::error::Result;
use crate::index::inverted::IndexStats;
use crate::ingest::pipeline::IngestReport;
use crate::search::results::SearchResults;

/// Result structure for the analyze command.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisOutput {
    /// The analyzer that ran.
    pub analyzer: String,
    /// The terms the input analyzed into, in order.
    pub terms: Vec<String>,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(result: &T, args: &LogseekArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(result, args),
        OutputFormat::Human => {
            // Human rendering goes through JSON so every result type gets a
            // fallback without a trait per type.
            let value = serde_json::to_value(result)?;
            print_human_value(&value, 0);
            Ok(())
        }
    }
}

fn output_json<T: Serialize>(result: &T, args: &LogseekArgs) -> Result<()> {
    let rendered = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{rendered}");
    Ok(())
}

/// Print search results for a terminal.
pub fn print_search_results(results: &SearchResults, args: &LogseekArgs) -> Result<()> {
    if matches!(args.output_format, OutputFormat::Json) {
        return output_json(results, args);
    }

    if args.verbosity() > 0 {
        println!(
            "{} hit(s) for {:?} in {:.3} ms",
            results.total_hits, results.query, results.search_time
        );
        println!();
    }

    for (rank, hit) in results.results.iter().enumerate() {
        let doc = &hit.document;
        println!("{:>3}. [{:.4}] {} {}", rank + 1, hit.score, doc.event_id, doc.message);
        if args.verbosity() > 1 {
            if let Some(ns) = &doc.namespace {
                println!("       namespace: {ns}");
            }
            if let Some(sender) = &doc.sender {
                println!("       sender: {sender}");
            }
            if let Some(tag) = &doc.tag {
                println!("       tag: {tag}");
            }
        }
    }

    Ok(())
}

/// Print an ingest report for a terminal.
pub fn print_ingest_report(report: &IngestReport, args: &LogseekArgs) -> Result<()> {
    if matches!(args.output_format, OutputFormat::Json) {
        return output_json(report, args);
    }

    println!("indexed: {}", report.indexed);
    println!("skipped: {}", report.failed);
    if args.verbosity() > 1 {
        for failure in &report.failures {
            println!("  row {}: {}", failure.row, failure.reason);
        }
    }
    Ok(())
}

/// Print index statistics for a terminal.
pub fn print_index_stats(stats: &IndexStats, args: &LogseekArgs) -> Result<()> {
    if matches!(args.output_format, OutputFormat::Json) {
        return output_json(stats, args);
    }

    println!("documents: {}", stats.doc_count);
    println!("terms:     {}", stats.term_count);
    println!("postings:  {}", stats.posting_count);
    Ok(())
}

fn print_human_value(value: &serde_json::Value, indent: usize) {
    let pad = "  ".repeat(indent);
    match value {
        serde_json::Value::Object(map) => {
            for (key, inner) in map {
                match inner {
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        println!("{pad}{key}:");
                        print_human_value(inner, indent + 1);
                    }
                    _ => println!("{pad}{key}: {inner}"),
                }
            }
        }
        serde_json::Value::Array(items) => {
            for inner in items {
                print_human_value(inner, indent);
            }
        }
        other => println!("{pad}{other}"),
    }
}

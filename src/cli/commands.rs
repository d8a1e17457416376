//! Command implementations for the logseek CLI.

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::keyword::KeywordAnalyzer;
use crate::analysis::analyzer::standard::StandardAnalyzer;
use crate::cli::args::{AnalyzeArgs, Command, IngestArgs, LogseekArgs, SearchArgs, StatsArgs};
use crate::cli::output::{
    AnalysisOutput, output_result, print_index_stats, print_ingest_report, print_search_results,
};
use crate::error::Result;
use crate::index::config::{DuplicatePolicy, IndexConfig};
use crate::ingest::pipeline::PipelineConfig;
use crate::service::{SearchService, ServiceConfig};

/// Execute a CLI command.
pub fn execute_command(args: LogseekArgs) -> Result<()> {
    match &args.command {
        Command::Search(search_args) => search(search_args.clone(), &args),
        Command::Ingest(ingest_args) => ingest(ingest_args.clone(), &args),
        Command::Analyze(analyze_args) => analyze(analyze_args.clone(), &args),
        Command::Stats(stats_args) => stats(stats_args.clone(), &args),
    }
}

/// Index the data file, run the query, print ranked hits.
fn search(args: SearchArgs, cli_args: &LogseekArgs) -> Result<()> {
    let service = SearchService::with_defaults();
    let report = service.ingest_file(&args.data_file)?;

    if cli_args.verbosity() > 1 {
        println!(
            "indexed {} document(s) from {} ({} skipped)",
            report.indexed,
            args.data_file.display(),
            report.failed
        );
    }

    let results = service.search_with_limit(&args.query, args.limit)?;
    print_search_results(&results, cli_args)
}

/// Index the data file and report the outcome.
fn ingest(args: IngestArgs, cli_args: &LogseekArgs) -> Result<()> {
    let duplicate_policy = if args.reject_duplicates {
        DuplicatePolicy::Reject
    } else {
        DuplicatePolicy::Overwrite
    };
    let service = SearchService::new(ServiceConfig {
        index: IndexConfig {
            duplicate_policy,
            ..IndexConfig::default()
        },
        pipeline: PipelineConfig {
            batch_size: args.batch_size,
        },
        ..ServiceConfig::default()
    });

    let report = service.ingest_file(&args.data_file)?;
    print_ingest_report(&report, cli_args)
}

/// Show the terms a piece of text analyzes into.
fn analyze(args: AnalyzeArgs, cli_args: &LogseekArgs) -> Result<()> {
    let analyzer: Arc<dyn Analyzer> = if args.keyword {
        Arc::new(KeywordAnalyzer::new())
    } else {
        Arc::new(StandardAnalyzer::new())
    };

    let terms: Vec<String> = analyzer.analyze(&args.text)?.map(|t| t.text).collect();
    output_result(
        &AnalysisOutput {
            analyzer: analyzer.name().to_string(),
            terms,
        },
        cli_args,
    )
}

/// Index the data file and print index statistics.
fn stats(args: StatsArgs, cli_args: &LogseekArgs) -> Result<()> {
    let service = SearchService::with_defaults();
    service.ingest_file(&args.data_file)?;
    print_index_stats(&service.stats(), cli_args)
}

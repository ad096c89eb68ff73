use std::sync::Arc;

use clap::{ArgMatches, CommandFactory, FromArgMatches};

use region_metrics::args::{Command, QueryArgs, ServerArgs};
use region_metrics::config::{apply_config, load_config};
use region_metrics::dataset::Dataset;
use region_metrics::error::AppResult;
use region_metrics::metrics::MetricsQuery;
use region_metrics::server::{self, ServerState};
use region_metrics::shutdown::{setup_signal_shutdown_handler, shutdown_channel};

enum RunPlan {
    Query { args: ServerArgs, query: QueryArgs },
    Serve(ServerArgs),
}

pub(crate) fn run() -> AppResult<()> {
    let matches = ServerArgs::command().get_matches();
    let args = resolve_args(&matches)?;

    region_metrics::logger::init_logging(args.verbose, args.no_color);

    match build_plan(args) {
        RunPlan::Query { args, query } => run_query(&args, &query),
        RunPlan::Serve(args) => {
            // Loaded once, before any connection is accepted.
            let dataset = Arc::new(Dataset::load(&args.data_candidates()));
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?;
            runtime.block_on(run_server(args, dataset))
        }
    }
}

fn resolve_args(matches: &ArgMatches) -> AppResult<ServerArgs> {
    let mut args = ServerArgs::from_arg_matches(matches)?;
    if let Some(config) = load_config(args.config.as_deref())? {
        apply_config(&mut args, matches, &config)?;
    }
    Ok(args)
}

fn build_plan(mut args: ServerArgs) -> RunPlan {
    match args.command.take() {
        Some(Command::Query(query)) => RunPlan::Query { args, query },
        None => RunPlan::Serve(args),
    }
}

fn run_query(args: &ServerArgs, query: &QueryArgs) -> AppResult<()> {
    let table = Dataset::load(&args.data_candidates()).into_table()?;
    let threshold_ms = query
        .threshold_ms
        .unwrap_or(args.default_threshold_ms as f64);
    let report = MetricsQuery::new(query.regions.clone(), threshold_ms).run(&table);

    let output = if query.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{}", output);
    Ok(())
}

async fn run_server(args: ServerArgs, dataset: Arc<Dataset>) -> AppResult<()> {
    if dataset.table().is_none() {
        tracing::warn!("Serving without data; metrics requests will fail until restart");
    }
    let listener = server::bind(&args.listen).await?;
    let state = Arc::new(ServerState::new(
        dataset,
        args.default_threshold_ms as f64,
        args.cors_origin,
    ));

    let (shutdown_tx, shutdown_rx) = shutdown_channel();
    let signal_handle = setup_signal_shutdown_handler(&shutdown_tx);

    server::serve(listener, state, shutdown_rx).await;

    drop(shutdown_tx.send(()));
    signal_handle.await?;
    Ok(())
}

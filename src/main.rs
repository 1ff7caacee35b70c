mod args;
mod engine;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use engine::EngineApp;
use engine::core::{EngineConfig, demo_run};
use tumble::{RunConfig, Simulation};

fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();
    let run = build_run(&args)?;
    let simulation = Simulation::new(run).context("invalid run configuration")?;

    let config = EngineConfig {
        progress_every: args.progress_every,
        ..EngineConfig::default()
    };
    let summary = EngineApp::new(config, simulation).run()?;

    if args.ron {
        let text = ron::ser::to_string_pretty(&summary, ron::ser::PrettyConfig::default())
            .context("failed to serialize summary")?;
        println!("{text}");
    } else {
        print!("{summary}");
    }
    Ok(())
}

fn build_run(args: &Args) -> Result<RunConfig> {
    let mut run = match &args.config {
        Some(path) => RunConfig::load(path)
            .with_context(|| format!("failed to load run configuration from {}", path.display()))?,
        None => demo_run(),
    };
    if let Some(stop) = args.stop {
        run.stop = stop;
    }
    if let Some(dt) = args.dt {
        run.dt = dt;
    }
    if let Some(store_every) = args.store_every {
        run.store_every = store_every;
    }
    if let Some(diagnostics) = args.diagnostics {
        run.diagnostics = diagnostics.into();
    }
    Ok(run)
}

fn init_tracing() {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("tracing subscriber already set");
    }
}

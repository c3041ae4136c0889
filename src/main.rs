use anyhow::Context;
use env_logger::Env;
use kmeans_lloyd::cli::{Args, EPS, OUTPUT_PRECISION};
use kmeans_lloyd::{output, AbortStrategy, KMeans, KMeansConfig, KMeansError, KMeansState, LoaderConfig, PointSet, ERROR_OCCURRED};
use log::{debug, info};
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

fn run() -> anyhow::Result<()> {
    let run_config = Args::try_parse_positional(std::env::args_os())?.validate()?;

    let points = PointSet::<f64>::from_reader(io::stdin().lock(), &LoaderConfig::default())?;
    info!(
        "Loaded {} points with {} dimensions (k = {}, max_iter = {})",
        points.len(), points.dims(), run_config.k, run_config.max_iter
    );

    let init_done = |_: &KMeansState<f64>| debug!("Centroids initialized from the first {} points", run_config.k);
    let iteration_done = |_: &KMeansState<f64>, nr: usize, distsum: f64| debug!("Iteration {} - distsum {:.6}", nr, distsum);
    let conf = KMeansConfig::build()
        .init_done(&init_done)
        .iteration_done(&iteration_done)
        .abort_strategy(AbortStrategy::CentroidShift { epsilon: EPS })
        .build();

    let kmean = KMeans::from(points);
    let result = kmean.kmeans_lloyd(run_config.k, run_config.max_iter, KMeans::init_first_k, &conf)?;
    if result.converged {
        info!("Converged after {} iterations", result.iterations);
    } else {
        info!("Stopped after exhausting the iteration budget of {}", run_config.max_iter);
    }

    let mut out = BufWriter::new(io::stdout().lock());
    output::write_centroids(&mut out, &result, OUTPUT_PRECISION).context("Writing centroids")?;
    out.flush().context("Flushing stdout")?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!("{:#}", err);
            let message = err.downcast_ref::<KMeansError>()
                .map(KMeansError::user_message)
                .unwrap_or(ERROR_OCCURRED);
            println!("{}", message);
            ExitCode::from(1)
        }
    }
}

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use linreg_playground::config::{ProblemArgs, Settings};
use linreg_playground::export::{self, DirectorySink, DownloadSink};
use linreg_playground::model::{ModelState, Parameter};
use linreg_playground::plots;
use linreg_playground::presentation::{PresentationAdapter, Redraw};

/// Generates one problem, applies the given fit and saves it as an SVG chart.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(flatten)]
    problem: ProblemArgs,

    #[clap(long, default_value_t = 0.0, allow_hyphen_values = true)]
    intercept: f64,

    #[clap(long, default_value_t = 1.0, allow_hyphen_values = true)]
    slope: f64,

    /// SVG file name inside the output directory.
    #[clap(long, default_value = plots::SNAPSHOT_FILENAME)]
    svg: String,

    /// Also export the dataset as CSV.
    #[clap(long)]
    csv: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let Args {
        problem,
        intercept,
        slope,
        svg,
        csv,
    } = Args::parse();

    let settings = Settings::try_from(problem)?;
    let mut rng = settings.rng();

    let mut state = ModelState::new(settings.generator.generate(&mut rng));
    let intercept = state.set(Parameter::Intercept, intercept);
    let slope = state.set(Parameter::Slope, slope);

    log::info!("fitting w0 = {intercept}, w1 = {slope}");

    let mut adapter = PresentationAdapter::new(settings.axes.clone());
    let frame = adapter.present(&state, Redraw::Full);

    println!("w0:  {}", frame.intercept_label());
    println!("w1:  {}", frame.slope_label());
    println!("MSE: {}", frame.mse_label());

    let caption = format!(
        "w0 = {}, w1 = {}, MSE = {}",
        frame.intercept_label(),
        frame.slope_label(),
        frame.mse_label()
    );

    let document = plots::svg_document(frame.series, frame.axes, &caption)?;

    let mut sink = DirectorySink::new(&settings.output_dir);

    let svg_path = sink.save(&svg, &document)?;
    println!("chart: {}", svg_path.display());

    if csv {
        let csv_path: PathBuf = export::export(state.dataset(), &mut sink)
            .with_context(|| format!("exporting into {}", sink.dir().display()))?;
        println!("data:  {}", csv_path.display());
    }

    Ok(())
}

use csv::Reader;
use session_core::common::time::parse_time;
use session_core::host::bar_series::{Bar, BarSeries};
use session_core::host::recording_chart::{DrawnLine, RecordingChart};
use session_core::{AsianSessionIndicator, HostContext, Indicator, SessionConfig};
use std::error::Error;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: session_cli <bars.csv> [config.json]";

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("session_core=info,session_cli=info")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let mut args = std::env::args().skip(1);
    let bars_path = PathBuf::from(args.next().ok_or(USAGE)?);
    let config = match args.next() {
        Some(path) => load_config(Path::new(&path))?,
        None => SessionConfig::default(),
    };

    let bars = read_bars(&bars_path)?;
    let lines = replay(config, &bars)?;
    println!("{}", serde_json::to_string_pretty(&lines)?);

    Ok(())
}

fn load_config(path: &Path) -> Result<SessionConfig, Box<dyn Error>> {
    info!("Loading config: {:?}", path);
    let text = std::fs::read_to_string(path)?;
    Ok(SessionConfig::from_json_str(&text)?)
}

/// Columns: time,open,high,low,close[,volume]
fn read_bars(path: &Path) -> Result<BarSeries, Box<dyn Error>> {
    let file = File::open(path)?;
    let mut rdr = Reader::from_reader(file);
    let mut bars = BarSeries::new();

    for result in rdr.records() {
        let record = result?;
        bars.push(parse_csv_record(&record)?)?;
    }

    info!("Read {} bars from {:?}", bars.len(), path);
    Ok(bars)
}

fn parse_csv_record(record: &csv::StringRecord) -> Result<Bar, Box<dyn Error>> {
    if record.len() < 5 {
        return Err(format!("expected at least 5 columns, got {}", record.len()).into());
    }

    Ok(Bar::new(
        parse_time(&record[0])?,
        record[2].trim().parse()?,
        record[3].trim().parse()?,
    ))
}

/// Drive the indicator as a host would on backtest: load, then every bar.
/// The last bar's open time stands in for the server clock.
fn replay(config: SessionConfig, bars: &BarSeries) -> Result<Vec<DrawnLine>, Box<dyn Error>> {
    let server_time = bars.last().ok_or("no bars to replay")?.open_time;
    let mut chart = RecordingChart::new();
    let mut indicator = AsianSessionIndicator::new(config);

    let mut host = HostContext::new(server_time, bars, &mut chart);
    indicator.initialize(&mut host);
    for index in 0..bars.len() {
        indicator.calculate(index, &mut host);
    }

    info!(
        "Replay done at {}: {} lines, {} draw calls",
        server_time,
        chart.len(),
        chart.submissions()
    );
    Ok(chart.lines().cloned().collect())
}

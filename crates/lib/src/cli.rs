//! CLI helpers.

mod bencher;
pub(crate) mod error;
mod stdout_logger;

use core::fmt;
use core::time::Duration;
use std::ffi::OsString;
use std::str::FromStr;

use anyhow::{anyhow, bail, Context, Result};

pub use self::bencher::Bencher;
pub use self::error::error_context;

static STDOUT_LOGGER: stdout_logger::StdoutLogger = stdout_logger::StdoutLogger;

/// Run mode.
#[derive(Default)]
pub enum Mode {
    /// Default run mode.
    #[default]
    Default,
    /// Run as benchmark.
    Bench,
}

/// Input options.
#[derive(Default)]
pub struct Opts {
    /// Run as a benchmark.
    pub mode: Mode,
    /// Run in verbose mode.
    verbose: bool,
    /// Warmup period in milliseconds.
    warmup: Option<u64>,
    /// Bench period in milliseconds.
    time_limit: Option<u64>,
    /// Number of times to run benches.
    count: Option<usize>,
}

impl Opts {
    /// Parse CLI options and install the stdout logger.
    pub fn parse() -> Result<Self> {
        let mut opts = Self::default();
        let mut it = std::env::args_os().skip(1);

        while let Some(arg) = it.next() {
            let Some(arg) = arg.to_str() else {
                bail!("non-utf8 argument");
            };

            match arg {
                "--bench" => opts.mode = Mode::Bench,
                "--verbose" => opts.verbose = true,
                "--warmup" => opts.warmup = Some(number_arg(arg, it.next())?),
                "--time-limit" => opts.time_limit = Some(number_arg(arg, it.next())?),
                "--count" => opts.count = Some(number_arg(arg, it.next())?),
                other => bail!("unsupported argument: {other}"),
            }
        }

        let level = if opts.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };

        log::set_max_level(level);
        log::set_logger(&STDOUT_LOGGER).map_err(|error| anyhow!("failed to set log: {error}"))?;

        Ok(opts)
    }
}

/// Parse the value argument of a flag which takes a number.
fn number_arg<T>(name: &str, arg: Option<OsString>) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let arg = arg.with_context(|| format!("missing argument to `{name}`"))?;

    let Some(arg) = arg.to_str() else {
        bail!("non-utf8 argument to `{name}`");
    };

    arg.parse()
        .with_context(|| format!("bad argument to `{name}`"))
}

/// A benchmark report over a collection of sorted samples.
pub struct Report {
    count: usize,
    min: Duration,
    max: Duration,
    avg: Duration,
    p50: Duration,
    p95: Duration,
    p99: Duration,
}

impl Report {
    fn new(samples: &[Duration]) -> Self {
        let count = samples.len();
        let min = samples.first().copied().unwrap_or_default();
        let max = samples.last().copied().unwrap_or_default();

        let sum = samples.iter().copied().sum::<Duration>();

        let avg = match count {
            0 => Duration::default(),
            n => Duration::from_nanos(u64::try_from(sum.as_nanos() / n as u128).unwrap_or_default()),
        };

        Self {
            count,
            min,
            max,
            avg,
            p50: percentile(samples, 50),
            p95: percentile(samples, 95),
            p99: percentile(samples, 99),
        }
    }
}

/// Pick a percentile out of a sorted collection of samples.
fn percentile(samples: &[Duration], pct: usize) -> Duration {
    let Some(len) = samples.len().checked_sub(1) else {
        return Duration::default();
    };

    samples.get((len * pct) / 100).copied().unwrap_or_default()
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "count: {}, min: {:?}, max: {:?}, avg: {:?}, 50th: {:?}, 95th: {:?}, 99th: {:?}",
            self.count, self.min, self.max, self.avg, self.p50, self.p95, self.p99
        )
    }
}

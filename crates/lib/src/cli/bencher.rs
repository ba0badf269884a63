use core::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};

use anyhow::{bail, Error, Result};

use crate::cli::{Opts, Report};

/// Default warmup period in milliseconds.
const DEFAULT_WARMUP: u64 = 100;

/// Default bench period in milliseconds.
const DEFAULT_TIME_LIMIT: u64 = 400;

#[derive(Default)]
pub struct Bencher {}

impl Bencher {
    /// Construct a new bencher.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bench the given fn, checking every produced value against `expected`
    /// when one is given. Prints a percentile report over the collected
    /// samples.
    pub fn iter<T, O, E>(&mut self, opts: &Opts, expected: Option<O>, mut iter: T) -> Result<()>
    where
        T: FnMut() -> Result<O, E>,
        O: fmt::Debug + PartialEq,
        Error: From<E>,
    {
        let warmup = Duration::from_millis(opts.warmup.unwrap_or(DEFAULT_WARMUP));
        let time_limit = Duration::from_millis(opts.time_limit.unwrap_or(DEFAULT_TIME_LIMIT));

        if !warmup.is_zero() {
            log::info!("warming up ({warmup:?})...");

            let start = Instant::now();

            while start.elapsed() < warmup {
                let value = check(iter()?, &expected)?;
                let _ = black_box(value);
            }
        }

        let mut samples = Vec::new();

        if let Some(count) = opts.count {
            let count = count.max(1);
            log::info!("running benches {count} time(s)...");

            for _ in 0..count {
                sample(&mut samples, &mut iter, &expected)?;
            }
        } else {
            log::info!("running benches ({time_limit:?})...");

            let start = Instant::now();

            while start.elapsed() < time_limit {
                sample(&mut samples, &mut iter, &expected)?;
            }
        }

        samples.sort();
        println!("{}", Report::new(&samples));
        Ok(())
    }
}

/// Run and time one iteration.
fn sample<T, O, E>(samples: &mut Vec<Duration>, iter: &mut T, expected: &Option<O>) -> Result<()>
where
    T: FnMut() -> Result<O, E>,
    O: fmt::Debug + PartialEq,
    Error: From<E>,
{
    let before = Instant::now();
    let value = iter().map_err(Error::from)?;
    let elapsed = before.elapsed();

    let _ = black_box(check(value, expected)?);
    samples.push(elapsed);
    Ok(())
}

fn check<O>(value: O, expected: &Option<O>) -> Result<O>
where
    O: fmt::Debug + PartialEq,
{
    if let Some(expect) = expected {
        if value != *expect {
            bail!("{value:?} (value) != {expect:?} (expected)");
        }
    }

    Ok(value)
}

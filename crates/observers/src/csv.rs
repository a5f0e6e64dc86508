use std::io::{self, Write};

use ontologica_core::Observer;
use tracing::warn;

use crate::{amplitude::max_abs, traits::HasField};

/// Column header written before the first row.
pub const HEADER: &str = "step,energy,fluctuation,max_abs";

/// Writes one CSV row per recorded field event.
///
/// Each row holds the step, total energy, population standard deviation and
/// peak magnitude of the field. Only steps that are a multiple of `every` are
/// recorded. Observation cannot fail, so the first I/O error is kept and
/// later events are ignored; [`CsvRecorder::finish`] reports it.
#[derive(Debug)]
pub struct CsvRecorder<W: Write> {
    writer: W,
    every: usize,
    rows: usize,
    error: Option<io::Error>,
}

impl<W: Write> CsvRecorder<W> {
    /// Creates a recorder that records every step.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            every: 1,
            rows: 0,
            error: None,
        }
    }

    /// Records only steps that are a multiple of `every`. Zero means one.
    #[must_use]
    pub fn every(mut self, every: usize) -> Self {
        self.every = every.max(1);
        self
    }

    /// Number of data rows written so far.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Flushes the writer and returns it.
    ///
    /// # Errors
    ///
    /// Returns the first error hit while writing, or the flush error.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn write_row(&mut self, step: usize, energy: f64, values: &[f64]) -> io::Result<()> {
        if self.rows == 0 {
            writeln!(self.writer, "{HEADER}")?;
        }
        let fluctuation = std_dev(values);
        let peak = max_abs(values.iter().copied());
        writeln!(self.writer, "{step},{energy},{fluctuation},{peak}")?;
        self.rows += 1;
        Ok(())
    }
}

impl<E: HasField, A, W: Write> Observer<E, A> for CsvRecorder<W> {
    fn observe(&mut self, event: &E) -> Option<A> {
        if self.error.is_some() || event.step() % self.every != 0 {
            return None;
        }

        let field = event.field();
        let result = match field.as_slice() {
            Some(values) => self.write_row(event.step(), event.energy(), values),
            None => {
                let values: Vec<f64> = field.iter().copied().collect();
                self.write_row(event.step(), event.energy(), &values)
            }
        };
        if let Err(err) = result {
            warn!(step = event.step(), %err, "csv recorder stopped writing");
            self.error = Some(err);
        }
        None
    }
}

/// Allows `&mut CsvRecorder` to be passed to runs that take an observer by
/// value, so [`CsvRecorder::finish`] can be called afterwards.
impl<E: HasField, A, W: Write> Observer<E, A> for &mut CsvRecorder<W> {
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

fn std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    (values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n).sqrt()
}

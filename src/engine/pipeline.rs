use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter};
use std::path::Path;

use tracing::{debug, info};

use crate::engine::{PipelineError, RecordOutcome, RecordTransformer, RunSummary};
use crate::storage::{CsvProductSink, InputLines, ProductSink};

/// Drives a single pass over a product file: header handling, per-line
/// transformation, and appending emitted rows to a sink in input order.
pub struct Pipeline {
    transformer: RecordTransformer
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            transformer: RecordTransformer::new()
        }
    }

    /// Transforms the file at `input` into a new file at `output`.
    pub fn run_files(&self, input: &Path, output: &Path) -> Result<RunSummary, PipelineError> {
        let file = File::open(input).map_err(|source| PipelineError::OpenInput {
            path: input.to_path_buf(),
            source
        })?;

        let destination = File::create(output).map_err(|source| PipelineError::CreateOutput {
            path: output.to_path_buf(),
            source
        })?;

        info!("Transforming [{}] into [{}]", input.display(), output.display());

        let mut sink = CsvProductSink::new(BufWriter::new(destination));
        let summary = self.run(BufReader::new(file), &mut sink)?;
        sink.flush()?;

        Ok(summary)
    }

    /// Runs the pipeline over any line source.
    ///
    /// The output header is always written, even when the input is empty. The
    /// first input line is the header and is discarded without inspection.
    pub fn run<R: BufRead, S: ProductSink>(&self, reader: R, sink: &mut S) -> Result<RunSummary, PipelineError> {
        let mut summary = RunSummary::new();
        let mut lines = InputLines::new(reader);

        sink.write_header()?;

        match lines.next() {
            Some(header) => debug!("Discarding input header: {:?}", header?),
            None => {
                debug!("Input is empty, nothing to transform");
                return Ok(summary);
            }
        }

        for (index, line) in lines.enumerate() {
            let line = line?;
            let outcome = self.transformer.transform(&line);

            summary.record(&outcome);

            //NOTE: Line numbers are 1-based and count the header line.
            let line_number = index + 2;

            match outcome {
                RecordOutcome::Transformed(product) => {
                    debug!("Line [{line_number}] transformed into product [{}]:[{}]", product.product_id, product.price_range);
                    sink.append(&product)?;
                }
                RecordOutcome::Skipped(reason) => {
                    debug!("Line [{line_number}] skipped: {reason}");
                }
            }
        }

        info!(
            "Run finished: read [{}], transformed [{}], skipped [{}] (malformed [{}], invalid numeric [{}])",
            summary.rows_read,
            summary.rows_transformed,
            summary.rows_skipped,
            summary.skipped_malformed,
            summary.skipped_invalid_numeric
        );

        Ok(summary)
    }
}

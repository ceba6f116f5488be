use crate::config::BatchConfig;
use crate::errors::{BatchError, BatchResult};
use crate::record::InputRecord;
use crate::row::LabeledRow;
use layered_eurlex::Engine;
use rayon::prelude::*;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Counts reported at the end of a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub records: usize,
    pub chunks: usize,
    /// Sentences after splitting multi-root chunks.
    pub sentences: usize,
    pub rows: usize,
}

impl BatchSummary {
    /// Sentences dropped because their parse was invalid.
    pub fn skipped(&self) -> usize {
        self.sentences - self.rows
    }
}

/// Rows for every sentence of `record` whose parse is a valid tree.
///
/// A chunk whose parse holds several roots yields one row per root, all
/// sharing the chunk index.
pub fn label_record(engine: &Engine, record: &InputRecord) -> Vec<LabeledRow> {
    record
        .chunks
        .iter()
        .enumerate()
        .flat_map(|(n, chunk)| {
            chunk
                .parse
                .split_sentences()
                .into_iter()
                .filter_map(move |parse| match parse.into_sentence() {
                    Ok(sentence) => Some(LabeledRow::new(
                        &record.metadata,
                        n,
                        engine.classify(&sentence),
                    )),
                    Err(error) => {
                        tracing::warn!(
                            target: "eurlex::batch",
                            sub_sentence_id = %record.metadata.sub_sentence_id,
                            chunk = n,
                            %error,
                            "invalid_parse_skipped"
                        );
                        None
                    }
                })
        })
        .collect()
}

/// Labels `records` in parallel. Rows come back in input order.
pub fn label_records(engine: &Engine, records: &[InputRecord]) -> Vec<LabeledRow> {
    records
        .par_iter()
        .flat_map_iter(|record| label_record(engine, record))
        .collect()
}

pub fn read_records(path: &Path) -> BatchResult<Vec<InputRecord>> {
    let file = File::open(path).map_err(|source| BatchError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mut records = Vec::new();
    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|source| BatchError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        if line.trim().is_empty() {
            continue;
        }
        let record = InputRecord::from_json(&line).map_err(|source| BatchError::Record {
            path: path.to_path_buf(),
            line: index + 1,
            source,
        })?;
        records.push(record);
    }
    Ok(records)
}

fn write_rows<W: Write>(out: &mut W, rows: &[LabeledRow]) -> std::io::Result<()> {
    for row in rows {
        serde_json::to_writer(&mut *out, row)?;
        out.write_all(b"\n")?;
    }
    Ok(())
}

/// Reads `config.input`, labels every chunk and writes one JSON row per
/// sentence to `config.output`.
pub fn run_batch(config: &BatchConfig) -> BatchResult<BatchSummary> {
    let records = read_records(&config.input)?;
    let engine = Engine::new(config.engine.clone());
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()?;

    let write_error = |source| BatchError::Write {
        path: config.output.clone(),
        source,
    };
    let file = File::create(&config.output).map_err(write_error)?;
    let mut out = BufWriter::new(file);

    tracing::info!(
        target: "eurlex::batch",
        input = %config.input.display(),
        records = records.len(),
        threads = pool.current_num_threads(),
        "batch_started"
    );

    let block = match config.progress_every {
        0 => records.len().max(1),
        n => n,
    };
    let mut summary = BatchSummary::default();
    for slice in records.chunks(block) {
        let rows = pool.install(|| label_records(&engine, slice));
        write_rows(&mut out, &rows).map_err(write_error)?;

        summary.records += slice.len();
        summary.chunks += slice.iter().map(|r| r.chunks.len()).sum::<usize>();
        summary.sentences += slice
            .iter()
            .flat_map(|r| r.chunks.iter())
            .map(|c| c.parse.split_sentences().len())
            .sum::<usize>();
        summary.rows += rows.len();
        if config.progress_every > 0 {
            tracing::info!(
                target: "eurlex::batch",
                processed = summary.records,
                "progress"
            );
        }
    }
    out.flush().map_err(write_error)?;

    tracing::info!(
        target: "eurlex::batch",
        output = %config.output.display(),
        rows = summary.rows,
        skipped = summary.skipped(),
        "batch_finished"
    );
    Ok(summary)
}

//! Timing and agreement records for one harness run.

use swiftlev::{Capability, Strategy};

/// One kernel configuration run over one corpus of string pairs.
#[derive(Clone, Debug)]
pub struct Record {
    /// How the pairs were generated.
    pub corpus: String,
    /// Length of the first string of every pair, in characters.
    pub length: usize,
    /// Lane width the kernel ran at.
    pub capability: Capability,
    /// Kernel used for the bulk of the rows.
    pub strategy: Strategy,
    /// Number of pairs.
    pub pairs: usize,
    /// Wall-clock time for all pairs, in seconds.
    pub time: f32,
    /// Pairs per second.
    pub throughput: f32,
    /// Pairs whose distance differed from the scalar kernel.
    pub mismatches: usize,
}

impl Record {
    /// Logs the record.
    fn log(&self) {
        let parts = [
            format!("Corpus: {}", self.corpus),
            format!("Length: {}", self.length),
            format!("Capability: {}", self.capability),
            format!("Strategy: {}", self.strategy),
            format!("Pairs: {}", self.pairs),
            format!("Time: {}", self.time),
            format!("Throughput: {}", self.throughput),
            format!("Mismatches: {}", self.mismatches),
        ];
        if self.mismatches == 0 {
            ftlog::info!("{}", parts.join(", "));
        } else {
            ftlog::error!("{}", parts.join(", "));
        }
    }
}

/// All records of one run.
pub struct Report {
    /// The name of the run, used for the csv file name.
    name: String,
    /// The records, in the order they were added.
    records: Vec<Record>,
}

impl Report {
    /// Create a new report.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            records: Vec::new(),
        }
    }

    /// Adds and logs a record.
    pub fn append(&mut self, record: Record) {
        record.log();
        self.records.push(record);
    }

    /// The records added so far.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Total number of mismatched pairs over all records.
    #[must_use]
    pub fn mismatches(&self) -> usize {
        self.records.iter().map(|r| r.mismatches).sum()
    }

    /// Write the report to a csv file in `dir`, returning its path.
    ///
    /// # Errors
    ///
    /// - If the file cannot be created.
    /// - If the header cannot be written.
    /// - If a record cannot be written.
    pub fn write_to_csv<P: AsRef<std::path::Path>>(&self, dir: P) -> Result<std::path::PathBuf, String> {
        let header = [
            "corpus",
            "length",
            "capability",
            "strategy",
            "pairs",
            "time",
            "throughput",
            "mismatches",
        ];

        let path = dir.as_ref().join(format!("{}.csv", self.name));
        let mut writer = csv::Writer::from_path(&path).map_err(|e| e.to_string())?;
        writer.write_record(header).map_err(|e| e.to_string())?;

        for r in &self.records {
            writer
                .write_record([
                    r.corpus.clone(),
                    r.length.to_string(),
                    r.capability.name().to_string(),
                    r.strategy.name().to_string(),
                    r.pairs.to_string(),
                    r.time.to_string(),
                    r.throughput.to_string(),
                    r.mismatches.to_string(),
                ])
                .map_err(|e| e.to_string())?;
        }
        writer.flush().map_err(|e| e.to_string())?;

        Ok(path)
    }
}

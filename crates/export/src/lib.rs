//! Export helpers for CSV curve tables and JSON assessment sidecars.

pub mod curves {
    use serde::Serialize;
    use std::fs::{self, File};
    use std::io::{self, BufWriter, Write};
    use std::path::Path;

    /// Create a writer for the target path, handling stdout (`-`) by convention.
    pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
        if path == Path::new("-") {
            return Ok(Box::new(BufWriter::new(io::stdout())));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }

    /// Write any flat sample sequence as a headed CSV table.
    ///
    /// Headers come from the sample struct's field names, so every curve
    /// (link profile, decay history, dose sweep) shares one exporter.
    pub fn write_samples<S, I>(writer: Box<dyn Write>, samples: I) -> csv::Result<()>
    where
        S: Serialize,
        I: IntoIterator<Item = S>,
    {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for sample in samples {
            csv_writer.serialize(sample)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

pub mod sidecar {
    use chrono::{SecondsFormat, Utc};
    use serde::Serialize;
    use serde_json::to_writer_pretty;
    use std::fs::{self, File};
    use std::io;
    use std::path::Path;

    /// Envelope wrapping an exported assessment with generation metadata.
    #[derive(Debug, Serialize)]
    struct Envelope<'a, T: Serialize> {
        scenario: &'a str,
        generated_utc: String,
        report: &'a T,
    }

    /// Write a JSON assessment sidecar next to the other artifacts.
    pub fn write_assessment<T: Serialize>(
        output: &Path,
        scenario_name: &str,
        report: &T,
    ) -> io::Result<()> {
        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let envelope = Envelope {
            scenario: scenario_name,
            generated_utc: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            report,
        };
        to_writer_pretty(File::create(output)?, &envelope)?;
        Ok(())
    }
}

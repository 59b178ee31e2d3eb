use std::{
    fs::{File, OpenOptions},
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use abi::{Reservation, ReservationError, StoreConfig};
use tracing::{debug, warn};

/// Flat text file holding one reservation per line.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(config.path.clone())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a single reservation, creating the file if needed.
    pub fn append(&self, rsvp: &Reservation) -> Result<(), ReservationError> {
        let write = || -> io::Result<()> {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)?;
            let mut writer = BufWriter::new(file);
            writeln!(writer, "{}", rsvp.to_record())?;
            writer.flush()
        };

        write().map_err(|source| ReservationError::SaveFailed {
            path: self.path.clone(),
            source,
        })
    }

    /// Truncate the file and write every reservation in order.
    pub fn rewrite_all(&self, rsvps: &[Reservation]) -> Result<(), ReservationError> {
        let write = || -> io::Result<()> {
            let mut writer = BufWriter::new(File::create(&self.path)?);
            for rsvp in rsvps {
                writeln!(writer, "{}", rsvp.to_record())?;
            }
            writer.flush()
        };

        write().map_err(|source| ReservationError::UpdateFailed {
            path: self.path.clone(),
            source,
        })
    }

    /// Read every decodable reservation. A missing file is an empty store;
    /// malformed lines are skipped with a warning.
    pub fn load_all(&self) -> Result<Vec<Reservation>, ReservationError> {
        let mut rsvps = vec![];
        self.load_each(|rsvp| rsvps.push(rsvp))?;
        Ok(rsvps)
    }

    /// Hand each decodable reservation to `on_record` as it is read. Records
    /// delivered before an I/O error stay delivered.
    pub fn load_each(
        &self,
        mut on_record: impl FnMut(Reservation),
    ) -> Result<(), ReservationError> {
        let load_failed = |source: io::Error| ReservationError::LoadFailed {
            path: self.path.clone(),
            source,
        };

        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("no store file at {}", self.path.display());
                return Ok(());
            }
            Err(e) => return Err(load_failed(e)),
        };

        for (idx, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(load_failed)?;
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<Reservation>() {
                Ok(rsvp) => on_record(rsvp),
                Err(e) => warn!(
                    "skipping line {} of {}: {}",
                    idx + 1,
                    self.path.display(),
                    e
                ),
            }
        }

        Ok(())
    }
}

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use log::debug;

use super::{SelectionSource, SourceError};
use crate::Selection;

/// Reads selections from a file by seeking; the file is never loaded whole.
pub struct FileSource {
    file: File,
    len: u64,
}

impl FileSource {
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let file = File::open(path)?;
        let len = file.metadata()?.len();
        debug!("opened {} ({} bytes)", path.display(), len);
        Ok(Self { file, len })
    }
}

impl SelectionSource for FileSource {
    fn len(&self) -> u64 {
        self.len
    }

    fn read(&mut self, selection: Selection) -> Result<Vec<u8>, SourceError> {
        selection.check_within(self.len)?;
        self.file.seek(SeekFrom::Start(selection.start()))?;
        let mut buffer = Vec::new();
        (&mut self.file)
            .take(selection.len())
            .read_to_end(&mut buffer)?;
        if (buffer.len() as u64) < selection.len() {
            return Err(SourceError::Io(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "file shrank while reading selection",
            )));
        }
        debug!(
            "read {} bytes at offset {:#x}",
            buffer.len(),
            selection.start()
        );
        Ok(buffer)
    }
}

/*!
 * Output writer for srcdump
 *
 * Encodes the annotated dump: a header line per file, the file content,
 * and a fixed separator. Unreadable files get an inline notice instead of
 * their content.
 */

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Result, SrcDumpError};

/// Separator written after every file block
const SEPARATOR: &str = "\n\n\n";

/// Writer for the concatenated output
pub struct DumpWriter<W: Write> {
    /// Underlying output stream
    inner: W,
    /// Bytes of file content written so far
    content_bytes: u64,
}

impl DumpWriter<BufWriter<File>> {
    /// Create or truncate the output file
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|source| SrcDumpError::OutputOpen {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> DumpWriter<W> {
    /// Wrap an existing stream
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            content_bytes: 0,
        }
    }

    /// Write the header line naming a file, followed by a blank line
    pub fn write_header(&mut self, rel_path: &Path) -> Result<()> {
        write!(
            self.inner,
            "// ==================== {} ====================\n\n",
            rel_path.display()
        )?;
        Ok(())
    }

    /// Write file content verbatim, followed by the separator
    pub fn write_content(&mut self, content: &str) -> Result<()> {
        self.inner.write_all(content.as_bytes())?;
        self.inner.write_all(SEPARATOR.as_bytes())?;
        self.content_bytes += content.len() as u64;
        Ok(())
    }

    /// Write the inline notice for a file that could not be read
    pub fn write_read_failure(&mut self, rel_path: &Path, message: &str) -> Result<()> {
        write!(
            self.inner,
            "// ***** No se pudo leer el archivo: {} | Error: {} *****{}",
            rel_path.display(),
            message,
            SEPARATOR
        )?;
        Ok(())
    }

    /// Bytes of file content written so far
    pub fn content_bytes(&self) -> u64 {
        self.content_bytes
    }

    /// Flush and hand back the underlying stream
    pub fn finish(mut self) -> Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}

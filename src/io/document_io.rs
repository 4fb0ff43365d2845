use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::model::buffer::{LineBuffer, TextBuffer};

/// Error type for reading and writing markdown documents
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("could not read {path}: {source}")]
    ReadError { path: PathBuf, source: io::Error },
    #[error("could not write {path}: {source}")]
    WriteError { path: PathBuf, source: io::Error },
}

/// Line terminator found in a loaded document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn detect(text: &str) -> LineEnding {
        if text.contains("\r\n") {
            LineEnding::CrLf
        } else {
            LineEnding::Lf
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// A markdown file loaded into a line buffer
#[derive(Debug, Clone)]
pub struct Document {
    pub path: PathBuf,
    pub buffer: TextBuffer,
    pub line_ending: LineEnding,
}

impl Document {
    /// Parse text into a document. CRLF files are edited as LF and written
    /// back with CRLF.
    pub fn from_text(path: &Path, text: &str) -> Self {
        let line_ending = LineEnding::detect(text);
        let buffer = match line_ending {
            LineEnding::Lf => TextBuffer::from_text(text),
            LineEnding::CrLf => TextBuffer::from_text(&text.replace("\r\n", "\n")),
        };
        Document {
            path: path.to_path_buf(),
            buffer,
            line_ending,
        }
    }

    pub fn to_text(&self) -> String {
        match self.line_ending {
            LineEnding::Lf => self.buffer.content(),
            LineEnding::CrLf => self.buffer.content().replace('\n', "\r\n"),
        }
    }
}

pub fn load_document(path: &Path) -> Result<Document, DocumentError> {
    let text = fs::read_to_string(path).map_err(|source| DocumentError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Document::from_text(path, &text))
}

pub fn save_document(doc: &Document) -> Result<(), DocumentError> {
    atomic_write(&doc.path, doc.to_text().as_bytes()).map_err(|source| {
        DocumentError::WriteError {
            path: doc.path.clone(),
            source,
        }
    })
}

/// Write `content` to `path` atomically using a temp file + rename.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

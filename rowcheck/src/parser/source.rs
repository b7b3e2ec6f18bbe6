//! Line sources: lazy, single-pass streams of text lines.
//!
//! Lines come back without their `\n` / `\r\n` terminator. A trailing
//! terminator at end of file does not produce an extra empty line.

use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio_stream::wrappers::LinesStream;

use crate::error::{ParseError, ParseResult};

/// Lines of any async buffered reader.
pub fn reader_lines<R>(reader: R) -> LinesStream<R>
where
    R: AsyncBufRead,
{
    LinesStream::new(reader.lines())
}

/// Open `path` for streaming line reads.
///
/// The file handle lives inside the returned stream and is closed when the
/// stream is dropped.
pub async fn open_lines(path: &Path) -> ParseResult<LinesStream<BufReader<File>>> {
    let file = File::open(path).await.map_err(|source| ParseError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(reader_lines(BufReader::new(file)))
}

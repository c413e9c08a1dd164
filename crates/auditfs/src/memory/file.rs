// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::io;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tokio::io::AsyncWrite;

/// A file backed by memory.
///
/// Content is kept as the chunks written so far, in write order.
#[derive(Clone, Default)]
pub struct MemoryFile {
    chunks: Arc<Mutex<Vec<Vec<u8>>>>,
}

impl MemoryFile {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All chunks concatenated
    pub fn content(&self) -> io::Result<Vec<u8>> {
        let chunks = self.chunks.lock().map_err(|_| poisoned())?;
        Ok(chunks.concat())
    }

    /// Number of writes recorded since the file was created or truncated
    pub fn chunk_count(&self) -> io::Result<usize> {
        Ok(self.chunks.lock().map_err(|_| poisoned())?.len())
    }

    pub(crate) fn writer(&self) -> MemoryFileWriter {
        MemoryFileWriter {
            chunks: self.chunks.clone(),
            closed: false,
        }
    }
}

fn poisoned() -> io::Error {
    io::Error::other("memory file lock poisoned")
}

/// Appends each write to the file's chunk list as it happens
pub(crate) struct MemoryFileWriter {
    chunks: Arc<Mutex<Vec<Vec<u8>>>>,
    closed: bool,
}

impl AsyncWrite for MemoryFileWriter {
    fn poll_write(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<Result<usize, io::Error>> {
        let this = self.get_mut();
        if this.closed {
            return Poll::Ready(Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "write after shutdown",
            )));
        }
        if buf.is_empty() {
            return Poll::Ready(Ok(0));
        }
        let mut chunks = this.chunks.lock().map_err(|_| poisoned())?;
        chunks.push(buf.to_vec());
        Poll::Ready(Ok(buf.len()))
    }

    fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Result<(), io::Error>> {
        Poll::Ready(Ok(()))
    }

    fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Result<(), io::Error>> {
        self.get_mut().closed = true;
        Poll::Ready(Ok(()))
    }
}

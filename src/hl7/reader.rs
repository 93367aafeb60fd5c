use std::io::Read;
use std::sync::Mutex;

use log::{debug, trace};

use super::iter::MessageIter;
use super::message::Message;
use super::source::{ByteSource, DEFAULT_BUFFER_SIZE};
use super::types::error::{Hl7Error, Result};
use super::types::models::{CR, FF, HEADER_SEGMENT, LF, NUL};

/// Bytes that confirm a boundary candidate ends the current message.
const NEXT_HEADER: &[u8; 4] = b"MSH|";

/// The same confirmation when the candidate was the CR of a CRLF pair.
const NEXT_HEADER_AFTER_CRLF: &[u8; 4] = b"\nMSH";

/// Splits a continuous byte stream into HL7 messages.
///
/// Capture files and feeds separate messages with CR, LF, CRLF, form feeds or
/// null bytes, often inconsistently within one stream. A separator byte only
/// ends a message when the bytes that follow it open a new `MSH` header;
/// otherwise it is kept as message content.
///
/// The source sits behind a mutex, so one reader can be shared between
/// threads. Calls are serialised, not parallelised.
#[derive(Debug)]
pub struct Hl7Reader<R> {
    source: Mutex<ByteSource<R>>,
}

impl<R: Read> Hl7Reader<R> {
    /// Wraps any byte source: a file, a socket or an in-memory buffer.
    pub fn new(source: R) -> Self {
        Self::with_capacity(source, DEFAULT_BUFFER_SIZE)
    }

    /// Like [`new`](Self::new) with a custom read window size.
    pub fn with_capacity(source: R, capacity: usize) -> Self {
        Self {
            source: Mutex::new(ByteSource::with_capacity(source, capacity)),
        }
    }

    /// Reads the next message from the stream.
    ///
    /// Returns `Ok(None)` once the stream is exhausted. Messages already
    /// returned cannot be read again.
    ///
    /// # Errors
    /// - [`Hl7Error::Io`] when the underlying source fails
    /// - [`Hl7Error::MessageTooShort`] when the detected message cannot hold a header
    /// - [`Hl7Error::LockPoisoned`] when another caller panicked mid-read
    pub fn read_message(&self) -> Result<Option<Message>> {
        let mut source = self.source.lock().map_err(|_| Hl7Error::LockPoisoned)?;
        match read_message_bytes(&mut source)? {
            Some(bytes) => Message::new(bytes).map(Some),
            None => Ok(None),
        }
    }

    /// Calls `f` with every remaining message, in order.
    ///
    /// Stops cleanly at the end of the stream. The first error, from either
    /// the reader or `f`, stops the iteration and is returned. Use
    /// [`read_message`](Self::read_message) directly to recover from
    /// individual failures instead.
    pub fn each_message<F, E>(&self, mut f: F) -> std::result::Result<(), E>
    where
        F: FnMut(Message) -> std::result::Result<(), E>,
        E: From<Hl7Error>,
    {
        while let Some(message) = self.read_message()? {
            f(message)?;
        }
        Ok(())
    }

    /// Returns an iterator over the remaining messages.
    pub fn messages(&self) -> MessageIter<'_, R> {
        MessageIter::new(self)
    }

    /// Gives back the underlying source. Bytes already buffered are lost.
    pub fn into_inner(self) -> Result<R> {
        self.source
            .into_inner()
            .map(ByteSource::into_inner)
            .map_err(|_| Hl7Error::LockPoisoned)
    }
}

fn is_boundary_candidate(byte: u8) -> bool {
    matches!(byte, CR | LF | FF | NUL)
}

/// Accumulates one message worth of bytes.
fn read_message_bytes<R: Read>(source: &mut ByteSource<R>) -> Result<Option<Vec<u8>>> {
    let mut buf = Vec::new();
    let mut skipped = 0usize;

    while let Some(byte) = source.next_byte()? {
        // Anything before a header is noise left between messages.
        if buf.is_empty()
            && !(byte == HEADER_SEGMENT[0] && source.peek(2)? == &HEADER_SEGMENT[1..])
        {
            skipped += 1;
            continue;
        }

        if is_boundary_candidate(byte) {
            let ahead = source.peek(NEXT_HEADER.len())?;
            if ahead.len() < NEXT_HEADER.len() {
                // Too short to hold another header, so the tail is skipped as noise
                // unless it starts with `MSH`.
                trace!(
                    "boundary {byte:#04x} near end of input, {} trailing bytes left",
                    ahead.len()
                );
                break;
            }
            if ahead == NEXT_HEADER {
                trace!("boundary {byte:#04x} before next header");
                break;
            }
            if ahead == NEXT_HEADER_AFTER_CRLF {
                trace!("CRLF boundary before next header");
                source.consume(1);
                break;
            }
        }
        buf.push(byte);
    }

    if skipped > 0 {
        trace!("skipped {skipped} bytes before a message header");
    }
    if buf.is_empty() {
        debug!("end of input");
        return Ok(None);
    }
    debug!("read message of {} bytes", buf.len());
    Ok(Some(buf))
}

//! All kinds of errors in this crate.

use displaydoc::Display;
use std::io;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Debug, Display, Error)]
pub enum Error {
    /// Snapshot I/O failed: {0}.
    Io(#[from] io::Error),
    /// Not a BMP snapshot: bad magic {0:?}.
    BadMagic([u8; 2]),
    /// Unsupported bit depth {0}; snapshots are 1 bit per pixel.
    UnsupportedFormat(u16),
    /// Malformed snapshot header: {0}.
    Corrupt(&'static str),
    /// Cannot write a snapshot of an empty world.
    EmptyWorld,
}

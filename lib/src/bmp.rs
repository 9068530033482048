//! Reading and writing snapshots.
//!
//! A snapshot is an uncompressed 1-bit-per-pixel BMP image with a
//! two-entry palette: pixel `(col, row)` is on iff the cell `(col, row)`
//! is alive. Rows are stored bottom-up, most significant bit first, each
//! row padded to a 4-byte boundary.
//!
//! Reading keeps the file format's historical vertical flip: an on pixel
//! in file row `j` becomes the cell `(col, height - j)`, one row above
//! where writing placed it. Snapshots stay byte-compatible with the files
//! the original simulator produced and consumed.

use crate::error::Error;
use crate::game::Game;
use crate::point::Point;
use crate::set::PointSet;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Margin added around the pattern's extent, in cells.
const BORDER: i32 = 10;

/// Palette entry for off pixels, RGB (0, 255, 255), stored as a BGRA quad.
const OFF_COLOR: [u8; 4] = [255, 255, 0, 0];
/// Palette entry for on pixels, RGB (255, 0, 255), stored as a BGRA quad.
const ON_COLOR: [u8; 4] = [255, 0, 255, 0];

/// Offset of the pixel data: 14-byte file header, 40-byte info header,
/// two palette quads.
const PIXEL_OFFSET: u32 = 14 + 40 + 8;

/// Bytes per pixel row, padded to a 4-byte boundary.
fn row_stride(width: i32) -> usize {
    ((width as usize + 31) / 32) * 4
}

/// Writes the world's live cells as a BMP snapshot.
///
/// The image covers the pattern's extent plus a fixed border. Fails with
/// [`Error::EmptyWorld`] when there are no live cells, since the extent
/// would be undefined.
pub fn write_bmp<W: Write>(game: &Game, w: &mut W) -> Result<(), Error> {
    let cells = game.live_cells();
    if cells.is_empty() {
        return Err(Error::EmptyWorld);
    }
    let max_x = cells.iter().map(Point::x).max().unwrap_or(0);
    let max_y = cells.iter().map(Point::y).max().unwrap_or(0);
    let width = max_x + BORDER;
    let height = max_y + BORDER;
    let stride = row_stride(width);

    // File header.
    w.write_all(b"BM")?;
    let file_size = PIXEL_OFFSET + (stride * height as usize) as u32;
    w.write_all(&file_size.to_le_bytes())?;
    w.write_all(&0u16.to_le_bytes())?;
    w.write_all(&0u16.to_le_bytes())?;
    w.write_all(&PIXEL_OFFSET.to_le_bytes())?;

    // BITMAPINFOHEADER.
    w.write_all(&40u32.to_le_bytes())?;
    w.write_all(&width.to_le_bytes())?;
    w.write_all(&height.to_le_bytes())?;
    w.write_all(&1u16.to_le_bytes())?; // planes
    w.write_all(&1u16.to_le_bytes())?; // bits per pixel
    w.write_all(&0u32.to_le_bytes())?; // no compression
    w.write_all(&0u32.to_le_bytes())?; // image size, 0 for uncompressed
    w.write_all(&200i32.to_le_bytes())?; // x resolution
    w.write_all(&200i32.to_le_bytes())?; // y resolution
    w.write_all(&2u32.to_le_bytes())?; // colours
    w.write_all(&0u32.to_le_bytes())?; // important colours

    w.write_all(&OFF_COLOR)?;
    w.write_all(&ON_COLOR)?;

    // Bottom-up pixel rows.
    let mut row_bytes = vec![0u8; stride];
    for row in (0..height).rev() {
        row_bytes.fill(0);
        for col in 0..width {
            if game.is_alive(&Point::new(col, row)) {
                row_bytes[col as usize / 8] |= 1 << (7 - col % 8);
            }
        }
        w.write_all(&row_bytes)?;
    }
    Ok(())
}

/// Writes a BMP snapshot to a file.
pub fn save_bmp<P: AsRef<Path>>(game: &Game, path: P) -> Result<(), Error> {
    let mut w = BufWriter::new(File::create(path)?);
    write_bmp(game, &mut w)?;
    w.flush()?;
    Ok(())
}

/// Reads a BMP snapshot into a set of live cells.
///
/// Accepts any 1-bit uncompressed BMP; the stored pixel-data offset is
/// honored, so extra header fields or a larger info header are skipped.
pub fn read_bmp<R: Read>(r: &mut R) -> Result<PointSet, Error> {
    let mut magic = [0u8; 2];
    r.read_exact(&mut magic)?;
    if &magic != b"BM" {
        return Err(Error::BadMagic(magic));
    }
    let _file_size = read_u32(r)?;
    let _reserved = read_u32(r)?;
    let offset = read_u32(r)?;

    let _info_size = read_u32(r)?;
    let width = read_i32(r)?;
    let height = read_i32(r)?;
    let _planes = read_u16(r)?;
    let bits = read_u16(r)?;
    if bits != 1 {
        return Err(Error::UnsupportedFormat(bits));
    }
    if width <= 0 || height <= 0 {
        return Err(Error::Corrupt("non-positive image dimensions"));
    }

    // 30 header bytes consumed so far; skip the rest up to the pixel data.
    let skip = (offset as u64)
        .checked_sub(30)
        .ok_or(Error::Corrupt("pixel data offset inside headers"))?;
    io::copy(&mut r.by_ref().take(skip), &mut io::sink())?;

    let stride = row_stride(width);
    let mut row_bytes = vec![0u8; stride];
    let mut points = PointSet::new();
    for j in 0..height {
        r.read_exact(&mut row_bytes)?;
        for col in 0..width {
            if row_bytes[col as usize / 8] & (1 << (7 - col % 8)) != 0 {
                points.insert(Point::new(col, height - j));
            }
        }
    }
    Ok(points)
}

/// Reads a BMP snapshot from a file.
pub fn load_bmp<P: AsRef<Path>>(path: P) -> Result<PointSet, Error> {
    read_bmp(&mut BufReader::new(File::open(path)?))
}

fn read_u16<R: Read>(r: &mut R) -> io::Result<u16> {
    let mut buf = [0u8; 2];
    r.read_exact(&mut buf)?;
    Ok(u16::from_le_bytes(buf))
}

fn read_u32<R: Read>(r: &mut R) -> io::Result<u32> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

fn read_i32<R: Read>(r: &mut R) -> io::Result<i32> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(i32::from_le_bytes(buf))
}

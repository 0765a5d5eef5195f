//! Input handling for FASTA files.
//!
//! Plain, gzip, and bgzip compressed files are supported; compression is
//! detected from the file extension. A path of `-` reads standard input.

pub mod fasta;

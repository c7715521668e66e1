//! Unified dataset read/write traits over std::io::{BufRead, Write}.

use crate::{error::Result, store::Dataset};
use std::io::{BufRead, Write};

pub trait ReadFormat {
    fn read<R: BufRead>(r: R) -> Result<Dataset>;
}

pub trait WriteFormat {
    fn write<W: Write>(w: W, data: &Dataset) -> Result<()>;
}

pub trait Format: ReadFormat + WriteFormat {}
impl<T: ReadFormat + WriteFormat> Format for T {}

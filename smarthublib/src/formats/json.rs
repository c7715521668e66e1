//! Full-dataset JSON snapshot — the canonical backup format.

use crate::{error::Result, store::Dataset, traits};
use std::io::{BufRead, Write};

pub struct Json;

impl traits::ReadFormat for Json {
    fn read<R: BufRead>(r: R) -> Result<Dataset> {
        Ok(serde_json::from_reader(r)?)
    }
}

impl traits::WriteFormat for Json {
    fn write<W: Write>(mut w: W, data: &Dataset) -> Result<()> {
        serde_json::to_writer_pretty(&mut w, data)?;
        writeln!(w)?;
        Ok(())
    }
}

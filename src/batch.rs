use rayon::prelude::*;
use std::io::{Read, Write};

use crate::error::Result;
use crate::namelist::{NameList, NameListBuilder};
use crate::normalize::{fix_name, key};

/// One input row: a raw name and an optional frequency.
#[derive(Clone, Debug, Deserialize)]
pub struct NameRecord
{
    pub name: String,
    #[serde(default = "default_count")]
    pub count: u64
}

fn default_count() -> u64 { 1 }

/// One output row of `fix_records`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FixedRecord
{
    pub input: String,
    pub name: String,
    pub key: String
}

/// How input and output files are delimited.
#[derive(Clone, Copy, Debug)]
pub struct Format
{
    pub delimiter: u8,
    pub has_headers: bool
}

impl Default for Format
{
    fn default() -> Self { Format { delimiter: b'\t', has_headers: false } }
}

fn make_reader<R: Read>(rdr: R, fmt: Format) -> csv::Reader<R>
{
    csv::ReaderBuilder::new()
        .delimiter(fmt.delimiter)
        .has_headers(fmt.has_headers)
        .quoting(fmt.delimiter != b'\t')
        .flexible(true)
        .from_reader(rdr)
}

pub fn read_records<R: Read>(rdr: R, fmt: Format) -> Result<Vec<NameRecord>>
{
    let mut rdr = make_reader(rdr, fmt);
    let mut records = Vec::new();
    for res in rdr.deserialize::<NameRecord>() {
        records.push(res?);
    }
    info!("read {} name records", records.len());
    Ok(records)
}

/// Fixes every name and computes its search key, in parallel.
pub fn fix_records(records: &[NameRecord]) -> Vec<FixedRecord>
{
    records.par_iter()
        .map(|r| {
            let name = fix_name(&r.name);
            let key = key(&name);
            FixedRecord { input: r.name.clone(), name, key }
        })
        .collect()
}

pub fn write_fixed<W: Write>(writer: W, fixed: &[FixedRecord], fmt: Format) -> Result<()>
{
    let mut writer = csv::WriterBuilder::new()
        .delimiter(fmt.delimiter)
        .has_headers(fmt.has_headers)
        .from_writer(writer);
    for f in fixed { writer.serialize(f)?; }
    writer.flush()?;
    Ok(())
}

/// Merges records into a frequency sorted list of distinct names.
///
/// The expensive per-name work runs in parallel; merging is sequential.
pub fn build_list(records: &[NameRecord], cutoff: u64) -> NameList
{
    let fixed: Vec<(String,String,u64)> = records.par_iter()
        .filter(|r| r.count >= cutoff)
        .map(|r| {
            let name = fix_name(&r.name);
            let key = key(&name);
            (name, key, r.count)
        })
        .collect();
    debug!("{} of {} records pass the cutoff of {}", fixed.len(), records.len(), cutoff);
    let mut builder = NameListBuilder::new(cutoff);
    for (name, key, count) in fixed {
        builder.add_fixed(name, key, count);
    }
    info!("merged into {} distinct names", builder.len());
    builder.generate()
}

use rayon::slice::ParallelSliceMut;
use std::collections::HashMap;
use std::collections::hash_map::Entry::{Occupied,Vacant};
use std::io::Write;

use crate::error::Result;
use crate::normalize::{fix_name, key};

/// One distinct name in a generated list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NameEntry
{
    /// Most frequent fixed spelling seen for this key.
    pub name: String,
    pub key: String,
    /// Summed frequency of every spelling with this key.
    pub count: u64,
    #[serde(skip)]
    best: u64
}

pub type NameList = Vec<NameEntry>;

/// Collects raw names and merges those that share a search key.
pub struct NameListBuilder
{
    data: HashMap<String,NameEntry>,
    cutoff: u64
}

impl NameListBuilder
{
    /// Names seen with a frequency below `cutoff` are ignored.
    pub fn new(cutoff: u64) -> Self { Self { data: HashMap::new(), cutoff } }

    pub fn len(&self) -> usize { self.data.len() }

    pub fn is_empty(&self) -> bool { self.data.is_empty() }

    pub fn add(&mut self, name: &str, freq: u64) {
        if freq < self.cutoff { return; }
        let fixed = fix_name(name);
        let k = key(&fixed);
        self.add_fixed(fixed, k, freq);
    }

    /// Adds a name that has already been through `fix_name` and `key`.
    pub fn add_fixed(&mut self, fixed: String, k: String, freq: u64) {
        if freq < self.cutoff || k.is_empty() { return; }
        match self.data.entry(k) {
            Occupied(mut ent) => {
                let v = ent.get_mut();
                v.count += freq;
                if freq > v.best {
                    v.name = fixed;
                    v.best = freq;
                }
            }
            Vacant(ent) => {
                let k = ent.key().clone();
                ent.insert(NameEntry { name: fixed, key: k, count: freq, best: freq });
            }
        }
    }

    /// Returns the merged names, most frequent first.
    pub fn generate(mut self) -> NameList {
        let mut nl: NameList = self.data.drain().map(|(_,v)| v).collect();
        sort_names(&mut nl);
        nl
    }
}

/// Sorts by descending count, ties broken by key so output is stable.
pub fn sort_names(nl: &mut [NameEntry])
{
    nl.par_sort_unstable_by(|a, b| b.count.cmp(&a.count).then_with(|| a.key.cmp(&b.key)));
}

pub fn write_names<W: Write>(writer: &mut W, nl: &[NameEntry]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    for n in nl { writer.serialize(n)?; }
    writer.flush()?;
    Ok(())
}

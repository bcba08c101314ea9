extern crate flate2;
extern crate namefix;
extern crate tempfile;

use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::{self, File};
use std::io::{Read, Write};

use namefix::batch::{build_list, fix_records, read_records, write_fixed, Format};
use namefix::io::{open_input, open_output};
use namefix::namelist::write_names;

const NAMES: &str = "mcdonald\t10\nMCDONALD\t2\nvan der waals\t5\no’reilly\t1\nmüller\t4\nMuller\t6\n";

#[test]
fn reads_gzipped_input() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("names.tsv.gz");
    let mut enc = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
    enc.write_all(NAMES.as_bytes()).unwrap();
    enc.finish().unwrap();

    let records = read_records(open_input(&path).unwrap(), Format::default()).unwrap();
    assert_eq!(records.len(), 6);
    assert_eq!(records[0].name, "mcdonald");
    assert_eq!(records[0].count, 10);
    assert_eq!(records[3].name, "o’reilly");
}

#[test]
fn builds_a_sorted_list_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("names.tsv");
    let output = dir.path().join("list.csv");
    fs::write(&input, NAMES).unwrap();

    let records = read_records(open_input(&input).unwrap(), Format::default()).unwrap();
    let names = build_list(&records, 2);
    {
        let mut out = open_output(&output).unwrap();
        write_names(&mut out, &names).unwrap();
    }
    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(written, "McDonald,mcdonald,12\nMuller,muller,10\nvan der Waals,van der waals,5\n");
}

#[test]
fn writes_fixed_names_with_keys() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("names.csv");
    let output = dir.path().join("fixed.csv");
    fs::write(&input, "name,count\n\"de la hoya\",3\n\"jean-d'arc\",1\n").unwrap();

    let fmt = Format { delimiter: b',', has_headers: true };
    let records = read_records(open_input(&input).unwrap(), fmt).unwrap();
    let fixed = fix_records(&records);
    write_fixed(open_output(&output).unwrap(), &fixed, fmt).unwrap();

    let mut written = String::new();
    File::open(&output).unwrap().read_to_string(&mut written).unwrap();
    assert_eq!(written, "input,name,key\nde la hoya,de la Hoya,de la hoya\njean-d'arc,Jean-D'arc,jean-d'arc\n");
}

#[test]
fn missing_input_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(open_input(&dir.path().join("absent.tsv")).is_err());
}

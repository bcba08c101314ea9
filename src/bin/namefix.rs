extern crate clap;
extern crate env_logger;
#[macro_use] extern crate log;
extern crate namefix;
use clap::{App,AppSettings,Arg,ArgMatches,SubCommand};

use std::io::{self, Write};
use std::path::Path;
use std::process;

use namefix::batch::{build_list, fix_records, read_records, write_fixed, Format};
use namefix::io::{open_input, open_output};
use namefix::namelist::write_names;
use namefix::{fix_name, is_valid_date, key, strip_accents, Error, Result, DEFAULT_DATE_FORMAT};

fn values_arg<'a, 'b>() -> Arg<'a, 'b>
{
    Arg::with_name("values")
        .multiple(true)
        .required(true)
        .help("the strings to transform")
}

fn file_args<'a, 'b>(cmd: App<'a, 'b>) -> App<'a, 'b>
{
    cmd.arg(Arg::with_name("input")
            .required(true)
            .help("input file of names, one per row with an optional count; '-' for stdin, .gz is decompressed"))
        .arg(Arg::with_name("output")
            .required(true)
            .help("output file; '-' for stdout"))
        .arg(Arg::with_name("delimiter")
            .long("delimiter")
            .takes_value(true)
            .default_value("\t")
            .help("single byte field delimiter"))
        .arg(Arg::with_name("headers")
            .long("headers")
            .help("the input has a header row naming 'name' and 'count' columns"))
}

fn format_of(matches: &ArgMatches) -> Result<Format>
{
    let delim = matches.value_of("delimiter").unwrap_or("\t");
    match delim.as_bytes() {
        [b] => Ok(Format { delimiter: *b, has_headers: matches.is_present("headers") }),
        _ => Err(Error::InvalidArgument(format!("delimiter must be one byte, got {:?}", delim)))
    }
}

fn print_each<F: Fn(&str) -> String>(matches: &ArgMatches, f: F) -> Result<()>
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for v in matches.values_of("values").into_iter().flatten() {
        writeln!(out, "{}", f(v))?;
    }
    Ok(())
}

fn run_batch(matches: &ArgMatches) -> Result<()>
{
    let fmt = format_of(matches)?;
    let input = open_input(Path::new(matches.value_of("input").unwrap_or("-")))?;
    let records = read_records(input, fmt)?;
    let fixed = fix_records(&records);
    let output = open_output(Path::new(matches.value_of("output").unwrap_or("-")))?;
    write_fixed(output, &fixed, fmt)
}

fn run_list(matches: &ArgMatches) -> Result<()>
{
    let fmt = format_of(matches)?;
    let cutoff = match matches.value_of("cutoff").unwrap_or("1").parse::<u64>() {
        Ok(n) => n,
        Err(e) => return Err(Error::InvalidArgument(format!("bad cutoff: {}", e)))
    };
    let input = open_input(Path::new(matches.value_of("input").unwrap_or("-")))?;
    let records = read_records(input, fmt)?;
    let names = build_list(&records, cutoff);
    let mut output = open_output(Path::new(matches.value_of("output").unwrap_or("-")))?;
    write_names(&mut output, &names)
}

fn run(matches: &ArgMatches) -> Result<i32>
{
    match matches.subcommand() {
        ("name", Some(m)) => print_each(m, fix_name).map(|_| 0),
        ("key", Some(m)) => print_each(m, key).map(|_| 0),
        ("strip", Some(m)) => print_each(m, strip_accents).map(|_| 0),
        ("date", Some(m)) => {
            let format = m.value_of("format").unwrap_or(DEFAULT_DATE_FORMAT);
            let mut all_valid = true;
            for v in m.values_of("values").into_iter().flatten() {
                let ok = is_valid_date(v, format);
                println!("{}\t{}", v, if ok { "valid" } else { "invalid" });
                all_valid &= ok;
            }
            Ok(if all_valid { 0 } else { 1 })
        }
        ("batch", Some(m)) => run_batch(m).map(|_| 0),
        ("list", Some(m)) => run_list(m).map(|_| 0),
        _ => Ok(2)
    }
}

fn main()
{
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let matches = App::new("namefix")
        .about("Normalizes surnames, search keys, and dates.")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(SubCommand::with_name("name")
            .about("writes each surname in its conventional form")
            .arg(values_arg()))
        .subcommand(SubCommand::with_name("key")
            .about("prints the search key of each string")
            .arg(values_arg()))
        .subcommand(SubCommand::with_name("strip")
            .about("removes accents from each string")
            .arg(values_arg()))
        .subcommand(SubCommand::with_name("date")
            .about("checks each value against a date format; exits 1 if any is invalid")
            .arg(Arg::with_name("format")
                .long("format")
                .short("f")
                .takes_value(true)
                .help("format letters such as 'Y-m-d H:i:s' (the default)"))
            .arg(values_arg()))
        .subcommand(file_args(SubCommand::with_name("batch")
            .about("writes each input name with its fixed form and search key")))
        .subcommand(file_args(SubCommand::with_name("list")
            .about("merges names sharing a search key into a frequency sorted list"))
            .arg(Arg::with_name("cutoff")
                .long("cutoff")
                .takes_value(true)
                .default_value("1")
                .help("ignore rows whose count is below this")))
        .get_matches();
    match run(&matches) {
        Ok(code) => process::exit(code),
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    }
}

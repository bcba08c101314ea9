//! Canonical forms for surnames and search keys.
//!
//! ```
//! use namefix::{fix_name, key, strip_accents, is_valid_date};
//!
//! assert_eq!(fix_name("mcdonald"), "McDonald");
//! assert_eq!(fix_name("van der waals"), "van der Waals");
//! assert_eq!(key("John_Doe@Example.com"), "john doe example com");
//! assert_eq!(strip_accents("Café Münchën"), "Cafe Munchen");
//! assert!(!is_valid_date("2012-02-30 12:12:12", "Y-m-d H:i:s"));
//! ```

pub mod accents;
pub mod batch;
pub mod date;
pub mod error;
pub mod escape;
pub mod io;
pub mod namelist;
pub mod normalize;
pub mod replace;
pub mod tables;

extern crate chrono;
extern crate csv;
extern crate flate2;
#[macro_use] extern crate log;
extern crate once_cell;
extern crate rayon;
extern crate regex;
extern crate serde;
#[macro_use] extern crate serde_derive;
extern crate thiserror;

pub use accents::strip_accents;
pub use date::{is_valid_date, is_valid_datetime, DateParts, DEFAULT_DATE_FORMAT};
pub use error::{Error, Result};
pub use escape::{decode_escapes, decode_escapes_opt};
pub use normalize::{fix_name, key, normalize_name, search_key};
pub use replace::{replace_each, replace_with, trim, CharMap};

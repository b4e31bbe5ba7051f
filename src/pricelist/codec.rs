//! # Delimited Text Codec
//!
//! One product per line, five `;`-separated fields:
//!
//! ```text
//! code;name;type;basePrice;discount
//! 1;Hammer;Tools;12.5;10
//! ```
//!
//! The sale price is never written; it is recomputed when a line is accepted.
//!
//! Decoding is tolerant. Each line yields a [`LineOutcome`]: blank lines are
//! skipped, good lines become products, and bad lines become a [`Rejection`]
//! carrying the 1-based line number and the reason. A bad line never stops
//! the lines after it from loading.

use crate::error::ConstraintViolation;
use crate::model::Product;
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

pub const DELIMITER: char = ';';

/// The line could not be read as a record at all.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MalformedRecord {
    #[error("expected 5 fields, found {0}")]
    FieldCount(usize),

    #[error("cannot parse {field} from {value:?}")]
    BadNumber { field: &'static str, value: String },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RejectCause {
    #[error(transparent)]
    Malformed(#[from] MalformedRecord),

    #[error(transparent)]
    Constraint(#[from] ConstraintViolation),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    pub line: usize,
    pub cause: RejectCause,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.cause)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    Blank,
    Accepted(Product),
    Rejected(Rejection),
}

/// Everything a decode pass produced.
#[derive(Debug, Default, Clone)]
pub struct Decoded {
    pub products: Vec<Product>,
    pub rejections: Vec<Rejection>,
}

/// Parses a single line. Duplicate codes are not detected here, that needs
/// the context of the whole load (see [`decode`]).
pub fn parse_line(line_number: usize, line: &str) -> LineOutcome {
    let line = line.strip_suffix('\r').unwrap_or(line);
    if line.is_empty() {
        return LineOutcome::Blank;
    }
    match parse_fields(line) {
        Ok(product) => LineOutcome::Accepted(product),
        Err(cause) => LineOutcome::Rejected(Rejection {
            line: line_number,
            cause,
        }),
    }
}

fn parse_fields(line: &str) -> Result<Product, RejectCause> {
    let fields: Vec<&str> = line.split(DELIMITER).collect();
    let [code, name, kind, base_price, discount] = fields.as_slice() else {
        return Err(MalformedRecord::FieldCount(fields.len()).into());
    };

    let code = parse_number::<u32>("code", code)?;
    let base_price = parse_number::<f64>("base price", base_price)?;
    let discount = parse_number::<f64>("discount", discount)?;

    Ok(Product::new(code, *name, *kind, base_price, discount)?)
}

fn parse_number<T: std::str::FromStr>(
    field: &'static str,
    raw: &str,
) -> Result<T, MalformedRecord> {
    raw.trim()
        .parse()
        .map_err(|_| MalformedRecord::BadNumber {
            field,
            value: raw.to_string(),
        })
}

/// Decodes a whole source. The first occurrence of a code wins; later lines
/// with the same code are rejected.
pub fn decode(text: &str) -> Decoded {
    let mut decoded = Decoded::default();
    let mut seen = HashSet::new();

    for (idx, line) in text.lines().enumerate() {
        let line_number = idx + 1;
        match parse_line(line_number, line) {
            LineOutcome::Blank => {}
            LineOutcome::Accepted(product) => {
                if seen.insert(product.code()) {
                    decoded.products.push(product);
                } else {
                    decoded.rejections.push(Rejection {
                        line: line_number,
                        cause: ConstraintViolation::DuplicateCode(product.code()).into(),
                    });
                }
            }
            LineOutcome::Rejected(rejection) => decoded.rejections.push(rejection),
        }
    }

    decoded
}

pub fn encode_product(product: &Product) -> String {
    format!(
        "{code}{d}{name}{d}{kind}{d}{base}{d}{discount}",
        code = product.code(),
        name = product.name,
        kind = product.kind,
        base = product.base_price(),
        discount = product.discount(),
        d = DELIMITER,
    )
}

/// Encodes products in the given order, one `\n`-terminated line each.
pub fn encode(products: &[Product]) -> String {
    let mut out = String::new();
    for product in products {
        out.push_str(&encode_product(product));
        out.push('\n');
    }
    out
}

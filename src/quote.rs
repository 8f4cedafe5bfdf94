// quote.rs
use crate::error::{ChartError, Result};
use crate::settings;
use csv::{ReaderBuilder, StringRecord, Trim};

const FIELD_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct QuoteRecord {
    pub date: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

// порядок входа сохраняется, без сортировки
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuoteSeries {
    records: Vec<QuoteRecord>,
}

impl QuoteSeries {
    pub fn from_records(records: Vec<QuoteRecord>) -> Self {
        Self { records }
    }

    /// Parses `date,open,high,low,close` text. The first line is a header and is dropped.
    ///
    /// The whole load is rejected on the first malformed record; the error names its line.
    pub fn parse(text: &str) -> Result<Self> {
        Self::parse_with_delimiter(text, settings::FIELD_DELIMITER)
    }

    pub fn parse_with_delimiter(text: &str, delimiter: u8) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(text.as_bytes());

        let mut records = Vec::new();
        for (index, row) in reader.records().enumerate() {
            // header is line 1
            let fallback_line = index as u64 + 2;
            let row = row.map_err(|e| ChartError::Parse {
                line: e.position().map_or(fallback_line, |p| p.line()),
                reason: e.to_string(),
            })?;
            let line = row.position().map_or(fallback_line, |p| p.line());
            records.push(parse_record(&row, line)?);
        }

        tracing::debug!("parsed {} quote records", records.len());
        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&QuoteRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QuoteRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[QuoteRecord] {
        &self.records
    }

    pub fn closes(&self) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().map(|r| r.close)
    }

    pub fn close_range(&self) -> Option<(f64, f64)> {
        self.closes().fold(None, |acc, close| match acc {
            None => Some((close, close)),
            Some((min, max)) => Some((min.min(close), max.max(close))),
        })
    }
}

fn parse_record(row: &StringRecord, line: u64) -> Result<QuoteRecord> {
    if row.len() != FIELD_COUNT {
        return Err(ChartError::Parse {
            line,
            reason: format!("expected {} fields, found {}", FIELD_COUNT, row.len()),
        });
    }
    let price = |i: usize, name: &str| parse_price(&row[i], name, line);
    Ok(QuoteRecord {
        date: row[0].to_string(),
        open: price(1, "open")?,
        high: price(2, "high")?,
        low: price(3, "low")?,
        close: price(4, "close")?,
    })
}

fn parse_price(field: &str, name: &str, line: u64) -> Result<f64> {
    match field.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ChartError::Parse {
            line,
            reason: format!("{} is not a finite number: {:?}", name, field),
        }),
    }
}

use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::core::figure::Series;
use crate::error::{Error, Result};

/// How a delimited text file maps onto plot series.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvLayout {
    /// First record holds column names, used as series labels
    pub has_headers: bool,
    pub delimiter: u8,
    /// Column shared as x values by every other column
    pub x_column: Option<usize>,
}

impl Default for CsvLayout {
    fn default() -> Self {
        Self {
            has_headers: true,
            delimiter: b',',
            x_column: None,
        }
    }
}

pub fn load_series_csv(path: &Path, layout: &CsvLayout) -> Result<Vec<Series>> {
    let file = std::fs::File::open(path)?;
    read_series_csv(file, layout)
}

/// One series per column. Every cell must parse as a number.
pub fn read_series_csv<R: Read>(reader: R, layout: &CsvLayout) -> Result<Vec<Series>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(layout.has_headers)
        .delimiter(layout.delimiter)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = if layout.has_headers {
        rdr.headers()?.iter().map(str::to_string).collect()
    } else {
        Vec::new()
    };

    let mut columns: Vec<Vec<f64>> = Vec::new();
    for (line, record) in rdr.records().enumerate() {
        let record = record?;
        if columns.is_empty() {
            columns.resize_with(record.len(), Vec::new);
        }
        for (col, field) in record.iter().enumerate() {
            let value = field.parse::<f64>().map_err(|_| Error::InvalidArgument {
                arg: "csv",
                value: format!("row {} column {}: {:?}", line + 1, col + 1, field),
            })?;
            columns[col].push(value);
        }
    }

    if columns.is_empty() {
        return Err(Error::EmptyData);
    }
    debug!("Read {} column(s) x {} row(s)", columns.len(), columns[0].len());

    let x = layout.x_column;
    if let Some(idx) = x.filter(|&idx| idx >= columns.len()) {
        return Err(Error::invalid("x_column", idx));
    }

    let shared_x = x.map(|idx| columns[idx].clone());
    let series: Vec<Series> = columns
        .into_iter()
        .enumerate()
        .filter(|(idx, _)| Some(*idx) != x)
        .map(|(idx, y)| {
            let series = match &shared_x {
                Some(xs) => Series::xy(xs.clone(), y),
                None => Series::new(y),
            };
            match headers.get(idx).filter(|h| !h.is_empty()) {
                Some(label) => series.with_label(label.clone()),
                None => series,
            }
        })
        .collect();

    if series.is_empty() {
        return Err(Error::invalid("csv", "no y columns"));
    }
    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_names_become_labels() {
        let text = "a, b\n1, 10\n2, 20\n3, 30\n";
        let series = read_series_csv(text.as_bytes(), &CsvLayout::default()).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].label.as_deref(), Some("a"));
        assert_eq!(series[1].y, vec![10.0, 20.0, 30.0]);
        assert_eq!(series[1].x, None);
    }

    #[test]
    fn x_column_is_shared() {
        let text = "0.5;1;2\n1.5;3;4\n";
        let layout = CsvLayout {
            has_headers: false,
            delimiter: b';',
            x_column: Some(0),
        };
        let series = read_series_csv(text.as_bytes(), &layout).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].points(), vec![[0.5, 1.0], [1.5, 3.0]]);
        assert_eq!(series[1].label, None);
    }

    #[test]
    fn rejects_non_numeric_cells() {
        let text = "y\n1\nfoo\n";
        let err = read_series_csv(text.as_bytes(), &CsvLayout::default()).unwrap_err();
        assert!(err.to_string().contains("row 2 column 1"));
    }

    #[test]
    fn rejects_out_of_range_x_column() {
        let layout = CsvLayout {
            x_column: Some(3),
            ..CsvLayout::default()
        };
        assert!(read_series_csv("a,b\n1,2\n".as_bytes(), &layout).is_err());
    }

    #[test]
    fn empty_file_is_empty_data() {
        assert!(matches!(
            read_series_csv("a,b\n".as_bytes(), &CsvLayout::default()),
            Err(Error::EmptyData)
        ));
    }

    #[test]
    fn loads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("series.csv");
        std::fs::write(&path, "t,v\n0,1\n1,4\n").unwrap();
        let layout = CsvLayout {
            x_column: Some(0),
            ..CsvLayout::default()
        };
        let series = load_series_csv(&path, &layout).unwrap();
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].label.as_deref(), Some("v"));
        assert_eq!(series[0].x, Some(vec![0.0, 1.0]));
    }
}

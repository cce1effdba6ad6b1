use super::{Heatmap, HeatmapHeader, Row};
use crate::error::{HeatsortError, HsResult};
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Suffix appended to the input path when no output path is given.
pub const OUTPUT_SUFFIX: &str = "better";

pub fn load_heatmap<P: AsRef<Path>>(path: P) -> HsResult<Heatmap> {
    let path = path.as_ref();
    info!("📂 Loading heatmap from: {}", path.display());
    let file = File::open(path)?;
    let heatmap = parse_heatmap(file)?;
    info!(
        "   -> {} rows x {} columns",
        heatmap.row_count(),
        heatmap.column_count()
    );

    let constant = heatmap
        .rows
        .iter()
        .filter(|r| r.values().windows(2).all(|w| w[0] == w[1]))
        .count();
    if constant > 0 && heatmap.column_count() > 1 {
        warn!(
            "⚠️  {} row(s) hold a single repeated value and carry no shape information",
            constant
        );
    }
    Ok(heatmap)
}

/// Parses the delimited text format: a header of `corner, label...` followed
/// by `name, value...` records with exactly as many fields as the header.
pub fn parse_heatmap<R: Read>(reader: R) -> HsResult<Heatmap> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = rdr.records();

    let header = match records.next() {
        Some(rec) => rec?,
        None => {
            return Err(HeatsortError::Parse {
                line: 1,
                message: "Input is empty, expected a header line".to_string(),
            })
        }
    };
    if header.len() < 2 {
        return Err(HeatsortError::Parse {
            line: line_of(&header),
            message: "Header declares no column labels".to_string(),
        });
    }

    let corner = header[0].to_string();
    let labels: Vec<String> = header.iter().skip(1).map(str::to_string).collect();
    debug!("   Header: corner='{}', labels={:?}", corner, labels);

    let mut rows = Vec::new();
    for result in records {
        let rec = result?;
        let line = line_of(&rec);
        if rec.len() != header.len() {
            return Err(HeatsortError::Parse {
                line,
                message: format!(
                    "Expected {} fields but found {}",
                    header.len(),
                    rec.len()
                ),
            });
        }

        let name = rec[0].to_string();
        let mut values = Vec::with_capacity(labels.len());
        for (col, cell) in rec.iter().skip(1).enumerate() {
            let v: f64 = cell.parse().map_err(|_| HeatsortError::Parse {
                line,
                message: format!(
                    "Row '{}', column '{}': '{}' is not a number",
                    name, labels[col], cell
                ),
            })?;
            if !v.is_finite() {
                return Err(HeatsortError::Parse {
                    line,
                    message: format!(
                        "Row '{}', column '{}': '{}' is not a finite number",
                        name, labels[col], cell
                    ),
                });
            }
            values.push(v);
        }
        rows.push(Row::new(name, values));
    }

    Heatmap::new(corner, labels, rows)
}

fn line_of(rec: &csv::StringRecord) -> u64 {
    rec.position().map(|p| p.line()).unwrap_or(0)
}

/// `<input>.better`, next to the input file.
pub fn default_output_path<P: AsRef<Path>>(input: P) -> PathBuf {
    let mut os = input.as_ref().as_os_str().to_owned();
    os.push(".");
    os.push(OUTPUT_SUFFIX);
    PathBuf::from(os)
}

/// Writes the header and `rows` in the given order, comma-space separated.
pub fn write_heatmap<'a, W, I>(writer: W, header: &HeatmapHeader, rows: I) -> HsResult<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Row>,
{
    let mut out = BufWriter::new(writer);
    writeln!(out, "{}", join_line(&header.corner, &header.labels))?;
    for row in rows {
        writeln!(out, "{}", join_line(row.name(), row.values()))?;
    }
    out.flush()?;
    Ok(())
}

pub fn save_heatmap<'a, P, I>(path: P, header: &HeatmapHeader, rows: I) -> HsResult<()>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = &'a Row>,
{
    let path = path.as_ref();
    let file = File::create(path)?;
    write_heatmap(file, header, rows)?;
    info!("💾 Wrote arrangement to: {}", path.display());
    Ok(())
}

fn join_line<T: std::fmt::Display>(left_most: &str, rest: &[T]) -> String {
    let mut line = String::from(left_most);
    for item in rest {
        line.push_str(", ");
        line.push_str(&item.to_string());
    }
    line
}

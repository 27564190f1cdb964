use ptr_sync_domain::{DomainError, ResolvedAnnotation};
use std::io::Write;
use std::path::Path;

pub const IP_COLUMN: &str = "IP";

/// Writes `IP,<annotation>` followed by one row per resolved host.
pub fn write_annotations<W: Write>(
    writer: W,
    annotation: &str,
    rows: &[ResolvedAnnotation],
) -> Result<(), DomainError> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record([IP_COLUMN, annotation])
        .map_err(|e| DomainError::CsvError(e.to_string()))?;
    for row in rows {
        csv.write_record([row.ip.as_str(), row.annotation_value.as_str()])
            .map_err(|e| DomainError::CsvError(e.to_string()))?;
    }
    csv.flush().map_err(|e| DomainError::IoError(e.to_string()))
}

pub fn encode_annotations(
    annotation: &str,
    rows: &[ResolvedAnnotation],
) -> Result<Vec<u8>, DomainError> {
    let mut buf = Vec::new();
    write_annotations(&mut buf, annotation, rows)?;
    Ok(buf)
}

/// Encodes the rows, leaves a copy at `path` and returns the bytes to upload.
pub fn write_annotation_file(
    path: impl AsRef<Path>,
    annotation: &str,
    rows: &[ResolvedAnnotation],
) -> Result<Vec<u8>, DomainError> {
    let path = path.as_ref();
    let bytes = encode_annotations(annotation, rows)?;
    std::fs::write(path, &bytes)
        .map_err(|e| DomainError::IoError(format!("{}: {}", path.display(), e)))?;
    Ok(bytes)
}

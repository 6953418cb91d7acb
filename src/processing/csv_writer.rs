use crate::discretization::SpatialProfile;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Write data to CSV file with headers
pub fn write_csv<P: AsRef<Path>>(path: P, headers: &[&str], data: &[Vec<f64>]) -> io::Result<()> {
    if !headers.is_empty() && !data.is_empty() && headers.len() != data.len() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "Headers count ({}) doesn't match data columns ({})",
                headers.len(),
                data.len()
            ),
        ));
    }

    let mut file = File::create(path)?;

    writeln!(file, "{}", headers.join(","))?;

    let n_rows = data.iter().map(|col| col.len()).max().unwrap_or(0);

    for i in 0..n_rows {
        let row: Vec<String> = data
            .iter()
            .map(|col| {
                if i < col.len() {
                    format!("{:.15e}", col[i])
                } else {
                    String::new()
                }
            })
            .collect();
        writeln!(file, "{}", row.join(","))?;
    }

    Ok(())
}

/// Write one dependent column against one independent column of equal length
pub fn write_xy<P: AsRef<Path>>(
    path: P,
    x_header: &str,
    y_header: &str,
    x_data: &[f64],
    y_data: &[f64],
) -> io::Result<()> {
    if x_data.len() != y_data.len() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "{x_header} and {y_header} lengths don't match ({} vs {})",
                x_data.len(),
                y_data.len()
            ),
        ));
    }
    write_csv(
        path,
        &[x_header, y_header],
        &[x_data.to_vec(), y_data.to_vec()],
    )
}

/// Write profiles sharing one position axis as `x_<unit>,<label>_<unit>,...`
pub fn write_profiles<P: AsRef<Path>>(path: P, profiles: &[&SpatialProfile]) -> io::Result<()> {
    let Some(first) = profiles.first() else {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "No profiles to write",
        ));
    };

    if let Some(other) = profiles
        .iter()
        .find(|p| p.positions != first.positions || p.position_unit != first.position_unit)
    {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "Profile '{}' is not sampled on the same axis as '{}'",
                other.label, first.label
            ),
        ));
    }

    let position_header = format!("x_{}", first.position_unit.symbol());
    let value_headers: Vec<String> = profiles.iter().map(|p| p.header()).collect();
    let mut headers = vec![position_header.as_str()];
    headers.extend(value_headers.iter().map(String::as_str));

    let mut columns = vec![first.positions.as_slice().to_vec()];
    columns.extend(profiles.iter().map(|p| p.values.as_slice().to_vec()));

    write_csv(path, &headers, &columns)
}

use crate::screen::classify::Disease;
use crate::screen::family::{Family, FAMILY_ROLES};
use crate::utils::Result;
use itertools::Itertools;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Appends screening runs to a flat CSV table, one row per run: timestamp,
/// disease, the six sequences with their complements, and the encoded
/// result string.
pub struct HistoryWriter {
    file: File,
}

impl HistoryWriter {
    /// Opens the history file for appending; the header row is written only
    /// when the file is being created.
    pub fn new(path: &Path) -> Result<HistoryWriter> {
        let add_header = !path.exists();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| format!("File {}: {}", path.display(), e))?;

        if add_header {
            let header = columns().iter().map(|column| escape(column)).join(",");
            writeln!(file, "{}", header)
                .map_err(|e| format!("Failed to write history header: {}", e))?;
        }

        Ok(HistoryWriter { file })
    }

    /// Appends one screening run.
    pub fn append(&mut self, disease: Disease, family: &Family, results: &str) -> Result<()> {
        let mut fields = vec![
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            disease.name().to_string(),
        ];
        for member in family.members() {
            fields.push(member.sequence.clone());
            fields.push(member.complement.clone());
        }
        fields.push(results.to_string());

        let row = fields.iter().map(|field| escape(field)).join(",");
        writeln!(self.file, "{}", row).map_err(|e| format!("Failed to write history row: {}", e))
    }
}

fn columns() -> Vec<String> {
    let mut columns = vec!["Date".to_string(), "Disease".to_string()];
    for role in FAMILY_ROLES {
        columns.push(format!("{}'s Gene", role.label()));
        columns.push(format!("{}'s Complement", role.label()));
    }
    columns.push("Results".to_string());
    columns
}

/// Quotes a field when it contains a comma, quote, or line break.
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

use crate::cli::ScreenArgs;
use crate::screen::{
    aggregate, couple_squares,
    writers::{write_report, HistoryWriter},
    Family,
};
use crate::utils::{read_sequence, Result};
use std::fs::File;
use std::io::{stdout, BufWriter};

pub fn screen(args: ScreenArgs) -> Result<()> {
    let disease = args.disease;
    let sequences = [
        read_sequence(&args.father_path)?,
        read_sequence(&args.mother_path)?,
        read_sequence(&args.paternal_grandfather_path)?,
        read_sequence(&args.paternal_grandmother_path)?,
        read_sequence(&args.maternal_grandfather_path)?,
        read_sequence(&args.maternal_grandmother_path)?,
    ];
    let family = Family::new(sequences);

    log::info!("Screening for {}", disease.name());
    let result = aggregate(disease, &family).map_err(|e| e.to_string())?;
    let results = result.encode();
    log::info!("Results: {}", results);

    let squares = couple_squares(&results).map_err(|e| e.to_string())?;

    if let Some(history_path) = &args.history_path {
        let mut history = HistoryWriter::new(history_path)?;
        history.append(disease, &family, &results)?;
        log::info!("Run appended to {}", history_path.display());
    }

    match &args.output_path {
        Some(path) => {
            let file =
                File::create(path).map_err(|e| format!("File {}: {}", path.display(), e))?;
            write_report(&mut BufWriter::new(file), disease, &results, &squares)?;
        }
        None => write_report(&mut stdout(), disease, &results, &squares)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::Disease;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_sequence(dir: &TempDir, name: &str, sequence: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, sequence).unwrap();
        path
    }

    #[test]
    fn screen_runs_end_to_end() {
        let dir = TempDir::new().unwrap();
        // A premature stop codon in the father's sequence only.
        let stop = "ATGCGTACGTAA";
        let clean = "ATGCGTACGTCC";

        let args = ScreenArgs {
            disease: Disease::MuscularDystrophy,
            father_path: write_sequence(&dir, "father.txt", stop),
            mother_path: write_sequence(&dir, "mother.txt", clean),
            paternal_grandfather_path: write_sequence(&dir, "pgf.txt", clean),
            paternal_grandmother_path: write_sequence(&dir, "pgm.txt", clean),
            maternal_grandfather_path: write_sequence(&dir, "mgf.txt", clean),
            maternal_grandmother_path: write_sequence(&dir, "mgm.txt", clean),
            history_path: Some(dir.path().join("history.csv")),
            output_path: Some(dir.path().join("report.txt")),
        };
        screen(args).unwrap();

        let report = fs::read_to_string(dir.path().join("report.txt")).unwrap();
        assert!(report.contains("Results: 100000000000"));
        assert!(report.contains("Punnett Square for Father and Mother:"));

        let history = fs::read_to_string(dir.path().join("history.csv")).unwrap();
        let lines: Vec<&str> = history.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].ends_with(",100000000000"));
    }
}

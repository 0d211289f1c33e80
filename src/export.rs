use crate::models::{MissedQuestion, Question};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

pub const RIGHT_FILE: &str = "questions_right.json";
pub const WRONG_FILE: &str = "questions_wrong.json";

/// Write the session results as two pretty-printed JSON documents in `dir`:
/// the questions answered correctly and the questions never answered
/// correctly (with the learner's last input). Returns the two paths.
pub fn write_results(
    dir: &Path,
    right: &[Question],
    wrong: &[MissedQuestion],
) -> io::Result<(PathBuf, PathBuf)> {
    let right_path = dir.join(RIGHT_FILE);
    let wrong_path = dir.join(WRONG_FILE);

    write_json(&right_path, right)?;
    write_json(&wrong_path, wrong)?;

    crate::logger::log(&format!(
        "exported {} right / {} wrong to {}",
        right.len(),
        wrong.len(),
        dir.display()
    ));

    Ok((right_path, wrong_path))
}

fn write_json<T: serde::Serialize + ?Sized>(path: &Path, value: &T) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.write_all(b"\n")?;
    writer.flush()
}

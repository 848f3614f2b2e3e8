use serde::Deserialize;
use std::io::Read;

#[derive(Debug)]
pub(crate) struct AnswerRow {
    pub(crate) question_id: String,
    pub(crate) points: u8,
    /// 1-based line the record starts on.
    pub(crate) line: u64,
}

pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<AnswerRow>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let mut rows = Vec::new();

    for record in csv_reader.records() {
        let record = record?;
        let line = record
            .position()
            .map(|position| position.line())
            .unwrap_or_default();
        let row: RawRow = record.deserialize(Some(&headers))?;

        rows.push(AnswerRow {
            question_id: row.question_id,
            points: row.points,
            line,
        });
    }

    Ok(rows)
}

#[derive(Debug, Deserialize)]
struct RawRow {
    question_id: String,
    points: u8,
}

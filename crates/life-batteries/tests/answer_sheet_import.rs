use life_batteries::workflows::answer_sheet::{AnswerSheetImportError, AnswerSheetImporter};
use life_batteries::workflows::assessment::{Battery, Profile, QuestionCatalog, Scorer};

#[test]
fn imported_sheet_scores_like_a_live_session() {
    let catalog = QuestionCatalog::standard();
    let mut csv = String::from("question_id,points\n");
    for question in catalog.questions() {
        let points = if question.battery == Battery::Spiritual { 0 } else { 6 };
        csv.push_str(&format!("{},{}\n", question.id, points));
    }

    let answers = AnswerSheetImporter::from_reader(csv.as_bytes(), &catalog)
        .expect("import succeeds");
    assert_eq!(answers.len(), 35);

    let results = Scorer::standard().score("Léa", &answers);
    assert_eq!(results.total_score, 180);
    assert_eq!(results.profile, Profile::OptimalVitality);
    assert_eq!(
        results.battery(Battery::Spiritual).map(|score| score.score),
        Some(0)
    );
}

#[test]
fn import_reports_offending_line() {
    let catalog = QuestionCatalog::standard();
    let csv = "question_id,points\nphys-1,6\nphys-2,4\nphys-3,5\n";

    match AnswerSheetImporter::from_reader(csv.as_bytes(), &catalog) {
        Err(AnswerSheetImportError::InvalidPoints {
            line,
            question_id,
            points,
        }) => {
            assert_eq!(line, 4);
            assert_eq!(question_id, "phys-3");
            assert_eq!(points, 5);
        }
        other => panic!("expected invalid points, got {other:?}"),
    }
}

#[test]
fn missing_file_surfaces_io_error() {
    let catalog = QuestionCatalog::standard();
    let result = AnswerSheetImporter::from_path("/nonexistent/answers.csv", &catalog);
    assert!(matches!(result, Err(AnswerSheetImportError::Io(_))));
}

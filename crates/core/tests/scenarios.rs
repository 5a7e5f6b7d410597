//! End-to-end triage scenarios: JSON in, assessment payload out.

use vitals_core::{
    analyze, classify, parse_patient_document, AnalyzerConfig, AssessmentService, BatchAnalyzer,
    JsonFileSource, RecordingSink, RiskScores,
};

const FEED: &str = r#"{
    "data": [
        {"patient_id": "DEMO001", "name": "TestPatient, John", "age": 30, "gender": "M",
         "blood_pressure": "118/76", "temperature": 98.2, "visit_date": "2024-01-15",
         "diagnosis": "Routine", "medications": "None"},
        {"patient_id": "DEMO002", "age": 70, "blood_pressure": "150/95", "temperature": 102.3},
        {"patient_id": "DEMO003", "age": 45, "blood_pressure": "135/78", "temperature": 37},
        {"patient_id": "DEMO004", "age": "NaN", "blood_pressure": "", "temperature": null},
        {"patient_id": "DEMO005", "age": 65, "blood_pressure": "130/89", "temperature": 99.6},
        {"patient_id": "DEMO006", "age": 52, "blood_pressure": "110/85", "temperature": "TEMP_ERROR"},
        {"patient_id": "DEMO007", "age": 81, "blood_pressure": "INVALID_BP", "temperature": 101.4}
    ],
    "pagination": {"page": 1, "limit": 20, "total": 7, "hasNext": false}
}"#;

#[test]
fn test_scenarios_from_feed() {
    let records = parse_patient_document(FEED).unwrap();
    let verdicts: Vec<_> = records.iter().map(classify).collect();

    // Healthy.
    assert_eq!(verdicts[0].scores, RiskScores::new(0, 0, 0));
    assert!(!verdicts[0].is_high_risk && !verdicts[0].has_fever);
    assert!(!verdicts[0].has_data_quality_issues);

    // Maximum score.
    assert_eq!(verdicts[1].scores, RiskScores::new(3, 2, 2));
    assert!(verdicts[1].is_high_risk && verdicts[1].has_fever);

    // Stage 1 via systolic; a raw 37 is scored as given.
    assert_eq!(verdicts[2].scores, RiskScores::new(2, 0, 1));

    // Nothing usable.
    assert_eq!(verdicts[3].scores, RiskScores::default());
    assert!(!verdicts[3].is_high_risk && !verdicts[3].has_fever);
    assert!(verdicts[3].has_data_quality_issues);

    // Exactly on the threshold.
    assert_eq!(verdicts[4].scores, RiskScores::new(2, 1, 1));
    assert!(verdicts[4].is_high_risk && verdicts[4].has_fever);

    // Stage 1 via diastolic despite normal systolic.
    assert_eq!(verdicts[5].scores.blood_pressure, 2);
    assert!(verdicts[5].has_data_quality_issues);

    // Unparsable pressure, but fever and age still count.
    assert_eq!(verdicts[6].scores, RiskScores::new(0, 2, 2));
    assert!(verdicts[6].is_high_risk && verdicts[6].has_fever);
    assert!(verdicts[6].has_data_quality_issues);
}

#[test]
fn test_payload_from_feed() {
    let records = parse_patient_document(FEED).unwrap();
    let payload = analyze(&records).payload();

    assert_eq!(
        payload.high_risk_patients,
        vec!["DEMO002", "DEMO005", "DEMO007"]
    );
    assert_eq!(payload.fever_patients, vec!["DEMO002", "DEMO005", "DEMO007"]);
    assert_eq!(
        payload.data_quality_issues,
        vec!["DEMO004", "DEMO006", "DEMO007"]
    );
}

#[test]
fn test_service_over_file_source() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("patients.json");
    std::fs::write(&path, FEED).unwrap();

    let service = AssessmentService::new(
        JsonFileSource::new(&path),
        RecordingSink::new(),
        BatchAnalyzer::new(AnalyzerConfig::new(2)),
    );
    let outcome = service.run().unwrap();

    assert_eq!(outcome.analysis.summary().total, 7);
    assert_eq!(outcome.ack.high_risk_count, 3);
    assert_eq!(outcome.ack.fever_count, 3);
    assert_eq!(outcome.ack.data_quality_count, 3);
    assert_eq!(
        service.sink().submissions().unwrap(),
        vec![outcome.analysis.payload()]
    );
}

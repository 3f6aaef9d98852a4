//! End-to-end monitoring scenarios: offline fit feeding the streaming
//! engine, patient trajectories, and batch semantics.

use vigil_core::prelude::*;
use vigil_engine::HealthMonitor;
use vigil_fit::{dbscan, fit_scaler, DbscanParams};

/// Training corpus: a tight "normal vitals" blob and a tight
/// "deteriorated vitals" blob, far apart in every feature.
fn training_rows() -> Vec<Vec<f32>> {
    vec![
        // normal: ~120/80, glucose 95, HR 70, 36.6 °C, SpO2 98
        vec![120.0, 80.0, 95.0, 70.0, 36.6, 98.0],
        vec![121.0, 81.0, 96.0, 71.0, 36.7, 98.0],
        vec![119.0, 79.0, 94.0, 69.0, 36.5, 97.0],
        vec![120.0, 80.0, 95.0, 72.0, 36.6, 98.0],
        vec![122.0, 81.0, 97.0, 70.0, 36.6, 99.0],
        vec![118.0, 79.0, 93.0, 68.0, 36.5, 98.0],
        // deteriorated: hypertensive, hyperglycemic, tachycardic, febrile
        vec![180.0, 115.0, 210.0, 110.0, 38.5, 88.0],
        vec![181.0, 116.0, 211.0, 111.0, 38.6, 88.0],
        vec![179.0, 114.0, 209.0, 109.0, 38.4, 87.0],
        vec![180.0, 115.0, 210.0, 112.0, 38.5, 88.0],
        vec![182.0, 116.0, 212.0, 110.0, 38.5, 89.0],
        vec![178.0, 114.0, 208.0, 108.0, 38.4, 88.0],
    ]
}

/// Fit scaler + density model on the corpus and wire up a monitor.
fn fitted_monitor() -> HealthMonitor {
    let raw = training_rows();
    let scaler = fit_scaler(&raw).unwrap();
    let scaled: Vec<Vec<f32>> = raw
        .iter()
        .map(|row| scaler.transform(row).unwrap())
        .collect();

    let fit = dbscan(&scaled, &DbscanParams::new(1.0, 3).unwrap()).unwrap();
    assert_eq!(fit.n_clusters, 2, "corpus should split into two blobs");

    let model = fit.to_model(&scaled).unwrap();
    HealthMonitor::new(&model, scaler, TierMap::chronic_care())
}

#[test]
fn patient_trajectory_raises_warning_then_escalation() {
    let monitor = fitted_monitor();
    let patient = PatientId::from("icu-204");

    // Day 1: normal vitals — the first normal training row's neighborhood.
    let first = monitor
        .assess(&patient, &[120.0, 80.0, 95.0, 70.0, 36.6, 98.0])
        .unwrap();
    assert_eq!(first.alert.kind, AlertKind::Status);
    assert_eq!(first.alert.tier, Tier::Stable);
    assert_eq!(first.alert.message, "Status: Stable");

    // Day 2: readings drift midway between the blobs — matches nothing.
    let second = monitor
        .assess(&patient, &[150.0, 97.0, 152.0, 90.0, 37.5, 93.0])
        .unwrap();
    assert_eq!(second.label, ClusterLabel::NOISE);
    assert_eq!(second.alert.kind, AlertKind::EarlyWarning);
    assert_eq!(second.alert.tier, Tier::Risk);

    // Day 3: full deterioration pattern.
    let third = monitor
        .assess(&patient, &[180.0, 115.0, 210.0, 110.0, 38.5, 88.0])
        .unwrap();
    assert_eq!(third.alert.kind, AlertKind::Escalation);
    assert_eq!(third.alert.tier, Tier::Critical);

    // Day 4: still critical — sustained states stay plain status.
    let fourth = monitor
        .assess(&patient, &[181.0, 116.0, 211.0, 111.0, 38.6, 88.0])
        .unwrap();
    assert_eq!(fourth.alert.kind, AlertKind::Status);
    assert_eq!(fourth.alert.message, "Status: Critical");
}

#[test]
fn named_field_readings_match_raw_rows() {
    let monitor = fitted_monitor();

    let vitals = VitalSigns {
        systolic_pressure: 120.0,
        diastolic_pressure: 80.0,
        glucose_level: 95.0,
        heart_rate: 70.0,
        body_temperature: 36.6,
        oxygen_saturation: 98.0,
    };

    let from_vitals = monitor
        .assess_vitals(&PatientId::from("a"), &vitals)
        .unwrap();
    let from_row = monitor
        .assess(&PatientId::from("b"), &vitals.to_features())
        .unwrap();

    assert_eq!(from_vitals.label, from_row.label);
}

#[test]
fn training_core_points_keep_their_fit_labels() {
    let raw = training_rows();
    let scaler = fit_scaler(&raw).unwrap();
    let scaled: Vec<Vec<f32>> = raw
        .iter()
        .map(|row| scaler.transform(row).unwrap())
        .collect();
    let fit = dbscan(&scaled, &DbscanParams::new(1.0, 3).unwrap()).unwrap();
    let model = fit.to_model(&scaled).unwrap();

    let monitor = HealthMonitor::new(&model, scaler, TierMap::chronic_care());

    // Streaming a core training row back through the engine must land in
    // the cluster the fit gave it.
    for &core in &fit.core_indices {
        let assessment = monitor
            .assess(&PatientId::from("replay"), &raw[core])
            .unwrap();
        assert_eq!(assessment.label, fit.labels[core], "core row {}", core);
    }
}

#[test]
fn nearest_of_two_reachable_clusters_wins() {
    // Two single-core-point clusters on a line; the query sits within eps
    // of both but closer to label 0.
    let model = ClusterModel::new(
        vec![vec![0.0], vec![1.3]],
        vec![ClusterLabel::new(0), ClusterLabel::new(1)],
        1.0,
    )
    .unwrap();
    let monitor = HealthMonitor::new(&model, StandardScaler::identity(1), TierMap::chronic_care());

    // Distance 0.5 to the label-0 core, 0.8 to the label-1 core.
    let assessment = monitor
        .assess(&PatientId::from("p"), &[0.5])
        .unwrap();
    assert_eq!(assessment.label, ClusterLabel::new(0));
}

#[test]
fn batch_equals_row_by_row_from_the_same_starting_history() {
    let rows = vec![
        vec![120.0, 80.0, 95.0, 70.0, 36.6, 98.0],
        vec![150.0, 97.0, 152.0, 90.0, 37.5, 93.0],
        vec![180.0, 115.0, 210.0, 110.0, 38.5, 88.0],
        vec![120.0, 80.0, 95.0, 70.0, 36.6, 98.0],
    ];
    let patient = PatientId::from("icu-204");

    let batch_monitor = fitted_monitor();
    let batched = batch_monitor.assess_batch(&patient, &rows);

    let row_monitor = fitted_monitor();
    let sequential: Vec<_> = rows.iter().map(|r| row_monitor.assess(&patient, r)).collect();

    for (b, s) in batched.iter().zip(sequential.iter()) {
        assert_eq!(b.as_ref().unwrap(), s.as_ref().unwrap());
    }
}

#[test]
fn malformed_batch_rows_fail_alone() {
    let monitor = fitted_monitor();
    let patient = PatientId::from("icu-204");

    let rows = vec![
        vec![120.0, 80.0, 95.0, 70.0, 36.6, 98.0],
        vec![120.0, 80.0],                              // wrong dimension
        vec![120.0, 80.0, f32::NAN, 70.0, 36.6, 98.0],  // non-finite
        vec![180.0, 115.0, 210.0, 110.0, 38.5, 88.0],
    ];

    let results = monitor.assess_batch(&patient, &rows);
    assert!(results[0].is_ok());
    assert!(matches!(
        results[1].as_ref().unwrap_err(),
        VigilError::Input(InputError::DimensionMismatch { .. })
    ));
    assert!(matches!(
        results[2].as_ref().unwrap_err(),
        VigilError::Input(InputError::NonFinite { index: 2, .. })
    ));
    assert!(results[3].is_ok());

    // Only the two valid rows advanced history; the last one wins.
    assert_eq!(monitor.history().len(), 1);
    let last = monitor.history().last(&patient).unwrap();
    assert_eq!(monitor.tiers().tier_of(last), Tier::Critical);
}

#[test]
fn distinct_patients_share_nothing_but_the_model() {
    let monitor = fitted_monitor();
    let stable_row = [120.0, 80.0, 95.0, 70.0, 36.6, 98.0];
    let critical_row = [180.0, 115.0, 210.0, 110.0, 38.5, 88.0];

    // Interleave two patients bouncing between states.
    for _ in 0..3 {
        monitor
            .assess(&PatientId::from("alice"), &stable_row)
            .unwrap();
        monitor
            .assess(&PatientId::from("bob"), &critical_row)
            .unwrap();
    }

    // Alice has only ever been stable; her next reading is plain status.
    let alice = monitor
        .assess(&PatientId::from("alice"), &stable_row)
        .unwrap();
    assert_eq!(alice.alert.kind, AlertKind::Status);
    assert_eq!(alice.alert.tier, Tier::Stable);

    // Bob has only ever been critical; no escalation fires for him.
    let bob = monitor
        .assess(&PatientId::from("bob"), &critical_row)
        .unwrap();
    assert_eq!(bob.alert.kind, AlertKind::Status);
    assert_eq!(bob.alert.tier, Tier::Critical);
}

//! End-to-end pipeline tests over recording mocks: step ordering and
//! failure short-circuiting.

#![allow(clippy::expect_used)]

use docship::application::services::deploy;
use docship::domain::{CommandFailed, DeployConfig};

use crate::mocks::{CloudRecorder, NullReporter, OUTPUTS_PRIMARY_ONLY, OUTPUTS_WITH_FAILOVER};

#[tokio::test]
async fn pipeline_runs_steps_in_order() {
    let cloud = CloudRecorder::new(OUTPUTS_PRIMARY_ONLY);
    let config = DeployConfig::default();

    let summary = deploy::deploy(&cloud, &cloud, &cloud, &cloud, &NullReporter, &config)
        .await
        .expect("deploy should succeed");

    assert_eq!(
        cloud.recorded(),
        [
            "build",
            "init",
            "apply",
            "read-outputs",
            "sync app/build s3://site-a",
            "rewrite s3://site-a/ text/html; charset=utf-8",
            "create-invalidation EABC123 /*",
            "wait EABC123 I1234567890",
        ]
    );
    assert_eq!(summary.outputs.bucket_name, "site-a");
    assert_eq!(summary.outputs.distribution_id, "EABC123");
    assert_eq!(summary.invalidation_id, "I1234567890");
}

#[tokio::test]
async fn pipeline_makes_exactly_one_call_per_step() {
    let cloud = CloudRecorder::new(OUTPUTS_PRIMARY_ONLY);
    let config = DeployConfig::default();

    deploy::deploy(&cloud, &cloud, &cloud, &cloud, &NullReporter, &config)
        .await
        .expect("deploy should succeed");

    let calls = cloud.recorded();
    let count = |prefix: &str| calls.iter().filter(|c| c.starts_with(prefix)).count();
    assert_eq!(count("build"), 1);
    assert_eq!(count("apply"), 1);
    assert_eq!(count("sync "), 1);
    assert_eq!(count("create-invalidation"), 1);
}

#[tokio::test]
async fn pipeline_publishes_failover_when_present() {
    let cloud = CloudRecorder::new(OUTPUTS_WITH_FAILOVER);
    let config = DeployConfig::default();

    deploy::deploy(&cloud, &cloud, &cloud, &cloud, &NullReporter, &config)
        .await
        .expect("deploy should succeed");

    let calls = cloud.recorded();
    let syncs: Vec<_> = calls.iter().filter(|c| c.starts_with("sync ")).collect();
    assert_eq!(
        syncs,
        ["sync app/build s3://site-a", "sync app/build s3://site-b"]
    );
    // The invalidation comes after both buckets are published.
    let last_sync = calls
        .iter()
        .rposition(|c| c.starts_with("sync "))
        .expect("sync recorded");
    let invalidation = calls
        .iter()
        .position(|c| c.starts_with("create-invalidation"))
        .expect("invalidation recorded");
    assert!(last_sync < invalidation);
}

#[tokio::test]
async fn failed_build_stops_the_pipeline() {
    let cloud = CloudRecorder::new(OUTPUTS_PRIMARY_ONLY).failing_at("build");
    let config = DeployConfig::default();

    let err = deploy::deploy(&cloud, &cloud, &cloud, &cloud, &NullReporter, &config)
        .await
        .expect_err("deploy should fail");

    assert_eq!(cloud.recorded(), ["build"]);
    let failed = err.downcast_ref::<CommandFailed>().expect("CommandFailed");
    assert_eq!(failed.program, "npm run build");
    assert_eq!(failed.code, Some(1));
}

#[tokio::test]
async fn failed_apply_stops_before_publishing() {
    let cloud = CloudRecorder::new(OUTPUTS_PRIMARY_ONLY).failing_at("apply");
    let config = DeployConfig::default();

    deploy::deploy(&cloud, &cloud, &cloud, &cloud, &NullReporter, &config)
        .await
        .expect_err("deploy should fail");

    assert_eq!(cloud.recorded(), ["build", "init", "apply"]);
}

#[tokio::test]
async fn failed_sync_stops_before_invalidation() {
    let cloud = CloudRecorder::new(OUTPUTS_PRIMARY_ONLY).failing_at("sync");
    let config = DeployConfig::default();

    deploy::deploy(&cloud, &cloud, &cloud, &cloud, &NullReporter, &config)
        .await
        .expect_err("deploy should fail");

    let calls = cloud.recorded();
    assert!(!calls.iter().any(|c| c.starts_with("create-invalidation")));
}

#[tokio::test]
async fn build_site_reports_progress() {
    let cloud = CloudRecorder::new(OUTPUTS_PRIMARY_ONLY);
    let reporter = crate::mocks::RecordingReporter::new();

    deploy::build_site(&cloud, &reporter)
        .await
        .expect("build should succeed");

    let events = reporter.recorded();
    assert_eq!(events[0], "step: building site...");
    assert_eq!(events[1], "success: build complete");
}

use std::path::Path;

use anyhow::Context;
use ecoscan_core::{
    application::{EcoScanClient, create_scan_client},
    domain::scan::{
        entities::{Classification, ScanResult},
        export::{SharePayload, export_file_name, export_json},
        history::ScanHistory,
        value_objects::{ImageData, mime_for_path},
    },
};
use tracing::{info, warn};
use url::Url;

use crate::args::ScanArgs;

/// Runs the scan client over every image path and prints a session summary.
pub async fn run(args: ScanArgs) -> Result<(), anyhow::Error> {
    let endpoint = Url::parse(&args.service_url).context("invalid analysis service url")?;
    let client = create_scan_client(endpoint.to_string());
    let history = ScanHistory::new();

    if let Some(output_dir) = &args.output_dir {
        tokio::fs::create_dir_all(output_dir)
            .await
            .with_context(|| format!("cannot create {}", output_dir.display()))?;
    }

    for path in &args.images {
        let Some(result) = scan_file(&client, &history, path).await else {
            continue;
        };

        println!(
            "{}: {} ({}, {}% confidence)",
            path.display(),
            result.object_name,
            result.classification,
            result.confidence
        );

        if let Some(output_dir) = &args.output_dir {
            write_report(output_dir, &result).await;
        }

        if let Some(share_url) = &args.share_url {
            println!("{}", SharePayload::new(&result, share_url.clone()).clipboard_text());
        }
    }

    print_summary(&history);
    Ok(())
}

async fn scan_file(
    client: &EcoScanClient,
    history: &ScanHistory,
    path: &Path,
) -> Option<ScanResult> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("Skipping {}: {}", path.display(), e);
            return None;
        }
    };

    if bytes.is_empty() {
        warn!("Skipping {}: no image data", path.display());
        return None;
    }

    let image = ImageData::from_bytes(&bytes, mime_for_path(path));
    Some(client.scan(image, history).await)
}

/// Writes the JSON report of one result. Failures are logged and the batch
/// continues.
async fn write_report(output_dir: &Path, result: &ScanResult) {
    let report_path = output_dir.join(export_file_name(result));
    let report = match export_json(result) {
        Ok(report) => report,
        Err(e) => {
            warn!("Skipping report for {}: {}", result.object_name, e);
            return;
        }
    };

    match tokio::fs::write(&report_path, report).await {
        Ok(()) => info!(report = %report_path.display(), "Report written"),
        Err(e) => warn!("Cannot write {}: {}", report_path.display(), e),
    }
}

fn print_summary(history: &ScanHistory) {
    if history.is_empty() {
        println!("No images were scanned");
        return;
    }

    let counts = history.summary();
    println!("Scan history ({}):", history.len());
    for result in history.entries() {
        println!(
            "  {}  {} [{}]",
            result.timestamp.format("%b %d %H:%M"),
            result.object_name,
            result.classification
        );
    }
    for classification in Classification::ALL {
        println!(
            "  {}: {}",
            classification,
            counts.get(&classification).copied().unwrap_or(0)
        );
    }
}

//! Integration test: local vendor-like HTTP server, real curl transport.
//!
//! Sweeps an ID range, downloads the valid files, and checks the tracking
//! file lets a second run skip everything it already found.

mod common;

use common::vendor_server::{self, ServedFile};
use dlprobe_core::config::ProbeConfig;
use dlprobe_core::fetch::{CurlFetcher, FetchError, Fetcher};
use dlprobe_core::filename::resolve_filename;
use dlprobe_core::pipeline::{Pipeline, UrlOutcome};
use dlprobe_core::probe::{self, Validity};
use dlprobe_core::source::UrlSource;
use std::collections::HashMap;
use std::fs;
use tempfile::tempdir;

fn served() -> HashMap<u64, ServedFile> {
    let mut files = HashMap::new();
    files.insert(
        2,
        ServedFile {
            content_type: "application/pdf",
            content_disposition: Some(&b"attachment; filename=\"Ghost Manual v2.PDF\""[..]),
            body: b"%PDF-1.7 ghost manual".to_vec(),
        },
    );
    files.insert(
        5,
        ServedFile {
            content_type: "application/zip",
            content_disposition: None,
            body: (0u8..=255).cycle().take(32 * 1024).collect(),
        },
    );
    files
}

fn config(dir: &std::path::Path, base_url: &str) -> ProbeConfig {
    ProbeConfig {
        base_url: base_url.to_string(),
        id_range_start: 1,
        id_range_end: 6,
        output_dir: dir.join("Assets"),
        tracking_file: Some(dir.join("downloads.txt")),
        download: true,
        ..ProbeConfig::default()
    }
}

#[test]
fn sweep_downloads_valid_files_and_tracks_them() {
    let base = vendor_server::start(served());
    let base_url = format!("{base}/?download=");
    let dir = tempdir().unwrap();
    let cfg = config(dir.path(), &base_url);
    let source = UrlSource::range(&cfg.base_url, cfg.id_range_start, cfg.id_range_end);

    let mut pipeline = Pipeline::new(&cfg, CurlFetcher::new(&cfg.http)).unwrap();
    let summary = pipeline.run(&source);
    assert_eq!(summary.probed, 6);
    assert_eq!(summary.valid, 2);
    assert_eq!(summary.invalid, 4);
    assert_eq!(summary.downloaded, 2);
    assert_eq!(summary.failed, 0);

    let assets = dir.path().join("Assets");
    assert_eq!(
        fs::read(assets.join("ghost_manual_v2.pdf")).unwrap(),
        b"%PDF-1.7 ghost manual"
    );
    let zip = fs::read(assets.join("download.zip")).unwrap();
    assert_eq!(zip.len(), 32 * 1024);

    let tracked = fs::read_to_string(dir.path().join("downloads.txt")).unwrap();
    assert_eq!(tracked, format!("{base_url}2\n{base_url}5\n"));

    // Second run: the two tracked URLs are skipped, nothing new is saved.
    let mut again = Pipeline::new(&cfg, CurlFetcher::new(&cfg.http)).unwrap();
    let second = again.run(&source);
    assert_eq!(second.skipped, 2);
    assert_eq!(second.probed, 4);
    assert_eq!(second.valid, 0);
}

#[test]
fn placeholder_page_is_invalid() {
    let base = vendor_server::start(served());
    let fetcher = CurlFetcher::default();
    let resp = fetcher.get(&format!("{base}/?download=3")).unwrap();
    assert_eq!(resp.status, 200);
    assert_eq!(probe::classify(&resp, "Invalid download."), Validity::Invalid);
    assert_eq!(resp.body, vendor_server::PLACEHOLDER.as_bytes());
}

#[test]
fn redirect_uses_final_response_headers() {
    let base = vendor_server::start(served());
    let fetcher = CurlFetcher::default();
    let url = format!("{base}/redirect/2");
    let resp = fetcher.get(&url).unwrap();
    assert_eq!(resp.headers.content_type(), Some("application/pdf"));
    assert_eq!(probe::classify(&resp, "Invalid download."), Validity::Valid);
    assert_eq!(resolve_filename(&resp.headers, &resp.url), "ghost_manual_v2.pdf");
}

#[test]
fn latin1_content_disposition_is_kept() {
    let mut files = HashMap::new();
    files.insert(
        7,
        ServedFile {
            content_type: "application/pdf",
            content_disposition: Some(&b"attachment; filename=\"Manual Caf\xe9 v2.pdf\""[..]),
            body: b"%PDF-1.4 cafe".to_vec(),
        },
    );
    let base = vendor_server::start(files);
    let fetcher = CurlFetcher::default();
    let resp = fetcher.get(&format!("{base}/?download=7")).unwrap();
    assert_eq!(
        resp.headers.content_disposition(),
        Some("attachment; filename=\"Manual Caf\u{fffd} v2.pdf\"")
    );
    assert_eq!(resolve_filename(&resp.headers, &resp.url), "manual_caf_v2.pdf");
}

#[test]
fn http_error_is_reported_per_url() {
    let base = vendor_server::start(served());
    let fetcher = CurlFetcher::default();
    match fetcher.get(&format!("{base}/missing")) {
        Err(FetchError::Http { status, .. }) => assert_eq!(status, 404),
        other => panic!("expected HTTP 404, got {other:?}"),
    }

    let dir = tempdir().unwrap();
    let mut cfg = config(dir.path(), &format!("{base}/?download="));
    cfg.tracking_file = None;
    let mut pipeline = Pipeline::new(&cfg, fetcher).unwrap();
    let source = UrlSource::list([format!("{base}/missing"), format!("{base}/?download=2")]);
    let mut outcomes = Vec::new();
    let summary = pipeline.run_with(&source, |_, o| outcomes.push(o.clone()));
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.downloaded, 1);
    assert!(matches!(outcomes[1], UrlOutcome::Valid { saved: Some(_) }));
}

#[test]
fn connection_refused_is_a_curl_error() {
    // Bind then drop to get a port nobody listens on.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let fetcher = CurlFetcher::default();
    match fetcher.get(&format!("http://127.0.0.1:{port}/?download=1")) {
        Err(FetchError::Curl(_)) => {}
        other => panic!("expected curl error, got {other:?}"),
    }
}

//! Tests for the per-URL confirmation lines and the completion line.
//!
//! A global logger can only be installed once per process, so this file holds a
//! single test that owns the capturing logger.

use std::sync::Mutex;

use httptest::{matchers::*, responders::*, Expectation, Server};
use log::{Level, LevelFilter, Log, Metadata, Record};
use sitemap_validator::{run_validation, Config};

struct CaptureLogger {
    lines: Mutex<Vec<String>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Info && metadata.target().starts_with("sitemap_validator")
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut lines) = self.lines.lock() {
                lines.push(record.args().to_string());
            }
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    lines: Mutex::new(Vec::new()),
};

fn is_seconds(value: &str) -> bool {
    value.parse::<f64>().is_ok() && value.split_once('.').map(|(_, frac)| frac.len()) == Some(3)
}

#[tokio::test]
async fn test_confirmation_and_completion_lines() {
    log::set_logger(&LOGGER).expect("No other logger in this test binary");
    log::set_max_level(LevelFilter::Info);

    let server = Server::run();
    let base = format!("http://{}", server.addr());
    server.expect(
        Expectation::matching(request::method_path("GET", "/sitemap.xml")).respond_with(
            status_code(200).body(format!(
                "<urlset><url><loc>{base}/one</loc></url><url><loc>{base}/two</loc></url>\
                 <url><loc>{base}/broken</loc></url></urlset>"
            )),
        ),
    );
    for path in ["/one", "/two"] {
        server.expect(
            Expectation::matching(request::method_path("GET", path))
                .respond_with(status_code(200).body("ok")),
        );
    }
    server.expect(
        Expectation::matching(request::method_path("GET", "/broken"))
            .respond_with(status_code(500)),
    );

    let config = Config {
        base_url: base.clone(),
        max_concurrency: 2,
        ..Default::default()
    };
    let report = run_validation(config).await.expect("Run should succeed");
    assert_eq!(report.successful, 2);

    let lines = LOGGER.lines.lock().expect("Logger mutex").clone();

    for path in ["/one", "/two"] {
        let prefix = format!("'{base}{path}' fetched in ");
        let matching: Vec<&String> = lines.iter().filter(|l| l.starts_with(&prefix)).collect();
        assert_eq!(matching.len(), 1, "confirmation for {path} in {lines:?}");
        let secs = matching[0]
            .strip_prefix(&prefix)
            .and_then(|rest| rest.strip_suffix('s'))
            .expect("Confirmation ends with seconds");
        assert!(is_seconds(secs), "bad seconds in {:?}", matching[0]);
    }
    assert!(
        !lines.iter().any(|l| l.contains("/broken' fetched in")),
        "failed URL must not be confirmed: {lines:?}"
    );

    let completions: Vec<&String> = lines
        .iter()
        .filter(|l| l.starts_with("Validation complete in: "))
        .collect();
    assert_eq!(completions.len(), 1, "{lines:?}");
    let secs = completions[0]
        .strip_prefix("Validation complete in: ")
        .and_then(|rest| rest.strip_suffix(" sec."))
        .expect("Completion line ends with sec.");
    assert!(is_seconds(secs), "bad seconds in {:?}", completions[0]);
}

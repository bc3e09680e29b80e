use farmgrid_core::models::{ColorSample, Dataset, Point};
use std::time::Duration;

/// Outcome of a single record upload.
///
/// Per-record failures are data, not errors: the upload loop continues past
/// every rejected or unreachable record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// HTTP 200, any body.
    Accepted,
    /// Any non-200 status, with the response body for the log line.
    Rejected { status: u16, body: String },
    /// Transport-level failure: timeout, connection refused, DNS failure.
    Unreachable { message: String },
}

/// Which record group an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Point,
    Color,
}

/// One per-record notification emitted by `upload_dataset`.
#[derive(Debug, Clone)]
pub struct UploadEvent {
    pub kind: RecordKind,
    /// Human-readable record summary (garden/point ids or coordinates).
    pub label: String,
    pub outcome: UploadOutcome,
}

/// Per-group delivery counters.
///
/// Exists for tests and summary display only; it never feeds the process
/// exit code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UploadReport {
    pub points_accepted: usize,
    pub points_rejected: usize,
    pub points_unreachable: usize,
    pub colors_accepted: usize,
    pub colors_rejected: usize,
    pub colors_unreachable: usize,
}

impl UploadReport {
    pub fn total(&self) -> usize {
        self.points_accepted
            + self.points_rejected
            + self.points_unreachable
            + self.colors_accepted
            + self.colors_rejected
            + self.colors_unreachable
    }

    fn record(&mut self, kind: RecordKind, outcome: &UploadOutcome) {
        let slot = match (kind, outcome) {
            (RecordKind::Point, UploadOutcome::Accepted) => &mut self.points_accepted,
            (RecordKind::Point, UploadOutcome::Rejected { .. }) => &mut self.points_rejected,
            (RecordKind::Point, UploadOutcome::Unreachable { .. }) => &mut self.points_unreachable,
            (RecordKind::Color, UploadOutcome::Accepted) => &mut self.colors_accepted,
            (RecordKind::Color, UploadOutcome::Rejected { .. }) => &mut self.colors_rejected,
            (RecordKind::Color, UploadOutcome::Unreachable { .. }) => &mut self.colors_unreachable,
        };
        *slot += 1;
    }
}

/// HTTP client for the farm API's seed-upload endpoints.
pub struct Uploader {
    /// Base URL for the farm API (e.g., "http://localhost:3000")
    base_url: String,

    /// Per-request timeout
    timeout: Duration,

    /// HTTP client
    client: reqwest::Client,
}

impl Uploader {
    /// Create a new uploader
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            timeout,
            client: reqwest::Client::new(),
        }
    }

    /// Create with the original tool's defaults: localhost API, 5s timeout
    pub fn localhost() -> Self {
        Self::new("http://localhost:3000", Duration::from_secs(5))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Upload one boundary point.
    pub async fn upload_point(&self, point: &Point) -> UploadOutcome {
        self.post("api/upload_point", point).await
    }

    /// Upload one color sample.
    pub async fn upload_color(&self, color: &ColorSample) -> UploadOutcome {
        self.post("api/upload_color", color).await
    }

    /// Upload every record in the dataset, points first, then colors, in
    /// file order. Strictly sequential, one request per record, no retries.
    ///
    /// `on_event` is invoked once per record with its outcome; the returned
    /// report carries the per-group counters.
    pub async fn upload_dataset(
        &self,
        dataset: &Dataset,
        mut on_event: impl FnMut(UploadEvent),
    ) -> UploadReport {
        let mut report = UploadReport::default();

        for point in &dataset.points {
            let outcome = self.upload_point(point).await;
            report.record(RecordKind::Point, &outcome);
            on_event(UploadEvent {
                kind: RecordKind::Point,
                label: format!("garden {} | point {}", point.garden_id, point.point_no),
                outcome,
            });
        }

        for color in &dataset.colors {
            let outcome = self.upload_color(color).await;
            report.record(RecordKind::Color, &outcome);
            on_event(UploadEvent {
                kind: RecordKind::Color,
                label: format!(
                    "garden {}, cell @ ({},{})",
                    color.garden_id, color.latitude, color.longitude
                ),
                outcome,
            });
        }

        report
    }

    async fn post<T: serde::Serialize>(&self, endpoint: &str, body: &T) -> UploadOutcome {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), endpoint);
        tracing::debug!("POST {}", url);

        let response = match self
            .client
            .post(&url)
            .timeout(self.timeout)
            .json(body)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                return UploadOutcome::Unreachable {
                    message: e.to_string(),
                }
            }
        };

        let status = response.status().as_u16();
        if status == 200 {
            UploadOutcome::Accepted
        } else {
            // The body is part of the failure log line; an unreadable body
            // still counts as a rejection.
            let body = response.text().await.unwrap_or_default();
            UploadOutcome::Rejected { status, body }
        }
    }
}

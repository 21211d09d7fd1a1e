use std::time::Duration;

use actix_cors::Cors;
use actix_web::{get, post, web, App, HttpResponse, HttpServer, Responder};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info};

use textprep_core::analysis::normalizer::Normalizer;
use textprep_core::analysis::statistics::{statistics, TextStatistics};
use textprep_core::analysis::summary::summarize;

/// Web form served at `/`.
const INDEX_HTML: &str = include_str!("index.html");

/// Timeout applied to every document fetch.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Sentences kept in the extractive summary.
const SUMMARY_SENTENCES: usize = 3;

/// Failures of the document-fetch collaborator.
///
/// These never originate in the core; they are mapped to structured
/// failure responses at the handler level.
#[derive(Error, Debug)]
enum FetchError {
	#[error("URL must point to a .txt file")]
	NotText,

	#[error("Error fetching URL: {0}")]
	Request(#[from] reqwest::Error),
}

/// Request body for `/api/clean`.
///
/// `url` is optional so a missing field produces the structured 400
/// response rather than a deserializer error.
#[derive(Deserialize)]
struct CleanRequest {
	url: Option<String>,
}

/// Request body for `/api/analyze`.
#[derive(Deserialize)]
struct AnalyzeRequest {
	text: Option<String>,
}

#[derive(Serialize)]
struct CleanResponse {
	success: bool,
	cleaned_text: String,
	statistics: TextStatistics,
	summary: String,
}

#[derive(Serialize)]
struct AnalyzeResponse {
	success: bool,
	statistics: TextStatistics,
}

#[derive(Serialize)]
struct HealthResponse {
	status: &'static str,
	message: &'static str,
}

#[derive(Serialize)]
struct ErrorResponse {
	success: bool,
	error: String,
}

impl ErrorResponse {
	fn new(error: impl Into<String>) -> Self {
		Self { success: false, error: error.into() }
	}
}

/// Fetches raw text from a `.txt` URL.
///
/// The URL shape is validated before any network call; transport
/// failures and non-success statuses surface as [`FetchError::Request`].
async fn fetch_text(url: &str) -> Result<String, FetchError> {
	if !url.to_lowercase().ends_with(".txt") {
		return Err(FetchError::NotText);
	}

	let client = reqwest::Client::builder().timeout(FETCH_TIMEOUT).build()?;
	let response = client.get(url).send().await?.error_for_status()?;
	Ok(response.text().await?)
}

/// HTTP GET endpoint `/`
///
/// Serves a simple HTML form for URL input.
#[get("/")]
async fn home() -> impl Responder {
	HttpResponse::Ok()
		.content_type("text/html; charset=utf-8")
		.body(INDEX_HTML)
}

/// HTTP GET endpoint `/health`
#[get("/health")]
async fn health() -> impl Responder {
	HttpResponse::Ok().json(HealthResponse {
		status: "healthy",
		message: "Text preprocessing service is running",
	})
}

/// HTTP POST endpoint `/api/clean`
///
/// Accepts `{"url": "...txt"}`, fetches the document, and returns the
/// normalized text together with statistics and a summary:
/// `{"success", "cleaned_text", "statistics", "summary"}`.
#[post("/api/clean")]
async fn clean_from_url(
	normalizer: web::Data<Normalizer>,
	request: web::Json<CleanRequest>,
) -> impl Responder {
	let url = match &request.url {
		Some(url) if !url.trim().is_empty() => url.trim().to_owned(),
		_ => {
			return HttpResponse::BadRequest()
				.json(ErrorResponse::new("Missing 'url' in request JSON"));
		}
	};

	if !url.to_lowercase().ends_with(".txt") {
		return HttpResponse::BadRequest()
			.json(ErrorResponse::new("URL must point to a .txt file"));
	}

	info!("Fetching document from {url}");
	let raw_text = match fetch_text(&url).await {
		Ok(text) => text,
		Err(e) => {
			error!("Fetch failed: {e}");
			return HttpResponse::InternalServerError()
				.json(ErrorResponse::new(format!("Server error: {e}")));
		}
	};

	let cleaned = normalizer.clean(&raw_text);
	let normalized = normalizer.normalize(&cleaned, true);
	let stats = statistics(&normalized);
	let summary = summarize(&normalized, SUMMARY_SENTENCES);

	HttpResponse::Ok().json(CleanResponse {
		success: true,
		cleaned_text: normalized,
		statistics: stats,
		summary,
	})
}

/// HTTP POST endpoint `/api/analyze`
///
/// Accepts `{"text": "..."}` and returns statistics only:
/// `{"success", "statistics"}`.
#[post("/api/analyze")]
async fn analyze_text(
	normalizer: web::Data<Normalizer>,
	request: web::Json<AnalyzeRequest>,
) -> impl Responder {
	let raw_text = match &request.text {
		Some(text) => text.trim().to_owned(),
		None => {
			return HttpResponse::BadRequest()
				.json(ErrorResponse::new("Missing 'text' in request JSON"));
		}
	};

	if raw_text.is_empty() {
		return HttpResponse::BadRequest()
			.json(ErrorResponse::new("Text input cannot be empty"));
	}

	let normalized = normalizer.normalize(&raw_text, true);
	let stats = statistics(&normalized);

	HttpResponse::Ok().json(AnalyzeResponse { success: true, statistics: stats })
}

/// Fallback for unknown routes, keeping the error shape JSON.
async fn not_found() -> impl Responder {
	HttpResponse::NotFound().json(ErrorResponse::new("Endpoint not found"))
}

/// Main entry point for the server.
///
/// Builds the shared `Normalizer` once (it is immutable, so no lock is
/// needed) and starts an Actix-web HTTP server with the form, health,
/// and API endpoints.
///
/// # Notes
/// - The server binds to 127.0.0.1:5000.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	tracing_subscriber::fmt::init();

	let normalizer = Normalizer::new().map_err(std::io::Error::other)?;
	let shared_normalizer = web::Data::new(normalizer);

	info!("Starting text preprocessing service on http://127.0.0.1:5000");

	HttpServer::new(move || {
		App::new()
			.wrap(Cors::permissive())
			.app_data(shared_normalizer.clone())
			.service(home)
			.service(health)
			.service(clean_from_url)
			.service(analyze_text)
			.default_service(web::route().to(not_found))
	})
		.bind(("127.0.0.1", 5000))?
		.run()
		.await
}

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use actix_cors::Cors;
use actix_web::{App, HttpResponse, HttpServer, Responder, get, put, web};
use clap::Parser;
use serde::Deserialize;

use synopsis_gen_core::io::{get_filename, list_files, normalize_folder, resolve_corpora};
use synopsis_gen_core::model::generation_input::{DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH};
use synopsis_gen_core::{GenerationInput, SAMPLE_CORPUS, SynopsisGenerator, SynopsisResult};

/// Extension of corpus files in the data directory.
const CORPUS_EXTENSION: &str = "txt";

/// HTTP service exposing a bigram synopsis generator.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
	/// Address to bind.
	#[arg(long, default_value = "127.0.0.1")]
	host: String,

	/// Port to bind.
	#[arg(short, long, default_value_t = 5000)]
	port: u16,

	/// Directory holding `.txt` corpora.
	#[arg(short, long, default_value = "./data")]
	data_dir: String,

	/// Comma-separated corpus names to train on at startup.
	#[arg(short, long)]
	corpora: Option<String>,

	/// Train on the bundled sample corpus at startup.
	#[arg(long)]
	sample: bool,
}

/// Query parameters for the `/v1/generate` endpoint
#[derive(Deserialize)]
struct GenerateParams {
	max_length: Option<usize>,
	min_length: Option<usize>,
}

impl GenerateParams {
	fn input(&self) -> SynopsisResult<GenerationInput> {
		GenerationInput::new(
			self.max_length.unwrap_or(DEFAULT_MAX_LENGTH),
			self.min_length.unwrap_or(DEFAULT_MIN_LENGTH),
		)
	}
}

#[derive(Deserialize)]
struct PreviewQuery {
	size: Option<usize>,
}

#[derive(Deserialize)]
struct CorporaQuery {
	names: Option<String>,
}

struct SharedData {
	generator: SynopsisGenerator,
	data_dir: PathBuf,
}

/// Splits `"a, b,,c"` into `["a", "b", "c"]`.
fn split_names(names: &str) -> Vec<&str> {
	names.split(',').map(str::trim).filter(|s| !s.is_empty()).collect()
}

/// HTTP GET endpoint `/v1/generate`
///
/// Generates one synopsis from the current model.
#[get("/v1/generate")]
async fn get_generated(data: web::Data<Mutex<SharedData>>, query: web::Query<GenerateParams>) -> impl Responder {
	let input = match query.input() {
		Ok(input) => input,
		Err(e) => return HttpResponse::BadRequest().body(e.to_string()),
	};

	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};

	HttpResponse::Ok().body(shared_data.generator.generate(&input))
}

#[get("/v1/stats")]
async fn get_stats(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};
	HttpResponse::Ok().json(shared_data.generator.stats())
}

#[get("/v1/preview")]
async fn get_preview(data: web::Data<Mutex<SharedData>>, query: web::Query<PreviewQuery>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};
	HttpResponse::Ok().body(shared_data.generator.preview(query.size.unwrap_or(10)))
}

#[get("/v1/corpora")]
async fn get_corpora(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let data_dir = match data.lock() {
		Ok(m) => m.data_dir.clone(),
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};

	let files = match list_files(&data_dir, CORPUS_EXTENSION) {
		Ok(files) => files,
		Err(_) => return HttpResponse::InternalServerError().body("Failed to list corpora"),
	};
	let names: Vec<String> = files.iter().filter_map(|file| get_filename(file).ok()).collect();
	HttpResponse::Ok().body(names.join("\n"))
}

/// HTTP PUT endpoint `/v1/train`
///
/// Retrains the model from the request body. The previous model is kept
/// if the body is not valid text.
#[put("/v1/train")]
async fn put_train(data: web::Data<Mutex<SharedData>>, body: web::Bytes) -> impl Responder {
	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};

	match shared_data.generator.train_bytes(&body) {
		Ok(()) => HttpResponse::Ok().json(shared_data.generator.stats()),
		Err(e) => HttpResponse::BadRequest().body(e.to_string()),
	}
}

#[put("/v1/load_corpora")]
async fn put_corpora(data: web::Data<Mutex<SharedData>>, query: web::Query<CorporaQuery>) -> impl Responder {
	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};

	let names = match &query.names {
		Some(s) if !split_names(s).is_empty() => split_names(s),
		_ => return HttpResponse::BadRequest().body("Missing or empty corpus name"),
	};

	let paths = match resolve_corpora(&shared_data.data_dir, &names, CORPUS_EXTENSION) {
		Ok(paths) => paths,
		Err(e) => return HttpResponse::NotFound().body(e.to_string()),
	};

	match shared_data.generator.train_files(&paths) {
		Ok(()) => HttpResponse::Ok().json(shared_data.generator.stats()),
		Err(e) => HttpResponse::InternalServerError().body(format!("Failed to train: {e}")),
	}
}

fn configure(cfg: &mut web::ServiceConfig) {
	cfg.service(get_generated)
		.service(get_stats)
		.service(get_preview)
		.service(get_corpora)
		.service(put_train)
		.service(put_corpora);
}

/// Builds the initial generator from the startup arguments.
fn initial_generator(args: &Args, data_dir: &Path) -> SynopsisResult<SynopsisGenerator> {
	let mut generator = SynopsisGenerator::new();
	if let Some(corpora) = &args.corpora {
		let paths = resolve_corpora(data_dir, &split_names(corpora), CORPUS_EXTENSION)?;
		generator.train_files(&paths)?;
	} else if args.sample {
		generator.train(SAMPLE_CORPUS);
	}
	Ok(generator)
}

/// Main entry point for the server.
///
/// Trains the initial model, wraps it in a `Mutex` shared by all workers
/// and starts an Actix-web HTTP server.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init();
	let args = Args::parse();

	let data_dir = normalize_folder(&args.data_dir);
	let generator = initial_generator(&args, &data_dir)
		.map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

	log::info!("serving on {}:{} (corpora in {})", args.host, args.port, data_dir.display());
	let shared_model = web::Data::new(Mutex::new(SharedData { generator, data_dir }));

	HttpServer::new(move || {
		App::new()
			.wrap(Cors::permissive())
			.app_data(shared_model.clone())
			.configure(configure)
	})
		.bind((args.host.as_str(), args.port))?
		.run()
		.await
}

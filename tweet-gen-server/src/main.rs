use std::io;
use std::path::PathBuf;

use actix_cors::Cors;
use actix_web::{App, HttpResponse, HttpServer, Responder, get, web};
use clap::Parser;
use log::{error, info};
use serde::Deserialize;
use tweet_gen_core::ModelError;
use tweet_gen_core::model::{GenerationConfig, Generator, Sentence, WordBudget};

/// Upper bound on the sentences served by a single request.
const MAX_SENTENCES_PER_REQUEST: usize = 1000;

/// Upper bound on the words of one sentence served by a single request.
const MAX_WORDS_PER_REQUEST: usize = 200;

/// Serves tweets generated from every corpus of a folder.
#[derive(Debug, Parser)]
#[command(name = "tweet-gen-server", version)]
struct Args {
	/// Address to bind
	#[arg(long, default_value = "127.0.0.1:5000")]
	bind: String,

	/// Folder holding the `.txt` corpora
	#[arg(long, default_value = "./data")]
	data: PathBuf,

	/// Maximum number of distinct words read per corpus (0 reads everything)
	#[arg(long, default_value_t = 0)]
	word_budget: usize,
}

/// Query parameters of `/v1/generate` besides the `GenerationConfig` ones
#[derive(Deserialize)]
struct GenerateParams {
	corpus: String,
	seed: Option<u64>, // random if absent, echoed in X-Seed
}

#[derive(Deserialize)]
struct CorpusQuery {
	corpus: String,
}

/// Maps a library error to the matching HTTP status.
fn error_response(e: ModelError) -> HttpResponse {
	match e {
		ModelError::UnknownCorpus(_) => HttpResponse::NotFound().body(e.to_string()),
		ModelError::InvalidConfig(_) => HttpResponse::BadRequest().body(e.to_string()),
		ModelError::EmptyModel | ModelError::NoStartWordAvailable => {
			HttpResponse::UnprocessableEntity().body(e.to_string())
		}
		_ => {
			error!("generation failed: {e}");
			HttpResponse::InternalServerError().body(e.to_string())
		}
	}
}

/// One sentence per line, keeping line breaks carried by the last word.
fn render(sentences: &[Sentence]) -> String {
	let mut body = String::new();
	for sentence in sentences {
		body.push_str(&sentence.to_string());
		if !sentence.ends_with_line_break() {
			body.push('\n');
		}
	}
	body
}

/// HTTP GET endpoint `/v1/generate`
///
/// Generates `sentence_count` sentences from `corpus`. The model is shared
/// read-only; each request seeds its own random source.
#[get("/v1/generate")]
async fn get_generated(
	data: web::Data<Generator>,
	query: web::Query<GenerateParams>,
	config: web::Query<GenerationConfig>,
) -> impl Responder {
	if config.sentence_count > MAX_SENTENCES_PER_REQUEST {
		return HttpResponse::BadRequest()
			.body(format!("sentence_count must be <= {MAX_SENTENCES_PER_REQUEST}"));
	}
	if config.max_words > MAX_WORDS_PER_REQUEST {
		return HttpResponse::BadRequest().body(format!("max_words must be <= {MAX_WORDS_PER_REQUEST}"));
	}

	let seed = query.seed.unwrap_or_else(rand::random);
	match data.generate(&query.corpus, seed, &config) {
		Ok(sentences) => HttpResponse::Ok()
			.insert_header(("X-Seed", seed.to_string()))
			.body(render(&sentences)),
		Err(e) => error_response(e),
	}
}

#[get("/v1/corpora")]
async fn get_corpora(data: web::Data<Generator>) -> impl Responder {
	HttpResponse::Ok().body(data.corpus_names().join("\n"))
}

#[get("/v1/stats")]
async fn get_stats(data: web::Data<Generator>, query: web::Query<CorpusQuery>) -> impl Responder {
	match data.stats(&query.corpus) {
		Ok(stats) => HttpResponse::Ok().json(stats),
		Err(e) => error_response(e),
	}
}

fn routes(cfg: &mut web::ServiceConfig) {
	cfg.service(get_generated).service(get_corpora).service(get_stats);
}

/// Main entry point for the server.
///
/// Loads every corpus once, then serves them from all workers without
/// locking: the models are never mutated after loading.
#[actix_web::main]
async fn main() -> io::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
	let args = Args::parse();

	let generator = Generator::new(&args.data, WordBudget::from(args.word_budget)).map_err(io::Error::other)?;
	info!("serving {} corpora on {}", generator.corpus_names().len(), args.bind);
	let shared = web::Data::new(generator);

	HttpServer::new(move || {
		App::new()
			.wrap(Cors::default().allow_any_origin().allowed_methods(vec!["GET"]))
			.app_data(shared.clone())
			.configure(routes)
	})
	.workers(num_cpus::get())
	.bind(args.bind.as_str())?
	.run()
	.await
}

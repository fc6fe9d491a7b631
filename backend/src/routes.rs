use axum::{
	extract::State,
	http::{StatusCode, Uri},
	response::Html,
	routing::get,
	Router
};
use shared_data::resolve;
use tower_http::services::ServeDir;
use tracing::{error, info};

use crate::{config::Config, decorations::BalloonConfig, invitation_page::render};

const INVITATION_PREFIX: &str = "/invitation/";

#[derive(Clone)]
pub struct AppState {
	balloons: BalloonConfig
}

pub fn router(config: &Config) -> Router {
	let state = AppState { balloons: config.balloons.clone() };

	let mut app = Router::new()
		.route("/invitation", get(get_guest_invitation))
		.route("/invitation/", get(get_guest_invitation))
		.route("/invitation/:attendee_name", get(get_invitation));

	if let Some(dir) = &config.image_dir {
		app = app.nest_service("/images", ServeDir::new(dir));
	}

	app.fallback(not_found)
		.with_state(state)
}

// axum percent-decodes path captures (and 400s on bad utf-8), so we slice the segment out of the
// uri ourselves and let `resolve` do the only decode
pub async fn get_invitation(
	State(state): State<AppState>,
	uri: Uri
) -> Result<Html<String>, StatusCode> {
	invitation_page(&state, uri.path().strip_prefix(INVITATION_PREFIX))
}

pub async fn get_guest_invitation(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
	invitation_page(&state, None)
}

fn invitation_page(state: &AppState, raw: Option<&str>) -> Result<Html<String>, StatusCode> {
	let view = resolve(raw);
	let balloons = state.balloons.scatter(&mut rand::thread_rng());

	info!("Rendering invitation with greeting {:?}", view.attendee_greeting());

	render(&view, &balloons)
		.map(Html)
		.map_err(|e| {
			error!("{e}");
			StatusCode::INTERNAL_SERVER_ERROR
		})
}

async fn not_found() -> (StatusCode, &'static str) {
	(StatusCode::NOT_FOUND, "Nothing here :( try /invitation/{your name}")
}

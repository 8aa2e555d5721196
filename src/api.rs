use std::net::SocketAddr;

use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Redirect, Response};
use axum::{Json, Router};
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tracing::log;

use crate::fixture_service::FixtureService;
use crate::match_service::MatchService;
use crate::models_api::views::{
    FixtureView, FixturesView, HomeView, MatchView, NewsView, NotFoundView, PlayerView,
    PlayersView, TableView,
};
use crate::news_service::NewsService;
use crate::player_service::PlayerService;
use crate::routes::{self, View};
use crate::search;
use crate::standing_service::StandingService;

pub struct Api;
impl Api {
    pub async fn serve(port: u16) {
        // Every path goes through the same route table, so a single
        // fallback handler covers the whole surface.
        let app = Router::new()
            .fallback(Api::dispatch)
            .layer(ServiceBuilder::new()
                .layer(CompressionLayer::new())
            );
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        log::info!("[API] Listening on {}", addr);
        _ = axum::Server::bind(&addr)
            .serve(app.into_make_service())
            .await;
    }

    async fn dispatch(uri: Uri) -> Response {
        let path = uri.path();
        let query = uri.query();
        if path == "/search" {
            return Api::search(query);
        }
        let nav = routes::nav(path);
        match routes::resolve(path, query) {
            View::Home => Json(HomeView {
                nav,
                upcoming: FixtureService::read_all(),
                latest_results: MatchService::read_all(),
                tackle_leaders: PlayerService::tackle_leaders(3),
            }).into_response(),
            View::Fixtures => Json(FixturesView { nav, fixtures: FixtureService::read_all() }).into_response(),
            View::FixtureDetail(id) => match FixtureService::read(&id) {
                Some(fixture) => Json(FixtureView { nav, fixture }).into_response(),
                None => Api::not_found(path),
            },
            View::Table => Json(TableView { nav, rows: StandingService::read() }).into_response(),
            View::Players { query } => Json(PlayersView {
                nav,
                players: PlayerService::search(query.as_deref()),
                query,
            }).into_response(),
            View::PlayerDetail(id) => match id.parse().ok().and_then(PlayerService::read) {
                Some(player) => Json(PlayerView { nav, player }).into_response(),
                None => Api::not_found(path),
            },
            View::MatchDetail(id) => match MatchService::read(&id) {
                Some(result) => Json(MatchView { nav, result }).into_response(),
                None => Api::not_found(path),
            },
            View::News => Json(NewsView { nav, items: NewsService::read_all() }).into_response(),
            View::NotFound => Api::not_found(path),
        }
    }

    /// The search box redirect. Blank input is a no-op, not an error.
    fn search(query: Option<&str>) -> Response {
        let input = routes::query_param(query, "q").unwrap_or_default();
        match search::player_search_target(&input) {
            Some(target) => Redirect::to(&target).into_response(),
            None => StatusCode::NO_CONTENT.into_response(),
        }
    }

    fn not_found(path: &str) -> Response {
        log::debug!("[API] No view for {path}");
        (StatusCode::NOT_FOUND, Json(NotFoundView { nav: routes::nav(path), path: path.to_string() })).into_response()
    }
}

//! Single binary web server: player roster, dashboard and 5v5 team generation via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080).
//! Set ROSTER_PATH to a `.json` or `.csv` file to preload players.

use actix_web::{
    delete, get, post, put,
    web::{Data, Json, Path, Query},
    App, HttpResponse, HttpServer, Responder,
};
use lol_team_builder::{
    hall_of_fame, roster_overview, top_by_kda, top_by_losses, top_by_win_rate, top_by_wins,
    BalanceMode, NewPlayer, Player, PlayerUpdate, Roster, RosterOverview, SessionId,
    TeamSession, ToggleOutcome,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Per-session entry: session data + last activity time (for auto-cleanup).
struct SessionEntry {
    session: TeamSession,
    last_activity: Instant,
}

/// In-memory state: the shared roster and team-generation sessions by id.
struct AppData {
    roster: RwLock<Roster>,
    /// Roster loaded at startup, restored by `/api/players/restore-defaults`.
    defaults: Roster,
    sessions: RwLock<HashMap<SessionId, SessionEntry>>,
}

type AppState = Data<AppData>;

/// Inactivity threshold: sessions not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

/// Default number of entries per dashboard ranking.
const DEFAULT_LEADERBOARD_LIMIT: usize = 5;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LeaderboardResponse<'a> {
    overview: RosterOverview,
    top_win_rate: Vec<&'a Player>,
    top_kda: Vec<&'a Player>,
    top_wins: Vec<&'a Player>,
    top_losses: Vec<&'a Player>,
    hall_of_fame: Vec<&'a Player>,
}

#[derive(Serialize)]
struct ToggleResponse<'a> {
    outcome: ToggleOutcome,
    session: &'a TeamSession,
}

#[derive(Deserialize)]
struct SearchQuery {
    #[serde(default)]
    search: String,
}

#[derive(Deserialize)]
struct LeaderboardQuery {
    limit: Option<usize>,
}

#[derive(Deserialize)]
struct GenerateTeamsBody {
    #[serde(default)]
    mode: BalanceMode,
}

/// Path segment: player id (e.g. /api/players/{player_id})
#[derive(Deserialize)]
struct PlayerPath {
    player_id: String,
}

/// Path segment: session id (e.g. /api/sessions/{id})
#[derive(Deserialize)]
struct SessionPath {
    id: SessionId,
}

/// Path segments: session id and player id (e.g. /api/sessions/{id}/selection/{player_id})
#[derive(Deserialize)]
struct SessionPlayerPath {
    id: SessionId,
    player_id: String,
}

fn lock_error() -> HttpResponse {
    HttpResponse::InternalServerError().body("lock error")
}

fn bad_request(e: impl std::fmt::Display) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
}

fn no_session() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "No session" }))
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "lol-team-builder",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// List players, optionally filtered by `?search=`.
#[get("/api/players")]
async fn api_list_players(state: AppState, query: Query<SearchQuery>) -> HttpResponse {
    let roster = match state.roster.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    HttpResponse::Ok().json(roster.search(&query.search))
}

/// Register a new player.
#[post("/api/players")]
async fn api_add_player(state: AppState, body: Json<NewPlayer>) -> HttpResponse {
    let mut roster = match state.roster.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match roster.add_player(body.into_inner()) {
        Ok(p) => HttpResponse::Ok().json(p),
        Err(e) => bad_request(e),
    }
}

/// Full roster as a JSON array (download).
#[get("/api/players/export")]
async fn api_export_players(state: AppState) -> HttpResponse {
    let roster = match state.roster.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match roster.export_json() {
        Ok(json) => HttpResponse::Ok()
            .content_type("application/json")
            .insert_header(("Content-Disposition", "attachment; filename=\"lol-players.json\""))
            .body(json),
        Err(e) => bad_request(e),
    }
}

/// Drop players that left the roster from every session's selection.
fn reconcile_sessions(state: &AppData, roster: &Roster) -> Result<(), HttpResponse> {
    let mut sessions = match state.sessions.write() {
        Ok(guard) => guard,
        Err(_) => return Err(lock_error()),
    };
    let dropped: usize = sessions
        .values_mut()
        .map(|entry| entry.session.pool.retain_known(roster))
        .sum();
    if dropped > 0 {
        log::info!("Dropped {} stale selection(s) after roster change", dropped);
    }
    Ok(())
}

/// Replace the roster with an uploaded JSON array.
#[post("/api/players/import")]
async fn api_import_players(state: AppState, body: String) -> HttpResponse {
    let mut roster = match state.roster.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let count = match roster.import_json(&body) {
        Ok(count) => count,
        Err(e) => return bad_request(e),
    };
    if let Err(resp) = reconcile_sessions(&state, &roster) {
        return resp;
    }
    HttpResponse::Ok().json(serde_json::json!({ "imported": count }))
}

/// Remove every player from the roster.
#[post("/api/players/reset")]
async fn api_reset_players(state: AppState) -> HttpResponse {
    let mut roster = match state.roster.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    roster.clear();
    if let Err(resp) = reconcile_sessions(&state, &roster) {
        return resp;
    }
    HttpResponse::Ok().json(roster.players())
}

/// Restore the roster loaded from ROSTER_PATH at startup.
#[post("/api/players/restore-defaults")]
async fn api_restore_default_players(state: AppState) -> HttpResponse {
    let mut roster = match state.roster.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    roster.restore_from(&state.defaults);
    if let Err(resp) = reconcile_sessions(&state, &roster) {
        return resp;
    }
    HttpResponse::Ok().json(roster.players())
}

/// Partially update a player.
#[put("/api/players/{player_id}")]
async fn api_update_player(state: AppState, path: Path<PlayerPath>, body: Json<PlayerUpdate>) -> HttpResponse {
    let mut roster = match state.roster.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    if roster.get(&path.player_id).is_none() {
        return HttpResponse::NotFound().json(serde_json::json!({ "error": "Player not found" }));
    }
    match roster.update_player(&path.player_id, body.into_inner()) {
        Ok(p) => HttpResponse::Ok().json(p),
        Err(e) => bad_request(e),
    }
}

/// Delete a player; also drops them from any selection pool.
#[delete("/api/players/{player_id}")]
async fn api_remove_player(state: AppState, path: Path<PlayerPath>) -> HttpResponse {
    let removed = {
        let mut roster = match state.roster.write() {
            Ok(guard) => guard,
            Err(_) => return lock_error(),
        };
        match roster.remove_player(&path.player_id) {
            Ok(p) => p,
            Err(e) => return HttpResponse::NotFound().json(serde_json::json!({ "error": e.to_string() })),
        }
    };
    let mut sessions = match state.sessions.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    for entry in sessions.values_mut() {
        entry.session.pool.forget(&removed.id);
    }
    HttpResponse::Ok().json(removed)
}

/// Dashboard rankings and roster averages.
#[get("/api/leaderboard")]
async fn api_leaderboard(state: AppState, query: Query<LeaderboardQuery>) -> HttpResponse {
    let roster = match state.roster.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let limit = query.limit.unwrap_or(DEFAULT_LEADERBOARD_LIMIT);
    let players = roster.players();
    HttpResponse::Ok().json(LeaderboardResponse {
        overview: roster_overview(players),
        top_win_rate: top_by_win_rate(players, limit),
        top_kda: top_by_kda(players, limit),
        top_wins: top_by_wins(players, limit),
        top_losses: top_by_losses(players, limit),
        hall_of_fame: hall_of_fame(players),
    })
}

/// Create a new team-generation session (client stores id for subsequent requests).
#[post("/api/sessions")]
async fn api_create_session(state: AppState) -> HttpResponse {
    let session = TeamSession::new();
    let body = HttpResponse::Ok().json(&session);
    let mut g = match state.sessions.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    g.insert(
        session.id,
        SessionEntry {
            session,
            last_activity: Instant::now(),
        },
    );
    body
}

/// Get a session by id (404 if not found). Touching it refreshes last_activity.
#[get("/api/sessions/{id}")]
async fn api_get_session(state: AppState, path: Path<SessionPath>) -> HttpResponse {
    let mut g = match state.sessions.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.get_mut(&path.id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            HttpResponse::Ok().json(&entry.session)
        }
        None => no_session(),
    }
}

/// Toggle a roster player in or out of the session's selection.
/// A full pool answers 409 with the unchanged session.
#[post("/api/sessions/{id}/selection/{player_id}")]
async fn api_toggle_player(state: AppState, path: Path<SessionPlayerPath>) -> HttpResponse {
    let player = {
        let roster = match state.roster.read() {
            Ok(guard) => guard,
            Err(_) => return lock_error(),
        };
        match roster.get(&path.player_id) {
            Some(p) => p.clone(),
            None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "Player not found" })),
        }
    };
    let mut g = match state.sessions.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return no_session(),
    };
    entry.last_activity = Instant::now();
    let outcome = entry.session.toggle_player(&player);
    let body = ToggleResponse {
        outcome,
        session: &entry.session,
    };
    match outcome {
        ToggleOutcome::CapacityExceeded => HttpResponse::Conflict().json(body),
        _ => HttpResponse::Ok().json(body),
    }
}

/// Clear the session's selection.
#[delete("/api/sessions/{id}/selection")]
async fn api_clear_selection(state: AppState, path: Path<SessionPath>) -> HttpResponse {
    let mut g = match state.sessions.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return no_session(),
    };
    entry.last_activity = Instant::now();
    entry.session.clear_selection();
    HttpResponse::Ok().json(&entry.session)
}

/// Generate teams from the selection (`{"mode": "balanced" | "random"}`).
#[post("/api/sessions/{id}/teams")]
async fn api_generate_teams(
    state: AppState,
    path: Path<SessionPath>,
    body: Option<Json<GenerateTeamsBody>>,
) -> HttpResponse {
    let mode = body.map(|b| b.mode).unwrap_or_default();
    let mut g = match state.sessions.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return no_session(),
    };
    entry.last_activity = Instant::now();
    match entry.session.generate_teams(mode) {
        Ok(teams) => HttpResponse::Ok().json(teams),
        Err(e) => bad_request(e),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Load the initial roster from ROSTER_PATH (CSV if it ends in `.csv`, JSON otherwise).
async fn load_roster(path: &str) -> std::io::Result<Roster> {
    let invalid = |e: lol_team_builder::RosterError| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string());
    let contents = tokio::fs::read_to_string(path).await?;
    if path.to_ascii_lowercase().ends_with(".csv") {
        Roster::from_csv_reader(contents.as_bytes()).map_err(invalid)
    } else {
        let mut roster = Roster::new();
        roster.import_json(&contents).map_err(invalid)?;
        Ok(roster)
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);

    let roster = match std::env::var("ROSTER_PATH") {
        Ok(path) => {
            let roster = load_roster(&path).await?;
            log::info!("Loaded {} player(s) from {}", roster.len(), path);
            roster
        }
        Err(_) => Roster::new(),
    };

    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(AppData {
        defaults: roster.clone(),
        roster: RwLock::new(roster),
        sessions: RwLock::new(HashMap::new()),
    });

    // Background task: every 30 minutes, remove sessions inactive for 12+ hours
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.sessions.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < INACTIVITY_TIMEOUT);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive session(s) (no activity for 12h)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(favicon)
            .service(api_list_players)
            .service(api_add_player)
            .service(api_export_players)
            .service(api_import_players)
            .service(api_reset_players)
            .service(api_restore_default_players)
            .service(api_update_player)
            .service(api_remove_player)
            .service(api_leaderboard)
            .service(api_create_session)
            .service(api_get_session)
            .service(api_toggle_player)
            .service(api_clear_selection)
            .service(api_generate_teams)
    })
    .bind(bind)?
    .run()
    .await
}

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use crate::api::dto::TeamDto;
use crate::api::errors::ApiError;
use crate::application::TeamsService;
use crate::domain::team::Team;

pub const IDS_PARAM: &str = "ids";
pub const MIN_RATING_PARAM: &str = "min-rating";
pub const LEAGUES_PARAM: &str = "leagues";
pub const ORDER_BY_PARAM: &str = "order-by";
pub const LIMIT_PARAM: &str = "limit";

const LIST_SEPARATOR: char = ',';

const DEFAULT_MIN_RATING: f64 = 5.0;
const DEFAULT_ORDER_BY: &str = "rating";
const DEFAULT_LIMIT: u32 = 0;

/// Decoded query string pairs, in request order
type QueryPairs = Vec<(String, String)>;

/// Query string of `GET /teams`
#[derive(Debug, Default)]
pub struct TeamsParams {
    pub ids: Option<String>,
}

impl TeamsParams {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            ids: first_value(pairs, IDS_PARAM),
        }
    }
}

/// Raw query string of `GET /teams/search`
///
/// Values stay strings so a bad number can be reported by name.
#[derive(Debug, Default)]
pub struct SearchParams {
    pub min_rating: Option<String>,
    pub leagues: Option<String>,
    pub order_by: Option<String>,
    pub limit: Option<String>,
}

impl SearchParams {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            min_rating: first_value(pairs, MIN_RATING_PARAM),
            leagues: first_value(pairs, LEAGUES_PARAM),
            order_by: first_value(pairs, ORDER_BY_PARAM),
            limit: first_value(pairs, LIMIT_PARAM),
        }
    }
}

/// Validated search criteria with defaults applied
#[derive(Debug, Clone, PartialEq)]
pub struct TeamSearch {
    pub min_rating: f64,
    pub leagues: Vec<String>,
    pub order_by: String,
    pub limit: u32,
}

impl SearchParams {
    pub fn into_search(self) -> Result<TeamSearch, ApiError> {
        let min_rating = match non_empty(self.min_rating) {
            Some(raw) => match raw.parse::<f64>() {
                Ok(value) if value.is_finite() => value,
                _ => return Err(bad_param(MIN_RATING_PARAM, &raw)),
            },
            None => DEFAULT_MIN_RATING,
        };

        let limit = match non_empty(self.limit) {
            Some(raw) => raw
                .parse::<u32>()
                .map_err(|_| bad_param(LIMIT_PARAM, &raw))?,
            None => DEFAULT_LIMIT,
        };

        Ok(TeamSearch {
            min_rating,
            leagues: non_empty(self.leagues)
                .map(|raw| split_list(&raw))
                .unwrap_or_default(),
            order_by: non_empty(self.order_by).unwrap_or_else(|| DEFAULT_ORDER_BY.to_string()),
            limit,
        })
    }
}

/// A repeated key keeps its first value
fn first_value(pairs: &[(String, String)], name: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.clone())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn split_list(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }

    raw.split(LIST_SEPARATOR).map(str::to_string).collect()
}

fn bad_param(name: &str, raw: &str) -> ApiError {
    tracing::warn!(param = name, value = raw, "rejecting malformed query parameter");
    ApiError::bad_request(format!("bad param {}={}", name, raw))
}

fn teams_response(teams: &[Team]) -> Result<Response, ApiError> {
    let dtos: Vec<TeamDto> = teams.iter().map(TeamDto::from).collect();

    let body = serde_json::to_vec(&dtos)
        .map_err(|e| ApiError::internal_server_error(format!("Failed to encode teams: {}", e)))?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

/// List teams, optionally restricted to a set of ids
///
/// GET /teams
/// GET /teams?ids=a,b,c
pub async fn get_teams(
    State(service): State<TeamsService>,
    Query(pairs): Query<QueryPairs>,
) -> Result<Response, ApiError> {
    let teams = match TeamsParams::from_pairs(&pairs).ids {
        Some(ids) => service.teams_by_ids(&split_list(&ids)).await?,
        None => service.all_teams().await?,
    };

    teams_response(&teams)
}

/// Search teams by rating and league
///
/// GET /teams/search?min-rating=&leagues=&order-by=&limit=
pub async fn search_teams(
    State(service): State<TeamsService>,
    Query(pairs): Query<QueryPairs>,
) -> Result<Response, ApiError> {
    let search = SearchParams::from_pairs(&pairs).into_search()?;

    let teams = service
        .filter_teams(search.min_rating, &search.leagues, &search.order_by, search.limit)
        .await?;

    teams_response(&teams)
}

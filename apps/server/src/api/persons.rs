use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::{error::ApiResult, main_lib::AppState};
use networth_core::persons::{NewPerson, Person};

async fn get_persons(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Person>>> {
    let persons = state.person_service.get_persons()?;
    Ok(Json(persons))
}

async fn get_person(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Person>> {
    let person = state.person_service.get_person(&id)?;
    Ok(Json(person))
}

async fn create_person(
    State(state): State<Arc<AppState>>,
    Json(person): Json<NewPerson>,
) -> ApiResult<(StatusCode, Json<Person>)> {
    let created = state.person_service.create_person(person).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/persons", get(get_persons).post(create_person))
        .route("/persons/{id}", get(get_person))
}

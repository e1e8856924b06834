//! In-memory stand-in for the food-item REST service, used by integration
//! tests and runnable as a standalone binary for manual sessions.
//!
//! Mirrors the real server's surface: sequential numeric ids, camelCase
//! JSON, and a full-field replace on update.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    pub id: u64,
    pub name: String,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<NaiveDate>,
    pub expiry_date: NaiveDate,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFoodItem {
    pub name: String,
    pub quantity: u32,
    #[serde(default)]
    pub purchase_date: Option<NaiveDate>,
    pub expiry_date: NaiveDate,
}

/// Update payload: every field is replaced, as the real service does.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFoodItem {
    pub name: String,
    pub quantity: u32,
    #[serde(default)]
    pub purchase_date: Option<NaiveDate>,
    pub expiry_date: NaiveDate,
}

#[derive(Default)]
pub struct Store {
    next_id: u64,
    items: BTreeMap<u64, FoodItem>,
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/api/fooditems", get(list_items).post(create_item))
        .route(
            "/api/fooditems/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_items(State(db): State<Db>) -> Json<Vec<FoodItem>> {
    let store = db.read().await;
    Json(store.items.values().cloned().collect())
}

async fn create_item(
    State(db): State<Db>,
    Json(input): Json<CreateFoodItem>,
) -> (StatusCode, Json<FoodItem>) {
    let mut store = db.write().await;
    store.next_id += 1;
    let item = FoodItem {
        id: store.next_id,
        name: input.name,
        quantity: input.quantity,
        purchase_date: input.purchase_date,
        expiry_date: input.expiry_date,
    };
    store.items.insert(item.id, item.clone());
    (StatusCode::CREATED, Json(item))
}

async fn get_item(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<FoodItem>, StatusCode> {
    let store = db.read().await;
    store.items.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_item(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<UpdateFoodItem>,
) -> Result<Json<FoodItem>, StatusCode> {
    let mut store = db.write().await;
    let item = store.items.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    item.name = input.name;
    item.quantity = input.quantity;
    item.purchase_date = input.purchase_date;
    item.expiry_date = input.expiry_date;
    Ok(Json(item.clone()))
}

async fn delete_item(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    store
        .items
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}

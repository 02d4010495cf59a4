use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use stockplan_optimizer::optimize;
use stockplan_store::RecordPatch;
use stockplan_types::{CostParameters, DemandRecord, StockplanError};

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Deserialize)]
pub struct ForecastQuery {
    pub horizon: Option<u32>,
}

/// Body of `POST /optimize-inventory`; field names are the wire contract
#[derive(Deserialize)]
pub struct OptimizeRequest {
    pub horizon: u32,
    pub holding_cost: f64,
    pub stockout_penalty: f64,
    pub ordering_cost: f64,
    pub lead_time: u32,
    pub n_simulations: u32,
}

impl OptimizeRequest {
    fn into_costs(self) -> CostParameters {
        CostParameters {
            holding_cost: self.holding_cost,
            stockout_penalty: self.stockout_penalty,
            ordering_cost: self.ordering_cost,
            lead_time: self.lead_time,
            horizon: self.horizon,
            n_simulations: self.n_simulations,
        }
    }
}

fn error_status(err: &StockplanError) -> StatusCode {
    match err {
        StockplanError::InvalidConfiguration(_)
        | StockplanError::InvalidPolicy(_)
        | StockplanError::InvalidRecord(_) => StatusCode::BAD_REQUEST,
        // The client treats a missing-history failure as its cue to fall
        // back to synthetic data, not as a transport error
        StockplanError::InsufficientData(_) => StatusCode::OK,
        StockplanError::RecordNotFound(_) => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Failure body: `success: false` plus the error, never partial results
fn failure(err: StockplanError) -> (StatusCode, Json<serde_json::Value>) {
    (
        error_status(&err),
        Json(serde_json::json!({
            "success": false,
            "error": err.to_string(),
        })),
    )
}

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Forecast future demand from the stored history
pub async fn predict_demand(
    State(state): State<AppState>,
    Query(query): Query<ForecastQuery>,
) -> (StatusCode, Json<serde_json::Value>) {
    let horizon = query.horizon.unwrap_or(state.config.default_horizon);
    if horizon == 0 || horizon > state.config.horizon_cap {
        return failure(StockplanError::InvalidConfiguration(format!(
            "horizon must be between 1 and {}",
            state.config.horizon_cap
        )));
    }

    let history = state.store.lock().unwrap().demand();
    match stockplan_forecast::forecast(&history, horizon) {
        Ok(points) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "success": true,
                "forecast": points,
                "total_days": points.len(),
            })),
        ),
        Err(err) => {
            warn!(%err, "forecast failed");
            failure(err)
        }
    }
}

/// Search for the cheapest (R, Q) policy against the forecast demand
pub async fn optimize_inventory(
    State(state): State<AppState>,
    Json(request): Json<OptimizeRequest>,
) -> (StatusCode, Json<serde_json::Value>) {
    let costs = request.into_costs();
    if let Err(err) = costs.validate() {
        return failure(err);
    }

    // Clone the history out so the lock is not held across the search
    let history = state.store.lock().unwrap().demand();
    let demand = match stockplan_forecast::forecast(&history, costs.horizon) {
        Ok(points) => points,
        Err(err) => {
            warn!(%err, "forecast failed ahead of optimization");
            return failure(err);
        }
    };

    match optimize(&costs, &demand, state.config.seed) {
        Ok(result) => {
            let metrics = result.metrics;
            (
                StatusCode::OK,
                Json(serde_json::json!({
                    "success": true,
                    "optimal_policy": {
                        "reorder_point": result.policy.reorder_point,
                        "order_quantity": result.policy.order_quantity,
                    },
                    "cost_summary": {
                        "holding_cost": metrics.total_holding_cost,
                        "stockout_cost": metrics.total_stockout_cost,
                        "ordering_cost": metrics.total_ordering_cost,
                        "total_cost": metrics.total_cost,
                    },
                    "performance_metrics": {
                        "mean_inventory": metrics.mean_inventory,
                        "fill_rate": metrics.fill_rate,
                        "stockout_rate": metrics.stockout_rate,
                        "num_orders": metrics.num_orders,
                    },
                    "explanation": result.explanation(&costs),
                })),
            )
        }
        Err(err) => {
            warn!(%err, "optimization failed");
            failure(err)
        }
    }
}

/// List all demand records in positional order
pub async fn list_records(
    State(state): State<AppState>,
) -> (StatusCode, Json<serde_json::Value>) {
    let records = state.store.lock().unwrap().demand();
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "success": true,
            "total": records.len(),
            "data": records,
        })),
    )
}

/// Append a demand record, returning its position
pub async fn append_record(
    State(state): State<AppState>,
    Json(record): Json<DemandRecord>,
) -> (StatusCode, Json<serde_json::Value>) {
    let mut store = state.store.lock().unwrap();
    match store.append(record) {
        Ok(_) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "success": true,
                "index": store.len() - 1,
            })),
        ),
        Err(err) => failure(err),
    }
}

/// Update the record at a positional index
pub async fn update_record(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Json(patch): Json<RecordPatch>,
) -> (StatusCode, Json<serde_json::Value>) {
    let mut store = state.store.lock().unwrap();
    match store.update(index, patch) {
        Ok(()) => (StatusCode::OK, Json(serde_json::json!({"success": true}))),
        Err(err) => failure(err),
    }
}

/// Delete the record at a positional index; later indices shift down
pub async fn delete_record(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> (StatusCode, Json<serde_json::Value>) {
    let mut store = state.store.lock().unwrap();
    match store.remove(index) {
        Ok(_) => (StatusCode::OK, Json(serde_json::json!({"success": true}))),
        Err(err) => failure(err),
    }
}

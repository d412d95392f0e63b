use axum::http::{Method, Uri};
use axum::response::Html;

use crate::error::AppError;
use crate::views::{render, AddTemplate, ChartKind, ChartTemplate};

pub async fn add() -> Result<Html<String>, AppError> {
    render(&AddTemplate::new())
}

pub async fn year_made() -> Result<Html<String>, AppError> {
    render(&ChartTemplate::new(ChartKind::YearMade))
}

pub async fn genre() -> Result<Html<String>, AppError> {
    render(&ChartTemplate::new(ChartKind::Genre))
}

pub async fn studio() -> Result<Html<String>, AppError> {
    render(&ChartTemplate::new(ChartKind::Studio))
}

pub async fn country() -> Result<Html<String>, AppError> {
    render(&ChartTemplate::new(ChartKind::Country))
}

pub async fn launch_price() -> Result<Html<String>, AppError> {
    render(&ChartTemplate::new(ChartKind::LaunchPrice))
}

/// Fallback for unknown paths and for unsupported methods on known paths.
pub async fn not_found(method: Method, uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {} {}", method, uri))
}

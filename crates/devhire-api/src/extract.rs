//! Extractors whose rejections use the `ApiResponse` error envelope

use axum::extract::{FromRequestParts, Query};

use devhire_shared::Pagination;
use serde::Deserialize;

use crate::error::ApiError;

/// `?page=&per_page=` query; malformed values become `VALIDATION_ERROR`.
#[derive(Debug, Deserialize, FromRequestParts)]
#[serde(transparent)]
#[from_request(via(Query), rejection(ApiError))]
pub struct PageQuery(pub Pagination);

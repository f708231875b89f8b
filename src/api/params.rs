//! Path-parameter gates that run before a handler.
//!
//! Each gate checks one path segment, resolves it, and stores the result in the
//! request extensions so handlers can take it with `Extension<T>`. A failed
//! check answers the request directly and the handler never runs. What was
//! resolved is also noted on the response as [`ResolvedPath`] so request
//! logging can report it.

use axum::{
    extract::{Path, Request, State},
    middleware::Next,
    response::Response,
};
use std::collections::HashMap;
use std::sync::Arc;

use super::validation::{parse_id, resolve_genre};
use super::{ApiError, AppState};
use crate::domain::Genre;
use crate::entities::{shows, users};
use crate::services::{CatalogError, CatalogService};

/// Path values resolved while serving a request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolvedPath {
    pub show_id: Option<i32>,
    pub user_id: Option<i32>,
    pub genre: Option<Genre>,
}

impl ResolvedPath {
    fn note(response: &mut Response, update: impl FnOnce(&mut Self)) {
        let extensions = response.extensions_mut();
        let mut resolved = extensions.get::<Self>().copied().unwrap_or_default();
        update(&mut resolved);
        extensions.insert(resolved);
    }
}

/// An entity addressable by an integer path parameter.
#[async_trait::async_trait]
pub trait PathEntity: Clone + Send + Sync + 'static {
    /// Name of the path parameter holding the id.
    const PARAM: &'static str;

    /// Used in client-facing messages, e.g. "Show Not Found".
    const LABEL: &'static str;

    async fn lookup(catalog: &dyn CatalogService, id: i32) -> Result<Option<Self>, CatalogError>;

    fn mark(resolved: &mut ResolvedPath, id: i32);
}

#[async_trait::async_trait]
impl PathEntity for shows::Model {
    const PARAM: &'static str = "show_id";
    const LABEL: &'static str = "Show";

    async fn lookup(catalog: &dyn CatalogService, id: i32) -> Result<Option<Self>, CatalogError> {
        catalog.find_show(id).await
    }

    fn mark(resolved: &mut ResolvedPath, id: i32) {
        resolved.show_id = Some(id);
    }
}

#[async_trait::async_trait]
impl PathEntity for users::Model {
    const PARAM: &'static str = "user_id";
    const LABEL: &'static str = "User";

    async fn lookup(catalog: &dyn CatalogService, id: i32) -> Result<Option<Self>, CatalogError> {
        catalog.find_user(id).await
    }

    fn mark(resolved: &mut ResolvedPath, id: i32) {
        resolved.user_id = Some(id);
    }
}

/// Resolves `T::PARAM` to a row and attaches it to the request.
pub async fn validate_id<T: PathEntity>(
    State(state): State<Arc<AppState>>,
    Path(params): Path<HashMap<String, String>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let raw = params
        .get(T::PARAM)
        .ok_or_else(|| ApiError::invalid_id(T::LABEL))?;
    let id = parse_id(raw, T::LABEL)?;

    let entity = T::lookup(state.catalog.as_ref(), id)
        .await?
        .ok_or_else(|| ApiError::not_found(T::LABEL))?;

    request.extensions_mut().insert(entity);
    let mut response = next.run(request).await;
    ResolvedPath::note(&mut response, |resolved| T::mark(resolved, id));
    Ok(response)
}

/// Resolves the `genre` parameter to a [`Genre`](crate::domain::Genre),
/// ignoring case.
pub async fn validate_genre(
    Path(params): Path<HashMap<String, String>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let genre = resolve_genre(params.get("genre").map(String::as_str))?;
    request.extensions_mut().insert(genre);
    let mut response = next.run(request).await;
    ResolvedPath::note(&mut response, |resolved| resolved.genre = Some(genre));
    Ok(response)
}

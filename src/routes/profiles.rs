//! Profile routes
//!
//! Directory listing, detail, map location, and admin create/edit/delete.
//! Writes go through a [`ProfileEditor`] session before they reach the
//! repository.

use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::{ApiResponse, AppJson, Created, DataResponse, NoContent};
use crate::app::AppState;
use crate::domain::{MapLocation, Profile, ProfileInput};
use crate::editor::{ProfileEditor, ProfileEdits};
use crate::error::{ApiError, ApiResult};
use crate::middleware::request_id;
use crate::query::{self, LocationFilter, ProfileQuery, SearchField, SearchScope};

/// Query params for listing profiles
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ListProfilesQuery {
    /// Free-text search
    #[serde(default)]
    pub q: Option<String>,
    /// City, or `all`
    #[serde(default)]
    pub location: Option<String>,
    /// `directory` (default) or `admin`
    #[serde(default)]
    pub scope: Option<String>,
    /// Comma-separated field list; overrides `scope`
    #[serde(default)]
    pub fields: Option<String>,
}

impl ListProfilesQuery {
    fn into_query(self) -> ApiResult<ProfileQuery> {
        let scope = match (self.fields, self.scope) {
            (Some(fields), _) => {
                let parsed = fields
                    .split(',')
                    .filter(|f| !f.trim().is_empty())
                    .map(|f| {
                        SearchField::parse(f).ok_or_else(|| {
                            ApiError::bad_request(format!("Unknown search field '{}'", f.trim()))
                        })
                    })
                    .collect::<ApiResult<Vec<_>>>()?;
                if parsed.is_empty() {
                    return Err(ApiError::bad_request("No search fields given"));
                }
                SearchScope::Custom(parsed)
            }
            (None, Some(scope)) => SearchScope::parse(&scope)
                .ok_or_else(|| ApiError::bad_request(format!("Unknown search scope '{}'", scope)))?,
            (None, None) => SearchScope::default(),
        };

        Ok(ProfileQuery::new(
            self.q.unwrap_or_default(),
            scope,
            LocationFilter::parse(self.location.as_deref().unwrap_or_default()),
        ))
    }
}

#[derive(Debug, Serialize)]
pub struct ListMeta {
    /// Size of the unfiltered set
    pub total: usize,
    pub matched: usize,
    /// Location filter choices
    pub cities: Vec<String>,
}

/// GET /profiles
///
/// Filtered view of the directory plus the city facet.
pub async fn list_profiles(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListProfilesQuery>,
) -> ApiResult<impl IntoResponse> {
    let query = params.into_query()?;
    let all = state.profiles.list().await?;

    let matched: Vec<Profile> = query::filter(&all, &query).into_iter().cloned().collect();
    let meta = ListMeta {
        total: all.len(),
        matched: matched.len(),
        cities: query::distinct_cities(&all),
    };

    tracing::debug!(
        query = %query.text,
        location = ?query.location,
        total = meta.total,
        matched = meta.matched,
        "Listing profiles"
    );

    Ok(ApiResponse::with_meta(matched, meta))
}

/// GET /profiles/cities
pub async fn list_cities(State(state): State<Arc<AppState>>) -> ApiResult<impl IntoResponse> {
    let cities = state.profiles.cities().await?;
    Ok(DataResponse::new(cities))
}

/// GET /profiles/:id
pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    Path(profile_id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let profile = state.profiles.get(&profile_id).await?;
    Ok(DataResponse::new(profile))
}

/// GET /profiles/:id/location
///
/// Location card for the map view.
pub async fn get_profile_location(
    State(state): State<Arc<AppState>>,
    Path(profile_id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let profile = state.profiles.get(&profile_id).await?;
    Ok(DataResponse::new(MapLocation::from(&profile)))
}

/// POST /profiles
pub async fn create_profile(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    AppJson(input): AppJson<ProfileInput>,
) -> ApiResult<impl IntoResponse> {
    let mut editor = ProfileEditor::from_input(input);
    let profile = state.profiles.save(editor.submit()?).await?;

    tracing::info!(
        request_id = request_id(&headers).unwrap_or("-"),
        profile_id = %profile.id,
        "Created profile"
    );

    Ok(Created(DataResponse::new(profile)))
}

/// PUT /profiles/:id
///
/// Full replacement of the stored record.
pub async fn replace_profile(
    State(state): State<Arc<AppState>>,
    Path(profile_id): Path<String>,
    AppJson(input): AppJson<ProfileInput>,
) -> ApiResult<impl IntoResponse> {
    let mut editor = ProfileEditor::replace(profile_id, input);
    let profile = state.profiles.save(editor.submit()?).await?;
    Ok(DataResponse::new(profile))
}

/// PATCH /profiles/:id
///
/// Field edits applied to a copy of the stored record, then saved as a
/// full replacement.
pub async fn edit_profile(
    State(state): State<Arc<AppState>>,
    Path(profile_id): Path<String>,
    AppJson(edits): AppJson<ProfileEdits>,
) -> ApiResult<impl IntoResponse> {
    let current = state.profiles.get(&profile_id).await?;

    let mut editor = ProfileEditor::edit(&current);
    editor.apply(edits)?;
    let profile = state.profiles.save(editor.submit()?).await?;

    Ok(DataResponse::new(profile))
}

/// DELETE /profiles/:id
///
/// Succeeds whether or not the profile existed.
pub async fn delete_profile(
    State(state): State<Arc<AppState>>,
    Path(profile_id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    state.profiles.delete(&profile_id).await?;
    Ok(NoContent)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(q: &str, location: &str, scope: Option<&str>, fields: Option<&str>) -> ListProfilesQuery {
        ListProfilesQuery {
            q: Some(q.to_string()),
            location: Some(location.to_string()),
            scope: scope.map(str::to_string),
            fields: fields.map(str::to_string),
        }
    }

    #[test]
    fn defaults_to_directory_scope_without_location() {
        let query = ListProfilesQuery::default().into_query().unwrap();

        assert_eq!(query.text, "");
        assert_eq!(query.scope, SearchScope::Directory);
        assert_eq!(query.location, LocationFilter::Any);
    }

    #[test]
    fn fields_override_scope() {
        let query = params("rust", "all", Some("admin"), Some("skills, title"))
            .into_query()
            .unwrap();

        assert_eq!(
            query.scope,
            SearchScope::Custom(vec![SearchField::Skills, SearchField::Title])
        );
        assert_eq!(query.location, LocationFilter::Any);
    }

    #[test]
    fn unknown_scope_or_field_is_rejected() {
        assert!(matches!(
            params("", "", Some("everyone"), None).into_query(),
            Err(ApiError::BadRequest(_))
        ));
        assert!(matches!(
            params("", "", None, Some("name,shoe_size")).into_query(),
            Err(ApiError::BadRequest(_))
        ));
        assert!(matches!(
            params("", "", None, Some(" , ")).into_query(),
            Err(ApiError::BadRequest(_))
        ));
    }
}

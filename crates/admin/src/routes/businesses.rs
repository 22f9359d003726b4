//! Businesses list and form route handlers.

use askama::Template;
use axum::{
    Router,
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use serde::Deserialize;
use tracing::instrument;

use venue_admin_core::{BusinessId, BusinessType};

use crate::components::data_table::{ColumnHeader, SortDir, SortState, businesses_table};
use crate::error::AppError;
use crate::filters;
use crate::forms::{BusinessForm, BusinessFormErrors};
use crate::middleware::auth::RequireAuth;
use crate::models::{Business, CurrentUser};
use crate::routes::SelectOption;
use crate::routes::staff::list_href as staff_list_href;
use crate::state::AppState;

/// List query parameters.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub sort: Option<String>,
    pub dir: Option<String>,
}

/// Business row view for templates.
#[derive(Debug, Clone)]
pub struct BusinessRow {
    pub id: String,
    pub name: String,
    pub location: String,
    pub type_label: String,
    pub edit_href: String,
    pub staff_href: String,
    pub delete_action: String,
}

impl From<&Business> for BusinessRow {
    fn from(business: &Business) -> Self {
        let id = business
            .id
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default();

        Self {
            name: business.name.clone(),
            location: business.location.clone(),
            type_label: business.business_type.to_string(),
            edit_href: format!("/businesses/{id}/edit"),
            staff_href: staff_list_href(&id),
            delete_action: format!("/businesses/{id}/delete"),
            id,
        }
    }
}

/// Businesses list page template.
#[derive(Template)]
#[template(path = "businesses/index.html")]
struct BusinessesIndexTemplate {
    user_email: String,
    headers: Vec<ColumnHeader>,
    rows: Vec<BusinessRow>,
    empty_title: String,
}

/// Business form page template (shared by create and edit).
#[derive(Template)]
#[template(path = "businesses/form.html")]
struct BusinessFormTemplate {
    user_email: String,
    heading: String,
    action: String,
    submit_label: String,
    cancel_href: String,
    name: String,
    location: String,
    type_options: Vec<SelectOption>,
    errors: BusinessFormErrors,
}

/// Build the businesses router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/businesses", get(index).post(create))
        .route("/businesses/new", get(new))
        .route("/businesses/{id}", post(update))
        .route("/businesses/{id}/edit", get(edit))
        .route("/businesses/{id}/delete", post(delete))
}

/// Sort the collection in place by a column key.
///
/// Unknown keys leave the order as fetched.
fn sort_businesses(businesses: &mut [Business], sort: &SortState) {
    let Some(key) = sort.key.as_deref() else {
        return;
    };

    match key {
        "id" => businesses.sort_by(|a, b| a.id.cmp(&b.id)),
        "name" => businesses.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase())),
        "location" => {
            businesses.sort_by(|a, b| a.location.to_lowercase().cmp(&b.location.to_lowercase()));
        }
        "type" => businesses.sort_by(|a, b| {
            a.business_type
                .as_str()
                .cmp(b.business_type.as_str())
        }),
        _ => return,
    }

    if sort.dir == SortDir::Desc {
        businesses.reverse();
    }
}

fn type_options(selected: BusinessType) -> Vec<SelectOption> {
    BusinessType::ALL
        .into_iter()
        .map(|t| SelectOption::new(t.as_str(), t.as_str(), t == selected))
        .collect()
}

fn render(template: impl Template) -> Html<String> {
    Html(template.render().unwrap_or_else(|e| {
        tracing::error!("Template render error: {e}");
        "Internal Server Error".to_owned()
    }))
}

fn form_template(
    user: &CurrentUser,
    form: &BusinessForm,
    errors: BusinessFormErrors,
    action: String,
    editing: bool,
) -> BusinessFormTemplate {
    BusinessFormTemplate {
        user_email: user.email.clone(),
        heading: if editing {
            "Edit Business".to_owned()
        } else {
            "Add a new business".to_owned()
        },
        action,
        submit_label: if editing { "Update" } else { "Create" }.to_owned(),
        cancel_href: "/businesses".to_owned(),
        name: form.name.clone(),
        location: form.location.clone(),
        type_options: type_options(form.business_type),
        errors,
    }
}

/// Businesses list page.
///
/// GET /businesses
///
/// A failed fetch is logged and degrades to an empty table; no retry.
#[instrument(skip(user, state))]
async fn index(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Html<String> {
    let mut businesses = match state.api().list_businesses().await {
        Ok(businesses) => businesses,
        Err(e) => {
            tracing::error!("Failed to fetch businesses: {e}");
            vec![]
        }
    };

    let sort = SortState::from_query(query.sort, query.dir);
    sort_businesses(&mut businesses, &sort);

    let config = businesses_table();
    let template = BusinessesIndexTemplate {
        user_email: user.email,
        headers: config.headers("/businesses", &[], &sort),
        rows: businesses.iter().map(BusinessRow::from).collect(),
        empty_title: config.empty_title,
    };

    render(template)
}

/// Blank create form.
///
/// GET /businesses/new
async fn new(RequireAuth(user): RequireAuth) -> Html<String> {
    let form = BusinessForm::default();
    render(form_template(
        &user,
        &form,
        BusinessFormErrors::default(),
        "/businesses".to_owned(),
        false,
    ))
}

/// Create a business, then return to the list.
///
/// POST /businesses
#[instrument(skip(user, state, form))]
async fn create(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    axum::Form(form): axum::Form<BusinessForm>,
) -> Result<Response, AppError> {
    let payload = match form.validate() {
        Ok(payload) => payload,
        Err(errors) => {
            return Ok(render(form_template(
                &user,
                &form,
                errors,
                "/businesses".to_owned(),
                false,
            ))
            .into_response());
        }
    };

    state.api().create_business(&payload).await?;
    Ok(Redirect::to("/businesses").into_response())
}

/// Edit form pre-filled from the remote record.
///
/// GET /businesses/{id}/edit
#[instrument(skip(user, state))]
async fn edit(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let business_id = BusinessId::from(id.as_str());
    let business = state.api().get_business(&business_id).await?;

    let form = BusinessForm {
        name: business.name,
        location: business.location,
        business_type: business.business_type,
    };

    Ok(render(form_template(
        &user,
        &form,
        BusinessFormErrors::default(),
        format!("/businesses/{business_id}"),
        true,
    )))
}

/// Update a business, then return to the list.
///
/// POST /businesses/{id}
#[instrument(skip(user, state, form))]
async fn update(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
    axum::Form(form): axum::Form<BusinessForm>,
) -> Result<Response, AppError> {
    let business_id = BusinessId::from(id.as_str());

    let payload = match form.validate() {
        Ok(payload) => payload,
        Err(errors) => {
            return Ok(render(form_template(
                &user,
                &form,
                errors,
                format!("/businesses/{business_id}"),
                true,
            ))
            .into_response());
        }
    };

    state.api().update_business(&business_id, &payload).await?;
    Ok(Redirect::to("/businesses").into_response())
}

/// Delete a business, then return to the list.
///
/// POST /businesses/{id}/delete
#[instrument(skip(_user, state))]
async fn delete(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    let business_id = BusinessId::from(id.as_str());
    state.api().delete_business(&business_id).await?;

    Ok(Redirect::to("/businesses"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn business(id: &str, name: &str, location: &str, t: BusinessType) -> Business {
        Business {
            id: Some(BusinessId::from(id)),
            name: name.to_owned(),
            location: location.to_owned(),
            business_type: t,
        }
    }

    #[test]
    fn sorts_by_name_case_insensitively() {
        let mut rows = vec![
            business("1", "zanzibar", "A", BusinessType::Bar),
            business("2", "Alhambra", "B", BusinessType::Club),
        ];
        let sort = SortState::from_query(Some("name".to_owned()), None);
        sort_businesses(&mut rows, &sort);

        assert_eq!(rows[0].name, "Alhambra");
        assert_eq!(rows[1].name, "zanzibar");
    }

    #[test]
    fn descending_reverses_the_order() {
        let mut rows = vec![
            business("1", "A", "X", BusinessType::Bar),
            business("2", "B", "Y", BusinessType::Bar),
        ];
        let sort = SortState::from_query(Some("name".to_owned()), Some("desc".to_owned()));
        sort_businesses(&mut rows, &sort);

        assert_eq!(rows[0].name, "B");
    }

    #[test]
    fn unknown_sort_keys_keep_fetch_order() {
        let mut rows = vec![
            business("2", "B", "Y", BusinessType::Bar),
            business("1", "A", "X", BusinessType::Bar),
        ];
        let sort = SortState::from_query(Some("bogus".to_owned()), None);
        sort_businesses(&mut rows, &sort);

        assert_eq!(rows[0].name, "B");
    }

    #[test]
    fn rows_carry_their_action_links() {
        let row = BusinessRow::from(&business("7", "Joe's Bar", "Main St", BusinessType::Bar));

        assert_eq!(row.edit_href, "/businesses/7/edit");
        assert_eq!(row.staff_href, "/staff?businessId=7");
        assert_eq!(row.delete_action, "/businesses/7/delete");
        assert_eq!(row.type_label, "bar");
    }
}

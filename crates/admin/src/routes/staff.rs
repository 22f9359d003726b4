//! Staff list and form route handlers.
//!
//! Every staff view is scoped to one business through the `businessId`
//! query parameter. Landing on `/staff` without one renders a business
//! selector instead of an unscoped list.

use askama::Template;
use axum::{
    Router,
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use serde::Deserialize;
use tracing::instrument;

use venue_admin_core::{BusinessId, StaffId, StaffPosition};

use crate::components::data_table::{ColumnHeader, SortDir, SortState, staff_table};
use crate::error::AppError;
use crate::filters;
use crate::forms::{StaffForm, StaffFormErrors};
use crate::middleware::auth::RequireAuth;
use crate::models::{CurrentUser, Staff};
use crate::routes::SelectOption;
use crate::state::AppState;

/// Staff list query parameters.
#[derive(Debug, Deserialize)]
pub struct StaffListQuery {
    #[serde(rename = "businessId")]
    pub business_id: Option<String>,
    pub sort: Option<String>,
    pub dir: Option<String>,
}

/// Scope carried by the form pages and the delete action.
#[derive(Debug, Deserialize)]
pub struct ScopeQuery {
    #[serde(rename = "businessId")]
    pub business_id: Option<String>,
}

/// Staff row view for templates.
#[derive(Debug, Clone)]
pub struct StaffRow {
    pub name: String,
    pub email: String,
    pub position_label: String,
    pub phone: String,
    pub edit_href: String,
    pub delete_action: String,
}

impl StaffRow {
    fn from_staff(staff: &Staff) -> Self {
        let id = staff.id.map(|id| id.to_string()).unwrap_or_default();
        let business_id = staff.business_id.as_str();

        Self {
            name: staff.full_name(),
            email: staff.email.clone(),
            position_label: staff.position.to_string(),
            phone: staff.phone_number.clone().unwrap_or_default(),
            edit_href: format!("/staff/{id}/edit"),
            delete_action: scoped_href(&format!("/staff/{id}/delete"), business_id),
        }
    }
}

/// Business selector shown when no scope is present.
#[derive(Template)]
#[template(path = "staff/select.html")]
struct StaffSelectTemplate {
    user_email: String,
    business_options: Vec<SelectOption>,
}

/// Scoped staff list page template.
#[derive(Template)]
#[template(path = "staff/index.html")]
struct StaffIndexTemplate {
    user_email: String,
    business_name: String,
    headers: Vec<ColumnHeader>,
    rows: Vec<StaffRow>,
    empty_title: String,
    new_href: String,
    change_href: String,
}

/// Staff form page template (shared by create and edit).
#[derive(Template)]
#[template(path = "staff/form.html")]
struct StaffFormTemplate {
    user_email: String,
    heading: String,
    action: String,
    submit_label: String,
    cancel_href: String,
    email: String,
    first_name: String,
    last_name: String,
    position_options: Vec<SelectOption>,
    phone_number: String,
    business_id: String,
    errors: StaffFormErrors,
}

/// Build the staff router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/staff", get(index).post(create))
        .route("/staff/new", get(new))
        .route("/staff/{id}", post(update))
        .route("/staff/{id}/edit", get(edit))
        .route("/staff/{id}/delete", post(delete))
}

/// Sort the collection in place by a column key.
///
/// Unknown keys leave the order as fetched.
fn sort_staff(staff: &mut [Staff], sort: &SortState) {
    let Some(key) = sort.key.as_deref() else {
        return;
    };

    match key {
        "name" => staff.sort_by(|a, b| {
            a.full_name()
                .to_lowercase()
                .cmp(&b.full_name().to_lowercase())
        }),
        "email" => staff.sort_by(|a, b| a.email.to_lowercase().cmp(&b.email.to_lowercase())),
        "position" => staff.sort_by(|a, b| a.position.as_str().cmp(b.position.as_str())),
        "phone" => staff.sort_by(|a, b| a.phone_number.cmp(&b.phone_number)),
        _ => return,
    }

    if sort.dir == SortDir::Desc {
        staff.reverse();
    }
}

fn position_options(selected: StaffPosition) -> Vec<SelectOption> {
    StaffPosition::ALL
        .into_iter()
        .map(|p| SelectOption::new(p.as_str(), p.as_str(), p == selected))
        .collect()
}

/// Href of the staff list scoped to one business.
pub(crate) fn list_href(business_id: &str) -> String {
    scoped_href("/staff", business_id)
}

/// Append a `businessId` query to a path. Ids are opaque strings and may
/// contain query-reserved characters, so the value is always encoded.
fn scoped_href(path: &str, business_id: &str) -> String {
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    query.append_pair("businessId", business_id);
    format!("{path}?{}", query.finish())
}

fn render(template: impl Template) -> Html<String> {
    Html(template.render().unwrap_or_else(|e| {
        tracing::error!("Template render error: {e}");
        "Internal Server Error".to_owned()
    }))
}

fn form_template(
    user: &CurrentUser,
    form: &StaffForm,
    errors: StaffFormErrors,
    action: String,
    editing: bool,
) -> StaffFormTemplate {
    StaffFormTemplate {
        user_email: user.email.clone(),
        heading: if editing {
            "Edit Staff Member".to_owned()
        } else {
            "Add a new staff member".to_owned()
        },
        action,
        submit_label: if editing { "Update" } else { "Create" }.to_owned(),
        cancel_href: if form.business_id.is_empty() {
            "/staff".to_owned()
        } else {
            list_href(&form.business_id)
        },
        email: form.email.clone(),
        first_name: form.first_name.clone(),
        last_name: form.last_name.clone(),
        position_options: position_options(form.position),
        phone_number: form.phone_number.clone(),
        business_id: form.business_id.clone(),
        errors,
    }
}

/// Render the business selector from the businesses collection.
///
/// A failed fetch degrades to an empty selector; the page still renders.
async fn render_selector(user: CurrentUser, state: &AppState) -> Html<String> {
    let businesses = match state.api().list_businesses().await {
        Ok(businesses) => businesses,
        Err(e) => {
            tracing::error!("Failed to fetch businesses for selector: {e}");
            vec![]
        }
    };

    let business_options = businesses
        .iter()
        .filter_map(|b| b.id.as_ref().map(|id| (id, b)))
        .map(|(id, b)| SelectOption::new(id.as_str(), &b.name, false))
        .collect();

    render(StaffSelectTemplate {
        user_email: user.email,
        business_options,
    })
}

/// Staff list page, or the business selector when no scope is given.
///
/// GET /staff[?businessId={id}]
#[instrument(skip(user, state))]
async fn index(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Query(query): Query<StaffListQuery>,
) -> Html<String> {
    let Some(business_id) = query.business_id.filter(|id| !id.is_empty()) else {
        return render_selector(user, &state).await;
    };
    let business_id = BusinessId::from(business_id);

    let business_name = match state.api().get_business(&business_id).await {
        Ok(business) => business.name,
        Err(e) => {
            tracing::error!("Failed to fetch business {business_id}: {e}");
            business_id.to_string()
        }
    };

    let mut staff = match state.api().list_staff(&business_id).await {
        Ok(staff) => staff,
        Err(e) => {
            tracing::error!("Failed to fetch staff for business {business_id}: {e}");
            vec![]
        }
    };

    let sort = SortState::from_query(query.sort, query.dir);
    sort_staff(&mut staff, &sort);

    let config = staff_table();
    let template = StaffIndexTemplate {
        user_email: user.email,
        business_name,
        headers: config.headers("/staff", &[("businessId", business_id.as_str())], &sort),
        rows: staff.iter().map(StaffRow::from_staff).collect(),
        empty_title: config.empty_title,
        new_href: scoped_href("/staff/new", business_id.as_str()),
        change_href: "/staff".to_owned(),
    };

    render(template)
}

/// Blank create form, scoped to the selected business.
///
/// GET /staff/new?businessId={id}
async fn new(
    RequireAuth(user): RequireAuth,
    Query(scope): Query<ScopeQuery>,
) -> Response {
    let Some(business_id) = scope.business_id.filter(|id| !id.is_empty()) else {
        return Redirect::to("/staff").into_response();
    };

    let form = StaffForm {
        business_id,
        ..StaffForm::default()
    };

    render(form_template(
        &user,
        &form,
        StaffFormErrors::default(),
        "/staff".to_owned(),
        false,
    ))
    .into_response()
}

/// Create a staff member, then return to the scoped list.
///
/// POST /staff
#[instrument(skip(user, state, form))]
async fn create(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    axum::Form(form): axum::Form<StaffForm>,
) -> Result<Response, AppError> {
    let payload = match form.validate() {
        Ok(payload) => payload,
        Err(errors) => {
            return Ok(render(form_template(
                &user,
                &form,
                errors,
                "/staff".to_owned(),
                false,
            ))
            .into_response());
        }
    };

    let staff = state.api().create_staff(&payload).await?;
    Ok(Redirect::to(&list_href(staff.business_id.as_str())).into_response())
}

/// Edit form pre-filled from the remote record.
///
/// GET /staff/{id}/edit
#[instrument(skip(user, state))]
async fn edit(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, AppError> {
    let staff_id = StaffId::new(id);
    let staff = state.api().get_staff(staff_id).await?;

    let form = StaffForm {
        email: staff.email,
        first_name: staff.first_name,
        last_name: staff.last_name,
        position: staff.position,
        phone_number: staff.phone_number.unwrap_or_default(),
        business_id: staff.business_id.into_inner(),
    };

    Ok(render(form_template(
        &user,
        &form,
        StaffFormErrors::default(),
        format!("/staff/{staff_id}"),
        true,
    )))
}

/// Update a staff member, then return to the scoped list.
///
/// POST /staff/{id}
#[instrument(skip(user, state, form))]
async fn update(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    axum::Form(form): axum::Form<StaffForm>,
) -> Result<Response, AppError> {
    let staff_id = StaffId::new(id);

    let payload = match form.validate() {
        Ok(payload) => payload,
        Err(errors) => {
            return Ok(render(form_template(
                &user,
                &form,
                errors,
                format!("/staff/{staff_id}"),
                true,
            ))
            .into_response());
        }
    };

    let staff = state.api().update_staff(staff_id, &payload).await?;
    Ok(Redirect::to(&list_href(staff.business_id.as_str())).into_response())
}

/// Delete a staff member, then return to the scoped list.
///
/// POST /staff/{id}/delete?businessId={id}
#[instrument(skip(_user, state))]
async fn delete(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(scope): Query<ScopeQuery>,
) -> Result<Redirect, AppError> {
    state.api().delete_staff(StaffId::new(id)).await?;

    let target = match scope.business_id.filter(|id| !id.is_empty()) {
        Some(business_id) => list_href(&business_id),
        None => "/staff".to_owned(),
    };
    Ok(Redirect::to(&target))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: i64, first: &str, last: &str, email: &str, phone: Option<&str>) -> Staff {
        Staff {
            id: Some(StaffId::new(id)),
            email: email.to_owned(),
            first_name: first.to_owned(),
            last_name: last.to_owned(),
            position: StaffPosition::Service,
            phone_number: phone.map(ToOwned::to_owned),
            business_id: BusinessId::from("7"),
        }
    }

    #[test]
    fn sorts_by_full_name_case_insensitively() {
        let mut staff = vec![
            member(1, "zoe", "Adams", "z@example.com", None),
            member(2, "Ana", "Ortiz", "a@example.com", None),
        ];
        let sort = SortState::from_query(Some("name".to_owned()), None);
        sort_staff(&mut staff, &sort);

        assert_eq!(staff[0].first_name, "Ana");
    }

    #[test]
    fn missing_phones_sort_before_present_ones() {
        let mut staff = vec![
            member(1, "A", "A", "a@example.com", Some("555-0101")),
            member(2, "B", "B", "b@example.com", None),
        ];
        let sort = SortState::from_query(Some("phone".to_owned()), None);
        sort_staff(&mut staff, &sort);

        assert_eq!(staff[0].phone_number, None);
    }

    #[test]
    fn opaque_business_ids_are_encoded_in_hrefs() {
        let mut odd = member(4, "Bo", "Lind", "bo@example.com", None);
        odd.business_id = BusinessId::from("a&b c");

        let row = StaffRow::from_staff(&odd);
        assert_eq!(row.delete_action, "/staff/4/delete?businessId=a%26b+c");
        assert_eq!(list_href("a&b c"), "/staff?businessId=a%26b+c");
    }

    #[test]
    fn rows_keep_the_business_scope_in_action_links() {
        let row = StaffRow::from_staff(&member(3, "Bo", "Lind", "bo@example.com", None));

        assert_eq!(row.edit_href, "/staff/3/edit");
        assert_eq!(row.delete_action, "/staff/3/delete?businessId=7");
        assert_eq!(row.name, "Bo Lind");
        assert!(row.phone.is_empty());
    }
}

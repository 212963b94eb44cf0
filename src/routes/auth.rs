use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;

use crate::db;
use crate::error::Result;
use crate::security::{clear_session_cookie, issue_session_token, session_cookie};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
}

fn login_page(error: Option<&str>) -> Html<String> {
    let notice = error
        .map(|e| format!("<p class=\"error\">{}</p>\n", e))
        .unwrap_or_default();

    Html(format!(
        "<!doctype html>\n\
         <title>Login</title>\n\
         <h1>Login</h1>\n\
         {}<form method=\"post\" action=\"/login\">\n\
         <label>Username <input name=\"username\" required></label>\n\
         <button type=\"submit\">Login</button>\n\
         </form>\n",
        notice
    ))
}

/// Login form
pub async fn login_form() -> Html<String> {
    login_page(None)
}

/// Start a session for a known username
///
/// Unknown usernames get the form again; there is no password check.
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    let user_id = db::lock(&state.db)?
        .authenticate(&form.username)
        .map(str::to_string);

    let Some(user_id) = user_id else {
        tracing::info!("Login failed for unknown username");
        return Ok(login_page(Some("Unknown username")).into_response());
    };

    let token = issue_session_token(&user_id, &state.config.session_secret_key)?;
    tracing::info!("User {} logged in", user_id);

    Ok((
        [(header::SET_COOKIE, session_cookie(&token))],
        Redirect::to("/"),
    )
        .into_response())
}

/// End the session
pub async fn logout() -> impl IntoResponse {
    (
        [(header::SET_COOKIE, clear_session_cookie())],
        Redirect::to("/"),
    )
}

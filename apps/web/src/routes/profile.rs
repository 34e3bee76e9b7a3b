use axum::extract::{Path, State};
use axum::response::Html;
use tera::Context;
use tracing::{debug, error};

use crate::errors::AppError;
use crate::state::AppState;

/// GET /myprofile/:userid
/// Renders the profile page for the resume addressed by the external id.
pub async fn render_profile(
    State(state): State<AppState>,
    Path(userid): Path<String>,
) -> Result<Html<String>, AppError> {
    let resume = state.resumes().find_by_id(&userid).await.map_err(|err| {
        error!(id = %userid, error = %err, "failed to get profile of userid");
        err
    })?;

    debug!(fullname = %resume.full_name, "rendering profile");
    let mut ctx = Context::from_serialize(&resume)?;
    ctx.insert("title", "About me");
    state.render("index.html", &ctx)
}

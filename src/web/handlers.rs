use std::sync::Arc;

use axum::{
    extract::State,
    response::{Html, Redirect},
    Form,
};
use serde::Deserialize;

use crate::app::{AppContext, Result};
use crate::pipeline::FormatOptions;
use crate::store::Store;

use super::page::render_index;

pub type AppState = Arc<AppContext>;

/// Form body of `POST /register`. Either field may be missing.
#[derive(Debug, Default, Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub word: String,
}

/// `GET /`: the filtered hot entry list.
pub async fn index(State(ctx): State<AppState>) -> Result<Html<String>> {
    let opts = FormatOptions::html(&ctx.config);
    let rendered = ctx.render(&opts).await?;
    Ok(Html(render_index(&rendered.rows)))
}

/// `POST /register`: store the submitted rules and go back to the list.
pub async fn register(
    State(ctx): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> Result<Redirect> {
    if !form.domain.is_empty() {
        ctx.store.add_domain(&form.domain)?;
    }
    if !form.word.is_empty() {
        ctx.store.add_word(&form.word)?;
    }
    Ok(Redirect::to("/"))
}

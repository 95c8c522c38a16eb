use actix_web::{HttpRequest, HttpResponse, get, post, web};
use payloads::{PostId, requests::NewPost};

use super::APIError;
use crate::{faults::Faults, store::Store};

#[tracing::instrument(skip_all)]
#[get("/posts")]
pub async fn list_posts(
    req: HttpRequest,
    store: web::Data<Store>,
    faults: web::Data<Faults>,
) -> Result<HttpResponse, APIError> {
    if let Some(response) = faults.intercept(req.path()).await {
        return Ok(response);
    }
    Ok(HttpResponse::Ok().json(store.posts().await))
}

#[tracing::instrument(skip(req, store, faults))]
#[get("/posts/{id}")]
pub async fn get_post(
    req: HttpRequest,
    id: web::Path<i64>,
    store: web::Data<Store>,
    faults: web::Data<Faults>,
) -> Result<HttpResponse, APIError> {
    if let Some(response) = faults.intercept(req.path()).await {
        return Ok(response);
    }
    let post = store
        .post(PostId(id.into_inner()))
        .await
        .ok_or(APIError::NotFound)?;
    Ok(HttpResponse::Ok().json(post))
}

#[tracing::instrument(skip(req, store, faults))]
#[post("/posts")]
pub async fn create_post(
    req: HttpRequest,
    details: web::Json<NewPost>,
    store: web::Data<Store>,
    faults: web::Data<Faults>,
) -> Result<HttpResponse, APIError> {
    if let Some(response) = faults.intercept(req.path()).await {
        return Ok(response);
    }
    details.validate()?;
    let post = store.create_post(details.into_inner()).await;
    tracing::info!(id = %post.id, "created post");
    Ok(HttpResponse::Created().json(post))
}

use actix_web::{HttpRequest, HttpResponse, get, web};

use super::APIError;
use crate::{faults::Faults, store::Store};

#[tracing::instrument(skip_all)]
#[get("/users")]
pub async fn list_users(
    req: HttpRequest,
    store: web::Data<Store>,
    faults: web::Data<Faults>,
) -> Result<HttpResponse, APIError> {
    if let Some(response) = faults.intercept(req.path()).await {
        return Ok(response);
    }
    Ok(HttpResponse::Ok().json(store.users().await))
}

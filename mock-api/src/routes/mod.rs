pub mod albums;
pub mod posts;
pub mod users;

use actix_web::{
    HttpResponse, Responder, ResponseError, body::BoxBody,
    dev::HttpServiceFactory, get, web,
};
use payloads::requests::InvalidPost;

pub fn api_services() -> impl HttpServiceFactory {
    web::scope("")
        .service(health_check)
        .service(posts::list_posts)
        .service(posts::get_post)
        .service(posts::create_post)
        .service(users::list_users)
        .service(albums::list_albums)
}

#[get("/health_check")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("healthy")
}

/// Public errors. Only the top-level message is sent.
#[derive(Debug, thiserror::Error)]
pub enum APIError {
    #[error("Not found")]
    NotFound,
    #[error(transparent)]
    InvalidPost(#[from] InvalidPost),
}

impl ResponseError for APIError {
    fn error_response(&self) -> HttpResponse<BoxBody> {
        match self {
            // the public api answers unknown ids with an empty object
            Self::NotFound => {
                HttpResponse::NotFound().json(serde_json::json!({}))
            }
            Self::InvalidPost(_) => {
                HttpResponse::BadRequest().body(self.to_string())
            }
        }
    }
}

use actix_web::{
    FromRequest, HttpMessage, HttpRequest, dev::Payload, error::ErrorUnauthorized,
};
use futures::future::{Ready, ready};

use crate::model::role::Role;

/// The resolved caller, inserted into request extensions by the gate
/// middleware after the identity header has been matched to a user record.
#[derive(Clone)]
pub struct AuthUser {
    pub user_id: String,
    pub name: String,
    pub role: Option<Role>,
}

impl FromRequest for AuthUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<AuthUser>()
                .cloned()
                .ok_or_else(|| ErrorUnauthorized("Not authenticated")),
        )
    }
}

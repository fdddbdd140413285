use actix_web::middleware::Next;
use actix_web::{
    Error, HttpMessage, HttpResponse,
    body::BoxBody,
    dev::{ServiceRequest, ServiceResponse},
    web::Data,
};
use serde_json::json;
use tracing::warn;

use crate::auth::permissions::required_roles;
use crate::auth::gate::AuthUser;
use crate::config::Config;
use crate::db::Database;

/// Header-based authorization gate.
///
/// Resolves the `x-user-id` header to a user record, matches the record's
/// role case-insensitively against the static permission table, and stashes
/// the caller in request extensions. Runs strictly before any domain
/// service; the services themselves never consult roles.
pub async fn auth_middleware(
    req: ServiceRequest,
    next: Next<BoxBody>,
) -> Result<ServiceResponse<BoxBody>, Error> {
    let config = req
        .app_data::<Data<Config>>()
        .ok_or_else(|| actix_web::error::ErrorInternalServerError("App config missing"))?
        .clone();
    let db = req
        .app_data::<Data<Database>>()
        .ok_or_else(|| actix_web::error::ErrorInternalServerError("Database missing"))?
        .clone();

    let caller_id = match req
        .headers()
        .get("x-user-id")
        .and_then(|h| h.to_str().ok())
        .filter(|id| !id.trim().is_empty())
    {
        Some(id) => id.to_string(),
        None => {
            let resp =
                HttpResponse::Unauthorized().json(json!({"error": "Missing x-user-id header"}));
            return Ok(req.into_response(resp.map_into_boxed_body()));
        }
    };

    let user = match db.users.get(&caller_id).await {
        Ok(Some(u)) => u,
        Ok(None) => {
            let resp = HttpResponse::Unauthorized().json(json!({"error": "Unknown caller"}));
            return Ok(req.into_response(resp.map_into_boxed_body()));
        }
        Err(e) => {
            warn!(error = %e, %caller_id, "caller lookup failed");
            let resp = HttpResponse::BadGateway().json(json!({"error": "record store failure"}));
            return Ok(req.into_response(resp.map_into_boxed_body()));
        }
    };

    let role = user.parsed_role();
    let relative = req
        .path()
        .strip_prefix(config.api_prefix.as_str())
        .unwrap_or_else(|| req.path());
    let allowed = required_roles(relative, req.method());

    // An absent or unrecognized role never satisfies a rule.
    if !role.is_some_and(|r| allowed.contains(&r)) {
        let resp = HttpResponse::Forbidden().json(json!({"error": "Insufficient role"}));
        return Ok(req.into_response(resp.map_into_boxed_body()));
    }

    req.extensions_mut().insert(AuthUser {
        user_id: user.id.clone(),
        name: user.name.clone(),
        role,
    });

    next.call(req).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::test_support::salaried_user;
    use actix_web::http::StatusCode;
    use actix_web::middleware::from_fn;
    use actix_web::{App, HttpResponse as Resp, test, web};

    async fn ok() -> Resp {
        Resp::Ok().finish()
    }

    #[actix_web::test]
    async fn gate_enforces_header_user_and_role() {
        let db = Database::new();
        let mut finance = salaried_user("fin-1", None, 0.0, None);
        finance.role = Some("finance".into()); // lower case on purpose
        db.users.create(finance, Some("fin-1".into())).await.unwrap();
        let mut roleless = salaried_user("anon-1", None, 0.0, None);
        roleless.role = None;
        db.users.create(roleless, Some("anon-1".into())).await.unwrap();

        let config = Config::for_tests();
        let app = test::init_service(
            App::new()
                .app_data(Data::new(db))
                .app_data(Data::new(config))
                .service(
                    web::scope("/api")
                        .wrap(from_fn(auth_middleware))
                        .route("/payrolls", web::get().to(ok)),
                ),
        )
        .await;

        // no header
        let req = test::TestRequest::get().uri("/api/payrolls").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        // unknown caller
        let req = test::TestRequest::get()
            .uri("/api/payrolls")
            .insert_header(("x-user-id", "ghost"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        // caller without a role is denied even role-agnostic paths
        let req = test::TestRequest::get()
            .uri("/api/payrolls")
            .insert_header(("x-user-id", "anon-1"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        // finance role, matched case-insensitively
        let req = test::TestRequest::get()
            .uri("/api/payrolls")
            .insert_header(("x-user-id", "fin-1"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
}

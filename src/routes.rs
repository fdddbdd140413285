use crate::{
    api::{client, expense, invoice, payroll, project, report, task, user, work_log},
    auth::middleware::auth_middleware,
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::{middleware::from_fn, web};

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    // Helper to build per-route limiter
    fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
        let per_ms = if requests_per_min == 0 {
            1
        } else {
            60_000 / requests_per_min as u64
        };
        let cfg = GovernorConfigBuilder::default()
            .per_millisecond(per_ms)
            .burst_size(requests_per_min)
            .key_extractor(PeerIpKeyExtractor)
            .finish()
            .unwrap();
        Governor::new(&cfg)
    }

    let protected_limiter = build_limiter(config.rate_protected_per_min);

    // Everything under the API prefix goes through the gate first.
    cfg.service(
        web::scope(&config.api_prefix)
            .wrap(from_fn(auth_middleware))
            .wrap(protected_limiter)
            .service(
                web::scope("/users")
                    .service(
                        web::resource("")
                            .route(web::post().to(user::create_user))
                            .route(web::get().to(user::list_users)),
                    )
                    .service(
                        web::resource("/by-email").route(web::get().to(user::find_user_by_email)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(user::get_user))
                            .route(web::put().to(user::update_user))
                            .route(web::delete().to(user::delete_user)),
                    ),
            )
            .service(
                web::scope("/projects")
                    .service(
                        web::resource("")
                            .route(web::post().to(project::create_project))
                            .route(web::get().to(project::list_projects)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(project::get_project))
                            .route(web::put().to(project::update_project))
                            .route(web::delete().to(project::delete_project)),
                    ),
            )
            .service(
                web::scope("/tasks")
                    .service(
                        web::resource("")
                            .route(web::post().to(task::create_task))
                            .route(web::get().to(task::list_tasks)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(task::get_task))
                            .route(web::put().to(task::update_task))
                            .route(web::delete().to(task::delete_task)),
                    ),
            )
            .service(
                web::scope("/worklogs")
                    .service(
                        web::resource("")
                            .route(web::post().to(work_log::create))
                            .route(web::get().to(work_log::list)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(work_log::get))
                            .route(web::delete().to(work_log::delete)),
                    ),
            )
            .service(
                web::scope("/payrolls")
                    .service(web::resource("/calculate").route(web::post().to(payroll::calculate)))
                    .service(web::resource("").route(web::get().to(payroll::list)))
                    .service(web::resource("/{id}").route(web::get().to(payroll::get))),
            )
            .service(
                web::scope("/reports")
                    .service(
                        web::resource("/progress/{project_id}")
                            .route(web::get().to(report::project_progress)),
                    )
                    .service(
                        web::resource("/project/{project_id}")
                            .route(web::get().to(report::project_full)),
                    )
                    .service(web::resource("/monthly").route(web::get().to(report::monthly_summary))),
            )
            .service(
                web::scope("/clients")
                    .service(
                        web::resource("")
                            .route(web::post().to(client::create))
                            .route(web::get().to(client::list)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(client::get))
                            .route(web::put().to(client::update))
                            .route(web::delete().to(client::delete)),
                    ),
            )
            .service(
                web::scope("/invoices")
                    .service(
                        web::resource("")
                            .route(web::post().to(invoice::create))
                            .route(web::get().to(invoice::list)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(invoice::get))
                            .route(web::put().to(invoice::update))
                            .route(web::delete().to(invoice::delete)),
                    ),
            )
            .service(
                web::scope("/expenses")
                    .service(
                        web::resource("")
                            .route(web::post().to(expense::create))
                            .route(web::get().to(expense::list)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(expense::get))
                            .route(web::put().to(expense::update))
                            .route(web::delete().to(expense::delete)),
                    ),
            ),
    );
}

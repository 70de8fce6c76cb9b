use paperclip::actix::web;

use crate::handlers;

pub fn config_app(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(handlers::service_info)))
        .service(web::resource("/health").route(web::get().to(handlers::health)))
        .service(
            web::scope("/api")
                .service(
                    web::resource("/badges/{badge_id}")
                        .route(web::get().to(handlers::get_badge)),
                )
                .service(
                    web::scope("/recommendations")
                        .service(
                            web::resource("/user/{user_id}")
                                .route(web::get().to(handlers::get_user_profile)),
                        )
                        .service(
                            web::resource("/{user_id}")
                                .route(web::post().to(handlers::recommend_badges)),
                        ),
                ),
        );
}

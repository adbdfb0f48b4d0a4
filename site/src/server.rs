use actix_files::{Files, NamedFile};
use actix_web::dev::{ServiceRequest, ServiceResponse, fn_service};
use actix_web::web;

use crate::config::SiteConfig;

/// Static assets, the bundle, and `index.html` for anything else.
pub fn routes(cfg: &mut web::ServiceConfig, site: &SiteConfig) {
    let index = site.dist.join("index.html");

    cfg.service(Files::new("/assets", site.assets.clone()))
        .service(
            Files::new("/", site.dist.clone())
                .index_file("index.html")
                .default_handler(fn_service(move |req: ServiceRequest| {
                    let index = index.clone();
                    async move {
                        let (req, _) = req.into_parts();
                        let file = NamedFile::open_async(index).await?;
                        let res = file.into_response(&req);
                        Ok(ServiceResponse::new(req, res))
                    }
                })),
        );
}

use actix_web::{App, HttpServer, middleware::Logger};

mod config;
mod server;

use config::SiteConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let site = SiteConfig::from_env()?;
    log::info!(
        "serving {} (assets {}) on http://{}:{}",
        site.dist.display(),
        site.assets.display(),
        site.host,
        site.port
    );

    let bind = (site.host.clone(), site.port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .configure(|cfg| server::routes(cfg, &site))
    })
    .bind(bind)?
    .run()
    .await?;

    Ok(())
}

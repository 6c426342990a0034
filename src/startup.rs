use std::net::TcpListener;

use actix_cors::Cors;
use actix_web::{dev::Server, middleware::Logger, web, App, HttpServer};

use crate::{
    routes::{default_route, scrape_route},
    services::Vault,
};

pub fn run(listener: TcpListener, vault: Vault) -> Result<Server, std::io::Error> {
    let vault = web::Data::new(vault);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            // All origins allowed; preflight OPTIONS answered with 200
            .wrap(Cors::permissive())
            .service(default_route::default)
            .service(scrape_route::scrape_website)
            .app_data(vault.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}

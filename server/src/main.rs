use actix_files::{Files, NamedFile};
use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use clap::Parser;
use std::path::{Path, PathBuf};

mod config;

use config::Config;

struct AppData {
    index: PathBuf,
}

// every page (login.html, place.html?id=.., ...) boots the same app
async fn index(data: web::Data<AppData>) -> std::io::Result<NamedFile> {
    NamedFile::open(&data.index)
}

fn routes(cfg: &mut web::ServiceConfig, root: &Path) {
    cfg.app_data(web::Data::new(AppData {
        index: root.join("index.html"),
    }))
    .service(bundle("/pkg", root.join("pkg")))
    .service(bundle("/public", root.join("public")));
}

// a missing asset is a 404, not the app shell
fn bundle(mount: &str, dir: PathBuf) -> Files {
    Files::new(mount, dir).default_handler(web::route().to(HttpResponse::NotFound))
}

#[actix_rt::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::parse();
    let index_file = config.root.join("index.html");
    if !index_file.is_file() {
        tracing::warn!("{} not found, pages will answer 404", index_file.display());
    }
    tracing::info!(
        "serving {} on http://{}",
        config.root.display(),
        config.bind
    );

    let root = config.root.clone();
    HttpServer::new(move || {
        let root = root.clone();
        App::new()
            .wrap(Logger::default())
            .configure(move |cfg| routes(cfg, &root))
            .default_service(web::route().to(index))
    })
    .bind(config.bind)?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test};
    use std::fs;

    fn site() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "<section id=\"app\"></section>").unwrap();
        fs::create_dir(dir.path().join("pkg")).unwrap();
        fs::write(dir.path().join("pkg").join("hbnb_client.js"), "export default 1;").unwrap();
        fs::create_dir(dir.path().join("public")).unwrap();
        dir
    }

    #[actix_rt::test]
    async fn pages_serve_the_app_shell() {
        let dir = site();
        let root = dir.path().to_path_buf();
        let app = test::init_service(
            App::new()
                .configure(move |cfg| routes(cfg, &root))
                .default_service(web::route().to(index)),
        )
        .await;

        for uri in ["/", "/index.html", "/login.html", "/place.html?id=42", "/add_review.html?id=42"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let body = test::call_and_read_body(&app, req).await;
            assert_eq!(body, "<section id=\"app\"></section>", "{}", uri);
        }
    }

    #[actix_rt::test]
    async fn bundle_is_served_from_pkg() {
        let dir = site();
        let root = dir.path().to_path_buf();
        let app = test::init_service(
            App::new()
                .configure(move |cfg| routes(cfg, &root))
                .default_service(web::route().to(index)),
        )
        .await;

        let req = test::TestRequest::get().uri("/pkg/hbnb_client.js").to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "export default 1;");

        for uri in ["/pkg/missing.wasm", "/public/missing.css"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{}", uri);
        }
    }
}

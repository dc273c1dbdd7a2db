use std::io;
use std::sync::Arc;

use ntex::web;
use ntex::web::HttpRequest;
use ntex_files::NamedFile;
use spdlog::{error, info};

use crate::config::Config;
use crate::page_builder::{
    build_feed, build_index, build_post_list, build_post_page, build_sitemap, get_file,
};
use crate::query::page_param;
use crate::store::PostStore;

struct AppState {
    config: Config,
    store: PostStore,
}

impl AppState {
    fn from_config(config: Config) -> Self {
        let store = PostStore::new(config.paths.posts_dir.clone(), config.post_file_name());
        AppState { config, store }
    }
}

fn html_ok(body: String) -> web::HttpResponse {
    web::HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

fn server_error(context: &str, e: anyhow::Error) -> web::HttpResponse {
    error!("{}: {}", context, e);
    web::HttpResponse::InternalServerError().body("Internal server error")
}

fn cur_page(req: &HttpRequest) -> u32 {
    req.uri().query().map_or(1, page_param)
}

#[web::get("/")]
async fn index(state: web::types::State<Arc<AppState>>) -> web::HttpResponse {
    match build_index(&state.store, &state.config) {
        Ok(html) => html_ok(html),
        Err(e) => server_error("Error rendering index", e),
    }
}

#[web::get("/blog")]
async fn blog_list(req: HttpRequest, state: web::types::State<Arc<AppState>>) -> web::HttpResponse {
    match build_post_list(&state.store, &state.config, cur_page(&req), None) {
        Ok(html) => html_ok(html),
        Err(e) => server_error("Error rendering post list", e),
    }
}

#[web::get("/blog/category/{category}")]
async fn blog_list_by_category(
    req: HttpRequest,
    path: web::types::Path<String>,
    state: web::types::State<Arc<AppState>>,
) -> web::HttpResponse {
    let category = path.into_inner();
    match build_post_list(&state.store, &state.config, cur_page(&req), Some(&category)) {
        Ok(html) => html_ok(html),
        Err(e) => server_error("Error rendering category list", e),
    }
}

// Post URLs end with a slash so relative image links resolve inside the
// post directory.
#[web::get("/blog/{slug}")]
async fn post_wo_slash(path: web::types::Path<String>) -> web::HttpResponse {
    web::HttpResponse::TemporaryRedirect()
        .header("Location", format!("/blog/{}/", path.into_inner()))
        .content_type("text/html; charset=utf-8")
        .finish()
}

#[web::get("/blog/{slug}/")]
async fn post_view(
    path: web::types::Path<String>,
    state: web::types::State<Arc<AppState>>,
) -> web::HttpResponse {
    let slug = path.into_inner();
    match build_post_page(&state.store, &state.config, &slug) {
        Ok(Some(html)) => html_ok(html),
        Ok(None) => web::HttpResponse::NotFound().body("Post not found"),
        Err(e) => server_error("Error rendering post", e),
    }
}

#[web::get("/blog/{slug}/{file}")]
async fn post_files(
    path: web::types::Path<(String, String)>,
    state: web::types::State<Arc<AppState>>,
) -> Result<NamedFile, web::Error> {
    let (slug, file) = path.into_inner();

    let dir = match state.store.dir_for_slug(&slug) {
        Ok(Some(dir)) => dir,
        Ok(None) => return Err(web::error::ErrorNotFound("Post not found").into()),
        Err(e) => return Err(web::error::ErrorInternalServerError(e).into()),
    };

    get_file(&state.config.paths.posts_dir, &dir, &file)
}

#[web::get("/public/{file}")]
async fn public_files(
    path: web::types::Path<String>,
    state: web::types::State<Arc<AppState>>,
) -> Result<NamedFile, web::Error> {
    let file = path.into_inner();
    if file.contains("..") {
        return Err(web::error::ErrorUnauthorized("Access forbidden").into());
    }

    Ok(NamedFile::open(state.config.paths.public_dir.join(file))?)
}

#[web::get("/sitemap.xml")]
async fn sitemap_xml(state: web::types::State<Arc<AppState>>) -> web::HttpResponse {
    match build_sitemap(&state.store, &state.config) {
        Ok(xml) => web::HttpResponse::Ok()
            .content_type("application/xml; charset=utf-8")
            .body(xml),
        Err(e) => server_error("Error rendering sitemap", e),
    }
}

#[web::get("/rss")]
async fn rss_feed(state: web::types::State<Arc<AppState>>) -> web::HttpResponse {
    match build_feed(&state.store, &state.config) {
        Ok(xml) => web::HttpResponse::Ok()
            .content_type("application/rss+xml; charset=utf-8")
            .body(xml),
        Err(e) => server_error("Error rendering feed", e),
    }
}

pub async fn server_run(config: Config) -> io::Result<()> {
    let bind_addr = config.server.address.clone();
    let bind_port = config.server.port;

    let state = Arc::new(AppState::from_config(config));

    info!(
        "Serving posts from {} on {}:{}",
        state.store.root_dir.display(),
        bind_addr,
        bind_port
    );

    web::HttpServer::new(move || {
        web::App::new()
            .state(state.clone())
            .service(index)
            .service(public_files)
            .service(sitemap_xml)
            .service(rss_feed)
            .service(blog_list)
            .service(blog_list_by_category)
            .service(post_wo_slash)
            .service(post_view)
            .service(post_files)
    })
    .bind((bind_addr, bind_port))?
    .run()
    .await
}

pub mod feed_renderer;
pub mod list_renderer;
pub mod post_renderer;
pub mod sitemap_renderer;

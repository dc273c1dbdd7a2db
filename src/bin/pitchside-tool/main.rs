use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use pitchside::content::DEFAULT_CATEGORY;
use pitchside::store::PostStore;

mod check;
mod init;
mod post;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
enum Args {
    /// Scaffold a new post directory
    Post(PostArgs),
    /// List stored posts, newest first
    List(ListArgs),
    /// Validate the post store layout and slugs
    Check(CheckArgs),
    /// Write a starter site: config, templates and a seed post
    Init(InitArgs),
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct PostArgs {
    /// Title of the post
    #[arg(short, long)]
    pub title: String,

    /// URL slug; derived from the title when omitted
    #[arg(short, long)]
    pub slug: Option<String>,

    /// Category shown in listings
    #[arg(short, long, default_value = DEFAULT_CATEGORY)]
    pub category: String,

    /// Short teaser for listings and the feed
    #[arg(short, long)]
    pub excerpt: Option<String>,

    /// Comma-separated tags
    #[arg(long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Content root the new directory is created under
    #[arg(short, long, default_value = "posts")]
    pub posts_dir: PathBuf,

    /// Content file name inside the post directory
    #[arg(long, default_value = "index.mdx")]
    pub post_file: String,
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct ListArgs {
    /// Content root to list
    #[arg(short, long, default_value = "posts")]
    pub posts_dir: PathBuf,

    /// Content file name inside each post directory
    #[arg(long, default_value = "index.mdx")]
    pub post_file: String,
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct CheckArgs {
    /// Content root to validate
    #[arg(short, long, default_value = "posts")]
    pub posts_dir: PathBuf,

    /// Content file name inside each post directory
    #[arg(long, default_value = "index.mdx")]
    pub post_file: String,
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct InitArgs {
    /// Directory the starter site is written into
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,
}

fn list_cmd(args: &ListArgs) -> Result<()> {
    let store = PostStore::new(args.posts_dir.clone(), &args.post_file);
    let posts = store.list_posts()?;

    if posts.is_empty() {
        println!("No posts under {}", args.posts_dir.display());
        return Ok(());
    }

    for post in posts {
        println!("{}  {}  {}", post.date, post.slug, post.title);
    }
    Ok(())
}

fn main() -> Result<()> {
    match Args::parse() {
        Args::Post(args) => post::post_cmd(&args),
        Args::List(args) => list_cmd(&args),
        Args::Check(args) => check::check_cmd(&args),
        Args::Init(args) => init::init_cmd(&args),
    }
}

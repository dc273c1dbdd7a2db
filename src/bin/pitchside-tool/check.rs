use std::{fs, io};

use anyhow::{bail, Result};

use pitchside::content::frontmatter;
use pitchside::store::PostStore;

use crate::CheckArgs;

pub fn check_cmd(args: &CheckArgs) -> Result<()> {
    let store = PostStore::new(args.posts_dir.clone(), &args.post_file);
    let problems = collect_problems(&store)?;

    if problems.is_empty() {
        println!("{}: store is consistent", args.posts_dir.display());
        return Ok(());
    }

    for problem in &problems {
        eprintln!("{}", problem);
    }
    bail!("{} problem(s) found", problems.len());
}

/// Walks every post directory and reports layout and slug problems. A header
/// slug that drifted from the directory name would make the post invisible
/// to lookups, so it is flagged here instead of being patched at read time.
pub fn collect_problems(store: &PostStore) -> io::Result<Vec<String>> {
    let mut problems = vec![];

    for dir in store.list_dirs()? {
        let content_path = store.root_dir.join(&dir).join(&store.post_file);
        if !content_path.is_file() {
            problems.push(format!("{}: missing {}", dir, store.post_file));
            continue;
        }

        let derived = PostStore::slug_from_dir_name(&dir);
        if derived.is_empty() {
            problems.push(format!("{}: directory name has no slug after the date prefix", dir));
            continue;
        }

        let raw = fs::read_to_string(&content_path)?;
        let (fields, _body) = frontmatter::parse(&raw);
        match fields.slug {
            None => problems.push(format!("{}: header does not declare a slug", dir)),
            Some(declared) if declared != derived => problems.push(format!(
                "{}: header slug \"{}\" does not match directory slug \"{}\"",
                dir, declared, derived
            )),
            Some(_) => {}
        }
    }

    Ok(problems)
}

//! Create a new post

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::content::loader;
use crate::Site;

/// Create a post file from the scaffold, returning its path
pub fn create_post(site: &Site, title: &str, tags: &[String], mdx: bool) -> Result<PathBuf> {
    let slug = slug::slugify(title);
    if slug.is_empty() {
        anyhow::bail!("Cannot derive a file name from title {:?}", title);
    }

    let posts_dir = site.posts_dir();
    fs::create_dir_all(&posts_dir)?;

    let extension = if mdx { "mdx" } else { "md" };
    let file_path = posts_dir.join(format!("{}.{}", slug, extension));
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let scaffold_path = site.base_dir.join("scaffolds").join("post.md");
    let scaffold = if scaffold_path.exists() {
        fs::read_to_string(&scaffold_path)?
    } else {
        "---\ntitle: \"{{ title }}\"\ndescription: \"\"\ndate: {{ date }}\ntags: [{{ tags }}]\ndraft: true\n---\n".to_string()
    };

    let content = scaffold
        .replace("{{ title }}", &escape_double_quoted(title))
        .replace("{{ date }}", &loader::now().format("%Y-%m-%d %H:%M:%S").to_string())
        .replace("{{ tags }}", &tags.join(", "));

    fs::write(&file_path, content)?;
    tracing::info!("Created: {:?}", file_path);

    Ok(file_path)
}

/// Escape text for a double-quoted YAML scalar
fn escape_double_quoted(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

//! New command - create a draft post

use std::{
    fs,
    io::{self, Write},
    path::{Component, Path, PathBuf},
};

use chrono::Utc;
use color_eyre::eyre::{Result, WrapErr, bail};
use folio_core::Config;

use super::build::site_path;

/// Run the new command.
///
/// Creates a markdown post with boilerplate frontmatter under the
/// configured content directory.
pub fn run(config_path: &Path, path: &Path) -> Result<()> {
    tracing::info!(?path, "Creating new post");

    let config = Config::load(config_path).wrap_err("Failed to load configuration")?;
    let content_dir = site_path(config_path, &config.build.content_dir);
    let file_path = create_post(&content_dir, path)?;

    tracing::info!(?file_path, "Created new post");
    println!("Created: {}", file_path.display());

    Ok(())
}

/// Write the post file and return its path. Existing files are never overwritten.
fn create_post(content_dir: &Path, path: &Path) -> Result<PathBuf> {
    if path.as_os_str().is_empty()
        || !path.components().all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
    {
        bail!(
            "{} must be a relative path inside the content directory",
            path.display()
        );
    }

    let full_path = content_dir.join(path);
    let file_path = if full_path.extension().is_some() {
        full_path
    } else {
        full_path.with_extension("md")
    };

    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent).wrap_err("Failed to create directories")?;
    }

    let mut file = match fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&file_path)
    {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            bail!("{} already exists", file_path.display())
        }
        Err(e) => return Err(e).wrap_err("Failed to create file"),
    };
    file.write_all(markdown_frontmatter(path).as_bytes())
        .wrap_err("Failed to write file")?;
    Ok(file_path)
}

fn markdown_frontmatter(path: &Path) -> String {
    let title = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Untitled")
        .replace('-', " ");

    let date = Utc::now().format("%Y-%m-%d").to_string();

    format!(
        r#"---
title: "{title}"
date: {date}
draft: true
tags: []
---

## Introduction

Write your post here.
"#
    )
}

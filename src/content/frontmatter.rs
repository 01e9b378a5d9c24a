//! Front-matter rendering and parsing

use anyhow::Result;
use serde::Deserialize;

/// Scaffold written into every new post. `{{ title }}` is the only variable.
/// The ` -` line before the closing delimiter matches existing posts.
const POST_SCAFFOLD: &str = r#"---
layout: post
title: "{{ title }}"
subtitle: a nice subtitle you need to change
tags: [testing]
mermaid: true
credit-img: Photo by xxx
cover-img: assets/img/house_model_code.png
thumbnail-img: assets/img/house_model_code_tn.png
 -
---
"#;

/// Escape a title for the front-matter `title` field.
///
/// Only `&` is replaced. Quotes and other characters pass through unchanged.
pub fn escape_title(title: &str) -> String {
    title.replace('&', "&amp;")
}

/// Reverse of [`escape_title`]
pub fn unescape_title(title: &str) -> String {
    title.replace("&amp;", "&")
}

/// Render the front-matter block for a new post
pub fn render_scaffold(title: &str) -> String {
    POST_SCAFFOLD.replace("{{ title }}", &escape_title(title))
}

/// Front-matter of an existing post
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
}

impl FrontMatter {
    /// Parse the front-matter at the top of a post
    pub fn parse(content: &str) -> Result<Self> {
        let content = content.trim_start();

        let Some(rest) = content.strip_prefix("---") else {
            return Ok(FrontMatter::default());
        };
        let rest = rest.trim_start_matches(['\n', '\r']);

        // No closing ---, treat as no front-matter
        let Some(end_pos) = rest.find("\n---") else {
            return Ok(FrontMatter::default());
        };

        let yaml_content = &rest[..end_pos];
        if yaml_content.trim().is_empty() {
            return Ok(FrontMatter::default());
        }

        Ok(serde_yaml::from_str::<FrontMatter>(yaml_content)?)
    }
}

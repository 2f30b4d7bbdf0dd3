// Classify project files the way a bundler pipeline would: resolve the
// rule set once, then query it for every file url.

use serde_json::json;
use urlmeta::{MetaValue, apply_aliases, apply_associations, resolve_associations, url_child_may_match};

fn main() -> Result<(), urlmeta::UrlMetaError> {
    let associations = MetaValue::from(json!({
        "chunk": {
            "./**/node_modules/**": "vendor",
            "./src/**": "app",
        },
        "ignore": {
            "./**/*.map": true,
        },
    }));
    let associations = resolve_associations(&associations, "file:///project/")?;

    for url in [
        "file:///project/src/main.js",
        "file:///project/node_modules/lib/index.js",
        "file:///project/src/main.js.map",
    ] {
        let meta = apply_associations(url, &associations)?;
        println!("{url}");
        for (category, value) in &meta {
            println!("  {category}: {:?}", value);
        }
    }

    let worth_descending = url_child_may_match("file:///project/src/", &associations, |meta| {
        meta.get("ignore").is_none_or(|value| !value.is_truthy())
    })?;
    println!("descend into src/: {worth_descending}");

    let mut aliases = urlmeta::AliasMap::default();
    aliases.insert(
        "file:///project/lib/*.js".to_string(),
        "file:///project/dist/lib/*.min.js".to_string(),
    );
    let rewritten = apply_aliases("file:///project/lib/core.js", &aliases)?;
    println!("alias: {rewritten}");

    Ok(())
}

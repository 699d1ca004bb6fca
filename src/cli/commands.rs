//! CLI command implementations.

use crate::classify::classify;
use crate::set::SelectorSet;
use crate::types::SelectorResult;

/// Print the classification groups for each selector.
pub fn cmd_classify(selectors: &[String], json: bool) -> SelectorResult<()> {
    if json {
        let entries: Vec<serde_json::Value> = selectors
            .iter()
            .map(|selector| {
                let groups: Vec<serde_json::Value> = classify(selector)
                    .iter()
                    .map(|key| {
                        serde_json::json!({
                            "kind": key.kind_name(),
                            "key": key.key(),
                        })
                    })
                    .collect();
                serde_json::json!({ "selector": selector, "groups": groups })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&entries).unwrap_or_default()
        );
    } else {
        for selector in selectors {
            println!("{}", selector);
            for key in classify(selector) {
                println!("  {}", key);
            }
        }
    }
    Ok(())
}

/// Build a set from the given selectors and print its index layout.
pub fn cmd_info(selectors: &[String], json: bool) -> SelectorResult<()> {
    let mut set: SelectorSet<()> = SelectorSet::new();
    for selector in selectors {
        set.add(selector.clone(), ());
    }
    let index = set.key_index();

    if json {
        let info = serde_json::json!({
            "registrations": set.len(),
            "bucket_entries": index.entry_count(),
            "buckets": {
                "id_keys": index.id_key_count(),
                "class_keys": index.class_key_count(),
                "tag_keys": index.tag_key_count(),
                "universal": index.universal_count(),
            }
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("Registrations: {}", set.len());
        println!("Bucket entries: {}", index.entry_count());
        println!("Buckets:");
        println!("  ID keys: {}", index.id_key_count());
        println!("  Class keys: {}", index.class_key_count());
        println!("  Tag keys: {}", index.tag_key_count());
        println!("  Universal: {}", index.universal_count());
    }
    Ok(())
}

//! Resolution scenarios against a JSON field store on disk.
//!
//! These tests exercise the full pipeline: JSON store → field group
//! resolver → option builder → resolution service → wire response.

use std::path::Path;
use std::sync::Arc;

use serde_json::json;
use tempfile::TempDir;

use repeater_tags::ajax::{ActionRegistryBuilder, UPDATE_DYNAMIC_TAG_CONTROLS};
use repeater_tags::engine::{ResolutionService, ResolveRequest, Response};
use repeater_tags::fields::JsonFileStore;
use repeater_tags::tags::{TagDescriptor, TagRegistry};

// =============================================================================
// Test Fixtures
// =============================================================================

/// A site export with one post pointing at an "Items" repeater.
const SITE: &str = r#"{
    "posts": {
        "42": { "_ear_field": "field_items" },
        "43": { "_ear_field": "" },
        "44": { "_ear_field": "field_deleted" },
        "45": { "_edit_lock": "1700000000:1" }
    },
    "fields": {
        "field_items": {
            "label": "Items",
            "sub_fields": [
                { "key": "f1", "label": "Name", "type": "text" },
                { "key": "f2", "label": "Photo", "type": "image" }
            ]
        }
    }
}"#;

struct Site {
    dir: TempDir,
}

impl Site {
    fn new(contents: &str) -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        std::fs::write(dir.path().join("fields.json"), contents).expect("write store");
        Self { dir }
    }

    fn store_path(&self) -> std::path::PathBuf {
        self.dir.path().join("fields.json")
    }

    fn service(&self, registry: TagRegistry) -> ResolutionService {
        service_for(&self.store_path(), registry)
    }
}

fn service_for(path: &Path, registry: TagRegistry) -> ResolutionService {
    ResolutionService::new(registry, Arc::new(JsonFileStore::new(path)))
}

fn text_only() -> TagRegistry {
    TagRegistry::new(vec![
        TagDescriptor::new("Elementor_ACF_Repeater_Text", ["text"]).unwrap(),
    ])
    .unwrap()
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn text_tag_binds_only_text_sub_fields() {
    let site = Site::new(SITE);
    let service = site.service(text_only());

    let response = service.handle(&json!({ "post_id": 42 }));

    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({
            "tags": {
                "elementor-acf-repeater-text": [
                    { "label": "Items", "options": { "f1": "Name" } }
                ]
            }
        })
    );
}

#[test]
fn absent_field_group_gives_every_tag_no_groups() {
    let site = Site::new(SITE);
    let service = site.service(TagRegistry::builtin());

    for post in ["43", "44", "45", "999"] {
        let result = service
            .resolve(&ResolveRequest::for_post(post))
            .expect("post id present");
        assert_eq!(result.tags.len(), 5, "post {post}");
        assert!(
            result.tags.values().all(Vec::is_empty),
            "post {post} should have no groups"
        );
    }
}

#[test]
fn overlapping_tags_filter_independently() {
    let site = Site::new(SITE);
    let registry = TagRegistry::new(vec![
        TagDescriptor::new("Plain", ["text"]).unwrap(),
        TagDescriptor::new("Media_Or_Text", ["image", "text"]).unwrap(),
        TagDescriptor::new("Media", ["image"]).unwrap(),
    ])
    .unwrap();
    let service = site.service(registry);

    let response = service.handle(&json!({ "post_id": "42" }));

    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({
            "tags": {
                "plain": [{ "label": "Items", "options": { "f1": "Name" } }],
                "media-or-text": [{ "label": "Items", "options": { "f1": "Name", "f2": "Photo" } }],
                "media": [{ "label": "Items", "options": { "f2": "Photo" } }]
            }
        })
    );
}

#[test]
fn missing_post_id_is_reported() {
    let site = Site::new(SITE);
    let service = site.service(TagRegistry::builtin());

    assert_eq!(
        service.handle(&json!({ "action": "update_dynamic_tag_controls" })),
        Response::Error {
            error: "No post id given.".to_string()
        }
    );
}

#[test]
fn missing_store_file_degrades_to_empty_groups() {
    let dir = TempDir::new().unwrap();
    let service = service_for(&dir.path().join("absent.json"), TagRegistry::builtin());

    let result = service.resolve(&ResolveRequest::for_post(42u64)).unwrap();

    assert!(result.tags.values().all(Vec::is_empty));
}

#[test]
fn corrupt_store_file_degrades_to_empty_groups() {
    let site = Site::new("{ this is not json");
    let service = site.service(TagRegistry::builtin());

    let result = service.resolve(&ResolveRequest::for_post(42u64)).unwrap();

    assert_eq!(result.tags.len(), 5);
    assert!(result.tags.values().all(Vec::is_empty));
}

#[test]
fn repeated_resolution_is_byte_identical() {
    let site = Site::new(SITE);
    let service = site.service(TagRegistry::builtin());
    let params = json!({ "post_id": 42 });

    let first = serde_json::to_string(&service.handle(&params)).unwrap();
    let second = serde_json::to_string(&service.handle(&params)).unwrap();

    assert_eq!(first, second);
}

#[test]
fn edits_to_the_store_show_up_on_the_next_request() {
    let site = Site::new(SITE);
    let service = site.service(text_only());

    let before = service.resolve(&ResolveRequest::for_post(42u64)).unwrap();
    assert_eq!(before.tags["elementor-acf-repeater-text"][0].options.len(), 1);

    std::fs::write(
        site.store_path(),
        SITE.replace(r#""type": "image""#, r#""type": "text""#),
    )
    .unwrap();

    let after = service.resolve(&ResolveRequest::for_post(42u64)).unwrap();
    assert_eq!(after.tags["elementor-acf-repeater-text"][0].options.len(), 2);
}

#[test]
fn builtin_registry_wire_output() {
    let site = Site::new(SITE);
    let actions = ActionRegistryBuilder::new()
        .register_resolution(Arc::new(site.service(TagRegistry::builtin())))
        .unwrap()
        .build();

    let reply = actions
        .dispatch(UPDATE_DYNAMIC_TAG_CONTROLS, &json!({ "post_id": 42 }))
        .unwrap();

    insta::assert_snapshot!(
        serde_json::to_string(&reply).unwrap(),
        @r#"{"tags":{"elementor-acf-repeater-text":[{"label":"Items","options":{"f1":"Name"}}],"elementor-acf-repeater-image":[{"label":"Items","options":{"f2":"Photo"}}],"elementor-acf-repeater-url":[{"label":"Items","options":{}}],"elementor-acf-repeater-gallery":[{"label":"Items","options":{}}],"elementor-acf-repeater-file":[{"label":"Items","options":{}}]}}"#
    );
}

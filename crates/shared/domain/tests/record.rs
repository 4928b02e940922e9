use eshare_domain::record::{DraftMetadata, DraftRecord, PatchOperation, RelatedIdentifier};
use serde_json::json;

#[test]
fn minimal_metadata_serializes_without_related_identifiers() {
    let metadata = DraftMetadata::new("community-1", "My dataset");

    assert_eq!(
        serde_json::to_value(&metadata).unwrap(),
        json!({
            "titles": [{ "title": "My dataset" }],
            "community": "community-1",
            "open_access": true
        })
    );
}

#[test]
fn derived_metadata_links_the_original_handle() {
    let metadata = DraftMetadata::new("community-1", "Derived")
        .with_related(RelatedIdentifier::derived_from_handle("21.14106/abc"));

    let value = serde_json::to_value(&metadata).unwrap();
    assert_eq!(
        value["related_identifiers"],
        json!([{
            "related_identifier": "21.14106/abc",
            "related_identifier_type": "Handle",
            "relation_type": "IsDerivedFrom"
        }])
    );
}

#[test]
fn submit_patch_matches_the_publication_workflow() {
    let patch = vec![PatchOperation::submit_for_publication()];
    assert_eq!(
        serde_json::to_value(&patch).unwrap(),
        json!([{ "op": "add", "path": "/publication_state", "value": "submitted" }])
    );
}

#[test]
fn draft_record_display_names_both_ids() {
    let draft = DraftRecord { record_id: "r1".to_owned(), filebucket_id: "b1".to_owned() };
    assert_eq!(draft.to_string(), "record r1 (file bucket b1)");
}

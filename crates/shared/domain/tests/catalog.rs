use phub_domain::catalog::Catalog;
use phub_domain::message::FrameMessage;
use phub_domain::selection::Selection;
use serde_json::json;

fn sample() -> Catalog {
    serde_json::from_value(json!({
        "groups": [
            {
                "id": "tools",
                "name": "Tools",
                "sites": [
                    { "id": "calc", "label": "Calculator", "description": "Adds", "url": "/calc/", "embed": true },
                    { "id": "wiki", "label": "Wiki", "url": "https://wiki.example" }
                ]
            },
            {
                "id": "games",
                "name": "Games",
                "url": "/games/",
                "sites": [
                    { "id": "chess", "label": "Chess", "description": "", "url": "/chess/", "embed": true }
                ]
            }
        ]
    }))
    .expect("catalog deserialize")
}

#[test]
fn catalog_deserializes_with_optional_fields() {
    let catalog = sample();
    assert_eq!(catalog.groups.len(), 2);

    let wiki = catalog.site("wiki").expect("wiki present");
    assert!(!wiki.embed, "embed defaults to false");
    assert!(wiki.description.is_empty(), "description defaults to empty");

    assert!(catalog.group("tools").is_some_and(|g| !g.is_navigable()));
    assert!(catalog.group("games").is_some_and(|g| g.is_navigable()));
}

#[test]
fn lookups_follow_sidebar_order() {
    let catalog = sample();
    let ids: Vec<_> = catalog.sites().map(|site| site.id.as_str()).collect();
    assert_eq!(ids, ["calc", "wiki", "chess"]);

    assert_eq!(catalog.groups.last().map(|g| g.id.as_str()), Some("games"));
    assert!(catalog.site("games").is_none(), "group ids are not site ids");
    assert!(catalog.group("nope").is_none());
}

#[test]
fn null_group_url_is_accepted() {
    let catalog: Catalog = serde_json::from_value(json!({
        "groups": [{ "id": "g1", "name": "G", "url": null, "sites": [] }]
    }))
    .expect("catalog deserialize");
    assert!(catalog.groups[0].url.is_none());
    assert!(!catalog.groups[0].is_navigable());
}

#[test]
fn navigate_message_uses_wire_names() {
    let msg: FrameMessage =
        serde_json::from_value(json!({ "type": "navigate", "siteId": "calc" })).expect("message");
    assert_eq!(msg, FrameMessage::Navigate { site_id: "calc".to_owned() });

    assert!(serde_json::from_value::<FrameMessage>(json!({ "type": "reload" })).is_err());
    assert!(serde_json::from_value::<FrameMessage>(json!({ "siteId": "calc" })).is_err());
}

#[test]
fn selection_accessors() {
    assert!(Selection::default().is_home());
    assert_eq!(Selection::Site("a".into()).site_id(), Some("a"));
    assert_eq!(Selection::Site("a".into()).group_id(), None);
    assert_eq!(Selection::Group("g".into()).to_string(), "group:g");
}

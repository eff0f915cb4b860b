use phub_kernel::prelude::*;
use phub_kernel::query;
use proptest::prelude::*;
use serde_json::json;

const ORIGIN: &str = "https://hub.example";

fn catalog_strategy() -> impl Strategy<Value = Catalog> {
    (
        proptest::collection::btree_set("[a-z][a-z0-9_-]{0,7}", 1..12),
        proptest::collection::vec(any::<bool>(), 12),
        proptest::collection::vec(any::<bool>(), 1..4),
    )
        .prop_map(|(site_ids, embeds, group_urls)| {
            let mut groups: Vec<Group> = group_urls
                .iter()
                .enumerate()
                .map(|(i, has_url)| Group {
                    id: format!("G{i}"),
                    name: format!("Group {i}"),
                    url: has_url.then(|| format!("/groups/{i}/")),
                    sites: Vec::new(),
                })
                .collect();

            let count = groups.len();
            for (i, id) in site_ids.into_iter().enumerate() {
                groups[i % count].sites.push(Site {
                    label: format!("Label {id}"),
                    description: format!("About {id}"),
                    url: format!("/sites/{id}/"),
                    embed: embeds[i],
                    id,
                });
            }
            Catalog::new(groups)
        })
}

fn started(catalog: Catalog, search: &str) -> Navigator<Screen, MemoryLocation> {
    let location = MemoryLocation::new(ORIGIN).with_search(search);
    let mut nav = Navigator::new(catalog, Screen::default(), location);
    nav.start();
    nav
}

fn site_ids(catalog: &Catalog) -> Vec<String> {
    catalog.sites().map(|site| site.id.clone()).collect()
}

proptest! {
    #[test]
    fn load_site_sets_exact_query_and_single_highlight(catalog in catalog_strategy()) {
        let ids = site_ids(&catalog);
        let mut nav = started(catalog, "");

        for id in &ids {
            prop_assert!(nav.load_site(id));

            let search = nav.location().search();
            prop_assert_eq!(&search, &format!("?site={id}"));
            prop_assert!(!search.contains("group="));
            prop_assert_eq!(nav.selection(), &Selection::Site(id.clone()));

            let highlighted: Vec<_> = ids.iter().filter(|other| nav.view().is_site_active(other)).collect();
            prop_assert_eq!(highlighted, vec![id]);
        }
    }

    #[test]
    fn load_group_respects_navigability(catalog in catalog_strategy()) {
        let groups = catalog.groups.clone();
        let mut nav = started(catalog, "");

        for group in &groups {
            let before_view = nav.view().clone();
            let before_search = nav.location().search();
            let before_selection = nav.selection().clone();

            let loaded = nav.load_group(&group.id);
            prop_assert_eq!(loaded, group.url.is_some());

            if loaded {
                prop_assert_eq!(nav.location().search(), format!("?group={}", group.id));
                prop_assert!(nav.view().is_group_active(&group.id));
                prop_assert_eq!(nav.view().content().url(), group.url.as_deref());
            } else {
                prop_assert_eq!(nav.view(), &before_view);
                prop_assert_eq!(nav.location().search(), before_search);
                prop_assert_eq!(nav.selection(), &before_selection);
            }
        }
    }

    #[test]
    fn home_clears_parameters_and_highlight(catalog in catalog_strategy(), pick in any::<prop::sample::Index>()) {
        let ids = site_ids(&catalog);
        let id = pick.get(&ids).clone();
        let mut nav = started(catalog, &format!("?site={id}"));

        nav.load_home_page();

        prop_assert_eq!(nav.location().search(), "");
        prop_assert!(nav.selection().is_home());
        prop_assert_eq!(nav.view().active(), &Selection::Home);
        prop_assert!(ids.iter().all(|id| !nav.view().is_site_active(id)));
        prop_assert_eq!(nav.view().external_link(), None);
    }

    #[test]
    fn startup_query_round_trips_with_direct_load(catalog in catalog_strategy(), pick in any::<prop::sample::Index>()) {
        let ids = site_ids(&catalog);
        let id = pick.get(&ids).clone();

        let from_url = started(catalog.clone(), &query::render(&Selection::Site(id.clone())));

        let mut direct = started(catalog, "");
        prop_assert!(direct.load_site(&id));

        prop_assert_eq!(from_url.view(), direct.view());
        prop_assert_eq!(from_url.selection(), direct.selection());
        prop_assert_eq!(from_url.location().search(), direct.location().search());
    }

    #[test]
    fn unknown_startup_id_falls_back_home(catalog in catalog_strategy(), suffix in "[A-Z]{1,4}") {
        let nav = started(catalog, &format!("?site=unknown-{suffix}"));

        prop_assert!(nav.selection().is_home());
        prop_assert_eq!(nav.location().search(), "");
        prop_assert_eq!(nav.view().content().url(), Some("./sites/home/"));
    }

    #[test]
    fn navigate_message_matches_sidebar_click(catalog in catalog_strategy(), pick in any::<prop::sample::Index>()) {
        let ids = site_ids(&catalog);
        let id = pick.get(&ids).clone();

        let mut clicked = started(catalog.clone(), "");
        clicked.load_site(&id);

        let mut messaged = started(catalog, "");
        let outcome = messaged.handle_message(ORIGIN, &json!({ "type": "navigate", "siteId": id }));

        prop_assert_eq!(outcome, MessageOutcome::Navigated(id.clone()));
        prop_assert_eq!(messaged.view(), clicked.view());
        prop_assert_eq!(messaged.location().entries(), clicked.location().entries());
    }
}

#[test]
fn single_group_scenario() {
    let catalog = parse_catalog(
        r#"{ "groups": [
            { "id": "g1", "name": "G1", "sites": [
                { "id": "s1", "label": "First", "description": "", "url": "/a", "embed": true }
            ]}
        ]}"#,
    )
    .expect("valid catalog");

    let nav = started(catalog.clone(), "?site=s1");
    assert_eq!(nav.view().content(), &Content::Embedded { url: "/a".into(), loading: true });
    assert_eq!(nav.view().title(), "First");
    assert!(nav.view().is_site_active("s1"));

    let nav = started(catalog, "?site=unknown");
    assert!(nav.selection().is_home());
    assert_eq!(nav.view().title(), "Projects Hub");
    assert!(!nav.view().is_site_active("s1"));
}

#[test]
fn back_and_forward_restore_without_new_entries() {
    let catalog = parse_catalog(
        r#"{ "groups": [
            { "id": "g", "name": "G", "url": "/g/", "sites": [
                { "id": "a", "label": "A", "url": "/a", "embed": true },
                { "id": "b", "label": "B", "url": "https://b.example" }
            ]}
        ]}"#,
    )
    .expect("valid catalog");

    let mut nav = started(catalog, "");
    nav.load_site("a");
    nav.load_site("b");
    nav.load_group("g");
    assert_eq!(nav.location().entries(), ["", "?site=a", "?site=b", "?group=g"]);

    assert!(nav.location_mut().back());
    nav.restore();
    assert_eq!(nav.selection(), &Selection::Site("b".into()));
    assert_eq!(nav.view().content(), &Content::Fallback { url: "https://b.example".into() });

    assert!(nav.location_mut().back());
    assert!(nav.location_mut().back());
    nav.restore();
    assert!(nav.selection().is_home());

    assert!(nav.location_mut().forward());
    nav.restore();
    assert_eq!(nav.selection(), &Selection::Site("a".into()));
    assert_eq!(nav.location().entries().len(), 4, "restoring never pushes");
}

#[test]
fn restore_rewrites_stale_entries() {
    let catalog = parse_catalog(r#"{ "groups": [] }"#).expect("valid catalog");
    let mut nav = started(catalog, "");

    nav.location_mut().push("?site=removed");
    nav.restore();

    assert!(nav.selection().is_home());
    assert_eq!(nav.location().entries(), ["", ""]);
}

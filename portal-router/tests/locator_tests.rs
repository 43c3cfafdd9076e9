/*
 * Copyright (c) 2024. Govcraft
 *
 * Licensed under either of
 *   * Apache License, Version 2.0 (the "License");
 *     you may not use this file except in compliance with the License.
 *     You may obtain a copy of the License at http://www.apache.org/licenses/LICENSE-2.0
 *   * MIT license: http://opensource.org/licenses/MIT
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the applicable License for the specific language governing permissions and
 * limitations under that License.
 */

//! Tests for portal directory resolution across ordered locations.

use portal_router::prelude::*;

use crate::setup::*;

mod setup;

fn locations(paths: &[&str]) -> Vec<PathBuf> {
    paths.iter().map(PathBuf::from).collect()
}

/// Tests that a named portal is matched and the path keeps its portal segment.
#[test]
fn test_named_portal_is_matched() {
    initialize_tracing();
    let store = MemoryStore::with_dirs(&["/app/portals/blog", "/app/portals/site"]);
    let locator = PortalLocator::new(&store, "portals", "site");

    let located = locator
        .locate(&segments(&["blog", "post", "1"]), &locations(&["/app"]))
        .expect("blog portal");

    assert_eq!(located.dir, PathBuf::from("/app/portals/blog"));
    assert_eq!(located.name, "blog");
    assert_eq!(located.path, segments(&["blog", "post", "1"]));
    // The router consumes the first segment; the rest is the in-portal path.
    assert_eq!(&located.path[1..], &segments(&["post", "1"])[..]);
}

/// Tests that the first segment is matched case-insensitively and the lower-cased name is reported.
#[test]
fn test_portal_name_is_lower_cased() {
    let store = MemoryStore::with_dirs(&["/app/portals/blog"]);
    let locator = PortalLocator::new(&store, "portals", "site");

    let located = locator
        .locate(&segments(&["BLOG", "Post"]), &locations(&["/app"]))
        .expect("blog portal");

    assert_eq!(located.dir, PathBuf::from("/app/portals/blog"));
    assert_eq!(located.name, "blog");
    assert_eq!(located.path, segments(&["BLOG", "Post"]));
}

/// Tests that the first location holding the portal wins, not the best match.
#[test]
fn test_first_location_wins() {
    let store = MemoryStore::with_dirs(&[
        "/vendor/portals/blog",
        "/app/portals/blog",
        "/app/portals/site",
    ]);
    let locator = PortalLocator::new(&store, "portals", "site");

    let located = locator
        .locate(&segments(&["blog"]), &locations(&["/app", "/vendor"]))
        .expect("blog portal");
    assert_eq!(located.dir, PathBuf::from("/app/portals/blog"));

    let located = locator
        .locate(&segments(&["blog"]), &locations(&["/vendor", "/app"]))
        .expect("blog portal");
    assert_eq!(located.dir, PathBuf::from("/vendor/portals/blog"));
}

/// Tests that an unknown first segment falls back to the default portal with the name prepended.
#[test]
fn test_unknown_portal_falls_back_to_site() {
    let store = MemoryStore::with_dirs(&["/app/portals/site"]);
    let locator = PortalLocator::new(&store, "portals", "site");

    let located = locator
        .locate(&segments(&["blog", "post", "1"]), &locations(&["/app"]))
        .expect("site portal");

    assert_eq!(located.dir, PathBuf::from("/app/portals/site"));
    assert_eq!(located.name, "site");
    assert_eq!(located.path, segments(&["site", "blog", "post", "1"]));
}

/// Tests that the named search covers every location before the default search starts.
#[test]
fn test_named_portal_in_later_location_beats_default_in_earlier() {
    let store = MemoryStore::with_dirs(&["/app/portals/site", "/vendor/portals/shop"]);
    let locator = PortalLocator::new(&store, "portals", "site");

    let located = locator
        .locate(&segments(&["shop"]), &locations(&["/app", "/vendor"]))
        .expect("shop portal");
    assert_eq!(located.dir, PathBuf::from("/vendor/portals/shop"));
}

/// Tests that an empty path names the default portal without rewriting.
#[test]
fn test_empty_path_names_default_portal() {
    let store = MemoryStore::with_dirs(&["/app/portals/site"]);
    let locator = PortalLocator::new(&store, "portals", "site");

    let located = locator.locate(&[], &locations(&["/app"])).expect("site portal");
    assert_eq!(located.dir, PathBuf::from("/app/portals/site"));
    assert_eq!(located.name, "site");
    assert!(located.path.is_empty());
}

/// Tests that nothing is located when neither the named nor the default portal exists.
#[test]
fn test_no_match_without_default_portal() {
    let store = MemoryStore::with_dirs(&["/app/portals/shop"]);
    let locator = PortalLocator::new(&store, "portals", "site");

    assert!(locator
        .locate(&segments(&["blog"]), &locations(&["/app"]))
        .is_none());
    assert!(locator.locate(&[], &locations(&["/app"])).is_none());
    assert!(locator.locate(&segments(&["blog"]), &[]).is_none());
}

/// Tests that the locator honours custom naming conventions.
#[test]
fn test_custom_portals_dir_and_default() {
    let store = MemoryStore::with_dirs(&["/app/apps/main"]);
    let locator = PortalLocator::new(&store, "apps", "main");

    let located = locator
        .locate(&segments(&["missing"]), &locations(&["/app"]))
        .expect("main portal");
    assert_eq!(located.dir, PathBuf::from("/app/apps/main"));
    assert_eq!(located.path, segments(&["main", "missing"]));
    assert_eq!(locator.portal_dir(Path::new("/x"), "y"), PathBuf::from("/x/apps/y"));
}

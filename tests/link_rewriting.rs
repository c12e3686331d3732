//! End-to-end link rewriting through the decorator.
//!
//! Each test builds its own store so configurations never bleed between
//! cases; the fake generator stands in for the framework URL builder.

use std::sync::Arc;

use subdomain_rewriter::observability::logging::init_logging;
use subdomain_rewriter::{
    ConfigStore, LinkGenerator, LinkOptions, PreferredMirror, RewriterConfig, SubdomainRewriter,
};

mod common;
use common::{FakeGenerator, MissingHost};

/// Store configured like a production-ish site: TLD width 1, absolute
/// URLs forced through `only_path`.
fn site_store() -> Arc<ConfigStore> {
    init_logging();
    let mut config = RewriterConfig::default();
    config.set_tld_size(1);
    config.override_only_path = true;
    Arc::new(ConfigStore::with_config(config))
}

#[test]
fn test_adds_a_subdomain() {
    let rewriter =
        SubdomainRewriter::new(FakeGenerator, site_store()).with_request_host("example.com");

    let url = rewriter
        .url_for("something/other", &LinkOptions::new().subdomain("awesome"))
        .unwrap();
    assert_eq!(url, "http://awesome.example.com/something/other");
}

#[test]
fn test_removes_a_subdomain() {
    let rewriter = SubdomainRewriter::new(FakeGenerator, site_store());

    let url = rewriter
        .url_for(
            "something/other",
            &LinkOptions::new()
                .host("awesome.example.com")
                .remove_subdomain(),
        )
        .unwrap();
    assert_eq!(url, "http://example.com/something/other");
}

#[test]
fn test_does_not_change_a_mirrored_subdomain() {
    let rewriter = SubdomainRewriter::new(FakeGenerator, site_store());

    let url = rewriter
        .url_for(
            "something/other",
            &LinkOptions::new()
                .host("www.example.com")
                .remove_subdomain(),
        )
        .unwrap();
    assert_eq!(url, "http://www.example.com/something/other");
}

#[test]
fn test_only_path_wins_without_override() {
    let store = site_store();
    store
        .update(|config| config.override_only_path = false)
        .unwrap();
    let rewriter = SubdomainRewriter::new(FakeGenerator, store).with_request_host("example.com");

    let url = rewriter
        .url_for(
            "something/other",
            &LinkOptions::new().subdomain("awesome").only_path(true),
        )
        .unwrap();
    assert_eq!(url, "/something/other");
}

#[test]
fn test_override_forces_full_url() {
    let rewriter =
        SubdomainRewriter::new(FakeGenerator, site_store()).with_request_host("example.com");

    let url = rewriter
        .url_for(
            "something/other",
            &LinkOptions::new().subdomain("awesome").only_path(true),
        )
        .unwrap();
    assert_eq!(url, "http://awesome.example.com/something/other");
}

#[test]
fn test_removal_switches_to_preferred_mirror() {
    let store = site_store();
    store
        .update(|config| config.preferred_mirror = PreferredMirror::Label("www".to_string()))
        .unwrap();
    let rewriter =
        SubdomainRewriter::new(FakeGenerator, store).with_request_host("awesome.example.com");

    let url = rewriter
        .url_for("needs_subdomain", &LinkOptions::new().remove_subdomain())
        .unwrap();
    assert_eq!(url, "http://www.example.com/needs_subdomain");
}

#[test]
fn test_strip_preference_removes_a_mirror() {
    let store = site_store();
    store
        .update(|config| config.preferred_mirror = PreferredMirror::Strip)
        .unwrap();
    let rewriter =
        SubdomainRewriter::new(FakeGenerator, store).with_request_host("www.example.com");

    let url = rewriter
        .url_for("needs_subdomain", &LinkOptions::new().remove_subdomain())
        .unwrap();
    assert_eq!(url, "http://example.com/needs_subdomain");
}

#[test]
fn test_unspecified_subdomain_leaves_host_alone() {
    let store = site_store();
    store
        .update(|config| config.preferred_mirror = PreferredMirror::Label("www".to_string()))
        .unwrap();
    let rewriter =
        SubdomainRewriter::new(FakeGenerator, store).with_request_host("awesome.example.com");

    // Forced absolute, but no opinion on the subdomain: the host passes
    // through even though a preferred mirror is configured.
    let url = rewriter
        .url_for("foos/something", &LinkOptions::new().only_path(false))
        .unwrap();
    assert_eq!(url, "http://awesome.example.com/foos/something");
}

#[test]
fn test_request_port_is_preserved() {
    let rewriter =
        SubdomainRewriter::new(FakeGenerator, site_store()).with_request_host("example.com:3000");

    let url = rewriter
        .url_for("something/other", &LinkOptions::new().subdomain("awesome"))
        .unwrap();
    assert_eq!(url, "http://awesome.example.com:3000/something/other");
}

#[test]
fn test_explicit_host_beats_request_host() {
    let rewriter =
        SubdomainRewriter::new(FakeGenerator, site_store()).with_request_host("example.com");

    let url = rewriter
        .url_for(
            "something/other",
            &LinkOptions::new().host("other.org").subdomain("cool"),
        )
        .unwrap();
    assert_eq!(url, "http://cool.other.org/something/other");
}

#[test]
fn test_boundary_host_is_never_touched() {
    let rewriter = SubdomainRewriter::new(FakeGenerator, site_store());

    // TLD width 1 leaves no room for a subdomain on a single label.
    let url = rewriter
        .url_for(
            "something/other",
            &LinkOptions::new().host("localhost").subdomain("cool"),
        )
        .unwrap();
    assert_eq!(url, "http://localhost/something/other");
}

#[test]
fn test_generator_error_passes_through() {
    let rewriter = SubdomainRewriter::new(FakeGenerator, site_store());

    // No request, no host option: the generator's own failure surfaces.
    let err = rewriter
        .url_for("something/other", &LinkOptions::new().subdomain("awesome"))
        .unwrap_err();
    assert_eq!(err, MissingHost);
}

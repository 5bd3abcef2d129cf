use fluent_url::UrlBuilder;
use std::error::Error;

#[test]
fn parses_assembled_urls() {
    let builder = UrlBuilder::initialize(["https://example.com"])
        .unwrap()
        .add_path_part("blog")
        .upsert_query_param("page", "2")
        .set_fragment("comments");

    let uri = builder.to_uri().unwrap();
    assert_eq!(uri.as_str(), "https://example.com/blog?page=2#comments");
    assert_eq!(uri.scheme().as_str(), "https");
    assert_eq!(uri.path().as_str(), "/blog");
    assert_eq!(uri.query().map(|q| q.as_str()), Some("page=2"));
    assert_eq!(uri.fragment().map(|f| f.as_str()), Some("comments"));
}

#[test]
fn round_trips_exactly() {
    let builders = [
        UrlBuilder::initialize(["https://example.com"]).unwrap(),
        UrlBuilder::initialize(["https://example.com", "a", "b"])
            .unwrap()
            .upsert_query_param("k1", "v1")
            .upsert_query_param("k2", "")
            .set_fragment("frag"),
        UrlBuilder::initialize(["urn:isbn:0451450523"]).unwrap(),
    ];

    for builder in builders {
        let uri = builder.to_uri().unwrap();
        assert_eq!(uri.to_string(), builder.to_string());
    }
}

#[test]
fn converts_repeatedly_without_mutation() {
    let builder = UrlBuilder::initialize(["https://example.com"]).unwrap();
    assert_eq!(
        builder.to_uri().unwrap().as_str(),
        builder.to_uri().unwrap().as_str()
    );
}

#[test]
fn fails_without_a_scheme() {
    let err = UrlBuilder::initialize(["example.com"])
        .unwrap()
        .add_path_part("blog")
        .to_uri()
        .unwrap_err();
    assert_eq!(err.input(), "example.com/blog");
    assert_eq!(err.into_input(), "example.com/blog");
}

#[test]
fn reports_the_parse_failure() {
    let err = UrlBuilder::initialize(["https://exa mple.com"])
        .unwrap()
        .to_uri()
        .unwrap_err();
    assert!(err.to_string().starts_with("assembled URL is not a valid URI"));
    assert!(err.source().is_some());
}

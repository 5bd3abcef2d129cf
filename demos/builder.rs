use fluent_url::UrlBuilder;

fn main() {
    let builder = UrlBuilder::initialize(["https://example.com", "blog"])
        .expect("parts contain a usable segment")
        .add_path_part("2026")
        .add_path_part_if("drafts", false)
        .upsert_query_param("page", "2")
        .set_fragment("comments");

    println!("{builder}");
    println!("{builder:#?}");

    match builder.to_uri() {
        Ok(uri) => println!("parsed: {uri}"),
        Err(e) => println!("rejected: {e}"),
    }
}

use folio_core::{map_to_view_model, BookViewModel, CatalogSearchResponse, RawCatalogRecord};

// --- Fixtures ---

fn full_record_json() -> &'static str {
    r#"{
        "kind": "books#volume",
        "id": "B1hSG45JCX4C",
        "volumeInfo": {
            "title": "Dune",
            "authors": ["Frank Herbert", "Brian Herbert"],
            "publisher": "Penguin",
            "publishedDate": "2003-08-01",
            "description": "<p>Set on the desert planet <b>Arrakis</b>, Dune is the story of Paul.</p>",
            "pageCount": 604,
            "categories": ["Fiction"],
            "imageLinks": {
                "smallThumbnail": "http://books.google.com/small.jpg",
                "thumbnail": "http://books.google.com/thumb.jpg"
            },
            "language": "en"
        },
        "saleInfo": {
            "country": "US",
            "listPrice": { "amount": 9.99, "currencyCode": "USD" }
        }
    }"#
}

fn parse(json: &str) -> RawCatalogRecord {
    serde_json::from_str(json).expect("record should parse")
}

fn assert_fully_populated(vm: &BookViewModel) {
    for (name, value) in [
        ("id", &vm.id),
        ("title", &vm.title),
        ("author", &vm.author),
        ("price", &vm.price),
        ("description", &vm.description),
        ("publisher", &vm.publisher),
        ("publication_date", &vm.publication_date),
        ("language", &vm.language),
        ("page_count", &vm.page_count),
        ("primary image", &vm.images[0]),
        ("secondary image", &vm.images[1]),
    ] {
        assert!(!value.trim().is_empty(), "{name} should never be empty");
    }
}

// --- Tests ---

#[test]
fn full_record_maps_every_field() {
    let vm = map_to_view_model(&parse(full_record_json()));

    assert_eq!(vm.id, "B1hSG45JCX4C");
    assert_eq!(vm.title, "Dune");
    assert_eq!(vm.author, "Frank Herbert, Brian Herbert");
    assert_eq!(vm.price, "9.99");
    assert_eq!(
        vm.description,
        "Set on the desert planet Arrakis, Dune is the story of Paul...."
    );
    assert_eq!(vm.publisher, "Penguin");
    assert_eq!(vm.publication_date, "2003-08-01");
    assert_eq!(vm.language, "en");
    assert_eq!(vm.page_count, "604");
    assert_eq!(vm.primary_image(), "http://books.google.com/thumb.jpg");
    assert_eq!(vm.secondary_image(), "http://books.google.com/small.jpg");
    assert_fully_populated(&vm);
}

#[test]
fn record_missing_every_optional_field_uses_fallbacks() {
    let vm = map_to_view_model(&parse(r#"{ "id": "bare", "volumeInfo": {} }"#));

    assert_eq!(vm.id, "bare");
    assert_eq!(vm.title, "Untitled");
    assert_eq!(vm.author, "Unknown Author");
    assert_eq!(vm.price, "12.49");
    assert_eq!(vm.description, "No description available.");
    assert_eq!(vm.publisher, "Unknown Publisher");
    assert_eq!(vm.publication_date, "Unknown Date");
    assert_eq!(vm.language, "Unknown Language");
    assert_eq!(vm.page_count, "N/A");
    assert_eq!(
        vm.images,
        [
            "https://via.placeholder.com/150".to_string(),
            "https://via.placeholder.com/150".to_string()
        ]
    );
    assert_fully_populated(&vm);
}

#[test]
fn each_image_is_defaulted_independently() {
    let vm = map_to_view_model(&parse(
        r#"{ "id": "x", "volumeInfo": { "imageLinks": { "smallThumbnail": "https://img/small.jpg" } } }"#,
    ));

    assert_eq!(vm.primary_image(), "https://via.placeholder.com/150");
    assert_eq!(vm.secondary_image(), "https://img/small.jpg");
}

#[test]
fn explicit_nulls_are_treated_as_missing() {
    let vm = map_to_view_model(&parse(
        r#"{
            "id": "nulls",
            "volumeInfo": { "title": null, "authors": null, "publisher": "", "pageCount": 0 },
            "saleInfo": { "listPrice": null }
        }"#,
    ));

    assert_eq!(vm.title, "Untitled");
    assert_eq!(vm.author, "Unknown Author");
    assert_eq!(vm.publisher, "Unknown Publisher");
    assert_eq!(vm.page_count, "N/A");
    assert_eq!(vm.price, "12.49");
}

#[test]
fn long_description_is_cut_to_500_characters_plus_ellipsis() {
    let body: String = "abcdefghij".repeat(80);
    let raw = parse(&format!(
        r#"{{ "id": "long", "volumeInfo": {{ "description": "<div>{body}</div>" }} }}"#
    ));

    let vm = map_to_view_model(&raw);

    assert_eq!(vm.description.chars().count(), 503);
    assert!(vm.description.ends_with("..."));
    assert_eq!(&vm.description[..500], &body[..500]);
}

#[test]
fn mapped_description_contains_no_markup() {
    let raw = parse(
        r#"{ "id": "m", "volumeInfo": { "description": "<p><i>One</i><br>two <a href=\"x\">three</a></p>" } }"#,
    );

    let vm = map_to_view_model(&raw);

    assert!(!vm.description.contains('<'));
    assert!(!vm.description.contains('>'));
    assert_eq!(vm.description, "Onetwo three...");
}

#[test]
fn mapping_is_idempotent() {
    let raw = parse(full_record_json());
    assert_eq!(map_to_view_model(&raw), map_to_view_model(&raw));
}

#[test]
fn record_without_volume_info_is_rejected() {
    let res: Result<RawCatalogRecord, _> = serde_json::from_str(r#"{ "id": "x" }"#);
    assert!(res.is_err());
}

#[test]
fn search_response_without_items_is_empty() {
    let resp: CatalogSearchResponse =
        serde_json::from_str(r#"{ "kind": "books#volumes", "totalItems": 0 }"#).unwrap();
    assert!(resp.items.is_empty());
    assert_eq!(resp.total_items, 0);
}

use super::*;

#[test]
fn text_fields_keep_insertion_order() {
    let form = MultipartForm::new().text("title", "Crimps").text("category", "Other");
    assert_eq!(
        form.fields(),
        [("title".to_owned(), "Crimps".to_owned()), ("category".to_owned(), "Other".to_owned())]
    );
}

#[test]
fn field_lookup_returns_first_match() {
    let form = MultipartForm::new().text("tag", "a").text("tag", "b");
    assert_eq!(form.field("tag"), Some("a"));
    assert_eq!(form.field("missing"), None);
}

#[test]
fn empty_form_has_no_fields() {
    assert!(MultipartForm::new().fields().is_empty());
}

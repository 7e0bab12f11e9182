use shopping_list::api::{AddItemForm, ShoppingListConfig, ShoppingListController, bootstrap};
use shopping_list::core::LineItem;
use shopping_list::render::MemorySink;

fn seeded() -> ShoppingListController<MemorySink> {
    bootstrap(MemorySink::new(), &ShoppingListConfig::default()).expect("bootstrap")
}

#[test]
fn bootstrap_renders_sample_items_in_insertion_order() {
    let controller = seeded();

    assert_eq!(
        controller.sink().texts(),
        vec![
            "Apples (Quantity: 5, Price: $1.5)",
            "Bananas (Quantity: 3, Price: $0.75)",
            "Milk (Quantity: 2, Price: $2.99)",
            "Bread (Quantity: 1, Price: $3.49)",
            "Total Items: 4",
        ]
    );
    // One pass per seeded item plus the initial render.
    assert_eq!(controller.render_passes(), 5);
}

#[test]
fn removing_bananas_keeps_remaining_order() {
    let mut controller = seeded();
    let bananas = controller.list().id_at(1).expect("bananas present");
    assert_eq!(
        controller.list().get(bananas).map(|item| item.name.as_str()),
        Some("Bananas")
    );

    let removed = controller.remove_item(bananas).expect("remove");
    assert_eq!(removed, Some(LineItem::new("Bananas", 3.0, 0.75)));
    assert_eq!(
        controller.sink().texts(),
        vec![
            "Apples (Quantity: 5, Price: $1.5)",
            "Milk (Quantity: 2, Price: $2.99)",
            "Bread (Quantity: 1, Price: $3.49)",
            "Total Items: 3",
        ]
    );
}

#[test]
fn removing_by_value_matches_removing_by_identity() {
    let mut controller = seeded();
    controller
        .remove_matching(&LineItem::new("Bananas", 3.0, 0.75))
        .expect("remove matching");

    assert_eq!(controller.list().total_items(), 3);
    assert_eq!(controller.sink().texts().last(), Some(&"Total Items: 3"));
}

#[test]
fn submitting_form_appends_row_and_clears_fields() {
    let mut controller = seeded();
    let mut form = AddItemForm::new("Eggs", "12", "4.5");

    form.submit(&mut controller).expect("submit");

    let texts = controller.sink().texts();
    assert_eq!(texts.len(), 6);
    assert_eq!(texts[4], "Eggs (Quantity: 12, Price: $4.5)");
    assert_eq!(texts[5], "Total Items: 5");
    assert_eq!(form, AddItemForm::default());
}

#[test]
fn clear_leaves_only_zero_summary() {
    let mut controller = seeded();
    controller.clear_list().expect("clear");

    assert_eq!(controller.list().total_items(), 0);
    assert_eq!(controller.sink().texts(), vec!["Total Items: 0"]);
}

#[test]
fn bootstrap_without_samples_renders_empty_list_once() {
    let config = ShoppingListConfig::default().with_sample_items(false);
    let controller = bootstrap(MemorySink::new(), &config).expect("bootstrap");

    assert_eq!(controller.render_passes(), 1);
    assert_eq!(controller.sink().texts(), vec!["Total Items: 0"]);
}

#[test]
fn removing_absent_item_changes_nothing_but_redraws() {
    let mut controller = seeded();
    let before = controller.sink().clone();
    let passes = controller.render_passes();

    let removed = controller
        .remove_matching(&LineItem::new("Caviar", 1.0, 99.0))
        .expect("remove missing");

    assert!(removed.is_none());
    assert_eq!(controller.list().total_items(), 4);
    assert_eq!(controller.sink().rows(), before.rows());
    assert_eq!(controller.render_passes(), passes + 1);
}
